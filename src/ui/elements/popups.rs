// src/ui/elements/popups.rs
use bevy::prelude::*;
use bevy_egui::egui;

use crate::ui::UiFeedbackState;

/// Modal alert for failures the user has to acknowledge (unreadable or
/// malformed layout files). The rest of the window is disabled while shown.
pub fn show_blocking_alert(ctx: &egui::Context, feedback: &mut UiFeedbackState) {
    let Some(message) = feedback.blocking_alert.clone() else {
        return;
    };

    let mut ok_clicked = false;
    egui::Window::new("Could not load layout")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.colored_label(egui::Color32::LIGHT_RED, &message);
            ui.label("The current layout was left unchanged.");
            ui.separator();
            if ui.button("OK").clicked() {
                ok_clicked = true;
            }
        });

    if ok_clicked {
        debug!("Blocking alert dismissed.");
        feedback.blocking_alert = None;
    }
}
