// src/ui/mod.rs
use bevy::prelude::*;
use bevy_egui::EguiContextPass;

pub mod elements;
pub mod systems;

use crate::layout::plugin::LayoutSystemSet;
use elements::editor::{layout_editor_ui, EditorWindowState};
use systems::{handle_ui_feedback, persist_settings_on_change, reset_editor_state_on_load};

#[derive(Resource, Default, Debug, Clone)]
pub struct UiFeedbackState {
    pub last_message: String,
    pub is_error: bool,
    /// Message of a failure that must be acknowledged before editing continues.
    pub blocking_alert: Option<String>,
}

/// Plugin for the layout editor window.
pub struct EditorUiPlugin;

impl Plugin for EditorUiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiFeedbackState>()
            .init_resource::<EditorWindowState>()
            .add_systems(
                Update,
                (
                    handle_ui_feedback,
                    reset_editor_state_on_load,
                    persist_settings_on_change,
                )
                    // Feedback and load events of this frame are already written.
                    .after(LayoutSystemSet::FileOperations),
            )
            .add_systems(EguiContextPass, layout_editor_ui);

        info!("EditorUiPlugin initialized.");
    }
}
