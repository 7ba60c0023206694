// src/ui/elements/json_preview.rs
use bevy::prelude::*;
use bevy_egui::egui;

use crate::layout::resources::LayoutStore;
use crate::ui::elements::editor::state::EditorWindowState;

/// Read-only pretty JSON of the active layout. The text is rebuilt only when
/// the store revision moves.
pub fn show_json_preview(ui: &mut egui::Ui, state: &mut EditorWindowState, store: &LayoutStore) {
    let revision = store.revision();
    let stale = state
        .preview_cache
        .as_ref()
        .is_none_or(|(cached, _)| *cached != revision);
    if stale {
        let text = match store.document().map(|doc| doc.active_layout_json()) {
            Some(Ok(text)) => text,
            Some(Err(e)) => {
                warn!("JSON preview unavailable: {}", e);
                format!("<{}>", e)
            }
            None => String::new(),
        };
        state.preview_cache = Some((revision, text));
    }

    ui.heading("Active layout");
    ui.separator();
    let Some((_, text)) = state.preview_cache.as_ref() else {
        return;
    };
    if text.is_empty() {
        ui.weak("Load a layout to see its JSON.");
        return;
    }
    egui::ScrollArea::both()
        .id_salt("json_preview_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let mut view = text.as_str();
            ui.add(
                egui::TextEdit::multiline(&mut view)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(f32::INFINITY),
            );
        });
}
