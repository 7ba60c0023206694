// src/ui/elements/top_panel.rs
use bevy::prelude::*;
use bevy_egui::egui;

use crate::layout::events::{RequestExportLayout, RequestInitiateFileUpload};
use crate::layout::language::LanguageTag;
use crate::layout::resources::LayoutStore;
use crate::ui::elements::editor::state::EditorWindowState;

/// Language selector, load/download buttons and the loaded-document summary.
pub fn show_top_panel(
    ui: &mut egui::Ui,
    state: &mut EditorWindowState,
    store: &LayoutStore,
    language: &mut LanguageTag,
    upload_writer: &mut EventWriter<RequestInitiateFileUpload>,
    export_writer: &mut EventWriter<RequestExportLayout>,
) {
    ui.horizontal(|ui| {
        ui.label("Language:");
        egui::ComboBox::from_id_salt("ui_language")
            .selected_text(language.display_name())
            .show_ui(ui, |ui| {
                for option in LanguageTag::ALL {
                    ui.selectable_value(&mut *language, option, option.display_name());
                }
            });

        if ui
            .button("📂 Load JSON")
            .on_hover_text(format!(
                "Pick a layout file; '{}' labels are loaded as '{}'",
                LanguageTag::SOURCE,
                language
            ))
            .clicked()
        {
            upload_writer.write(RequestInitiateFileUpload {
                language: *language,
            });
        }

        if ui
            .add_enabled(store.is_loaded(), egui::Button::new("💾 Download JSON"))
            .clicked()
        {
            export_writer.write(RequestExportLayout);
        }

        ui.toggle_value(&mut state.show_json_preview, "{ } JSON");

        ui.separator();
        match (store.source_name(), store.active_layout()) {
            (Some(name), Some(layout)) => {
                ui.label(format!("{}: {}", name, layout.counts()));
                if let Some(loaded) = store.loaded_language() {
                    if loaded != *language {
                        ui.weak(format!("(labels loaded as {})", loaded));
                    }
                }
            }
            _ => {
                ui.weak("No layout loaded.");
            }
        }
    });
}
