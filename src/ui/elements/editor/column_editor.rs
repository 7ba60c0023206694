// src/ui/elements/editor/column_editor.rs
use bevy_egui::egui;

use super::node_list::{integer_input, remove_button, EditorContext, ItemOutcome};
use crate::layout::definitions::LayoutColumn;
use crate::layout::field_catalog::FieldCatalog;
use crate::layout::language::LanguageTag;

const NO_FIELD_CAPTION: &str = "Select Field";

/// Text shown in the field chooser for `field_name`. Names not in the catalog
/// are shown as-is so a loaded value is never hidden.
pub fn field_caption(catalog: &FieldCatalog, language: LanguageTag, field_name: &str) -> String {
    if field_name.is_empty() {
        return NO_FIELD_CAPTION.to_string();
    }
    catalog
        .find(field_name)
        .map(|field| field.caption(language).to_string())
        .unwrap_or_else(|| field_name.to_string())
}

pub fn show_column(
    ui: &mut egui::Ui,
    editor: &mut EditorContext,
    index: usize,
    column: &LayoutColumn,
) -> ItemOutcome<LayoutColumn> {
    let mut outcome = ItemOutcome::Unchanged;

    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.strong(format!("Column {}", index + 1));
                if remove_button(ui, "column") {
                    outcome = ItemOutcome::Remove;
                }
            });

            let mut field_name = column.object_field_name.clone();
            egui::ComboBox::from_id_salt("field")
                .selected_text(field_caption(editor.catalog, editor.language, &field_name))
                .width(180.0)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut field_name, String::new(), NO_FIELD_CAPTION);
                    for field in editor.catalog.fields() {
                        ui.selectable_value(
                            &mut field_name,
                            field.name.clone(),
                            field.caption(editor.language),
                        );
                    }
                });
            if field_name != column.object_field_name {
                outcome = ItemOutcome::Replace(LayoutColumn {
                    object_field_name: field_name,
                    ..column.clone()
                });
            }

            ui.horizontal(|ui| {
                if let Some(size) = integer_input(ui, "Size", column.size) {
                    outcome = ItemOutcome::Replace(LayoutColumn {
                        size,
                        ..column.clone()
                    });
                }
                if let Some(priority) = integer_input(ui, "Priority", column.priority) {
                    outcome = ItemOutcome::Replace(LayoutColumn {
                        priority,
                        ..column.clone()
                    });
                }
            });
        });
    });

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> FieldCatalog {
        let root = json!({
            "objectFields": [
                { "name": "code", "system": false, "label": { "en_US": "Code" } },
                { "name": "notes", "system": false }
            ]
        });
        FieldCatalog::from_document(root.as_object().unwrap())
    }

    #[test]
    fn test_field_caption_prefers_label() {
        assert_eq!(field_caption(&catalog(), LanguageTag::EnUs, "code"), "Code");
        assert_eq!(field_caption(&catalog(), LanguageTag::EnUs, "notes"), "notes");
    }

    #[test]
    fn test_field_caption_empty_and_unknown() {
        assert_eq!(field_caption(&catalog(), LanguageTag::EnUs, ""), NO_FIELD_CAPTION);
        assert_eq!(field_caption(&catalog(), LanguageTag::EnUs, "legacy"), "legacy");
    }
}
