// src/ui/elements/editor/box_editor.rs
use bevy_egui::egui;

use super::node_list::{
    expand_toggle, integer_input, remove_button, show_node_list, EditorContext, ItemOutcome,
};
use super::row_editor::show_row;
use crate::layout::definitions::{LayoutBox, NodeId};
use crate::layout::list_editor::RowListEditor;

pub fn show_box(
    ui: &mut egui::Ui,
    editor: &mut EditorContext,
    tab_id: NodeId,
    layout_box: &LayoutBox,
) -> ItemOutcome<LayoutBox> {
    let mut outcome = ItemOutcome::Unchanged;

    ui.group(|ui| {
        let expanded = ui
            .horizontal(|ui| {
                let expanded = expand_toggle(ui, editor.state, layout_box.node_id);

                let mut name = layout_box.name.get(editor.language).to_string();
                ui.label("Box");
                if ui
                    .add(egui::TextEdit::singleline(&mut name).desired_width(160.0))
                    .changed()
                {
                    outcome = ItemOutcome::Replace(LayoutBox {
                        name: layout_box.name.with_text(editor.language, name),
                        ..layout_box.clone()
                    });
                }

                let mut collapsable = layout_box.collapsable;
                if ui.checkbox(&mut collapsable, "Collapsable").changed() {
                    outcome = ItemOutcome::Replace(LayoutBox {
                        collapsable,
                        ..layout_box.clone()
                    });
                }

                let mut box_type = layout_box.box_type.clone();
                ui.label("Type");
                if ui
                    .add(egui::TextEdit::singleline(&mut box_type).desired_width(80.0))
                    .changed()
                {
                    outcome = ItemOutcome::Replace(LayoutBox {
                        box_type,
                        ..layout_box.clone()
                    });
                }

                if let Some(priority) = integer_input(ui, "Priority", layout_box.priority) {
                    outcome = ItemOutcome::Replace(LayoutBox {
                        priority,
                        ..layout_box.clone()
                    });
                }
                if remove_button(ui, "box") {
                    outcome = ItemOutcome::Remove;
                }
                expanded
            })
            .inner;

        if !expanded {
            return;
        }

        let rows = &layout_box.object_layout_rows;
        let box_id = layout_box.node_id;
        // Index of the dragged row when the drag started in this box.
        let source_index = editor
            .state
            .row_drag
            .filter(|session| session.tab_id == tab_id && session.box_id == box_id)
            .and_then(|session| RowListEditor::position(rows, session.row_id));

        ui.indent("rows", |ui| {
            if let Some(next_rows) =
                show_node_list(ui, editor, rows, "➕ Row", |ui, editor, index, row| {
                    show_row(ui, editor, tab_id, box_id, index, row, source_index)
                })
            {
                outcome = ItemOutcome::Replace(LayoutBox {
                    object_layout_rows: next_rows,
                    ..layout_box.clone()
                });
            }
        });
    });

    outcome
}
