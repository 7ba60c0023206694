// src/ui/elements/editor/row_editor.rs
use bevy_egui::egui::{self, Sense};

use super::column_editor::show_column;
use super::drag::{begin_row_drag, row_drop_zone, show_drag_preview, RowSlot};
use super::node_list::{
    expand_toggle, integer_input, remove_button, show_node_list, EditorContext, ItemOutcome,
};
use crate::layout::definitions::{LayoutRow, NodeId};
use crate::layout::events::RowDragSession;

pub fn show_row(
    ui: &mut egui::Ui,
    editor: &mut EditorContext,
    tab_id: NodeId,
    box_id: NodeId,
    index: usize,
    row: &LayoutRow,
    source_index: Option<usize>,
) -> ItemOutcome<LayoutRow> {
    let mut outcome = ItemOutcome::Unchanged;
    let label = format!("Row {}", index + 1);
    let is_dragged = editor.state.row_drag.map(|s| s.row_id) == Some(row.node_id);

    let group = ui.group(|ui| {
        let expanded = ui
            .horizontal(|ui| {
                let handle = ui
                    .add(egui::Label::new("☰").sense(Sense::drag()))
                    .on_hover_text("Drag to reorder rows in this box");
                begin_row_drag(
                    &handle,
                    editor,
                    RowDragSession {
                        tab_id,
                        box_id,
                        row_id: row.node_id,
                    },
                );

                if is_dragged {
                    ui.weak(&label);
                } else {
                    ui.strong(&label);
                }
                if let Some(priority) = integer_input(ui, "Priority", row.priority) {
                    outcome = ItemOutcome::Replace(LayoutRow {
                        priority,
                        ..row.clone()
                    });
                }
                let expanded = expand_toggle(ui, editor.state, row.node_id);
                if remove_button(ui, "row") {
                    outcome = ItemOutcome::Remove;
                }
                expanded
            })
            .inner;

        if !expanded {
            ui.weak(format!("{} column(s)", row.object_layout_columns.len()));
            return;
        }

        ui.horizontal_wrapped(|ui| {
            if let Some(columns) = show_node_list(
                ui,
                editor,
                &row.object_layout_columns,
                "➕ Column",
                show_column,
            ) {
                outcome = ItemOutcome::Replace(LayoutRow {
                    object_layout_columns: columns,
                    ..row.clone()
                });
            }
        });
    });

    if is_dragged {
        show_drag_preview(ui.ctx(), editor, &label);
    }

    row_drop_zone(
        ui,
        editor,
        RowSlot {
            tab_id,
            box_id,
            index,
            rect: group.response.rect,
        },
        source_index,
    );

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::definitions::{LayoutColumn, LayoutNode};
    use crate::layout::field_catalog::FieldCatalog;
    use crate::layout::language::LanguageTag;
    use crate::ui::elements::editor::state::EditorWindowState;

    fn count_text(shape: &egui::Shape, needle: &str) -> usize {
        match shape {
            egui::Shape::Text(text) => usize::from(text.galley.text() == needle),
            egui::Shape::Vec(shapes) => shapes.iter().map(|s| count_text(s, needle)).sum(),
            _ => 0,
        }
    }

    // Renders one row in a headless egui frame and counts the field choosers
    // painted for its columns.
    fn render_row(state: &mut EditorWindowState, row: &LayoutRow) -> usize {
        let catalog = FieldCatalog::default();
        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let mut editor = EditorContext {
                    state: &mut *state,
                    language: LanguageTag::EnUs,
                    catalog: &catalog,
                    pointer_pos: None,
                    primary_released: false,
                    drop_handled: false,
                    reorder_requests: Vec::new(),
                };
                show_row(ui, &mut editor, NodeId::fresh(), NodeId::fresh(), 0, row, None);
            });
        });
        output
            .shapes
            .iter()
            .map(|clipped| count_text(&clipped.shape, "Select Field"))
            .sum()
    }

    #[test]
    fn test_row_columns_hidden_until_expanded() {
        let row = LayoutRow {
            object_layout_columns: vec![
                LayoutColumn::new_default(LanguageTag::EnUs),
                LayoutColumn::new_default(LanguageTag::EnUs),
            ],
            ..LayoutRow::new_default(LanguageTag::EnUs)
        };
        let mut state = EditorWindowState::default();
        assert_eq!(render_row(&mut state, &row), 0);

        state.toggle_expanded(row.node_id);
        assert_eq!(render_row(&mut state, &row), 2);
    }
}
