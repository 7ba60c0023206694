// src/ui/elements/editor/tab_editor.rs
use bevy_egui::egui;

use super::box_editor::show_box;
use super::node_list::{
    expand_toggle, integer_input, remove_button, show_node_list, EditorContext, ItemOutcome,
};
use crate::layout::definitions::LayoutTab;

pub fn show_tab(
    ui: &mut egui::Ui,
    editor: &mut EditorContext,
    _index: usize,
    tab: &LayoutTab,
) -> ItemOutcome<LayoutTab> {
    let mut outcome = ItemOutcome::Unchanged;

    ui.group(|ui| {
        let expanded = ui
            .horizontal(|ui| {
                let expanded = expand_toggle(ui, editor.state, tab.node_id);

                let mut name = tab.name.get(editor.language).to_string();
                ui.heading("Tab");
                if ui
                    .add(egui::TextEdit::singleline(&mut name).desired_width(200.0))
                    .changed()
                {
                    outcome = ItemOutcome::Replace(LayoutTab {
                        name: tab.name.with_text(editor.language, name),
                        ..tab.clone()
                    });
                }

                if let Some(priority) = integer_input(ui, "Priority", tab.priority) {
                    outcome = ItemOutcome::Replace(LayoutTab {
                        priority,
                        ..tab.clone()
                    });
                }
                if remove_button(ui, "tab") {
                    outcome = ItemOutcome::Remove;
                }
                expanded
            })
            .inner;

        if !expanded {
            return;
        }

        let tab_id = tab.node_id;
        ui.indent("boxes", |ui| {
            if let Some(boxes) = show_node_list(
                ui,
                editor,
                &tab.object_layout_boxes,
                "➕ Box",
                |ui, editor, _index, layout_box| show_box(ui, editor, tab_id, layout_box),
            ) {
                outcome = ItemOutcome::Replace(LayoutTab {
                    object_layout_boxes: boxes,
                    ..tab.clone()
                });
            }
        });
    });

    outcome
}
