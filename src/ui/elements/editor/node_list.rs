// src/ui/elements/editor/node_list.rs
use bevy::prelude::*;
use bevy_egui::egui::{self, Pos2};

use super::state::EditorWindowState;
use crate::layout::definitions::{LayoutNode, NodeId};
use crate::layout::events::RequestReorderRow;
use crate::layout::field_catalog::FieldCatalog;
use crate::layout::language::LanguageTag;
use crate::layout::list_editor::ListEdit;

/// Everything a node editor needs besides the node itself.
pub struct EditorContext<'a> {
    pub state: &'a mut EditorWindowState,
    pub language: LanguageTag,
    pub catalog: &'a FieldCatalog,
    pub pointer_pos: Option<Pos2>,
    pub primary_released: bool,
    // Set once a row list consumed this frame's release.
    pub drop_handled: bool,
    pub reorder_requests: Vec<RequestReorderRow>,
}

/// What happened to one list item this frame.
pub enum ItemOutcome<T> {
    Unchanged,
    Replace(T),
    Remove,
}

/// Draws `list` through `show_item` followed by an add button, and returns the
/// new list when one of them produced an edit.
pub fn show_node_list<T, F>(
    ui: &mut egui::Ui,
    editor: &mut EditorContext,
    list: &[T],
    add_label: &str,
    mut show_item: F,
) -> Option<Vec<T>>
where
    T: LayoutNode,
    F: FnMut(&mut egui::Ui, &mut EditorContext, usize, &T) -> ItemOutcome<T>,
{
    let mut edit: Option<ListEdit<T>> = None;

    for (index, node) in list.iter().enumerate() {
        ui.push_id(node.node_id(), |ui| match show_item(ui, editor, index, node) {
            ItemOutcome::Unchanged => {}
            ItemOutcome::Replace(value) => edit = Some(ListEdit::Update(index, value)),
            ItemOutcome::Remove => edit = Some(ListEdit::Remove(index)),
        });
    }

    if ui.button(add_label).clicked() {
        edit = Some(ListEdit::Add);
    }

    let edit = edit?;
    match edit.apply(list, editor.language) {
        Ok(next) => Some(next),
        Err(e) => {
            warn!("Ignoring {} edit: {}", T::KIND, e);
            None
        }
    }
}

/// Arrow button flipping the expanded state of `id`. Returns the new state.
pub fn expand_toggle(ui: &mut egui::Ui, state: &mut EditorWindowState, id: NodeId) -> bool {
    let expanded = state.is_expanded(id);
    let icon = if expanded { "⏷" } else { "⏵" };
    if ui
        .small_button(icon)
        .on_hover_text(if expanded { "Collapse" } else { "Expand" })
        .clicked()
    {
        state.toggle_expanded(id);
    }
    state.is_expanded(id)
}

pub fn remove_button(ui: &mut egui::Ui, kind: &str) -> bool {
    ui.small_button("🗑")
        .on_hover_text(format!("Remove {}", kind))
        .clicked()
}

/// Integer input for size and priority. Typed text that is not a whole number
/// is rejected and the previous value stays.
pub fn integer_input(ui: &mut egui::Ui, label: &str, value: i64) -> Option<i64> {
    let mut edited = value;
    ui.label(label);
    let response = ui.add(
        egui::DragValue::new(&mut edited)
            .speed(0.1)
            .custom_parser(|text| parse_numeric_input(text).map(|v| v as f64)),
    );
    (response.changed() && edited != value).then_some(edited)
}

/// Parser behind [`integer_input`]'s typed text.
///
/// Accepts integers and integral decimals ("4", " 12 ", "3.0"). Anything else,
/// including empty input and `NaN`/infinity, yields `None` and the widget keeps
/// its previous value, so a non-number never reaches the document.
fn parse_numeric_input(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }
    let float = trimmed.parse::<f64>().ok()?;
    if float.is_finite() && float.fract() == 0.0 && float.abs() < i64::MAX as f64 {
        Some(float as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_input_accepts_integers() {
        assert_eq!(parse_numeric_input("4"), Some(4));
        assert_eq!(parse_numeric_input(" 12 "), Some(12));
        assert_eq!(parse_numeric_input("-1"), Some(-1));
        assert_eq!(parse_numeric_input("3.0"), Some(3));
    }

    #[test]
    fn test_parse_numeric_input_rejects_non_numbers() {
        assert_eq!(parse_numeric_input(""), None);
        assert_eq!(parse_numeric_input("   "), None);
        assert_eq!(parse_numeric_input("abc"), None);
        assert_eq!(parse_numeric_input("NaN"), None);
        assert_eq!(parse_numeric_input("inf"), None);
        assert_eq!(parse_numeric_input("2.5"), None);
    }
}
