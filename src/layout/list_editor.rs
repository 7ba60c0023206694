// src/layout/list_editor.rs
//! Ordered child-list editing shared by tabs, boxes, rows and columns.
//!
//! Every operation takes the current list by reference and returns a new list;
//! the caller folds it into a new parent value and passes that upwards.

use std::marker::PhantomData;

use super::definitions::{LayoutBox, LayoutColumn, LayoutNode, LayoutRow, LayoutTab, NodeId};
use super::errors::LayoutError;
use super::language::LanguageTag;

pub struct ListEditor<T>(PhantomData<T>);

pub type TabListEditor = ListEditor<LayoutTab>;
pub type BoxListEditor = ListEditor<LayoutBox>;
pub type RowListEditor = ListEditor<LayoutRow>;
pub type ColumnListEditor = ListEditor<LayoutColumn>;

impl<T: LayoutNode> ListEditor<T> {
    /// Appends a default child.
    pub fn add(list: &[T], language: LanguageTag) -> Vec<T> {
        let mut next = Vec::with_capacity(list.len() + 1);
        next.extend_from_slice(list);
        next.push(T::new_default(language));
        next
    }

    /// Replaces the child at `index` with a fully formed value.
    pub fn update(list: &[T], index: usize, value: T) -> Result<Vec<T>, LayoutError> {
        Self::check_index(list, index)?;
        let mut next = list.to_vec();
        next[index] = value;
        Ok(next)
    }

    /// Removes the child at `index`, keeping the order of the rest.
    pub fn remove(list: &[T], index: usize) -> Result<Vec<T>, LayoutError> {
        Self::check_index(list, index)?;
        Ok(list
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, node)| node.clone())
            .collect())
    }

    /// Moves one element from `from` to `to`, shifting the ones in between.
    /// Returns `None` when either index is outside the list.
    pub fn reorder(list: &[T], from: usize, to: usize) -> Option<Vec<T>> {
        if from >= list.len() || to >= list.len() {
            return None;
        }
        let mut next = list.to_vec();
        let moved = next.remove(from);
        next.insert(to, moved);
        Some(next)
    }

    pub fn position(list: &[T], id: NodeId) -> Option<usize> {
        list.iter().position(|node| node.node_id() == id)
    }

    fn check_index(list: &[T], index: usize) -> Result<(), LayoutError> {
        if index < list.len() {
            Ok(())
        } else {
            Err(LayoutError::IndexOutOfRange {
                kind: T::KIND,
                index,
                len: list.len(),
            })
        }
    }
}

/// One edit produced by a list editor in a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEdit<T> {
    Add,
    Update(usize, T),
    Remove(usize),
}

impl<T: LayoutNode> ListEdit<T> {
    pub fn apply(self, list: &[T], language: LanguageTag) -> Result<Vec<T>, LayoutError> {
        match self {
            ListEdit::Add => Ok(ListEditor::add(list, language)),
            ListEdit::Update(index, value) => ListEditor::update(list, index, value),
            ListEdit::Remove(index) => ListEditor::remove(list, index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(count: usize) -> Vec<LayoutRow> {
        (0..count)
            .map(|i| {
                let mut row = LayoutRow::new_default(LanguageTag::PtBr);
                row.priority = i as i64;
                row
            })
            .collect()
    }

    fn ids<T: LayoutNode>(list: &[T]) -> Vec<NodeId> {
        list.iter().map(|n| n.node_id()).collect()
    }

    #[test]
    fn test_reorder_moves_single_element() {
        let list = rows(4);
        let (a, b, c, d) = (list[0].node_id, list[1].node_id, list[2].node_id, list[3].node_id);
        let moved = RowListEditor::reorder(&list, 0, 2).unwrap();
        assert_eq!(ids(&moved), vec![b, c, a, d]);
        assert_eq!(moved.len(), list.len());

        let moved_back = RowListEditor::reorder(&moved, 2, 0).unwrap();
        assert_eq!(ids(&moved_back), ids(&list));

        let to_end = RowListEditor::reorder(&list, 1, 3).unwrap();
        assert_eq!(ids(&to_end), vec![a, c, d, b]);
    }

    #[test]
    fn test_reorder_out_of_range_is_none() {
        let list = rows(2);
        assert!(RowListEditor::reorder(&list, 2, 0).is_none());
        assert!(RowListEditor::reorder(&list, 0, 5).is_none());
        assert!(RowListEditor::reorder(&[], 0, 0).is_none());
    }

    #[test]
    fn test_add_then_remove_restores_list() {
        let tabs = vec![
            LayoutTab::new_default(LanguageTag::EnUs),
            LayoutTab::new_default(LanguageTag::EnUs),
        ];
        let added = TabListEditor::add(&tabs, LanguageTag::EnUs);
        assert_eq!(added.len(), 3);
        assert_eq!(added[2].name.get(LanguageTag::EnUs), "New Tab");
        let removed = TabListEditor::remove(&added, 2).unwrap();
        assert_eq!(removed, tabs);

        let columns = vec![LayoutColumn::new_default(LanguageTag::PtBr)];
        let added = ColumnListEditor::add(&columns, LanguageTag::PtBr);
        assert_eq!(ColumnListEditor::remove(&added, 1).unwrap(), columns);

        let boxes: Vec<LayoutBox> = Vec::new();
        let added = BoxListEditor::add(&boxes, LanguageTag::PtBr);
        assert!(BoxListEditor::remove(&added, 0).unwrap().is_empty());
    }

    #[test]
    fn test_remove_keeps_sibling_order() {
        let list = rows(4);
        let removed = RowListEditor::remove(&list, 1).unwrap();
        assert_eq!(
            ids(&removed),
            vec![list[0].node_id, list[2].node_id, list[3].node_id]
        );
    }

    #[test]
    fn test_update_replaces_exactly_one() {
        let list = rows(3);
        let mut replacement = list[1].clone();
        replacement.priority = 99;
        let updated = RowListEditor::update(&list, 1, replacement.clone()).unwrap();
        assert_eq!(updated[0], list[0]);
        assert_eq!(updated[1], replacement);
        assert_eq!(updated[2], list[2]);
    }

    #[test]
    fn test_out_of_range_update_and_remove() {
        let list = rows(1);
        let err = RowListEditor::update(&list, 3, list[0].clone()).unwrap_err();
        assert_eq!(err, LayoutError::IndexOutOfRange { kind: "Row", index: 3, len: 1 });
        assert!(RowListEditor::remove(&list, 1).is_err());
    }

    #[test]
    fn test_position_by_id() {
        let list = rows(3);
        assert_eq!(RowListEditor::position(&list, list[2].node_id), Some(2));
        assert_eq!(RowListEditor::position(&list, NodeId::fresh()), None);
    }

    #[test]
    fn test_list_edit_apply() {
        let list = rows(2);
        let added = ListEdit::Add.apply(&list, LanguageTag::PtBr).unwrap();
        assert_eq!(added.len(), 3);
        let removed = ListEdit::Remove(0).apply(&list, LanguageTag::PtBr).unwrap();
        assert_eq!(removed, vec![list[1].clone()]);
    }
}
