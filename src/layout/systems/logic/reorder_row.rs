// src/layout/systems/logic/reorder_row.rs
use bevy::prelude::*;

use crate::layout::{
    definitions::{Layout, LayoutBox, LayoutTab},
    events::{LayoutOperationFeedback, RequestReorderRow, RowDragSession, RowDropTarget},
    list_editor::{BoxListEditor, RowListEditor, TabListEditor},
    resources::LayoutStore,
};

/// Applies a finished row drag.
///
/// Source and destination are resolved by node id against the current layout.
/// Drops without a destination, drops into another box, and drags whose nodes
/// no longer exist are ignored without feedback.
pub fn handle_reorder_row_request(
    mut events: EventReader<RequestReorderRow>,
    mut store: ResMut<LayoutStore>,
    mut feedback_writer: EventWriter<LayoutOperationFeedback>,
) {
    for event in events.read() {
        let Some(layout) = store.active_layout() else {
            trace!("Row drop ignored: no layout loaded.");
            continue;
        };
        let Some((new_layout, from, to)) =
            reorder_rows_in_layout(layout, &event.source, event.destination.as_ref())
        else {
            trace!(
                "Row drop ignored (source {:?}, destination {:?}).",
                event.source,
                event.destination
            );
            continue;
        };

        match store.replace_active_layout(new_layout) {
            Ok(()) => {
                info!("Reordered row from index {} to {}.", from, to);
            }
            Err(e) => {
                let msg = format!("Row reorder failed: {}", e);
                error!("{}", msg);
                feedback_writer.write(LayoutOperationFeedback::error(msg));
            }
        }
    }
}

/// Builds the layout that results from moving the dragged row, folding the new
/// row list into a new box, tab list and layout. Returns the new layout and the
/// applied `(from, to)` indices, or `None` when the drop is a no-op.
pub fn reorder_rows_in_layout(
    layout: &Layout,
    source: &RowDragSession,
    destination: Option<&RowDropTarget>,
) -> Option<(Layout, usize, usize)> {
    let destination = destination?;
    if source.tab_id != destination.tab_id || source.box_id != destination.box_id {
        return None;
    }

    let tabs = &layout.object_layout_tabs;
    let tab_index = TabListEditor::position(tabs, source.tab_id)?;
    let tab = &tabs[tab_index];
    let box_index = BoxListEditor::position(&tab.object_layout_boxes, source.box_id)?;
    let layout_box = &tab.object_layout_boxes[box_index];
    let rows = &layout_box.object_layout_rows;
    let from = RowListEditor::position(rows, source.row_id)?;
    let to = destination.index;
    if from == to {
        return None;
    }

    let new_rows = RowListEditor::reorder(rows, from, to)?;
    let new_box = LayoutBox {
        object_layout_rows: new_rows,
        ..layout_box.clone()
    };
    let new_boxes = BoxListEditor::update(&tab.object_layout_boxes, box_index, new_box).ok()?;
    let new_tab = LayoutTab {
        object_layout_boxes: new_boxes,
        ..tab.clone()
    };
    let new_tabs = TabListEditor::update(tabs, tab_index, new_tab).ok()?;
    Some((
        Layout {
            object_layout_tabs: new_tabs,
            ..layout.clone()
        },
        from,
        to,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::definitions::{LayoutNode, LayoutRow, NodeId};
    use crate::layout::language::LanguageTag;

    fn box_with_rows(count: usize) -> LayoutBox {
        let mut layout_box = LayoutBox::new_default(LanguageTag::PtBr);
        layout_box.object_layout_rows = (0..count)
            .map(|i| {
                let mut row = LayoutRow::new_default(LanguageTag::PtBr);
                row.priority = i as i64;
                row
            })
            .collect();
        layout_box
    }

    fn sample_layout() -> Layout {
        let mut tab_a = LayoutTab::new_default(LanguageTag::PtBr);
        tab_a.object_layout_boxes = vec![box_with_rows(4), box_with_rows(2)];
        let mut tab_b = LayoutTab::new_default(LanguageTag::PtBr);
        tab_b.object_layout_boxes = vec![box_with_rows(3)];
        Layout {
            object_layout_tabs: vec![tab_a, tab_b],
            ..Default::default()
        }
    }

    fn row_ids(layout_box: &LayoutBox) -> Vec<NodeId> {
        layout_box.object_layout_rows.iter().map(|r| r.node_id).collect()
    }

    fn session(layout: &Layout, tab: usize, bx: usize, row: usize) -> RowDragSession {
        let t = &layout.object_layout_tabs[tab];
        let b = &t.object_layout_boxes[bx];
        RowDragSession {
            tab_id: t.node_id,
            box_id: b.node_id,
            row_id: b.object_layout_rows[row].node_id,
        }
    }

    fn target(layout: &Layout, tab: usize, bx: usize, index: usize) -> RowDropTarget {
        let t = &layout.object_layout_tabs[tab];
        RowDropTarget {
            tab_id: t.node_id,
            box_id: t.object_layout_boxes[bx].node_id,
            index,
        }
    }

    #[test]
    fn test_move_within_box() {
        let layout = sample_layout();
        let before = row_ids(&layout.object_layout_tabs[0].object_layout_boxes[0]);
        let (after, from, to) = reorder_rows_in_layout(
            &layout,
            &session(&layout, 0, 0, 0),
            Some(&target(&layout, 0, 0, 2)),
        )
        .unwrap();
        assert_eq!((from, to), (0, 2));
        let moved = row_ids(&after.object_layout_tabs[0].object_layout_boxes[0]);
        assert_eq!(moved, vec![before[1], before[2], before[0], before[3]]);

        // Everything outside the affected box is untouched.
        assert_eq!(
            after.object_layout_tabs[0].object_layout_boxes[1],
            layout.object_layout_tabs[0].object_layout_boxes[1]
        );
        assert_eq!(after.object_layout_tabs[1], layout.object_layout_tabs[1]);
        assert_eq!(
            after.object_layout_tabs[0].node_id,
            layout.object_layout_tabs[0].node_id
        );
    }

    #[test]
    fn test_cross_box_and_cross_tab_drops_are_ignored() {
        let layout = sample_layout();
        assert!(reorder_rows_in_layout(
            &layout,
            &session(&layout, 0, 0, 1),
            Some(&target(&layout, 0, 1, 0)),
        )
        .is_none());
        assert!(reorder_rows_in_layout(
            &layout,
            &session(&layout, 0, 0, 1),
            Some(&target(&layout, 1, 0, 0)),
        )
        .is_none());
    }

    #[test]
    fn test_drop_without_destination_is_ignored() {
        let layout = sample_layout();
        assert!(reorder_rows_in_layout(&layout, &session(&layout, 0, 0, 1), None).is_none());
    }

    #[test]
    fn test_stale_ids_and_bad_indices_are_ignored() {
        let layout = sample_layout();
        let mut stale = session(&layout, 0, 0, 1);
        stale.row_id = NodeId::fresh();
        assert!(reorder_rows_in_layout(&layout, &stale, Some(&target(&layout, 0, 0, 0))).is_none());

        assert!(reorder_rows_in_layout(
            &layout,
            &session(&layout, 0, 0, 1),
            Some(&target(&layout, 0, 0, 9)),
        )
        .is_none());

        assert!(reorder_rows_in_layout(
            &layout,
            &session(&layout, 0, 0, 1),
            Some(&target(&layout, 0, 0, 1)),
        )
        .is_none());
    }

    #[test]
    fn test_row_identity_follows_the_row_after_earlier_edits() {
        // The row is found by id even if its index changed since pickup.
        let mut layout = sample_layout();
        let drag = session(&layout, 0, 0, 3);
        let rows = &mut layout.object_layout_tabs[0].object_layout_boxes[0].object_layout_rows;
        *rows = RowListEditor::remove(rows, 0).unwrap();
        let (after, from, to) =
            reorder_rows_in_layout(&layout, &drag, Some(&target(&layout, 0, 0, 0))).unwrap();
        assert_eq!((from, to), (2, 0));
        assert_eq!(
            after.object_layout_tabs[0].object_layout_boxes[0].object_layout_rows[0].node_id,
            drag.row_id
        );
    }
}
