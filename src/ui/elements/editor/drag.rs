// src/ui/elements/editor/drag.rs
use bevy::prelude::*;
use bevy_egui::egui::{self, Color32, Order, Rect, Stroke};

use super::node_list::EditorContext;
use crate::layout::definitions::NodeId;
use crate::layout::events::{RequestReorderRow, RowDragSession, RowDropTarget};

/// Final index of a moved row given the insertion slot under the pointer
/// (`0..=len`). `source` is the row's current index when it comes from the
/// same list; removing it first shifts later slots down by one.
pub fn destination_index(source: Option<usize>, slot: usize) -> usize {
    match source {
        Some(source_idx) if source_idx < slot => slot.saturating_sub(1),
        _ => slot,
    }
}

/// One rendered row, as a drop target.
pub struct RowSlot {
    pub tab_id: NodeId,
    pub box_id: NodeId,
    pub index: usize,
    pub rect: Rect,
}

/// Starts a drag from a row's handle.
pub fn begin_row_drag(
    handle: &egui::Response,
    editor: &mut EditorContext,
    session: RowDragSession,
) {
    if handle.drag_started_by(egui::PointerButton::Primary) && editor.state.row_drag.is_none() {
        info!("Row drag started: row {} in box {}", session.row_id, session.box_id);
        editor.state.row_drag = Some(session);
    }
}

/// Floating label following the pointer while `session` is dragged.
pub fn show_drag_preview(ctx: &egui::Context, editor: &EditorContext, label: &str) {
    let (Some(session), Some(pos)) = (editor.state.row_drag, editor.pointer_pos) else {
        return;
    };
    egui::Area::new(egui::Id::new("row_drag_preview").with(session.row_id))
        .order(Order::Tooltip)
        .current_pos(pos)
        .movable(false)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.label(format!("Moving: {}", label));
            });
        });
}

/// Draws the insertion cue over `slot` and turns a release there into a
/// reorder request. `source_index` is the dragged row's index in this list, if
/// it belongs to it.
pub fn row_drop_zone(
    ui: &egui::Ui,
    editor: &mut EditorContext,
    slot: RowSlot,
    source_index: Option<usize>,
) {
    let Some(session) = editor.state.row_drag else {
        return;
    };
    let Some(pos) = editor.pointer_pos else {
        return;
    };
    if !slot.rect.contains(pos) {
        return;
    }

    let below = pos.y > slot.rect.center().y;
    let stroke = Stroke::new(2.0, Color32::GREEN);
    let y = if below {
        slot.rect.bottom() - stroke.width / 2.0
    } else {
        slot.rect.top() + stroke.width / 2.0
    };
    ui.painter().hline(slot.rect.x_range(), y, stroke);

    if editor.primary_released && !editor.drop_handled {
        let insert_slot = slot.index + usize::from(below);
        let index = destination_index(source_index, insert_slot);
        info!(
            "Row drop: source idx {:?}, slot {}, final idx {}",
            source_index, insert_slot, index
        );
        editor.reorder_requests.push(RequestReorderRow {
            source: session,
            destination: Some(RowDropTarget {
                tab_id: slot.tab_id,
                box_id: slot.box_id,
                index,
            }),
        });
        editor.drop_handled = true;
        editor.state.row_drag = None;
    }
}
