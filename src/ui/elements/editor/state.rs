// src/ui/elements/editor/state.rs
use bevy::prelude::Resource;
use std::collections::HashSet;

use crate::layout::definitions::NodeId;
use crate::layout::events::RowDragSession;

/// Presentation state of the editor window. Nothing in here is part of the
/// document or written to disk.
#[derive(Resource, Default, Debug, Clone)]
pub struct EditorWindowState {
    // Tabs, boxes and rows whose children are shown; everything starts collapsed.
    pub expanded: HashSet<NodeId>,
    pub row_drag: Option<RowDragSession>,
    pub show_json_preview: bool,
    // (store revision, pretty text) of the active layout
    pub preview_cache: Option<(u64, String)>,
}

impl EditorWindowState {
    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.expanded.contains(&id)
    }

    pub fn toggle_expanded(&mut self, id: NodeId) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    /// Node ids are regenerated on every load, so anything keyed by them goes.
    pub fn clear_for_new_document(&mut self) {
        self.expanded.clear();
        self.row_drag = None;
        self.preview_cache = None;
    }
}
