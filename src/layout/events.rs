// src/layout/events.rs
use bevy::prelude::Event;
use std::path::PathBuf;

use super::definitions::{Layout, NodeId};
use super::language::LanguageTag;

/// Sent when the user clicks "Load JSON". Handled by `systems::io::load`.
#[derive(Event, Debug, Clone)]
pub struct RequestInitiateFileUpload {
    /// Remap target for the file that will be picked.
    pub language: LanguageTag,
}

/// A file was picked; read it in the background.
#[derive(Event, Debug, Clone)]
pub struct RequestProcessUpload {
    pub path: PathBuf,
    pub language: LanguageTag,
}

/// Raw contents of a picked file, delivered back to the main thread.
#[derive(Event, Debug, Clone)]
pub struct LayoutFileRead {
    pub generation: u64,
    pub path: PathBuf,
    pub language: LanguageTag,
    pub contents: Result<String, String>,
}

/// A new document replaced the previous one in the store.
#[derive(Event, Debug, Clone)]
pub struct LayoutDocumentLoaded {
    pub source_name: String,
}

/// Sent when the user clicks "Download JSON".
#[derive(Event, Debug, Clone)]
pub struct RequestExportLayout;

/// Whole-layout replacement produced by the editor tree for one edit.
#[derive(Event, Debug, Clone)]
pub struct RequestReplaceActiveLayout {
    pub layout: Layout,
}

/// Row picked up by the drag handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowDragSession {
    pub tab_id: NodeId,
    pub box_id: NodeId,
    pub row_id: NodeId,
}

/// Where a dragged row was released: final index inside the row list of the
/// `(tab_id, box_id)` box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowDropTarget {
    pub tab_id: NodeId,
    pub box_id: NodeId,
    pub index: usize,
}

/// End of a row drag. `destination` is `None` when the row was dropped outside
/// every row list.
#[derive(Event, Debug, Clone)]
pub struct RequestReorderRow {
    pub source: RowDragSession,
    pub destination: Option<RowDropTarget>,
}

/// Status reported back to the UI. `blocking` messages are shown as an alert
/// that has to be dismissed.
#[derive(Event, Debug, Clone)]
pub struct LayoutOperationFeedback {
    pub message: String,
    pub is_error: bool,
    pub blocking: bool,
}

impl LayoutOperationFeedback {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
            blocking: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
            blocking: false,
        }
    }

    pub fn alert(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
            blocking: true,
        }
    }
}
