// src/ui/elements/editor/mod.rs

pub mod state;
pub mod main_editor; // orchestrates the panels below

// One editor per nesting level, all built on node_list
pub mod node_list;
pub mod tab_editor;
pub mod box_editor;
pub mod row_editor;
pub mod column_editor;
pub mod drag;

pub use main_editor::layout_editor_ui;
pub use state::EditorWindowState;
