// src/ui/elements/mod.rs

// Layout tree editor
pub mod editor;
pub mod json_preview;
pub mod popups;
pub mod top_panel;
