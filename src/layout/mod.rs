// src/layout/mod.rs

// --- Public Interface ---
pub mod definitions;
pub mod document;
pub mod errors;
pub mod events;
pub mod field_catalog;
pub mod language;
pub mod list_editor;
pub mod plugin;
pub mod resources;

// Systems are internal; the UI talks to them through events.
pub(crate) mod systems;

pub use plugin::LayoutPlugin;
