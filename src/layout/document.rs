// src/layout/document.rs
use bevy::prelude::{debug, info};
use serde_json::{Map, Value};

use super::definitions::Layout;
use super::errors::{json_type_name, LayoutError};
use super::field_catalog::FieldCatalog;
use super::language::{remap_object_keys, LanguageTag};

pub const LAYOUTS_KEY: &str = "objectLayouts";

/// Full loaded document plus a typed copy of its first layout.
///
/// `root` always reflects the active layout: every replacement is written back
/// into `objectLayouts[0]` immediately, all other keys are left as loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutDocument {
    root: Map<String, Value>,
    active: Layout,
}

/// Result of a successful load: the document and the catalog derived from it.
#[derive(Debug, Clone)]
pub struct LoadedLayout {
    pub document: LayoutDocument,
    pub catalog: FieldCatalog,
    pub language: LanguageTag,
}

impl LayoutDocument {
    /// Parses raw file text, remaps `pt_BR` keys to `language` and extracts the
    /// active layout. Nothing is produced unless every step succeeds.
    pub fn load(raw: &str, language: LanguageTag) -> Result<LoadedLayout, LayoutError> {
        let trimmed = raw.trim_start_matches('\u{FEFF}');
        let value: Value =
            serde_json::from_str(trimmed).map_err(|e| LayoutError::Parse(e.to_string()))?;
        Self::from_value(value, language)
    }

    pub fn from_value(value: Value, language: LanguageTag) -> Result<LoadedLayout, LayoutError> {
        let map = match value {
            Value::Object(map) => map,
            other => return Err(LayoutError::NotAnObject(json_type_name(&other))),
        };
        let root = remap_object_keys(map, LanguageTag::SOURCE.as_str(), language.as_str());

        let first_layout = root
            .get(LAYOUTS_KEY)
            .ok_or_else(|| LayoutError::Shape(format!("missing '{}'.", LAYOUTS_KEY)))?
            .as_array()
            .ok_or_else(|| LayoutError::Shape(format!("'{}' is not an array.", LAYOUTS_KEY)))?
            .first()
            .ok_or_else(|| LayoutError::Shape(format!("'{}' is empty.", LAYOUTS_KEY)))?;
        if !first_layout.is_object() {
            return Err(LayoutError::Shape(format!(
                "'{}[0]' is {}, expected an object.",
                LAYOUTS_KEY,
                json_type_name(first_layout)
            )));
        }
        let active: Layout = serde_json::from_value(first_layout.clone())
            .map_err(|e| LayoutError::Shape(format!("'{}[0]': {}", LAYOUTS_KEY, e)))?;

        let catalog = FieldCatalog::from_document(&root);
        info!(
            "Layout document loaded ({}), remapped '{}' -> '{}', {} selectable field(s).",
            active.counts(),
            LanguageTag::SOURCE,
            language,
            catalog.len()
        );

        Ok(LoadedLayout {
            document: LayoutDocument { root, active },
            catalog,
            language,
        })
    }

    pub fn active_layout(&self) -> &Layout {
        &self.active
    }

    /// Overwrites `objectLayouts[0]`; sibling top-level keys and the other
    /// layouts are retained.
    pub fn replace_active_layout(&mut self, layout: Layout) -> Result<(), LayoutError> {
        let serialized =
            serde_json::to_value(&layout).map_err(|e| LayoutError::Serialize(e.to_string()))?;
        let slot = self
            .root
            .get_mut(LAYOUTS_KEY)
            .and_then(Value::as_array_mut)
            .and_then(|layouts| layouts.first_mut())
            .ok_or_else(|| LayoutError::Shape(format!("'{}[0]' disappeared.", LAYOUTS_KEY)))?;
        *slot = serialized;
        self.active = layout;
        debug!("Active layout replaced ({}).", self.active.counts());
        Ok(())
    }

    /// Pretty JSON (2-space indent) of the whole document.
    pub fn export(&self) -> Result<String, LayoutError> {
        serde_json::to_string_pretty(&self.root).map_err(|e| LayoutError::Serialize(e.to_string()))
    }

    /// Pretty JSON of the active layout only, for the preview pane.
    pub fn active_layout_json(&self) -> Result<String, LayoutError> {
        serde_json::to_string_pretty(&self.active)
            .map_err(|e| LayoutError::Serialize(e.to_string()))
    }

    pub fn layout_count(&self) -> usize {
        self.root
            .get(LAYOUTS_KEY)
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }
}
