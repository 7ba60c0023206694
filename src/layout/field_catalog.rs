// src/layout/field_catalog.rs
use bevy::prelude::debug;
use serde_json::{Map, Value};

use super::definitions::LocalizedText;
use super::language::LanguageTag;

pub const FIELDS_KEY: &str = "objectFields";

/// One selectable entry of the field catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    pub name: String,
    pub label: Option<LocalizedText>,
}

impl FieldDefinition {
    /// Label in `language`, falling back to the field name when missing or empty.
    pub fn caption(&self, language: LanguageTag) -> &str {
        self.label
            .as_ref()
            .map(|label| label.get(language))
            .filter(|text| !text.is_empty())
            .unwrap_or(&self.name)
    }
}

/// Fields offered to column editors: the document's `objectFields` entries whose
/// `system` flag is `false`. Built once per load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldCatalog {
    fields: Vec<FieldDefinition>,
}

impl FieldCatalog {
    pub fn from_document(root: &Map<String, Value>) -> Self {
        let Some(entries) = root.get(FIELDS_KEY).and_then(Value::as_array) else {
            debug!("Document has no '{}' array; field catalog is empty.", FIELDS_KEY);
            return FieldCatalog::default();
        };

        let fields: Vec<FieldDefinition> = entries
            .iter()
            .filter_map(Value::as_object)
            .filter(|entry| entry.get("system") == Some(&Value::Bool(false)))
            .filter_map(|entry| {
                let name = entry.get("name").and_then(Value::as_str)?;
                let label = entry
                    .get("label")
                    .and_then(|v| serde_json::from_value::<LocalizedText>(v.clone()).ok());
                Some(FieldDefinition {
                    name: name.to_string(),
                    label,
                })
            })
            .collect();

        debug!(
            "Field catalog built: {} selectable of {} declared field(s).",
            fields.len(),
            entries.len()
        );
        FieldCatalog { fields }
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    pub fn find(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn root(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_only_non_system_fields_are_selectable() {
        let doc = root(json!({
            "objectFields": [
                { "name": "a", "system": true },
                { "name": "b", "system": false }
            ]
        }));
        let catalog = FieldCatalog::from_document(&doc);
        let names: Vec<&str> = catalog.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["b"]);
    }

    #[test]
    fn test_missing_fields_key_gives_empty_catalog() {
        let catalog = FieldCatalog::from_document(&root(json!({ "objectLayouts": [] })));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_entries_without_system_flag_or_name_are_skipped() {
        let doc = root(json!({
            "objectFields": [
                { "name": "no_flag" },
                { "system": false },
                "not an object",
                { "name": "ok", "system": false }
            ]
        }));
        let catalog = FieldCatalog::from_document(&doc);
        assert_eq!(catalog.len(), 1);
        assert!(catalog.find("ok").is_some());
    }

    #[test]
    fn test_caption_falls_back_to_name() {
        let doc = root(json!({
            "objectFields": [
                { "name": "title", "label": { "en_US": "Title", "pt_BR": "" }, "system": false },
                { "name": "code", "system": false }
            ]
        }));
        let catalog = FieldCatalog::from_document(&doc);
        let title = catalog.find("title").unwrap();
        assert_eq!(title.caption(LanguageTag::EnUs), "Title");
        assert_eq!(title.caption(LanguageTag::PtBr), "title");
        assert_eq!(catalog.find("code").unwrap().caption(LanguageTag::EnUs), "code");
    }
}
