// src/layout/language.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// UI languages offered by the editor. The selected tag decides which key of a
/// localized name mapping is edited, and is the target of the load-time remap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LanguageTag {
    #[default]
    #[serde(rename = "pt_BR")]
    PtBr,
    #[serde(rename = "en_US")]
    EnUs,
}

impl LanguageTag {
    pub const ALL: [LanguageTag; 2] = [LanguageTag::PtBr, LanguageTag::EnUs];

    /// Tag that incoming documents are assumed to be written in.
    pub const SOURCE: LanguageTag = LanguageTag::PtBr;

    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageTag::PtBr => "pt_BR",
            LanguageTag::EnUs => "en_US",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageTag::PtBr => "Português (Brasil)",
            LanguageTag::EnUs => "English (US)",
        }
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageTag::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Unknown language tag '{}'. Expected one of: {}",
                    s,
                    LanguageTag::ALL.map(|t| t.as_str()).join(", ")
                )
            })
    }
}

/// Renames every object key equal to `from` into `to`, at any depth.
///
/// Arrays are mapped element-wise and scalars are returned untouched. When an
/// object already holds `to` next to `from`, entries are applied in document
/// order, so whichever of the two comes last keeps its value (at the position of
/// the first one).
pub fn remap_language_keys(value: Value, from: &str, to: &str) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| remap_language_keys(item, from, to))
                .collect(),
        ),
        Value::Object(map) => Value::Object(remap_object_keys(map, from, to)),
        other => other,
    }
}

/// Object variant of [`remap_language_keys`], for callers that already hold a map.
pub fn remap_object_keys(map: Map<String, Value>, from: &str, to: &str) -> Map<String, Value> {
    let mut remapped = Map::with_capacity(map.len());
    for (key, child) in map {
        let child = remap_language_keys(child, from, to);
        if key == from {
            remapped.insert(to.to_string(), child);
        } else {
            remapped.insert(key, child);
        }
    }
    remapped
}
