// src/layout/definitions.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use uuid::Uuid;

use super::language::LanguageTag;

pub const DEFAULT_COLUMN_SIZE: i64 = 4;
pub const DEFAULT_BOX_TYPE: &str = "regular";

/// Stable identity of a tab, box, row or column for the lifetime of an editing
/// session. Never serialized; assigned on deserialization and on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(Uuid);

impl NodeId {
    pub fn fresh() -> Self {
        NodeId(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        NodeId::fresh()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Language tag → text mapping (`{"en_US": "General"}`). Key order is kept as loaded.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(Map<String, Value>);

impl LocalizedText {
    pub fn single(language: LanguageTag, text: impl Into<String>) -> Self {
        let mut map = Map::new();
        map.insert(language.as_str().to_string(), Value::String(text.into()));
        LocalizedText(map)
    }

    /// Text stored under `language`, or an empty string.
    pub fn get(&self, language: LanguageTag) -> &str {
        self.get_tag(language.as_str()).unwrap_or("")
    }

    pub fn get_tag(&self, tag: &str) -> Option<&str> {
        self.0.get(tag).and_then(Value::as_str)
    }

    /// Copy of this mapping with `language` set to `text`; other tags are kept.
    pub fn with_text(&self, language: LanguageTag, text: impl Into<String>) -> Self {
        let mut map = self.0.clone();
        map.insert(language.as_str().to_string(), Value::String(text.into()));
        LocalizedText(map)
    }
}

/// Common surface of the four nested node kinds, used by the generic list editor.
pub trait LayoutNode: Clone {
    /// Short name used in logs and error messages.
    const KIND: &'static str;

    fn node_id(&self) -> NodeId;

    /// Value appended by an "add" action.
    fn new_default(language: LanguageTag) -> Self;
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    #[serde(default)]
    pub object_layout_tabs: Vec<LayoutTab>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutTab {
    #[serde(skip)]
    pub node_id: NodeId,
    #[serde(default)]
    pub name: LocalizedText,
    #[serde(default)]
    pub object_layout_boxes: Vec<LayoutBox>,
    #[serde(default)]
    pub priority: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutBox {
    #[serde(skip)]
    pub node_id: NodeId,
    #[serde(default)]
    pub name: LocalizedText,
    #[serde(default)]
    pub object_layout_rows: Vec<LayoutRow>,
    #[serde(default)]
    pub collapsable: bool,
    #[serde(rename = "type", default = "default_box_type")]
    pub box_type: String,
    #[serde(default)]
    pub priority: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRow {
    #[serde(skip)]
    pub node_id: NodeId,
    #[serde(default)]
    pub object_layout_columns: Vec<LayoutColumn>,
    #[serde(default)]
    pub priority: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutColumn {
    #[serde(skip)]
    pub node_id: NodeId,
    /// Field referenced by this column. Empty means "no field selected"; not
    /// checked against the field catalog.
    #[serde(default)]
    pub object_field_name: String,
    #[serde(default = "default_column_size")]
    pub size: i64,
    #[serde(default)]
    pub priority: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_box_type() -> String {
    DEFAULT_BOX_TYPE.to_string()
}

fn default_column_size() -> i64 {
    DEFAULT_COLUMN_SIZE
}

impl LayoutNode for LayoutTab {
    const KIND: &'static str = "Tab";

    fn node_id(&self) -> NodeId {
        self.node_id
    }

    fn new_default(language: LanguageTag) -> Self {
        LayoutTab {
            node_id: NodeId::fresh(),
            name: LocalizedText::single(language, "New Tab"),
            object_layout_boxes: Vec::new(),
            priority: 0,
            extra: Map::new(),
        }
    }
}

impl LayoutNode for LayoutBox {
    const KIND: &'static str = "Box";

    fn node_id(&self) -> NodeId {
        self.node_id
    }

    fn new_default(language: LanguageTag) -> Self {
        LayoutBox {
            node_id: NodeId::fresh(),
            name: LocalizedText::single(language, "New Box"),
            object_layout_rows: Vec::new(),
            collapsable: false,
            box_type: default_box_type(),
            priority: 0,
            extra: Map::new(),
        }
    }
}

impl LayoutNode for LayoutRow {
    const KIND: &'static str = "Row";

    fn node_id(&self) -> NodeId {
        self.node_id
    }

    fn new_default(_language: LanguageTag) -> Self {
        LayoutRow {
            node_id: NodeId::fresh(),
            object_layout_columns: Vec::new(),
            priority: 0,
            extra: Map::new(),
        }
    }
}

impl LayoutNode for LayoutColumn {
    const KIND: &'static str = "Column";

    fn node_id(&self) -> NodeId {
        self.node_id
    }

    fn new_default(_language: LanguageTag) -> Self {
        LayoutColumn {
            node_id: NodeId::fresh(),
            object_field_name: String::new(),
            size: DEFAULT_COLUMN_SIZE,
            priority: 0,
            extra: Map::new(),
        }
    }
}

/// Node totals for status lines and the `check` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutCounts {
    pub tabs: usize,
    pub boxes: usize,
    pub rows: usize,
    pub columns: usize,
}

impl fmt::Display for LayoutCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} tab(s), {} box(es), {} row(s), {} column(s)",
            self.tabs, self.boxes, self.rows, self.columns
        )
    }
}

impl Layout {
    pub fn counts(&self) -> LayoutCounts {
        let mut counts = LayoutCounts {
            tabs: self.object_layout_tabs.len(),
            ..Default::default()
        };
        for tab in &self.object_layout_tabs {
            counts.boxes += tab.object_layout_boxes.len();
            for layout_box in &tab.object_layout_boxes {
                counts.rows += layout_box.object_layout_rows.len();
                for row in &layout_box.object_layout_rows {
                    counts.columns += row.object_layout_columns.len();
                }
            }
        }
        counts
    }
}
