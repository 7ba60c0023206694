// src/layout/errors.rs
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, editing or exporting a layout document.
/// Payloads are stored as strings so the error can travel inside events.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("I/O error on '{path}': {message}")]
    Io { path: PathBuf, message: String },
    #[error("Invalid JSON file: {0}")]
    Parse(String),
    #[error("Invalid layout file: expected a JSON object at the top level, found {0}.")]
    NotAnObject(&'static str),
    #[error("Invalid layout file: {0}")]
    Shape(String),
    #[error("{kind} index {index} is out of range (list has {len} entries).")]
    IndexOutOfRange {
        kind: &'static str,
        index: usize,
        len: usize,
    },
    #[error("Failed to serialize layout document: {0}")]
    Serialize(String),
    #[error("No layout document is loaded.")]
    NotLoaded,
}

impl LayoutError {
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        LayoutError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Load failures that the user has to acknowledge before continuing.
    pub fn is_blocking(&self) -> bool {
        matches!(
            self,
            LayoutError::Io { .. }
                | LayoutError::Parse(_)
                | LayoutError::NotAnObject(_)
                | LayoutError::Shape(_)
        )
    }
}

/// Human-readable JSON type name used in shape errors.
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
