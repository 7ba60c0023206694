// src/layout/systems/io/parsers.rs
use bevy::prelude::warn;
use std::fs;
use std::path::Path;

use crate::layout::{
    document::{LayoutDocument, LoadedLayout},
    errors::LayoutError,
    language::LanguageTag,
};

/// Reads and loads a layout file synchronously (CLI path).
pub fn read_layout_file(path: &Path, language: LanguageTag) -> Result<LoadedLayout, LayoutError> {
    let file_content = fs::read_to_string(path).map_err(|e| LayoutError::io(path, e))?;
    LayoutDocument::load(&file_content, language)
}

/// Writes exported document text, replacing the file if it exists.
pub fn write_layout_file(path: &Path, exported: &str) -> Result<(), LayoutError> {
    fs::write(path, exported).map_err(|e| LayoutError::io(path, e))
}

/// File name shown in status lines for a picked path.
pub fn display_file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| {
            warn!("Could not derive filename from path '{}', using 'unknown.json'.", path.display());
            "unknown.json".to_string()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("object_layout_editor_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_write_then_read_layout_file() {
        let path = temp_path("roundtrip.json");
        let text = "{\n  \"objectLayouts\": [\n    {\n      \"objectLayoutTabs\": []\n    }\n  ]\n}";
        write_layout_file(&path, text).unwrap();
        let loaded = read_layout_file(&path, LanguageTag::PtBr).unwrap();
        assert_eq!(loaded.document.export().unwrap(), text);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = temp_path("does_not_exist.json");
        let err = read_layout_file(&path, LanguageTag::PtBr).unwrap_err();
        assert!(matches!(err, LayoutError::Io { .. }));
    }

    #[test]
    fn test_display_file_name() {
        assert_eq!(display_file_name(Path::new("/tmp/a/layout.json")), "layout.json");
    }
}
