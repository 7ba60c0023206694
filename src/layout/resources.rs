// src/layout/resources.rs
use bevy::prelude::*;

use super::definitions::Layout;
use super::document::{LayoutDocument, LoadedLayout};
use super::errors::LayoutError;
use super::field_catalog::FieldCatalog;
use super::language::LanguageTag;

/// The document store. Holds at most one loaded document; every edit replaces
/// its active layout as a whole.
#[derive(Resource, Default, Debug)]
pub struct LayoutStore {
    document: Option<LayoutDocument>,
    catalog: FieldCatalog,
    source_name: Option<String>,
    loaded_language: Option<LanguageTag>,
    // Bumped on every install/replace so views can cache derived text.
    revision: u64,
}

impl LayoutStore {
    /// Swaps in a freshly loaded document, dropping the previous one.
    pub fn install(&mut self, loaded: LoadedLayout, source_name: impl Into<String>) {
        let LoadedLayout {
            document,
            catalog,
            language,
        } = loaded;
        self.document = Some(document);
        self.catalog = catalog;
        self.source_name = Some(source_name.into());
        self.loaded_language = Some(language);
        self.revision += 1;
    }

    pub fn document(&self) -> Option<&LayoutDocument> {
        self.document.as_ref()
    }

    pub fn active_layout(&self) -> Option<&Layout> {
        self.document.as_ref().map(LayoutDocument::active_layout)
    }

    pub fn replace_active_layout(&mut self, layout: Layout) -> Result<(), LayoutError> {
        let document = self.document.as_mut().ok_or(LayoutError::NotLoaded)?;
        document.replace_active_layout(layout)?;
        self.revision += 1;
        Ok(())
    }

    pub fn export(&self) -> Result<String, LayoutError> {
        self.document
            .as_ref()
            .ok_or(LayoutError::NotLoaded)?
            .export()
    }

    pub fn catalog(&self) -> &FieldCatalog {
        &self.catalog
    }

    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    pub fn loaded_language(&self) -> Option<LanguageTag> {
        self.loaded_language
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_loaded(&self) -> bool {
        self.document.is_some()
    }
}

/// Counter of file reads; only the newest read may install its result.
#[derive(Resource, Default, Debug)]
pub struct LoadGeneration {
    latest: u64,
}

impl LoadGeneration {
    pub fn next(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{"objectLayouts": [{"objectLayoutTabs": []}]}"#;

    #[test]
    fn test_store_requires_document_for_edits() {
        let mut store = LayoutStore::default();
        assert!(!store.is_loaded());
        assert_eq!(store.export().unwrap_err(), LayoutError::NotLoaded);
        assert_eq!(
            store.replace_active_layout(Layout::default()).unwrap_err(),
            LayoutError::NotLoaded
        );
    }

    #[test]
    fn test_install_and_replace_bump_revision() {
        let mut store = LayoutStore::default();
        let loaded = LayoutDocument::load(DOC, LanguageTag::EnUs).unwrap();
        store.install(loaded, "layout.json");
        assert_eq!(store.revision(), 1);
        assert_eq!(store.source_name(), Some("layout.json"));
        assert_eq!(store.loaded_language(), Some(LanguageTag::EnUs));

        let layout = store.active_layout().cloned().unwrap();
        store.replace_active_layout(layout).unwrap();
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn test_load_generation_tracks_latest() {
        let mut generation = LoadGeneration::default();
        let first = generation.next();
        let second = generation.next();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }
}
