// src/cli/check.rs
use std::path::Path;

use crate::layout::{errors::LayoutError, language::LanguageTag, systems::io::parsers};

pub fn run(input: &Path) -> Result<(), LayoutError> {
    // Remapping does not change the shape, so the source language avoids any rewrite.
    let loaded = parsers::read_layout_file(input, LanguageTag::SOURCE)?;
    let document = &loaded.document;

    println!("{}: OK", input.display());
    println!("  layouts: {} (editing the first)", document.layout_count());
    println!("  {}", document.active_layout().counts());
    println!("  selectable fields: {}", loaded.catalog.len());
    Ok(())
}
