// src/cli/fields.rs
use std::path::Path;

use crate::layout::{errors::LayoutError, language::LanguageTag, systems::io::parsers};

pub fn run(input: &Path, language: LanguageTag) -> Result<(), LayoutError> {
    let loaded = parsers::read_layout_file(input, language)?;
    let catalog = &loaded.catalog;

    if catalog.is_empty() {
        println!("No selectable fields in {}", input.display());
        return Ok(());
    }

    println!("{:<30} {}", "Field", "Caption");
    println!("{}", "-".repeat(60));
    for field in catalog.fields() {
        println!("{:<30} {}", field.name, field.caption(language));
    }
    println!("\n{} field(s)", catalog.len());
    Ok(())
}
