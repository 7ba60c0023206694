// src/cli/remap.rs
use std::path::Path;

use crate::layout::{errors::LayoutError, language::LanguageTag, systems::io::parsers};

pub fn run(input: &Path, language: LanguageTag, output: Option<&Path>) -> Result<(), LayoutError> {
    let loaded = parsers::read_layout_file(input, language)?;
    let exported = loaded.document.export()?;

    match output {
        Some(path) => {
            parsers::write_layout_file(path, &exported)?;
            eprintln!(
                "Wrote {} ({} -> {}) to {}",
                input.display(),
                LanguageTag::SOURCE,
                language,
                path.display()
            );
        }
        None => println!("{}", exported),
    }
    Ok(())
}
