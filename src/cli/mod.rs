// src/cli/mod.rs
// Headless tools working on layout files without opening the editor window

pub mod check;
pub mod fields;
pub mod remap;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::layout::language::LanguageTag;

#[derive(Parser)]
#[command(name = "object_layout_editor")]
#[command(about = "Object Layout Editor - visual editor for object layout JSON, with headless tools", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load a layout (renaming pt_BR label keys) and write the exported document
    Remap {
        /// Layout JSON file to read
        input: PathBuf,
        /// Language the pt_BR label keys are renamed to
        #[arg(short, long, default_value_t = LanguageTag::EnUs)]
        language: LanguageTag,
        /// Where to write the result; printed to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the fields a column may reference (non-system fields)
    Fields {
        /// Layout JSON file to read
        input: PathBuf,
        /// Language used for field captions
        #[arg(short, long, default_value_t = LanguageTag::SOURCE)]
        language: LanguageTag,
    },

    /// Check that a file loads and report its size
    Check {
        /// Layout JSON file to read
        input: PathBuf,
    },
}

/// Runs one subcommand and returns the process exit code.
pub fn run(command: Commands) -> i32 {
    let result = match command {
        Commands::Remap {
            input,
            language,
            output,
        } => remap::run(&input, language, output.as_deref()),
        Commands::Fields { input, language } => fields::run(&input, language),
        Commands::Check { input } => check::run(&input),
    };
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}
