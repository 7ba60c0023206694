// src/layout/systems/mod.rs

pub mod io;     // file picking, background reads, export
pub mod logic;  // edits applied to the document store
