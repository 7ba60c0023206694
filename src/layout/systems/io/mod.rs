// src/layout/systems/io/mod.rs

pub mod load; // picker + background read + install
pub mod parsers;
pub mod save; // export dialog + write

pub use load::{handle_initiate_file_upload, handle_layout_file_read, handle_process_upload_request};
pub use save::handle_export_request;
