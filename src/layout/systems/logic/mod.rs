// src/layout/systems/logic/mod.rs

pub mod reorder_row;
pub mod replace_layout;

pub use reorder_row::handle_reorder_row_request;
pub use replace_layout::handle_replace_active_layout;
