// src/layout/systems/io/save.rs
use bevy::prelude::*;
use std::path::PathBuf;

use super::parsers::{display_file_name, write_layout_file};
use crate::layout::{
    events::{LayoutOperationFeedback, RequestExportLayout},
    resources::LayoutStore,
};
use crate::settings::AppSettings;

/// Serializes the full document and writes it where the user chooses.
pub fn handle_export_request(
    mut events: EventReader<RequestExportLayout>,
    store: Res<LayoutStore>,
    mut settings: ResMut<AppSettings>,
    mut feedback_writer: EventWriter<LayoutOperationFeedback>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();

    // Serialize before asking for a path so a failure doesn't cost a dialog.
    let exported = match store.export() {
        Ok(text) => text,
        Err(e) => {
            let msg = format!("Export failed: {}", e);
            warn!("{}", msg);
            feedback_writer.write(LayoutOperationFeedback::error(msg));
            return;
        }
    };

    let mut dialog = rfd::FileDialog::new()
        .add_filter("JSON files", &["json"])
        .set_file_name(settings.export_file_name.as_str());
    if let Some(dir) = settings.last_directory.as_ref().filter(|d| d.is_dir()) {
        dialog = dialog.set_directory(dir);
    }
    let Some(path): Option<PathBuf> = dialog.save_file() else {
        info!("Export cancelled by user.");
        return;
    };

    match write_layout_file(&path, &exported) {
        Ok(()) => {
            let msg = format!(
                "Exported layout to '{}' ({} bytes).",
                display_file_name(&path),
                exported.len()
            );
            info!("{} Full path: {}", msg, path.display());
            feedback_writer.write(LayoutOperationFeedback::info(msg));
            if let Some(parent) = path.parent() {
                if settings.last_directory.as_deref() != Some(parent) {
                    settings.last_directory = Some(parent.to_path_buf());
                }
            }
        }
        Err(e) => {
            let msg = format!("Export failed: {}", e);
            error!("{}", msg);
            feedback_writer.write(LayoutOperationFeedback::error(msg));
        }
    }
}
