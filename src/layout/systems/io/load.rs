// src/layout/systems/io/load.rs
use bevy::prelude::*;
use bevy_tokio_tasks::TokioTasksRuntime;
use std::path::PathBuf;

use super::parsers::display_file_name;
use crate::layout::{
    document::LayoutDocument,
    errors::LayoutError,
    events::{
        LayoutDocumentLoaded, LayoutFileRead, LayoutOperationFeedback, RequestInitiateFileUpload,
        RequestProcessUpload,
    },
    resources::{LayoutStore, LoadGeneration},
};
use crate::settings::AppSettings;
use crate::ui::systems::SendEvent;

/// Opens the native file picker for a `.json` layout.
pub fn handle_initiate_file_upload(
    mut events: EventReader<RequestInitiateFileUpload>,
    settings: Res<AppSettings>,
    mut process_event_writer: EventWriter<RequestProcessUpload>,
) {
    // Several clicks in one frame still open a single dialog.
    let Some(request) = events.read().last().cloned() else {
        return;
    };
    info!("File upload initiated by UI (language '{}').", request.language);

    let mut dialog = rfd::FileDialog::new().add_filter("JSON files", &["json"]);
    if let Some(dir) = settings.last_directory.as_ref().filter(|d| d.is_dir()) {
        dialog = dialog.set_directory(dir);
    }
    let picked_file: Option<PathBuf> = dialog.pick_file();

    match picked_file {
        Some(path) => {
            info!("File picked: '{}'. Sending request to process.", path.display());
            process_event_writer.write(RequestProcessUpload {
                path,
                language: request.language,
            });
        }
        None => {
            info!("File selection cancelled by user.");
        }
    }
}

/// Reads the picked file on the tokio runtime; the text comes back as a
/// `LayoutFileRead` event through `SendEvent`.
pub fn handle_process_upload_request(
    mut events: EventReader<RequestProcessUpload>,
    mut generation: ResMut<LoadGeneration>,
    runtime: Res<TokioTasksRuntime>,
) {
    for event in events.read() {
        let current_generation = generation.next();
        let path = event.path.clone();
        let language = event.language;
        debug!(
            "Reading '{}' in background (load generation {}).",
            path.display(),
            current_generation
        );

        runtime.spawn_background_task(move |mut ctx| async move {
            let contents = tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| e.to_string());
            ctx.run_on_main_thread(move |world_ctx| {
                world_ctx.world.spawn(SendEvent {
                    event: LayoutFileRead {
                        generation: current_generation,
                        path,
                        language,
                        contents,
                    },
                });
            })
            .await;
        });
    }
}

/// Parses delivered file contents and installs the document. Parsing and
/// installation happen in this one system run; on failure the store is untouched.
pub fn handle_layout_file_read(
    mut events: EventReader<LayoutFileRead>,
    generation: Res<LoadGeneration>,
    mut store: ResMut<LayoutStore>,
    mut settings: ResMut<AppSettings>,
    mut feedback_writer: EventWriter<LayoutOperationFeedback>,
    mut loaded_writer: EventWriter<LayoutDocumentLoaded>,
) {
    for event in events.read() {
        if !generation.is_current(event.generation) {
            debug!(
                "Discarding stale read of '{}' (generation {}).",
                event.path.display(),
                event.generation
            );
            continue;
        }

        let file_name = display_file_name(&event.path);
        let result = match &event.contents {
            Ok(text) => LayoutDocument::load(text, event.language),
            Err(read_error) => Err(LayoutError::Io {
                path: event.path.clone(),
                message: read_error.clone(),
            }),
        };

        match result {
            Ok(loaded) => {
                let counts = loaded.document.active_layout().counts();
                store.install(loaded, file_name.clone());
                let msg = format!("Loaded '{}': {}.", file_name, counts);
                info!("{}", msg);
                feedback_writer.write(LayoutOperationFeedback::info(msg));
                loaded_writer.write(LayoutDocumentLoaded {
                    source_name: file_name,
                });
                if let Some(parent) = event.path.parent() {
                    if settings.last_directory.as_deref() != Some(parent) {
                        settings.last_directory = Some(parent.to_path_buf());
                    }
                }
            }
            Err(e) => {
                let msg = format!("Could not load '{}': {}", file_name, e);
                error!("{}", msg);
                feedback_writer.write(if e.is_blocking() {
                    LayoutOperationFeedback::alert(msg)
                } else {
                    LayoutOperationFeedback::error(msg)
                });
            }
        }
    }
}
