// src/layout/plugin.rs
use bevy::prelude::*;

use super::events::{
    LayoutDocumentLoaded, LayoutFileRead, LayoutOperationFeedback, RequestExportLayout,
    RequestInitiateFileUpload, RequestProcessUpload, RequestReorderRow,
    RequestReplaceActiveLayout,
};
use super::resources::{LayoutStore, LoadGeneration};
use super::systems;
use crate::ui::systems::forward_events;

// Define system sets for ordering
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum LayoutSystemSet {
    UserInput,      // Systems reacting directly to UI events
    ApplyChanges,   // Systems replacing state in the store
    FileOperations, // Export
}

/// Plugin owning the document store and everything that changes it.
pub struct LayoutPlugin;

impl Plugin for LayoutPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                LayoutSystemSet::UserInput,
                LayoutSystemSet::ApplyChanges.after(LayoutSystemSet::UserInput),
                LayoutSystemSet::FileOperations.after(LayoutSystemSet::ApplyChanges),
            ),
        );

        app.init_resource::<LayoutStore>()
            .init_resource::<LoadGeneration>();

        app.add_event::<RequestInitiateFileUpload>()
            .add_event::<RequestProcessUpload>()
            .add_event::<LayoutFileRead>()
            .add_event::<LayoutDocumentLoaded>()
            .add_event::<RequestExportLayout>()
            .add_event::<RequestReplaceActiveLayout>()
            .add_event::<RequestReorderRow>()
            .add_event::<LayoutOperationFeedback>();

        app.add_systems(
            Update,
            (
                systems::io::handle_initiate_file_upload,
                systems::io::handle_process_upload_request,
            )
                .chain()
                .in_set(LayoutSystemSet::UserInput),
        );
        app.add_systems(
            Update,
            (
                // Edits target the document that was on screen, so they are
                // applied before a newly read file replaces it.
                systems::logic::handle_replace_active_layout,
                systems::logic::handle_reorder_row_request,
                forward_events::<LayoutFileRead>,
                systems::io::handle_layout_file_read,
            )
                .chain()
                .in_set(LayoutSystemSet::ApplyChanges),
        );
        app.add_systems(
            Update,
            systems::io::handle_export_request.in_set(LayoutSystemSet::FileOperations),
        );

        info!("LayoutPlugin initialized.");
    }
}
