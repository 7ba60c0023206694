// src/layout/systems/logic/replace_layout.rs
use bevy::prelude::*;

use crate::layout::{
    events::{LayoutOperationFeedback, RequestReplaceActiveLayout},
    resources::LayoutStore,
};

/// Stores the layout built by the editor tree. Each event carries the whole
/// active layout, so the last one in a frame wins.
pub fn handle_replace_active_layout(
    mut events: EventReader<RequestReplaceActiveLayout>,
    mut store: ResMut<LayoutStore>,
    mut feedback_writer: EventWriter<LayoutOperationFeedback>,
) {
    for event in events.read() {
        match store.replace_active_layout(event.layout.clone()) {
            Ok(()) => {
                trace!("Active layout replaced (revision {}).", store.revision());
            }
            Err(e) => {
                let msg = format!("Edit could not be applied: {}", e);
                error!("{}", msg);
                feedback_writer.write(LayoutOperationFeedback::error(msg));
            }
        }
    }
}
