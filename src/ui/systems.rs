// src/ui/systems.rs
use crate::{
    layout::events::{LayoutDocumentLoaded, LayoutOperationFeedback},
    settings::{io::save_settings_to_file, AppSettings},
    ui::{elements::editor::state::EditorWindowState, UiFeedbackState},
};
use bevy::prelude::*;
use std::any;

pub fn handle_ui_feedback(
    mut feedback_events: EventReader<LayoutOperationFeedback>,
    mut ui_feedback_state: ResMut<UiFeedbackState>,
) {
    let mut first_info = None;
    let mut last_error = None;
    for event in feedback_events.read() {
        if event.blocking {
            // Alerts stay until dismissed; a later alert in the same frame wins.
            ui_feedback_state.blocking_alert = Some(event.message.clone());
        }
        if event.is_error {
            last_error = Some(event.message.clone());
        } else if first_info.is_none() {
            first_info = Some(event.message.clone());
        }
    }
    // Status line shows the first non-error, or the last error
    let last_message = first_info
        .map(|msg| (msg, false))
        .or_else(|| last_error.map(|msg| (msg, true)));
    if let Some((msg, is_error)) = last_message {
        ui_feedback_state.last_message = msg;
        ui_feedback_state.is_error = is_error;
        if is_error {
            warn!("UI Feedback (Error): {}", ui_feedback_state.last_message);
        } else {
            info!("UI Feedback: {}", ui_feedback_state.last_message);
        }
    }
}

/// Drops expansion and drag state that referred to the previous document.
pub fn reset_editor_state_on_load(
    mut loaded_events: EventReader<LayoutDocumentLoaded>,
    mut state: ResMut<EditorWindowState>,
) {
    let Some(event) = loaded_events.read().last() else {
        return;
    };
    state.clear_for_new_document();
    debug!("Editor state reset for '{}'.", event.source_name);
}

/// Writes `AppSettings` back to disk whenever a system changed it.
pub fn persist_settings_on_change(settings: Res<AppSettings>) {
    if !settings.is_changed() || settings.is_added() {
        return;
    }
    match save_settings_to_file(settings.as_ref()) {
        Ok(()) => trace!("Settings saved."),
        Err(e) => warn!("Failed to save settings: {}", e),
    }
}

#[derive(Component)]
pub struct SendEvent<E: Event> {
    pub event: E,
}

pub fn forward_events<E: Event + Clone + std::fmt::Debug>(
    mut commands: Commands,
    mut writer: EventWriter<E>,
    query: Query<(Entity, &SendEvent<E>)>,
    mut event_type_name: Local<String>,
) {
    if event_type_name.is_empty() {
        *event_type_name = any::type_name::<E>()
            .split("::")
            .last()
            .unwrap_or("UnknownEvent")
            .to_string();
    }

    let mut count = 0;
    for (entity, send_event_component) in query.iter() {
        count += 1;
        trace!("Forwarding event type '{}' #{}", *event_type_name, count);
        writer.write(send_event_component.event.clone());
        commands.entity(entity).despawn();
    }

    if count > 0 {
        debug!("Forwarded {} instance(s) of event type '{}'.", count, *event_type_name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback_app() -> App {
        let mut app = App::new();
        app.add_event::<LayoutOperationFeedback>()
            .init_resource::<UiFeedbackState>()
            .add_systems(Update, handle_ui_feedback);
        app
    }

    #[test]
    fn test_alert_after_info_still_blocks() {
        let mut app = feedback_app();
        app.world_mut()
            .send_event(LayoutOperationFeedback::info("Exported layout."));
        app.world_mut().send_event(LayoutOperationFeedback::alert(
            "Could not load 'x.json': invalid JSON",
        ));
        app.update();

        let state = app.world().resource::<UiFeedbackState>();
        assert_eq!(
            state.blocking_alert.as_deref(),
            Some("Could not load 'x.json': invalid JSON")
        );
        assert_eq!(state.last_message, "Exported layout.");
        assert!(!state.is_error);
    }

    #[test]
    fn test_errors_only_show_last_error() {
        let mut app = feedback_app();
        app.world_mut()
            .send_event(LayoutOperationFeedback::error("first"));
        app.world_mut()
            .send_event(LayoutOperationFeedback::error("second"));
        app.update();

        let state = app.world().resource::<UiFeedbackState>();
        assert_eq!(state.last_message, "second");
        assert!(state.is_error);
        assert!(state.blocking_alert.is_none());
    }
}
