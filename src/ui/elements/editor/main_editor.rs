// src/ui/elements/editor/main_editor.rs
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use super::node_list::{show_node_list, EditorContext};
use super::state::EditorWindowState;
use super::tab_editor::show_tab;
use crate::layout::{
    definitions::Layout,
    events::{
        RequestExportLayout, RequestInitiateFileUpload, RequestReorderRow,
        RequestReplaceActiveLayout,
    },
    resources::LayoutStore,
};
use crate::settings::AppSettings;
use crate::ui::{
    elements::{json_preview::show_json_preview, popups::show_blocking_alert, top_panel::show_top_panel},
    UiFeedbackState,
};

#[allow(clippy::too_many_arguments)]
pub fn layout_editor_ui(
    mut contexts: EguiContexts,
    mut state: ResMut<EditorWindowState>,
    mut ui_feedback: ResMut<UiFeedbackState>,
    mut settings: ResMut<AppSettings>,
    store: Res<LayoutStore>,
    mut upload_writer: EventWriter<RequestInitiateFileUpload>,
    mut export_writer: EventWriter<RequestExportLayout>,
    mut replace_writer: EventWriter<RequestReplaceActiveLayout>,
    mut reorder_writer: EventWriter<RequestReorderRow>,
) {
    let ctx = contexts.ctx_mut();
    let alert_open = ui_feedback.blocking_alert.is_some();

    show_blocking_alert(ctx, &mut ui_feedback);

    // Only touch the settings resource on an actual change so it is not saved every frame.
    let mut language = settings.language;

    egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
        if alert_open {
            ui.disable();
        }
        show_top_panel(
            ui,
            &mut state,
            &store,
            &mut language,
            &mut upload_writer,
            &mut export_writer,
        );
        if !ui_feedback.last_message.is_empty() {
            let text_color = if ui_feedback.is_error {
                egui::Color32::RED
            } else {
                ui.style().visuals.text_color()
            };
            ui.colored_label(text_color, &ui_feedback.last_message);
        }
    });

    if language != settings.language {
        info!("UI language set to {}.", language);
        settings.language = language;
    }

    if state.show_json_preview {
        egui::SidePanel::right("json_preview_panel")
            .resizable(true)
            .default_width(380.0)
            .show(ctx, |ui| show_json_preview(ui, &mut state, &store));
    }

    let pointer_pos = ctx.input(|i| i.pointer.hover_pos());
    let primary_released = ctx.input(|i| i.pointer.primary_released());

    let mut editor = EditorContext {
        state: &mut state,
        language,
        catalog: store.catalog(),
        pointer_pos,
        primary_released,
        drop_handled: false,
        reorder_requests: Vec::new(),
    };

    let replacement: Option<Layout> = egui::CentralPanel::default()
        .show(ctx, |ui| {
            if alert_open {
                ui.disable();
            }
            let Some(layout) = store.active_layout() else {
                ui.centered_and_justified(|ui| {
                    ui.weak("Choose a language and load a layout JSON file to start editing.");
                });
                return None;
            };
            egui::ScrollArea::vertical()
                .id_salt("layout_tree_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    show_node_list(
                        ui,
                        &mut editor,
                        &layout.object_layout_tabs,
                        "➕ Tab",
                        show_tab,
                    )
                    .map(|tabs| Layout {
                        object_layout_tabs: tabs,
                        ..layout.clone()
                    })
                })
                .inner
        })
        .inner;

    // Release with no row list under the pointer ends the drag with nowhere to go.
    if editor.primary_released && !editor.drop_handled {
        if let Some(session) = editor.state.row_drag.take() {
            debug!("Row drag released outside any row list.");
            editor.reorder_requests.push(RequestReorderRow {
                source: session,
                destination: None,
            });
        }
    }

    if let Some(layout) = replacement {
        replace_writer.write(RequestReplaceActiveLayout { layout });
    }
    for request in editor.reorder_requests {
        reorder_writer.write(request);
    }
}
