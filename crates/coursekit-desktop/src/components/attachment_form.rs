//! Course attachment panel.

use std::sync::Arc;

use dioxus::prelude::*;

use coursekit_core::api::AttachmentApi;
use coursekit_core::upload::UploadedFile;
use coursekit_core::view::{PanelBody, PanelView};
use coursekit_core::{Attachment, AttachmentId, AttachmentManager, CourseId, EditorState};

use super::button::{Button, ButtonVariant};
use super::file_upload::{FileUpload, UploadCallback};
use crate::services::{CourseRefresher, ToastNotifier};
use crate::state::AppState;

/// Panel-local UI state kept in component signals.
#[derive(Clone, Copy)]
struct PanelSignals {
    is_editing: Signal<bool>,
    deleting_id: Signal<Option<AttachmentId>>,
}

impl EditorState for PanelSignals {
    fn is_editing(&self) -> bool {
        (self.is_editing)()
    }

    fn set_editing(&mut self, editing: bool) {
        // The panel may unmount while a request is in flight.
        if let Ok(mut value) = self.is_editing.try_write() {
            *value = editing;
        }
    }

    fn deleting_id(&self) -> Option<AttachmentId> {
        (self.deleting_id)()
    }

    fn set_deleting_id(&mut self, id: Option<AttachmentId>) {
        if let Ok(mut value) = self.deleting_id.try_write() {
            *value = id;
        }
    }
}

type PanelManager = AttachmentManager<PanelSignals, ToastNotifier, CourseRefresher>;

fn panel_manager(
    course_id: CourseId,
    api: Arc<dyn AttachmentApi>,
    signals: PanelSignals,
    state: &AppState,
) -> PanelManager {
    AttachmentManager::new(
        course_id,
        api,
        signals,
        ToastNotifier::from_state(state),
        CourseRefresher::from_state(state),
    )
}

#[component]
pub fn AttachmentForm(course_id: CourseId, attachments: Vec<Attachment>) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let signals = PanelSignals {
        is_editing: use_signal(|| false),
        deleting_id: use_signal(|| None::<AttachmentId>),
    };

    let Some(api) = state.course_api.read().clone() else {
        return rsx! {
            div {
                style: "margin-top: 24px; color: {colors.error}; font-size: 13px;",
                "Course API is not configured."
            }
        };
    };

    let manager = panel_manager(course_id.clone(), api.clone(), signals, &state);
    let PanelView {
        title,
        toggle_label,
        body,
    } = manager.view(&attachments);
    let toggle_prefix = if matches!(body, PanelBody::Upload { .. }) {
        ""
    } else {
        "+ "
    };

    let on_upload = {
        let course_id = course_id.clone();
        let api = api.clone();
        move |(url, name): UploadCallback| {
            let Some(file) = UploadedFile::from_callback(url, name) else {
                return;
            };
            let manager = panel_manager(course_id.clone(), api.clone(), signals, &state);
            spawn(async move {
                manager.submit(file).await;
            });
        }
    };

    rsx! {
        div {
            style: "
                margin-top: 24px;
                border: 1px solid {colors.border};
                background: {colors.bg_secondary};
                border-radius: 8px;
                padding: 16px;
            ",
            div {
                style: "display: flex; align-items: center; justify-content: space-between; font-weight: 500;",
                "{title}"
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| manager.toggle_edit(),
                    "{toggle_prefix}{toggle_label}"
                }
            }

            {match body {
                PanelBody::Empty { message } => rsx! {
                    p {
                        style: "margin-top: 8px; font-size: 13px; font-style: italic; color: {colors.text_muted};",
                        "{message}"
                    }
                },
                PanelBody::List(rows) => rsx! {
                    div {
                        style: "display: flex; flex-direction: column; gap: 8px; margin-top: 8px;",
                        for row in rows {
                            div {
                                key: "{row.id}",
                                style: "
                                    display: flex;
                                    align-items: center;
                                    gap: 8px;
                                    padding: 12px;
                                    width: 100%;
                                    box-sizing: border-box;
                                    background: {colors.bg_row};
                                    border-radius: 6px;
                                    color: {colors.text_primary};
                                ",
                                span { style: "flex-shrink: 0;", "📄" }
                                span {
                                    style: "font-size: 12px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                                    title: "{row.url}",
                                    "{row.name}"
                                }
                                if row.is_deleting {
                                    span {
                                        class: "coursekit-spinner",
                                        style: "margin-left: auto; font-size: 14px;",
                                        "aria-label": "Deleting {row.name}",
                                        "⟳"
                                    }
                                } else {
                                    button {
                                        r#type: "button",
                                        style: "margin-left: auto; border: none; background: transparent; cursor: pointer; color: {colors.text_primary};",
                                        "aria-label": "Delete {row.name}",
                                        onclick: {
                                            let course_id = course_id.clone();
                                            let api = api.clone();
                                            let id = row.id.clone();
                                            move |_| {
                                                let manager = panel_manager(course_id.clone(), api.clone(), signals, &state);
                                                let id = id.clone();
                                                spawn(async move {
                                                    manager.delete_attachment(id).await;
                                                });
                                            }
                                        },
                                        "✕"
                                    }
                                }
                            }
                        }
                    }
                },
                PanelBody::Upload { endpoint, hint } => rsx! {
                    div {
                        style: "margin-top: 8px;",
                        FileUpload { endpoint, on_change: on_upload }
                        div {
                            style: "margin-top: 16px; font-size: 12px; color: {colors.text_muted};",
                            "{hint}"
                        }
                    }
                },
            }}
        }
    }
}
