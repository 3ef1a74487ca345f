//! Main application component

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dioxus::prelude::*;

use coursekit_core::api::{AttachmentApi, HttpCourseClient};
use coursekit_core::upload::{FileUploader, HttpFileUploader};

use crate::components::{AttachmentForm, ToastHost};
use crate::config::{load_desktop_config, DesktopConfig};
use crate::state::AppState;
use crate::theme::ResolvedTheme;

const SPINNER_CSS: &str = "
.coursekit-spinner { display: inline-block; animation: coursekit-spin 1s linear infinite; }
@keyframes coursekit-spin { to { transform: rotate(360deg); } }
";

#[derive(Clone)]
struct Clients {
    course_api: Arc<dyn AttachmentApi>,
    uploader: Arc<dyn FileUploader>,
}

fn build_clients(config: &DesktopConfig) -> coursekit_core::Result<Clients> {
    Ok(Clients {
        course_api: Arc::new(HttpCourseClient::new(&config.client)?),
        uploader: Arc::new(HttpFileUploader::new(&config.client)?),
    })
}

/// Root application component
#[component]
pub fn App() -> Element {
    let startup = use_hook(|| {
        load_desktop_config()
            .and_then(|config| {
                let clients = build_clients(&config)?;
                Ok((config, clients))
            })
            .map_err(|error| error.to_string())
    });

    let (course_id, course_api, uploader, theme, startup_error) = match startup {
        Ok((config, clients)) => (
            Some(config.course_id.clone()),
            Some(clients.course_api.clone()),
            Some(clients.uploader.clone()),
            config.theme,
            None,
        ),
        Err(error) => {
            tracing::error!("Failed to start: {}", error);
            (None, None, None, ResolvedTheme::default(), Some(error))
        }
    };

    let course_id = use_signal(|| course_id);
    let course = use_signal(|| None);
    let course_api = use_signal(|| course_api);
    let uploader = use_signal(|| uploader);
    let refresh_version = use_signal(|| 0u64);
    let toasts = use_signal(Vec::new);
    let next_toast_id = use_signal(|| 0u64);
    let theme = use_signal(|| theme);
    let load_error = use_signal(|| None::<String>);
    let loading = use_signal(|| false);
    let load_request_id = use_hook(|| Arc::new(AtomicU64::new(0)));

    use_context_provider(|| AppState {
        course_id,
        course,
        course_api,
        uploader,
        refresh_version,
        toasts,
        next_toast_id,
        theme,
    });

    // Re-fetch the course on mount and whenever a refresh is requested
    use_effect(move || {
        let version = refresh_version();
        let request_id = load_request_id.fetch_add(1, Ordering::SeqCst) + 1;
        let request_id_signal = load_request_id.clone();
        let mut course_signal = course;
        let mut load_error_signal = load_error;
        let mut loading_signal = loading;
        let Some(id) = course_id.read().clone() else {
            return;
        };
        let Some(api) = course_api.read().clone() else {
            return;
        };

        spawn(async move {
            loading_signal.set(true);
            let result = api.fetch_course(&id).await;
            if request_id_signal.load(Ordering::SeqCst) != request_id {
                tracing::debug!(course_id = %id, version, "Dropping stale course response");
                return;
            }

            match result {
                Ok(fetched) => {
                    tracing::info!(
                        course_id = %id,
                        attachments = fetched.attachments.len(),
                        "Loaded course"
                    );
                    load_error_signal.set(None);
                    course_signal.set(Some(fetched));
                }
                Err(error) => {
                    tracing::error!(course_id = %id, "Failed to load course: {}", error);
                    load_error_signal.set(Some(format!("Failed to load course: {error}")));
                }
            }
            loading_signal.set(false);
        });
    });

    let colors = theme().palette();
    let current_course = course();

    rsx! {
        style { {SPINNER_CSS} }

        div {
            style: "
                min-height: 100vh;
                box-sizing: border-box;
                padding: 24px;
                font-family: system-ui, -apple-system, sans-serif;
                background: {colors.bg_primary};
                color: {colors.text_primary};
            ",

            if let Some(error) = startup_error {
                div {
                    style: "color: {colors.error}; font-size: 14px;",
                    "{error}"
                }
            } else {
                if let Some(error) = load_error() {
                    div {
                        style: "margin-bottom: 12px; color: {colors.error}; font-size: 13px;",
                        "{error}"
                    }
                }

                if let Some(current) = current_course {
                    h1 {
                        style: "font-size: 20px; font-weight: 600; margin: 0;",
                        "{current.title}"
                    }
                    AttachmentForm {
                        course_id: current.id.clone(),
                        attachments: current.attachments.clone(),
                    }
                } else if loading() {
                    div {
                        style: "color: {colors.text_muted}; font-size: 13px;",
                        "Loading course..."
                    }
                }
            }

            ToastHost {}
        }
    }
}
