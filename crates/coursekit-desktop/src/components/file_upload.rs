//! Upload widget: picks a local file, sends it to the upload service, and
//! reports the resulting `(url, name)` pair.

use std::path::Path;

use dioxus::prelude::*;
use rfd::AsyncFileDialog;

use coursekit_core::upload::{PickedFile, UploadEndpoint};
use coursekit_core::{Error, Result};

use super::button::{Button, ButtonVariant};
use crate::state::AppState;

/// Callback payload: both values are `None` when the pick was cancelled or
/// the upload failed.
pub type UploadCallback = (Option<String>, Option<String>);

/// Check type and size from file metadata so oversized files are never read
/// into memory. Returns the guessed MIME type.
fn precheck_picked_file(endpoint: UploadEndpoint, name: &str, path: &Path) -> Result<String> {
    let size = std::fs::metadata(path)
        .map_err(|error| Error::Upload(format!("cannot read '{name}': {error}")))?
        .len();
    let mime_type = mime_guess::from_path(name)
        .first_or_octet_stream()
        .essence_str()
        .to_string();
    endpoint.check(&mime_type, size)?;
    Ok(mime_type)
}

#[component]
pub fn FileUpload(endpoint: UploadEndpoint, on_change: EventHandler<UploadCallback>) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let mut uploading = use_signal(|| false);
    let mut upload_error = use_signal(|| None::<String>);

    let on_pick = move |_: MouseEvent| {
        if uploading() {
            return;
        }
        upload_error.set(None);
        let uploader = state.uploader.read().clone();

        spawn(async move {
            let Some(file) = AsyncFileDialog::new().pick_file().await else {
                on_change.call((None, None));
                return;
            };

            let Some(uploader) = uploader else {
                upload_error.set(Some("File uploads are not configured.".to_string()));
                on_change.call((None, None));
                return;
            };

            let name = file.file_name();
            if name.trim().is_empty() {
                upload_error.set(Some("Selected file has an empty filename.".to_string()));
                on_change.call((None, None));
                return;
            }

            let mime_type = match precheck_picked_file(endpoint, &name, file.path()) {
                Ok(mime_type) => mime_type,
                Err(error) => {
                    tracing::warn!(endpoint = endpoint.slug(), "Rejected picked file: {}", error);
                    upload_error.set(Some(error.to_string()));
                    on_change.call((None, None));
                    return;
                }
            };

            uploading.set(true);
            let bytes = file.read().await;
            let result = uploader
                .upload(
                    endpoint,
                    PickedFile {
                        name,
                        mime_type,
                        bytes,
                    },
                )
                .await;
            uploading.set(false);

            match result {
                Ok(uploaded) => on_change.call((Some(uploaded.url), Some(uploaded.name))),
                Err(error) => {
                    tracing::warn!(endpoint = endpoint.slug(), "Upload failed: {}", error);
                    upload_error.set(Some(format!("Upload failed: {error}")));
                    on_change.call((None, None));
                }
            }
        });
    };

    let max_mib = endpoint.max_file_size() / (1024 * 1024);

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 8px;
                padding: 24px;
                border: 1px dashed {colors.border};
                border-radius: 8px;
                background: {colors.bg_primary};
            ",
            Button {
                variant: ButtonVariant::Primary,
                disabled: uploading(),
                onclick: on_pick,
                if uploading() { "Uploading..." } else { "Choose file" }
            }
            div {
                style: "font-size: 12px; color: {colors.text_muted};",
                "Up to {max_mib} MiB"
            }
            if let Some(error) = upload_error() {
                div {
                    style: "font-size: 12px; color: {colors.error};",
                    "{error}"
                }
            }
        }
    }
}
