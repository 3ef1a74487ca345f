//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use std::sync::Arc;

use dioxus::prelude::*;

use coursekit_core::api::AttachmentApi;
use coursekit_core::upload::FileUploader;
use coursekit_core::{Course, CourseId};

use crate::services::Toast;
use crate::theme::ResolvedTheme;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Course being edited
    pub course_id: Signal<Option<CourseId>>,
    /// Last course payload fetched from the API
    pub course: Signal<Option<Course>>,
    /// Course API client, if configured
    pub course_api: Signal<Option<Arc<dyn AttachmentApi>>>,
    /// Upload service client, if configured
    pub uploader: Signal<Option<Arc<dyn FileUploader>>>,
    /// Monotonic trigger; bumping it re-fetches the course
    pub refresh_version: Signal<u64>,
    /// Visible toast notifications, oldest first
    pub toasts: Signal<Vec<Toast>>,
    /// Next toast identifier
    pub next_toast_id: Signal<u64>,
    /// Resolved theme
    pub theme: Signal<ResolvedTheme>,
}
