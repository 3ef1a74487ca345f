//! UI Components
//!
//! Reusable UI components for the desktop application.

mod attachment_form;
mod button;
mod file_upload;
mod toast_host;

pub use attachment_form::AttachmentForm;
pub use toast_host::ToastHost;
