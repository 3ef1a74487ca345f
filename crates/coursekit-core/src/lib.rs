//! coursekit-core - Core library for Coursekit
//!
//! This crate contains the shared models, the course API client, the upload
//! client, and the headless attachment manager used by the Coursekit
//! interfaces.

pub mod api;
pub mod config;
pub mod error;
pub mod manager;
pub mod models;
pub mod notice;
pub mod upload;
pub mod view;

pub use error::{Error, Result};
pub use manager::{AttachmentManager, EditorSnapshot, EditorState, SharedEditorState};
pub use models::{Attachment, AttachmentId, Course, CourseId, NewAttachment};
