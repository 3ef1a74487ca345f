//! Data models for Coursekit

mod attachment;
mod course;

pub use attachment::{Attachment, AttachmentId, NewAttachment};
pub use course::{Course, CourseId};
