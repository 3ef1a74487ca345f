//! Render model for the attachment panel.

use crate::models::AttachmentId;
use crate::upload::UploadEndpoint;

pub const PANEL_TITLE: &str = "Course Attachments";
pub const ADD_FILE_LABEL: &str = "Add a File";
pub const CANCEL_LABEL: &str = "Cancel";
pub const EMPTY_MESSAGE: &str = "No attachment yet";
pub const UPLOAD_HINT: &str = "Add resources to your course.";

/// Everything the panel needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub title: &'static str,
    pub toggle_label: &'static str,
    pub body: PanelBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelBody {
    /// Collapsed with no attachments.
    Empty { message: &'static str },
    /// Collapsed list, one row per attachment in the supplied order.
    List(Vec<AttachmentRow>),
    /// Editor open: the upload widget is shown.
    Upload {
        endpoint: UploadEndpoint,
        hint: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentRow {
    pub id: AttachmentId,
    pub name: String,
    pub url: String,
    /// Show a spinner instead of the delete affordance.
    pub is_deleting: bool,
}

impl PanelView {
    /// Number of attachment rows rendered.
    pub fn row_count(&self) -> usize {
        match &self.body {
            PanelBody::List(rows) => rows.len(),
            PanelBody::Empty { .. } | PanelBody::Upload { .. } => 0,
        }
    }
}
