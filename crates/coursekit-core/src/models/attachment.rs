//! Attachment model

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

use super::course::CourseId;

/// Server-assigned attachment identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttachmentId(String);

impl AttachmentId {
    /// Wrap a raw attachment identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the string representation of this ID.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttachmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AttachmentId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A named file reference belonging to a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Unique attachment identifier.
    pub id: AttachmentId,
    /// Display name, usually the original file name.
    pub name: String,
    /// Location of the uploaded file.
    pub url: String,
    /// Parent course, when the server includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<CourseId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Attachment {
    /// Build an attachment record as the server would return it.
    pub fn new(
        id: impl Into<AttachmentId>,
        name: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
            course_id: None,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Validated request body for creating an attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewAttachment {
    url: String,
    name: String,
}

impl NewAttachment {
    /// Validate a `(url, name)` pair. Both fields must be non-empty and are
    /// kept exactly as given.
    pub fn new(url: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let url = url.into();
        let name = name.into();

        if url.is_empty() {
            return Err(Error::InvalidInput(
                "Attachment url cannot be empty".to_string(),
            ));
        }
        if name.is_empty() {
            return Err(Error::InvalidInput(
                "Attachment name cannot be empty".to_string(),
            ));
        }

        Ok(Self { url, name })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
