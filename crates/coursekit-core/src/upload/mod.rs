//! Upload widget seam.
//!
//! The upload service is opaque: it takes a picked file for a given endpoint
//! and yields the `(url, name)` pair that becomes an attachment.

mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use http::HttpFileUploader;

const MIB: u64 = 1024 * 1024;

/// Upload target selecting the storage category and its acceptance rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadEndpoint {
    CourseImage,
    CourseAttachment,
    ChapterVideo,
}

impl UploadEndpoint {
    /// Route slug understood by the upload service.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::CourseImage => "courseImage",
            Self::CourseAttachment => "courseAttachment",
            Self::ChapterVideo => "chapterVideo",
        }
    }

    /// Largest accepted file in bytes.
    pub const fn max_file_size(self) -> u64 {
        match self {
            Self::CourseImage => 4 * MIB,
            Self::CourseAttachment => 16 * MIB,
            Self::ChapterVideo => 512 * MIB,
        }
    }

    /// Whether files of `mime_type` may be sent to this endpoint.
    pub fn accepts(self, mime_type: &str) -> bool {
        let mime_type = mime_type.trim().to_ascii_lowercase();
        match self {
            Self::CourseImage => mime_type.starts_with("image/"),
            Self::CourseAttachment => {
                mime_type == "application/pdf"
                    || ["text/", "image/", "video/", "audio/"]
                        .iter()
                        .any(|prefix| mime_type.starts_with(prefix))
            }
            Self::ChapterVideo => mime_type.starts_with("video/"),
        }
    }

    /// Reject files this endpoint would refuse before any bytes are sent.
    pub fn check(self, mime_type: &str, size_bytes: u64) -> Result<()> {
        if !self.accepts(mime_type) {
            return Err(Error::Upload(format!(
                "{mime_type} files are not accepted by {}",
                self.slug()
            )));
        }
        if size_bytes > self.max_file_size() {
            return Err(Error::Upload(format!(
                "file is larger than the {} MiB limit of {}",
                self.max_file_size() / MIB,
                self.slug()
            )));
        }
        Ok(())
    }
}

/// A file chosen by the user, read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// The pair produced by a finished upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub url: String,
    pub name: String,
}

impl UploadedFile {
    pub fn new(url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
        }
    }

    /// Interpret an upload widget callback.
    ///
    /// Cancelled or failed uploads report missing or empty values; those
    /// yield `None` and must not be submitted. Present values pass through
    /// unchanged.
    pub fn from_callback(url: Option<String>, name: Option<String>) -> Option<Self> {
        let url = url.filter(|url| !url.is_empty())?;
        let name = name.filter(|name| !name.is_empty())?;
        Some(Self { url, name })
    }
}

/// Transfers a picked file to the upload service.
#[async_trait]
pub trait FileUploader: Send + Sync {
    async fn upload(&self, endpoint: UploadEndpoint, file: PickedFile) -> Result<UploadedFile>;
}
