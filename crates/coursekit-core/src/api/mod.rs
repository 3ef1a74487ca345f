//! Course API seam used by the attachment manager.

mod http;

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};

use crate::error::{Error, Result};
use crate::models::{AttachmentId, Course, CourseId, NewAttachment};

pub use http::HttpCourseClient;

/// Remote operations on a course and its attachments.
#[async_trait]
pub trait AttachmentApi: Send + Sync {
    /// Create an attachment under `course_id`. Any 2xx counts as success.
    async fn create_attachment(&self, course_id: &CourseId, attachment: &NewAttachment)
        -> Result<()>;

    /// Delete one attachment of `course_id`. Any 2xx counts as success.
    async fn delete_attachment(&self, course_id: &CourseId, attachment_id: &AttachmentId)
        -> Result<()>;

    /// Fetch the course with its attachments in server order.
    async fn fetch_course(&self, course_id: &CourseId) -> Result<Course>;
}

/// Map non-2xx responses to `Error::Status` with a compacted body.
pub(crate) async fn ensure_success(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Err(Error::Status {
        status,
        body: compact_text(&body),
    })
}

/// Attach the bearer token when one is configured.
pub(crate) fn authorize(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}

/// Trim and cap a response body for error messages.
fn compact_text(value: &str) -> String {
    value.trim().chars().take(180).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn compact_text_caps_status_bodies() {
        let body = format!("  {}  ", "x".repeat(400));
        assert_eq!(compact_text(&body).len(), 180);
        assert_eq!(compact_text(" Unauthorized\n"), "Unauthorized");
    }
}
