//! reqwest-backed client for the course attachment endpoints.

use async_trait::async_trait;

use super::{authorize, ensure_success, AttachmentApi};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::models::{AttachmentId, Course, CourseId, NewAttachment};

/// HTTP client for `/api/courses/{courseId}` resources.
#[derive(Debug, Clone)]
pub struct HttpCourseClient {
    base_url: String,
    access_token: Option<String>,
    client: reqwest::Client,
}

impl HttpCourseClient {
    /// Builds a client from resolved configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            base_url: config.api_base_url.clone(),
            access_token: config.access_token.clone(),
            client,
        })
    }

    fn course_url(&self, course_id: &CourseId) -> String {
        format!(
            "{}/api/courses/{}",
            self.base_url,
            urlencoding::encode(course_id.as_str())
        )
    }

    fn attachments_url(&self, course_id: &CourseId) -> String {
        format!("{}/attachments", self.course_url(course_id))
    }

    fn attachment_url(&self, course_id: &CourseId, attachment_id: &AttachmentId) -> String {
        format!(
            "{}/{}",
            self.attachments_url(course_id),
            urlencoding::encode(attachment_id.as_str())
        )
    }
}

#[async_trait]
impl AttachmentApi for HttpCourseClient {
    async fn create_attachment(
        &self,
        course_id: &CourseId,
        attachment: &NewAttachment,
    ) -> Result<()> {
        let request = self
            .client
            .post(self.attachments_url(course_id))
            .header(reqwest::header::ACCEPT, "application/json")
            .json(attachment);
        let response = authorize(request, self.access_token.as_deref()).send().await?;
        ensure_success(response).await?;
        tracing::debug!(course_id = %course_id, name = attachment.name(), "Attachment created");
        Ok(())
    }

    async fn delete_attachment(
        &self,
        course_id: &CourseId,
        attachment_id: &AttachmentId,
    ) -> Result<()> {
        let request = self
            .client
            .delete(self.attachment_url(course_id, attachment_id));
        let response = authorize(request, self.access_token.as_deref()).send().await?;
        ensure_success(response).await?;
        tracing::debug!(course_id = %course_id, attachment_id = %attachment_id, "Attachment deleted");
        Ok(())
    }

    async fn fetch_course(&self, course_id: &CourseId) -> Result<Course> {
        let request = self
            .client
            .get(self.course_url(course_id))
            .header(reqwest::header::ACCEPT, "application/json");
        let response = authorize(request, self.access_token.as_deref()).send().await?;
        let body = ensure_success(response).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
