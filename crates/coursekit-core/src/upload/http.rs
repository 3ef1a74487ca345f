//! Multipart upload client for the upload service.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use super::{FileUploader, PickedFile, UploadEndpoint, UploadedFile};
use crate::api::{authorize, ensure_success};
use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// Sends picked files to `{upload_base}/api/uploads/{endpoint}`.
#[derive(Debug, Clone)]
pub struct HttpFileUploader {
    base_url: String,
    access_token: Option<String>,
    client: reqwest::Client,
}

impl HttpFileUploader {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            base_url: config.upload_base_url.clone(),
            access_token: config.access_token.clone(),
            client,
        })
    }
}

#[async_trait]
impl FileUploader for HttpFileUploader {
    async fn upload(&self, endpoint: UploadEndpoint, file: PickedFile) -> Result<UploadedFile> {
        let size = u64::try_from(file.bytes.len()).unwrap_or(u64::MAX);
        endpoint.check(&file.mime_type, size)?;

        let part = Part::bytes(file.bytes)
            .file_name(file.name.clone())
            .mime_str(&file.mime_type)?;
        let form = Form::new().part("file", part);

        let request = self
            .client
            .post(format!("{}/api/uploads/{}", self.base_url, endpoint.slug()))
            .header(reqwest::header::ACCEPT, "application/json")
            .multipart(form);

        let response = authorize(request, self.access_token.as_deref()).send().await?;
        let response = ensure_success(response).await?;
        let uploaded: UploadedFile = serde_json::from_str(&response.text().await?)?;

        let uploaded = UploadedFile::from_callback(Some(uploaded.url), Some(uploaded.name))
            .ok_or_else(|| Error::Upload("upload service returned an empty url or name".to_string()))?;
        tracing::info!(
            endpoint = endpoint.slug(),
            name = %uploaded.name,
            size,
            "File uploaded"
        );
        Ok(uploaded)
    }
}
