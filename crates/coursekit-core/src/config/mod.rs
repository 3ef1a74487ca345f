//! Client configuration for the course API and upload service.
//!
//! Raw settings come from the environment and are resolved into a validated
//! `ClientConfig` before any client is built.

use crate::error::{Error, Result};

pub const API_BASE_URL_VAR: &str = "COURSEKIT_API_BASE_URL";
pub const UPLOAD_BASE_URL_VAR: &str = "COURSEKIT_UPLOAD_BASE_URL";
pub const API_TOKEN_VAR: &str = "COURSEKIT_API_TOKEN";

/// Unvalidated client settings as provided by the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientSettings {
    pub api_base_url: Option<String>,
    pub upload_base_url: Option<String>,
    pub api_token: Option<String>,
}

/// Validated configuration shared by the course and upload clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub upload_base_url: String,
    pub access_token: Option<String>,
}

impl ClientSettings {
    /// Read settings from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_base_url: lookup(API_BASE_URL_VAR),
            upload_base_url: lookup(UPLOAD_BASE_URL_VAR),
            api_token: lookup(API_TOKEN_VAR),
        }
    }

    /// Validate and normalize the settings.
    ///
    /// The upload base URL falls back to the API base URL when unset.
    pub fn resolve(self) -> Result<ClientConfig> {
        let api_base_url = normalize_required_http_url(self.api_base_url, API_BASE_URL_VAR)?;
        let upload_base_url = match normalize_text_option(self.upload_base_url) {
            Some(url) => normalize_required_http_url(Some(url), UPLOAD_BASE_URL_VAR)?,
            None => api_base_url.clone(),
        };

        Ok(ClientConfig {
            api_base_url,
            upload_base_url,
            access_token: normalize_text_option(self.api_token),
        })
    }
}

fn normalize_required_http_url(raw: Option<String>, field: &str) -> Result<String> {
    let value = normalize_text_option(raw)
        .ok_or_else(|| Error::Config(format!("'{field}' is required")))?;
    if is_http_url(&value) {
        Ok(value.trim_end_matches('/').to_string())
    } else {
        Err(Error::Config(format!(
            "'{field}' must include http:// or https://"
        )))
    }
}

/// Trim a setting value; blank values count as unset.
fn normalize_text_option(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}
