//! Remote document sources.
//!
//! The editor core only needs "a CV document or an error" for an opaque
//! identifier. `GistSource` is the production backend: it reads the first
//! file of a GitHub gist and parses its content as a CV.
//!
//! Carried in `AppState` as `Arc<dyn DocumentSource>`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::editor::json_view::{parse_document, JsonViewError};
use crate::models::cv::CvDocument;

pub mod sample;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("gist '{id}' not found")]
    NotFound { id: String },

    #[error("gist API returned status {status}")]
    Status { status: u16 },

    #[error("gist content is not a CV document: {0}")]
    Document(#[from] JsonViewError),

    #[error("invalid gist id '{0}'")]
    InvalidId(String),
}

#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch(&self, id: &str) -> Result<CvDocument, FetchError>;
}

#[derive(Debug, Deserialize)]
struct GistResponse {
    files: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct GistFile {
    content: Option<String>,
}

/// Fetches CV documents from the GitHub gist API.
#[derive(Clone)]
pub struct GistSource {
    client: Client,
    api_base: String,
}

impl GistSource {
    pub fn new(api_base: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
        })
    }

    fn gist_url(&self, id: &str) -> String {
        format!("{}/gists/{}", self.api_base, id)
    }
}

#[async_trait]
impl DocumentSource for GistSource {
    async fn fetch(&self, id: &str) -> Result<CvDocument, FetchError> {
        validate_gist_id(id)?;

        let response = self
            .client
            .get(self.gist_url(id))
            .header("accept", "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 404 {
            return Err(FetchError::NotFound { id: id.to_string() });
        }
        if !status.is_success() {
            warn!("Gist API returned {status} for {id}");
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let gist: GistResponse = response.json().await?;
        let content = first_file_content(&gist);

        debug!("Fetched gist {id} ({} bytes)", content.len());
        Ok(parse_document(&content)?)
    }
}

/// Content of the first file in listing order. A gist without files, or a
/// file without content, counts as an empty document.
fn first_file_content(gist: &GistResponse) -> String {
    gist.files
        .values()
        .next()
        .and_then(|file| serde_json::from_value::<GistFile>(file.clone()).ok())
        .and_then(|file| file.content)
        .unwrap_or_else(|| "{}".to_string())
}

/// Gist ids are hex strings; anything else would let callers steer the URL.
fn validate_gist_id(id: &str) -> Result<(), FetchError> {
    if !id.is_empty() && id.len() <= 64 && id.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err(FetchError::InvalidId(id.to_string()))
    }
}
