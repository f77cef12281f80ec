//! HTTP client for the video gallery API.
//!
//! Provides a minimal client for the two endpoints (upload one file, list
//! videos) and the [`Gallery`] controller that drives them on behalf of a
//! host environment. The CLI uses both directly.

pub mod api;
pub mod gallery;

use anyhow::{Context, Result};
use async_trait::async_trait;
use gallery_core::{
    GalleryConfig, GalleryError, RemoteOperation, UploadAck, UploadFile, VideoDescriptor,
};
use reqwest::Client;
use serde::de::DeserializeOwned;

pub use api::{read_upload_file, FILE_NAME_HEADER};
pub use gallery::{Gallery, ListingState, UploadOutcome, UPLOAD_SUCCESS_NOTICE};

/// The two remote calls the gallery needs.
#[async_trait]
pub trait VideoApi: Send + Sync {
    /// POST one file to the upload endpoint.
    async fn upload_video(&self, file: &UploadFile) -> Result<UploadAck, GalleryError>;

    /// GET the list of uploaded videos, in the order the endpoint returned them.
    async fn fetch_videos(&self) -> Result<Vec<VideoDescriptor>, GalleryError>;
}

/// HTTP client for the gallery API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    config: GalleryConfig,
}

impl ApiClient {
    pub fn new(config: GalleryConfig) -> Result<Self> {
        let mut builder =
            Client::builder().user_agent(concat!("gallery/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    /// Create client from environment: GALLERY_API_URL and the optional GALLERY_* settings.
    pub fn from_env() -> Result<Self> {
        let config = GalleryConfig::from_env().context("Failed to load gallery configuration")?;
        Self::new(config)
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// Send a request and return the body of a 2xx response.
    ///
    /// Non-2xx responses become [`GalleryError::RemoteStatus`] carrying the body
    /// text; failures before a response arrives become
    /// [`GalleryError::RemoteTransport`].
    async fn execute(
        &self,
        operation: RemoteOperation,
        request: reqwest::RequestBuilder,
    ) -> Result<String, GalleryError> {
        let response = request
            .send()
            .await
            .map_err(|e| GalleryError::RemoteTransport {
                operation,
                message: e.to_string(),
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GalleryError::RemoteTransport {
                operation,
                message: format!("Failed to read response body: {}", e),
            })?;

        if !status.is_success() {
            return Err(GalleryError::RemoteStatus {
                operation,
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(
            operation = %operation,
            status = status.as_u16(),
            bytes = body.len(),
            "Gallery API call succeeded"
        );
        Ok(body)
    }

    fn decode<T: DeserializeOwned>(operation: RemoteOperation, body: &str) -> Result<T, GalleryError> {
        serde_json::from_str(body).map_err(|e| GalleryError::RemoteDecode {
            operation,
            message: e.to_string(),
        })
    }

    /// Raw client for custom requests.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

// Re-export core types used in this crate's public signatures.
pub use gallery_core::{RenderOptions, RenderedGallery, UploadEncoding};
