//! Endpoint methods for the gallery API client.
//!
//! Upload encoding follows [`GalleryConfig::upload_encoding`]: either the raw
//! file bytes with `Content-Type` and `X-File-Name` headers, or a single
//! multipart form part.
//!
//! [`GalleryConfig::upload_encoding`]: gallery_core::GalleryConfig

use std::path::Path;

use async_trait::async_trait;
use gallery_core::validation::{file_name_from_path, FALLBACK_CONTENT_TYPE};
use gallery_core::{
    GalleryError, RemoteOperation, UploadAck, UploadEncoding, UploadFile, VideoDescriptor,
    VideoListResponse,
};
use reqwest::header::CONTENT_TYPE;

use crate::{ApiClient, VideoApi};

/// Header carrying the original file name on raw uploads.
pub const FILE_NAME_HEADER: &str = "X-File-Name";

impl ApiClient {
    fn upload_request(&self, file: &UploadFile) -> Result<reqwest::RequestBuilder, GalleryError> {
        let request = self.client().post(self.config().upload_url());

        match self.config().upload_encoding {
            UploadEncoding::Raw => {
                let file_name = if self.config().encode_file_name {
                    urlencoding::encode(&file.file_name).into_owned()
                } else {
                    file.file_name.clone()
                };
                Ok(request
                    .header(CONTENT_TYPE, file.content_type.as_str())
                    .header(FILE_NAME_HEADER, file_name)
                    .body(file.bytes.clone()))
            }
            UploadEncoding::Multipart => {
                let part = |mime: &str| {
                    reqwest::multipart::Part::stream(file.bytes.clone())
                        .file_name(file.file_name.clone())
                        .mime_str(mime)
                };
                let part = match part(&file.content_type) {
                    Ok(part) => part,
                    Err(_) => {
                        tracing::warn!(
                            file_name = %file.file_name,
                            content_type = %file.content_type,
                            "Unparsable content type, sending as {}",
                            FALLBACK_CONTENT_TYPE
                        );
                        part(FALLBACK_CONTENT_TYPE).map_err(|e| GalleryError::RemoteTransport {
                            operation: RemoteOperation::Upload,
                            message: e.to_string(),
                        })?
                    }
                };
                let form = reqwest::multipart::Form::new()
                    .part(self.config().multipart_field.clone(), part);
                Ok(request.multipart(form))
            }
        }
    }
}

#[async_trait]
impl VideoApi for ApiClient {
    async fn upload_video(&self, file: &UploadFile) -> Result<UploadAck, GalleryError> {
        let operation = RemoteOperation::Upload;
        tracing::info!(
            file_name = %file.file_name,
            content_type = %file.content_type,
            size = file.len(),
            encoding = %self.config().upload_encoding,
            url = %self.config().upload_url(),
            "Uploading video"
        );

        let request = self.upload_request(file)?;
        let body = self.execute(operation, request).await?;
        Self::decode(operation, &body)
    }

    async fn fetch_videos(&self) -> Result<Vec<VideoDescriptor>, GalleryError> {
        let operation = RemoteOperation::Fetch;
        let url = self.config().fetch_url();
        tracing::debug!(url = %url, "Fetching video list");

        let body = self.execute(operation, self.client().get(&url)).await?;
        let videos = Self::decode::<VideoListResponse>(operation, &body)?.into_videos();

        tracing::info!(count = videos.len(), "Fetched video list");
        Ok(videos)
    }
}

/// Read a local file into an [`UploadFile`], inferring its MIME type from the extension.
pub async fn read_upload_file(path: &Path) -> Result<UploadFile, GalleryError> {
    let file_name = file_name_from_path(path).ok_or_else(|| {
        GalleryError::UserInput(format!("Not a file path: {}", path.display()))
    })?;
    let bytes = tokio::fs::read(path).await?;
    Ok(UploadFile::from_bytes(file_name, bytes))
}
