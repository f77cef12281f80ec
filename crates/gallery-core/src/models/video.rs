use serde::{Deserialize, Serialize};

/// Label rendered when a descriptor has no usable title.
pub const UNTITLED_VIDEO: &str = "Untitled Video";

/// Media type assumed when a descriptor does not declare one. The backend
/// stores every upload as an `.mp4` object.
pub const DEFAULT_VIDEO_CONTENT_TYPE: &str = "video/mp4";

/// One listed video as returned by the listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoDescriptor {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        rename = "contentType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub content_type: Option<String>,
    #[serde(rename = "videoId", default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
}

impl VideoDescriptor {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
            content_type: None,
            video_id: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Title to show, falling back to [`UNTITLED_VIDEO`] when missing or empty.
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => UNTITLED_VIDEO,
        }
    }

    /// MIME type for the `<source>` element.
    pub fn media_type(&self) -> &str {
        match self.content_type.as_deref() {
            Some(ct) if !ct.trim().is_empty() => ct,
            _ => DEFAULT_VIDEO_CONTENT_TYPE,
        }
    }
}

/// Body of the listing endpoint.
///
/// Depending on the deployment the endpoint returns either a bare array or an
/// envelope with a `data` array.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VideoListResponse {
    Videos(Vec<VideoDescriptor>),
    Envelope {
        #[serde(default)]
        message: Option<String>,
        data: Vec<VideoDescriptor>,
    },
}

impl VideoListResponse {
    /// Descriptors in received order.
    pub fn into_videos(self) -> Vec<VideoDescriptor> {
        match self {
            VideoListResponse::Videos(videos) => videos,
            VideoListResponse::Envelope { data, .. } => data,
        }
    }
}
