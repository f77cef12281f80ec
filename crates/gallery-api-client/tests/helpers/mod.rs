//! Shared fixtures for API client integration tests.

use std::sync::Mutex;

use gallery_api_client::{ApiClient, Gallery};
use gallery_core::{
    FileSelection, GalleryConfig, Notice, Notifier, RenderOptions, UploadEncoding, UploadFile,
};

/// Address nothing listens on, for transport failures.
pub const UNREACHABLE_API_URL: &str = "http://127.0.0.1:1";

/// Notifier that records every notice it is shown.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.notices().into_iter().map(|n| n.message).collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter(|n| n.is_error())
            .map(|n| n.message)
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices.lock().unwrap().push(notice.clone());
    }
}

pub fn config_for(base_url: &str, encoding: UploadEncoding) -> GalleryConfig {
    let mut config = GalleryConfig::new(base_url);
    config.upload_encoding = encoding;
    config
}

pub fn gallery_for(config: GalleryConfig) -> Gallery<ApiClient> {
    let render = RenderOptions::from(&config);
    let client = ApiClient::new(config).expect("client should build");
    Gallery::new(client, render)
}

pub fn selected_clip() -> FileSelection {
    FileSelection::from(UploadFile::new(
        "holiday clip.mp4",
        "video/mp4",
        b"fake-mp4-bytes".to_vec(),
    ))
}
