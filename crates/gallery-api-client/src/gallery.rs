//! Upload and listing flow of the video gallery.
//!
//! [`Gallery`] owns the API client and the render options. The host passes in
//! its file input, gallery region and notifier on every call; nothing here
//! touches global state. Each operation is fire-once: failures are logged,
//! shown as a single notice and returned, never retried.

use gallery_core::validation::is_video_content_type;
use gallery_core::{
    render_gallery, FileInput, GalleryError, GalleryRegion, LogLevel, Notice, Notifier,
    RenderOptions, RenderedGallery, UploadAck,
};

use crate::VideoApi;

/// Notice shown after a successful upload.
pub const UPLOAD_SUCCESS_NOTICE: &str = "Video uploaded successfully!";

/// Where the listing currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingState {
    Idle,
    Loading,
    Rendered { count: usize },
    Failed,
}

/// Result of a successful upload.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadOutcome {
    pub ack: UploadAck,
    /// Number of videos rendered by the follow-up refresh, `None` if the refresh failed.
    pub refreshed: Option<usize>,
}

pub struct Gallery<A> {
    api: A,
    render: RenderOptions,
    state: ListingState,
}

impl<A: VideoApi> Gallery<A> {
    pub fn new(api: A, render: RenderOptions) -> Self {
        Self {
            api,
            render,
            state: ListingState::Idle,
        }
    }

    pub fn state(&self) -> ListingState {
        self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn render_options(&self) -> &RenderOptions {
        &self.render
    }

    /// Fetch the listing and replace `region` with the rendered gallery.
    ///
    /// On failure `region` keeps its prior content.
    pub async fn load(
        &mut self,
        region: &mut dyn GalleryRegion,
        notifier: &dyn Notifier,
    ) -> Result<RenderedGallery, GalleryError> {
        self.state = ListingState::Loading;

        let result = self
            .api
            .fetch_videos()
            .await
            .and_then(|videos| render_gallery(&videos, &self.render));
        let rendered = match result {
            Ok(rendered) => rendered,
            Err(err) => return Err(self.fail(err, notifier)),
        };

        if let Err(err) = region.replace(&rendered) {
            return Err(self.fail(err, notifier));
        }

        tracing::debug!(
            count = rendered.media_count,
            selected = ?rendered.selected,
            "Gallery rendered"
        );
        self.state = ListingState::Rendered {
            count: rendered.media_count,
        };
        Ok(rendered)
    }

    /// Upload the file selected in `input`.
    ///
    /// With nothing selected, no request is made. On success the selection is
    /// cleared and the listing is refreshed exactly once; on failure the
    /// selection is kept.
    pub async fn upload(
        &mut self,
        input: &mut dyn FileInput,
        region: &mut dyn GalleryRegion,
        notifier: &dyn Notifier,
    ) -> Result<UploadOutcome, GalleryError> {
        let Some(file) = input.selected() else {
            let err = GalleryError::no_file_selected();
            report(&err, notifier);
            return Err(err);
        };

        if !is_video_content_type(&file.content_type) {
            tracing::warn!(
                file_name = %file.file_name,
                content_type = %file.content_type,
                "Selected file does not look like a video, uploading anyway"
            );
        }

        let ack = match self.api.upload_video(file).await {
            Ok(ack) => ack,
            Err(err) => {
                report(&err, notifier);
                return Err(err);
            }
        };

        tracing::info!(
            message = ack.message.as_deref().unwrap_or(""),
            url = ack.url.as_deref().unwrap_or(""),
            "Video uploaded"
        );
        notifier.notify(&Notice::info(UPLOAD_SUCCESS_NOTICE));
        input.clear();

        let refreshed = self
            .load(region, notifier)
            .await
            .ok()
            .map(|gallery| gallery.media_count);

        Ok(UploadOutcome { ack, refreshed })
    }

    fn fail(&mut self, err: GalleryError, notifier: &dyn Notifier) -> GalleryError {
        self.state = ListingState::Failed;
        report(&err, notifier);
        err
    }
}

/// Log `err` at its level, then show it to the user.
fn report(err: &GalleryError, notifier: &dyn Notifier) {
    match err.log_level() {
        LogLevel::Debug => tracing::debug!(error = %err, "Gallery operation rejected"),
        LogLevel::Warn => tracing::warn!(error = %err, "Gallery operation failed"),
        LogLevel::Error => tracing::error!(
            error = %err,
            operation = ?err.operation(),
            "Gallery remote call failed"
        ),
    }
    notifier.notify(&Notice::from(err));
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use gallery_core::hooks::MemoryRegion;
    use gallery_core::{
        FileSelection, NoopNotifier, RemoteOperation, RenderStyle, UploadFile, VideoDescriptor,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNotifier {
        notices: Mutex<Vec<Notice>>,
    }

    impl RecordingNotifier {
        fn messages(&self) -> Vec<String> {
            self.notices
                .lock()
                .unwrap()
                .iter()
                .map(|n| n.message.clone())
                .collect()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: &Notice) {
            self.notices.lock().unwrap().push(notice.clone());
        }
    }

    /// In-process API double counting the calls it receives.
    #[derive(Default)]
    struct FakeApi {
        uploads: AtomicUsize,
        fetches: AtomicUsize,
        upload_status: Option<u16>,
        upload_unreachable: bool,
        fetch_fails: bool,
        videos: Vec<VideoDescriptor>,
    }

    #[async_trait]
    impl VideoApi for FakeApi {
        async fn upload_video(&self, _file: &UploadFile) -> Result<UploadAck, GalleryError> {
            self.uploads.fetch_add(1, Ordering::SeqCst);
            if self.upload_unreachable {
                return Err(GalleryError::RemoteTransport {
                    operation: RemoteOperation::Upload,
                    message: "connection refused".to_string(),
                });
            }
            match self.upload_status {
                Some(status) => Err(GalleryError::RemoteStatus {
                    operation: RemoteOperation::Upload,
                    status,
                    body: "storage unavailable".to_string(),
                }),
                None => Ok(UploadAck::default()),
            }
        }

        async fn fetch_videos(&self) -> Result<Vec<VideoDescriptor>, GalleryError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if self.fetch_fails {
                return Err(GalleryError::RemoteTransport {
                    operation: RemoteOperation::Fetch,
                    message: "connection reset".to_string(),
                });
            }
            Ok(self.videos.clone())
        }
    }

    fn selected_file() -> FileSelection {
        FileSelection::from(UploadFile::from_bytes("clip.mp4", vec![0u8; 16]))
    }

    #[tokio::test]
    async fn test_upload_without_selection_makes_no_calls() {
        let mut gallery = Gallery::new(FakeApi::default(), RenderOptions::default());
        let notifier = RecordingNotifier::default();
        let mut input = FileSelection::empty();
        let mut region = MemoryRegion::new();

        let err = gallery
            .upload(&mut input, &mut region, &notifier)
            .await
            .unwrap_err();

        assert!(matches!(err, GalleryError::UserInput(_)));
        assert_eq!(gallery.api().uploads.load(Ordering::SeqCst), 0);
        assert_eq!(gallery.api().fetches.load(Ordering::SeqCst), 0);
        assert_eq!(
            notifier.messages(),
            vec!["Please select a video file before uploading.".to_string()]
        );
        assert_eq!(gallery.state(), ListingState::Idle);
    }

    #[tokio::test]
    async fn test_upload_success_clears_and_refreshes_once() {
        let api = FakeApi {
            videos: vec![VideoDescriptor::new("https://cdn.test/clip.mp4")],
            ..FakeApi::default()
        };
        let mut gallery = Gallery::new(api, RenderOptions::default());
        let notifier = RecordingNotifier::default();
        let mut input = selected_file();
        let mut region = MemoryRegion::new();

        let outcome = gallery
            .upload(&mut input, &mut region, &notifier)
            .await
            .unwrap();

        assert_eq!(outcome.refreshed, Some(1));
        assert!(input.selected().is_none());
        assert_eq!(gallery.api().uploads.load(Ordering::SeqCst), 1);
        assert_eq!(gallery.api().fetches.load(Ordering::SeqCst), 1);
        assert_eq!(notifier.messages(), vec![UPLOAD_SUCCESS_NOTICE.to_string()]);
        assert_eq!(region.renders(), 1);
        assert_eq!(gallery.state(), ListingState::Rendered { count: 1 });
    }

    #[tokio::test]
    async fn test_upload_failure_keeps_selection() {
        let api = FakeApi {
            upload_status: Some(500),
            ..FakeApi::default()
        };
        let mut gallery = Gallery::new(api, RenderOptions::default());
        let notifier = RecordingNotifier::default();
        let mut input = selected_file();
        let mut region = MemoryRegion::with_content("<p>before</p>");

        let err = gallery
            .upload(&mut input, &mut region, &notifier)
            .await
            .unwrap_err();

        assert!(matches!(err, GalleryError::RemoteStatus { status: 500, .. }));
        assert!(input.selected().is_some());
        assert_eq!(gallery.api().fetches.load(Ordering::SeqCst), 0);
        assert_eq!(region.html(), "<p>before</p>");
        let messages = notifier.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("storage unavailable"));
    }

    #[tokio::test]
    async fn test_upload_transport_failure_keeps_selection() {
        let api = FakeApi {
            upload_unreachable: true,
            ..FakeApi::default()
        };
        let mut gallery = Gallery::new(api, RenderOptions::default());
        let notifier = RecordingNotifier::default();
        let mut input = selected_file();
        let mut region = MemoryRegion::new();

        let err = gallery
            .upload(&mut input, &mut region, &notifier)
            .await
            .unwrap_err();

        assert!(matches!(err, GalleryError::RemoteTransport { .. }));
        assert!(input.selected().is_some());
        assert_eq!(gallery.api().fetches.load(Ordering::SeqCst), 0);
        assert_eq!(region.renders(), 0);
        assert_eq!(
            notifier.messages(),
            vec!["An error occurred while uploading the video: connection refused".to_string()]
        );
    }

    #[tokio::test]
    async fn test_upload_success_with_failed_refresh() {
        let api = FakeApi {
            fetch_fails: true,
            ..FakeApi::default()
        };
        let mut gallery = Gallery::new(api, RenderOptions::default());
        let notifier = RecordingNotifier::default();
        let mut input = selected_file();
        let mut region = MemoryRegion::with_content("<p>before</p>");

        let outcome = gallery
            .upload(&mut input, &mut region, &notifier)
            .await
            .unwrap();

        assert_eq!(outcome.refreshed, None);
        assert!(input.selected().is_none());
        assert_eq!(region.html(), "<p>before</p>");
        assert_eq!(gallery.state(), ListingState::Failed);
        assert_eq!(notifier.messages().len(), 2);
    }

    #[tokio::test]
    async fn test_load_failure_leaves_region() {
        let api = FakeApi {
            fetch_fails: true,
            ..FakeApi::default()
        };
        let mut gallery = Gallery::new(api, RenderOptions::default());
        let notifier = RecordingNotifier::default();
        let mut region = MemoryRegion::with_content("<p>previous render</p>");

        let err = gallery.load(&mut region, &notifier).await.unwrap_err();

        assert!(matches!(err, GalleryError::RemoteTransport { .. }));
        assert_eq!(region.html(), "<p>previous render</p>");
        assert_eq!(region.renders(), 0);
        assert_eq!(gallery.state(), ListingState::Failed);
        assert_eq!(
            notifier.messages(),
            vec!["An error occurred while fetching videos: connection reset".to_string()]
        );
    }

    #[tokio::test]
    async fn test_load_empty_listing() {
        let mut gallery = Gallery::new(FakeApi::default(), RenderOptions::default());
        let notifier = RecordingNotifier::default();
        let mut region = MemoryRegion::new();

        let rendered = gallery.load(&mut region, &notifier).await.unwrap();
        assert!(rendered.is_empty());
        assert_eq!(region.html(), "<p>No videos available.</p>");
        assert_eq!(gallery.state(), ListingState::Rendered { count: 0 });
        assert!(notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_load_with_noop_notifier_uses_render_options() {
        let api = FakeApi {
            videos: vec![
                VideoDescriptor::new("https://cdn.test/a.mp4").with_title("A"),
                VideoDescriptor::new("https://cdn.test/b.mp4").with_title("B"),
            ],
            ..FakeApi::default()
        };
        let options = RenderOptions {
            style: RenderStyle::Playlist,
            autoplay_first: true,
            ..RenderOptions::default()
        };
        let mut gallery = Gallery::new(api, options);
        assert_eq!(gallery.render_options().style, RenderStyle::Playlist);

        let mut region = MemoryRegion::new();
        let rendered = gallery.load(&mut region, &NoopNotifier).await.unwrap();

        assert_eq!(rendered.selected, Some(0));
        assert!(region.html().contains("<ul class=\"playlist\">"));
        assert_eq!(gallery.state(), ListingState::Rendered { count: 2 });
    }
}
