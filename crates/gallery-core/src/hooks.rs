//! Hooks and traits for the host environment
//!
//! The gallery operations never reach for globals. The host passes in where
//! notices go, which file is selected and which region receives the rendered
//! gallery. A browser binding, a terminal or a test harness each implement
//! these traits.

use crate::error::GalleryError;
use crate::models::UploadFile;
use crate::render::RenderedGallery;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A blocking, user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl From<&GalleryError> for Notice {
    fn from(err: &GalleryError) -> Self {
        Notice::error(err.notice())
    }
}

/// Presents notices to the user.
///
/// Implementations may block until the user acknowledges the notice.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: &Notice);
}

/// Notifier that drops every notice.
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _notice: &Notice) {}
}

/// The file selection control of the upload form.
pub trait FileInput {
    /// Currently selected file, if any.
    fn selected(&self) -> Option<&UploadFile>;

    /// Reset the control to "nothing selected".
    fn clear(&mut self);
}

/// In-memory file selection.
#[derive(Debug, Clone, Default)]
pub struct FileSelection {
    file: Option<UploadFile>,
}

impl FileSelection {
    pub fn new(file: Option<UploadFile>) -> Self {
        Self { file }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn select(&mut self, file: UploadFile) {
        self.file = Some(file);
    }

    pub fn is_empty(&self) -> bool {
        self.file.is_none()
    }
}

impl From<UploadFile> for FileSelection {
    fn from(file: UploadFile) -> Self {
        Self::new(Some(file))
    }
}

impl FileInput for FileSelection {
    fn selected(&self) -> Option<&UploadFile> {
        self.file.as_ref()
    }

    fn clear(&mut self) {
        self.file = None;
    }
}

/// The part of the page replaced on each successful listing render.
pub trait GalleryRegion {
    fn replace(&mut self, gallery: &RenderedGallery) -> Result<(), GalleryError>;
}

/// Region that keeps the last rendered fragment in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegion {
    html: String,
    renders: usize,
}

impl MemoryRegion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Region pre-filled with prior content.
    pub fn with_content(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            renders: 0,
        }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    /// Number of times the region has been replaced.
    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl GalleryRegion for MemoryRegion {
    fn replace(&mut self, gallery: &RenderedGallery) -> Result<(), GalleryError> {
        self.html = gallery.html.clone();
        self.renders += 1;
        Ok(())
    }
}
