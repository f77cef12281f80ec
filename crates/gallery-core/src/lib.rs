//! Gallery Core Library
//!
//! This crate provides the domain models, error type, configuration, validation
//! and HTML rendering shared by the gallery API client and the CLI.

pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod render;
pub mod validation;

// Re-export commonly used types
pub use config::{GalleryConfig, RenderStyle, UploadEncoding};
pub use error::{ErrorKind, GalleryError, LogLevel, RemoteOperation};
pub use hooks::{
    FileInput, FileSelection, GalleryRegion, MemoryRegion, Notice, NoticeLevel, NoopNotifier,
    Notifier,
};
pub use models::{UploadAck, UploadFile, VideoDescriptor, VideoListResponse};
pub use render::{render_gallery, render_page, RenderOptions, RenderedGallery};
