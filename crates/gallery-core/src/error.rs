//! Error types module
//!
//! Every failure of the two gallery operations is a `GalleryError`. Errors fall
//! into two user-visible kinds: user input errors, raised before any network
//! activity, and remote call errors, raised by either endpoint. Both are
//! reported the same way: logged, then shown to the user as a single notice.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like a missing file selection
    Debug,
    /// Warning level - for recoverable local issues
    Warn,
    /// Error level - for failed remote calls
    Error,
}

/// Which remote endpoint a call was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteOperation {
    Upload,
    Fetch,
}

impl Display for RemoteOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            RemoteOperation::Upload => write!(f, "upload"),
            RemoteOperation::Fetch => write!(f, "fetch"),
        }
    }
}

/// Coarse classification of a [`GalleryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UserInput,
    RemoteCall,
    Io,
    Render,
}

#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    #[error("Invalid input: {0}")]
    UserInput(String),

    #[error("{operation} request failed with status {status}: {body}")]
    RemoteStatus {
        operation: RemoteOperation,
        status: u16,
        body: String,
    },

    #[error("{operation} request failed: {message}")]
    RemoteTransport {
        operation: RemoteOperation,
        message: String,
    },

    #[error("{operation} response could not be decoded: {message}")]
    RemoteDecode {
        operation: RemoteOperation,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Template error: {0}")]
    Render(#[from] askama::Error),
}

impl GalleryError {
    /// The error raised when the upload form is submitted with nothing selected.
    pub fn no_file_selected() -> Self {
        GalleryError::UserInput("Please select a video file before uploading.".to_string())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            GalleryError::UserInput(_) => ErrorKind::UserInput,
            GalleryError::RemoteStatus { .. }
            | GalleryError::RemoteTransport { .. }
            | GalleryError::RemoteDecode { .. } => ErrorKind::RemoteCall,
            GalleryError::Io(_) => ErrorKind::Io,
            GalleryError::Render(_) => ErrorKind::Render,
        }
    }

    /// Remote endpoint involved, if any.
    pub fn operation(&self) -> Option<RemoteOperation> {
        match self {
            GalleryError::RemoteStatus { operation, .. }
            | GalleryError::RemoteTransport { operation, .. }
            | GalleryError::RemoteDecode { operation, .. } => Some(*operation),
            GalleryError::UserInput(_) | GalleryError::Io(_) | GalleryError::Render(_) => None,
        }
    }

    pub fn log_level(&self) -> LogLevel {
        match self.kind() {
            ErrorKind::UserInput => LogLevel::Debug,
            ErrorKind::Io => LogLevel::Warn,
            ErrorKind::RemoteCall | ErrorKind::Render => LogLevel::Error,
        }
    }

    /// Human-readable text shown to the user.
    ///
    /// Status failures carry the response body verbatim (`Unknown error` when
    /// the body is blank); transport and decode failures carry the underlying
    /// message.
    pub fn notice(&self) -> String {
        match self {
            GalleryError::UserInput(message) => message.clone(),
            GalleryError::RemoteStatus {
                operation, body, ..
            } => {
                let body = if body.trim().is_empty() {
                    "Unknown error"
                } else {
                    body.as_str()
                };
                match operation {
                    RemoteOperation::Upload => format!("Error uploading video: {}", body),
                    RemoteOperation::Fetch => format!("Error fetching videos: {}", body),
                }
            }
            GalleryError::RemoteTransport { operation, message }
            | GalleryError::RemoteDecode { operation, message } => match operation {
                RemoteOperation::Upload => {
                    format!("An error occurred while uploading the video: {}", message)
                }
                RemoteOperation::Fetch => {
                    format!("An error occurred while fetching videos: {}", message)
                }
            },
            GalleryError::Io(err) => format!("A local file error occurred: {}", err),
            GalleryError::Render(err) => format!("The gallery could not be rendered: {}", err),
        }
    }
}
