use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::validation::content_type_for_file_name;

/// A file picked by the user for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl UploadFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Build a file whose MIME type is inferred from the file name extension.
    pub fn from_bytes(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type_for_file_name(&file_name).to_string();
        Self {
            file_name,
            content_type,
            bytes: bytes.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Acknowledgment returned by the upload endpoint on success.
///
/// Only its presence matters; the fields are logged and otherwise unused.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UploadAck {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_infers_content_type() {
        let file = UploadFile::from_bytes("clip.MOV", vec![0u8; 4]);
        assert_eq!(file.content_type, "video/quicktime");
        assert_eq!(file.len(), 4);
        assert!(!file.is_empty());
    }

    #[test]
    fn test_from_bytes_unknown_extension() {
        let file = UploadFile::from_bytes("notes", Vec::new());
        assert_eq!(file.content_type, "application/octet-stream");
        assert!(file.is_empty());
    }

    #[test]
    fn test_ack_with_url() {
        let json = r#"{"message": "Video uploaded successfully!", "url": "https://b.s3.amazonaws.com/k.mp4"}"#;
        let ack: UploadAck = serde_json::from_str(json).unwrap();
        assert_eq!(ack.message.as_deref(), Some("Video uploaded successfully!"));
        assert_eq!(ack.url.as_deref(), Some("https://b.s3.amazonaws.com/k.mp4"));
    }

    #[test]
    fn test_ack_ignores_unknown_fields() {
        let ack: UploadAck = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
        assert_eq!(ack, UploadAck::default());
    }
}
