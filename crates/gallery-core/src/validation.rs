//! File type helpers for upload requests

use std::path::Path;

/// MIME type sent when the extension is unknown.
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Lowercased extension of `file_name`, if any.
pub fn file_extension(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .filter(|e| !e.is_empty())
}

/// Infer the MIME type of a file from its extension.
pub fn content_type_for_file_name(file_name: &str) -> &'static str {
    let Some(extension) = file_extension(file_name) else {
        return FALLBACK_CONTENT_TYPE;
    };

    match extension.as_str() {
        // Videos
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "avi" => "video/x-msvideo",
        "mkv" => "video/x-matroska",
        "m4v" => "video/x-m4v",
        "ogv" => "video/ogg",
        "mpeg" | "mpg" => "video/mpeg",
        // Images
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        // Audio
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        "m4a" => "audio/mp4",
        _ => {
            tracing::debug!(
                extension = %extension,
                "Unknown extension, falling back to {}",
                FALLBACK_CONTENT_TYPE
            );
            FALLBACK_CONTENT_TYPE
        }
    }
}

/// Normalize MIME type by stripping parameters (e.g. "video/mp4; codecs=avc1" -> "video/mp4").
pub fn normalize_mime_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
}

pub fn is_video_content_type(content_type: &str) -> bool {
    normalize_mime_type(content_type)
        .to_lowercase()
        .starts_with("video/")
}

/// Final path component of `path`, used as the uploaded file name.
pub fn file_name_from_path(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_string())
}
