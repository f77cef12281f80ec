//! Configuration module
//!
//! Where the two endpoints live and how uploads and listings are shaped.
//! Values come from the environment (a `.env` file is honoured) with typed
//! defaults for everything but the API base URL.

use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use std::time::Duration;

const UPLOAD_PATH: &str = "/upload";
const FETCH_PATH: &str = "/fetch";
const MULTIPART_FIELD: &str = "file";
const PLAYER_WIDTH: u32 = 480;

/// How the selected file is put on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadEncoding {
    /// File bytes as the request body, with `Content-Type` and `X-File-Name` headers.
    #[default]
    Raw,
    /// A single multipart form part carrying the file.
    Multipart,
}

impl FromStr for UploadEncoding {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "raw" | "binary" => Ok(UploadEncoding::Raw),
            "multipart" | "form" => Ok(UploadEncoding::Multipart),
            other => Err(anyhow::anyhow!(
                "Unknown upload encoding '{}'. Expected 'raw' or 'multipart'",
                other
            )),
        }
    }
}

impl Display for UploadEncoding {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            UploadEncoding::Raw => write!(f, "raw"),
            UploadEncoding::Multipart => write!(f, "multipart"),
        }
    }
}

/// How the listing is rendered into the gallery region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// One inline player per video.
    #[default]
    Player,
    /// A clickable title per video feeding a single player.
    Playlist,
}

impl FromStr for RenderStyle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "player" | "players" | "inline" => Ok(RenderStyle::Player),
            "playlist" => Ok(RenderStyle::Playlist),
            other => Err(anyhow::anyhow!(
                "Unknown render style '{}'. Expected 'player' or 'playlist'",
                other
            )),
        }
    }
}

impl Display for RenderStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            RenderStyle::Player => write!(f, "player"),
            RenderStyle::Playlist => write!(f, "playlist"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct GalleryConfig {
    pub api_base_url: String,
    pub upload_path: String,
    pub fetch_path: String,
    pub upload_encoding: UploadEncoding,
    /// Percent-encode the `X-File-Name` header value.
    pub encode_file_name: bool,
    pub multipart_field: String,
    pub render_style: RenderStyle,
    pub autoplay_first: bool,
    pub player_width: u32,
    /// `None` keeps the HTTP client's default.
    pub request_timeout_secs: Option<u64>,
}

impl GalleryConfig {
    /// Configuration with defaults for everything but the base URL.
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
            upload_path: UPLOAD_PATH.to_string(),
            fetch_path: FETCH_PATH.to_string(),
            upload_encoding: UploadEncoding::default(),
            encode_file_name: true,
            multipart_field: MULTIPART_FIELD.to_string(),
            render_style: RenderStyle::default(),
            autoplay_first: false,
            player_width: PLAYER_WIDTH,
            request_timeout_secs: None,
        }
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. `from_env` uses the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("GALLERY_API_URL")
            .or_else(|| lookup("API_URL"))
            .ok_or_else(|| anyhow::anyhow!("GALLERY_API_URL must be set"))?;

        let mut config = Self::new(api_base_url);

        if let Some(path) = lookup("GALLERY_UPLOAD_PATH") {
            config.upload_path = path;
        }
        if let Some(path) = lookup("GALLERY_FETCH_PATH") {
            config.fetch_path = path;
        }
        if let Some(encoding) = lookup("GALLERY_UPLOAD_ENCODING") {
            config.upload_encoding = encoding.parse()?;
        }
        config.encode_file_name = lookup("GALLERY_ENCODE_FILE_NAME")
            .map(|v| parse_bool(&v, "GALLERY_ENCODE_FILE_NAME"))
            .transpose()?
            .unwrap_or(true);
        if let Some(field) = lookup("GALLERY_MULTIPART_FIELD") {
            config.multipart_field = field.trim().to_string();
        }
        if let Some(style) = lookup("GALLERY_RENDER_STYLE") {
            config.render_style = style.parse()?;
        }
        config.autoplay_first = lookup("GALLERY_AUTOPLAY_FIRST")
            .map(|v| parse_bool(&v, "GALLERY_AUTOPLAY_FIRST"))
            .transpose()?
            .unwrap_or(false);
        config.player_width = match lookup("GALLERY_PLAYER_WIDTH") {
            Some(v) => v
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("GALLERY_PLAYER_WIDTH must be a valid number"))?,
            None => PLAYER_WIDTH,
        };
        config.request_timeout_secs = lookup("GALLERY_REQUEST_TIMEOUT_SECS")
            .map(|v| {
                v.trim().parse::<u64>().map_err(|_| {
                    anyhow::anyhow!("GALLERY_REQUEST_TIMEOUT_SECS must be a valid number")
                })
            })
            .transpose()?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://"))
        {
            return Err(anyhow::anyhow!(
                "GALLERY_API_URL must start with http:// or https://, got '{}'",
                self.api_base_url
            ));
        }
        for (name, path) in [
            ("GALLERY_UPLOAD_PATH", &self.upload_path),
            ("GALLERY_FETCH_PATH", &self.fetch_path),
        ] {
            if !path.starts_with('/') {
                return Err(anyhow::anyhow!("{} must start with '/', got '{}'", name, path));
            }
        }
        if self.player_width == 0 {
            return Err(anyhow::anyhow!("GALLERY_PLAYER_WIDTH must be greater than 0"));
        }
        if self.multipart_field.is_empty() {
            return Err(anyhow::anyhow!("GALLERY_MULTIPART_FIELD cannot be empty"));
        }
        if self.request_timeout_secs == Some(0) {
            return Err(anyhow::anyhow!(
                "GALLERY_REQUEST_TIMEOUT_SECS must be greater than 0"
            ));
        }
        Ok(())
    }

    pub fn upload_url(&self) -> String {
        format!("{}{}", self.api_base_url, self.upload_path)
    }

    pub fn fetch_url(&self) -> String {
        format!("{}{}", self.api_base_url, self.fetch_path)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

fn parse_bool(value: &str, name: &str) -> Result<bool, anyhow::Error> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(anyhow::anyhow!("{} must be true or false", name)),
    }
}
