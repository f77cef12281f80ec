//! HTML rendering of the video gallery
//!
//! Produces the fragment that replaces the gallery region after a successful
//! listing. Markup lives in askama templates under `templates/`, which
//! escape every interpolated value.

use askama::Template;

use crate::config::{GalleryConfig, RenderStyle};
use crate::error::GalleryError;
use crate::models::VideoDescriptor;

/// Fragment rendered for an empty listing.
pub const EMPTY_GALLERY_HTML: &str = "<p>No videos available.</p>";

/// Fallback text inside `<video>` for browsers without video support.
pub const VIDEO_UNSUPPORTED_TEXT: &str = "Your browser does not support the video tag.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub style: RenderStyle,
    pub autoplay_first: bool,
    pub player_width: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            style: RenderStyle::Player,
            autoplay_first: false,
            player_width: 480,
        }
    }
}

impl From<&GalleryConfig> for RenderOptions {
    fn from(config: &GalleryConfig) -> Self {
        Self {
            style: config.render_style,
            autoplay_first: config.autoplay_first,
            player_width: config.player_width,
        }
    }
}

/// Result of rendering a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedGallery {
    pub html: String,
    /// Number of descriptors rendered.
    pub media_count: usize,
    /// Index of the descriptor loaded into the player, if one was auto-selected.
    pub selected: Option<usize>,
}

impl RenderedGallery {
    pub fn is_empty(&self) -> bool {
        self.media_count == 0
    }
}

/// One descriptor as seen by the templates.
struct Entry<'a> {
    src: &'a str,
    media_type: &'a str,
    title: &'a str,
    selected: bool,
}

#[derive(Template)]
#[template(path = "players.html")]
struct PlayersTemplate<'a> {
    width: u32,
    unsupported: &'a str,
    entries: Vec<Entry<'a>>,
}

#[derive(Template)]
#[template(path = "playlist.html")]
struct PlaylistTemplate<'a> {
    width: u32,
    autoplay: bool,
    unsupported: &'a str,
    entries: Vec<Entry<'a>>,
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    title: &'a str,
    gallery: &'a str,
}

/// Render `videos` in received order.
pub fn render_gallery(
    videos: &[VideoDescriptor],
    options: &RenderOptions,
) -> Result<RenderedGallery, GalleryError> {
    if videos.is_empty() {
        return Ok(RenderedGallery {
            html: EMPTY_GALLERY_HTML.to_string(),
            media_count: 0,
            selected: None,
        });
    }

    let selected = options.autoplay_first.then_some(0);
    let entries = videos
        .iter()
        .enumerate()
        .map(|(index, video)| Entry {
            src: &video.url,
            media_type: video.media_type(),
            title: video.display_title(),
            selected: selected == Some(index),
        })
        .collect();

    let html = match options.style {
        RenderStyle::Player => PlayersTemplate {
            width: options.player_width,
            unsupported: VIDEO_UNSUPPORTED_TEXT,
            entries,
        }
        .render()?,
        RenderStyle::Playlist => PlaylistTemplate {
            width: options.player_width,
            autoplay: selected.is_some(),
            unsupported: VIDEO_UNSUPPORTED_TEXT,
            entries,
        }
        .render()?,
    };

    Ok(RenderedGallery {
        html,
        media_count: videos.len(),
        selected,
    })
}

/// Wrap a gallery fragment in a standalone HTML page.
pub fn render_page(title: &str, gallery: &RenderedGallery) -> Result<String, GalleryError> {
    let page = PageTemplate {
        title,
        gallery: &gallery.html,
    }
    .render()?;
    Ok(page)
}
