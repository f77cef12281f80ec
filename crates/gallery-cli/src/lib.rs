use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use gallery_core::render::render_page;
use gallery_core::{GalleryError, GalleryRegion, Notice, NoticeLevel, Notifier, RenderedGallery};

/// Title of the generated gallery page.
pub const PAGE_TITLE: &str = "Video Gallery";

/// Truncate a string to max_len characters, appending "..." if truncated.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

/// Notifier printing each notice as one line.
///
/// Keeps a count of error notices so the binary can pick its exit status.
pub struct TerminalNotifier {
    out: Mutex<Box<dyn Write + Send>>,
    errors: AtomicUsize,
}

impl TerminalNotifier {
    pub fn stderr() -> Self {
        Self::with_writer(Box::new(std::io::stderr()))
    }

    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
            errors: AtomicUsize::new(0),
        }
    }

    pub fn error_count(&self) -> usize {
        self.errors.load(Ordering::SeqCst)
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: &Notice) {
        let prefix = match notice.level {
            NoticeLevel::Info => "notice",
            NoticeLevel::Error => {
                self.errors.fetch_add(1, Ordering::SeqCst);
                "error"
            }
        };
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{}: {}", prefix, notice.message);
            let _ = out.flush();
        }
    }
}

/// Gallery region backed by an HTML file, rewritten on every render.
#[derive(Debug, Clone)]
pub struct HtmlFileRegion {
    path: PathBuf,
}

impl HtmlFileRegion {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GalleryRegion for HtmlFileRegion {
    fn replace(&mut self, gallery: &RenderedGallery) -> Result<(), GalleryError> {
        let page = render_page(PAGE_TITLE, gallery)?;
        std::fs::write(&self.path, page)?;
        tracing::info!(
            path = %self.path.display(),
            videos = gallery.media_count,
            "Gallery page written"
        );
        Ok(())
    }
}
