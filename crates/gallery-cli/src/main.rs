//! Gallery CLI: command-line client for the video gallery API.
//!
//! Set GALLERY_API_URL (or pass --api-url). Other GALLERY_* variables tune
//! the upload encoding and the rendered page.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use gallery_api_client::{read_upload_file, ApiClient, Gallery, VideoApi};
use gallery_cli::{init_tracing, truncate_string, HtmlFileRegion, TerminalNotifier};
use gallery_core::{
    FileSelection, GalleryConfig, Notice, Notifier, RenderOptions, RenderStyle, UploadEncoding,
};
use serde::Serialize;

const DEFAULT_OUTPUT: &str = "gallery.html";
const SUMMARY_TITLE_WIDTH: usize = 60;

#[derive(Parser)]
#[command(name = "gallery", about = "Video gallery API CLI")]
struct Cli {
    /// Base URL of the gallery API (overrides GALLERY_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a video file, then refresh the gallery page
    Upload {
        /// Path to the file to upload
        file: Option<PathBuf>,
        /// Request encoding: raw or multipart
        #[arg(long)]
        encoding: Option<UploadEncoding>,
        /// Gallery page written after the upload
        #[arg(long, short, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
    },
    /// Fetch the video list and write it as an HTML gallery page
    List {
        /// Gallery page to write
        #[arg(long, short, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
        /// Render style: player or playlist
        #[arg(long)]
        style: Option<RenderStyle>,
        /// Auto-select and play the first video
        #[arg(long)]
        autoplay: bool,
    },
    /// Fetch the video list and print it as JSON
    Fetch,
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

fn load_config(api_url: Option<String>) -> anyhow::Result<GalleryConfig> {
    GalleryConfig::from_lookup(|key| match (key, &api_url) {
        ("GALLERY_API_URL", Some(url)) => Some(url.clone()),
        _ => std::env::var(key).ok(),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let mut config = load_config(cli.api_url).context(
        "Failed to load configuration. Set GALLERY_API_URL or pass --api-url",
    )?;

    let notifier = TerminalNotifier::stderr();

    match cli.command {
        Commands::Upload {
            file,
            encoding,
            output,
        } => {
            if let Some(encoding) = encoding {
                config.upload_encoding = encoding;
            }
            let mut gallery = build_gallery(config)?;
            let mut region = HtmlFileRegion::new(output);

            let mut input = match file {
                Some(path) => match read_upload_file(&path).await {
                    Ok(file) => FileSelection::from(file),
                    Err(err) => {
                        tracing::error!(path = %path.display(), error = %err, "Failed to read file");
                        notifier.notify(&Notice::from(&err));
                        return Ok(ExitCode::FAILURE);
                    }
                },
                None => FileSelection::empty(),
            };

            if let Ok(outcome) = gallery.upload(&mut input, &mut region, &notifier).await {
                if let Some(count) = outcome.refreshed {
                    tracing::info!(videos = count, "Gallery refreshed after upload");
                }
            }
        }
        Commands::List {
            output,
            style,
            autoplay,
        } => {
            if let Some(style) = style {
                config.render_style = style;
            }
            if autoplay {
                config.autoplay_first = true;
            }
            let mut gallery = build_gallery(config)?;
            let mut region = HtmlFileRegion::new(output);

            if let Ok(rendered) = gallery.load(&mut region, &notifier).await {
                println!(
                    "Rendered {} video(s) to {}",
                    rendered.media_count,
                    region.path().display()
                );
            }
        }
        Commands::Fetch => {
            let client = ApiClient::new(config)?;
            match client.fetch_videos().await {
                Ok(videos) => {
                    for video in &videos {
                        tracing::info!(
                            title = %truncate_string(video.display_title(), SUMMARY_TITLE_WIDTH),
                            content_type = %video.media_type(),
                            url = %video.url,
                            "Video"
                        );
                    }
                    print_json(&videos)?;
                }
                Err(err) => {
                    tracing::error!(error = %err, "Failed to fetch videos");
                    notifier.notify(&Notice::from(&err));
                }
            }
        }
    }

    if notifier.error_count() > 0 {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn build_gallery(config: GalleryConfig) -> anyhow::Result<Gallery<ApiClient>> {
    config.validate()?;
    let render = RenderOptions::from(&config);
    let client = ApiClient::new(config)?;
    Ok(Gallery::new(client, render))
}
