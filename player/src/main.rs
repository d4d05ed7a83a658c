use std::io;

use anyhow::Result;
use clap::Parser;

mod app;

use app::{App, RendererKind};

/// Command line for the demo player
#[derive(Debug, Parser)]
#[command(name = "modmedia", version, about = "Modular Media Streaming Suite")]
pub struct Cli {
    /// Media files or URLs to queue; the built-in demo playlist is used when
    /// none are given
    pub media: Vec<String>,

    /// Base renderer to start with
    #[arg(long, value_enum, default_value = "software")]
    pub renderer: RendererKind,

    /// Watermark decorator text (empty disables the decorator)
    #[arg(long, default_value = "© ModularMedia")]
    pub watermark: String,

    /// Subtitle decorator text (empty disables the decorator)
    #[arg(long, default_value = "Now Playing...")]
    pub subtitle: String,

    /// Equalizer decorator profile (empty disables the decorator)
    #[arg(long, default_value = "Bass Boost")]
    pub equalizer: String,

    /// Wrap every queued source in the caching proxy
    #[arg(long)]
    pub cached: bool,

    /// Name of the assembled playlist
    #[arg(long, default_value = "My Playlist")]
    pub playlist: String,
}

fn main() -> Result<()> {
    // Setup logger
    env_logger::init();

    let cli = Cli::parse();
    let mut app = App::new(cli)?;
    app.run(&mut io::stdout())
}
