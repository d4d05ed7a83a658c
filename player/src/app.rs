use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use log::info;

use modmedia_core::{MediaSource, Playlist, PlayerFacade, Renderer, create_source};

use crate::Cli;

/// Base renderer selection on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RendererKind {
    Software,
    Hardware,
}

impl RendererKind {
    fn renderer(self) -> Renderer {
        match self {
            Self::Software => Renderer::Software,
            Self::Hardware => Renderer::Hardware,
        }
    }

    fn other(self) -> Self {
        match self {
            Self::Software => Self::Hardware,
            Self::Hardware => Self::Software,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Software => "Software",
            Self::Hardware => "Hardware",
        }
    }
}

/// Application state for one invocation: the facade plus the run mode.
pub struct App {
    facade: PlayerFacade,
    base: RendererKind,
    demo: bool,
}

impl App {
    /// Assemble the playlist and renderer chain from the command line.
    pub fn new(cli: Cli) -> Result<Self> {
        let demo = cli.media.is_empty();

        let mut playlist = Playlist::new(cli.playlist);
        if demo {
            playlist.add_item(MediaSource::local_file("song.mp3"));
            playlist.add_item(MediaSource::remote_api("https://example.com/stream/lofi"));
            playlist.add_item(MediaSource::cached(MediaSource::hls_stream(
                "https://example.com/live/master.m3u8",
            )));
        } else {
            for location in &cli.media {
                playlist.add_item(create_source(location, cli.cached)?);
            }
        }
        info!("Queued {} items", playlist.len());

        let mut renderer = cli.renderer.renderer();
        if !cli.watermark.is_empty() {
            renderer = renderer.watermark(cli.watermark);
        }
        if !cli.subtitle.is_empty() {
            renderer = renderer.subtitle(cli.subtitle);
        }
        if !cli.equalizer.is_empty() {
            renderer = renderer.equalizer(cli.equalizer);
        }

        let mut facade = PlayerFacade::new(renderer);
        facade.load_playlist(playlist);

        Ok(Self {
            facade,
            base: cli.renderer,
            demo,
        })
    }

    /// Play the queued media. In demo mode, also switch base renderers at
    /// runtime and play a second pass.
    pub fn run(&mut self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Modular Media Streaming Suite")?;
        writeln!(out)?;

        self.facade.play_all(out)?;

        if self.demo {
            let next = self.base.other();
            writeln!(out)?;
            writeln!(out, ">>> Switching to {} Renderer...", next.label())?;
            writeln!(out)?;

            // Swaps the whole chain; the decorators do not carry over.
            self.facade.set_renderer(next.renderer());
            self.facade.play_all(out)?;

            writeln!(out)?;
            writeln!(out, "=== Demo Finished ===")?;
        }

        Ok(())
    }
}
