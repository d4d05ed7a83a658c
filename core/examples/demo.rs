use std::io;

use anyhow::Result;
use modmedia_core::{MediaSource, Playlist, PlayerFacade, Renderer};

fn main() -> Result<()> {
    // Set up logging
    env_logger::init();

    let mut playlist = Playlist::new("Demo");
    playlist.add_item(MediaSource::local_file("song.mp3"));
    playlist.add_item(MediaSource::cached(MediaSource::hls_stream(
        "https://example.com/live/master.m3u8",
    )));

    let renderer = Renderer::Software
        .watermark("© ModularMedia")
        .subtitle("Now Playing...");

    let mut facade = PlayerFacade::new(renderer);
    facade.load_playlist(playlist);

    let mut out = io::stdout();
    facade.play_all(&mut out)?;

    // Replay to show the proxy serving its cached text
    facade.play_all(&mut out)?;

    Ok(())
}
