use std::io::Write;

use anyhow::Result;
use log::debug;

use crate::playlist::{Playlist, PlaylistItem};
use crate::render::Renderer;

/// Plays single playlist items through the current renderer.
pub struct Player {
    renderer: Renderer,
}

impl Player {
    pub fn new(renderer: Renderer) -> Self {
        Self { renderer }
    }

    /// Replace the current renderer.
    ///
    /// The replacement is wholesale: handing over a bare base renderer drops
    /// whatever decorator chain was installed before.
    pub fn set_renderer(&mut self, renderer: Renderer) {
        self.renderer = renderer;
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Fetch one item's data and render it.
    pub fn play(&mut self, item: &mut PlaylistItem, out: &mut dyn Write) -> Result<()> {
        let data = item.data(out)?;
        debug!("Playing {data:?}");
        self.renderer.render(&data, out)
    }
}

/// One-stop entry point over a player and a loaded playlist.
pub struct PlayerFacade {
    player: Player,
    playlist: Option<Playlist>,
}

impl PlayerFacade {
    pub fn new(renderer: Renderer) -> Self {
        Self {
            player: Player::new(renderer),
            playlist: None,
        }
    }

    /// Replace the player's renderer, decorator chain included.
    pub fn set_renderer(&mut self, renderer: Renderer) {
        self.player.set_renderer(renderer);
    }

    /// Load a playlist, discarding any previously loaded one.
    pub fn load_playlist(&mut self, playlist: Playlist) {
        debug!(
            "Loaded playlist {:?} with {} items",
            playlist.name(),
            playlist.len()
        );
        self.playlist = Some(playlist);
    }

    pub fn playlist(&self) -> Option<&Playlist> {
        self.playlist.as_ref()
    }

    /// Play every item of the loaded playlist in insertion order.
    ///
    /// Without a loaded playlist this writes a notice and returns normally.
    pub fn play_all(&mut self, out: &mut dyn Write) -> Result<()> {
        let Some(playlist) = self.playlist.as_mut() else {
            writeln!(out, "No playlist loaded.")?;
            return Ok(());
        };

        writeln!(out, "--- Playing {} ---", playlist.name())?;
        for item in playlist.items_mut() {
            self.player.play(item, out)?;
        }
        Ok(())
    }
}
