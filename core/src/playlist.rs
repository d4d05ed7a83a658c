use std::io::Write;

use anyhow::Result;

use crate::source::MediaSource;

/// An ordered, named collection of playlist entries.
///
/// A playlist is itself a [`PlaylistItem`], so playlists nest into a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    name: String,
    items: Vec<PlaylistItem>,
}

impl Playlist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Append an entry. Entries keep their insertion order.
    pub fn add_item(&mut self, item: impl Into<PlaylistItem>) {
        self.items.push(item.into());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[PlaylistItem] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [PlaylistItem] {
        &mut self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One entry in a playlist: a single media item or a nested playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistItem {
    /// A single media item backed by a source
    Media(MediaSource),
    /// A nested playlist
    Playlist(Playlist),
}

impl PlaylistItem {
    /// Produce this entry's media text.
    ///
    /// A `Media` entry delegates to its source untransformed. A nested
    /// playlist yields its `"Playlist: {name}"` label only; the contained
    /// entries are not aggregated.
    pub fn data(&mut self, out: &mut dyn Write) -> Result<String> {
        match self {
            Self::Media(source) => source.fetch(out),
            Self::Playlist(playlist) => Ok(format!("Playlist: {}", playlist.name)),
        }
    }
}

impl From<MediaSource> for PlaylistItem {
    fn from(source: MediaSource) -> Self {
        Self::Media(source)
    }
}

impl From<Playlist> for PlaylistItem {
    fn from(playlist: Playlist) -> Self {
        Self::Playlist(playlist)
    }
}
