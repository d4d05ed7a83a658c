pub mod player;
pub mod playlist;
pub mod render;
pub mod source;

use std::path::Path;

use anyhow::Result;
use log::info;

// Re-exports
pub use player::{Player, PlayerFacade};
pub use playlist::{Playlist, PlaylistItem};
pub use render::Renderer;
pub use source::{MediaSource, SourceError, is_hls_url, is_remote_url};

/// Kind of media source behind a location string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaSourceKind {
    /// Local file on disk
    LocalFile,
    /// Remote media API endpoint
    RemoteApi,
    /// Live HLS stream
    HlsStream,
    /// Unsupported media source
    Unsupported,
}

/// Detect the media source kind from a URL or file path
pub fn detect_source_kind(url_or_path: &str) -> MediaSourceKind {
    // Check for an HLS playlist URL before the generic remote check
    if is_hls_url(url_or_path) {
        return MediaSourceKind::HlsStream;
    }

    if is_remote_url(url_or_path) {
        return MediaSourceKind::RemoteApi;
    }

    // Check if it's a local file
    if Path::new(url_or_path).exists() {
        return MediaSourceKind::LocalFile;
    }

    // Couldn't determine the source kind
    MediaSourceKind::Unsupported
}

/// Create the appropriate media source for a URL or file path, optionally
/// wrapped in the caching proxy.
pub fn create_source(url_or_path: &str, cached: bool) -> Result<MediaSource> {
    let kind = detect_source_kind(url_or_path);
    info!("Detected {kind:?} source for {url_or_path}");

    let source = match kind {
        MediaSourceKind::LocalFile => MediaSource::local_file(url_or_path),
        MediaSourceKind::RemoteApi => MediaSource::remote_api(url_or_path),
        MediaSourceKind::HlsStream => MediaSource::hls_stream(url_or_path),
        MediaSourceKind::Unsupported => {
            return Err(SourceError::Unsupported(url_or_path.to_string()).into());
        }
    };

    if cached {
        Ok(MediaSource::cached(source))
    } else {
        Ok(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_hls_urls() {
        assert_eq!(
            detect_source_kind("https://example.com/live/master.m3u8"),
            MediaSourceKind::HlsStream
        );
    }

    #[test]
    fn detects_remote_urls() {
        assert_eq!(
            detect_source_kind("https://example.com/stream/lofi"),
            MediaSourceKind::RemoteApi
        );
    }

    #[test]
    fn detects_existing_local_files() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        assert_eq!(detect_source_kind(path), MediaSourceKind::LocalFile);
    }

    #[test]
    fn rejects_unknown_locations() {
        assert_eq!(
            detect_source_kind("no/such/file.mp3"),
            MediaSourceKind::Unsupported
        );
        assert!(create_source("no/such/file.mp3", false).is_err());
    }

    #[test]
    fn factory_builds_the_detected_variant() {
        let mut source = create_source("https://example.com/stream/lofi", false).unwrap();
        let mut sink = Vec::new();
        assert_eq!(
            source.fetch(&mut sink).unwrap(),
            "API Stream:https://example.com/stream/lofi"
        );
    }

    #[test]
    fn factory_wraps_in_the_caching_proxy_on_request() {
        let mut source = create_source("https://example.com/live/master.m3u8", true).unwrap();
        assert!(matches!(source, MediaSource::Cached { .. }));

        let mut sink = Vec::new();
        assert_eq!(
            source.fetch(&mut sink).unwrap(),
            "HLS Stream: https://example.com/live/master.m3u8"
        );
        assert_eq!(
            String::from_utf8(sink).unwrap(),
            "[Proxy] Fetching and caching stream...\n"
        );
    }
}
