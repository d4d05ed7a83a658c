use std::io::Write;

use anyhow::Result;
use log::debug;
use thiserror::Error;

/// Errors for locations no source variant can handle.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The location is neither a known URL scheme nor an existing file
    #[error("Unsupported media source: {0}")]
    Unsupported(String),
}

/// Check if a location is a remote URL
pub fn is_remote_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Check if a location points at a live HLS stream
pub fn is_hls_url(location: &str) -> bool {
    is_remote_url(location) && (location.ends_with(".m3u8") || location.contains(".m3u8?"))
}

/// Where media data comes from.
///
/// A closed set of variants sharing one `fetch` capability. `Cached` wraps
/// any other source and memoizes the first fetched text for the lifetime of
/// the value; the cache is never invalidated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    /// Local file on disk
    LocalFile { filename: String },
    /// Remote media API endpoint
    RemoteApi { url: String },
    /// Live HLS stream
    HlsStream { url: String },
    /// Caching stand-in for another source
    Cached {
        source: Box<MediaSource>,
        cache: Option<String>,
    },
}

impl MediaSource {
    pub fn local_file(filename: impl Into<String>) -> Self {
        Self::LocalFile {
            filename: filename.into(),
        }
    }

    pub fn remote_api(url: impl Into<String>) -> Self {
        Self::RemoteApi { url: url.into() }
    }

    pub fn hls_stream(url: impl Into<String>) -> Self {
        Self::HlsStream { url: url.into() }
    }

    /// Wrap a source in the caching proxy. The cache slot starts empty and
    /// is populated by the first `fetch`.
    pub fn cached(source: MediaSource) -> Self {
        Self::Cached {
            source: Box::new(source),
            cache: None,
        }
    }

    /// Produce the media text for this source.
    ///
    /// The `Cached` variant writes its hit/miss notice to `out` before
    /// answering; the other variants build their text without side effects.
    pub fn fetch(&mut self, out: &mut dyn Write) -> Result<String> {
        match self {
            Self::LocalFile { filename } => Ok(format!("File:{filename}")),
            Self::RemoteApi { url } => Ok(format!("API Stream:{url}")),
            Self::HlsStream { url } => Ok(format!("HLS Stream: {url}")),
            Self::Cached { source, cache } => match cache {
                Some(data) => {
                    debug!("Proxy cache hit");
                    writeln!(out, "[Proxy] Returning cached stream...")?;
                    Ok(data.clone())
                }
                None => {
                    debug!("Proxy cache miss, fetching from wrapped source");
                    writeln!(out, "[Proxy] Fetching and caching stream...")?;
                    let data = source.fetch(out)?;
                    *cache = Some(data.clone());
                    Ok(data)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetch_once(source: &mut MediaSource) -> (String, String) {
        let mut sink = Vec::new();
        let data = source.fetch(&mut sink).unwrap();
        (data, String::from_utf8(sink).unwrap())
    }

    #[test]
    fn local_file_fetch() {
        let mut source = MediaSource::local_file("song.mp3");
        let (data, notices) = fetch_once(&mut source);
        assert_eq!(data, "File:song.mp3");
        assert!(notices.is_empty());
    }

    #[test]
    fn remote_api_fetch() {
        let mut source = MediaSource::remote_api("https://example.com/stream/lofi");
        let (data, _) = fetch_once(&mut source);
        assert_eq!(data, "API Stream:https://example.com/stream/lofi");
    }

    #[test]
    fn hls_stream_fetch() {
        let mut source = MediaSource::hls_stream("https://example.com/live/master.m3u8");
        let (data, _) = fetch_once(&mut source);
        assert_eq!(data, "HLS Stream: https://example.com/live/master.m3u8");
    }

    #[test]
    fn cached_source_fetches_underlying_source_once() {
        let mut source =
            MediaSource::cached(MediaSource::remote_api("https://example.com/stream/lofi"));
        let mut sink = Vec::new();

        let first = source.fetch(&mut sink).unwrap();
        for _ in 0..3 {
            let again = source.fetch(&mut sink).unwrap();
            assert_eq!(again, first);
        }

        let notices = String::from_utf8(sink).unwrap();
        let misses = notices
            .lines()
            .filter(|line| *line == "[Proxy] Fetching and caching stream...")
            .count();
        let hits = notices
            .lines()
            .filter(|line| *line == "[Proxy] Returning cached stream...")
            .count();
        assert_eq!(misses, 1);
        assert_eq!(hits, 3);
    }

    #[test]
    fn cached_wraps_any_source() {
        let mut source = MediaSource::cached(MediaSource::local_file("song.mp3"));
        let (data, notices) = fetch_once(&mut source);
        assert_eq!(data, "File:song.mp3");
        assert_eq!(notices, "[Proxy] Fetching and caching stream...\n");
    }

    #[test]
    fn url_classification() {
        assert!(is_remote_url("https://example.com/stream/lofi"));
        assert!(is_remote_url("http://example.com/stream/lofi"));
        assert!(!is_remote_url("song.mp3"));
        assert!(is_hls_url("https://example.com/live/master.m3u8"));
        assert!(is_hls_url("https://example.com/live/master.m3u8?token=abc"));
        assert!(!is_hls_url("https://example.com/stream/lofi"));
        assert!(!is_hls_url("media/master.m3u8"));
    }
}
