//! URL classification for JioSaavn web links
//!
//! One ordered-alternatives matcher over the three known catalog URL
//! shapes. Classification is a small state machine: no-match, a direct
//! entity link (`/song|album|artist|featured/<slug>/<token>`), the legacy
//! share-song shape (`/s/song/<..>/<..>/<..>/<token>`), or the
//! share-playlist shape (`/s/playlist/<..>/<..>/<token>`).
//!
//! The share-token extraction helpers at the bottom are advisory utilities
//! for callers holding a known-entity URL; dispatch never uses them.

use regex::Regex;

/// Entity kind encoded in a catalog URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaavnEntity {
    Song,
    Album,
    Artist,
    /// Editorial playlist under the `/featured/` path
    Featured,
    Playlist,
}

impl SaavnEntity {
    fn parse(segment: &str) -> Option<Self> {
        match segment.to_ascii_lowercase().as_str() {
            "song" => Some(Self::Song),
            "album" => Some(Self::Album),
            "artist" => Some(Self::Artist),
            "featured" => Some(Self::Featured),
            "playlist" => Some(Self::Playlist),
            _ => None,
        }
    }
}

/// A classified catalog URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMatch {
    pub entity: SaavnEntity,
    pub token: String,
}

/// Compiled URL patterns, built once per resolver
pub struct SaavnUrlMatcher {
    direct: Regex,
    backup_song: Regex,
    share_playlist: Regex,
    absolute_url: Regex,
    extract_track: Regex,
    extract_album: Regex,
    extract_artist: Regex,
    extract_playlist: Regex,
}

impl SaavnUrlMatcher {
    pub fn new() -> Self {
        Self {
            direct: Regex::new(
                r"(?i)(?:https?://)?(?:www\.)?(?:jiosaavn\.com|saavn\.com)/(song|album|artist|featured)/[^/]+/([^/]+)",
            )
            .expect("valid pattern"),
            backup_song: Regex::new(
                r"(?i)(?:https?://)?(?:www\.)?(?:jiosaavn\.com|saavn\.com)/s/(song)/[^/]+/[^/]+/[^/]+/([^/]+)",
            )
            .expect("valid pattern"),
            share_playlist: Regex::new(
                r"(?i)(?:https?://)?(?:www\.)?(?:jiosaavn\.com|saavn\.com)/s/(playlist)/[^/]+/[^/]+/([^/]+)",
            )
            .expect("valid pattern"),
            absolute_url: Regex::new(r"(?i)^https?://").expect("valid pattern"),
            extract_track: Regex::new(r"(?i)jiosaavn\.com/song/[^/]+/([^/]+)$")
                .expect("valid pattern"),
            extract_album: Regex::new(r"(?i)jiosaavn\.com/album/[^/]+/([^/]+)$")
                .expect("valid pattern"),
            extract_artist: Regex::new(r"(?i)jiosaavn\.com/artist/[^/]+/([^/]+)$")
                .expect("valid pattern"),
            // Second alternative deliberately accepts any trailing path
            // segment; kept from the upstream contract, do not widen.
            extract_playlist: Regex::new(
                r"(?i)(?:jiosaavn\.com|saavn\.com)/(?:featured|s/playlist)/[^/]+/[^/]+/([^/]+)$|/([^/]+)$",
            )
            .expect("valid pattern"),
        }
    }

    /// Classify a query string
    ///
    /// Returns `None` when the string is not a recognized catalog URL, in
    /// which case dispatch falls through to free-text handling.
    pub fn classify(&self, query: &str) -> Option<UrlMatch> {
        for pattern in [&self.direct, &self.backup_song, &self.share_playlist] {
            if let Some(caps) = pattern.captures(query) {
                let entity = SaavnEntity::parse(caps.get(1)?.as_str())?;
                let token = caps.get(2)?.as_str().to_string();
                return Some(UrlMatch { entity, token });
            }
        }
        None
    }

    /// Whether the query is an absolute HTTP(S) URL of any site
    pub fn is_absolute_url(&self, query: &str) -> bool {
        self.absolute_url.is_match(query)
    }

    /// Extract the share token from a track page URL
    pub fn track_token<'a>(&self, url: &'a str) -> Option<&'a str> {
        self.extract_track
            .captures(url)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }

    /// Extract the share token from an album page URL
    pub fn album_token<'a>(&self, url: &'a str) -> Option<&'a str> {
        self.extract_album
            .captures(url)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }

    /// Extract the share token from an artist page URL
    pub fn artist_token<'a>(&self, url: &'a str) -> Option<&'a str> {
        self.extract_artist
            .captures(url)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }

    /// Extract the share token from a playlist page URL
    ///
    /// Falls back to the last path segment of any slash-bearing string.
    pub fn playlist_token<'a>(&self, url: &'a str) -> Option<&'a str> {
        self.extract_playlist
            .captures(url)
            .and_then(|c| c.get(1).or_else(|| c.get(2)))
            .map(|m| m.as_str())
    }
}

impl Default for SaavnUrlMatcher {
    fn default() -> Self {
        Self::new()
    }
}
