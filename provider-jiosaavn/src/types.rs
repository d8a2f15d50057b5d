//! JioSaavn API response types
//!
//! Raw serde shapes for the `api.php` JSON endpoint plus the normalized
//! entity records the client hands out. The upstream JSON is loosely typed —
//! durations and counts arrive as numbers or strings depending on the
//! endpoint — so the numeric fields go through lenient deserializers.

use serde::{Deserialize, Deserializer};

// =============================================================================
// Raw API shapes
// =============================================================================

/// `search.getResults` response
#[derive(Debug, Deserialize)]
pub struct ApiSearchResponse {
    #[serde(default)]
    pub results: Vec<ApiSong>,
}

/// Song-list response (`webapi.get type=song`, `song.getDetails`)
#[derive(Debug, Deserialize)]
pub struct ApiSongListResponse {
    #[serde(default)]
    pub songs: Vec<ApiSong>,
}

/// Raw song resource
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSong {
    #[serde(default)]
    pub id: String,

    pub title: Option<String>,

    /// Canonical web URL
    pub perma_url: Option<String>,

    /// Artwork URL, usually the 150x150 rendition
    pub image: Option<String>,

    #[serde(default)]
    pub more_info: ApiSongInfo,
}

/// The `more_info` block of a song resource
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiSongInfo {
    /// Duration in seconds; number or string upstream
    #[serde(default, deserialize_with = "lenient_f64")]
    pub duration: Option<f64>,

    #[serde(default, rename = "artistMap")]
    pub artist_map: ApiArtistMap,

    /// Opaque encrypted media reference, never decoded here
    pub encrypted_media_url: Option<String>,

    /// Album name
    pub album: Option<String>,

    pub album_url: Option<String>,

    pub media_preview_url: Option<String>,

    /// Alternate preview field used by some endpoints
    pub vlink: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiArtistMap {
    #[serde(default)]
    pub primary_artists: Vec<ApiArtistRef>,
}

/// Artist entry inside a song's artist map
#[derive(Debug, Clone, Deserialize)]
pub struct ApiArtistRef {
    pub name: Option<String>,
    pub perma_url: Option<String>,
    pub image: Option<String>,
}

/// Album resource (`webapi.get type=album`)
#[derive(Debug, Deserialize)]
pub struct ApiAlbum {
    #[serde(default)]
    pub id: String,

    pub title: Option<String>,
    pub perma_url: Option<String>,
    pub image: Option<String>,

    /// Author line shown under the album title
    pub subtitle: Option<String>,

    #[serde(default)]
    pub list: Vec<ApiSong>,

    /// Declared song count; may exceed `list.len()` when paginated upstream
    #[serde(default, deserialize_with = "lenient_u64")]
    pub list_count: Option<u64>,
}

/// Artist resource (`webapi.get type=artist`)
#[derive(Debug, Deserialize)]
pub struct ApiArtist {
    pub name: Option<String>,

    #[serde(default)]
    pub urls: ApiArtistUrls,

    pub image: Option<String>,

    /// Top songs only, capped server-side
    #[serde(default, rename = "topSongs")]
    pub top_songs: Vec<ApiSong>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ApiArtistUrls {
    pub overview: Option<String>,
}

/// Playlist resource (`webapi.get type=playlist`)
#[derive(Debug, Deserialize)]
pub struct ApiPlaylist {
    pub title: Option<String>,
    pub perma_url: Option<String>,
    pub image: Option<String>,

    #[serde(default)]
    pub list: Vec<ApiSong>,

    #[serde(default, deserialize_with = "lenient_u64")]
    pub list_count: Option<u64>,
}

/// Accept a JSON number or numeric string, else `None`
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}

/// Accept a JSON number or numeric string, else `None`
fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::Number(n) => n.as_u64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}

// =============================================================================
// Normalized entity records
// =============================================================================

/// Normalized track record
///
/// Read-only; created fresh from a catalog response and discarded after
/// being mapped into a host-engine track.
#[derive(Debug, Clone, PartialEq)]
pub struct SaavnTrack {
    /// Catalog-native id
    pub identifier: String,

    pub title: String,

    /// Duration in whole milliseconds, 0 when the catalog omitted it
    pub length: u64,

    /// Canonical web URL
    pub uri: Option<String>,

    /// Artwork URL upscaled to the 500x500 rendition, `""` when absent
    pub artwork_url: String,

    /// Primary artist name
    pub author: Option<String>,

    /// Opaque encrypted media reference for the downstream streaming
    /// resolver; never interpreted here
    pub encrypted_media_url: Option<String>,

    pub album_url: Option<String>,
    pub album_name: Option<String>,
    pub artist_url: Option<String>,
    pub artist_artwork_url: Option<String>,

    /// Preview stream URL
    pub preview_url: Option<String>,
}

/// Normalized album record
#[derive(Debug, Clone, PartialEq)]
pub struct SaavnAlbum {
    pub id: String,
    pub name: String,
    pub uri: String,
    pub artwork_url: String,
    pub author: String,
    pub tracks: Vec<SaavnTrack>,

    /// Declared total; may exceed `tracks.len()` when paginated upstream
    pub total_songs: u64,
}

/// Normalized artist record
#[derive(Debug, Clone, PartialEq)]
pub struct SaavnArtist {
    pub name: String,

    /// Artist overview URL
    pub uri: String,

    pub artwork_url: String,

    /// Top songs only
    pub tracks: Vec<SaavnTrack>,
}

/// Normalized playlist record
#[derive(Debug, Clone, PartialEq)]
pub struct SaavnPlaylist {
    pub title: String,
    pub uri: String,
    pub artwork_url: String,
    pub tracks: Vec<SaavnTrack>,
    pub total_songs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_song_with_string_duration() {
        let json = r#"{
            "id": "5WXAlMNt",
            "title": "Kesariya",
            "perma_url": "https://www.jiosaavn.com/song/kesariya/HwoFcDZqdWI",
            "image": "https://c.saavncdn.com/191/Kesariya-150x150.jpg",
            "more_info": {
                "duration": "245",
                "album": "Brahmastra",
                "album_url": "https://www.jiosaavn.com/album/brahmastra/xyz",
                "encrypted_media_url": "ID2ieOjCrwfgWPc",
                "artistMap": {
                    "primary_artists": [
                        {
                            "name": "Arijit Singh",
                            "perma_url": "https://www.jiosaavn.com/artist/arijit-singh/abc",
                            "image": "https://c.saavncdn.com/artists/Arijit_150x150.jpg"
                        }
                    ]
                }
            }
        }"#;

        let song: ApiSong = serde_json::from_str(json).unwrap();
        assert_eq!(song.id, "5WXAlMNt");
        assert_eq!(song.more_info.duration, Some(245.0));
        assert_eq!(
            song.more_info.artist_map.primary_artists[0].name.as_deref(),
            Some("Arijit Singh")
        );
    }

    #[test]
    fn test_deserialize_song_with_numeric_duration_and_no_artists() {
        let json = r#"{
            "id": "abc",
            "title": "Instrumental",
            "more_info": { "duration": 180.5 }
        }"#;

        let song: ApiSong = serde_json::from_str(json).unwrap();
        assert_eq!(song.more_info.duration, Some(180.5));
        assert!(song.more_info.artist_map.primary_artists.is_empty());
        assert!(song.perma_url.is_none());
    }

    #[test]
    fn test_deserialize_song_without_more_info() {
        let json = r#"{ "id": "abc", "title": "Bare" }"#;

        let song: ApiSong = serde_json::from_str(json).unwrap();
        assert_eq!(song.more_info.duration, None);
        assert!(song.more_info.encrypted_media_url.is_none());
    }

    #[test]
    fn test_deserialize_album_with_string_count() {
        let json = r#"{
            "id": "10538501",
            "title": "Brahmastra",
            "perma_url": "https://www.jiosaavn.com/album/brahmastra/xyz",
            "image": "https://c.saavncdn.com/191/Brahmastra-150x150.jpg",
            "subtitle": "Pritam",
            "list": [
                { "id": "s1", "title": "Kesariya", "more_info": { "duration": "245" } }
            ],
            "list_count": "7"
        }"#;

        let album: ApiAlbum = serde_json::from_str(json).unwrap();
        assert_eq!(album.list.len(), 1);
        assert_eq!(album.list_count, Some(7));
        assert_eq!(album.subtitle.as_deref(), Some("Pritam"));
    }

    #[test]
    fn test_deserialize_artist_with_top_songs() {
        let json = r#"{
            "name": "Arijit Singh",
            "urls": { "overview": "https://www.jiosaavn.com/artist/arijit-singh/abc" },
            "image": "https://c.saavncdn.com/artists/Arijit_150x150.jpg",
            "topSongs": [
                { "id": "s1", "title": "Kesariya" },
                { "id": "s2", "title": "Apna Bana Le" }
            ]
        }"#;

        let artist: ApiArtist = serde_json::from_str(json).unwrap();
        assert_eq!(artist.top_songs.len(), 2);
        assert_eq!(
            artist.urls.overview.as_deref(),
            Some("https://www.jiosaavn.com/artist/arijit-singh/abc")
        );
    }

    #[test]
    fn test_deserialize_search_response_without_results() {
        let json = r#"{ "total": 0, "start": 1 }"#;

        let response: ApiSearchResponse = serde_json::from_str(json).unwrap();
        assert!(response.results.is_empty());
    }
}
