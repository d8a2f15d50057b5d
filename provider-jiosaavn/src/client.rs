//! JioSaavn catalog client
//!
//! Translates the provider's logical operations into GET requests against
//! the `api.php` JSON endpoint and reshapes the responses into the
//! normalized records of [`crate::types`].
//!
//! ## API Endpoints
//!
//! All operations hit `https://www.jiosaavn.com/api.php` with a `__call`
//! selector plus boilerplate parameters:
//!
//! - **Search**: `__call=search.getResults&q={query}`
//! - **Track by share token**: `__call=webapi.get&token={id}&type=song`
//! - **Track by native id**: `__call=song.getDetails&pids={id}`
//! - **Album/Artist/Playlist**: `__call=webapi.get&token={id}&type={kind}`
//! - **Media auth token**: `__call=song.generateAuthToken&url={enc}&bitrate=320`
//!
//! The upstream rejects or alters behavior for unrecognized clients, so
//! every request carries a browser User-Agent and a JSON Accept header.

use bridge_traits::http::{HttpClient, HttpRequest};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::error::{Result, SaavnError};
use crate::types::{
    ApiAlbum, ApiArtist, ApiArtistRef, ApiPlaylist, ApiSearchResponse, ApiSong,
    ApiSongListResponse, SaavnAlbum, SaavnArtist, SaavnPlaylist, SaavnTrack,
};

/// JioSaavn API base URL
const API_BASE: &str = "https://www.jiosaavn.com/api.php";

/// Boilerplate parameters required on every `api.php` call
const BASE_PARAMS: &str = "api_version=4&_format=json&_marker=0&ctx=web6dot0";

/// The upstream serves different (or no) payloads to unknown clients
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/110.0.0.0 Safari/537.36";

const ACCEPT: &str = "application/json, text/plain, */*";

/// Server-side cap on artist top songs
const ARTIST_SONG_LIMIT: u32 = 50;

/// Timeout for API requests
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// JioSaavn catalog client
///
/// Pure fetch-and-reshape: every operation is one GET, one JSON parse, and
/// one mapping into a normalized record. No caching, no retries.
pub struct SaavnClient {
    http_client: Arc<dyn HttpClient>,
}

impl SaavnClient {
    /// Create a new catalog client over the given fetch capability
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self { http_client }
    }

    /// Execute one GET and parse the body as `T`
    ///
    /// Non-success statuses map to [`SaavnError::ApiStatus`]; success
    /// statuses with unparseable bodies map to [`SaavnError::Parse`].
    async fn fetch<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        let request = HttpRequest::get(url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", ACCEPT)
            .timeout(REQUEST_TIMEOUT);

        let response = self.http_client.execute(request).await?;

        if !response.is_success() {
            return Err(SaavnError::ApiStatus {
                status: response.status,
            });
        }

        debug!(status = response.status, "API request succeeded");

        serde_json::from_slice(&response.body).map_err(|e| SaavnError::Parse(e.to_string()))
    }

    /// Free-text search
    ///
    /// Returns every result the upstream sent; limiting is the caller's
    /// responsibility.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<SaavnTrack>> {
        let url = format!(
            "{}?__call=search.getResults&{}&cc=in&includeMetaTags=1&q={}",
            API_BASE,
            BASE_PARAMS,
            urlencoding::encode(query)
        );

        let response: Option<ApiSearchResponse> = self.fetch(url).await?;
        let results = response.map(|r| r.results).unwrap_or_default();

        if results.is_empty() {
            return Err(SaavnError::NotFound(query.to_string()));
        }

        info!(results = results.len(), "JioSaavn search completed");

        Ok(results.into_iter().map(convert_song).collect())
    }

    /// Fetch a single track by its share token
    #[instrument(skip(self))]
    pub async fn track_by_token(&self, token: &str) -> Result<SaavnTrack> {
        let url = format!(
            "{}?__call=webapi.get&{}&token={}&type=song",
            API_BASE,
            BASE_PARAMS,
            urlencoding::encode(token)
        );

        self.first_song(url, token).await
    }

    /// Fetch a single track by its catalog-native id
    #[instrument(skip(self))]
    pub async fn track_by_id(&self, id: &str) -> Result<SaavnTrack> {
        let url = format!(
            "{}?__call=song.getDetails&{}&pids={}",
            API_BASE,
            BASE_PARAMS,
            urlencoding::encode(id)
        );

        self.first_song(url, id).await
    }

    async fn first_song(&self, url: String, what: &str) -> Result<SaavnTrack> {
        let response: Option<ApiSongListResponse> = self.fetch(url).await?;
        let song = response
            .map(|r| r.songs)
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| SaavnError::NotFound(what.to_string()))?;

        Ok(convert_song(song))
    }

    /// Fetch an album with its track list
    #[instrument(skip(self))]
    pub async fn album(&self, token: &str) -> Result<SaavnAlbum> {
        let url = format!(
            "{}?__call=webapi.get&{}&token={}&type=album",
            API_BASE,
            BASE_PARAMS,
            urlencoding::encode(token)
        );

        let album: Option<ApiAlbum> = self.fetch(url).await?;
        let album = album.ok_or_else(|| SaavnError::NotFound(token.to_string()))?;

        Ok(convert_album(album))
    }

    /// Fetch an artist with their top songs
    #[instrument(skip(self))]
    pub async fn artist(&self, token: &str) -> Result<SaavnArtist> {
        let url = format!(
            "{}?__call=webapi.get&{}&token={}&type=artist&n_song={}",
            API_BASE,
            BASE_PARAMS,
            urlencoding::encode(token),
            ARTIST_SONG_LIMIT
        );

        let artist: Option<ApiArtist> = self.fetch(url).await?;
        let artist = artist.ok_or_else(|| SaavnError::NotFound(token.to_string()))?;

        Ok(convert_artist(artist))
    }

    /// Fetch a playlist, asking the server for at most `limit` tracks
    #[instrument(skip(self))]
    pub async fn playlist(&self, token: &str, limit: usize) -> Result<SaavnPlaylist> {
        let url = format!(
            "{}?__call=webapi.get&{}&token={}&type=playlist&n={}",
            API_BASE,
            BASE_PARAMS,
            urlencoding::encode(token),
            limit
        );

        let playlist: Option<ApiPlaylist> = self.fetch(url).await?;
        let playlist = playlist.ok_or_else(|| SaavnError::NotFound(token.to_string()))?;

        Ok(convert_playlist(playlist))
    }

    /// Request an auth token for an encrypted media reference
    ///
    /// The response is returned unmodified; decoding it is the downstream
    /// streaming resolver's business.
    #[instrument(skip(self, encrypted_url))]
    pub async fn media_auth_token(&self, encrypted_url: &str) -> Result<serde_json::Value> {
        let url = format!(
            "{}?__call=song.generateAuthToken&url={}&bitrate=320&{}",
            API_BASE,
            urlencoding::encode(encrypted_url),
            BASE_PARAMS
        );

        self.fetch(url).await
    }
}

/// Request the 500x500 artwork rendition instead of the 150x150 default
fn upscale_artwork(image: Option<String>) -> String {
    image
        .map(|url| url.replace("150x150", "500x500"))
        .unwrap_or_default()
}

fn convert_song(song: ApiSong) -> SaavnTrack {
    let info = song.more_info;
    let primary: Option<&ApiArtistRef> = info.artist_map.primary_artists.first();

    SaavnTrack {
        identifier: song.id,
        title: song.title.unwrap_or_else(|| "Unknown Track".to_string()),
        length: info
            .duration
            .map(|seconds| (seconds * 1000.0) as u64)
            .unwrap_or(0),
        uri: song.perma_url,
        artwork_url: upscale_artwork(song.image),
        author: primary.and_then(|a| a.name.clone()),
        encrypted_media_url: info.encrypted_media_url.clone(),
        album_url: info.album_url.clone(),
        album_name: info.album.clone(),
        artist_url: primary.and_then(|a| a.perma_url.clone()),
        artist_artwork_url: primary
            .and_then(|a| a.image.as_ref())
            .map(|url| url.replace("150x150", "500x500")),
        preview_url: info.media_preview_url.clone().or_else(|| info.vlink.clone()),
    }
}

fn convert_album(album: ApiAlbum) -> SaavnAlbum {
    SaavnAlbum {
        id: album.id,
        name: album.title.unwrap_or_else(|| "Unknown Album".to_string()),
        uri: album.perma_url.unwrap_or_default(),
        artwork_url: upscale_artwork(album.image),
        author: album
            .subtitle
            .unwrap_or_else(|| "Unknown Artist".to_string()),
        tracks: album.list.into_iter().map(convert_song).collect(),
        total_songs: album.list_count.unwrap_or(0),
    }
}

fn convert_artist(artist: ApiArtist) -> SaavnArtist {
    SaavnArtist {
        name: artist.name.unwrap_or_else(|| "Unknown Artist".to_string()),
        uri: artist.urls.overview.unwrap_or_default(),
        artwork_url: upscale_artwork(artist.image),
        tracks: artist.top_songs.into_iter().map(convert_song).collect(),
    }
}

fn convert_playlist(playlist: ApiPlaylist) -> SaavnPlaylist {
    SaavnPlaylist {
        title: playlist
            .title
            .unwrap_or_else(|| "Unknown Playlist".to_string()),
        uri: playlist.perma_url.unwrap_or_default(),
        artwork_url: upscale_artwork(playlist.image),
        tracks: playlist.list.into_iter().map(convert_song).collect(),
        total_songs: playlist.list_count.unwrap_or(0),
    }
}
