//! JioSaavn resolution adapter
//!
//! Implements [`SourceResolver`] over the catalog client. Every incoming
//! query is classified (catalog URL vs. free text); URL-shaped queries are
//! offered to the host's native delegate first while the delegate retry
//! budget lasts, then resolved against the catalog. A broken catalog lookup
//! on a URL-shaped query degrades to an empty search envelope instead of
//! surfacing an error.

use async_trait::async_trait;
use bridge_traits::error::BridgeError;
use bridge_traits::http::HttpClient;
use bridge_traits::search::{
    EngineTrack, SearchDelegate, SearchKind, SearchOptions, SearchResult, SourceResolver,
};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, RwLock};
use tracing::{debug, instrument, warn};

use crate::client::SaavnClient;
use crate::error::Result;
use crate::matcher::{SaavnEntity, SaavnUrlMatcher};
use crate::types::SaavnTrack;

/// Source tag on produced tracks, also the `engine` selector value
pub const SOURCE_NAME: &str = "jiosaavn";

/// Plugin-origin tag for the host's bookkeeping
const PLUGIN_NAME: &str = "provider-jiosaavn";

/// Construction-time options
#[derive(Debug, Clone)]
pub struct SaavnOptions {
    /// Tracks fetched per page for playlists, also the album/artist cap
    pub page_limit: usize,

    /// Track cap for free-text searches
    pub search_limit: usize,

    /// Total number of zero-result delegate attempts granted over the
    /// resolver's lifetime. This is a one-time depleting budget, not a
    /// per-call allowance; it is never reset after construction.
    pub retry_limit: u32,
}

impl Default for SaavnOptions {
    fn default() -> Self {
        Self {
            page_limit: 50,
            search_limit: 10,
            retry_limit: 2,
        }
    }
}

/// JioSaavn source resolver
///
/// Register with a `core-search` engine (or any host honoring
/// [`SourceResolver`]); the engine hands over its native delegate at
/// registration time. Serving a search before that fails with
/// [`BridgeError::NotLoaded`].
pub struct SaavnResolver {
    options: SaavnOptions,
    client: SaavnClient,
    matcher: SaavnUrlMatcher,
    delegate: RwLock<Option<Arc<dyn SearchDelegate>>>,
    retries_left: AtomicU32,
}

impl SaavnResolver {
    /// Create a resolver with default options
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self::with_options(http_client, SaavnOptions::default())
    }

    /// Create a resolver with custom options
    pub fn with_options(http_client: Arc<dyn HttpClient>, options: SaavnOptions) -> Self {
        Self {
            client: SaavnClient::new(http_client),
            matcher: SaavnUrlMatcher::new(),
            delegate: RwLock::new(None),
            retries_left: AtomicU32::new(options.retry_limit),
            options,
        }
    }

    /// Direct access to the catalog client (e.g. for the encrypted-media
    /// auth-token passthrough)
    pub fn client(&self) -> &SaavnClient {
        &self.client
    }

    /// Direct access to the URL matcher and its extraction helpers
    pub fn matcher(&self) -> &SaavnUrlMatcher {
        &self.matcher
    }

    /// Resolve a classified catalog URL
    ///
    /// The delegate is preferred while the retry budget lasts; a delegate
    /// result with at least one track is returned unchanged and leaves the
    /// budget untouched. Errors — the delegate's and the catalog's alike —
    /// propagate to the caller, which degrades them to an empty envelope.
    async fn resolve_url(
        &self,
        entity: SaavnEntity,
        token: &str,
        query: &str,
        options: &SearchOptions,
        delegate: &Arc<dyn SearchDelegate>,
    ) -> Result<SearchResult> {
        if self.retries_left.load(Ordering::Acquire) > 0 {
            let delegated = delegate.search(query, options).await?;
            if !delegated.tracks.is_empty() {
                return Ok(delegated);
            }
            let remaining = self.retries_left.fetch_sub(1, Ordering::AcqRel) - 1;
            debug!(remaining, "Delegate search returned no tracks");
        }

        let requester = options.requester.as_ref();

        match entity {
            SaavnEntity::Song => {
                let track = self.client.track_by_token(token).await?;
                Ok(SearchResult::new(
                    None,
                    vec![build_track(track, requester)],
                    SearchKind::Track,
                ))
            }
            SaavnEntity::Album => {
                let album = self.client.album(token).await?;
                let tracks = album
                    .tracks
                    .into_iter()
                    .take(self.options.page_limit)
                    .map(|track| build_track(track, requester))
                    .collect();
                Ok(SearchResult::new(
                    Some(album.name),
                    tracks,
                    SearchKind::Playlist,
                ))
            }
            SaavnEntity::Artist => {
                let artist = self.client.artist(token).await?;
                let tracks = artist
                    .tracks
                    .into_iter()
                    .take(self.options.page_limit)
                    .map(|track| build_track(track, requester))
                    .collect();
                Ok(SearchResult::new(
                    Some(artist.name),
                    tracks,
                    SearchKind::Playlist,
                ))
            }
            // Editorial and share playlists resolve through the same
            // endpoint; the server honors the page limit via `n`
            SaavnEntity::Featured | SaavnEntity::Playlist => {
                let playlist = self.client.playlist(token, self.options.page_limit).await?;
                let tracks = playlist
                    .tracks
                    .into_iter()
                    .map(|track| build_track(track, requester))
                    .collect();
                Ok(SearchResult::new(
                    Some(playlist.title),
                    tracks,
                    SearchKind::Playlist,
                ))
            }
        }
    }

    /// Free-text catalog search, capped at the configured search limit
    async fn search_catalog(&self, query: &str, options: &SearchOptions) -> Result<SearchResult> {
        let tracks = self.client.search(query).await?;
        let tracks = tracks
            .into_iter()
            .take(self.options.search_limit)
            .map(|track| build_track(track, options.requester.as_ref()))
            .collect();

        Ok(SearchResult::new(None, tracks, SearchKind::Search))
    }
}

#[async_trait]
impl SourceResolver for SaavnResolver {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    fn attach(&self, delegate: Arc<dyn SearchDelegate>) {
        *self.delegate.write().expect("delegate lock poisoned") = Some(delegate);
    }

    #[instrument(skip(self, options))]
    async fn resolve(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> bridge_traits::error::Result<Option<SearchResult>> {
        let delegate = self
            .delegate
            .read()
            .expect("delegate lock poisoned")
            .clone()
            .ok_or(BridgeError::NotLoaded)?;

        if query.is_empty() {
            return Err(BridgeError::InvalidQuery);
        }

        if let Some(url) = self.matcher.classify(query) {
            return match self
                .resolve_url(url.entity, &url.token, query, options, &delegate)
                .await
            {
                Ok(result) => Ok(Some(result)),
                Err(e) => {
                    // A broken catalog must not break a URL-shaped search
                    warn!(error = %e, "Catalog lookup failed, serving empty result");
                    Ok(Some(SearchResult::empty(SearchKind::Search)))
                }
            };
        }

        if options.engine.as_deref() == Some(SOURCE_NAME) && !self.matcher.is_absolute_url(query) {
            let result = self
                .search_catalog(query, options)
                .await
                .map_err(BridgeError::from)?;
            return Ok(Some(result));
        }

        // Not ours; the engine falls through to its native delegate
        Ok(None)
    }
}

/// Map a normalized catalog track into the host engine's track object
fn build_track(track: SaavnTrack, requester: Option<&serde_json::Value>) -> EngineTrack {
    let uri = track
        .uri
        .unwrap_or_else(|| format!("https://www.jiosaavn.com/song/{}", track.identifier));

    EngineTrack {
        source_name: SOURCE_NAME.to_string(),
        identifier: track.identifier,
        title: track.title,
        author: track
            .author
            .unwrap_or_else(|| "Unknown Artist".to_string()),
        length: track.length,
        uri,
        artwork_url: track.artwork_url,
        is_seekable: true,
        is_stream: false,
        position: 0,
        encoded: String::new(),
        plugin_name: PLUGIN_NAME.to_string(),
        requester: requester.cloned(),
    }
}
