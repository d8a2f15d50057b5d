//! Search Engine Abstraction
//!
//! Defines the contract between a host search engine and pluggable source
//! resolvers. The host exposes its native search through [`SearchDelegate`];
//! a catalog adapter implements [`SourceResolver`] and is registered with
//! the engine, which offers every incoming query to the resolvers before
//! falling through to the delegate.
//!
//! Every path produces the same [`SearchResult`] envelope, so consumers of
//! the engine never see which source served a query.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::Result;

/// Result-kind tag carried by every search envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    /// A single resolved track
    Track,
    /// A named collection: album, artist top songs, or playlist
    Playlist,
    /// A plain text-search listing
    Search,
    /// Nothing matched
    Empty,
}

/// Options forwarded with every search call
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Opaque requester context, attached verbatim to every produced track.
    /// The engine and resolvers never interpret it.
    pub requester: Option<serde_json::Value>,

    /// Optional source selector naming the engine the caller prefers
    /// (e.g. `"jiosaavn"`)
    pub engine: Option<String>,
}

impl SearchOptions {
    pub fn with_engine(engine: impl Into<String>) -> Self {
        Self {
            requester: None,
            engine: Some(engine.into()),
        }
    }
}

/// The host engine's track object
///
/// Produced by resolvers and by the native delegate alike; this is the unit
/// the host queues and plays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineTrack {
    /// Source tag identifying the originating catalog
    pub source_name: String,

    /// Catalog-native identifier
    pub identifier: String,

    pub title: String,
    pub author: String,

    /// Duration in milliseconds
    pub length: u64,

    /// Canonical web URL for the track
    pub uri: String,

    /// Artwork URL; empty when the catalog supplied none
    pub artwork_url: String,

    pub is_seekable: bool,
    pub is_stream: bool,

    /// Initial playback position in milliseconds
    pub position: u64,

    /// Host audio-encoding payload; left empty by sources that do not
    /// participate in the host's encoding scheme
    pub encoded: String,

    /// Plugin-origin tag for the host's bookkeeping
    pub plugin_name: String,

    /// Opaque requester context copied from [`SearchOptions`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester: Option<serde_json::Value>,
}

/// Uniform search-result envelope
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Collection name, set for album/artist/playlist results
    pub playlist_name: Option<String>,

    /// Ordered result tracks
    pub tracks: Vec<EngineTrack>,

    pub kind: SearchKind,
}

impl SearchResult {
    pub fn new(playlist_name: Option<String>, tracks: Vec<EngineTrack>, kind: SearchKind) -> Self {
        Self {
            playlist_name,
            tracks,
            kind,
        }
    }

    /// An envelope with no name and no tracks
    pub fn empty(kind: SearchKind) -> Self {
        Self {
            playlist_name: None,
            tracks: Vec::new(),
            kind,
        }
    }
}

/// The host engine's native search entry point
///
/// Resolvers receive a handle to this when registered so they can prefer
/// the host's own resolution and fall back to their catalog.
#[async_trait]
pub trait SearchDelegate: Send + Sync {
    async fn search(&self, query: &str, options: &SearchOptions) -> Result<SearchResult>;
}

/// A pluggable, named source resolver
///
/// Registered with the engine at construction or registration time. The
/// engine dispatcher offers each query to its resolvers in registration
/// order; a resolver returns `Ok(None)` to decline, in which case the
/// dispatcher moves on and ultimately invokes the native delegate.
#[async_trait]
pub trait SourceResolver: Send + Sync {
    /// Resolver name, also usable as a [`SearchOptions::engine`] selector
    fn name(&self) -> &'static str;

    /// Called once when the resolver is registered with an engine.
    ///
    /// Implementations must refuse to serve searches before this has
    /// happened (see [`BridgeError::NotLoaded`](crate::error::BridgeError)).
    fn attach(&self, delegate: Arc<dyn SearchDelegate>);

    /// Classify and resolve one query
    async fn resolve(&self, query: &str, options: &SearchOptions)
        -> Result<Option<SearchResult>>;
}
