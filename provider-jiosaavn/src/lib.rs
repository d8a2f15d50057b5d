//! # JioSaavn Provider
//!
//! Source-resolution adapter for the JioSaavn catalog.
//!
//! ## Overview
//!
//! Two collaborating components:
//!
//! - [`SaavnClient`] — read-only catalog client: free-text search, track by
//!   share token or native id, album, artist, playlist, and the
//!   encrypted-media auth-token passthrough, each reshaped into a
//!   normalized record.
//! - [`SaavnResolver`] — the pluggable
//!   [`SourceResolver`](bridge_traits::search::SourceResolver): classifies
//!   each query against the known catalog URL shapes, prefers the host's
//!   native delegate while the configured retry budget lasts, then resolves
//!   against the catalog. URL-shaped lookups fail soft into an empty
//!   envelope; free-text catalog searches surface their errors.
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use core_search::SearchEngine;
//! use provider_jiosaavn::{SaavnOptions, SaavnResolver};
//!
//! let mut engine = SearchEngine::new(native_delegate);
//! engine.register(Arc::new(SaavnResolver::with_options(
//!     http_client,
//!     SaavnOptions { search_limit: 5, ..Default::default() },
//! )));
//! ```

pub mod client;
pub mod error;
pub mod matcher;
pub mod resolver;
pub mod types;

pub use client::SaavnClient;
pub use error::{Result, SaavnError};
pub use matcher::{SaavnEntity, SaavnUrlMatcher, UrlMatch};
pub use resolver::{SaavnOptions, SaavnResolver, SOURCE_NAME};
pub use types::{SaavnAlbum, SaavnArtist, SaavnPlaylist, SaavnTrack};
