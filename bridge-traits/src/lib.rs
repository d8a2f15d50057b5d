//! # Host Bridge Traits
//!
//! Contract layer between the host search engine and catalog providers.
//!
//! ## Overview
//!
//! This crate defines the two capabilities everything else is built on:
//!
//! - [`HttpClient`](http::HttpClient) — the black-box fetch capability a
//!   catalog provider uses to reach its upstream JSON API. Concrete
//!   transports live in bridge implementation crates (e.g.
//!   `bridge-reqwest`); providers only ever see the trait.
//! - The search contract in [`search`] — the envelope types shared by the
//!   host engine and its resolvers ([`SearchResult`](search::SearchResult),
//!   [`EngineTrack`](search::EngineTrack)), the engine's native entry point
//!   ([`SearchDelegate`](search::SearchDelegate)), and the pluggable
//!   resolver interface ([`SourceResolver`](search::SourceResolver)).
//!
//! ## Error Handling
//!
//! All bridge traits use [`BridgeError`](error::BridgeError). Provider
//! crates define their own richer error enums and convert into
//! `BridgeError` at the trait boundary.
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` bounds to support safe
//! concurrent usage across async tasks.

pub mod error;
pub mod http;
pub mod search;

pub use error::BridgeError;

// Re-export commonly used types
pub use http::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
pub use search::{
    EngineTrack, SearchDelegate, SearchKind, SearchOptions, SearchResult, SourceResolver,
};
