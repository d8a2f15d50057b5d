//! # Reqwest Bridge
//!
//! Desktop/server implementation of the
//! [`HttpClient`](bridge_traits::http::HttpClient) capability on top of
//! `reqwest`. Catalog providers depend only on `bridge-traits`; hosts inject
//! this (or their own transport) at construction time.
//!
//! ```ignore
//! use std::sync::Arc;
//! use bridge_reqwest::ReqwestHttpClient;
//! use provider_jiosaavn::SaavnResolver;
//!
//! let resolver = SaavnResolver::new(Arc::new(ReqwestHttpClient::new()));
//! ```

pub mod http;

pub use http::ReqwestHttpClient;
