//! # Core Search
//!
//! Host-side search dispatch. A [`SearchEngine`] wraps the host's native
//! search delegate and a set of registered
//! [`SourceResolver`](bridge_traits::search::SourceResolver)s; dispatch is
//! explicit composition — the engine invokes delegate vs. plugin itself and
//! no resolver ever replaces the host's bound search method.

pub mod engine;

pub use engine::SearchEngine;
