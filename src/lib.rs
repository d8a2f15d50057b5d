//! Workspace placeholder crate.
//!
//! This crate exists to expose the individual workspace crates behind a
//! single dependency (e.g., `bridge-traits`, `core-search`,
//! `provider-jiosaavn`). Host applications can depend on
//! `jiosaavn-resolver-workspace` and enable the documented features without
//! needing to wire each crate individually.

pub use bridge_traits;
pub use core_search;
pub use provider_jiosaavn;

#[cfg(feature = "reqwest-bridge")]
pub use bridge_reqwest;
