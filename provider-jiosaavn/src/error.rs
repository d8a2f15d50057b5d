//! Error types for the JioSaavn provider

use thiserror::Error;

/// JioSaavn provider errors
#[derive(Error, Debug)]
pub enum SaavnError {
    /// Upstream returned a non-success HTTP status
    #[error("JioSaavn API request failed with status {status}")]
    ApiStatus { status: u16 },

    /// Upstream returned a success status with an unparseable JSON body
    #[error("Failed to parse JioSaavn API response: {0}")]
    Parse(String),

    /// Well-formed response carrying an empty or absent result
    #[error("JioSaavn returned no results for \"{0}\"")]
    NotFound(String),

    /// Transport failure from the fetch bridge
    #[error(transparent)]
    Bridge(#[from] bridge_traits::error::BridgeError),
}

/// Result type for JioSaavn operations
pub type Result<T> = std::result::Result<T, SaavnError>;

impl From<SaavnError> for bridge_traits::error::BridgeError {
    fn from(error: SaavnError) -> Self {
        match error {
            SaavnError::ApiStatus { status } => bridge_traits::error::BridgeError::OperationFailed(
                format!("JioSaavn API error (status {})", status),
            ),
            SaavnError::Parse(msg) => {
                bridge_traits::error::BridgeError::OperationFailed(format!("Parse error: {}", msg))
            }
            SaavnError::NotFound(what) => bridge_traits::error::BridgeError::OperationFailed(
                format!("Not found: {}", what),
            ),
            SaavnError::Bridge(e) => e,
        }
    }
}
