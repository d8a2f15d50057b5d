use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Bridge capability not available: {0}")]
    NotAvailable(String),

    #[error("Bridge operation failed: {0}")]
    OperationFailed(String),

    /// The search input was empty.
    #[error("Search query is required")]
    InvalidQuery,

    /// A source resolver was asked to serve a search before it was
    /// attached to a host engine.
    #[error("Resolver is not attached to a search engine yet")]
    NotLoaded,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
