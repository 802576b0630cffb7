//! Error types for searchsync

use thiserror::Error;

/// Result type alias for index synchronization operations
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors surfaced while synchronizing an instance into the search index.
///
/// This crate defines no recovery logic of its own: whatever the update
/// delegate raises is returned unchanged to the caller of the lifecycle
/// notification that triggered it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// The search engine rejected or failed an index update
    #[error("Index update failed: {0}")]
    Index(String),

    /// Transport-level failure reaching the search engine
    #[error("Transport error: {0}")]
    Transport(String),

    /// Generic error with context
    #[error("Error: {0}")]
    Other(String),
}

impl SyncError {
    /// Create an index error
    pub fn index(message: impl Into<String>) -> Self {
        Self::Index(message.into())
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }
}
