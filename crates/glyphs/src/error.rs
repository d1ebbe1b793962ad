//! Error types for registry and catalog lookups.

/// Result type for registry and catalog lookups.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when resolving transforms or catalog groups.
///
/// Both kinds are plain lookup failures with nothing transient to retry.
/// They are never recovered silently: falling back to the identity transform
/// would hide a mistyped or removed id at the call site.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested transform id is not registered.
    #[error("unknown transform '{0}'")]
    UnknownTransform(String),

    /// The requested style category is not in the catalog.
    #[error("unknown style category '{0}'")]
    UnknownCategory(String),

    /// The requested topic is not in the catalog.
    #[error("unknown topic '{0}'")]
    UnknownTopic(String),
}
