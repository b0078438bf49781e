//! Crate-wide error type for the catalog.

use thiserror::Error;

/// Convenient alias for catalog results.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The slug names no category, collection or reserved listing.
    #[error("no category or collection named `{0}`")]
    NotFound(String),

    /// Two catalog entries share an id.
    #[error("duplicate product id `{0}`")]
    DuplicateId(String),

    /// A string did not match a fixed enumeration.
    #[error("unknown {kind} `{value}`")]
    UnknownValue { kind: &'static str, value: String },
}
