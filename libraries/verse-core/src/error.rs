//! Error types for Verse Player core

use thiserror::Error;

/// Core errors
#[derive(Debug, Error)]
pub enum VerseError {
    /// Catalog seed data could not be parsed
    #[error("Failed to parse catalog data: {0}")]
    CatalogParse(#[from] serde_json::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, VerseError>;
