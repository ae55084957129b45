//! Error types for nice_select_core

use thiserror::Error;

/// Errors that can occur while building an item store
#[derive(Error, Debug)]
pub enum CoreError {
    /// Literal descriptor list is not a JSON array of item records
    #[error("Invalid item descriptors: {0}")]
    Descriptors(#[from] serde_json::Error),
}

/// Result type for nice_select_core operations
pub type Result<T> = std::result::Result<T, CoreError>;
