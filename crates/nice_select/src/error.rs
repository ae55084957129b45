//! Error types for nice_select

use thiserror::Error;

/// Errors that can occur while constructing a nice select
///
/// Everything that can go wrong after construction is a silent no-op.
#[derive(Error, Debug)]
pub enum SelectError {
    /// The source control is not attached to a render host
    #[error("Select source is not mounted in a render host")]
    Unmounted,

    /// Configuration could not be parsed from TOML
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration could not be parsed from JSON
    #[error("Invalid configuration: {0}")]
    ConfigJson(#[from] serde_json::Error),

    /// Item store construction failed
    #[error(transparent)]
    Core(#[from] nice_select_core::CoreError),
}

/// Result type for nice_select operations
pub type Result<T> = std::result::Result<T, SelectError>;
