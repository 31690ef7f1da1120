//! Error types for the overload_core library.
//!
//! The progression engine itself never fails; these errors only surface at
//! the edges (configuration files, CSV batches, parsing user input).

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for overload_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rating outside 1..=5
    #[error("Invalid rating: {0} (expected 1-5)")]
    InvalidRating(u8),

    /// Equipment name that does not match a known type
    #[error("Invalid equipment type: {0}")]
    InvalidEquipment(String),

    /// Training style name that does not match a known style
    #[error("Invalid training style: {0} (expected strength or hypertrophy)")]
    InvalidStyle(String),
}
