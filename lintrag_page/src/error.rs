//! Error type for the landing page library.

use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced while configuring or seeding a page render.
///
/// Rendering itself cannot fail; every variant here comes from user input
/// (field names, prefill pairs, config files).
#[derive(Debug, Error)]
pub enum PageError {
    /// A form field key that is not one of the six known fields.
    #[error("unknown form field `{0}` (expected one of: name, email, org, segment, date, message)")]
    UnknownField(String),

    /// A prefill entry that is not in `field=value` form.
    #[error("invalid prefill `{0}`: expected FIELD=VALUE")]
    InvalidPrefill(String),

    /// Reading a file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File that could not be accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A render config file could not be parsed.
    #[error("invalid render config {}: {source}", .path.display())]
    Config {
        /// Config file path
        path: PathBuf,
        /// Parse error
        #[source]
        source: serde_json::Error,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, PageError>;
