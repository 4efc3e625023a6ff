//! # Error Types
//!
//! Custom error types for CWA Extract using `thiserror`.

use thiserror::Error;

/// Main error type for CWA Extract
#[derive(Debug, Error)]
pub enum CwaError {
    /// Configuration errors (mode conflicts, missing paths)
    #[error("configuration error: {0}")]
    Config(String),

    /// Record buffer shorter than the fixed record size
    #[error("short read: expected {expected} bytes, got {actual}")]
    ShortRecord { expected: usize, actual: usize },

    /// Moving-average precondition violated (window >= series length)
    #[error("window size too large ({window}) to compute central moving average for data of length {len}")]
    WindowTooLarge { window: usize, len: usize },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CWA Extract
pub type Result<T> = std::result::Result<T, CwaError>;
