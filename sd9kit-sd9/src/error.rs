//! Error types for SD9 operations

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for SD9 operations
#[derive(Debug, Error)]
pub enum Sd9Error {
    #[error("Invalid SD9 magic: found {found:02X?}")]
    BadMagic { found: [u8; 4] },
    #[error("Truncated SD9 data: needed {needed} bytes, only {available} available")]
    Truncated { needed: usize, available: usize },
    #[error("Output file already exists: {}", .0.display())]
    OutputExists(PathBuf),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
