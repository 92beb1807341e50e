//! Error types for SSP scanning

use sd9kit_sd9::Sd9Error;
use thiserror::Error;

/// Error raised while scanning an SSP stream.
///
/// The first error ends the scan; records yielded before it remain valid and
/// the scanner's match counter still reports how many were found.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("I/O error while scanning: {0}")]
    Io(#[from] std::io::Error),
    #[error("Embedded SD9 record could not be decoded: {0}")]
    Sd9(#[from] Sd9Error),
}
