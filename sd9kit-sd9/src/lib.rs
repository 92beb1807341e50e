//! SD9 (sound data) file handling module
//!
//! This module provides functionality for parsing, modifying and repacking
//! SD9 sound files: a fixed 32-byte little-endian header wrapping one opaque
//! compressed audio payload. The payload itself is never interpreted.

pub mod error;
pub mod headers;
pub mod params;
pub mod reader;
pub mod sound;
pub mod writer;

// Re-export main types for convenience
pub use error::Sd9Error;
pub use headers::Sd9Header;
pub use params::{ParamWarning, TrackParams, TrackParamsBuilder};
pub use reader::Sd9Reader;
pub use sound::{Sd9Info, Sd9Sound};
pub use writer::Sd9Writer;
pub use writer::create_output;

#[cfg(test)]
mod tests;
