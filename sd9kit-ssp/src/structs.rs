//! Shared scan result types.

use sd9kit_sd9::Sd9Sound;

/// One SD9 record discovered inside an SSP stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sd9Record {
    /// Absolute offset of the magic signature's first byte in the source
    /// stream.
    pub offset: u64,
    /// The decoded record. For a record cut short by the end of the stream
    /// the payload holds the remaining bytes and `audio_size` is re-derived
    /// to match.
    pub sound: Sd9Sound,
}
