//! Track parameter options for SD9 headers.
//!
//! Options carry the requested changes; the header is passed separately to
//! [`TrackParams::apply_to`]. Out-of-range values are rejected per field and
//! reported back as warnings rather than failing the whole operation.

use std::fmt;

use derive_builder::Builder;

use crate::headers::Sd9Header;

/// Loudest domain volume. The stored byte is `125 - volume`.
pub const VOLUME_MAX: u32 = 125;

/// Loop boundaries are stored premultiplied by this factor.
pub const LOOP_SAMPLE_SCALE: u32 = 4;

/// Requested track parameter changes.
///
/// Absent fields leave the header untouched.
#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into, strip_option), default)]
pub struct TrackParams {
    /// Playback volume, 0..=125 (higher is louder).
    pub volume: Option<u32>,
    /// Turn section looping on. A false value is a no-op, not a clear: the
    /// only way to disable looping is to write the header byte directly.
    pub loop_enabled: bool,
    /// Loop start in samples.
    pub loop_start: Option<u32>,
    /// Loop end in samples.
    pub loop_end: Option<u32>,
}

/// A parameter that was rejected; the corresponding field was left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamWarning {
    VolumeOutOfRange(u32),
    LoopStartOutOfRange(u32),
    LoopEndOutOfRange(u32),
}

impl fmt::Display for ParamWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VolumeOutOfRange(v) => write!(f, "volume {v} above maximum {VOLUME_MAX}"),
            Self::LoopStartOutOfRange(s) => write!(f, "loop start {s} does not fit the stored scale"),
            Self::LoopEndOutOfRange(s) => write!(f, "loop end {s} does not fit the stored scale"),
        }
    }
}

impl TrackParams {
    /// Apply the requested changes to `header` in place.
    ///
    /// Returns the parameters that were rejected; the operation as a whole
    /// always proceeds with the remaining fields.
    pub fn apply_to(&self, header: &mut Sd9Header) -> Vec<ParamWarning> {
        let mut rejected = Vec::new();

        if let Some(volume) = self.volume {
            if volume > VOLUME_MAX {
                rejected.push(ParamWarning::VolumeOutOfRange(volume));
            } else {
                header.volume = (VOLUME_MAX - volume) as u8;
            }
        }

        if self.loop_enabled {
            header.loop_enabled = 1;
        }

        if let Some(samples) = self.loop_start {
            match samples.checked_mul(LOOP_SAMPLE_SCALE) {
                Some(scaled) => header.loop_start = scaled,
                None => rejected.push(ParamWarning::LoopStartOutOfRange(samples)),
            }
        }

        if let Some(samples) = self.loop_end {
            match samples.checked_mul(LOOP_SAMPLE_SCALE) {
                Some(scaled) => header.loop_end = scaled,
                None => rejected.push(ParamWarning::LoopEndOutOfRange(samples)),
            }
        }

        rejected
    }
}
