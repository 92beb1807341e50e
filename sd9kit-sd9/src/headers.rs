//! SD9 header structure and parsing

use std::io::Cursor;

use binrw::BinRead;

use crate::error::Sd9Error;

/// SD9 sound header structure
///
/// Fixed 32-byte little-endian layout. The `unk*` fields are opaque and must
/// be carried through unchanged when a file is reworked: `unk2` in particular
/// breaks playback in the engine if it is ever altered.
#[repr(C)]
#[derive(Debug, Clone, PartialEq, Eq, BinRead)]
#[br(little)]
pub struct Sd9Header {
    pub magic: [u8; 4],
    pub header_size: u32,
    pub audio_size: u32,
    pub unk1: u32,
    pub unk2: u16,
    /// Stored volume byte. The scale is reversed: 0 is loudest, 125 silent.
    pub volume: u8,
    pub unk3: u8,
    /// Loop boundaries are stored premultiplied by 4 (quarter-sample units).
    pub loop_start: u32,
    pub loop_end: u32,
    /// 0 = off, nonzero = on.
    pub loop_enabled: u8,
    pub unk4: u8,
    /// Must match the index of the sound being replaced in the target
    /// archive; not validated here.
    pub sound_index: u16,
}

impl Sd9Header {
    /// Size of the SD9 header in bytes
    pub const SIZE: usize = 0x20;

    /// Expected magic number for SD9 files
    pub const MAGIC: [u8; 4] = *b"SD9\0";

    /// Parse an SD9 header from a byte buffer.
    ///
    /// The magic is checked before anything else: a buffer whose first four
    /// bytes are wrong fails with [`Sd9Error::BadMagic`] no matter what the
    /// rest contains. A buffer shorter than [`Self::SIZE`] fails with
    /// [`Sd9Error::Truncated`].
    pub fn parse(buffer: &[u8]) -> Result<Self, Sd9Error> {
        if buffer.len() >= Self::MAGIC.len() {
            let found = [buffer[0], buffer[1], buffer[2], buffer[3]];
            if found != Self::MAGIC {
                return Err(Sd9Error::BadMagic { found });
            }
        }
        if buffer.len() < Self::SIZE {
            return Err(Sd9Error::Truncated {
                needed: Self::SIZE,
                available: buffer.len(),
            });
        }

        let mut cursor = Cursor::new(buffer);
        Self::read(&mut cursor).map_err(|e| Sd9Error::Io(std::io::Error::other(e)))
    }

    /// Domain-facing playback volume, the inverse of the stored byte.
    ///
    /// Files written by other tools can carry a stored byte above 125, so the
    /// result may be negative.
    #[must_use]
    pub const fn audio_volume(&self) -> i32 {
        crate::params::VOLUME_MAX as i32 - self.volume as i32
    }

    /// Loop start in samples (stored value divided by 4).
    #[must_use]
    pub const fn loop_start_samples(&self) -> u32 {
        self.loop_start / crate::params::LOOP_SAMPLE_SCALE
    }

    /// Loop end in samples (stored value divided by 4).
    #[must_use]
    pub const fn loop_end_samples(&self) -> u32 {
        self.loop_end / crate::params::LOOP_SAMPLE_SCALE
    }

    #[must_use]
    pub const fn is_looped(&self) -> bool {
        self.loop_enabled != 0
    }
}

impl Default for Sd9Header {
    /// Defaults for a freshly built header, matching what the engine ships:
    /// `unk1` is replaced by whatever an existing file carries on load, and
    /// `unk2` is always `40 00`.
    fn default() -> Self {
        Self {
            magic: Self::MAGIC,
            header_size: Self::SIZE as u32,
            audio_size: 0,
            unk1: 0x0001_3231,
            unk2: 0x0040,
            volume: 0,
            unk3: 0,
            loop_start: 0,
            loop_end: 0,
            loop_enabled: 0,
            unk4: 0,
            sound_index: 0,
        }
    }
}
