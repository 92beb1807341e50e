//! In-memory SD9 sound value: header plus opaque audio payload.

use std::fmt;
use std::io::{Read, Write};

use serde::Serialize;

use crate::error::Sd9Error;
use crate::headers::Sd9Header;
use crate::reader::Sd9Reader;
use crate::writer::Sd9Writer;

/// A complete SD9 sound.
///
/// A value of this type only exists once the whole file decoded: the header
/// validated and exactly `audio_size` payload bytes were read. The payload is
/// kept behind accessors so that `header.audio_size` always matches its
/// length; writing `header.audio_size` directly desyncs the two.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sd9Sound {
    pub header: Sd9Header,
    audio: Vec<u8>,
}

impl Sd9Sound {
    /// A fresh sound with default header fields and an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a sound from an already-parsed header and its payload bytes.
    ///
    /// `audio_size` is re-derived from the payload, so a header that declared
    /// more bytes than were actually recovered ends up consistent.
    #[must_use]
    pub fn from_parts(header: Sd9Header, audio: Vec<u8>) -> Self {
        let mut sound = Self {
            header,
            audio: Vec::new(),
        };
        sound.import_audio(audio);
        sound
    }

    /// Decode a complete SD9 from a byte buffer.
    ///
    /// All-or-nothing: the header is parsed and validated first, then exactly
    /// `audio_size` payload bytes are taken. Trailing bytes beyond the
    /// declared payload are ignored.
    pub fn parse(bytes: &[u8]) -> Result<Self, Sd9Error> {
        let header = Sd9Header::parse(bytes)?;
        let needed = Sd9Header::SIZE + header.audio_size as usize;
        if bytes.len() < needed {
            return Err(Sd9Error::Truncated {
                needed,
                available: bytes.len(),
            });
        }
        let audio = bytes[Sd9Header::SIZE..needed].to_vec();
        Ok(Self { header, audio })
    }

    /// Decode a complete SD9 from a byte source.
    pub fn read_from<R: Read>(reader: R) -> Result<Self, Sd9Error> {
        Sd9Reader::open(reader)?.into_sound()
    }

    /// The audio payload, verbatim.
    #[must_use]
    pub fn audio(&self) -> &[u8] {
        &self.audio
    }

    /// Replace the audio payload wholesale, keeping `audio_size` in sync.
    ///
    /// The payload is not inspected or transcoded.
    pub fn import_audio(&mut self, audio: Vec<u8>) {
        self.header.audio_size = audio.len() as u32;
        self.audio = audio;
    }

    /// Write the header and payload to `writer` in wire order.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<u64, Sd9Error> {
        Sd9Writer::new(writer).write_sound(self)
    }

    /// Encode the sound into a byte vector.
    pub fn to_vec(&self) -> Result<Vec<u8>, Sd9Error> {
        let mut out = Vec::with_capacity(Sd9Header::SIZE + self.audio.len());
        self.write_to(&mut out)?;
        Ok(out)
    }

    /// Decoded, domain-facing view of the header.
    #[must_use]
    pub fn info(&self) -> Sd9Info {
        Sd9Info {
            sound_index: self.header.sound_index,
            audio_size: self.header.audio_size,
            volume: self.header.audio_volume(),
            loop_enabled: self.header.is_looped(),
            loop_start: self.header.loop_start_samples(),
            loop_end: self.header.loop_end_samples(),
        }
    }
}

/// Human-facing rendering of an SD9 header, with stored values translated to
/// their domain units (volume un-inverted, loop points in samples).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sd9Info {
    pub sound_index: u16,
    pub audio_size: u32,
    pub volume: i32,
    pub loop_enabled: bool,
    pub loop_start: u32,
    pub loop_end: u32,
}

impl fmt::Display for Sd9Info {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Index                : {}", self.sound_index)?;
        writeln!(f, "Audio Size           : {} B", self.audio_size)?;
        writeln!(f, "Audio Volume         : {}%", self.volume)?;
        writeln!(f, "Section Loop Enabled : {}", self.loop_enabled)?;
        writeln!(f, "Section Loop Start   : {}", self.loop_start)?;
        writeln!(f, "Section Loop End     : {}", self.loop_end)
    }
}
