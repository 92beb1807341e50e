//! SD9 stream writing and output-path guards.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use byteorder::{LittleEndian, WriteBytesExt};

use crate::error::Sd9Error;
use crate::headers::Sd9Header;
use crate::sound::Sd9Sound;

/// Streaming SD9 writer.
///
/// Emits the header fields in wire order, little-endian, followed by the
/// payload verbatim. Encoding a structurally valid sound cannot fail beyond
/// I/O on the sink.
pub struct Sd9Writer<W: Write> {
    inner: W,
}

impl<W: Write> Sd9Writer<W> {
    pub const fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Write the full sound: header then payload.
    ///
    /// Returns the number of bytes written.
    pub fn write_sound(&mut self, sound: &Sd9Sound) -> Result<u64, Sd9Error> {
        self.write_header(&sound.header)?;
        self.inner.write_all(sound.audio())?;
        Ok((Sd9Header::SIZE + sound.audio().len()) as u64)
    }

    /// Write just the 32-byte header.
    pub fn write_header(&mut self, header: &Sd9Header) -> Result<(), Sd9Error> {
        self.inner.write_all(&header.magic)?;
        self.inner.write_u32::<LittleEndian>(header.header_size)?;
        self.inner.write_u32::<LittleEndian>(header.audio_size)?;
        self.inner.write_u32::<LittleEndian>(header.unk1)?;
        self.inner.write_u16::<LittleEndian>(header.unk2)?;
        self.inner.write_u8(header.volume)?;
        self.inner.write_u8(header.unk3)?;
        self.inner.write_u32::<LittleEndian>(header.loop_start)?;
        self.inner.write_u32::<LittleEndian>(header.loop_end)?;
        self.inner.write_u8(header.loop_enabled)?;
        self.inner.write_u8(header.unk4)?;
        self.inner.write_u16::<LittleEndian>(header.sound_index)?;
        Ok(())
    }

    /// Return the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Create `path` for writing, refusing to clobber an existing file unless
/// `overwrite` is set.
///
/// # Errors
///
/// [`Sd9Error::OutputExists`] if the destination is already present and
/// `overwrite` is false; the existing file is left untouched.
pub fn create_output(path: impl AsRef<Path>, overwrite: bool) -> Result<File, Sd9Error> {
    let path = path.as_ref();
    if overwrite {
        return Ok(File::create(path)?);
    }
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::AlreadyExists {
                Sd9Error::OutputExists(path.to_path_buf())
            } else {
                Sd9Error::Io(e)
            }
        })
}
