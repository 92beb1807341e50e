//! Streaming SD9 reader.

use std::io::Read;

use crate::error::Sd9Error;
use crate::headers::Sd9Header;
use crate::sound::Sd9Sound;

/// Streaming SD9 reader over any byte source.
///
/// The header is parsed and validated on `open`; the payload is consumed on
/// demand. Dropping the reader releases the source on every path, including
/// after a failed open.
pub struct Sd9Reader<R: Read> {
    inner: R,
    header: Sd9Header,
}

impl<R: Read> Sd9Reader<R> {
    /// Open an SD9 stream, parsing and validating the header.
    ///
    /// # Errors
    ///
    /// [`Sd9Error::BadMagic`] if the stream does not start with the SD9
    /// signature, [`Sd9Error::Truncated`] if it ends inside the header.
    pub fn open(mut inner: R) -> Result<Self, Sd9Error> {
        let mut buf = [0u8; Sd9Header::SIZE];
        let got = read_full(&mut inner, &mut buf)?;
        let header = Sd9Header::parse(&buf[..got])?;
        Ok(Self { inner, header })
    }

    #[must_use]
    pub const fn header(&self) -> &Sd9Header {
        &self.header
    }

    /// Reader over exactly the declared audio payload.
    ///
    /// Bytes past `audio_size` in the underlying source are never touched.
    pub fn audio_reader(&mut self) -> impl Read + '_ {
        let len = u64::from(self.header.audio_size);
        (&mut self.inner).take(len)
    }

    /// Read the payload and return the complete sound value.
    ///
    /// Decoding is all-or-nothing: a payload shorter than `audio_size`
    /// declares is an error and no partially-filled value is produced.
    pub fn into_sound(mut self) -> Result<Sd9Sound, Sd9Error> {
        let needed = self.header.audio_size as usize;
        let mut audio = vec![0u8; needed];
        let got = read_full(&mut self.inner, &mut audio)?;
        if got < needed {
            return Err(Sd9Error::Truncated {
                needed,
                available: got,
            });
        }
        Ok(Sd9Sound::from_parts(self.header, audio))
    }

    /// Return the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

/// Fill `buf` from `reader`, stopping early only at end of stream.
///
/// Returns the number of bytes actually read.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize, Sd9Error> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = reader.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}
