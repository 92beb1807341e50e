//! Single-pass SD9 signature scanner over SSP archive streams.

use std::io::Read;

use sd9kit_sd9::{Sd9Header, Sd9Sound};

use crate::error::ScanError;
use crate::structs::Sd9Record;

/// Default read granularity.
const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Streaming scanner that yields every SD9 record embedded in a byte stream.
///
/// The stream is consumed forward in chunks; between refills only a
/// three-byte tail is retained so a signature spanning a chunk boundary is
/// still found. Memory in flight is one chunk plus one payload regardless of
/// archive size.
///
/// A match requires the 4-byte magic and the full 32-byte header; a signature
/// whose header runs past the end of the stream is not a match and the scan
/// ends cleanly. Scanning resumes immediately after each record's payload,
/// which is never itself searched for signatures.
///
/// Truncation is permissive: a record whose declared payload length runs past
/// the end of the stream is yielded with the remaining bytes, and its
/// `audio_size` is re-derived to match what was recovered.
pub struct SspScanner<R: Read> {
    inner: R,
    chunk_size: usize,
    /// Unscanned bytes; `base` is the absolute offset of `buf[0]`.
    buf: Vec<u8>,
    base: u64,
    eof: bool,
    found: u32,
    failed: bool,
}

impl<R: Read> SspScanner<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            chunk_size: DEFAULT_CHUNK_SIZE,
            buf: Vec::new(),
            base: 0,
            eof: false,
            found: 0,
            failed: false,
        }
    }

    /// Set the read granularity.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "chunk size must be > 0");
        self.chunk_size = chunk_size;
        self
    }

    /// Number of records matched so far; monotonic, starting at zero.
    #[must_use]
    pub const fn found(&self) -> u32 {
        self.found
    }

    /// Read one more chunk onto the tail of `buf`, flagging end of stream.
    fn refill(&mut self) -> Result<(), ScanError> {
        let old_len = self.buf.len();
        self.buf.resize(old_len + self.chunk_size, 0);
        let n = self.inner.read(&mut self.buf[old_len..])?;
        self.buf.truncate(old_len + n);
        if n == 0 {
            self.eof = true;
        }
        Ok(())
    }

    /// Drop everything before `keep_from`, advancing the absolute base.
    fn discard(&mut self, keep_from: usize) {
        self.buf.drain(..keep_from);
        self.base += keep_from as u64;
    }

    fn find_magic(&self) -> Option<usize> {
        self.buf
            .windows(Sd9Header::MAGIC.len())
            .position(|w| w == Sd9Header::MAGIC)
    }

    fn next_record(&mut self) -> Result<Option<Sd9Record>, ScanError> {
        loop {
            let Some(start) = self.find_magic() else {
                if self.eof {
                    return Ok(None);
                }
                // Keep a possible partial signature at the tail.
                let keep = self.buf.len().saturating_sub(Sd9Header::MAGIC.len() - 1);
                self.discard(keep);
                self.refill()?;
                continue;
            };

            // A signature only counts once the whole header is in view.
            while self.buf.len() < start + Sd9Header::SIZE && !self.eof {
                self.refill()?;
            }
            if self.buf.len() < start + Sd9Header::SIZE {
                return Ok(None);
            }

            let offset = self.base + start as u64;
            let header = Sd9Header::parse(&self.buf[start..start + Sd9Header::SIZE])?;
            let declared = header.audio_size as usize;

            // Take the payload: first whatever is already buffered, then the
            // stream directly. A short read at end of stream is kept as-is.
            let payload_start = start + Sd9Header::SIZE;
            let buffered_end = self.buf.len().min(payload_start + declared);
            let mut audio = self.buf[payload_start..buffered_end].to_vec();
            if audio.len() < declared {
                let rest = (declared - audio.len()) as u64;
                (&mut self.inner).take(rest).read_to_end(&mut audio)?;
            }

            // Everything through the payload is consumed; the next match can
            // only start after it.
            let extra = audio.len() - (buffered_end - payload_start);
            self.discard(buffered_end);
            self.base += extra as u64;

            self.found += 1;
            return Ok(Some(Sd9Record {
                offset,
                sound: Sd9Sound::from_parts(header, audio),
            }));
        }
    }
}

impl<R: Read> Iterator for SspScanner<R> {
    type Item = Result<Sd9Record, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => None,
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
