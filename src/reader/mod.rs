//! The buffered reader skeleton shared by every codec (§4.2).
//!
//! A [`Reader`] owns the file handle and the [`ByteBuffer`] it refills from disk;
//! a codec plugs in through [`ReaderCodec`] and only has to know how to turn
//! framed bytes (or, for external framing, its own I/O) into a [`Particle`].
//! Buffering, record/line framing, comment-skipping, and history bookkeeping all
//! live here exactly once.

/// EGS MODE0/MODE2 reader codec (§4.5).
pub mod egs;
/// IAEA sidecar-header reader codec (§4.4).
pub mod iaea;
/// penEasy ASCII reader codec (§4.7).
pub mod peneasy;
/// TOPAS BINARY/ASCII/LIMITED reader codec (§4.6).
pub mod topas;

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use crate::buffer::{ByteBuffer, DEFAULT_BUFFER_SIZE, Endianness};
use crate::error::{Error, Result};
use crate::particle::{FixedValues, Particle};

/// How a codec delivers records to the skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    /// Fixed-length binary records starting at [`ReaderCodec::record_start_offset`].
    Binary,
    /// One particle per non-comment, non-empty text line.
    Ascii,
    /// The codec drives its own I/O entirely; the skeleton performs none.
    External,
}

/// The capability a codec plugs into the reader skeleton.
///
/// The skeleton owns framing, buffering, and statistics; the codec owns bit
/// layout and header parsing. `decode_binary`/`decode_ascii` may return `Ok(None)`
/// to signal a record that carries no particle (e.g. an absorbed pseudo-particle),
/// in which case the skeleton does not count it towards `particles_read` but the
/// codec is expected to have folded its history count onto the next real particle.
pub trait ReaderCodec {
    /// Name used for diagnostics and registry dispatch (e.g. `"IAEA"`).
    fn format_name(&self) -> &'static str;

    /// How this codec frames records.
    fn framing(&self) -> Framing;

    /// Bytes before the first record (binary framing only).
    fn record_start_offset(&self) -> u64 {
        0
    }

    /// Bytes per record (binary framing only).
    fn record_length(&self) -> usize {
        0
    }

    /// Prefixes (after leading whitespace) that mark a line as a comment to skip.
    fn comment_markers(&self) -> &[&str] {
        &["#", "//"]
    }

    /// Declared total particle count from the header.
    fn total_particles(&self) -> u64;

    /// Declared total original-history count from the header.
    fn total_original_histories(&self) -> u64;

    /// Decodes one binary record into a particle, or `None` if it carries none.
    fn decode_binary(&mut self, _record: &[u8]) -> Result<Option<Particle>> {
        unimplemented!("binary framing not implemented for this codec")
    }

    /// Decodes one ASCII line into a particle, or `None` if it carries none.
    fn decode_ascii(&mut self, _line: &str) -> Result<Option<Particle>> {
        unimplemented!("ascii framing not implemented for this codec")
    }

    /// Drives its own I/O to produce the next particle, or `None` at end of file.
    fn read_external(&mut self) -> Result<Option<Particle>> {
        unimplemented!("external framing not implemented for this codec")
    }

    /// Constant-column declarations carried from the header.
    fn fixed_values(&self) -> FixedValues {
        FixedValues::default()
    }

    /// Endianness multi-byte binary fields are encoded in.
    fn byte_order(&self) -> Endianness {
        Endianness::Little
    }
}

/// Running statistics the skeleton accumulates independently of any codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReaderStats {
    /// Total bytes the file claims (binary framing only; 0 otherwise).
    pub bytes_in_file: u64,
    /// Bytes pulled from disk so far.
    pub bytes_read: u64,
    /// Particles actually handed back to the caller.
    pub particles_read: u64,
    /// Records decoded to `None` (e.g. pseudo-particles) — not "real" particles.
    pub metaparticles_read: u64,
    /// Particles skipped by the codec for other reasons (not currently used by
    /// any bundled codec, but part of the contract callers may introspect).
    pub particles_skipped: u64,
    /// Accumulated original-history count, per the §4.9 rule.
    pub histories_read: u64,
}

/// A buffered, codec-driven reader of phase-space particles (§4.2).
#[derive(Debug)]
pub struct Reader<C: ReaderCodec, F = File> {
    codec: C,
    file: F,
    buffer: ByteBuffer,
    stats: ReaderStats,
    started: bool,
    pending_ascii_line: Option<String>,
    closed: bool,
}

impl<C: ReaderCodec> Reader<C, File> {
    /// Opens `path` and constructs a reader around `codec`, which must already
    /// have parsed whatever header it needs (sidecar or inline) to answer
    /// [`ReaderCodec::total_particles`] and [`ReaderCodec::total_original_histories`].
    pub fn open<P: AsRef<Path>>(path: P, codec: C) -> Result<Self> {
        let file = File::open(path)?;
        Self::new(file, codec)
    }
}

impl<C: ReaderCodec, F: Read + Seek> Reader<C, F> {
    /// Wraps an already-open file-like handle.
    pub fn new(mut file: F, codec: C) -> Result<Self> {
        let bytes_in_file = if codec.framing() == Framing::Binary {
            let len = file.seek(SeekFrom::End(0))?;
            file.seek(SeekFrom::Start(0))?;
            len
        } else {
            0
        };
        let buffer = ByteBuffer::new(DEFAULT_BUFFER_SIZE, codec.byte_order());
        Ok(Reader {
            codec,
            file,
            buffer,
            stats: ReaderStats {
                bytes_in_file,
                ..ReaderStats::default()
            },
            started: false,
            pending_ascii_line: None,
            closed: false,
        })
    }

    /// The codec's reported name.
    pub fn format_name(&self) -> &'static str {
        self.codec.format_name()
    }

    /// Declared total particle count.
    pub fn total_particles(&self) -> u64 {
        self.codec.total_particles()
    }

    /// Declared total original-history count.
    pub fn total_original_histories(&self) -> u64 {
        self.codec.total_original_histories()
    }

    /// Particles handed back so far.
    pub fn particles_read(&self) -> u64 {
        self.stats.particles_read
    }

    /// Original histories accumulated so far, per the §4.9 rule.
    pub fn histories_read(&self) -> u64 {
        self.stats.histories_read
    }

    /// Constant-column declarations from the header.
    pub fn fixed_values(&self) -> FixedValues {
        self.codec.fixed_values()
    }

    /// Borrows the underlying codec (for format-specific introspection, e.g.
    /// reading an IAEA or TOPAS header's statistics section).
    pub fn codec(&self) -> &C {
        &self.codec
    }

    fn seek_to_first_record(&mut self) -> Result<()> {
        if !self.started {
            self.started = true;
            if self.codec.framing() == Framing::Binary {
                self.file.seek(SeekFrom::Start(self.codec.record_start_offset()))?;
                self.buffer.clear();
            }
        }
        Ok(())
    }

    fn fill_at_least(&mut self, n: usize) -> Result<usize> {
        if self.buffer.remaining_to_read() >= n {
            return Ok(self.buffer.remaining_to_read());
        }
        self.buffer.compact();
        let read = self.buffer.append_data(&mut self.file)?;
        self.stats.bytes_read += read as u64;
        Ok(self.buffer.remaining_to_read())
    }

    fn next_binary(&mut self) -> Result<Option<Particle>> {
        let record_length = self.codec.record_length();
        if self.fill_at_least(record_length)? < record_length {
            return Ok(None);
        }
        let start = self.buffer.offset();
        let end = start + record_length;
        let record = self.buffer.data()[start..end].to_vec();
        self.buffer.move_to(end)?;
        self.codec.decode_binary(&record)
    }

    fn buffer_next_ascii_line(&mut self) -> Result<Option<String>> {
        loop {
            match self.buffer.read_line() {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    if self
                        .codec
                        .comment_markers()
                        .iter()
                        .any(|marker| trimmed.starts_with(marker))
                    {
                        continue;
                    }
                    return Ok(Some(line));
                }
                Err(Error::NotEnoughData { .. }) => {
                    self.buffer.compact();
                    let read = self.buffer.append_data(&mut self.file)?;
                    self.stats.bytes_read += read as u64;
                    if read == 0 {
                        return Ok(None);
                    }
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn next_ascii(&mut self) -> Result<Option<Particle>> {
        let line = match self.pending_ascii_line.take() {
            Some(line) => line,
            None => match self.buffer_next_ascii_line()? {
                Some(line) => line,
                None => return Ok(None),
            },
        };
        self.codec.decode_ascii(&line)
    }

    /// True when another call to [`Reader::next`] could plausibly yield a particle.
    pub fn has_more_particles(&mut self) -> bool {
        if self.stats.particles_read >= self.codec.total_particles() {
            return false;
        }
        match self.codec.framing() {
            Framing::Binary => {
                let record_length = self.codec.record_length();
                matches!(self.fill_at_least(record_length), Ok(n) if n >= record_length)
            }
            Framing::Ascii => {
                if self.pending_ascii_line.is_some() {
                    return true;
                }
                match self.buffer_next_ascii_line() {
                    Ok(Some(line)) => {
                        self.pending_ascii_line = Some(line);
                        true
                    }
                    _ => false,
                }
            }
            Framing::External => true,
        }
    }

    /// Decodes and returns the next particle, or `None` at end of stream.
    ///
    /// Skips (without error) any record the codec decodes to `None`, e.g. an
    /// absorbed pseudo-particle, continuing on to the next record.
    pub fn next(&mut self) -> Result<Option<Particle>> {
        self.seek_to_first_record()?;
        loop {
            let decoded = match self.codec.framing() {
                Framing::Binary => self.next_binary()?,
                Framing::Ascii => self.next_ascii()?,
                Framing::External => self.codec.read_external()?,
            };
            match decoded {
                Some(particle) => {
                    self.stats.particles_read += 1;
                    if particle.is_new_history() {
                        let inc = particle.incremental_histories().max(1);
                        self.stats.histories_read += inc as u64;
                    }
                    return Ok(Some(particle));
                }
                None => {
                    self.stats.metaparticles_read += 1;
                    if self.stats.particles_read >= self.codec.total_particles() {
                        return Ok(None);
                    }
                    continue;
                }
            }
        }
    }

    /// Seeks the underlying file so the next [`Reader::next`] starts at particle
    /// `index`. Only valid for binary framing; callers must then advance until a
    /// new-history particle to avoid splitting a history across a jump boundary.
    pub fn move_to_particle(&mut self, index: u64) -> Result<()> {
        if self.codec.framing() != Framing::Binary {
            return Err(Error::InvalidFormat(
                "move_to_particle is only supported for binary framing".to_string(),
            ));
        }
        let offset = self.codec.record_start_offset() + index * self.codec.record_length() as u64;
        self.file.seek(SeekFrom::Start(offset))?;
        self.buffer.clear();
        self.started = true;
        self.stats.particles_read = index;
        Ok(())
    }

    /// Closes the reader. Idempotent.
    pub fn close(&mut self) -> Result<()> {
        self.closed = true;
        Ok(())
    }
}

impl<C: ReaderCodec, F> Drop for Reader<C, F> {
    fn drop(&mut self) {
        self.closed = true;
    }
}
