//! The buffered writer skeleton shared by every codec (§4.3).
//!
//! A [`Writer`] owns the file handle and output [`ByteBuffer`]s; a codec plugs in
//! through [`WriterCodec`] and only has to know how to encode a [`Particle`] and
//! how to render its header. Buffering, record framing, flip/constant-column
//! policy, and history bookkeeping all live here exactly once.

/// EGS MODE0/MODE2 writer codec (§4.5).
pub mod egs;
/// IAEA sidecar-header writer codec (§4.4).
pub mod iaea;
/// penEasy ASCII writer codec (§4.7).
pub mod peneasy;
/// TOPAS BINARY/ASCII/LIMITED writer codec (§4.6).
pub mod topas;

use std::fs::File;
use std::io::{Seek, SeekFrom, Write};
use std::path::Path;

use crate::buffer::{ByteBuffer, DEFAULT_BUFFER_SIZE, Endianness};
use crate::error::{Error, Result};
use crate::particle::{FixedValues, Particle};
use crate::pdg::ParticleType;

/// How a codec accepts records from the skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    /// Fixed-length binary records.
    Binary,
    /// One particle per ASCII text line.
    Ascii,
    /// The codec drives its own I/O entirely; the skeleton performs none.
    External,
}

/// The capability a codec plugs into the writer skeleton.
pub trait WriterCodec {
    /// Name used for diagnostics and registry dispatch (e.g. `"IAEA"`).
    fn format_name(&self) -> &'static str;
    /// How this codec frames records.
    fn framing(&self) -> Framing;

    /// Bytes reserved for the header before the first record (binary/ascii
    /// framing only; back-patched on close).
    fn record_start_offset(&self) -> u64 {
        0
    }

    /// Bytes per record (binary framing only).
    fn record_length(&self) -> usize {
        0
    }

    /// Whether this codec can emit an explicit `PseudoParticle` record (only
    /// TOPAS does; others fold empty histories into the header counter).
    fn supports_explicit_pseudo_particles(&self) -> bool {
        false
    }

    /// Per-axis capability: can this codec elide a column as constant?
    fn can_have_constant(&self, axis: Axis) -> bool {
        let _ = axis;
        false
    }

    /// Encodes `particle` into `out` (binary framing).
    fn encode_binary(&mut self, particle: &Particle, out: &mut ByteBuffer) -> Result<()> {
        let _ = (particle, out);
        unimplemented!("binary framing not implemented for this codec")
    }

    /// Encodes `particle` as one ASCII line (ascii framing).
    fn encode_ascii(&mut self, particle: &Particle) -> Result<String> {
        let _ = particle;
        unimplemented!("ascii framing not implemented for this codec")
    }

    /// Drives its own I/O to persist `particle` (external framing).
    fn write_external(&mut self, particle: &Particle) -> Result<()> {
        let _ = particle;
        unimplemented!("external framing not implemented for this codec")
    }

    /// Encodes an explicit pseudo-particle representing `k` empty histories
    /// (binary framing). Only called when
    /// [`WriterCodec::supports_explicit_pseudo_particles`] is true.
    fn encode_pseudo_particle(&mut self, k: u32, out: &mut ByteBuffer) -> Result<()> {
        let _ = (k, out);
        unimplemented!("this codec does not support explicit pseudo-particles")
    }

    /// Encodes an explicit pseudo-particle as one ASCII line (ascii framing).
    /// Only called when [`WriterCodec::supports_explicit_pseudo_particles`] is true.
    fn encode_pseudo_particle_ascii(&mut self, k: u32) -> Result<String> {
        let _ = k;
        unimplemented!("this codec does not support explicit pseudo-particles")
    }

    /// Renders the header, padded by the caller up to `record_start_offset`.
    fn write_header(&self, histories_written: u64, particles_written: u64) -> Result<Vec<u8>>;

    /// Endianness multi-byte binary fields are encoded in.
    fn byte_order(&self) -> Endianness {
        Endianness::Little
    }
}

/// The seven axes a [`FixedValues`] constant-column declaration can cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Position X.
    X,
    /// Position Y.
    Y,
    /// Position Z.
    Z,
    /// Direction cosine along X.
    Px,
    /// Direction cosine along Y.
    Py,
    /// Direction cosine along Z.
    Pz,
    /// Statistical weight.
    Weight,
}

/// A buffered, codec-driven writer of phase-space particles (§4.3).
#[derive(Debug)]
pub struct Writer<C: WriterCodec, F = File> {
    codec: C,
    file: F,
    scratch: ByteBuffer,
    main: ByteBuffer,
    fixed_values: FixedValues,
    flip: [bool; 3],
    histories_written: u64,
    particles_written: u64,
    pending_histories: u64,
    closed: bool,
}

impl<C: WriterCodec> Writer<C, File> {
    /// Creates `path` and wraps it with `codec`.
    pub fn create<P: AsRef<Path>>(path: P, codec: C, fixed_values: FixedValues) -> Result<Self> {
        let file = File::create(path)?;
        Self::new(file, codec, fixed_values)
    }
}

impl<C: WriterCodec, F: Write + Seek> Writer<C, F> {
    /// Wraps an already-open file-like handle.
    pub fn new(mut file: F, codec: C, fixed_values: FixedValues) -> Result<Self> {
        let record_length = codec.record_length().max(1);
        let scratch = ByteBuffer::new(record_length, codec.byte_order());
        let main = ByteBuffer::new(DEFAULT_BUFFER_SIZE, codec.byte_order());
        // Reserve the header region so particle data lands after it; the real
        // header bytes are back-patched here at close() (§4.3).
        if codec.record_start_offset() > 0 {
            file.seek(SeekFrom::Start(codec.record_start_offset()))?;
        }
        Ok(Writer {
            codec,
            file,
            scratch,
            main,
            fixed_values,
            flip: [false; 3],
            histories_written: 0,
            particles_written: 0,
            pending_histories: 0,
            closed: false,
        })
    }

    /// Sets whether to negate the x/y/z direction cosine on every subsequent write.
    pub fn set_flip(&mut self, x: bool, y: bool, z: bool) {
        self.flip = [x, y, z];
    }

    /// Histories accounted for so far, including any staged-but-unflushed
    /// pending count.
    pub fn histories_written(&self) -> u64 {
        self.histories_written + self.pending_histories
    }

    /// Particles actually persisted so far.
    pub fn particles_written(&self) -> u64 {
        self.particles_written
    }

    /// Borrows the underlying codec (for format-specific introspection).
    pub fn codec(&self) -> &C {
        &self.codec
    }

    fn apply_constants(&self, particle: &mut Particle) {
        if self.fixed_values.x_is_constant {
            particle.set_x(self.fixed_values.constant_x);
        }
        if self.fixed_values.y_is_constant {
            particle.set_y(self.fixed_values.constant_y);
        }
        if self.fixed_values.z_is_constant {
            particle.set_z(self.fixed_values.constant_z);
        }
        if self.fixed_values.px_is_constant {
            particle.set_px(self.fixed_values.constant_px);
        }
        if self.fixed_values.py_is_constant {
            particle.set_py(self.fixed_values.constant_py);
        }
        if self.fixed_values.pz_is_constant {
            particle.set_pz(self.fixed_values.constant_pz);
        }
        if self.fixed_values.weight_is_constant {
            particle.set_weight(self.fixed_values.constant_weight);
        }
    }

    fn flush_main(&mut self) -> Result<()> {
        self.file.write_all(self.main.data())?;
        self.main.clear();
        Ok(())
    }

    /// Writes one particle, applying flip/constant-column policy (§4.3).
    pub fn write(&mut self, particle: &Particle) -> Result<()> {
        if self.closed {
            return Err(Error::ClosedWriter);
        }
        if particle.particle_type() == ParticleType::Unsupported {
            return Err(Error::UnsupportedParticle(particle.particle_type()));
        }
        if particle.particle_type() == ParticleType::PseudoParticle
            && !self.codec.supports_explicit_pseudo_particles()
        {
            if particle.is_new_history() {
                self.pending_histories += particle.incremental_histories().max(1) as u64;
            }
            return Ok(());
        }

        let mut particle = particle.clone();
        if self.flip[0] {
            particle.set_px(-particle.px());
        }
        if self.flip[1] {
            particle.set_py(-particle.py());
        }
        if self.flip[2] {
            particle.set_pz(-particle.pz());
        }
        self.apply_constants(&mut particle);

        match self.codec.framing() {
            Framing::Binary => {
                self.scratch.clear();
                self.codec.encode_binary(&particle, &mut self.scratch)?;
                if self.main.remaining_to_write() < self.scratch.len() {
                    self.flush_main()?;
                }
                self.main.append_buffer(&self.scratch, true)?;
            }
            Framing::Ascii => {
                let line = self.codec.encode_ascii(&particle)?;
                let bytes = line.as_bytes();
                if self.main.remaining_to_write() < bytes.len() + 1 {
                    self.flush_main()?;
                }
                self.main.write_bytes(bytes)?;
                self.main.write_bytes(b"\n")?;
            }
            Framing::External => {
                self.codec.write_external(&particle)?;
            }
        }

        self.particles_written += 1;
        if particle.is_new_history() {
            self.histories_written += particle.incremental_histories().max(1) as u64;
        }
        Ok(())
    }

    /// Accounts for `k` simulated histories that produced no scoring particle.
    /// Default staging behavior; codecs that support an explicit pseudo-particle
    /// marker (TOPAS) should instead call [`Writer::write_pseudo_particle`].
    pub fn add_additional_histories(&mut self, k: u64) {
        self.pending_histories += k;
    }

    /// Emits an explicit pseudo-particle record for `k` empty histories, for
    /// codecs that support it (currently TOPAS BINARY/ASCII).
    pub fn write_pseudo_particle(&mut self, k: u32) -> Result<()> {
        if !self.codec.supports_explicit_pseudo_particles() {
            self.pending_histories += k as u64;
            return Ok(());
        }
        if k == 0 {
            return Ok(());
        }
        if k as i64 > i32::MAX as i64 {
            return Err(Error::Overflow(format!(
                "pseudo-particle history count {k} exceeds signed-32 range mid-file"
            )));
        }
        match self.codec.framing() {
            Framing::Binary => {
                self.scratch.clear();
                self.codec.encode_pseudo_particle(k, &mut self.scratch)?;
                if self.main.remaining_to_write() < self.scratch.len() {
                    self.flush_main()?;
                }
                self.main.append_buffer(&self.scratch, true)?;
            }
            Framing::Ascii => {
                let line = self.codec.encode_pseudo_particle_ascii(k)?;
                let bytes = line.as_bytes();
                if self.main.remaining_to_write() < bytes.len() + 1 {
                    self.flush_main()?;
                }
                self.main.write_bytes(bytes)?;
                self.main.write_bytes(b"\n")?;
            }
            Framing::External => {
                return Err(Error::InvalidFormat(
                    "pseudo-particles are only emitted in binary/ascii framing".to_string(),
                ));
            }
        }
        self.histories_written += k as u64;
        Ok(())
    }

    /// Flushes buffered data, rewrites the header with final statistics, and
    /// closes the file. Idempotent.
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        if self.pending_histories > 0 {
            let k = self.pending_histories;
            self.pending_histories = 0;
            if self.codec.supports_explicit_pseudo_particles() {
                self.write_pseudo_particle(k as u32)?;
            } else {
                self.histories_written += k;
            }
        }
        self.flush_main()?;
        let header_bytes = self
            .codec
            .write_header(self.histories_written, self.particles_written)?;
        self.file.seek(SeekFrom::Start(0))?;
        let target_len = self.codec.record_start_offset() as usize;
        if header_bytes.len() > target_len && target_len > 0 {
            return Err(Error::InconsistentMetadata(format!(
                "header is {} bytes but record_start_offset is {}",
                header_bytes.len(),
                target_len
            )));
        }
        self.file.write_all(&header_bytes)?;
        if target_len > header_bytes.len() {
            let padding = vec![0u8; target_len - header_bytes.len()];
            self.file.write_all(&padding)?;
        }
        self.file.flush()?;
        Ok(())
    }
}

impl<C: WriterCodec, F: Write + Seek> Drop for Writer<C, F> {
    fn drop(&mut self) {
        if !self.closed {
            if let Err(e) = self.close() {
                log::error!("error closing phase-space writer on drop: {e}");
            }
        }
    }
}
