//! EGS MODE0/MODE2 phase-space codec: single file, fixed header, 28/32-byte
//! records (§4.5).

use crate::buffer::{ByteBuffer, Endianness};
use crate::error::{Error, Result};
use crate::particle::{FixedValues, FloatPropertyType, IntPropertyType, Particle};
use crate::pdg::{ELECTRON_REST_MASS_MEV, ParticleType};

use super::{Framing, ReaderCodec};

/// The EGS sub-variant, distinguished by record length and trailing ZLAST field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EgsMode {
    /// 28-byte records, no ZLAST field.
    Mode0,
    /// 32-byte records, trailing ZLAST field.
    Mode2,
}

impl EgsMode {
    /// Record length in bytes: 28 for MODE0, 32 for MODE2.
    pub fn record_length(self) -> usize {
        match self {
            EgsMode::Mode0 => 28,
            EgsMode::Mode2 => 32,
        }
    }

    /// The 5-byte ASCII tag at the start of the header (`"MODE0"`/`"MODE2"`).
    pub fn tag(self) -> &'static str {
        match self {
            EgsMode::Mode0 => "MODE0",
            EgsMode::Mode2 => "MODE2",
        }
    }
}

/// How to interpret LATCH bits 24-28 (the "secondary particle" marker).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatchInterpretation {
    /// Preserve LATCH verbatim; no secondary inference.
    Verbatim,
    /// Infer `IS_SECONDARY_PARTICLE` from bits 24-28.
    InferSecondary,
}

/// Parsed/accumulated EGS header (28 or 32 bytes, depending on mode).
#[derive(Debug, Clone, Copy)]
pub struct EgsHeader {
    /// MODE0 or MODE2.
    pub mode: EgsMode,
    /// Declared total particle count.
    pub particle_count: u32,
    /// Declared photon count.
    pub photon_count: u32,
    /// Declared maximum kinetic energy (MeV).
    pub max_kinetic_energy: f32,
    /// Declared minimum electron energy (MeV).
    pub min_electron_energy: f32,
    /// Stored as a float on the wire to preserve the legacy format exactly.
    pub original_histories: f32,
    /// Z value every decoded particle is given (EGS does not store Z).
    pub constant_z: f32,
}

impl EgsHeader {
    /// Parses a 28- or 32-byte EGS header, tagging decoded particles with `constant_z`.
    pub fn parse(bytes: &[u8], constant_z: f32) -> Result<EgsHeader> {
        if bytes.len() < 5 {
            return Err(Error::InvalidFormat("EGS header truncated".to_string()));
        }
        let tag = String::from_utf8_lossy(&bytes[0..5]);
        let mode = match tag.as_ref() {
            "MODE0" => EgsMode::Mode0,
            "MODE2" => EgsMode::Mode2,
            other => return Err(Error::InvalidFormat(format!("unrecognized EGS mode tag {other:?}"))),
        };
        let mut buffer = ByteBuffer::from_bytes(&bytes[5..mode.record_length()], Endianness::Little);
        let particle_count = buffer.read()?;
        let photon_count = buffer.read()?;
        let max_kinetic_energy = buffer.read()?;
        let min_electron_energy = buffer.read()?;
        let original_histories = buffer.read()?;
        Ok(EgsHeader {
            mode,
            particle_count,
            photon_count,
            max_kinetic_energy,
            min_electron_energy,
            original_histories,
            constant_z,
        })
    }

    /// Renders the header back to its 28- or 32-byte wire form.
    pub fn render(&self) -> Vec<u8> {
        let mut buffer = ByteBuffer::new(self.mode.record_length(), Endianness::Little);
        buffer.write_bytes(self.mode.tag().as_bytes()).unwrap();
        buffer.write(self.particle_count).unwrap();
        buffer.write(self.photon_count).unwrap();
        buffer.write(self.max_kinetic_energy).unwrap();
        buffer.write(self.min_electron_energy).unwrap();
        buffer.write(self.original_histories).unwrap();
        buffer.data().to_vec()
    }
}

/// Reader-side EGS codec.
#[derive(Debug)]
pub struct EgsReaderCodec {
    header: EgsHeader,
    latch_interpretation: LatchInterpretation,
    /// When `Some`, overrides `header.particle_count` with a recount from file
    /// size (§9 open question). The caller is responsible for computing this
    /// ahead of construction (file size isn't known to the codec).
    recomputed_particle_count: Option<u32>,
}

impl EgsReaderCodec {
    /// Wraps an already-parsed header.
    pub fn new(header: EgsHeader, latch_interpretation: LatchInterpretation) -> Self {
        EgsReaderCodec {
            header,
            latch_interpretation,
            recomputed_particle_count: None,
        }
    }

    /// Applies the optional "recompute particle count from file size" behavior,
    /// warning (via `log::warn!`) when it disagrees with the declared count.
    pub fn recompute_particle_count(&mut self, file_size: u64) {
        let body = file_size.saturating_sub(self.header.mode.record_length() as u64);
        let computed = (body / self.header.mode.record_length() as u64) as u32;
        if computed != self.header.particle_count {
            log::warn!(
                "EGS header declares {} particles but file size implies {}; using the recomputed count",
                self.header.particle_count,
                computed
            );
        }
        self.recomputed_particle_count = Some(computed);
    }

    /// The parsed header.
    pub fn header(&self) -> &EgsHeader {
        &self.header
    }
}

impl ReaderCodec for EgsReaderCodec {
    fn format_name(&self) -> &'static str {
        "EGS"
    }

    fn framing(&self) -> Framing {
        Framing::Binary
    }

    fn record_start_offset(&self) -> u64 {
        self.header.mode.record_length() as u64
    }

    fn record_length(&self) -> usize {
        self.header.mode.record_length()
    }

    fn total_particles(&self) -> u64 {
        self.recomputed_particle_count.unwrap_or(self.header.particle_count) as u64
    }

    fn total_original_histories(&self) -> u64 {
        self.header.original_histories as u64
    }

    fn fixed_values(&self) -> FixedValues {
        let mut fv = FixedValues::default();
        fv.z_is_constant = true;
        fv.constant_z = self.header.constant_z;
        fv
    }

    fn decode_binary(&mut self, record: &[u8]) -> Result<Option<Particle>> {
        let mut buffer = ByteBuffer::from_bytes(record, Endianness::Little);
        let latch: u32 = buffer.read()?;
        let raw_energy: f32 = buffer.read()?;
        let new_history = raw_energy < 0.0;
        let total_energy = raw_energy.abs();

        let x: f32 = buffer.read()?;
        let y: f32 = buffer.read()?;
        let mut u: f32 = buffer.read()?;
        let mut v: f32 = buffer.read()?;
        let weight: f32 = buffer.read()?;
        let z_last = if self.header.mode == EgsMode::Mode2 {
            Some(buffer.read::<f32>()?)
        } else {
            None
        };

        let charge_bits = (latch >> 29) & 0b11;
        let (particle_type, w_sign) = match charge_bits {
            0b00 => (ParticleType::Photon, 1.0f32),
            0b01 => (ParticleType::Electron, 1.0f32),
            0b10 => (ParticleType::Positron, 1.0f32),
            _ => (ParticleType::Unsupported, 1.0f32),
        };
        let w = w_sign * crate::particle::calc_third_unit_component(&mut u, &mut v);

        let kinetic_energy = match particle_type {
            ParticleType::Electron | ParticleType::Positron => total_energy - ELECTRON_REST_MASS_MEV,
            _ => total_energy,
        };

        let mut particle = Particle::new(
            particle_type,
            kinetic_energy,
            x,
            y,
            self.header.constant_z,
            u,
            v,
            w,
            new_history,
            weight,
        );
        particle.set_int_property(IntPropertyType::EgsLatch, latch as i32);
        if (latch & (1 << 31)) != 0 {
            particle.set_bool_property(crate::particle::BoolPropertyType::IsMultipleCrosser, true);
        }
        if self.latch_interpretation == LatchInterpretation::InferSecondary {
            let secondary_bits = (latch >> 24) & 0b11111;
            particle.set_bool_property(
                crate::particle::BoolPropertyType::IsSecondaryParticle,
                secondary_bits != 0,
            );
        }
        if let Some(z_last) = z_last {
            particle.set_float_property(FloatPropertyType::ZLast, z_last);
        }
        Ok(Some(particle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode0_header_bytes(particle_count: u32) -> Vec<u8> {
        let mut buffer = ByteBuffer::new(28, Endianness::Little);
        buffer.write_bytes(b"MODE0").unwrap();
        buffer.write(particle_count).unwrap();
        buffer.write(1u32).unwrap();
        buffer.write(5.0f32).unwrap();
        buffer.write(0.0f32).unwrap();
        buffer.write(1.0f32).unwrap();
        buffer.data().to_vec()
    }

    #[test]
    fn parses_mode0_header() {
        let bytes = mode0_header_bytes(1);
        let header = EgsHeader::parse(&bytes, 0.0).unwrap();
        assert_eq!(header.mode, EgsMode::Mode0);
        assert_eq!(header.particle_count, 1);
        assert_eq!(header.original_histories, 1.0);
    }

    #[test]
    fn decodes_photon_no_rest_mass_subtraction() {
        let header = EgsHeader::parse(&mode0_header_bytes(1), 0.0).unwrap();
        let mut codec = EgsReaderCodec::new(header, LatchInterpretation::InferSecondary);
        let mut buf = ByteBuffer::new(28, Endianness::Little);
        buf.write(0u32).unwrap(); // LATCH: charge bits 00 -> photon
        buf.write(-5.511f32).unwrap(); // new history, total energy
        buf.write(0.0f32).unwrap();
        buf.write(0.0f32).unwrap();
        buf.write(0.0f32).unwrap();
        buf.write(0.0f32).unwrap();
        buf.write(1.0f32).unwrap();
        let particle = codec.decode_binary(buf.data()).unwrap().unwrap();
        assert_eq!(particle.particle_type(), ParticleType::Photon);
        assert!((particle.kinetic_energy() - 5.511).abs() < 1e-4);
        assert!(particle.is_new_history());
    }

    #[test]
    fn electron_subtracts_rest_mass() {
        let header = EgsHeader::parse(&mode0_header_bytes(1), 0.0).unwrap();
        let mut codec = EgsReaderCodec::new(header, LatchInterpretation::Verbatim);
        let latch = 0b01u32 << 29;
        let mut buf = ByteBuffer::new(28, Endianness::Little);
        buf.write(latch).unwrap();
        buf.write(1.021998f32).unwrap();
        buf.write(0.0f32).unwrap();
        buf.write(0.0f32).unwrap();
        buf.write(0.0f32).unwrap();
        buf.write(0.0f32).unwrap();
        buf.write(1.0f32).unwrap();
        let particle = codec.decode_binary(buf.data()).unwrap().unwrap();
        assert_eq!(particle.particle_type(), ParticleType::Electron);
        assert!((particle.kinetic_energy() - 0.510999).abs() < 1e-4);
    }
}
