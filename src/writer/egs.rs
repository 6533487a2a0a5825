//! Writer side of the EGS codec: 28/32-byte records, LATCH reconstruction,
//! energy-sign history marker (§4.5).

use crate::buffer::{ByteBuffer, Endianness};
use crate::error::Result;
use crate::particle::{BoolPropertyType, FloatPropertyType, IntPropertyType, Particle};
use crate::pdg::{ELECTRON_REST_MASS_MEV, ParticleType};
use crate::reader::egs::{EgsHeader, EgsMode};

use super::{Axis, Framing, WriterCodec};

/// Writer-side EGS codec: accumulates header counters as records are written.
#[derive(Debug)]
pub struct EgsWriterCodec {
    mode: EgsMode,
    constant_z: f32,
    particle_count: u64,
    photon_count: u64,
    max_kinetic_energy: f32,
    min_electron_energy: f32,
    explicit_original_histories: Option<f32>,
}

impl EgsWriterCodec {
    /// Creates a codec for `mode`; `constant_z` is used only for documentation —
    /// EGS never stores Z, so the writer accepts whatever the caller provides.
    pub fn new(mode: EgsMode, constant_z: f32) -> Self {
        EgsWriterCodec {
            mode,
            constant_z,
            particle_count: 0,
            photon_count: 0,
            max_kinetic_energy: 0.0,
            min_electron_energy: f32::MAX,
            explicit_original_histories: None,
        }
    }

    /// Sets the declared `original_histories` explicitly; otherwise it's taken
    /// from `histories_written` at close (§4.5).
    pub fn set_original_histories(&mut self, value: f32) {
        self.explicit_original_histories = Some(value);
    }
}

impl WriterCodec for EgsWriterCodec {
    fn format_name(&self) -> &'static str {
        "EGS"
    }

    fn framing(&self) -> Framing {
        Framing::Binary
    }

    fn record_start_offset(&self) -> u64 {
        self.mode.record_length() as u64
    }

    fn record_length(&self) -> usize {
        self.mode.record_length()
    }

    fn can_have_constant(&self, axis: Axis) -> bool {
        matches!(axis, Axis::Z)
    }

    fn encode_binary(&mut self, particle: &Particle, out: &mut ByteBuffer) -> Result<()> {
        let charge_bits: u32 = match particle.particle_type() {
            ParticleType::Photon => 0b00,
            ParticleType::Electron => 0b01,
            ParticleType::Positron => 0b10,
            other => return Err(crate::error::Error::UnsupportedParticle(other)),
        };
        // An incoming EGS_LATCH is returned verbatim; only a particle with no such
        // property (e.g. decoded from IAEA or TOPAS) gets one built from scratch.
        let latch: u32 = match particle.int_property(IntPropertyType::EgsLatch) {
            Some(existing) => existing as u32,
            None => {
                let mut latch = charge_bits << 29;
                if particle.bool_property(BoolPropertyType::IsMultipleCrosser) == Some(true) {
                    latch |= 1 << 31;
                }
                if particle.bool_property(BoolPropertyType::IsSecondaryParticle) == Some(true) {
                    latch |= 1 << 24;
                }
                latch
            }
        };
        out.write(latch)?;

        let kinetic_energy = particle.kinetic_energy();
        let total_energy = match particle.particle_type() {
            ParticleType::Electron | ParticleType::Positron => kinetic_energy + ELECTRON_REST_MASS_MEV,
            _ => kinetic_energy,
        };
        let signed_energy = if particle.is_new_history() { -total_energy } else { total_energy };
        out.write(signed_energy)?;
        out.write(particle.x())?;
        out.write(particle.y())?;
        out.write(particle.px())?;
        out.write(particle.py())?;
        out.write(particle.weight())?;
        if self.mode == EgsMode::Mode2 {
            let z_last = particle.float_property(FloatPropertyType::ZLast).unwrap_or(0.0);
            out.write(z_last)?;
        }

        self.particle_count += 1;
        if particle.particle_type() == ParticleType::Photon {
            self.photon_count += 1;
        } else if particle.particle_type() == ParticleType::Electron && kinetic_energy < self.min_electron_energy {
            self.min_electron_energy = kinetic_energy;
        }
        if kinetic_energy > self.max_kinetic_energy {
            self.max_kinetic_energy = kinetic_energy;
        }
        Ok(())
    }

    fn write_header(&self, histories_written: u64, particles_written: u64) -> Result<Vec<u8>> {
        let original_histories = self
            .explicit_original_histories
            .unwrap_or(histories_written as f32);
        let header = EgsHeader {
            mode: self.mode,
            particle_count: particles_written as u32,
            photon_count: self.photon_count as u32,
            max_kinetic_energy: self.max_kinetic_energy,
            min_electron_energy: if self.min_electron_energy == f32::MAX {
                0.0
            } else {
                self.min_electron_energy
            },
            original_histories,
            constant_z: self.constant_z,
        };
        Ok(header.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::Particle;

    #[test]
    fn electron_adds_rest_mass_back() {
        let mut codec = EgsWriterCodec::new(EgsMode::Mode0, 0.0);
        let particle = Particle::new(ParticleType::Electron, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, true, 1.0);
        let mut out = ByteBuffer::new(28, Endianness::Little);
        codec.encode_binary(&particle, &mut out).unwrap();
        out.move_to(4).unwrap();
        let energy: f32 = out.read().unwrap();
        assert!((-energy - (0.5 + ELECTRON_REST_MASS_MEV)).abs() < 1e-4);
    }

    #[test]
    fn secondary_particle_with_no_prior_latch_sets_secondary_bits() {
        let mut codec = EgsWriterCodec::new(EgsMode::Mode0, 0.0);
        let mut particle = Particle::new(ParticleType::Electron, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, true, 1.0);
        particle.set_bool_property(BoolPropertyType::IsSecondaryParticle, true);
        let mut out = ByteBuffer::new(28, Endianness::Little);
        codec.encode_binary(&particle, &mut out).unwrap();
        out.move_to(0).unwrap();
        let latch: u32 = out.read().unwrap();
        assert_eq!((latch >> 24) & 0x1F, 1, "bits 24-28 must mark the particle as secondary");
        assert_eq!((latch >> 29) & 0b11, 0b01, "bits 29-30 must still carry the electron charge");
    }

    #[test]
    fn existing_latch_is_preserved_verbatim() {
        let mut codec = EgsWriterCodec::new(EgsMode::Mode0, 0.0);
        let mut particle = Particle::new(ParticleType::Electron, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, true, 1.0);
        particle.set_bool_property(BoolPropertyType::IsSecondaryParticle, true);
        particle.set_int_property(IntPropertyType::EgsLatch, 0xABCD_1234u32 as i32);
        let mut out = ByteBuffer::new(28, Endianness::Little);
        codec.encode_binary(&particle, &mut out).unwrap();
        out.move_to(0).unwrap();
        let latch: u32 = out.read().unwrap();
        assert_eq!(latch, 0xABCD_1234, "a pre-existing EGS_LATCH must pass through unchanged");
    }
}
