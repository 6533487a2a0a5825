//! Writer side of the penEasy codec: fixed ASCII header, one line per record (§4.7).

use crate::error::Result;
use crate::particle::{BoolPropertyType, IntPropertyType, Particle};
use crate::pdg::EV_TO_MEV;

use super::{Framing, WriterCodec};
use crate::reader::peneasy::HEADER_TEXT;

/// Writer-side penEasy codec.
#[derive(Debug, Default)]
pub struct PenEasyWriterCodec;

impl WriterCodec for PenEasyWriterCodec {
    fn format_name(&self) -> &'static str {
        "penEasy"
    }

    fn framing(&self) -> Framing {
        Framing::Ascii
    }

    fn record_start_offset(&self) -> u64 {
        HEADER_TEXT.len() as u64
    }

    fn encode_ascii(&mut self, particle: &Particle) -> Result<String> {
        let kpar = particle
            .particle_type()
            .to_penelope_kpar()
            .ok_or(crate::error::Error::UnsupportedParticle(particle.particle_type()))?;
        let energy_ev = particle.kinetic_energy() / EV_TO_MEV;
        let delta_n = particle.incremental_histories();
        let ilb1 = particle
            .int_property(IntPropertyType::PenelopeIlb1)
            .unwrap_or(if particle.bool_property(BoolPropertyType::IsSecondaryParticle) == Some(true) {
                2
            } else {
                1
            });
        let ilb2 = particle.int_property(IntPropertyType::PenelopeIlb2).unwrap_or(0);
        let ilb3 = particle.int_property(IntPropertyType::PenelopeIlb3).unwrap_or(0);
        let ilb4 = particle.int_property(IntPropertyType::PenelopeIlb4).unwrap_or(0);
        let ilb5 = particle.int_property(IntPropertyType::PenelopeIlb5).unwrap_or(0);

        Ok(format!(
            "{kpar} {energy_ev:e} {x} {y} {z} {u} {v} {w} {weight:e} {delta_n} {ilb1} {ilb2} {ilb3} {ilb4} {ilb5}",
            x = particle.x(),
            y = particle.y(),
            z = particle.z(),
            u = particle.px(),
            v = particle.py(),
            w = particle.pz(),
            weight = particle.weight(),
        ))
    }

    fn write_header(&self, _histories_written: u64, _particles_written: u64) -> Result<Vec<u8>> {
        Ok(HEADER_TEXT.as_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdg::ParticleType;

    #[test]
    fn encodes_photon_line() {
        let mut codec = PenEasyWriterCodec;
        let particle = Particle::new(ParticleType::Photon, 6.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, true, 1.0);
        let line = codec.encode_ascii(&particle).unwrap();
        assert!(line.starts_with("2 "));
    }
}
