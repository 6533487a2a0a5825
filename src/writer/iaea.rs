//! Writer side of the IAEA codec: binary `.IAEAphsp` records plus a sidecar
//! `.IAEAheader` rewritten at close (§4.4).

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::buffer::{ByteBuffer, Endianness};
use crate::error::Result;
use crate::particle::{FixedValues, FloatPropertyType, IntPropertyType, Particle};
use crate::pdg::ParticleType;
use crate::reader::iaea::{ExtraFloatType, ExtraIntType, TypeStats};

use super::{Axis, Framing, WriterCodec};

/// Writer-configurable options for a new IAEA file.
#[derive(Debug, Clone)]
pub struct IaeaWriterOptions {
    /// `IAEA_INDEX` section value.
    pub iaea_index: String,
    /// `TITLE` section value.
    pub title: String,
    /// Extra float columns to emit, in order.
    pub extra_floats: Vec<ExtraFloatType>,
    /// Extra int columns to emit, in order.
    pub extra_ints: Vec<ExtraIntType>,
    /// Byte order to declare and encode records in.
    pub byte_order: Endianness,
}

impl Default for IaeaWriterOptions {
    fn default() -> Self {
        IaeaWriterOptions {
            iaea_index: "0".to_string(),
            title: String::new(),
            extra_floats: Vec::new(),
            extra_ints: vec![ExtraIntType::IncrementalHistoryNumber],
            byte_order: Endianness::Little,
        }
    }
}

/// Writer-side IAEA codec: binary records plus accumulated header statistics.
#[derive(Debug)]
pub struct IaeaWriterCodec {
    header_path: PathBuf,
    options: IaeaWriterOptions,
    fixed_values: FixedValues,
    type_stats: HashMap<i8, TypeStats>,
    min_xyz: (f32, f32, f32),
    max_xyz: (f32, f32, f32),
}

impl IaeaWriterCodec {
    /// Creates a codec that will (re)write the sidecar header at `header_path` on
    /// close. `fixed_values` declares which of the seven axes are constant
    /// across the file; IAEA elides a constant axis's column from every record
    /// (§4.3's constant-column contract — IAEA supports all seven axes).
    pub fn new(header_path: PathBuf, options: IaeaWriterOptions, fixed_values: FixedValues) -> Self {
        IaeaWriterCodec {
            header_path,
            options,
            fixed_values,
            type_stats: HashMap::new(),
            min_xyz: (f32::MAX, f32::MAX, f32::MAX),
            max_xyz: (f32::MIN, f32::MIN, f32::MIN),
        }
    }

    fn record_length(&self) -> usize {
        let stored_floats = [
            !self.fixed_values.x_is_constant,
            !self.fixed_values.y_is_constant,
            !self.fixed_values.z_is_constant,
            !self.fixed_values.px_is_constant,
            !self.fixed_values.py_is_constant,
            !self.fixed_values.weight_is_constant,
        ]
        .into_iter()
        .filter(|stored| *stored)
        .count();
        // type code + energy + stored (x, y, z, u, v, weight)
        1 + 4 + 4 * stored_floats + 4 * self.options.extra_floats.len() + 4 * self.options.extra_ints.len()
    }
}

impl WriterCodec for IaeaWriterCodec {
    fn format_name(&self) -> &'static str {
        "IAEA"
    }

    fn framing(&self) -> Framing {
        Framing::Binary
    }

    fn record_start_offset(&self) -> u64 {
        0
    }

    fn record_length(&self) -> usize {
        self.record_length()
    }

    fn byte_order(&self) -> Endianness {
        self.options.byte_order
    }

    fn can_have_constant(&self, _axis: Axis) -> bool {
        true
    }

    fn encode_binary(&mut self, particle: &Particle, out: &mut ByteBuffer) -> Result<()> {
        let magnitude = particle
            .particle_type()
            .to_iaea_magnitude()
            .ok_or(crate::error::Error::UnsupportedParticle(particle.particle_type()))?;
        let type_code = if particle.pz() < 0.0 { -magnitude } else { magnitude };
        out.write(type_code)?;

        let energy = if particle.is_new_history() {
            -particle.kinetic_energy()
        } else {
            particle.kinetic_energy()
        };
        out.write(energy)?;
        if !self.fixed_values.x_is_constant {
            out.write(particle.x())?;
        }
        if !self.fixed_values.y_is_constant {
            out.write(particle.y())?;
        }
        if !self.fixed_values.z_is_constant {
            out.write(particle.z())?;
        }
        if !self.fixed_values.px_is_constant {
            out.write(particle.px())?;
        }
        if !self.fixed_values.py_is_constant {
            out.write(particle.py())?;
        }
        if !self.fixed_values.weight_is_constant {
            out.write(particle.weight())?;
        }

        for extra in &self.options.extra_floats {
            let value = match extra {
                ExtraFloatType::XLast => particle.float_property(FloatPropertyType::XLast).unwrap_or(0.0),
                ExtraFloatType::YLast => particle.float_property(FloatPropertyType::YLast).unwrap_or(0.0),
                ExtraFloatType::ZLast => particle.float_property(FloatPropertyType::ZLast).unwrap_or(0.0),
                ExtraFloatType::Custom(_) => 0.0,
            };
            out.write(value)?;
        }
        for extra in &self.options.extra_ints {
            let value = match extra {
                ExtraIntType::IncrementalHistoryNumber => particle.incremental_histories() as i32,
                ExtraIntType::EgsLatch => particle.int_property(IntPropertyType::EgsLatch).unwrap_or(0),
                ExtraIntType::PenelopeIlb1 => particle.int_property(IntPropertyType::PenelopeIlb1).unwrap_or(0),
                ExtraIntType::PenelopeIlb2 => particle.int_property(IntPropertyType::PenelopeIlb2).unwrap_or(0),
                ExtraIntType::PenelopeIlb3 => particle.int_property(IntPropertyType::PenelopeIlb3).unwrap_or(0),
                ExtraIntType::PenelopeIlb4 => particle.int_property(IntPropertyType::PenelopeIlb4).unwrap_or(0),
                ExtraIntType::PenelopeIlb5 => particle.int_property(IntPropertyType::PenelopeIlb5).unwrap_or(0),
                ExtraIntType::Custom(_) => 0,
            };
            out.write(value)?;
        }

        let key = if particle.pz() < 0.0 { -magnitude } else { magnitude };
        let stats = self.type_stats.entry(key).or_default();
        stats.count += 1;
        stats.weight_sum += particle.weight() as f64;
        stats.weight_min = if stats.count == 1 { particle.weight() } else { stats.weight_min.min(particle.weight()) };
        stats.weight_max = stats.weight_max.max(particle.weight());
        stats.energy_sum += particle.kinetic_energy() as f64;
        stats.energy_min = if stats.count == 1 {
            particle.kinetic_energy()
        } else {
            stats.energy_min.min(particle.kinetic_energy())
        };
        stats.energy_max = stats.energy_max.max(particle.kinetic_energy());

        self.min_xyz.0 = self.min_xyz.0.min(particle.x());
        self.min_xyz.1 = self.min_xyz.1.min(particle.y());
        self.min_xyz.2 = self.min_xyz.2.min(particle.z());
        self.max_xyz.0 = self.max_xyz.0.max(particle.x());
        self.max_xyz.1 = self.max_xyz.1.max(particle.y());
        self.max_xyz.2 = self.max_xyz.2.max(particle.z());
        Ok(())
    }

    fn write_header(&self, histories_written: u64, particles_written: u64) -> Result<Vec<u8>> {
        use crate::reader::iaea::IaeaHeader;
        let mut header = IaeaHeader {
            iaea_index: self.options.iaea_index.clone(),
            title: self.options.title.clone(),
            byte_order: self.options.byte_order,
            record_length: self.record_length(),
            particles: particles_written,
            original_histories: histories_written,
            checksum: self.record_length() as u64 * particles_written,
            x_stored: !self.fixed_values.x_is_constant,
            y_stored: !self.fixed_values.y_is_constant,
            z_stored: !self.fixed_values.z_is_constant,
            u_stored: !self.fixed_values.px_is_constant,
            v_stored: !self.fixed_values.py_is_constant,
            weight_stored: !self.fixed_values.weight_is_constant,
            extra_floats: self.options.extra_floats.clone(),
            extra_ints: self.options.extra_ints.clone(),
            fixed_values: self.fixed_values,
            min_xyz: self.min_xyz,
            max_xyz: self.max_xyz,
            type_stats: self.type_stats.clone(),
            ..IaeaHeader::default()
        };
        header.particles = particles_written;
        fs::write(&self.header_path, header.render())?;
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::ByteBuffer;
    use crate::particle::Particle;

    #[test]
    fn encodes_photon_record_and_computes_checksum() {
        let mut codec = IaeaWriterCodec::new(
            PathBuf::from("/tmp/does-not-matter.IAEAheader"),
            IaeaWriterOptions::default(),
            FixedValues::default(),
        );
        let particle = Particle::new(ParticleType::Photon, 6.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, true, 1.0);
        let mut out = ByteBuffer::new(codec.record_length(), Endianness::Little);
        codec.encode_binary(&particle, &mut out).unwrap();
        assert_eq!(out.len(), codec.record_length());
    }

    #[test]
    fn constant_axis_is_elided_from_record_and_header() {
        let fixed_values = FixedValues {
            z_is_constant: true,
            constant_z: 100.0,
            ..FixedValues::default()
        };
        let mut codec = IaeaWriterCodec::new(
            PathBuf::from("/tmp/does-not-matter-2.IAEAheader"),
            IaeaWriterOptions::default(),
            fixed_values,
        );
        let particle = Particle::new(ParticleType::Photon, 6.0, 0.0, 0.0, 100.0, 0.0, 0.0, 1.0, true, 1.0);
        let mut out = ByteBuffer::new(codec.record_length(), Endianness::Little);
        codec.encode_binary(&particle, &mut out).unwrap();
        assert_eq!(out.len(), codec.record_length());
        // one fewer stored float than the fully-stored record above
        assert_eq!(codec.record_length(), 1 + 4 + 4 * 5 + 4);

        let header_bytes = codec.write_header(1, 1).unwrap();
        assert!(header_bytes.is_empty(), "IAEA writes its header to the sidecar file, not the data stream");
    }
}
