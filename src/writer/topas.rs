//! Writer side of the TOPAS codec: BINARY/ASCII/LIMITED, explicit pseudo-particle
//! empty-history records (§4.6).

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::buffer::{ByteBuffer, Endianness};
use crate::error::Result;
use crate::particle::Particle;
use crate::pdg::ParticleType;
use crate::reader::topas::{Column, TopasVariant};

use super::{Axis, Framing, WriterCodec};

/// Writer-side TOPAS codec: accumulates header counters as records are written.
#[derive(Debug)]
pub struct TopasWriterCodec {
    variant: TopasVariant,
    header_path: PathBuf,
    columns: Vec<Column>,
    original_histories: u64,
    per_type_counts: HashMap<ParticleType, u64>,
    per_type_min_energy: HashMap<ParticleType, f32>,
    per_type_max_energy: HashMap<ParticleType, f32>,
}

impl TopasWriterCodec {
    /// Creates a codec for `variant` with the minimum required column set
    /// (non-LIMITED variants only; LIMITED has a fixed schema, no columns block).
    pub fn new(variant: TopasVariant, header_path: PathBuf) -> Self {
        let columns = if variant == TopasVariant::Limited {
            Vec::new()
        } else {
            Column::required().to_vec()
        };
        TopasWriterCodec {
            variant,
            header_path,
            columns,
            original_histories: 0,
            per_type_counts: HashMap::new(),
            per_type_min_energy: HashMap::new(),
            per_type_max_energy: HashMap::new(),
        }
    }

    /// Overrides the column schema (non-LIMITED variants only; ignored for LIMITED).
    pub fn with_columns(mut self, columns: Vec<Column>) -> Self {
        if self.variant != TopasVariant::Limited {
            self.columns = columns;
        }
        self
    }

    /// Declares the known original-histories total up front (combine/split
    /// pipelines carry this forward explicitly rather than inferring it).
    pub fn set_original_histories(&mut self, value: u64) {
        self.original_histories = value;
    }

    fn record_length(&self) -> usize {
        match self.variant {
            TopasVariant::Limited => 29,
            TopasVariant::Binary => self.columns.iter().map(|c| column_width(*c)).sum(),
            TopasVariant::Ascii => 0,
        }
    }
}

fn column_width(column: Column) -> usize {
    match column.type_code() {
        'b' => 1,
        _ => 4,
    }
}

impl WriterCodec for TopasWriterCodec {
    fn format_name(&self) -> &'static str {
        "TOPAS"
    }

    fn framing(&self) -> Framing {
        match self.variant {
            TopasVariant::Ascii => Framing::Ascii,
            TopasVariant::Binary | TopasVariant::Limited => Framing::Binary,
        }
    }

    fn record_length(&self) -> usize {
        self.record_length()
    }

    fn supports_explicit_pseudo_particles(&self) -> bool {
        true
    }

    fn encode_binary(&mut self, particle: &Particle, out: &mut ByteBuffer) -> Result<()> {
        if self.variant == TopasVariant::Limited {
            return self.encode_limited(particle, out);
        }
        for column in self.columns.clone() {
            match column {
                Column::PositionX => out.write(particle.x())?,
                Column::PositionY => out.write(particle.y())?,
                Column::PositionZ => out.write(particle.z())?,
                Column::DirectionCosineX => out.write(particle.px())?,
                Column::DirectionCosineY => out.write(particle.py())?,
                Column::Energy => out.write(particle.kinetic_energy())?,
                Column::Weight => out.write(particle.weight())?,
                Column::ParticleTypePdg => {
                    let pdg = particle.particle_type().pdg_code().unwrap_or(0);
                    out.write(pdg)?;
                }
                Column::ZCosineSignFlag => out.write((particle.pz() < 0.0) as u8)?,
                Column::NewHistoryFlag => out.write(particle.is_new_history() as u8)?,
                Column::TimeOfFlight => out.write(0.0f32)?,
                Column::RunId | Column::EventId | Column::TrackId | Column::ParentId => out.write(0i32)?,
            }
        }
        self.record_stats(particle);
        Ok(())
    }

    fn encode_ascii(&mut self, particle: &Particle) -> Result<String> {
        let mut tokens = Vec::new();
        for column in self.columns.clone() {
            let token = match column {
                Column::PositionX => particle.x().to_string(),
                Column::PositionY => particle.y().to_string(),
                Column::PositionZ => particle.z().to_string(),
                Column::DirectionCosineX => particle.px().to_string(),
                Column::DirectionCosineY => particle.py().to_string(),
                Column::Energy => particle.kinetic_energy().to_string(),
                Column::Weight => particle.weight().to_string(),
                Column::ParticleTypePdg => particle.particle_type().pdg_code().unwrap_or(0).to_string(),
                Column::ZCosineSignFlag => ((particle.pz() < 0.0) as u8).to_string(),
                Column::NewHistoryFlag => (particle.is_new_history() as u8).to_string(),
                Column::TimeOfFlight => "0".to_string(),
                Column::RunId | Column::EventId | Column::TrackId | Column::ParentId => "0".to_string(),
            };
            tokens.push(token);
        }
        self.record_stats(particle);
        Ok(tokens.join(" "))
    }

    fn encode_pseudo_particle(&mut self, k: u32, out: &mut ByteBuffer) -> Result<()> {
        if self.variant != TopasVariant::Binary {
            return Err(crate::error::Error::InvalidFormat(
                "pseudo-particles are only supported for TOPAS BINARY here".to_string(),
            ));
        }
        for column in self.columns.clone() {
            match column {
                Column::PositionX
                | Column::PositionY
                | Column::PositionZ
                | Column::DirectionCosineX
                | Column::DirectionCosineY
                | Column::Energy
                | Column::TimeOfFlight => out.write(0.0f32)?,
                Column::Weight => out.write(-(k as f32))?,
                Column::ParticleTypePdg => out.write(0i32)?,
                Column::ZCosineSignFlag => out.write(0u8)?,
                Column::NewHistoryFlag => out.write(1u8)?,
                Column::RunId | Column::EventId | Column::TrackId | Column::ParentId => out.write(0i32)?,
            }
        }
        Ok(())
    }

    fn encode_pseudo_particle_ascii(&mut self, k: u32) -> Result<String> {
        let mut tokens = Vec::new();
        for column in self.columns.clone() {
            let token = match column {
                Column::PositionX
                | Column::PositionY
                | Column::PositionZ
                | Column::DirectionCosineX
                | Column::DirectionCosineY
                | Column::Energy
                | Column::TimeOfFlight => "0".to_string(),
                Column::Weight => (-(k as f32)).to_string(),
                Column::ParticleTypePdg => "0".to_string(),
                Column::ZCosineSignFlag => "0".to_string(),
                Column::NewHistoryFlag => "1".to_string(),
                Column::RunId | Column::EventId | Column::TrackId | Column::ParentId => "0".to_string(),
            };
            tokens.push(token);
        }
        Ok(tokens.join(" "))
    }

    fn write_header(&self, histories_written: u64, particles_written: u64) -> Result<Vec<u8>> {
        let mut text = String::new();
        match self.variant {
            TopasVariant::Binary => text.push_str("TOPAS Binary Phase Space\n"),
            TopasVariant::Ascii => text.push_str("TOPAS ASCII Phase Space\n"),
            TopasVariant::Limited => {
                text.push_str("$TITLE:\n    phase space\n");
                fs::write(&self.header_path, text)?;
                return Ok(Vec::new());
            }
        }
        text.push_str(&format!(
            "Number of Original Histories: {}\n",
            self.original_histories.max(histories_written)
        ));
        text.push_str(&format!(
            "Number of Original Histories that Reached Phase Space: {histories_written}\n"
        ));
        text.push_str(&format!("Number of Scored Particles: {particles_written}\n"));
        for (i, column) in self.columns.iter().enumerate() {
            match self.variant {
                TopasVariant::Binary => {
                    text.push_str(&format!("{}{}: {}\n", column.type_code(), column_width(*column), column.header_name()));
                }
                TopasVariant::Ascii => {
                    text.push_str(&format!("{}: {}\n", i + 1, column.header_name()));
                }
                TopasVariant::Limited => unreachable!(),
            }
        }
        for (ptype, count) in &self.per_type_counts {
            text.push_str(&format!("Number of {}: {}\n", ptype.geant4_name(), count));
        }
        for (ptype, energy) in &self.per_type_min_energy {
            text.push_str(&format!("Minimum Energy of {} [MeV]: {}\n", ptype.geant4_name(), energy));
        }
        for (ptype, energy) in &self.per_type_max_energy {
            text.push_str(&format!("Maximum Energy of {} [MeV]: {}\n", ptype.geant4_name(), energy));
        }
        fs::write(&self.header_path, text)?;
        Ok(Vec::new())
    }
}

impl TopasWriterCodec {
    fn encode_limited(&mut self, particle: &Particle, out: &mut ByteBuffer) -> Result<()> {
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
        out.write(particle.x())?;
        out.write(particle.y())?;
        out.write(particle.z())?;
        out.write(particle.px())?;
        out.write(particle.py())?;
        out.write(particle.weight())?;
        self.record_stats(particle);
        Ok(())
    }

    fn record_stats(&mut self, particle: &Particle) {
        let ptype = particle.particle_type();
        *self.per_type_counts.entry(ptype).or_insert(0) += 1;
        let min = self.per_type_min_energy.entry(ptype).or_insert(f32::MAX);
        *min = min.min(particle.kinetic_energy());
        let max = self.per_type_max_energy.entry(ptype).or_insert(f32::MIN);
        *max = max.max(particle.kinetic_energy());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pseudo_particle_roundtrips_through_reader() {
        use crate::reader::topas::{TopasHeader, TopasReaderCodec};
        use crate::reader::ReaderCodec;

        let mut writer_codec = TopasWriterCodec::new(TopasVariant::Binary, "/tmp/does-not-matter.header".into());
        let mut buf = ByteBuffer::new(writer_codec.record_length(), Endianness::Little);
        writer_codec.encode_pseudo_particle(3, &mut buf).unwrap();

        let header = TopasHeader::new(TopasVariant::Binary);
        let mut reader_codec = TopasReaderCodec::new(header);
        assert!(reader_codec.decode_binary(buf.data()).unwrap().is_none());
    }
}
