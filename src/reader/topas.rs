//! TOPAS phase-space codec: BINARY / ASCII / LIMITED subvariants sharing a
//! header+column schema (§4.6).

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::buffer::{ByteBuffer, Endianness};
use crate::error::{Error, Result};
use crate::particle::{FixedValues, IntPropertyType, Particle};
use crate::pdg::ParticleType;

use super::{Framing, ReaderCodec};

/// Which of the three TOPAS subvariants a header describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopasVariant {
    /// Binary subvariant: header starts with `TOPAS Binary Phase Space`.
    Binary,
    /// ASCII subvariant: header starts with `TOPAS ASCII Phase Space`.
    Ascii,
    /// 29-byte fixed-record subvariant: header starts with `$TITLE:`.
    Limited,
}

/// The closed TOPAS column catalog (subset actually emitted/consumed here;
/// the minimum 10 required columns plus the common optional ones).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// Position X, in cm.
    PositionX,
    /// Position Y, in cm.
    PositionY,
    /// Position Z, in cm.
    PositionZ,
    /// Direction cosine along X.
    DirectionCosineX,
    /// Direction cosine along Y.
    DirectionCosineY,
    /// Kinetic energy, in MeV.
    Energy,
    /// Statistical weight.
    Weight,
    /// Particle type as a PDG code.
    ParticleTypePdg,
    /// Whether the Z direction cosine is negative.
    ZCosineSignFlag,
    /// Whether this is the first scored particle of its history.
    NewHistoryFlag,
    /// Time of flight, in ns.
    TimeOfFlight,
    /// Originating simulation run ID.
    RunId,
    /// Originating simulation event ID.
    EventId,
    /// Originating simulation track ID.
    TrackId,
    /// Originating simulation parent-track ID.
    ParentId,
}

impl Column {
    /// The exact header text TOPAS uses for this column.
    pub fn header_name(self) -> &'static str {
        match self {
            Column::PositionX => "Position X [cm]",
            Column::PositionY => "Position Y [cm]",
            Column::PositionZ => "Position Z [cm]",
            Column::DirectionCosineX => "Direction Cosine X",
            Column::DirectionCosineY => "Direction Cosine Y",
            Column::Energy => "Energy [MeV]",
            Column::Weight => "Weight",
            Column::ParticleTypePdg => "Particle Type (in PDG Format)",
            Column::ZCosineSignFlag => "Flag to tell if Third Direction Cosine is Negative",
            Column::NewHistoryFlag => "Flag to tell if this is the First Scored Particle from this History",
            Column::TimeOfFlight => "Time of Flight [ns]",
            Column::RunId => "Run ID",
            Column::EventId => "Event ID",
            Column::TrackId => "Track ID",
            Column::ParentId => "Parent ID",
        }
    }

    /// This column's data-type tag in a BINARY header's column line (`i`/`f`/`b`).
    pub fn type_code(self) -> char {
        match self {
            Column::PositionX
            | Column::PositionY
            | Column::PositionZ
            | Column::DirectionCosineX
            | Column::DirectionCosineY
            | Column::Energy
            | Column::Weight
            | Column::TimeOfFlight => 'f',
            Column::ParticleTypePdg | Column::RunId | Column::EventId | Column::TrackId | Column::ParentId => 'i',
            Column::ZCosineSignFlag | Column::NewHistoryFlag => 'b',
        }
    }

    /// The minimum column set every writer must include (§4.6).
    pub fn required() -> [Column; 10] {
        [
            Column::PositionX,
            Column::PositionY,
            Column::PositionZ,
            Column::DirectionCosineX,
            Column::DirectionCosineY,
            Column::Energy,
            Column::Weight,
            Column::ParticleTypePdg,
            Column::ZCosineSignFlag,
            Column::NewHistoryFlag,
        ]
    }
}

/// Parsed/accumulated TOPAS header.
#[derive(Debug, Clone)]
pub struct TopasHeader {
    /// Which subvariant this header describes.
    pub variant: TopasVariant,
    /// `Number of Original Histories`.
    pub original_histories: u64,
    /// `Number of Original Histories that Reached Phase Space`.
    pub original_histories_reaching_phsp: u64,
    /// `Number of Scored Particles`.
    pub scored_particles: u64,
    /// Declared column schema, in on-disk order.
    pub columns: Vec<Column>,
    /// Per-type particle counts (`Number of <Geant4Name>`).
    pub per_type_counts: HashMap<ParticleType, u64>,
    /// Per-type minimum energy, in MeV.
    pub per_type_min_energy: HashMap<ParticleType, f32>,
    /// Per-type maximum energy, in MeV.
    pub per_type_max_energy: HashMap<ParticleType, f32>,
}

impl TopasHeader {
    /// Creates a header with the minimum required column set and zeroed counters.
    pub fn new(variant: TopasVariant) -> Self {
        TopasHeader {
            variant,
            original_histories: 0,
            original_histories_reaching_phsp: 0,
            scored_particles: 0,
            columns: Column::required().to_vec(),
            per_type_counts: HashMap::new(),
            per_type_min_energy: HashMap::new(),
            per_type_max_energy: HashMap::new(),
        }
    }

    /// Reads and parses a `.header` file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<TopasHeader> {
        let text = fs::read_to_string(path)?;
        TopasHeader::parse(&text)
    }

    /// Parses a `.header` file's text, dispatching on its first non-empty line.
    pub fn parse(text: &str) -> Result<TopasHeader> {
        let mut lines = text.lines().filter(|l| !l.trim().is_empty());
        let first = lines.next().unwrap_or_default().trim();
        let variant = if first.starts_with("$TITLE:") {
            TopasVariant::Limited
        } else if first.starts_with("TOPAS ASCII Phase Space") {
            TopasVariant::Ascii
        } else if first.starts_with("TOPAS Binary Phase Space") {
            TopasVariant::Binary
        } else {
            return Err(Error::InvalidFormat(format!("unrecognized TOPAS header first line {first:?}")));
        };

        let mut header = TopasHeader::new(variant);
        if variant == TopasVariant::Limited {
            return Ok(header);
        }
        header.columns.clear();

        for line in lines {
            let line = line.trim();
            if let Some(rest) = line.strip_prefix("Number of Original Histories:") {
                header.original_histories = rest.trim().parse().unwrap_or(0);
            } else if let Some(rest) = line.strip_prefix("Number of Original Histories that Reached Phase Space:") {
                header.original_histories_reaching_phsp = rest.trim().parse().unwrap_or(0);
            } else if let Some(rest) = line.strip_prefix("Number of Scored Particles:") {
                header.scored_particles = rest.trim().parse().unwrap_or(0);
            } else if let Some(rest) = line.strip_prefix("Number of ") {
                if let Some((name, count)) = rest.rsplit_once(": ") {
                    if let Ok(count) = count.trim().parse::<u64>() {
                        let ptype = ParticleType::from_geant4_name(name.trim());
                        header.per_type_counts.insert(ptype, count);
                    }
                }
            } else if variant == TopasVariant::Binary && line.len() > 2 && line.as_bytes()[1] == b':' {
                if let Some(column) = column_from_header_name(&line[3..]) {
                    header.columns.push(column);
                }
            } else if variant == TopasVariant::Ascii {
                if let Some((_, name)) = line.split_once(": ") {
                    if let Some(column) = column_from_header_name(name) {
                        header.columns.push(column);
                    }
                }
            }
        }
        if header.columns.is_empty() {
            header.columns = Column::required().to_vec();
        }
        Ok(header)
    }
}

fn column_from_header_name(name: &str) -> Option<Column> {
    let catalog = [
        Column::PositionX,
        Column::PositionY,
        Column::PositionZ,
        Column::DirectionCosineX,
        Column::DirectionCosineY,
        Column::Energy,
        Column::Weight,
        Column::ParticleTypePdg,
        Column::ZCosineSignFlag,
        Column::NewHistoryFlag,
        Column::TimeOfFlight,
        Column::RunId,
        Column::EventId,
        Column::TrackId,
        Column::ParentId,
    ];
    catalog.into_iter().find(|c| c.header_name() == name)
}

/// Reader-side TOPAS codec.
#[derive(Debug)]
pub struct TopasReaderCodec {
    header: TopasHeader,
    pending_incremental_histories: u32,
}

impl TopasReaderCodec {
    /// Wraps an already-parsed header.
    pub fn new(header: TopasHeader) -> Self {
        TopasReaderCodec {
            header,
            pending_incremental_histories: 0,
        }
    }

    /// The parsed header.
    pub fn header(&self) -> &TopasHeader {
        &self.header
    }

    fn apply_pending(&mut self, particle: &mut Particle) -> Result<()> {
        if self.pending_incremental_histories > 0 {
            let total = self.pending_incremental_histories + 1;
            particle.set_incremental_histories(total)?;
            self.pending_incremental_histories = 0;
        }
        Ok(())
    }
}

impl ReaderCodec for TopasReaderCodec {
    fn format_name(&self) -> &'static str {
        "TOPAS"
    }

    fn framing(&self) -> Framing {
        match self.header.variant {
            TopasVariant::Ascii => Framing::Ascii,
            TopasVariant::Binary | TopasVariant::Limited => Framing::Binary,
        }
    }

    fn record_start_offset(&self) -> u64 {
        0
    }

    fn record_length(&self) -> usize {
        match self.header.variant {
            TopasVariant::Limited => 29,
            TopasVariant::Binary => self.header.columns.iter().map(|c| column_width(*c)).sum(),
            TopasVariant::Ascii => 0,
        }
    }

    fn total_particles(&self) -> u64 {
        self.header.scored_particles
    }

    fn total_original_histories(&self) -> u64 {
        self.header.original_histories
    }

    fn fixed_values(&self) -> FixedValues {
        FixedValues::default()
    }

    fn decode_binary(&mut self, record: &[u8]) -> Result<Option<Particle>> {
        if self.header.variant == TopasVariant::Limited {
            return self.decode_limited(record);
        }
        let mut buffer = ByteBuffer::from_bytes(record, Endianness::Little);
        let mut x = 0.0f32;
        let mut y = 0.0f32;
        let mut z = 0.0f32;
        let mut u = 0.0f32;
        let mut v = 0.0f32;
        let mut energy = 0.0f32;
        let mut weight = 1.0f32;
        let mut pdg = 0i32;
        let mut z_negative = false;
        let mut new_history = false;
        for column in self.header.columns.clone() {
            match column {
                Column::PositionX => x = buffer.read()?,
                Column::PositionY => y = buffer.read()?,
                Column::PositionZ => z = buffer.read()?,
                Column::DirectionCosineX => u = buffer.read()?,
                Column::DirectionCosineY => v = buffer.read()?,
                Column::Energy => energy = buffer.read()?,
                Column::Weight => weight = buffer.read()?,
                Column::ParticleTypePdg => pdg = buffer.read()?,
                Column::ZCosineSignFlag => z_negative = buffer.read::<u8>()? != 0,
                Column::NewHistoryFlag => new_history = buffer.read::<u8>()? != 0,
                Column::TimeOfFlight => {
                    let _: f32 = buffer.read()?;
                }
                Column::RunId | Column::EventId | Column::TrackId | Column::ParentId => {
                    let _: i32 = buffer.read()?;
                }
            }
        }

        if pdg == 0 {
            if weight >= 0.0 {
                return Err(Error::InvalidFormat(
                    "TOPAS pseudo-particle record must carry a negative weight".to_string(),
                ));
            }
            let k = (-weight).round() as u32;
            self.pending_incremental_histories += k;
            return Ok(None);
        }

        let w_sign = if z_negative { -1.0f32 } else { 1.0f32 };
        let w = w_sign * crate::particle::calc_third_unit_component(&mut u, &mut v);
        let mut particle = Particle::new(
            ParticleType::from_pdg_code(pdg),
            energy,
            x,
            y,
            z,
            u,
            v,
            w,
            new_history,
            weight,
        );
        if new_history {
            self.apply_pending(&mut particle)?;
        }
        Ok(Some(particle))
    }

    fn decode_ascii(&mut self, line: &str) -> Result<Option<Particle>> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let mut values: HashMap<Column, &str> = HashMap::new();
        for (column, token) in self.header.columns.iter().zip(tokens.iter()) {
            values.insert(*column, token);
        }
        let parse_f = |c: Column| -> f32 { values.get(&c).and_then(|s| s.parse().ok()).unwrap_or(0.0) };
        let pdg: i32 = values.get(&Column::ParticleTypePdg).and_then(|s| s.parse().ok()).unwrap_or(0);
        let weight = parse_f(Column::Weight);

        if pdg == 0 {
            if weight >= 0.0 {
                return Err(Error::InvalidFormat(
                    "TOPAS pseudo-particle record must carry a negative weight".to_string(),
                ));
            }
            let k = (-weight).round() as u32;
            self.pending_incremental_histories += k;
            return Ok(None);
        }

        let mut u = parse_f(Column::DirectionCosineX);
        let mut v = parse_f(Column::DirectionCosineY);
        let z_negative = values.get(&Column::ZCosineSignFlag).map(|s| *s != "0").unwrap_or(false);
        let w_sign = if z_negative { -1.0f32 } else { 1.0f32 };
        let w = w_sign * crate::particle::calc_third_unit_component(&mut u, &mut v);
        let new_history = values.get(&Column::NewHistoryFlag).map(|s| *s != "0").unwrap_or(false);

        let mut particle = Particle::new(
            ParticleType::from_pdg_code(pdg),
            parse_f(Column::Energy),
            parse_f(Column::PositionX),
            parse_f(Column::PositionY),
            parse_f(Column::PositionZ),
            u,
            v,
            w,
            new_history,
            weight,
        );
        if new_history {
            self.apply_pending(&mut particle)?;
        }
        Ok(Some(particle))
    }
}

impl TopasReaderCodec {
    fn decode_limited(&mut self, record: &[u8]) -> Result<Option<Particle>> {
        let mut buffer = ByteBuffer::from_bytes(record, Endianness::Little);
        let type_code: i8 = buffer.read()?;
        let magnitude = type_code.unsigned_abs() as i8;
        let particle_type = ParticleType::from_iaea_magnitude(magnitude);
        let w_sign = if type_code < 0 { -1.0f32 } else { 1.0f32 };
        let raw_energy: f32 = buffer.read()?;
        let new_history = raw_energy < 0.0;
        let kinetic_energy = raw_energy.abs();
        let x = buffer.read()?;
        let y = buffer.read()?;
        let z = buffer.read()?;
        let mut u = buffer.read()?;
        let mut v = buffer.read()?;
        let w = w_sign * crate::particle::calc_third_unit_component(&mut u, &mut v);
        let weight = buffer.read()?;
        let mut particle = Particle::new(particle_type, kinetic_energy, x, y, z, u, v, w, new_history, weight);
        if new_history {
            self.apply_pending(&mut particle)?;
        }
        Ok(Some(particle))
    }
}

fn column_width(column: Column) -> usize {
    match column.type_code() {
        'b' => 1,
        'i' => 4,
        'f' => 4,
        _ => 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pseudo_particle_folds_into_next_real_particle() {
        let header = TopasHeader::new(TopasVariant::Binary);
        let mut codec = TopasReaderCodec::new(header);

        let mut pseudo = ByteBuffer::new(30, Endianness::Little);
        pseudo.write(0.0f32).unwrap(); // x
        pseudo.write(0.0f32).unwrap(); // y
        pseudo.write(0.0f32).unwrap(); // u
        pseudo.write(0.0f32).unwrap(); // v
        pseudo.write(0.0f32).unwrap(); // energy
        pseudo.write(-4.0f32).unwrap(); // weight = -k
        pseudo.write(0i32).unwrap(); // pdg = 0
        pseudo.write(0u8).unwrap(); // z sign
        pseudo.write(1u8).unwrap(); // new history
        assert!(codec.decode_binary(pseudo.data()).unwrap().is_none());

        let mut real = ByteBuffer::new(30, Endianness::Little);
        real.write(0.0f32).unwrap();
        real.write(0.0f32).unwrap();
        real.write(0.0f32).unwrap();
        real.write(0.0f32).unwrap();
        real.write(1.0f32).unwrap();
        real.write(1.0f32).unwrap();
        real.write(22i32).unwrap();
        real.write(0u8).unwrap();
        real.write(1u8).unwrap();
        let particle = codec.decode_binary(real.data()).unwrap().unwrap();
        assert_eq!(particle.incremental_histories(), 5);
    }
}
