//! penEasy ASCII phase-space codec: fixed 112-byte header, one record per
//! line, whole-file prescan for counts (§4.7).

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};
use crate::particle::{BoolPropertyType, FixedValues, IntPropertyType, Particle};
use crate::pdg::{EV_TO_MEV, ParticleType};

use super::{Framing, ReaderCodec};

/// The fixed two-line penEasy header, always exactly this text.
pub const HEADER_TEXT: &str =
    "# [PHASE SPACE FILE FORMAT penEasy v.2008-05-15]\n# KPAR : E : X : Y : Z : U : V : W : WGHT : DeltaN : ILB(1..5)\n";

/// Counts a whole ASCII file's data lines by counting newlines minus the two
/// header lines (§4.7). Per the §9 open question, files that don't end in a
/// newline are rejected rather than silently mis-counted.
pub fn count_lines<R: Read>(mut reader: R) -> Result<u64> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    if buf.is_empty() {
        return Err(Error::InvalidFormat("penEasy file is empty".to_string()));
    }
    if *buf.last().unwrap() != b'\n' {
        return Err(Error::InvalidFormat(
            "penEasy file must end in a newline".to_string(),
        ));
    }
    let newlines = buf.iter().filter(|&&b| b == b'\n').count() as u64;
    Ok(newlines.saturating_sub(2))
}

/// Parsed penEasy state: just the particle count from the prescan, since the
/// format carries no explicit original-histories total (accumulated instead
/// from `DeltaN` across all records).
#[derive(Debug, Clone, Copy)]
pub struct PenEasyHeader {
    /// Particle record count from the whole-file newline prescan.
    pub particle_count: u64,
    /// Original-history count, accumulated from `DeltaN` across all records.
    pub original_histories: u64,
}

impl PenEasyHeader {
    /// Prescans `path`, counting data lines and summing `DeltaN` for the
    /// declared original-histories total.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<PenEasyHeader> {
        let file = File::open(&path)?;
        let particle_count = count_lines(File::open(&path)?)?;
        let reader = BufReader::new(file);
        let mut original_histories = 0u64;
        for line in reader.lines().skip(2) {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if let Some(tok) = trimmed.split_whitespace().nth(9) {
                original_histories += tok.parse::<u64>().unwrap_or(0);
            }
        }
        Ok(PenEasyHeader {
            particle_count,
            original_histories,
        })
    }
}

/// Reader-side penEasy codec.
#[derive(Debug)]
pub struct PenEasyReaderCodec {
    header: PenEasyHeader,
}

impl PenEasyReaderCodec {
    /// Wraps an already-parsed header.
    pub fn new(header: PenEasyHeader) -> Self {
        PenEasyReaderCodec { header }
    }

    /// The parsed header.
    pub fn header(&self) -> &PenEasyHeader {
        &self.header
    }
}

impl ReaderCodec for PenEasyReaderCodec {
    fn format_name(&self) -> &'static str {
        "penEasy"
    }

    fn framing(&self) -> Framing {
        Framing::Ascii
    }

    fn comment_markers(&self) -> &[&str] {
        &["#"]
    }

    fn total_particles(&self) -> u64 {
        self.header.particle_count
    }

    fn total_original_histories(&self) -> u64 {
        self.header.original_histories
    }

    fn fixed_values(&self) -> FixedValues {
        FixedValues::default()
    }

    fn decode_ascii(&mut self, line: &str) -> Result<Option<Particle>> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 15 {
            return Err(Error::InvalidFormat(format!(
                "penEasy record has {} fields, expected 15",
                tokens.len()
            )));
        }
        let parse = |i: usize| -> Result<f32> {
            tokens[i]
                .parse()
                .map_err(|_| Error::InvalidFormat(format!("could not parse penEasy field {i}: {:?}", tokens[i])))
        };
        let kpar: i32 = tokens[0]
            .parse()
            .map_err(|_| Error::InvalidFormat("invalid KPAR".to_string()))?;
        let particle_type = ParticleType::from_penelope_kpar(kpar);
        let energy_ev = parse(1)?;
        let x = parse(2)?;
        let y = parse(3)?;
        let z = parse(4)?;
        let u = parse(5)?;
        let v = parse(6)?;
        let w = parse(7)?;
        let weight = parse(8)?;
        let delta_n: i64 = tokens[9]
            .parse()
            .map_err(|_| Error::InvalidFormat("invalid DeltaN".to_string()))?;
        let ilb: Vec<i32> = (10..15)
            .map(|i| tokens[i].parse().unwrap_or(0))
            .collect();

        let new_history = delta_n > 0;
        let mut particle = Particle::new(
            particle_type,
            energy_ev * EV_TO_MEV,
            x,
            y,
            z,
            u,
            v,
            w,
            new_history,
            weight,
        );
        if ilb[0] < 1 {
            return Err(Error::InvalidProperty {
                name: "PENELOPE_ILB1",
                detail: format!("must be >= 1, got {}", ilb[0]),
            });
        }
        if new_history {
            particle.set_incremental_histories(delta_n as u32)?;
        }
        particle.set_int_property(IntPropertyType::PenelopeIlb1, ilb[0]);
        particle.set_int_property(IntPropertyType::PenelopeIlb2, ilb[1]);
        particle.set_int_property(IntPropertyType::PenelopeIlb3, ilb[2]);
        particle.set_int_property(IntPropertyType::PenelopeIlb4, ilb[3]);
        particle.set_int_property(IntPropertyType::PenelopeIlb5, ilb[4]);
        particle.set_bool_property(BoolPropertyType::IsSecondaryParticle, ilb[0] > 1);
        Ok(Some(particle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn counts_lines_minus_header() {
        let text = format!("{HEADER_TEXT}1 1.0 0 0 0 0 0 1 1.0 1 1 0 0 0 0\n");
        let n = count_lines(Cursor::new(text.into_bytes())).unwrap();
        assert_eq!(n, 1);
    }

    #[test]
    fn rejects_file_without_trailing_newline() {
        let text = "no newline at all";
        assert!(count_lines(Cursor::new(text.as_bytes().to_vec())).is_err());
    }

    #[test]
    fn decodes_photon_record() {
        let header = PenEasyHeader {
            particle_count: 1,
            original_histories: 1,
        };
        let mut codec = PenEasyReaderCodec::new(header);
        let particle = codec
            .decode_ascii("2 6.0e6 0 0 0 0 0 1 1.0 1 1 0 0 0 0")
            .unwrap()
            .unwrap();
        assert_eq!(particle.particle_type(), ParticleType::Photon);
        assert!((particle.kinetic_energy() - 6.0).abs() < 1e-3);
    }

    #[test]
    fn rejects_ilb1_below_one() {
        let header = PenEasyHeader {
            particle_count: 1,
            original_histories: 1,
        };
        let mut codec = PenEasyReaderCodec::new(header);
        assert!(codec.decode_ascii("2 6.0e6 0 0 0 0 0 1 1.0 1 0 0 0 0 0").is_err());
    }
}
