//! Shared plumbing for the combine/convert/split/image command-line drivers (§6, §7).
//!
//! The drivers themselves stay thin: argument parsing lives in each `src/bin`
//! entry point (via `clap`), and everything format-agnostic — resolving a
//! reader/writer by name or extension, filtering and projecting particles,
//! and collecting warnings/errors for a single end-of-run report — lives here
//! so the four binaries don't each reinvent it.

use std::path::Path;

use crate::error::Result;
use crate::particle::Particle;
use crate::pdg::ParticleType;
use crate::registry::{FormatRegistry, ParticleSink, ParticleSource, ReaderOptions, WriterOptions};
use crate::FixedValues;

/// Resolves a reader either by an explicit format name (`--inputFormat`) or,
/// when `None`, by `path`'s extension.
pub fn open_reader(
    registry: &FormatRegistry,
    path: &Path,
    format_name: Option<&str>,
    options: &ReaderOptions,
) -> Result<Box<dyn ParticleSource>> {
    match format_name {
        Some(name) => registry.create_reader_named(name, path, options),
        None => registry.create_reader(path, options),
    }
}

/// Resolves a writer either by an explicit format name (`--outputFormat`) or,
/// when `None`, by `path`'s extension.
pub fn open_writer(
    registry: &FormatRegistry,
    path: &Path,
    format_name: Option<&str>,
    options: &WriterOptions,
    fixed_values: FixedValues,
) -> Result<Box<dyn ParticleSink>> {
    match format_name {
        Some(name) => registry.create_writer_named(name, path, options, fixed_values),
        None => registry.create_writer(path, options, fixed_values),
    }
}

/// Prints the registry's `SupportedFormat` catalog to stdout, for `--formats`.
pub fn print_supported_formats(registry: &FormatRegistry) {
    println!("{:<10} {:<10} {}", "NAME", "EXTENSION", "DESCRIPTION");
    for format in registry.supported_formats() {
        println!("{:<10} {:<10} {}", format.name, format.extension, format.description);
    }
}

/// The particle-type/energy filters `convert` exposes (`--photonsOnly`,
/// `--electronsOnly`, `--filterByPDG`, `--minEnergy`, `--maxEnergy`).
#[derive(Debug, Clone, Default)]
pub struct Filters {
    /// Keep only [`ParticleType::Photon`].
    pub photons_only: bool,
    /// Keep only [`ParticleType::Electron`].
    pub electrons_only: bool,
    /// Keep only particles whose PDG code matches exactly.
    pub pdg: Option<i32>,
    /// Drop particles below this kinetic energy, in MeV.
    pub min_energy: Option<f32>,
    /// Drop particles above this kinetic energy, in MeV.
    pub max_energy: Option<f32>,
}

impl Filters {
    /// True when `particle` passes every configured filter.
    pub fn accepts(&self, particle: &Particle) -> bool {
        if self.photons_only && particle.particle_type() != ParticleType::Photon {
            return false;
        }
        if self.electrons_only && particle.particle_type() != ParticleType::Electron {
            return false;
        }
        if let Some(pdg) = self.pdg {
            if particle.particle_type().pdg_code() != Some(pdg) {
                return false;
            }
        }
        if let Some(min) = self.min_energy {
            if particle.kinetic_energy() < min {
                return false;
            }
        }
        if let Some(max) = self.max_energy {
            if particle.kinetic_energy() > max {
                return false;
            }
        }
        true
    }
}

/// `convert`'s `--projectToX|Y|Z` plane, carrying the target coordinate in cm.
#[derive(Debug, Clone, Copy)]
pub enum Projection {
    /// Advance the particle to the plane `X = value`.
    X(f32),
    /// Advance the particle to the plane `Y = value`.
    Y(f32),
    /// Advance the particle to the plane `Z = value`.
    Z(f32),
}

impl Projection {
    /// Advances `particle` to this plane in place. Returns `false` when the
    /// particle's trajectory never reaches it (§4.2 of the particle model).
    pub fn apply(self, particle: &mut Particle) -> bool {
        match self {
            Projection::X(value) => particle.project_to_x(value),
            Projection::Y(value) => particle.project_to_y(value),
            Projection::Z(value) => particle.project_to_z(value),
        }
    }
}

/// Accumulates warnings and fatal errors for a single driver invocation so
/// they can be reported together at exit, per §7's propagation policy.
#[derive(Debug, Default)]
pub struct Diagnostics {
    /// Non-fatal conditions observed (count mismatches, promoted histories, ...).
    pub warnings: Vec<String>,
    /// Fatal conditions that caused the run to stop early.
    pub errors: Vec<String>,
}

impl Diagnostics {
    /// Records a warning.
    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("{message}");
        self.warnings.push(message);
    }

    /// Records a fatal error.
    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::error!("{message}");
        self.errors.push(message);
    }

    /// Prints every collected warning and error to stderr.
    pub fn report(&self) {
        for warning in &self.warnings {
            eprintln!("warning: {warning}");
        }
        for error in &self.errors {
            eprintln!("error: {error}");
        }
    }

    /// The process exit code: 1 if any error was recorded, or if `error_on_warning`
    /// is set and any warning was recorded; 0 otherwise.
    pub fn exit_code(&self, error_on_warning: bool) -> i32 {
        if !self.errors.is_empty() {
            return 1;
        }
        if error_on_warning && !self.warnings.is_empty() {
            return 1;
        }
        0
    }
}

/// Carries forward the difference between a reader's declared original-history
/// total and what was actually read as pending histories on `sink`, per the
/// §4.9 accounting rule ("a partial file with trailing empty histories").
pub fn carry_trailing_histories(source: &dyn ParticleSource, sink: &mut dyn ParticleSink, diagnostics: &mut Diagnostics) {
    let declared = source.total_original_histories();
    let read = source.histories_read();
    if declared > read {
        let pending = declared - read;
        diagnostics.warn(format!(
            "{}: {pending} declared original histories produced no recorded particle; carried forward as pending",
            source.format_name()
        ));
        sink.add_additional_histories(pending);
    } else if read > declared && declared != 0 {
        diagnostics.warn(format!(
            "{}: read {read} original histories but header declared only {declared}",
            source.format_name()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdg::ParticleType;

    fn photon(energy: f32) -> Particle {
        Particle::new(ParticleType::Photon, energy, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, true, 1.0)
    }

    #[test]
    fn photons_only_rejects_electrons() {
        let filters = Filters {
            photons_only: true,
            ..Filters::default()
        };
        let electron = Particle::new(ParticleType::Electron, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, true, 1.0);
        assert!(!filters.accepts(&electron));
        assert!(filters.accepts(&photon(1.0)));
    }

    #[test]
    fn energy_window_filters_both_ends() {
        let filters = Filters {
            min_energy: Some(1.0),
            max_energy: Some(5.0),
            ..Filters::default()
        };
        assert!(!filters.accepts(&photon(0.5)));
        assert!(filters.accepts(&photon(2.0)));
        assert!(!filters.accepts(&photon(6.0)));
    }

    #[test]
    fn diagnostics_exit_code_respects_error_on_warning() {
        let mut diagnostics = Diagnostics::default();
        diagnostics.warn("just a warning");
        assert_eq!(diagnostics.exit_code(false), 0);
        assert_eq!(diagnostics.exit_code(true), 1);
        diagnostics.error("now fatal");
        assert_eq!(diagnostics.exit_code(false), 1);
    }
}
