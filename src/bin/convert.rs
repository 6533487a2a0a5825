//! `phsp-convert`: converts one phase-space file to another format, optionally
//! filtering particles, projecting to a plane, and mirroring direction cosines (§6).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use phsp::cli::{carry_trailing_histories, Diagnostics, Filters, Projection};
use phsp::registry::{FormatRegistry, ReaderOptions, WriterOptions};

/// Convert a phase-space file between formats, with optional filtering and projection.
#[derive(Debug, Parser)]
#[clap(name = "phsp-convert", about = "Convert a phase-space file between formats")]
struct Args {
    /// Input phase-space file.
    input: PathBuf,

    /// Output phase-space file.
    output: PathBuf,

    /// Explicit input format name; otherwise inferred from the input extension.
    #[clap(long = "inputFormat")]
    input_format: Option<String>,

    /// Explicit output format name; otherwise inferred from the output extension.
    #[clap(long = "outputFormat")]
    output_format: Option<String>,

    /// Keep only photons.
    #[clap(long = "photonsOnly")]
    photons_only: bool,

    /// Keep only electrons.
    #[clap(long = "electronsOnly")]
    electrons_only: bool,

    /// Keep only particles with this exact PDG code.
    #[clap(long = "filterByPDG")]
    filter_by_pdg: Option<i32>,

    /// Drop particles below this kinetic energy, in MeV.
    #[clap(long = "minEnergy")]
    min_energy: Option<f32>,

    /// Drop particles above this kinetic energy, in MeV.
    #[clap(long = "maxEnergy")]
    max_energy: Option<f32>,

    /// Project every particle onto the plane X = value before writing.
    #[clap(long = "projectToX")]
    project_to_x: Option<f32>,

    /// Project every particle onto the plane Y = value before writing.
    #[clap(long = "projectToY")]
    project_to_y: Option<f32>,

    /// Project every particle onto the plane Z = value before writing.
    #[clap(long = "projectToZ")]
    project_to_z: Option<f32>,

    /// Mirror the X direction cosine.
    #[clap(long = "flipX")]
    flip_x: bool,

    /// Mirror the Y direction cosine.
    #[clap(long = "flipY")]
    flip_y: bool,

    /// Mirror the Z direction cosine.
    #[clap(long = "flipZ")]
    flip_z: bool,

    /// Accepted for parity with `combine`/`split`; a no-op here since `convert`
    /// has a single input and its constant-column declarations are always
    /// forwarded to the output unconditionally (see `open_writer` below).
    #[clap(long = "preserveConstants")]
    preserve_constants: bool,

    /// Stop reading once this many particles have been written.
    #[clap(long = "maxParticles")]
    max_particles: Option<u64>,

    /// List supported formats and exit.
    #[clap(long = "formats")]
    formats: bool,

    /// Treat warnings as fatal.
    #[clap(long = "errorOnWarning")]
    error_on_warning: bool,
}

impl Args {
    fn projection(&self) -> Option<Projection> {
        if let Some(v) = self.project_to_x {
            return Some(Projection::X(v));
        }
        if let Some(v) = self.project_to_y {
            return Some(Projection::Y(v));
        }
        if let Some(v) = self.project_to_z {
            return Some(Projection::Z(v));
        }
        None
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    let registry = FormatRegistry::global();
    if args.formats {
        phsp::cli::print_supported_formats(registry);
        return ExitCode::SUCCESS;
    }
    let mut diagnostics = Diagnostics::default();
    if args.input == args.output {
        diagnostics.error("input and output must differ");
        diagnostics.report();
        return ExitCode::from(diagnostics.exit_code(args.error_on_warning) as u8);
    }

    let filters = Filters {
        photons_only: args.photons_only,
        electrons_only: args.electrons_only,
        pdg: args.filter_by_pdg,
        min_energy: args.min_energy,
        max_energy: args.max_energy,
    };
    let projection = args.projection();

    let mut reader = match phsp::cli::open_reader(
        registry,
        &args.input,
        args.input_format.as_deref(),
        &ReaderOptions::default(),
    ) {
        Ok(reader) => reader,
        Err(e) => {
            diagnostics.error(format!("{}: {e}", args.input.display()));
            diagnostics.report();
            return ExitCode::from(diagnostics.exit_code(args.error_on_warning) as u8);
        }
    };

    let mut writer = match phsp::cli::open_writer(
        registry,
        &args.output,
        args.output_format.as_deref(),
        &WriterOptions::default(),
        reader.fixed_values(),
    ) {
        Ok(writer) => writer,
        Err(e) => {
            diagnostics.error(format!("{}: {e}", args.output.display()));
            diagnostics.report();
            return ExitCode::from(diagnostics.exit_code(args.error_on_warning) as u8);
        }
    };
    writer.set_flip(args.flip_x, args.flip_y, args.flip_z);

    loop {
        if let Some(max) = args.max_particles {
            if writer.particles_written() >= max {
                break;
            }
        }
        let mut particle = match reader.next_particle() {
            Ok(Some(particle)) => particle,
            Ok(None) => break,
            Err(e) => {
                diagnostics.error(format!("{}: {e}", args.input.display()));
                break;
            }
        };

        if let Some(projection) = projection {
            if !projection.apply(&mut particle) {
                diagnostics.warn("a particle's trajectory never reached the requested projection plane; dropped");
                promote_rejected_histories(&particle, &mut writer);
                continue;
            }
        }

        if !filters.accepts(&particle) {
            promote_rejected_histories(&particle, &mut writer);
            continue;
        }

        if let Err(e) = writer.write_particle(&particle) {
            diagnostics.error(format!("{}: {e}", args.output.display()));
            break;
        }
    }

    carry_trailing_histories(reader.as_ref(), writer.as_mut(), &mut diagnostics);

    if let Err(e) = writer.close() {
        diagnostics.error(format!("{}: {e}", args.output.display()));
    }

    diagnostics.report();
    log::info!(
        "converted {} -> {} ({} particles, {} histories)",
        args.input.display(),
        args.output.display(),
        writer.particles_written(),
        writer.histories_written()
    );
    ExitCode::from(diagnostics.exit_code(args.error_on_warning) as u8)
}

/// A rejected particle still carries a new-history count; that count must not
/// be silently lost, so it's promoted to pending histories on the writer (§4.9).
fn promote_rejected_histories(particle: &phsp::Particle, writer: &mut Box<dyn phsp::registry::ParticleSink>) {
    if particle.is_new_history() {
        writer.add_additional_histories(particle.incremental_histories().max(1) as u64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phsp::registry::{FormatRegistry, WriterOptions};
    use phsp::{FixedValues, ParticleType};

    #[test]
    fn rejected_new_history_particle_is_promoted_not_dropped() {
        let registry = FormatRegistry::global();
        let path = std::env::temp_dir().join(format!("phsp-convert-test-{}.egsphsp", std::process::id()));
        let mut writer = registry
            .create_writer(&path, &WriterOptions::default(), FixedValues::default())
            .unwrap();

        let accepted = phsp::Particle::new(ParticleType::Photon, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, true, 1.0);
        let rejected = phsp::Particle::new(ParticleType::Electron, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, true, 1.0);

        writer.write_particle(&accepted).unwrap();
        promote_rejected_histories(&rejected, &mut writer);
        assert_eq!(writer.histories_written(), 2);
        writer.close().unwrap();
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn non_new_history_rejection_does_not_inflate_count() {
        let registry = FormatRegistry::global();
        let path = std::env::temp_dir().join(format!("phsp-convert-test2-{}.egsphsp", std::process::id()));
        let mut writer = registry
            .create_writer(&path, &WriterOptions::default(), FixedValues::default())
            .unwrap();

        let accepted = phsp::Particle::new(ParticleType::Photon, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, true, 1.0);
        let rejected = phsp::Particle::new(ParticleType::Electron, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, false, 1.0);

        writer.write_particle(&accepted).unwrap();
        promote_rejected_histories(&rejected, &mut writer);
        assert_eq!(writer.histories_written(), 1);
        writer.close().unwrap();
        let _ = std::fs::remove_file(&path);
    }
}
