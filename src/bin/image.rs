//! `phsp-image`: renders a 2-D fluence image of particle crossings on a
//! scoring plane (§6). The BMP/TIFF renderers a full deployment would use are
//! out of scope; this produces a plain-text PGM grayscale image instead.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use phsp::cli::{Diagnostics, Filters, Projection};
use phsp::image::{FluenceImager, PgmImager};
use phsp::registry::{FormatRegistry, ReaderOptions};

/// Render a 2-D fluence image of particle crossings on a scoring plane.
#[derive(Debug, Parser)]
#[clap(name = "phsp-image", about = "Render a fluence image from a phase-space file")]
struct Args {
    /// Input phase-space file.
    input: PathBuf,

    /// Output PGM image path.
    #[clap(short, long)]
    output: PathBuf,

    /// Explicit input format name; otherwise inferred from the input extension.
    #[clap(long = "inputFormat")]
    input_format: Option<String>,

    /// Image width, in pixels.
    #[clap(long, default_value_t = 256)]
    width: usize,

    /// Image height, in pixels.
    #[clap(long, default_value_t = 256)]
    height: usize,

    /// Half-extent of the imaged plane, in cm, centered on the axis origin.
    #[clap(long = "halfExtent", default_value_t = 20.0)]
    half_extent: f32,

    /// Render the plane perpendicular to X, at the given coordinate.
    #[clap(long = "projectToX")]
    project_to_x: Option<f32>,

    /// Render the plane perpendicular to Y, at the given coordinate.
    #[clap(long = "projectToY")]
    project_to_y: Option<f32>,

    /// Render the plane perpendicular to Z, at the given coordinate.
    #[clap(long = "projectToZ", default_value_t = 0.0)]
    project_to_z: f32,

    /// Keep only photons.
    #[clap(long = "photonsOnly")]
    photons_only: bool,

    /// Keep only electrons.
    #[clap(long = "electronsOnly")]
    electrons_only: bool,

    /// Stop reading once this many particles have been read.
    #[clap(long = "maxParticles")]
    max_particles: Option<u64>,

    /// List supported formats and exit.
    #[clap(long = "formats")]
    formats: bool,
}

impl Args {
    fn projection(&self) -> Projection {
        if let Some(v) = self.project_to_x {
            return Projection::X(v);
        }
        if let Some(v) = self.project_to_y {
            return Projection::Y(v);
        }
        Projection::Z(self.project_to_z)
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
    let projection = args.projection();
    let filters = Filters {
        photons_only: args.photons_only,
        electrons_only: args.electrons_only,
        ..Filters::default()
    };

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
            return ExitCode::from(diagnostics.exit_code(false) as u8);
        }
    };

    let mut imager = PgmImager::new(args.width, args.height, args.half_extent);
    let mut particles_read: u64 = 0;
    loop {
        if let Some(max) = args.max_particles {
            if particles_read >= max {
                break;
            }
        }
        match reader.next_particle() {
            Ok(Some(mut particle)) => {
                particles_read += 1;
                if !filters.accepts(&particle) {
                    continue;
                }
                if projection.apply(&mut particle) {
                    imager.accumulate(&particle, projection);
                }
            }
            Ok(None) => break,
            Err(e) => {
                diagnostics.error(format!("{}: {e}", args.input.display()));
                break;
            }
        }
    }

    if let Err(e) = imager.write_to(&args.output) {
        diagnostics.error(format!("{}: {e}", args.output.display()));
    }

    diagnostics.report();
    log::info!("{}: peak bin value {}", args.output.display(), imager.max_value());
    ExitCode::from(diagnostics.exit_code(false) as u8)
}
