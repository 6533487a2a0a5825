//! `phsp-combine`: merges several phase-space files that share a common
//! geometry into one (§6).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use phsp::cli::{carry_trailing_histories, Diagnostics};
use phsp::registry::{FormatRegistry, ReaderOptions, WriterOptions};

/// Merge phase-space files recorded on the same scoring surface into one.
#[derive(Debug, Parser)]
#[clap(name = "phsp-combine", about = "Combine phase-space files")]
struct Args {
    /// Input phase-space files, in combination order.
    #[clap(required = true)]
    inputs: Vec<PathBuf>,

    /// Output phase-space file.
    #[clap(long = "outputFile")]
    output_file: PathBuf,

    /// Explicit input format name; otherwise inferred from each file's extension.
    #[clap(long = "inputFormat")]
    input_format: Option<String>,

    /// Explicit output format name; otherwise inferred from the output extension.
    #[clap(long = "outputFormat")]
    output_format: Option<String>,

    /// Fail unless every input declares identical constant-column values.
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

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    let registry = FormatRegistry::global();
    if args.formats {
        phsp::cli::print_supported_formats(registry);
        return ExitCode::SUCCESS;
    }
    let mut diagnostics = Diagnostics::default();

    let reader_options = ReaderOptions::default();
    let mut first_fixed_values = None;
    let mut readers = Vec::with_capacity(args.inputs.len());
    for path in &args.inputs {
        let reader = match phsp::cli::open_reader(registry, path, args.input_format.as_deref(), &reader_options) {
            Ok(reader) => reader,
            Err(e) => {
                diagnostics.error(format!("{}: {e}", path.display()));
                diagnostics.report();
                return ExitCode::from(diagnostics.exit_code(args.error_on_warning) as u8);
            }
        };
        let fixed_values = reader.fixed_values();
        match &first_fixed_values {
            None => first_fixed_values = Some(fixed_values),
            Some(expected) if args.preserve_constants && *expected != fixed_values => {
                diagnostics.error(format!(
                    "{}: constant-column declarations differ from the first input",
                    path.display()
                ));
                diagnostics.report();
                return ExitCode::from(diagnostics.exit_code(args.error_on_warning) as u8);
            }
            _ => {}
        }
        readers.push(reader);
    }
    let fixed_values = first_fixed_values.unwrap_or_default();

    let mut writer = match phsp::cli::open_writer(
        registry,
        &args.output_file,
        args.output_format.as_deref(),
        &WriterOptions::default(),
        fixed_values,
    ) {
        Ok(writer) => writer,
        Err(e) => {
            diagnostics.error(format!("{}: {e}", args.output_file.display()));
            diagnostics.report();
            return ExitCode::from(diagnostics.exit_code(args.error_on_warning) as u8);
        }
    };

    'inputs: for (path, mut reader) in args.inputs.iter().zip(readers) {
        loop {
            if let Some(max) = args.max_particles {
                if writer.particles_written() >= max {
                    break 'inputs;
                }
            }
            match reader.next_particle() {
                Ok(Some(particle)) => {
                    if let Err(e) = writer.write_particle(&particle) {
                        diagnostics.error(format!("{}: {e}", path.display()));
                        diagnostics.report();
                        return ExitCode::from(diagnostics.exit_code(args.error_on_warning) as u8);
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    diagnostics.error(format!("{}: {e}", path.display()));
                    diagnostics.report();
                    return ExitCode::from(diagnostics.exit_code(args.error_on_warning) as u8);
                }
            }
        }
        carry_trailing_histories(reader.as_ref(), writer.as_mut(), &mut diagnostics);
    }

    if let Err(e) = writer.close() {
        diagnostics.error(format!("{}: {e}", args.output_file.display()));
    }

    diagnostics.report();
    log::info!(
        "combined {} input(s) into {} ({} particles, {} histories)",
        args.inputs.len(),
        args.output_file.display(),
        writer.particles_written(),
        writer.histories_written()
    );
    ExitCode::from(diagnostics.exit_code(args.error_on_warning) as u8)
}
