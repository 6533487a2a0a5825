//! `phsp-split`: splits one phase-space file into several, on history
//! boundaries only, so no simulated history is ever divided across files (§6).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use phsp::cli::{carry_trailing_histories, Diagnostics};
use phsp::registry::{FormatRegistry, ReaderOptions, WriterOptions};

/// Split a phase-space file into `parts` roughly-equal pieces, never splitting
/// a history across a file boundary.
#[derive(Debug, Parser)]
#[clap(name = "phsp-split", about = "Split a phase-space file into parts")]
struct Args {
    /// Input phase-space file.
    input: PathBuf,

    /// Number of output files to produce.
    #[clap(short = 'n', long = "parts")]
    parts: u32,

    /// Explicit input format name; otherwise inferred from the input extension.
    #[clap(long = "inputFormat")]
    input_format: Option<String>,

    /// Explicit output format name; otherwise inferred from the output extension.
    #[clap(long = "outputFormat")]
    output_format: Option<String>,

    /// Stop reading once this many particles have been distributed across parts.
    #[clap(long = "maxParticles")]
    max_particles: Option<u64>,

    /// List supported formats and exit.
    #[clap(long = "formats")]
    formats: bool,

    /// Treat warnings as fatal.
    #[clap(long = "errorOnWarning")]
    error_on_warning: bool,
}

/// `<stem>_Part<NN><ext>`, zero-padded to the width of `parts`.
fn part_path(input: &std::path::Path, index: u32, width: usize) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let ext = input.extension().map(|e| e.to_string_lossy().to_string()).unwrap_or_default();
    let mut name = format!("{stem}_Part{index:0width$}");
    if !ext.is_empty() {
        name.push('.');
        name.push_str(&ext);
    }
    input.with_file_name(name)
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    let registry = FormatRegistry::global();
    if args.formats {
        phsp::cli::print_supported_formats(registry);
        return ExitCode::SUCCESS;
    }
    if args.parts == 0 {
        eprintln!("error: --parts must be greater than 0");
        return ExitCode::from(1);
    }
    let mut diagnostics = Diagnostics::default();
    let width = args.parts.to_string().len();

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

    let target_per_part = reader.total_particles().max(1).div_ceil(args.parts as u64);
    let fixed_values = reader.fixed_values();

    let mut part_index: u32 = 1;
    let mut written_in_part: u64 = 0;
    let mut total_written: u64 = 0;
    let mut output_path = part_path(&args.input, part_index, width);
    let mut writer = match phsp::cli::open_writer(
        registry,
        &output_path,
        args.output_format.as_deref(),
        &WriterOptions::default(),
        fixed_values,
    ) {
        Ok(writer) => writer,
        Err(e) => {
            diagnostics.error(format!("{}: {e}", output_path.display()));
            diagnostics.report();
            return ExitCode::from(diagnostics.exit_code(args.error_on_warning) as u8);
        }
    };

    let mut pending = match reader.next_particle() {
        Ok(p) => p,
        Err(e) => {
            diagnostics.error(format!("{}: {e}", args.input.display()));
            None
        }
    };

    while let Some(particle) = pending.take() {
        if let Some(max) = args.max_particles {
            if total_written >= max {
                break;
            }
        }
        pending = match reader.next_particle() {
            Ok(p) => p,
            Err(e) => {
                diagnostics.error(format!("{}: {e}", args.input.display()));
                None
            }
        };

        let at_history_boundary = match &pending {
            Some(next) => next.is_new_history(),
            None => true,
        };

        if let Err(e) = writer.write_particle(&particle) {
            diagnostics.error(format!("{}: {e}", output_path.display()));
            break;
        }
        written_in_part += 1;
        total_written += 1;

        let more_parts_remain = part_index < args.parts;
        if at_history_boundary && written_in_part >= target_per_part && more_parts_remain && pending.is_some() {
            if let Err(e) = writer.close() {
                diagnostics.error(format!("{}: {e}", output_path.display()));
            }
            log::info!("{}: {} particles", output_path.display(), writer.particles_written());
            part_index += 1;
            written_in_part = 0;
            output_path = part_path(&args.input, part_index, width);
            writer = match phsp::cli::open_writer(
                registry,
                &output_path,
                args.output_format.as_deref(),
                &WriterOptions::default(),
                fixed_values,
            ) {
                Ok(writer) => writer,
                Err(e) => {
                    diagnostics.error(format!("{}: {e}", output_path.display()));
                    diagnostics.report();
                    return ExitCode::from(diagnostics.exit_code(args.error_on_warning) as u8);
                }
            };
        }
    }

    carry_trailing_histories(reader.as_ref(), writer.as_mut(), &mut diagnostics);

    if let Err(e) = writer.close() {
        diagnostics.error(format!("{}: {e}", output_path.display()));
    }
    log::info!("{}: {} particles", output_path.display(), writer.particles_written());

    diagnostics.report();
    ExitCode::from(diagnostics.exit_code(args.error_on_warning) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_path_zero_pads_to_requested_width() {
        let input = PathBuf::from("/data/run.egsphsp");
        assert_eq!(part_path(&input, 1, 2), PathBuf::from("/data/run_Part01.egsphsp"));
        assert_eq!(part_path(&input, 12, 2), PathBuf::from("/data/run_Part12.egsphsp"));
    }

    #[test]
    fn part_path_preserves_extensionless_inputs() {
        let input = PathBuf::from("/data/run");
        assert_eq!(part_path(&input, 3, 1), PathBuf::from("/data/run_Part3"));
    }
}
