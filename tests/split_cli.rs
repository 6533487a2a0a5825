//! Scenario E5, driven through the real `phsp-split` binary: splitting an
//! EGS file with interleaved multi-particle histories must never divide a
//! history across two output parts.

mod common;

use std::process::Command;

use phsp::particle::{FixedValues, Particle};
use phsp::pdg::ParticleType;
use phsp::registry::{FormatRegistry, ReaderOptions, WriterOptions};

fn history(first_energy: f32, second_energy: f32) -> [Particle; 2] {
    [
        Particle::new(ParticleType::Photon, first_energy, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, true, 1.0),
        Particle::new(ParticleType::Photon, second_energy, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, false, 1.0),
    ]
}

#[test]
fn split_never_divides_a_history_across_parts() {
    let registry = FormatRegistry::global();
    let input_path = common::scratch_path("split-in", "egsphsp");

    let mut writer = registry
        .create_writer(&input_path, &WriterOptions::default(), FixedValues::default())
        .unwrap();
    for history in [history(1.0, 1.1), history(2.0, 2.1), history(3.0, 3.1)] {
        for particle in history {
            writer.write_particle(&particle).unwrap();
        }
    }
    writer.close().unwrap();

    let exe = env!("CARGO_BIN_EXE_phsp-split");
    let status = Command::new(exe)
        .arg(&input_path)
        .arg("--parts")
        .arg("2")
        .status()
        .expect("failed to run phsp-split");
    assert!(status.success());

    let stem = input_path.file_stem().unwrap().to_string_lossy().to_string();
    let ext = input_path.extension().unwrap().to_string_lossy().to_string();
    let dir = input_path.parent().unwrap();
    let part1 = dir.join(format!("{stem}_Part01.{ext}"));
    let part2 = dir.join(format!("{stem}_Part02.{ext}"));

    let mut total_particles = 0u64;
    let mut total_histories = 0u64;
    for part in [&part1, &part2] {
        assert!(part.exists(), "expected output part at {}", part.display());
        let mut reader = registry.create_reader(part, &ReaderOptions::default()).unwrap();
        let first = reader
            .next_particle()
            .unwrap()
            .unwrap_or_else(|| panic!("{} has no particles", part.display()));
        assert!(first.is_new_history(), "{} must start on a history boundary", part.display());
        total_particles += 1;
        if first.is_new_history() {
            total_histories += 1;
        }
        while let Some(particle) = reader.next_particle().unwrap() {
            total_particles += 1;
            if particle.is_new_history() {
                total_histories += 1;
            }
        }
    }
    assert_eq!(total_particles, 6);
    assert_eq!(total_histories, 3);

    let _ = std::fs::remove_file(&input_path);
    let _ = std::fs::remove_file(&part1);
    let _ = std::fs::remove_file(&part2);
}
