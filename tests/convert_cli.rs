//! Scenario E4, driven through the real `phsp-convert` binary: a particle
//! rejected by a filter still carries its history forward as a pending count
//! rather than silently vanishing from the original-histories total.

mod common;

use std::process::Command;

use phsp::particle::{FixedValues, Particle};
use phsp::pdg::ParticleType;
use phsp::registry::{FormatRegistry, ReaderOptions, WriterOptions};

#[test]
fn filtered_out_history_is_promoted_to_pending() {
    let registry = FormatRegistry::global();
    let input_path = common::scratch_path("convert-in", "egsphsp");
    let output_path = common::scratch_path("convert-out", "egsphsp");

    let photon = Particle::new(ParticleType::Photon, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, true, 1.0);
    let electron = Particle::new(ParticleType::Electron, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, true, 1.0);

    let mut writer = registry
        .create_writer(&input_path, &WriterOptions::default(), FixedValues::default())
        .unwrap();
    writer.write_particle(&photon).unwrap();
    writer.write_particle(&electron).unwrap();
    writer.close().unwrap();

    let exe = env!("CARGO_BIN_EXE_phsp-convert");
    let status = Command::new(exe)
        .arg(&input_path)
        .arg(&output_path)
        .arg("--photonsOnly")
        .status()
        .expect("failed to run phsp-convert");
    assert!(status.success());

    let mut reader = registry.create_reader(&output_path, &ReaderOptions::default()).unwrap();
    assert_eq!(reader.total_particles(), 1);
    assert_eq!(reader.total_original_histories(), 2);
    let only = reader.next_particle().unwrap().unwrap();
    assert_eq!(only.particle_type(), ParticleType::Photon);
    assert!(reader.next_particle().unwrap().is_none());

    let _ = std::fs::remove_file(&input_path);
    let _ = std::fs::remove_file(&output_path);
}
