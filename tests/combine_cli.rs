//! `phsp-combine`, driven through the real binary: two IAEA inputs merge
//! into one output with particle and history counts summed across inputs.

mod common;

use std::process::Command;

use phsp::particle::{FixedValues, Particle};
use phsp::pdg::ParticleType;
use phsp::registry::{FormatRegistry, ReaderOptions, WriterOptions};

fn write_file(registry: &FormatRegistry, path: &std::path::Path, particles: &[Particle]) {
    let mut writer = registry
        .create_writer(path, &WriterOptions::default(), FixedValues::default())
        .unwrap();
    for particle in particles {
        writer.write_particle(particle).unwrap();
    }
    writer.close().unwrap();
}

#[test]
fn combine_sums_particles_and_histories_across_inputs() {
    let registry = FormatRegistry::global();
    let input_a = common::scratch_path("combine-a", "IAEAphsp");
    let input_b = common::scratch_path("combine-b", "IAEAphsp");
    let output = common::scratch_path("combine-out", "IAEAphsp");

    write_file(
        registry,
        &input_a,
        &[Particle::new(ParticleType::Photon, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, true, 1.0)],
    );
    write_file(
        registry,
        &input_b,
        &[
            Particle::new(ParticleType::Photon, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, true, 1.0),
            Particle::new(ParticleType::Electron, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, true, 1.0),
        ],
    );

    let exe = env!("CARGO_BIN_EXE_phsp-combine");
    let status = Command::new(exe)
        .arg(&input_a)
        .arg(&input_b)
        .arg("--outputFile")
        .arg(&output)
        .status()
        .expect("failed to run phsp-combine");
    assert!(status.success());

    let mut reader = registry.create_reader(&output, &ReaderOptions::default()).unwrap();
    assert_eq!(reader.total_particles(), 3);
    assert_eq!(reader.total_original_histories(), 3);
    let mut energies = Vec::new();
    while let Some(particle) = reader.next_particle().unwrap() {
        energies.push(particle.kinetic_energy());
    }
    assert_eq!(energies.len(), 3);

    for path in [&input_a, &input_b, &output] {
        let _ = std::fs::remove_file(path);
        let _ = std::fs::remove_file(path.with_extension("IAEAheader"));
    }
}
