//! `phsp-image`, driven through the real binary: projects particles onto the
//! default Z=0 plane and renders a plain-text PGM whose header matches the
//! requested grid size.

mod common;

use std::process::Command;

use phsp::particle::{FixedValues, Particle};
use phsp::pdg::ParticleType;
use phsp::registry::{FormatRegistry, WriterOptions};

#[test]
fn phsp_image_writes_a_valid_pgm() {
    let registry = FormatRegistry::global();
    let input_path = common::scratch_path("image-in", "egsphsp");
    let output_path = common::scratch_path("image-out", "pgm");

    let mut writer = registry
        .create_writer(&input_path, &WriterOptions::default(), FixedValues::default())
        .unwrap();
    let particle = Particle::new(ParticleType::Photon, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, true, 1.0);
    writer.write_particle(&particle).unwrap();
    writer.close().unwrap();

    let exe = env!("CARGO_BIN_EXE_phsp-image");
    let status = Command::new(exe)
        .arg(&input_path)
        .arg("--output")
        .arg(&output_path)
        .arg("--width")
        .arg("8")
        .arg("--height")
        .arg("8")
        .status()
        .expect("failed to run phsp-image");
    assert!(status.success());

    let text = std::fs::read_to_string(&output_path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("P2"));
    assert_eq!(lines.next(), Some("8 8"));
    assert_eq!(lines.next(), Some("65535"));
    assert_eq!(lines.count(), 8);

    let _ = std::fs::remove_file(&input_path);
    let _ = std::fs::remove_file(&output_path);
}
