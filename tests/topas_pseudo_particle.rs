//! Scenario E3: histories that never produced a scored particle are carried
//! as pseudo-particle markers (PDG 0, weight -k) rather than silently dropped.

mod common;

use phsp::particle::{FixedValues, Particle};
use phsp::pdg::ParticleType;
use phsp::registry::{FormatRegistry, ReaderOptions, WriterOptions};

#[test]
fn empty_histories_round_trip_as_pseudo_particle() {
    let registry = FormatRegistry::global();
    let path = common::scratch_path("topas", "phsp");

    let photon = Particle::new(ParticleType::Photon, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, true, 1.0);

    let mut writer = registry
        .create_writer(&path, &WriterOptions::default(), FixedValues::default())
        .unwrap();
    writer.write_particle(&photon).unwrap();
    writer.add_additional_histories(5);
    assert_eq!(writer.histories_written(), 6);
    writer.close().unwrap();
    assert_eq!(writer.histories_written(), 6);

    let mut reader = registry.create_reader(&path, &ReaderOptions::default()).unwrap();
    assert_eq!(reader.total_original_histories(), 6);
    let first = reader.next_particle().unwrap().unwrap();
    assert_eq!(first.particle_type(), ParticleType::Photon);
    assert!(reader.next_particle().unwrap().is_none());
    assert_eq!(reader.histories_read(), 1);

    let header_path = path.with_extension("header");
    let header_text = std::fs::read_to_string(&header_path).unwrap();
    assert!(header_text.contains("Number of Original Histories that Reached Phase Space: 6"));
    assert!(header_text.contains("Number of Scored Particles: 1"));

    let _ = std::fs::remove_file(&path);
    let _ = std::fs::remove_file(&header_path);
}
