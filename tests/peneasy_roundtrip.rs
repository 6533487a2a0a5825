//! penEasy round trip: ASCII records, ILB bookkeeping, and the whole-file
//! prescan that derives particle/history counts instead of a stored header.

mod common;

use phsp::particle::{FixedValues, Particle};
use phsp::pdg::ParticleType;
use phsp::registry::{FormatRegistry, ReaderOptions, WriterOptions};

#[test]
fn peneasy_round_trip_derives_counts_from_prescan() {
    let registry = FormatRegistry::global();
    let path = common::scratch_path("peneasy", "dat");

    let first = Particle::new(ParticleType::Photon, 6.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, true, 1.0);
    let mut second = Particle::new(ParticleType::Electron, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, true, 1.0);
    second.set_incremental_histories(2).unwrap();

    let mut writer = registry
        .create_writer(&path, &WriterOptions::default(), FixedValues::default())
        .unwrap();
    writer.write_particle(&first).unwrap();
    writer.write_particle(&second).unwrap();
    writer.close().unwrap();

    let mut reader = registry.create_reader(&path, &ReaderOptions::default()).unwrap();
    assert_eq!(reader.total_particles(), 2);
    assert_eq!(reader.total_original_histories(), 3);

    let p1 = reader.next_particle().unwrap().unwrap();
    assert_eq!(p1.particle_type(), ParticleType::Photon);
    let p2 = reader.next_particle().unwrap().unwrap();
    assert_eq!(p2.particle_type(), ParticleType::Electron);
    assert_eq!(p2.incremental_histories(), 2);
    assert!(reader.next_particle().unwrap().is_none());

    let _ = std::fs::remove_file(&path);
}
