//! MODE2 round trip through the EGS codec: checks the rest-mass add/subtract
//! on electrons and that the declared original-histories count matches the
//! number of new-history particles written.

mod common;

use phsp::particle::{FixedValues, Particle};
use phsp::pdg::ParticleType;
use phsp::registry::{FormatRegistry, ReaderOptions, WriterOptions};

#[test]
fn egs_mode2_round_trip_preserves_energy_and_histories() {
    let registry = FormatRegistry::global();
    let path = common::scratch_path("egs", "egsphsp2");

    let photon = Particle::new(ParticleType::Photon, 1.25, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, true, 1.0);
    let electron = Particle::new(ParticleType::Electron, 0.5, 1.0, 2.0, 0.0, 0.0, 0.0, 1.0, true, 1.0);

    let mut writer = registry
        .create_writer(&path, &WriterOptions::default(), FixedValues::default())
        .unwrap();
    writer.write_particle(&photon).unwrap();
    writer.write_particle(&electron).unwrap();
    assert_eq!(writer.particles_written(), 2);
    assert_eq!(writer.histories_written(), 2);
    writer.close().unwrap();

    let mut reader = registry.create_reader(&path, &ReaderOptions::default()).unwrap();
    assert_eq!(reader.total_particles(), 2);
    assert_eq!(reader.total_original_histories(), 2);

    let first = reader.next_particle().unwrap().unwrap();
    assert_eq!(first.particle_type(), ParticleType::Photon);
    assert!((first.kinetic_energy() - 1.25).abs() < 1e-3);

    let second = reader.next_particle().unwrap().unwrap();
    assert_eq!(second.particle_type(), ParticleType::Electron);
    assert!((second.kinetic_energy() - 0.5).abs() < 1e-3);

    assert!(reader.next_particle().unwrap().is_none());
    let _ = std::fs::remove_file(&path);
}
