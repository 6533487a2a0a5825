//! End-to-end scenario E1: three photons through the IAEA codec via the
//! format registry, checking header statistics and the data/checksum invariant.

mod common;

use phsp::particle::Particle;
use phsp::pdg::ParticleType;
use phsp::registry::{FormatRegistry, ReaderOptions, WriterOptions};
use phsp::FixedValues;

#[test]
fn iaea_round_trip_preserves_counts_and_checksum() {
    let registry = FormatRegistry::global();
    let path = common::scratch_path("iaea", "IAEAphsp");

    let mut writer = registry
        .create_writer(&path, &WriterOptions::default(), FixedValues::default())
        .unwrap();

    let first = Particle::new(ParticleType::Photon, 6.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, true, 1.0);
    let rest = Particle::new(ParticleType::Photon, 6.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, false, 1.0);
    writer.write_particle(&first).unwrap();
    writer.write_particle(&rest).unwrap();
    writer.write_particle(&rest).unwrap();
    assert_eq!(writer.particles_written(), 3);
    assert_eq!(writer.histories_written(), 1);
    writer.close().unwrap();

    let data_len = std::fs::metadata(&path).unwrap().len();

    let header_path = path.with_extension("IAEAheader");
    let header_text = std::fs::read_to_string(&header_path).unwrap();
    assert!(header_text.contains("$PARTICLES:"));
    assert!(header_text.contains("$ORIG_HISTORIES:"));

    let mut reader = registry.create_reader(&path, &ReaderOptions::default()).unwrap();
    assert_eq!(reader.total_particles(), 3);
    assert_eq!(reader.total_original_histories(), 1);

    let record_length = {
        let m = std::fs::metadata(&path).unwrap();
        m.len() / 3
    };
    assert_eq!(record_length * 3, data_len);

    let mut count = 0;
    while let Some(particle) = reader.next_particle().unwrap() {
        assert_eq!(particle.particle_type(), ParticleType::Photon);
        assert!((particle.kinetic_energy() - 6.0).abs() < 1e-4);
        count += 1;
    }
    assert_eq!(count, 3);
    assert_eq!(reader.histories_read(), 1);

    let _ = std::fs::remove_file(&path);
    let _ = std::fs::remove_file(&header_path);
}
