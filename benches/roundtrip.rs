use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

use criterion::{criterion_group, criterion_main, Criterion};

use phsp::particle::{FixedValues, Particle};
use phsp::pdg::ParticleType;
use phsp::registry::{FormatRegistry, ReaderOptions, WriterOptions};

static COUNTER: AtomicU32 = AtomicU32::new(0);

fn scratch_path() -> PathBuf {
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("phsp-bench-{}-{n}.egsphsp", std::process::id()))
}

fn roundtrip(registry: &FormatRegistry, nparticles: usize) {
    let path = scratch_path();
    let mut writer = registry
        .create_writer(&path, &WriterOptions::default(), FixedValues::default())
        .unwrap();
    for i in 0..nparticles {
        let particle = Particle::new(ParticleType::Photon, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, i == 0, 1.0);
        writer.write_particle(&particle).unwrap();
    }
    writer.close().unwrap();

    let mut reader = registry.create_reader(&path, &ReaderOptions::default()).unwrap();
    while reader.next_particle().unwrap().is_some() {}
    let _ = std::fs::remove_file(&path);
}

fn bench_roundtrip(c: &mut Criterion) {
    let registry = FormatRegistry::global();
    let mut group = c.benchmark_group("egs_roundtrip");
    for nparticles in [0usize, 1, 100, 10_000] {
        group.bench_function(format!("{nparticles}"), |b| {
            b.iter(|| roundtrip(registry, nparticles));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_roundtrip);
criterion_main!(benches);
