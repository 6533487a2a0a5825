use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

static COUNTER: AtomicU32 = AtomicU32::new(0);

/// A unique scratch path under the system temp directory, named after the
/// calling test plus a monotonic counter so parallel tests never collide.
pub fn scratch_path(label: &str, extension: &str) -> PathBuf {
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("phsp-test-{}-{}-{n}.{extension}", std::process::id(), label))
}
