//! Native library for reading and writing Monte-Carlo particle phase-space
//! files, as produced by EGSnrc, TOPAS, penEasy, and codes built against the
//! IAEA phase-space API.
//!
//! A phase-space file is a list of particle records — type, energy, position,
//! direction, weight, plus a per-record flag marking the start of a new
//! simulated history — written in one of several codec-specific layouts. This
//! crate normalizes all of them to a single [`Particle`] representation and
//! exposes codec-generic [`Reader`]/[`Writer`] skeletons.
//!
//! # Reading particles
//!
//! ```no_run
//! use phsp::reader::iaea::{IaeaHeader, IaeaReaderCodec};
//! use phsp::reader::Reader;
//!
//! let header = IaeaHeader::from_path("data/shot.IAEAheader").unwrap();
//! let codec = IaeaReaderCodec::new(header);
//! let mut reader = Reader::open("data/shot.IAEAphsp", codec).unwrap();
//! while let Some(particle) = reader.next().unwrap() {
//!     let _ = particle.kinetic_energy();
//! }
//! ```
//!
//! Most callers don't need to name a codec directly — [`registry::FormatRegistry`]
//! resolves a reader or writer from a file's extension:
//!
//! ```no_run
//! use phsp::registry::{FormatRegistry, ReaderOptions};
//! use std::path::Path;
//!
//! let registry = FormatRegistry::global();
//! let mut source = registry
//!     .create_reader(Path::new("data/shot.IAEAphsp"), &ReaderOptions::default())
//!     .unwrap();
//! while let Some(particle) = source.next_particle().unwrap() {
//!     let _ = particle.weight();
//! }
//! ```
//!
//! # Writing particles
//!
//! A [`writer::Writer`] implements `Drop`, which it uses to back-patch the
//! header with final particle/history counts when the writer goes out of
//! scope. If that rewrite fails, an error is logged but the thread does not
//! panic. To observe the error yourself, call `close` explicitly and prevent
//! any rewriting on drop.

#![deny(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]

/// Fixed-capacity byte arena with endianness-aware typed I/O (§4.1).
pub mod buffer;
/// Shared CLI types: filters, projection, and diagnostics collection.
pub mod cli;
/// The crate's error enum (§7).
pub mod error;
/// Fluence imaging: accumulates particle crossings into a 2-D grid.
pub mod image;
/// The in-memory [`Particle`] record and its property bags (§3).
pub mod particle;
/// The PDG particle catalog, unit constants, and name/code conversions (§3).
pub mod pdg;
/// The long-tail PDG code/name lookup table backing [`pdg::ParticleType::Other`].
mod pdg_table;
/// The buffered reader skeleton and per-format reader codecs (§4.2).
pub mod reader;
/// The thread-safe format registry (§4.8).
pub mod registry;
/// The buffered writer skeleton and per-format writer codecs (§4.3).
pub mod writer;

pub use buffer::{ByteBuffer, Endianness};
pub use error::Error;
pub use particle::{FixedValues, Particle};
pub use pdg::ParticleType;
pub use reader::Reader;
pub use registry::FormatRegistry;
pub use writer::Writer;

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, Error>;
