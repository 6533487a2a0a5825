//! Crate-wide error type.

use std::io;

use crate::pdg::ParticleType;

/// Everything that can go wrong reading, writing, or registering phase-space data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A buffer read ran past the valid region.
    #[error("not enough data in buffer: needed {needed} bytes, {available} available")]
    NotEnoughData {
        /// Bytes the read required.
        needed: usize,
        /// Bytes actually available.
        available: usize,
    },

    /// A buffer write ran past capacity.
    #[error("not enough space in buffer: needed {needed} bytes, {available} available")]
    NotEnoughSpace {
        /// Bytes the write required.
        needed: usize,
        /// Bytes of capacity remaining.
        available: usize,
    },

    /// A header or record violated its format's grammar.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// A particle's type is not one this codec, or the library, can carry.
    #[error("unsupported particle type: {0:?}")]
    UnsupportedParticle(ParticleType),

    /// A property value fell outside its documented range.
    #[error("invalid property {name}: {detail}")]
    InvalidProperty {
        /// Name of the offending property.
        name: &'static str,
        /// Why the value is invalid.
        detail: String,
    },

    /// No format is registered under the requested name or extension.
    #[error("unknown format: {0}")]
    UnknownFormat(String),

    /// More than one registered format matches a requested extension.
    #[error("ambiguous format for extension {0:?}: candidates {1:?}")]
    AmbiguousFormat(String, Vec<String>),

    /// A format name collided with one already registered.
    #[error("format already registered: {0}")]
    DuplicateFormat(String),

    /// Declared counts disagreed with what was actually read or written.
    #[error("inconsistent metadata: {0}")]
    InconsistentMetadata(String),

    /// A pseudo-particle's implied history count overflowed a signed 32-bit integer.
    #[error("history count overflow: {0}")]
    Overflow(String),

    /// The writer was asked to write after it had already been closed.
    #[error("writer already closed")]
    ClosedWriter,

    /// Underlying file I/O failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A `Result` whose error type defaults to [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
