//! Thread-safe format registry: dispatches by extension or explicit name (§4.8).
//!
//! Wraps the four standard codecs behind object-safe [`ParticleSource`]/
//! [`ParticleSink`] traits so the registry can hand back a boxed reader or
//! writer without the caller naming a concrete codec type.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use crate::error::{Error, Result};
use crate::particle::{FixedValues, Particle};
use crate::reader::egs::{EgsHeader, EgsReaderCodec, LatchInterpretation};
use crate::reader::iaea::{IaeaHeader, IaeaReaderCodec};
use crate::reader::peneasy::{PenEasyHeader, PenEasyReaderCodec};
use crate::reader::topas::{TopasHeader, TopasReaderCodec, TopasVariant};
use crate::reader::{Reader, ReaderCodec};
use crate::writer::egs::EgsWriterCodec;
use crate::writer::iaea::{IaeaWriterCodec, IaeaWriterOptions};
use crate::writer::peneasy::PenEasyWriterCodec;
use crate::writer::topas::TopasWriterCodec;
use crate::writer::{Writer, WriterCodec};

/// Options that steer format-specific reader construction. Fields not relevant
/// to the resolved format are ignored.
#[derive(Debug, Clone, Default)]
pub struct ReaderOptions {
    /// Constant Z value EGS readers substitute (EGS never stores Z).
    pub egs_constant_z: f32,
    /// How EGS LATCH bits 24-28 should be interpreted.
    pub egs_latch_interpretation: Option<LatchInterpretation>,
    /// Recompute EGS's declared particle count from file size (§9 open question).
    pub egs_recompute_particle_count: bool,
}

/// Options that steer format-specific writer construction.
#[derive(Debug, Clone, Default)]
pub struct WriterOptions {
    /// IAEA-specific header fields (title, index, extra columns). `None` uses defaults.
    pub iaea: Option<IaeaWriterOptions>,
    /// Constant Z value recorded in an EGS header's dedicated slot.
    pub egs_constant_z: f32,
    /// Which TOPAS subvariant to emit. Defaults to `Binary` when unset.
    pub topas_variant: Option<TopasVariant>,
}

/// Object-safe view of a [`Reader`] over any codec.
pub trait ParticleSource {
    /// The codec's reported name.
    fn format_name(&self) -> &'static str;
    /// Decodes and returns the next particle, or `None` at end of stream.
    fn next_particle(&mut self) -> Result<Option<Particle>>;
    /// True when another call to [`ParticleSource::next_particle`] could plausibly yield a particle.
    fn has_more_particles(&mut self) -> bool;
    /// Declared total particle count.
    fn total_particles(&self) -> u64;
    /// Declared total original-history count.
    fn total_original_histories(&self) -> u64;
    /// Particles handed back so far.
    fn particles_read(&self) -> u64;
    /// Original histories accumulated so far.
    fn histories_read(&self) -> u64;
    /// Constant-column declarations from the header.
    fn fixed_values(&self) -> FixedValues;
    /// Closes the underlying reader. Idempotent.
    fn close(&mut self) -> Result<()>;
}

impl<C: ReaderCodec> ParticleSource for Reader<C, BufReader<File>> {
    fn format_name(&self) -> &'static str {
        Reader::format_name(self)
    }
    fn next_particle(&mut self) -> Result<Option<Particle>> {
        self.next()
    }
    fn has_more_particles(&mut self) -> bool {
        Reader::has_more_particles(self)
    }
    fn total_particles(&self) -> u64 {
        Reader::total_particles(self)
    }
    fn total_original_histories(&self) -> u64 {
        Reader::total_original_histories(self)
    }
    fn particles_read(&self) -> u64 {
        Reader::particles_read(self)
    }
    fn histories_read(&self) -> u64 {
        Reader::histories_read(self)
    }
    fn fixed_values(&self) -> FixedValues {
        Reader::fixed_values(self)
    }
    fn close(&mut self) -> Result<()> {
        Reader::close(self)
    }
}

/// Object-safe view of a [`Writer`] over any codec.
pub trait ParticleSink {
    /// Writes one particle, applying flip/constant-column policy.
    fn write_particle(&mut self, particle: &Particle) -> Result<()>;
    /// Accounts for `k` simulated histories that produced no scoring particle.
    fn add_additional_histories(&mut self, k: u64);
    /// Sets whether to negate the x/y/z direction cosine on every subsequent write.
    fn set_flip(&mut self, x: bool, y: bool, z: bool);
    /// Histories accounted for so far, including any still pending at close.
    fn histories_written(&self) -> u64;
    /// Particles actually written so far.
    fn particles_written(&self) -> u64;
    /// Flushes buffered data, rewrites the header, and closes the file. Idempotent.
    fn close(&mut self) -> Result<()>;
}

impl<C: WriterCodec> ParticleSink for Writer<C, BufWriter<File>> {
    fn write_particle(&mut self, particle: &Particle) -> Result<()> {
        self.write(particle)
    }
    fn add_additional_histories(&mut self, k: u64) {
        Writer::add_additional_histories(self, k)
    }
    fn set_flip(&mut self, x: bool, y: bool, z: bool) {
        Writer::set_flip(self, x, y, z)
    }
    fn histories_written(&self) -> u64 {
        Writer::histories_written(self)
    }
    fn particles_written(&self) -> u64 {
        Writer::particles_written(self)
    }
    fn close(&mut self) -> Result<()> {
        Writer::close(self)
    }
}

type ReaderFactory = Box<dyn Fn(&Path, &ReaderOptions) -> Result<Box<dyn ParticleSource>> + Send + Sync>;
type WriterFactory =
    Box<dyn Fn(&Path, &WriterOptions, FixedValues) -> Result<Box<dyn ParticleSink>> + Send + Sync>;

/// One entry in the registry's format catalog (§4.8).
#[derive(Debug, Clone)]
pub struct SupportedFormat {
    /// The name readers/writers are looked up by, e.g. `"IAEA"`.
    pub name: String,
    /// A short human-readable description for `--list-formats`-style output.
    pub description: String,
    /// The canonical file extension associated with this format, e.g. `".phsp"`.
    pub extension: String,
    /// Whether `<extension><digit>` (e.g. `.egsphsp1`) also matches.
    pub allow_numeric_suffix: bool,
}

#[derive(Default)]
struct Inner {
    readers: HashMap<String, ReaderFactory>,
    writers: HashMap<String, WriterFactory>,
    formats: Vec<SupportedFormat>,
}

/// The process-wide, mutex-guarded format registry (§4.8, §5).
pub struct FormatRegistry {
    inner: Mutex<Inner>,
}

impl std::fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = match self.inner.lock() {
            Ok(inner) => inner.formats.iter().map(|fmt| fmt.name.as_str()).collect(),
            Err(_) => Vec::new(),
        };
        f.debug_struct("FormatRegistry").field("formats", &names).finish()
    }
}

impl FormatRegistry {
    fn new() -> Self {
        FormatRegistry {
            inner: Mutex::new(Inner::default()),
        }
    }

    /// The shared, lazily-initialized process-wide registry.
    pub fn global() -> &'static FormatRegistry {
        static REGISTRY: OnceLock<FormatRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            let registry = FormatRegistry::new();
            registry.register_standard_formats();
            registry
        })
    }

    /// Registers a new format under `format.name`. Fails if the name is already taken.
    pub fn register(
        &self,
        format: SupportedFormat,
        reader_factory: ReaderFactory,
        writer_factory: WriterFactory,
    ) -> Result<()> {
        let mut inner = self.inner.lock().expect("registry mutex poisoned");
        if inner.readers.contains_key(&format.name) {
            return Err(Error::DuplicateFormat(format.name));
        }
        inner.readers.insert(format.name.clone(), reader_factory);
        inner.writers.insert(format.name.clone(), writer_factory);
        inner.formats.push(format);
        Ok(())
    }

    /// Registers IAEA, EGS, TOPAS, and penEasy. Idempotent — a second call is a no-op.
    pub fn register_standard_formats(&self) {
        let already = {
            let inner = self.inner.lock().expect("registry mutex poisoned");
            inner.readers.contains_key("IAEA")
        };
        if already {
            return;
        }
        let _ = self.register(
            SupportedFormat {
                name: "IAEA".to_string(),
                description: "IAEA sidecar-header phase-space format".to_string(),
                extension: ".IAEAphsp".to_string(),
                allow_numeric_suffix: false,
            },
            Box::new(iaea_reader_factory),
            Box::new(iaea_writer_factory),
        );
        let _ = self.register(
            SupportedFormat {
                name: "EGS".to_string(),
                description: "EGS MODE0/MODE2 phase-space format".to_string(),
                extension: ".egsphsp".to_string(),
                allow_numeric_suffix: true,
            },
            Box::new(egs_reader_factory),
            Box::new(egs_writer_factory),
        );
        let _ = self.register(
            SupportedFormat {
                name: "TOPAS".to_string(),
                description: "TOPAS BINARY/ASCII/LIMITED phase-space format".to_string(),
                extension: ".phsp".to_string(),
                allow_numeric_suffix: false,
            },
            Box::new(topas_reader_factory),
            Box::new(topas_writer_factory),
        );
        let _ = self.register(
            SupportedFormat {
                name: "penEasy".to_string(),
                description: "penEasy ASCII phase-space format".to_string(),
                extension: ".dat".to_string(),
                allow_numeric_suffix: false,
            },
            Box::new(peneasy_reader_factory),
            Box::new(peneasy_writer_factory),
        );
    }

    /// Every format whose extension (optionally with a numeric suffix) matches `ext`.
    pub fn formats_for_extension(&self, ext: &str) -> Vec<SupportedFormat> {
        let ext_lower = ext.to_ascii_lowercase();
        let inner = self.inner.lock().expect("registry mutex poisoned");
        inner
            .formats
            .iter()
            .filter(|f| {
                let fmt_ext = f.extension.to_ascii_lowercase();
                if ext_lower == fmt_ext {
                    return true;
                }
                f.allow_numeric_suffix
                    && ext_lower.starts_with(&fmt_ext)
                    && ext_lower[fmt_ext.len()..].chars().all(|c| c.is_ascii_digit())
                    && ext_lower.len() > fmt_ext.len()
            })
            .cloned()
            .collect()
    }

    fn extension_of(path: &Path) -> String {
        path.extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default()
    }

    /// Resolves a reader by `path`'s extension.
    pub fn create_reader(&self, path: &Path, options: &ReaderOptions) -> Result<Box<dyn ParticleSource>> {
        let ext = Self::extension_of(path);
        let candidates = self.formats_for_extension(&ext);
        match candidates.len() {
            0 => Err(Error::UnknownFormat(ext)),
            1 => self.create_reader_named(&candidates[0].name, path, options),
            _ => Err(Error::AmbiguousFormat(
                ext,
                candidates.into_iter().map(|f| f.name).collect(),
            )),
        }
    }

    /// Resolves a reader by explicit format name.
    pub fn create_reader_named(
        &self,
        name: &str,
        path: &Path,
        options: &ReaderOptions,
    ) -> Result<Box<dyn ParticleSource>> {
        let inner = self.inner.lock().expect("registry mutex poisoned");
        let factory = inner.readers.get(name).ok_or_else(|| Error::UnknownFormat(name.to_string()))?;
        factory(path, options)
    }

    /// Resolves a writer by `path`'s extension.
    pub fn create_writer(
        &self,
        path: &Path,
        options: &WriterOptions,
        fixed_values: FixedValues,
    ) -> Result<Box<dyn ParticleSink>> {
        let ext = Self::extension_of(path);
        let candidates = self.formats_for_extension(&ext);
        match candidates.len() {
            0 => Err(Error::UnknownFormat(ext)),
            1 => self.create_writer_named(&candidates[0].name, path, options, fixed_values),
            _ => Err(Error::AmbiguousFormat(
                ext,
                candidates.into_iter().map(|f| f.name).collect(),
            )),
        }
    }

    /// Resolves a writer by explicit format name.
    pub fn create_writer_named(
        &self,
        name: &str,
        path: &Path,
        options: &WriterOptions,
        fixed_values: FixedValues,
    ) -> Result<Box<dyn ParticleSink>> {
        let inner = self.inner.lock().expect("registry mutex poisoned");
        let factory = inner.writers.get(name).ok_or_else(|| Error::UnknownFormat(name.to_string()))?;
        factory(path, options, fixed_values)
    }

    /// All registered formats, in registration order.
    pub fn supported_formats(&self) -> Vec<SupportedFormat> {
        self.inner.lock().expect("registry mutex poisoned").formats.clone()
    }
}

fn stem_with_new_extension(path: &Path, ext: &str) -> PathBuf {
    path.with_extension(ext.trim_start_matches('.'))
}

fn iaea_reader_factory(path: &Path, _options: &ReaderOptions) -> Result<Box<dyn ParticleSource>> {
    let header_path = stem_with_new_extension(path, "IAEAheader");
    let header = IaeaHeader::from_path(header_path)?;
    let codec = IaeaReaderCodec::new(header);
    let file = BufReader::new(File::open(path)?);
    let reader = Reader::new(file, codec)?;
    Ok(Box::new(reader))
}

fn iaea_writer_factory(
    path: &Path,
    options: &WriterOptions,
    fixed_values: FixedValues,
) -> Result<Box<dyn ParticleSink>> {
    let header_path = stem_with_new_extension(path, "IAEAheader");
    let codec = IaeaWriterCodec::new(header_path, options.iaea.clone().unwrap_or_default(), fixed_values);
    let file = BufWriter::new(File::create(path)?);
    let writer = Writer::new(file, codec, fixed_values)?;
    Ok(Box::new(writer))
}

fn egs_reader_factory(path: &Path, options: &ReaderOptions) -> Result<Box<dyn ParticleSource>> {
    use std::io::Read;
    let mut tag = [0u8; 5];
    let mut probe = File::open(path)?;
    probe.read_exact(&mut tag).map_err(|_| Error::InvalidFormat("EGS file shorter than its header".to_string()))?;
    let record_length = match &tag {
        b"MODE0" => 28,
        b"MODE2" => 32,
        _ => return Err(Error::InvalidFormat(format!("unrecognized EGS mode tag {:?}", String::from_utf8_lossy(&tag)))),
    };
    let mut header_bytes = vec![0u8; record_length];
    header_bytes[..5].copy_from_slice(&tag);
    probe
        .read_exact(&mut header_bytes[5..])
        .map_err(|_| Error::InvalidFormat("EGS file shorter than its header".to_string()))?;
    let header = EgsHeader::parse(&header_bytes, options.egs_constant_z)?;
    let mut codec = EgsReaderCodec::new(
        header,
        options.egs_latch_interpretation.unwrap_or(LatchInterpretation::InferSecondary),
    );
    if options.egs_recompute_particle_count {
        let file_size = std::fs::metadata(path)?.len();
        codec.recompute_particle_count(file_size);
    }
    let file = BufReader::new(File::open(path)?);
    let reader = Reader::new(file, codec)?;
    Ok(Box::new(reader))
}

fn egs_writer_factory(
    path: &Path,
    options: &WriterOptions,
    fixed_values: FixedValues,
) -> Result<Box<dyn ParticleSink>> {
    let mode = if path.to_string_lossy().ends_with("2") {
        crate::reader::egs::EgsMode::Mode2
    } else {
        crate::reader::egs::EgsMode::Mode0
    };
    let codec = EgsWriterCodec::new(mode, options.egs_constant_z);
    let file = BufWriter::new(File::create(path)?);
    let writer = Writer::new(file, codec, fixed_values)?;
    Ok(Box::new(writer))
}

fn topas_reader_factory(path: &Path, _options: &ReaderOptions) -> Result<Box<dyn ParticleSource>> {
    let header_path = stem_with_new_extension(path, "header");
    let header = TopasHeader::from_path(header_path)?;
    let codec = TopasReaderCodec::new(header);
    let file = BufReader::new(File::open(path)?);
    let reader = Reader::new(file, codec)?;
    Ok(Box::new(reader))
}

fn topas_writer_factory(
    path: &Path,
    options: &WriterOptions,
    fixed_values: FixedValues,
) -> Result<Box<dyn ParticleSink>> {
    let header_path = stem_with_new_extension(path, "header");
    let variant = options.topas_variant.unwrap_or(TopasVariant::Binary);
    let codec = TopasWriterCodec::new(variant, header_path);
    let file = BufWriter::new(File::create(path)?);
    let writer = Writer::new(file, codec, fixed_values)?;
    Ok(Box::new(writer))
}

fn peneasy_reader_factory(path: &Path, _options: &ReaderOptions) -> Result<Box<dyn ParticleSource>> {
    let header = PenEasyHeader::from_path(path)?;
    let codec = PenEasyReaderCodec::new(header);
    let file = BufReader::new(File::open(path)?);
    let reader = Reader::new(file, codec)?;
    Ok(Box::new(reader))
}

fn peneasy_writer_factory(
    path: &Path,
    _options: &WriterOptions,
    fixed_values: FixedValues,
) -> Result<Box<dyn ParticleSink>> {
    let codec = PenEasyWriterCodec;
    let file = BufWriter::new(File::create(path)?);
    let writer = Writer::new(file, codec, fixed_values)?;
    Ok(Box::new(writer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_format_name_fails() {
        let registry = FormatRegistry::new();
        registry.register_standard_formats();
        let result = registry.register(
            SupportedFormat {
                name: "IAEA".to_string(),
                description: "duplicate".to_string(),
                extension: ".whatever".to_string(),
                allow_numeric_suffix: false,
            },
            Box::new(iaea_reader_factory),
            Box::new(iaea_writer_factory),
        );
        assert!(matches!(result, Err(Error::DuplicateFormat(_))));
    }

    #[test]
    fn unknown_extension_fails() {
        let registry = FormatRegistry::new();
        registry.register_standard_formats();
        let result = registry.create_reader(Path::new("foo.unknown"), &ReaderOptions::default());
        assert!(matches!(result, Err(Error::UnknownFormat(_))));
    }

    #[test]
    fn numeric_suffix_matches_egs_extension() {
        let registry = FormatRegistry::new();
        registry.register_standard_formats();
        let matches = registry.formats_for_extension(".egsphsp1");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "EGS");
    }

    #[test]
    fn ambiguous_extension_reports_both_candidates() {
        let registry = FormatRegistry::new();
        registry.register_standard_formats();
        let _ = registry.register(
            SupportedFormat {
                name: "SECOND".to_string(),
                description: "second codec sharing IAEA's extension".to_string(),
                extension: ".IAEAphsp".to_string(),
                allow_numeric_suffix: false,
            },
            Box::new(iaea_reader_factory),
            Box::new(iaea_writer_factory),
        );
        let result = registry.create_reader(Path::new("foo.IAEAphsp"), &ReaderOptions::default());
        assert!(matches!(result, Err(Error::AmbiguousFormat(_, _))));
    }
}
