//! Scenario E6: format resolution failure modes — unknown extension,
//! ambiguous extension across two registered formats, duplicate registration.

use phsp::error::Error;
use phsp::registry::{FormatRegistry, ReaderOptions};
use std::path::Path;

#[test]
fn unknown_extension_is_rejected() {
    let registry = FormatRegistry::global();
    let err = registry
        .create_reader(Path::new("particles.nope"), &ReaderOptions::default())
        .unwrap_err();
    assert!(matches!(err, Error::UnknownFormat(_)));
}

#[test]
fn duplicate_format_name_is_rejected() {
    let registry = FormatRegistry::global();
    registry.register_standard_formats();
    let err = registry
        .register(
            phsp::registry::SupportedFormat {
                name: "IAEA".to_string(),
                description: "duplicate".to_string(),
                extension: ".somethingelse".to_string(),
                allow_numeric_suffix: false,
            },
            Box::new(|_path, _options| Err(Error::UnknownFormat("unreachable".to_string()))),
            Box::new(|_path, _options, _fixed| Err(Error::UnknownFormat("unreachable".to_string()))),
        )
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateFormat(name) if name == "IAEA"));
}

#[test]
fn ambiguous_extension_across_two_formats_is_rejected() {
    let registry = FormatRegistry::global();
    registry.register_standard_formats();
    let _ = registry.register(
        phsp::registry::SupportedFormat {
            name: "CustomDat".to_string(),
            description: "shares the penEasy extension".to_string(),
            extension: ".dat".to_string(),
            allow_numeric_suffix: false,
        },
        Box::new(|_path, _options| Err(Error::UnknownFormat("unreachable".to_string()))),
        Box::new(|_path, _options, _fixed| Err(Error::UnknownFormat("unreachable".to_string()))),
    );
    let err = registry
        .create_reader(Path::new("particles.dat"), &ReaderOptions::default())
        .unwrap_err();
    assert!(matches!(err, Error::AmbiguousFormat(ext, _) if ext == ".dat"));
}
