use std::io;

use kits::error::{exit_code, Error};

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: Error = json_err.into();
    assert!(matches!(err, Error::ManifestError(_)));
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::LayerNotFound {
        layer: "vitest".to_string(),
        template_root: "/templates".to_string(),
    };
    assert_eq!(err.to_string(), "Template layer 'vitest' not found in /templates.");
}

#[test]
fn test_exit_codes() {
    assert_eq!(exit_code(&Error::UserCancelled), 0);
    assert_eq!(exit_code(&Error::ValidationError("empty".to_string())), 1);
    assert_eq!(exit_code(&Error::IoError(io::Error::other("disk full"))), 1);
}
