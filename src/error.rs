//! Error handling for the kits scaffolder.
//! Defines the error type and result alias used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for kits operations.
///
/// Everything inside the scaffolding core is either deterministic merge logic or a fatal
/// failure; the only error that is not fatal is [`Error::UserCancelled`].
#[derive(Error, Debug)]
pub enum Error {
    /// An interactive prompt returned the cancellation sentinel.
    #[error("Operation cancelled.")]
    UserCancelled,

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// A manifest or reference document could not be parsed or serialized
    #[error("Manifest error: {0}.")]
    ManifestError(#[from] serde_json::Error),

    /// Represents errors that occur while rendering placeholder files
    #[error("Template rendering error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents validation failures in user input
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// A feature identifier outside of the known option set
    #[error("Unknown feature '{feature}'. Expected one of: {expected}.")]
    InvalidFeature { feature: String, expected: String },

    /// A template layer directory is missing from the template root
    #[error("Template layer '{layer}' not found in {template_root}.")]
    LayerNotFound { layer: String, template_root: String },

    /// The target directory is not empty and overwriting was not confirmed
    #[error("Target directory '{target_dir}' is not empty. Confirm overwrite to continue.")]
    OverwriteNotConfirmed { target_dir: String },
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::ConfigError(err.to_string())
    }
}

impl From<globset::Error> for Error {
    fn from(err: globset::Error) -> Self {
        Error::ConfigError(format!("invalid ignore pattern: {err}"))
    }
}

/// Process exit code associated with an error.
///
/// Cancellation is a normal way to stop and exits with 0.
pub fn exit_code(err: &Error) -> i32 {
    match err {
        Error::UserCancelled => 0,
        _ => 1,
    }
}

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints a cancellation notice for [`Error::UserCancelled`] and exits with status code 0,
/// otherwise prints the error message to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) -> ! {
    match err {
        Error::UserCancelled => {
            println!("{} {}", console::style("✖").red(), err);
        }
        _ => {
            log::debug!("{:?}", err);
            eprintln!("{}", err);
        }
    }
    std::process::exit(exit_code(&err));
}
