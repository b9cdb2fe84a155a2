//! Error handling for create-express-api.
//! Defines the error taxonomy shared by every module: fatal validation and
//! resolution failures, external process failures, and user cancellation.

use std::io;
use thiserror::Error;

/// All fatal conditions the scaffolder can surface.
///
/// Parse-level anomalies (unknown or malformed flags) are deliberately *not*
/// represented here: the argument parser never fails, it collects them as
/// warnings instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Template substitution failed.
    #[error("Template error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    /// Context serialization failed.
    #[error("Serialization error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),

    /// Building the database connection string failed.
    #[error("Database URL error: {0}")]
    UrlError(#[from] url::ParseError),

    /// User-supplied input failed validation (e.g. bad project name).
    #[error("{0}")]
    ValidationError(String),

    /// The target directory is unsafe to write into.
    #[error("{0}")]
    TargetDirError(String),

    /// The templates directory could not be located at all. This indicates a
    /// broken installation rather than user error.
    #[error("Unable to locate templates directory.")]
    TemplatesDirNotFound,

    /// A resolved template root does not exist on disk. Also an installation
    /// defect, never user error.
    #[error("Template root not found: {path}")]
    TemplateRootNotFound { path: String },

    /// A required external tool is not available on PATH.
    #[error("{hint}")]
    MissingCommand { command: String, hint: String },

    /// An external process exited with a non-zero status.
    #[error("Command `{command}` failed with {status}")]
    CommandFailed { command: String, status: String },

    /// Interactive prompt machinery failed.
    #[error("Prompt error: {0}")]
    PromptError(String),

    /// The user cancelled an interactive prompt. Reported as a notice, not an
    /// error message.
    #[error("Cancelled by user.")]
    Cancelled,
}

/// Convenience type alias for Results with this crate's Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler: prints the error and exits with status code 1.
///
/// Cancellation is printed as a yellow notice instead of a red error, but
/// still exits non-zero.
pub fn default_error_handler(err: Error) -> ! {
    match err {
        Error::Cancelled => {
            eprintln!("{}", console::style("Cancelled by user.").yellow());
        }
        err => {
            eprintln!("{}", console::style(format!("Error: {err}")).red());
        }
    }
    std::process::exit(1);
}
