//! Error handling for the Chisel application.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for Chisel operations.
///
/// This enum represents all possible errors that can occur within the Chisel
/// application. It implements the standard Error trait through thiserror's
/// derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents a missing or unreadable template resource
    #[error("Template '{name}' could not be loaded: {source}.")]
    TemplateLoadError { name: String, source: io::Error },

    /// Represents a destination container that does not resolve to a directory
    #[error("Container '{container}' does not exist.")]
    ContainerNotFoundError { container: String },

    /// Represents a failed create or overwrite of a generated file
    #[error("Failed to write '{path}': {source}.")]
    FileWriteError { path: PathBuf, source: io::Error },

    /// Represents an invalid generation request
    #[error("Invalid request: {0}.")]
    RequestError(String),
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
