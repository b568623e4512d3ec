//! Chisel is a scaffolding generator for C++ subsystem skeletons.
//! It renders a declaration file and an optional definition file from
//! literal `${TOKEN}` templates and materializes them in a target
//! container directory with create-or-replace semantics.

/// Command-line interface module for the Chisel application
pub mod cli;

/// Common constants: file extensions, template names, the virtual prefix
pub mod constants;

/// Error types and handling for the Chisel application
pub mod error;

/// Core generation orchestration
/// Combines store, renderer and workspace to produce the output files
pub mod generator;

/// Logger configuration
pub mod logger;

/// Fire-and-forget "file is ready for editing" notification
pub mod notify;

/// Progress reporting and cancellation polling
pub mod progress;

/// Literal placeholder rendering
/// Handles the actual `${TOKEN}` substitution logic
pub mod render;

/// Template storage
/// Holds the builtin or externally loaded template texts
pub mod template;

/// Destination storage collaborator
/// Resolves containers and writes the generated files
pub mod workspace;
