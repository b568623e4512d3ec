//! File-ready notification for Chisel.
//! An embedding host would open an editor on each generated file; the CLI
//! stand-in announces the path instead. Notification is best-effort and
//! never affects the result of a generation run.

use std::path::Path;

/// Trait for the fire-and-forget "file is ready for editing" signal.
pub trait FileReadySink {
    /// Called once per written file, after all writes have completed.
    fn file_ready(&self, path: &Path);
}

/// Sink that announces ready files on stdout.
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    /// Creates a new ConsoleNotifier instance.
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        ConsoleNotifier::new()
    }
}

impl FileReadySink for ConsoleNotifier {
    fn file_ready(&self, path: &Path) {
        println!("ready for editing: '{}'", path.display());
    }
}
