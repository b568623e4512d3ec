//! Storage collaborator for Chisel.
//! Resolves container paths and materializes generated files with
//! create-or-replace semantics.

use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Trait for the destination storage of generated files.
pub trait Workspace {
    /// Resolves a slash-separated container path to an existing directory.
    ///
    /// # Errors
    /// * `Error::ContainerNotFoundError` if the path does not resolve to
    ///   an existing directory
    fn resolve(&self, container: &str) -> Result<PathBuf>;

    /// Returns whether a file with the given name exists in the container.
    fn exists(&self, container: &Path, file_name: &str) -> bool;

    /// Creates a new file in the container with the given content.
    fn create_file(&self, container: &Path, file_name: &str, content: &str)
        -> Result<PathBuf>;

    /// Replaces the full contents of an existing file in the container.
    fn overwrite_file(&self, container: &Path, file_name: &str, content: &str)
        -> Result<PathBuf>;
}

/// Workspace backed by the local filesystem, rooted at a base directory.
pub struct LocalWorkspace {
    root: PathBuf,
}

impl LocalWorkspace {
    /// Creates a new LocalWorkspace instance.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    fn write(&self, container: &Path, file_name: &str, content: &str) -> Result<PathBuf> {
        let path = container.join(file_name);
        fs::write(&path, content)
            .map_err(|source| Error::FileWriteError { path: path.clone(), source })?;
        Ok(path)
    }
}

impl Workspace for LocalWorkspace {
    fn resolve(&self, container: &str) -> Result<PathBuf> {
        let path = if Path::new(container).is_absolute() {
            PathBuf::from(container)
        } else {
            self.root.join(container)
        };

        if !path.is_dir() {
            return Err(Error::ContainerNotFoundError {
                container: container.to_string(),
            });
        }

        Ok(path)
    }

    fn exists(&self, container: &Path, file_name: &str) -> bool {
        container.join(file_name).exists()
    }

    fn create_file(&self, container: &Path, file_name: &str, content: &str)
        -> Result<PathBuf> {
        debug!("Creating file '{}' in '{}'.", file_name, container.display());
        self.write(container, file_name, content)
    }

    fn overwrite_file(&self, container: &Path, file_name: &str, content: &str)
        -> Result<PathBuf> {
        debug!("Replacing contents of '{}' in '{}'.", file_name, container.display());
        self.write(container, file_name, content)
    }
}
