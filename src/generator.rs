//! Core generation orchestration for Chisel.
//! Renders the declaration and optional definition templates for one
//! request and materializes them through the workspace collaborator.

use crate::constants::{DECLARATION_EXT, DEFINITION_EXT};
use crate::error::{Error, Result};
use crate::notify::FileReadySink;
use crate::progress::ProgressMonitor;
use crate::render::{declaration_bindings, definition_bindings, render};
use crate::template::{TemplateKind, TemplateStore};
use crate::workspace::Workspace;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// One immutable request to generate a subsystem skeleton.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    /// Slash-separated path to an existing container directory
    pub container: String,
    /// File stem and symbol name of the generated subsystem
    pub name: String,
    /// Whether to generate the definition file as well
    #[serde(default)]
    pub include_definition: bool,
    /// Whether generated members should drop the `virtual ` prefix
    #[serde(default)]
    pub non_overrideable: bool,
}

/// Result of one generation run.
///
/// Cancellation is an outcome, not an error: the paths written before the
/// cancellation point remain on disk and are reported back.
#[derive(Debug)]
pub enum Outcome {
    /// All requested files were written, in declaration-first order
    Completed(Vec<PathBuf>),
    /// The caller cancelled the run; holds the files written so far
    Cancelled(Vec<PathBuf>),
}

impl Outcome {
    /// Paths written during the run, regardless of outcome.
    pub fn written(&self) -> &[PathBuf] {
        match self {
            Outcome::Completed(paths) | Outcome::Cancelled(paths) => paths,
        }
    }
}

/// Orchestrates template rendering and file materialization for one request.
pub struct Generator<'a> {
    store: &'a TemplateStore,
    workspace: &'a dyn Workspace,
    monitor: &'a dyn ProgressMonitor,
    notifier: &'a dyn FileReadySink,
}

impl<'a> Generator<'a> {
    /// Creates a new Generator instance over the given collaborators.
    pub fn new(
        store: &'a TemplateStore,
        workspace: &'a dyn Workspace,
        monitor: &'a dyn ProgressMonitor,
        notifier: &'a dyn FileReadySink,
    ) -> Self {
        Self { store, workspace, monitor, notifier }
    }

    /// Runs one generation request.
    ///
    /// # Flow
    /// 1. Resolves the container directory
    /// 2. Renders the declaration, and the definition when requested,
    ///    before any file I/O
    /// 3. Writes each file with create-or-replace semantics, polling for
    ///    cancellation before each write
    /// 4. Notifies the file-ready sink once per written file
    ///
    /// # Returns
    /// * `Result<Outcome>` - Written paths in declaration-first order, or
    ///   the cancelled outcome with the paths written so far
    ///
    /// # Errors
    /// * `Error::RequestError` if the request name is empty
    /// * `Error::ContainerNotFoundError` if the container does not resolve
    /// * `Error::FileWriteError` if a write fails; earlier files remain
    pub fn generate(&self, req: &GenerationRequest) -> Result<Outcome> {
        if req.name.is_empty() {
            return Err(Error::RequestError("name must not be empty".to_string()));
        }

        let container = self.workspace.resolve(&req.container)?;
        let task = format!("Creating {}", req.name);
        self.monitor.report(0, &task);

        let declaration = render(
            self.store.get(TemplateKind::Declaration),
            &declaration_bindings(&req.name, req.non_overrideable),
        );
        let definition = req.include_definition.then(|| {
            render(self.store.get(TemplateKind::Definition), &definition_bindings(&req.name))
        });

        let mut written = Vec::new();

        if self.monitor.is_cancelled() {
            debug!("Generation cancelled before declaration write.");
            return Ok(Outcome::Cancelled(written));
        }
        let file_name = format!("{}.{}", req.name, DECLARATION_EXT);
        written.push(self.materialize(&container, &file_name, &declaration)?);
        self.monitor.report(written.len(), &task);

        if let Some(definition) = definition {
            if self.monitor.is_cancelled() {
                debug!("Generation cancelled before definition write.");
                return Ok(Outcome::Cancelled(written));
            }
            let file_name = format!("{}.{}", req.name, DEFINITION_EXT);
            written.push(self.materialize(&container, &file_name, &definition)?);
            self.monitor.report(written.len(), &task);
        }

        self.monitor.report(written.len(), "Opening files for editing...");
        for path in &written {
            self.notifier.file_ready(path);
        }

        Ok(Outcome::Completed(written))
    }

    fn materialize(&self, container: &Path, file_name: &str, content: &str)
        -> Result<PathBuf> {
        if self.workspace.exists(container, file_name) {
            self.workspace.overwrite_file(container, file_name, content)
        } else {
            self.workspace.create_file(container, file_name, content)
        }
    }
}
