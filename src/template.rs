//! Template storage for Chisel.
//! Holds the two immutable template texts the generator renders from,
//! either the builtin ones shipped with the binary or a pair loaded
//! from an external template directory.

use crate::constants::{DECLARATION_TEMPLATE_FILE, DEFINITION_TEMPLATE_FILE};
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Builtin template texts, embedded at compile time.
const BUILTIN_DECLARATION: &str = include_str!("../templates/subsystem.h.tmpl");
const BUILTIN_DEFINITION: &str = include_str!("../templates/subsystem.cpp.tmpl");

/// The two kinds of templates the store holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// Template of the generated header file
    Declaration,
    /// Template of the generated implementation file
    Definition,
}

/// Immutable pair of template texts, loaded once per process.
#[derive(Debug)]
pub struct TemplateStore {
    declaration: String,
    definition: String,
}

impl TemplateStore {
    /// Creates a store backed by the templates embedded in the binary.
    pub fn builtin() -> Self {
        Self {
            declaration: BUILTIN_DECLARATION.to_string(),
            definition: BUILTIN_DEFINITION.to_string(),
        }
    }

    /// Creates a store by reading both template files from a directory.
    ///
    /// # Arguments
    /// * `template_dir` - Directory containing the two template files
    ///
    /// # Errors
    /// * `Error::TemplateLoadError` if either file is missing or unreadable
    pub fn load_from<P: AsRef<Path>>(template_dir: P) -> Result<Self> {
        let template_dir = template_dir.as_ref();
        let declaration = read_template(template_dir, DECLARATION_TEMPLATE_FILE)?;
        let definition = read_template(template_dir, DEFINITION_TEMPLATE_FILE)?;
        Ok(Self { declaration, definition })
    }

    /// Returns the same immutable template text on every call.
    pub fn get(&self, kind: TemplateKind) -> &str {
        match kind {
            TemplateKind::Declaration => &self.declaration,
            TemplateKind::Definition => &self.definition,
        }
    }
}

impl Default for TemplateStore {
    fn default() -> Self {
        TemplateStore::builtin()
    }
}

fn read_template(template_dir: &Path, name: &str) -> Result<String> {
    let path = template_dir.join(name);
    debug!("Loading template from '{}'.", path.display());
    fs::read_to_string(&path)
        .map_err(|source| Error::TemplateLoadError { name: name.to_string(), source })
}
