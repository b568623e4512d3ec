//! Common constants used throughout the Chisel application.

/// Extension of the generated declaration file
pub const DECLARATION_EXT: &str = "h";

/// Extension of the generated definition file
pub const DEFINITION_EXT: &str = "cpp";

/// Template file names, looked up in an external template directory
pub const DECLARATION_TEMPLATE_FILE: &str = "subsystem.h.tmpl";
pub const DEFINITION_TEMPLATE_FILE: &str = "subsystem.cpp.tmpl";

/// Prefix prepended to overrideable member declarations
pub const VIRTUAL_PREFIX: &str = "virtual ";
