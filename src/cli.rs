//! Command-line interface implementation for Chisel.
//! Provides argument parsing and help text formatting using clap.

use crate::error::{Error, Result};
use crate::generator::GenerationRequest;
use clap::{error::ErrorKind, CommandFactory, Parser};
use std::fs;
use std::path::PathBuf;

/// Command-line arguments structure for Chisel.
#[derive(Parser, Debug)]
#[command(author, version, about = "Chisel: C++ subsystem scaffolding tool", long_about = None)]
pub struct Args {
    /// Directory the generated files are placed in
    #[arg(value_name = "CONTAINER", required_unless_present = "request")]
    pub container: Option<String>,

    /// Subsystem name, used as file stem and symbol name
    #[arg(value_name = "NAME", required_unless_present = "request")]
    pub name: Option<String>,

    /// Generate the definition (.cpp) file alongside the declaration
    #[arg(short, long)]
    pub definition: bool,

    /// Drop the `virtual ` prefix from generated member declarations
    #[arg(long)]
    pub non_overrideable: bool,

    /// Read the generation request from a JSON file instead of arguments
    #[arg(short, long, value_name = "FILE", conflicts_with_all = ["container", "name"])]
    pub request: Option<PathBuf>,

    /// Directory with replacement template files
    #[arg(short, long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Builds the generation request from the parsed arguments.
    ///
    /// # Returns
    /// * `Result<GenerationRequest>` - Request from positional arguments,
    ///   or deserialized from the `--request` JSON file
    ///
    /// # Errors
    /// * `Error::RequestError` if the request file is unreadable or invalid
    pub fn to_request(&self) -> Result<GenerationRequest> {
        if let Some(request_file) = &self.request {
            let content = fs::read_to_string(request_file).map_err(|e| {
                Error::RequestError(format!(
                    "cannot read '{}': {}",
                    request_file.display(),
                    e
                ))
            })?;
            return serde_json::from_str(&content)
                .map_err(|e| Error::RequestError(format!("invalid request file: {}", e)));
        }

        // Both positionals are enforced by clap when --request is absent.
        Ok(GenerationRequest {
            container: self.container.clone().unwrap_or_default(),
            name: self.name.clone().unwrap_or_default(),
            include_definition: self.definition,
            non_overrideable: self.non_overrideable,
        })
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
