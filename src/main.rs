//! Chisel's main application entry point and orchestration logic.
//! Handles command-line argument parsing and wires the template store,
//! workspace, progress monitor and notification sink into one generation run.

use chisel::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    generator::{Generator, Outcome},
    logger::init_logger,
    notify::ConsoleNotifier,
    progress::LogProgress,
    template::TemplateStore,
    workspace::LocalWorkspace,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Builds the template store (builtin or from `--templates`)
/// 2. Builds the generation request (arguments or `--request` file)
/// 3. Runs the generator against the local filesystem workspace
/// 4. Reports the written files or the cancelled outcome
fn run(args: Args) -> Result<()> {
    let store = match &args.templates {
        Some(template_dir) => TemplateStore::load_from(template_dir)?,
        None => TemplateStore::builtin(),
    };
    let request = args.to_request()?;

    let workspace = LocalWorkspace::new(std::env::current_dir().unwrap_or_default());
    let monitor = LogProgress::new();
    let notifier = ConsoleNotifier::new();

    let generator = Generator::new(&store, &workspace, &monitor, &notifier);

    match generator.generate(&request)? {
        Outcome::Completed(written) => {
            for path in &written {
                println!("generated: '{}'", path.display());
            }
            println!(
                "Subsystem '{}' generated successfully in '{}'.",
                request.name, request.container
            );
        }
        Outcome::Cancelled(written) => {
            println!(
                "Generation cancelled; {} file(s) had already been written.",
                written.len()
            );
        }
    }

    Ok(())
}
