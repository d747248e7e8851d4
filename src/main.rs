//! gowizard's main application entry point and orchestration logic.
//! Handles command-line argument parsing, configuration resolution and
//! dispatch among the three modes of operation.

use log::{debug, warn};

use gowizard::{
    cli::{get_args, listings, Args},
    config::{validate, Mode},
    error::{default_error_handler, Error, Result},
    logger::init_logger,
    processor::{data_dir, Materializer, SystemRunner},
    prompt::{prompt, DialoguerPrompter},
    readme::read_project_readme,
    user_config::{load_user_defaults, user_config_path, write_user_defaults},
};

/// Main application entry point.
fn main() {
    let args = match get_args() {
        Ok(args) => args,
        Err(err) => default_error_handler(err),
    };
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Prints the registries when a listing flag is given
/// 2. Builds the configuration from the flags and the user defaults
/// 3. In add-program mode, reads project name and year from the Readme
/// 4. Validates, prompting first when `-i` is given
/// 5. Writes the user defaults, or materializes the project
fn run(args: Args) -> Result<()> {
    if args.is_listing() {
        print!("{}", listings(&args));
        return Ok(());
    }

    let mode = args.mode()?;
    let mut config = args.to_config(mode);
    let cwd = std::env::current_dir().map_err(|e| Error::io(".", e))?;

    match user_config_path() {
        Ok(path) => load_user_defaults(&mut config, path)?,
        Err(Error::HomeNotSet) if mode != Mode::WriteUserConfig => {
            warn!("$HOME is not set; user defaults are not loaded")
        }
        Err(err) => return Err(err),
    }

    if mode == Mode::AddProgram {
        let info = read_project_readme(&cwd)?;
        debug!("Adding a program to project '{}'", info.project);
        if info.year.is_none() {
            warn!("no copyright year found in the Readme; using the current year");
        }
        config.project = info.project;
        config.year = info.year;
    }

    config.normalize();
    config.resolve_program();
    validate(&config, mode, args.interactive)?;
    if args.interactive {
        prompt(&mut config, mode, &DialoguerPrompter::new())?;
        config.normalize();
        validate(&config, mode, false)?;
    }

    match mode {
        Mode::WriteUserConfig => write_user_defaults(&config, user_config_path()?),
        Mode::AddProgram | Mode::NewProject => {
            let runner = SystemRunner;
            let root = Materializer::new(&config, &cwd, data_dir(), &runner).create()?;
            println!("Created '{}'", root.strip_prefix(&cwd).unwrap_or(&root).display());
            Ok(())
        }
    }
}
