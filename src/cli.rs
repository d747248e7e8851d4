//! Command-line interface implementation for gowizard.
//! Provides argument parsing, usage text and registry listings using clap.
//!
//! Flags are spelled Go-style with a single dash (`-type=pkg`, `-lt`);
//! `normalize_args` rewrites them to clap's double-dash form first.

use std::ffi::OsString;

use clap::Parser;

use crate::config::{Config, Mode};
use crate::error::{Error, Result};
use crate::registry::{License, ProjectType, Vcs};

/// Usage printed on usage errors.
pub const USAGE: &str = "\
Usage: gowizard -i [-cfg | -add]
 * Configuration: -cfg -author -email -license -vcs [-org]
 * Project:       -type -project -license -author -email -vcs [-org -program]
 * Program:       -add -type -program -license

 -lt  list the project types
 -ll  list the licenses
 -lv  list the version control systems";

/// Long flags accepted with a single leading dash.
const LONG_FLAGS: [&str; 15] = [
    "type", "project", "program", "license", "author", "email", "vcs", "org", "add", "cfg",
    "lt", "ll", "lv", "verbose", "help",
];

/// Command-line arguments structure for gowizard.
#[derive(Parser, Debug, Default)]
#[command(
    name = "gowizard",
    version,
    about = "gowizard: create the layout of a new Go project",
    override_usage = "gowizard -i [-cfg | -add] [FLAGS]",
    long_about = None
)]
pub struct Args {
    /// Kind of project
    #[arg(long = "type", value_name = "TYPE", default_value = "")]
    pub project_type: String,

    /// Name of the project
    #[arg(long, default_value = "")]
    pub project: String,

    /// Name of the program; derived from the project name when empty
    #[arg(long, default_value = "")]
    pub program: String,

    /// License of the project
    #[arg(long, default_value = "")]
    pub license: String,

    /// Name of the author
    #[arg(long, default_value = "")]
    pub author: String,

    /// Email of the author
    #[arg(long, default_value = "")]
    pub email: String,

    /// Version control system
    #[arg(long, default_value = "")]
    pub vcs: String,

    /// Organization holding the copyright
    #[arg(long, default_value = "")]
    pub org: String,

    /// Add a program to the project in the current directory
    #[arg(long)]
    pub add: bool,

    /// Write the user configuration file
    #[arg(long)]
    pub cfg: bool,

    /// Prompt for the values not given
    #[arg(short = 'i')]
    pub interactive: bool,

    /// List the project types
    #[arg(long = "lt")]
    pub list_types: bool,

    /// List the licenses
    #[arg(long = "ll")]
    pub list_licenses: bool,

    /// List the version control systems
    #[arg(long = "lv")]
    pub list_vcs: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Mode selected by `-cfg` and `-add`.
    ///
    /// # Errors
    /// * `Error::Usage` if both are given
    pub fn mode(&self) -> Result<Mode> {
        match (self.cfg, self.add) {
            (true, true) => Err(Error::Usage("-cfg and -add are mutually exclusive".to_string())),
            (true, false) => Ok(Mode::WriteUserConfig),
            (false, true) => Ok(Mode::AddProgram),
            (false, false) => Ok(Mode::NewProject),
        }
    }

    /// Whether one of the registry listing flags was given.
    pub fn is_listing(&self) -> bool {
        self.list_types || self.list_licenses || self.list_vcs
    }

    /// Configuration populated from the flags.
    pub fn to_config(&self, mode: Mode) -> Config {
        Config {
            project_type: self.project_type.clone(),
            project: self.project.clone(),
            program: self.program.clone(),
            license: self.license.clone(),
            author: self.author.clone(),
            email: self.email.clone(),
            vcs: self.vcs.clone(),
            org: self.org.clone(),
            import_paths: Vec::new(),
            year: None,
            is_new_project: mode == Mode::NewProject,
        }
    }
}

/// Rewrites Go-style single-dash long flags (`-type=pkg`) into the
/// double-dash form understood by clap. Anything else is left untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let Some(text) = arg.to_str() else {
                return arg;
            };
            let Some(flag) = text.strip_prefix('-').filter(|f| !f.starts_with('-')) else {
                return arg;
            };
            let name = flag.split('=').next().unwrap_or_default();
            if LONG_FLAGS.contains(&name) {
                OsString::from(format!("-{text}"))
            } else {
                arg
            }
        })
        .collect()
}

/// Parses the process arguments.
///
/// # Errors
/// * `Error::Usage` when no flag is given
/// * With clap's default error handling for malformed flags
pub fn get_args() -> Result<Args> {
    let args = normalize_args(std::env::args_os());
    if args.len() <= 1 {
        return Err(Error::Usage(String::new()));
    }
    Ok(Args::try_parse_from(args).unwrap_or_else(|e| e.exit()))
}

/// Renders the registry listings requested by `-lt`, `-ll` and `-lv`.
pub fn listings(args: &Args) -> String {
    let mut out = String::new();
    if args.list_types {
        out.push_str("Project types\n");
        for kind in ProjectType::ALL {
            out.push_str(&format!("  {:<10} {}\n", kind.id(), kind.display_name()));
        }
    }
    if args.list_licenses {
        out.push_str("Licenses\n");
        for license in License::ALL {
            let url = license.url().unwrap_or_default();
            let line = format!("  {:<10} {} {}", license.id(), license.display_name(), url);
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }
    if args.list_vcs {
        out.push_str("Version control systems\n");
        for vcs in Vcs::ALL {
            out.push_str(&format!("  {:<10} {}\n", vcs.id(), vcs.display_name()));
        }
    }
    out
}
