//! Error handling for gowizard.
//! Defines the error kinds raised while resolving the configuration and
//! materializing a project, and how each kind maps onto a process exit code.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::cli::USAGE;

/// Custom error types for gowizard operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Bad flag combination, or a required field missing without `-i`.
    #[error("{0}")]
    Usage(String),

    /// Identifier not present in one of the registries.
    #[error("unavailable {kind}: {value:?}")]
    Unavailable { kind: &'static str, value: String },

    #[error("environment variable $HOME is not set")]
    HomeNotSet,

    /// The per-user defaults path exists but is a directory, socket, etc.
    #[error("{}: expected a regular file", .path.display())]
    NotRegularFile { path: PathBuf },

    #[error("malformed user configuration {}: {source}", .path.display())]
    UserConfig {
        path: PathBuf,
        #[source]
        source: ini::Error,
    },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Templates are static, so this always indicates a bug in them.
    #[error("template {name:?}: {source}")]
    Template {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    /// An external command (`<vcs> init`) exited unsuccessfully.
    #[error("command `{command}` failed ({status}):\n{output}")]
    Command {
        command: String,
        status: String,
        output: String,
    },

    #[error("prompt failed: {0}")]
    Prompt(#[source] io::Error),

    /// Ctrl-C while prompting.
    #[error("interrupted")]
    Interrupted,
}

/// Convenience type alias for Results with gowizard's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wraps an I/O error together with the path it happened on.
    pub fn io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }

    /// Wraps a template error together with the template name.
    pub fn template<S: Into<String>>(name: S, source: minijinja::Error) -> Self {
        Error::Template { name: name.into(), source }
    }

    /// Exit status the process should terminate with for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Interrupted => 0,
            Error::Usage(_) => 2,
            _ => 1,
        }
    }
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(err) if err.kind() == io::ErrorKind::Interrupted => {
                Error::Interrupted
            }
            dialoguer::Error::IO(err) => Error::Prompt(err),
            #[allow(unreachable_patterns)]
            other => Error::Prompt(io::Error::other(other.to_string())),
        }
    }
}

/// Default error handler that prints the error and exits the program.
///
/// Usage errors print the usage text; interruption exits silently with 0;
/// every other error is printed as `gowizard: <message>` with status 1.
pub fn default_error_handler(err: Error) -> ! {
    match &err {
        Error::Interrupted => {}
        Error::Usage(msg) => {
            if !msg.is_empty() {
                eprintln!("gowizard: {msg}");
            }
            eprintln!("{USAGE}");
        }
        _ => eprintln!("gowizard: {err}"),
    }
    std::process::exit(err.exit_code());
}
