//! gowizard generates the initial layout of a new Go project: source
//! skeletons carrying a license header, the full license text, informational
//! documents and the ignore file of the version control system. It can also
//! add a program to an existing project and store per-user defaults.

/// Command-line interface module for gowizard
pub mod cli;

/// Configuration record, operating modes and validation
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling for gowizard
pub mod error;

/// Logger setup
pub mod logger;

/// Program identifier derivation
pub mod naming;

/// Project materialization
/// Creates the directory tree and renders every file of a project
pub mod processor;

/// Interactive prompting for missing configuration values
pub mod prompt;

/// Project name and year recovery from an existing Readme
pub mod readme;

/// Project types, licenses and version control systems
pub mod registry;

/// Template composition and rendering
pub mod renderer;

/// Sources of the named templates
pub mod templates;

/// Per-user defaults file handling
pub mod user_config;
