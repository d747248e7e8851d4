//! Configuration record shared by every step of gowizard.
//!
//! A `Config` starts out from the command-line flags, gets filled in from the
//! per-user defaults file and interactive prompts, and is validated against
//! the mode of operation before anything touches the filesystem.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::naming::derive_program;
use crate::registry::{License, ProjectType, Vcs};

/// Operating mode selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// `-cfg`: write the per-user defaults file.
    WriteUserConfig,
    /// `-add`: add a program to an existing project.
    AddProgram,
    /// Create a new project.
    NewProject,
}

/// Fields of the configuration that can be required, prompted or persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Type,
    Project,
    Program,
    License,
    Author,
    Email,
    Vcs,
    Org,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Type => "type",
            Field::Project => "project",
            Field::Program => "program",
            Field::License => "license",
            Field::Author => "author",
            Field::Email => "email",
            Field::Vcs => "vcs",
            Field::Org => "org",
        }
    }
}

impl Mode {
    /// Fields that must be non-empty when running without `-i`.
    pub fn required_fields(self) -> &'static [Field] {
        match self {
            Mode::WriteUserConfig => &[Field::Author, Field::Email, Field::License, Field::Vcs],
            Mode::AddProgram => &[Field::Type, Field::Program, Field::License],
            Mode::NewProject => &[
                Field::Type,
                Field::Project,
                Field::Program,
                Field::License,
                Field::Author,
                Field::Email,
                Field::Vcs,
            ],
        }
    }

    /// Whether a required field may stay empty given the rest of `config`.
    pub fn is_optional_for(self, field: Field, config: &Config) -> bool {
        self == Mode::NewProject
            && matches!(field, Field::Author | Field::Email)
            && config.has_org()
    }
}

/// The configuration of a single gowizard run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Config {
    pub project_type: String,
    pub project: String,
    pub program: String,
    pub license: String,
    pub author: String,
    pub email: String,
    pub vcs: String,
    pub org: String,
    /// Roots used to build the canonical import path, in priority order.
    pub import_paths: Vec<String>,
    /// Year for the copyright lines; `None` means the current year.
    pub year: Option<i32>,
    pub is_new_project: bool,
}

impl Config {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Type => &self.project_type,
            Field::Project => &self.project,
            Field::Program => &self.program,
            Field::License => &self.license,
            Field::Author => &self.author,
            Field::Email => &self.email,
            Field::Vcs => &self.vcs,
            Field::Org => &self.org,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Type => &mut self.project_type,
            Field::Project => &mut self.project,
            Field::Program => &mut self.program,
            Field::License => &mut self.license,
            Field::Author => &mut self.author,
            Field::Email => &mut self.email,
            Field::Vcs => &mut self.vcs,
            Field::Org => &mut self.org,
        };
        *slot = value;
    }

    pub fn kind(&self) -> Result<ProjectType> {
        self.project_type.parse()
    }

    pub fn license(&self) -> Result<License> {
        self.license.parse()
    }

    /// VCS of the project; an unset VCS behaves like `none`.
    pub fn vcs(&self) -> Result<Vcs> {
        if self.vcs.is_empty() {
            return Ok(Vcs::None);
        }
        self.vcs.parse()
    }

    /// Canonical import path: first import root joined with the program.
    pub fn import_path(&self) -> Option<String> {
        self.import_paths.first().map(|root| {
            format!("{}/{}", root.trim_end_matches('/'), self.program)
        })
    }

    /// Case-folds the registry fields and trims the free-form names.
    ///
    /// Idempotent; the program identifier is derived separately by
    /// `resolve_program`.
    pub fn normalize(&mut self) {
        self.project_type = self.project_type.trim().to_lowercase();
        self.license = self.license.trim().to_lowercase();
        self.vcs = self.vcs.trim().to_lowercase();
        self.project = self.project.trim().to_string();
        self.program = self.program.trim().to_string();
    }

    /// Derives the program identifier from the Program field, or from the
    /// project name when creating a new project without one.
    ///
    /// Must run once per value given by the user: each run removes another
    /// `go` affix.
    pub fn resolve_program(&mut self) {
        let project = if self.is_new_project { self.project.as_str() } else { "" };
        if !project.is_empty() || !self.program.is_empty() {
            self.program = derive_program(project, &self.program, self.kind().ok());
        }
    }

    /// Whether an organization, rather than the author, holds the copyright.
    pub fn has_org(&self) -> bool {
        !self.org.trim().is_empty()
    }
}

/// Validates the configuration for the given mode.
///
/// Registry membership of type, license and VCS is always checked when they
/// are set. Required fields are only enforced without `interactive`, since
/// prompting will ask for them. A new project owned by an organization may
/// leave author and email empty.
///
/// # Errors
/// * `Error::Unavailable` for an identifier missing from its registry
/// * `Error::Usage` naming the first missing required field
pub fn validate(config: &Config, mode: Mode, interactive: bool) -> Result<()> {
    if !config.project_type.is_empty() {
        config.kind()?;
    }
    if !config.license.is_empty() {
        config.license()?;
    }
    if !config.vcs.is_empty() {
        config.vcs()?;
    }

    if interactive {
        return Ok(());
    }
    for field in mode.required_fields() {
        if mode.is_optional_for(*field, config) {
            continue;
        }
        if config.get(*field).trim().is_empty() {
            return Err(Error::Usage(format!("missing required flag: -{}", field.name())));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Config {
        Config {
            project_type: "PKG".to_string(),
            project: " Go-Demo ".to_string(),
            license: "MPL".to_string(),
            author: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            vcs: "Git".to_string(),
            is_new_project: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_normalize() {
        let mut config = sample();
        config.normalize();
        assert_eq!(config.project_type, "pkg");
        assert_eq!(config.license, "mpl");
        assert_eq!(config.vcs, "git");
        assert_eq!(config.project, "Go-Demo");
        assert_eq!(config.program, "");

        config.resolve_program();
        assert_eq!(config.program, "demo");
        config.normalize();
        assert_eq!(config.program, "demo");
    }

    #[test]
    fn test_added_program_is_not_derived_from_project() {
        let mut config = Config { project: "Demo".to_string(), is_new_project: false, ..sample() };
        config.normalize();
        config.resolve_program();
        assert_eq!(config.program, "");

        config.program = "GoHelper".to_string();
        config.resolve_program();
        assert_eq!(config.program, "helper");
    }

    #[test]
    fn test_import_path() {
        let mut config = sample();
        config.normalize();
        config.resolve_program();
        assert_eq!(config.import_path(), None);
        config.import_paths = vec!["github.com/jane/".to_string(), "example.org".to_string()];
        assert_eq!(config.import_path().as_deref(), Some("github.com/jane/demo"));
    }
}
