#![allow(dead_code)]

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use gowizard::config::Config;
use gowizard::constants::DEFAULT_DATA_DIR;
use gowizard::error::Result;
use gowizard::processor::{CommandRunner, Materializer};

/// Records every command instead of running it.
#[derive(Default)]
pub struct RecordingRunner {
    pub commands: RefCell<Vec<String>>,
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<String> {
        self.commands.borrow_mut().push(format!("{} {}", program, args.join(" ")));
        Ok(format!("Initialized empty repository in {}/{}/\n", cwd.display(), args[1]))
    }
}

pub fn new_project(
    kind: &str,
    project: &str,
    license: &str,
    author: &str,
    email: &str,
    org: &str,
    vcs: &str,
) -> Config {
    let mut config = Config {
        project_type: kind.to_string(),
        project: project.to_string(),
        license: license.to_string(),
        author: author.to_string(),
        email: email.to_string(),
        org: org.to_string(),
        vcs: vcs.to_string(),
        is_new_project: true,
        ..Default::default()
    };
    config.normalize();
    config.resolve_program();
    config
}

/// Materializes `config` below `base`, returning the project root.
pub fn materialize(config: &Config, base: &Path, runner: &RecordingRunner) -> PathBuf {
    Materializer::new(config, base, DEFAULT_DATA_DIR, runner).create().unwrap()
}

pub fn read(path: impl AsRef<Path>) -> String {
    std::fs::read_to_string(path.as_ref())
        .unwrap_or_else(|e| panic!("{}: {e}", path.as_ref().display()))
}
