//! Project materialization.
//! Creates the directory layout of a new project (or of a program added to an
//! existing one), renders every file from the template set, copies the full
//! license text and initializes the version control repository.

use std::fs::{self, DirBuilder};
use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;

use crate::config::Config;
use crate::constants::{
    COMMENT, DATA_DIR_ENV, DEFAULT_DATA_DIR, DOC_DIR, SOURCE_EXT, TESTDATA_DIR,
};
use crate::error::{Error, Result};
use crate::registry::{License, Vcs};
use crate::renderer::TemplateSet;

/// Runs external commands on behalf of the materializer.
pub trait CommandRunner {
    /// Runs `program` with `args` inside `cwd`, returning the combined
    /// stdout and stderr.
    ///
    /// # Errors
    /// * `Error::Command` if the command exits unsuccessfully
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<String>;
}

/// Runs commands as child processes.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<String> {
        let command = std::iter::once(program).chain(args.iter().copied()).collect::<Vec<_>>();
        let command = command.join(" ");
        debug!("Running `{}` in '{}'", command, cwd.display());

        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|e| Error::io(program, e))?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(Error::Command {
                command,
                status: output.status.to_string(),
                output: combined,
            });
        }
        Ok(combined)
    }
}

/// Builds a project or program tree from a validated configuration.
pub struct Materializer<'a> {
    config: &'a Config,
    /// Directory the project (or program) directory is created in.
    base_dir: PathBuf,
    /// Directory holding the full license texts, `<license>.txt`.
    data_dir: PathBuf,
    runner: &'a dyn CommandRunner,
}

impl<'a> Materializer<'a> {
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(
        config: &'a Config,
        base_dir: P,
        data_dir: Q,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self { config, base_dir: base_dir.into(), data_dir: data_dir.into(), runner }
    }

    /// Root directory of the generated program.
    pub fn root(&self) -> PathBuf {
        self.base_dir.join(&self.config.program)
    }

    /// Generates the project, returning its root directory.
    ///
    /// Any failure aborts the generation; what was already written stays.
    pub fn create(&self) -> Result<PathBuf> {
        let root = self.root();
        let license = self.config.license()?;
        let vcs = self.config.vcs()?;

        create_dir(&root)?;
        if self.config.is_new_project {
            create_dir(root.join(DOC_DIR))?;
            create_dir(root.join(TESTDATA_DIR))?;
        }

        let mut templates = TemplateSet::new();
        templates.parse_license(self.config, COMMENT)?;
        templates.parse_project(self.config)?;

        self.render_sources(&templates, &root)?;
        if !self.config.is_new_project {
            return Ok(root);
        }

        if license != License::None {
            self.copy_license(license, &root)?;
        }
        self.render_docs(&templates, &root, license)?;

        if let Some(ignore_file) = vcs.ignore_file() {
            templates.render_var(root.join(ignore_file), "Ignore")?;
            self.init_repository(vcs)?;
        }
        Ok(root)
    }

    fn render_sources(&self, templates: &TemplateSet, root: &Path) -> Result<()> {
        let program = &self.config.program;
        templates.render_var(root.join(format!("{program}.{SOURCE_EXT}")), "Go")?;
        // leading underscore keeps the skeletons out of `go test`
        templates.render_var(root.join(format!("_{program}_test.{SOURCE_EXT}")), "Test")?;
        templates.render_var(root.join(format!("_example_test.{SOURCE_EXT}")), "Example")
    }

    fn render_docs(&self, templates: &TemplateSet, root: &Path, license: License) -> Result<()> {
        templates.render_var(root.join("README.md"), "Readme")?;
        templates.render_var(root.join("CONTRIBUTORS.txt.md"), "Contributors")?;
        templates.render_var(root.join(DOC_DIR).join("_changelog.txt.md"), "Changelog")?;
        if license != License::Cc0 {
            templates.render_var(root.join("AUTHORS.txt.md"), "Authors")?;
        }
        Ok(())
    }

    fn copy_license(&self, license: License, root: &Path) -> Result<()> {
        let src = self.data_dir.join(format!("{license}.txt"));
        let dst = root.join(format!("LICENSE-{license}.txt"));
        debug!("Copying '{}' to '{}'", src.display(), dst.display());
        fs::copy(&src, &dst).map(|_| ()).map_err(|e| Error::io(&src, e))
    }

    fn init_repository(&self, vcs: Vcs) -> Result<()> {
        let program = self.config.program.as_str();
        let output = self.runner.run(vcs.id(), &["init", program], &self.base_dir)?;
        print!("{}", strip_dir_prefix(&output, &self.base_dir));
        Ok(())
    }
}

/// Directory with the full license texts: `$GOWIZARD_DATA`, or the one
/// shipped with the crate.
pub fn data_dir() -> PathBuf {
    std::env::var_os(DATA_DIR_ENV)
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

/// Removes `dir/` from paths reported by a command run inside `dir`.
pub fn strip_dir_prefix(output: &str, dir: &Path) -> String {
    let prefix = format!("{}/", dir.display());
    output.replace(&prefix, "")
}

fn create_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    debug!("Creating directory '{}'", path.display());
    let mut builder = DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }
    builder.create(path).map_err(|e| Error::io(path, e))
}
