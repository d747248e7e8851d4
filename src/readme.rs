//! Recovery of the project name and creation year from a generated Readme.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::constants::README_FILE;
use crate::error::{Error, Result};

static COPYRIGHT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(Copyright|Written in)[ ]+([0-9]{4})[ ].*Authors").expect("valid regex")
});

/// What a project Readme tells about the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmeInfo {
    pub project: String,
    pub year: Option<i32>,
}

/// Finds the project Readme in `dir` or in its parent.
pub fn find_readme<P: AsRef<Path>>(dir: P) -> Option<PathBuf> {
    let dir = dir.as_ref();
    std::iter::once(dir)
        .chain(dir.parent())
        .map(|d| d.join(README_FILE))
        .find(|path| path.is_file())
}

/// Extracts the project name (first non-empty line) and the year of the
/// attribution line from Readme content.
pub fn parse_readme(content: &str) -> Option<ReadmeInfo> {
    let project = content.lines().map(str::trim).find(|line| !line.is_empty())?;
    let year = content
        .lines()
        .find_map(|line| COPYRIGHT_LINE.captures(line))
        .and_then(|caps| caps[2].parse().ok());

    Some(ReadmeInfo { project: project.to_string(), year })
}

/// Reads the Readme of the project that `dir` belongs to.
///
/// # Errors
/// * `Error::Usage` if no Readme exists in `dir` or its parent, or it is empty
/// * `Error::Io` if the Readme cannot be read
pub fn read_project_readme<P: AsRef<Path>>(dir: P) -> Result<ReadmeInfo> {
    let dir = dir.as_ref();
    let path = find_readme(dir).ok_or_else(|| {
        Error::Usage(format!(
            "no {README_FILE} found in '{}' or its parent; run -add inside a project",
            dir.display()
        ))
    })?;
    debug!("Reading project info from '{}'", path.display());

    let content = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
    parse_readme(&content)
        .ok_or_else(|| Error::Usage(format!("'{}' has no project name", path.display())))
}
