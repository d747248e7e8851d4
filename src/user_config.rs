//! Per-user defaults stored in `$HOME/.gowizard`.
//!
//! The file is INI with a single `[DEFAULT]` section. It is read with
//! `rust-ini` and written by rendering a template, so the on-disk layout
//! stays stable and human-editable.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ini::Ini;
use log::debug;

use crate::config::{Config, Field};
use crate::constants::{IMPORT_PATH_SEPARATOR, USER_CONFIG_FILE, USER_CONFIG_SECTION};
use crate::error::{Error, Result};
use crate::renderer::new_environment;
use crate::templates::USER_CONFIG;

/// Keys of the defaults file mapped onto configuration fields.
const KEYS: [Field; 5] = [Field::Org, Field::Author, Field::Email, Field::License, Field::Vcs];

const IMPORT_KEY: &str = "import";

/// Location of the defaults file for the current user.
///
/// # Errors
/// * `Error::HomeNotSet` if `$HOME` is unset or empty
pub fn user_config_path() -> Result<PathBuf> {
    match std::env::var_os("HOME") {
        Some(home) if !home.is_empty() => Ok(PathBuf::from(home).join(USER_CONFIG_FILE)),
        _ => Err(Error::HomeNotSet),
    }
}

/// Fills every unset field of `config` from the defaults file at `path`.
///
/// A missing file and missing keys are fine; fields already set are kept.
///
/// # Errors
/// * `Error::NotRegularFile` if `path` exists but is not a regular file
/// * `Error::UserConfig` if the file is not valid INI
pub fn load_user_defaults<P: AsRef<Path>>(config: &mut Config, path: P) -> Result<()> {
    let path = path.as_ref();
    match fs::metadata(path) {
        Ok(meta) if !meta.is_file() => {
            return Err(Error::NotRegularFile { path: path.to_path_buf() })
        }
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("No user configuration at '{}'", path.display());
            return Ok(());
        }
        Err(e) => return Err(Error::io(path, e)),
    }

    debug!("Loading user configuration from '{}'", path.display());
    let ini = Ini::load_from_file(path)
        .map_err(|source| Error::UserConfig { path: path.to_path_buf(), source })?;
    let Some(section) = ini.section(Some(USER_CONFIG_SECTION)) else {
        return Ok(());
    };

    for field in KEYS {
        if !config.get(field).is_empty() {
            continue;
        }
        if let Some(value) = section.get(field.name()) {
            config.set(field, value.trim().to_string());
        }
    }
    if config.import_paths.is_empty() {
        if let Some(value) = section.get(IMPORT_KEY) {
            config.import_paths = split_import_paths(value);
        }
    }
    Ok(())
}

/// Writes the persisted fields of `config` to the defaults file at `path`.
pub fn write_user_defaults<P: AsRef<Path>>(config: &Config, path: P) -> Result<()> {
    let path = path.as_ref();
    let content = new_environment()
        .render_str(USER_CONFIG, config)
        .map_err(|e| Error::template("UserConfig", e))?;
    fs::write(path, content).map_err(|e| Error::io(path, e))?;
    println!("User configuration written to '{}'", path.display());
    Ok(())
}

fn split_import_paths(value: &str) -> Vec<String> {
    value
        .split(IMPORT_PATH_SEPARATOR)
        .map(str::trim)
        .filter(|root| !root.is_empty())
        .map(str::to_string)
        .collect()
}
