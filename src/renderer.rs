//! Template composition and rendering for gowizard.
//! Binds the license-dependent `Copyright` and `Header` templates next to the
//! project body templates in a single MiniJinja environment, and renders
//! named templates to files with the project data as context.

use std::fs;
use std::path::Path;

use chrono::Datelike;
use log::debug;
use minijinja::Environment;
use serde::Serialize;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::registry::{License, LicenseFamily, ProjectType, Vcs};
use crate::templates;

/// Data every template is rendered with.
///
/// Derived fields are computed once from the `Config` so that templates only
/// ever reference plain named values.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateData {
    pub project_type: String,
    pub project: String,
    pub program: String,
    pub license: String,
    pub author: String,
    pub email: String,
    pub vcs: String,
    pub org: String,
    pub import_path: Option<String>,
    pub comment: String,
    pub full_license: String,
    pub license_url: Option<String>,
    pub license_faq_url: Option<String>,
    pub gnu_extra: String,
    pub project_header: String,
    pub is_cmd: bool,
    pub is_cgo: bool,
    pub is_copyleft: bool,
    pub year: i32,
}

impl TemplateData {
    /// Derives the template data from a validated configuration.
    ///
    /// The year of the configuration is kept when set, otherwise the current
    /// local year is used.
    pub fn new(config: &Config, comment: &str) -> Result<Self> {
        let kind = config.kind()?;
        let license = config.license()?;
        let vcs = config.vcs()?;
        let year = config.year.unwrap_or_else(current_year);

        Ok(Self {
            project_type: kind.id().to_string(),
            project: config.project.clone(),
            program: config.program.clone(),
            license: license.id().to_string(),
            author: config.author.clone(),
            email: config.email.clone(),
            vcs: vcs.id().to_string(),
            org: config.org.clone(),
            import_path: config.import_path(),
            comment: comment.to_string(),
            full_license: license.display_name().to_string(),
            license_url: license.url().map(str::to_string),
            license_faq_url: license.faq_url().map(str::to_string),
            gnu_extra: license.gnu_extra().to_string(),
            project_header: "=".repeat(config.project.chars().count()),
            is_cmd: kind == ProjectType::Cmd,
            is_cgo: kind == ProjectType::Cgo,
            is_copyleft: license.is_copyleft(),
            year,
        })
    }
}

/// Current year in local time.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Picks the attribution line for the license and the copyright holder.
///
/// With `project_authors` the line credits "the PROJECT Authors" instead of
/// the author.
pub fn copyright_template(license: License, project_authors: bool) -> &'static str {
    match (license.is_copyleft(), project_authors) {
        (true, false) => templates::COPYLEFT_PERSONAL,
        (true, true) => templates::COPYLEFT_ORG,
        (false, false) => templates::COPYRIGHT_PERSONAL,
        (false, true) => templates::COPYRIGHT_ORG,
    }
}

/// Per-file license header of a license family.
pub fn header_template(family: LicenseFamily) -> &'static str {
    match family {
        LicenseFamily::Apache => templates::HEADER_APACHE,
        LicenseFamily::Gnu => templates::HEADER_GNU,
        LicenseFamily::Mpl => templates::HEADER_MPL,
        LicenseFamily::Cc0 => templates::HEADER_CC0,
        LicenseFamily::Unlicense => templates::HEADER_UNLICENSE,
        LicenseFamily::None => templates::HEADER_NONE,
    }
}

/// Effective ignore-file body for a version control system.
pub fn ignore_template(vcs: Vcs) -> String {
    match vcs {
        Vcs::Hg => format!("{}{}", templates::HG_SYNTAX, templates::IGNORE),
        _ => templates::IGNORE.to_string(),
    }
}

/// Creates an environment with the whitespace rules the templates rely on.
pub fn new_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    env
}

/// Named, mutually-referencing templates of a project.
pub struct TemplateSet {
    env: Environment<'static>,
    data: Option<TemplateData>,
}

impl Default for TemplateSet {
    fn default() -> Self {
        TemplateSet::new()
    }
}

impl TemplateSet {
    pub fn new() -> Self {
        Self { env: new_environment(), data: None }
    }

    /// Binds `Copyright` and `Header` for the configured license and derives
    /// the template data, with `comment` as the comment marker.
    pub fn parse_license(&mut self, config: &Config, comment: &str) -> Result<()> {
        let data = TemplateData::new(config, comment)?;
        let license = config.license()?;
        let family = license.family();
        debug!(
            "Binding {} header for license '{}'",
            family.header_template(),
            license
        );

        // a program added without author or org credits the project, as the Readme does
        let project_authors = config.has_org() || config.author.trim().is_empty();
        self.add("Copyright", copyright_template(license, project_authors))?;
        self.add("Header", header_template(family))?;
        self.data = Some(data);
        Ok(())
    }

    /// Adds the body templates of the project files.
    pub fn parse_project(&mut self, config: &Config) -> Result<()> {
        let vcs = config.vcs()?;
        for (name, source) in [
            ("Go", templates::GO),
            ("Test", templates::TEST),
            ("Example", templates::EXAMPLE),
            ("Authors", templates::AUTHORS),
            ("Contributors", templates::CONTRIBUTORS),
            ("Changelog", templates::CHANGELOG),
            ("Readme", templates::README),
        ] {
            self.add(name, source)?;
        }
        self.add("Ignore", ignore_template(vcs))
    }

    /// Template data bound by `parse_license`.
    pub fn data(&self) -> Option<&TemplateData> {
        self.data.as_ref()
    }

    /// Renders the named template to a string.
    pub fn render(&self, name: &str) -> Result<String> {
        let data = self.bound_data(name)?;
        let tmpl = self.env.get_template(name).map_err(|e| Error::template(name, e))?;
        tmpl.render(data).map_err(|e| Error::template(name, e))
    }

    /// Renders the named template to `dst`, overwriting it.
    pub fn render_var<P: AsRef<Path>>(&self, dst: P, name: &str) -> Result<()> {
        let dst = dst.as_ref();
        let content = self.render(name)?;
        debug!("Writing '{}' from template {}", dst.display(), name);
        fs::write(dst, content).map_err(|e| Error::io(dst, e))
    }

    /// Renders the template file at `src` to `dst`, overwriting it.
    ///
    /// The file may include any template of the set.
    pub fn render_file<P: AsRef<Path>, Q: AsRef<Path>>(&self, dst: P, src: Q) -> Result<()> {
        let (dst, src) = (dst.as_ref(), src.as_ref());
        let name = src.display().to_string();
        let source = fs::read_to_string(src).map_err(|e| Error::io(src, e))?;
        let data = self.bound_data(&name)?;
        let content =
            self.env.render_str(&source, data).map_err(|e| Error::template(&name, e))?;
        debug!("Writing '{}' from template file {}", dst.display(), name);
        fs::write(dst, content).map_err(|e| Error::io(dst, e))
    }

    fn add(&mut self, name: &'static str, source: impl Into<String>) -> Result<()> {
        self.env
            .add_template_owned(name, source.into())
            .map_err(|e| Error::template(name, e))
    }

    fn bound_data(&self, name: &str) -> Result<&TemplateData> {
        self.data.as_ref().ok_or_else(|| {
            Error::template(
                name,
                minijinja::Error::new(
                    minijinja::ErrorKind::InvalidOperation,
                    "license templates are not bound",
                ),
            )
        })
    }
}
