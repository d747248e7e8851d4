//! Interactive completion of the configuration.
//!
//! Each mode asks a fixed sequence of questions described by `Question`
//! values. The terminal interaction itself goes through the `Prompter`
//! trait, implemented for real terminals with dialoguer.

use std::sync::LazyLock;

use dialoguer::{Input, Select};
use regex::Regex;

use crate::config::{Config, Field, Mode};
use crate::error::{Error, Result};
use crate::naming::derive_program;
use crate::registry::{License, ProjectType, Vcs};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex"));

/// Registries a choice question can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registry {
    ProjectType,
    License,
    Vcs,
}

impl Registry {
    /// Choices as displayed to the user.
    pub fn choices(self) -> Vec<&'static str> {
        match self {
            Registry::ProjectType => ProjectType::ids(),
            Registry::License => License::ALL.iter().map(|l| l.canonical()).collect(),
            Registry::Vcs => Vcs::ids(),
        }
    }
}

/// How an answer is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Required,
    Optional,
    Email,
    Choice(Registry),
}

/// A single question of a prompt sequence.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub field: Field,
    pub usage: &'static str,
    pub kind: Kind,
}

const fn question(field: Field, usage: &'static str, kind: Kind) -> Question {
    Question { field, usage, kind }
}

const TYPE: Question =
    question(Field::Type, "Project type", Kind::Choice(Registry::ProjectType));
const PROJECT: Question = question(Field::Project, "Project name", Kind::Required);
const PROGRAM: Question = question(Field::Program, "Program name", Kind::Required);
const LICENSE: Question = question(Field::License, "License", Kind::Choice(Registry::License));
const AUTHOR: Question = question(Field::Author, "Author", Kind::Required);
const EMAIL: Question = question(Field::Email, "Email", Kind::Email);
const VCS: Question =
    question(Field::Vcs, "Version control system", Kind::Choice(Registry::Vcs));
const ORG: Question = question(Field::Org, "Organization", Kind::Optional);

/// Questions asked in each mode, in order.
pub fn questions(mode: Mode) -> &'static [Question] {
    match mode {
        Mode::WriteUserConfig => &[AUTHOR, EMAIL, LICENSE, VCS, ORG],
        Mode::AddProgram => &[TYPE, PROGRAM, LICENSE],
        Mode::NewProject => &[TYPE, PROJECT, PROGRAM, ORG, AUTHOR, EMAIL, LICENSE, VCS],
    }
}

/// Returns whether `value` looks like an email address.
pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Terminal interaction used while prompting.
pub trait Prompter {
    /// Asks for free text; `kind` is `Required`, `Optional` or `Email`.
    fn text(&self, usage: &str, default: &str, kind: Kind) -> Result<String>;

    /// Asks to pick one of `items`, returning its index.
    fn select(&self, usage: &str, items: &[&str], default: usize) -> Result<usize>;
}

/// Prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&self, usage: &str, default: &str, kind: Kind) -> Result<String> {
        let mut input = Input::<String>::new()
            .with_prompt(usage)
            .allow_empty(kind == Kind::Optional);
        if !default.is_empty() {
            input = input.default(default.to_string());
        }
        let input = input.validate_with(move |value: &String| -> std::result::Result<(), String> {
            let value = value.trim();
            match kind {
                Kind::Email if !is_email(value) => Err("invalid email address".to_string()),
                Kind::Required | Kind::Email if value.is_empty() => {
                    Err("a value is required".to_string())
                }
                _ => Ok(()),
            }
        });
        Ok(input.interact_text()?.trim().to_string())
    }

    fn select(&self, usage: &str, items: &[&str], default: usize) -> Result<usize> {
        Ok(Select::new().with_prompt(usage).items(items).default(default).interact()?)
    }
}

/// Asks every question of `mode`, offering the current values as defaults,
/// and stores the answers in `config`.
///
/// Registry answers are stored folded to lowercase. The program name defaults
/// to the one derived from the project name given so far; a different answer
/// is derived like the `-program` flag. Author and email may be left empty
/// once an organization owns a new project.
pub fn prompt(config: &mut Config, mode: Mode, prompter: &dyn Prompter) -> Result<()> {
    for q in questions(mode) {
        let current = match q.field {
            Field::Program if config.program.is_empty() => {
                derive_program(&config.project, "", config.kind().ok())
            }
            field => config.get(field).to_string(),
        };

        let answer = match q.kind {
            Kind::Choice(registry) => {
                let items = registry.choices();
                let default = items
                    .iter()
                    .position(|item| item.eq_ignore_ascii_case(&current))
                    .unwrap_or(0);
                let index = prompter.select(q.usage, &items, default)?;
                items
                    .get(index)
                    .ok_or_else(|| Error::Usage(format!("no choice {index} for {}", q.usage)))?
                    .to_lowercase()
            }
            kind => {
                let kind =
                    if mode.is_optional_for(q.field, config) { Kind::Optional } else { kind };
                let value = prompter.text(q.usage, &current, kind)?;
                if q.field == Field::Email && !value.is_empty() && !is_email(&value) {
                    return Err(Error::Usage(format!("invalid email address: {value:?}")));
                }
                if q.field == Field::Email && value.is_empty() && kind != Kind::Optional {
                    return Err(Error::Usage("an email address is required".to_string()));
                }
                match q.field {
                    Field::Program if value != current => {
                        derive_program("", &value, config.kind().ok())
                    }
                    _ => value,
                }
            }
        };
        config.set(q.field, answer);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_email() {
        assert!(is_email("jane@example.com"));
        assert!(is_email("a@b.c"));
        assert!(!is_email("jane"));
        assert!(!is_email("jane@example"));
        assert!(!is_email("ja ne@example.com"));
    }

    #[test]
    fn test_question_order() {
        let fields: Vec<Field> = questions(Mode::NewProject).iter().map(|q| q.field).collect();
        assert_eq!(
            fields,
            vec![
                Field::Type,
                Field::Project,
                Field::Program,
                Field::Org,
                Field::Author,
                Field::Email,
                Field::License,
                Field::Vcs
            ]
        );
    }

    #[test]
    fn test_license_choices_are_canonical() {
        assert!(Registry::License.choices().contains(&"MPL"));
        assert!(Registry::License.choices().contains(&"Apache"));
    }
}
