//! Derivation of the program identifier from a free-form project name.

use crate::registry::ProjectType;

/// Affixes removed from package names, tried in this order.
const PREFIXES: [&str; 2] = ["go-", "go"];
const SUFFIXES: [&str; 2] = ["-go", "go"];

/// Derives the filesystem-safe program identifier.
///
/// Starts from `program_hint` when it is not blank, otherwise from `project`.
/// The result is lowercased with all whitespace removed; for anything but a
/// command-line program one `go` affix is also removed, prefixes taking
/// precedence over suffixes.
///
/// # Example
/// ```
/// use gowizard::naming::derive_program;
/// use gowizard::registry::ProjectType;
///
/// assert_eq!(derive_program(" Go-Yaml ", "", Some(ProjectType::Pkg)), "yaml");
/// assert_eq!(derive_program("GoTool", "", Some(ProjectType::Cmd)), "gotool");
/// assert_eq!(derive_program("Go Foo", "", Some(ProjectType::Pkg)), "foo");
/// ```
pub fn derive_program(project: &str, program_hint: &str, kind: Option<ProjectType>) -> String {
    let hint = program_hint.trim();
    let source = if hint.is_empty() { project } else { hint };
    let name = source.split_whitespace().collect::<String>().to_lowercase();

    if kind == Some(ProjectType::Cmd) {
        return name;
    }
    strip_affix(&name).to_string()
}

fn strip_affix(name: &str) -> &str {
    for prefix in PREFIXES {
        if let Some(rest) = name.strip_prefix(prefix) {
            return rest;
        }
    }
    for suffix in SUFFIXES {
        if let Some(rest) = name.strip_suffix(suffix) {
            return rest;
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_once() {
        assert_eq!(strip_affix("go-go"), "go");
        assert_eq!(strip_affix("gogo"), "go");
        assert_eq!(strip_affix("yaml-go"), "yaml");
        assert_eq!(strip_affix("mango"), "man");
        assert_eq!(strip_affix("demo"), "demo");
    }

    #[test]
    fn test_hint_wins_over_project() {
        assert_eq!(derive_program("Demo", " Helper ", Some(ProjectType::Pkg)), "helper");
        assert_eq!(derive_program("Demo", "  ", Some(ProjectType::Pkg)), "demo");
    }

    #[test]
    fn test_whitespace_is_removed() {
        assert_eq!(derive_program("Go Foo", "", Some(ProjectType::Pkg)), "foo");
        assert_eq!(derive_program("Foo Go", "", Some(ProjectType::Pkg)), "foo");
        assert_eq!(derive_program("My\tTool ", "", Some(ProjectType::Cmd)), "mytool");
    }

    #[test]
    fn test_unknown_type_strips_affix() {
        assert_eq!(derive_program("GoFoo", "", None), "foo");
    }
}
