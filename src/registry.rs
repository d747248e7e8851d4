//! Closed sets of project types, licenses and version control systems.
//!
//! Identifiers are matched after folding to lowercase. Each registry keeps
//! its members in display order through an `ALL` constant.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Kind of project being generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    Cmd,
    Pkg,
    Cgo,
}

impl ProjectType {
    pub const ALL: [ProjectType; 3] = [ProjectType::Cmd, ProjectType::Pkg, ProjectType::Cgo];

    pub fn id(self) -> &'static str {
        match self {
            ProjectType::Cmd => "cmd",
            ProjectType::Pkg => "pkg",
            ProjectType::Cgo => "cgo",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ProjectType::Cmd => "Program",
            ProjectType::Pkg => "Package",
            ProjectType::Cgo => "Package that calls C code",
        }
    }
}

/// Licenses a project can be distributed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum License {
    Agpl,
    Apache,
    Cc0,
    Gpl,
    Mpl,
    Unlicense,
    None,
}

/// Groups of licenses sharing the same file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseFamily {
    Apache,
    Gnu,
    Mpl,
    Cc0,
    Unlicense,
    None,
}

impl License {
    pub const ALL: [License; 7] = [
        License::Agpl,
        License::Apache,
        License::Cc0,
        License::Gpl,
        License::Mpl,
        License::Unlicense,
        License::None,
    ];

    pub fn id(self) -> &'static str {
        match self {
            License::Agpl => "agpl",
            License::Apache => "apache",
            License::Cc0 => "cc0",
            License::Gpl => "gpl",
            License::Mpl => "mpl",
            License::Unlicense => "unlicense",
            License::None => "none",
        }
    }

    /// Canonical spelling shown in prompts.
    pub fn canonical(self) -> &'static str {
        match self {
            License::Agpl => "AGPL",
            License::Apache => "Apache",
            License::Cc0 => "CC0",
            License::Gpl => "GPL",
            License::Mpl => "MPL",
            License::Unlicense => "Unlicense",
            License::None => "none",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            License::Agpl => "GNU Affero General Public License",
            License::Apache => "Apache License, version 2.0",
            License::Cc0 => "Creative Commons CC0 1.0 Universal",
            License::Gpl => "GNU General Public License",
            License::Mpl => "Mozilla Public License, version 2.0",
            License::Unlicense => "Unlicense",
            License::None => "None (all rights reserved)",
        }
    }

    pub fn url(self) -> Option<&'static str> {
        match self {
            License::Agpl => Some("http://www.gnu.org/licenses/agpl.html"),
            License::Apache => Some("http://www.apache.org/licenses/LICENSE-2.0"),
            License::Cc0 => Some("http://creativecommons.org/publicdomain/zero/1.0/"),
            License::Gpl => Some("http://www.gnu.org/licenses/gpl.html"),
            License::Mpl => Some("http://mozilla.org/MPL/2.0/"),
            License::Unlicense => Some("http://unlicense.org/"),
            License::None => None,
        }
    }

    pub fn faq_url(self) -> Option<&'static str> {
        match self {
            License::Agpl | License::Gpl => Some("http://www.gnu.org/licenses/gpl-faq.html"),
            License::Apache => Some("http://www.apache.org/foundation/license-faq.html"),
            License::Cc0 => Some("http://creativecommons.org/about/cc0"),
            License::Mpl => Some("http://www.mozilla.org/MPL/2.0/FAQ.html"),
            License::Unlicense => Some("http://unlicense.org/#unlicensing-contributions"),
            License::None => None,
        }
    }

    pub fn family(self) -> LicenseFamily {
        LicenseFamily::of(self.id())
    }

    /// Public-domain dedications have no copyright holder.
    pub fn is_copyleft(self) -> bool {
        self.family().is_copyleft()
    }

    /// Marker inserted in the GNU license name ("GNU Affero General ...").
    pub fn gnu_extra(self) -> &'static str {
        match self {
            License::Agpl => "Affero",
            _ => "",
        }
    }
}

impl LicenseFamily {
    /// Family of a license identifier: the part before any `-` separator.
    pub fn of(id: &str) -> LicenseFamily {
        let prefix = id.split('-').next().unwrap_or_default();
        match prefix.to_lowercase().as_str() {
            "apache" => LicenseFamily::Apache,
            "gpl" | "agpl" | "lgpl" => LicenseFamily::Gnu,
            "mpl" => LicenseFamily::Mpl,
            "cc0" => LicenseFamily::Cc0,
            "unlicense" => LicenseFamily::Unlicense,
            _ => LicenseFamily::None,
        }
    }

    pub fn is_copyleft(self) -> bool {
        matches!(self, LicenseFamily::Cc0 | LicenseFamily::Unlicense)
    }

    /// Name of the header template bound for this family.
    pub fn header_template(self) -> &'static str {
        match self {
            LicenseFamily::Apache => "Apache",
            LicenseFamily::Gnu => "GNU",
            LicenseFamily::Mpl => "MPL",
            LicenseFamily::Cc0 => "CC0",
            LicenseFamily::Unlicense => "Unlicense",
            LicenseFamily::None => "None",
        }
    }
}

/// Version control systems a repository can be initialized with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vcs {
    Bzr,
    Git,
    Hg,
    None,
}

impl Vcs {
    pub const ALL: [Vcs; 4] = [Vcs::Bzr, Vcs::Git, Vcs::Hg, Vcs::None];

    pub fn id(self) -> &'static str {
        match self {
            Vcs::Bzr => "bzr",
            Vcs::Git => "git",
            Vcs::Hg => "hg",
            Vcs::None => "none",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Vcs::Bzr => "Bazaar",
            Vcs::Git => "Git",
            Vcs::Hg => "Mercurial",
            Vcs::None => "none",
        }
    }

    /// Name of the ignore file at the project root, e.g. `.gitignore`.
    pub fn ignore_file(self) -> Option<String> {
        match self {
            Vcs::None => None,
            vcs => Some(format!(".{}ignore", vcs.id())),
        }
    }
}

macro_rules! registry_impls {
    ($ty:ident, $kind:literal) => {
        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let id = s.trim().to_lowercase();
                $ty::ALL
                    .into_iter()
                    .find(|item| item.id() == id)
                    .ok_or_else(|| Error::Unavailable { kind: $kind, value: s.to_string() })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.id())
            }
        }

        impl $ty {
            /// Registry identifiers in display order.
            pub fn ids() -> Vec<&'static str> {
                $ty::ALL.iter().map(|item| item.id()).collect()
            }
        }
    };
}

registry_impls!(ProjectType, "project type");
registry_impls!(License, "license");
registry_impls!(Vcs, "version control system");
