//! Common constants used throughout gowizard.

/// Name of the per-user defaults file, stored in `$HOME`.
pub const USER_CONFIG_FILE: &str = ".gowizard";

/// The only section read from and written to the per-user defaults file.
pub const USER_CONFIG_SECTION: &str = "DEFAULT";

/// Environment variable pointing to the directory with the full license texts.
pub const DATA_DIR_ENV: &str = "GOWIZARD_DATA";

/// License texts shipped with the crate.
pub const DEFAULT_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");

/// Comment marker of the generated source files.
pub const COMMENT: &str = "//";

/// Extension of the generated source files.
pub const SOURCE_EXT: &str = "go";

/// Documentation directory created inside a new project.
pub const DOC_DIR: &str = "doc";

/// Test fixtures directory created inside a new project.
pub const TESTDATA_DIR: &str = "testdata";

/// Readme scanned when adding a program to an existing project.
pub const README_FILE: &str = "README.md";

/// Separator of the `import` key in the per-user defaults file.
pub const IMPORT_PATH_SEPARATOR: char = ':';
