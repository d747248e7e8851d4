use std::path::Path;
use std::process::{Command, Output};

use clap::Parser;
use gowizard::cli::{listings, normalize_args, Args};
use gowizard::config::Mode;
use gowizard::renderer::current_year;
use tempfile::TempDir;

fn parse(args: &[&str]) -> Args {
    let mut argv = vec!["gowizard"];
    argv.extend_from_slice(args);
    Args::try_parse_from(normalize_args(argv)).unwrap()
}

/// Runs the binary inside `cwd` with `home` as `$HOME`.
fn gowizard(args: &[&str], cwd: &Path, home: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gowizard"))
        .args(args)
        .current_dir(cwd)
        .env("HOME", home)
        .env("GOWIZARD_DATA", concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
        .output()
        .unwrap()
}

#[test]
fn test_go_style_flags() {
    let args = parse(&[
        "-type=pkg",
        "-project",
        "Demo",
        "-program=",
        "-license=mpl",
        "-author=Jane Doe",
        "-email=jane@example.com",
        "-vcs=git",
    ]);

    assert_eq!(args.mode().unwrap(), Mode::NewProject);
    let config = args.to_config(Mode::NewProject);
    assert_eq!(config.project_type, "pkg");
    assert_eq!(config.project, "Demo");
    assert_eq!(config.program, "");
    assert_eq!(config.author, "Jane Doe");
    assert!(config.is_new_project);
    assert!(!args.interactive);
}

#[test]
fn test_modes() {
    assert_eq!(parse(&["-cfg", "-i"]).mode().unwrap(), Mode::WriteUserConfig);
    assert_eq!(parse(&["-add", "-i"]).mode().unwrap(), Mode::AddProgram);
    assert!(parse(&["-add", "-cfg"]).mode().is_err());
    assert!(!parse(&["-add"]).to_config(Mode::AddProgram).is_new_project);
}

#[test]
fn test_listings() {
    let args = parse(&["-lt", "-ll", "-lv"]);
    assert!(args.is_listing());

    let out = listings(&args);
    assert!(out.contains("  cgo        Package that calls C code\n"));
    assert!(out.contains("  mpl        Mozilla Public License, version 2.0 http://mozilla.org/MPL/2.0/\n"));
    assert!(out.contains("  none       None (all rights reserved)\n"));
    assert!(out.contains("  hg         Mercurial\n"));
}

#[test]
fn test_unknown_flag_fails() {
    let argv = normalize_args(["gowizard", "-frobnicate"]);
    assert!(Args::try_parse_from(argv).is_err());
}

#[test]
fn test_no_flags_is_a_usage_error() {
    let temp_dir = TempDir::new().unwrap();
    let out = gowizard(&[], temp_dir.path(), temp_dir.path());
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage: gowizard"));
}

#[test]
fn test_add_and_cfg_conflict() {
    let temp_dir = TempDir::new().unwrap();
    let out = gowizard(&["-add", "-cfg"], temp_dir.path(), temp_dir.path());
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn test_unknown_license_creates_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let out = gowizard(
        &["-type=pkg", "-project=X", "-license=xyz", "-author=A", "-email=a@b.c", "-vcs=none"],
        temp_dir.path(),
        temp_dir.path(),
    );

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains(r#"gowizard: unavailable license: "xyz""#), "{stderr}");
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

fn has_git() -> bool {
    Command::new("git").arg("--version").output().is_ok_and(|out| out.status.success())
}

#[test]
fn test_new_mpl_package_with_git() {
    if !has_git() {
        return;
    }
    let temp_dir = TempDir::new().unwrap();
    let home = temp_dir.path().join("home");
    std::fs::create_dir(&home).unwrap();

    let out = gowizard(
        &[
            "-type=pkg",
            "-project=Demo",
            "-program=",
            "-license=mpl",
            "-author=Jane Doe",
            "-email=jane@example.com",
            "-vcs=git",
        ],
        temp_dir.path(),
        &home,
    );

    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let root = temp_dir.path().join("demo");
    let source = std::fs::read_to_string(root.join("demo.go")).unwrap();
    assert!(source.starts_with(&format!("// Copyright {} Jane Doe\n", current_year())));
    for file in [".gitignore", "LICENSE-mpl.txt", "AUTHORS.txt.md"] {
        assert!(root.join(file).is_file(), "missing {file}");
    }
    assert!(root.join(".git").is_dir());
}

#[test]
fn test_new_agpl_command_owned_by_org() {
    let temp_dir = TempDir::new().unwrap();
    let home = temp_dir.path().join("home");
    std::fs::create_dir(&home).unwrap();

    let out = gowizard(
        &[
            "-type=cmd",
            "-project=Tool",
            "-license=agpl",
            "-author=",
            "-email=",
            "-org=Acme",
            "-vcs=none",
        ],
        temp_dir.path(),
        &home,
    );

    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let root = temp_dir.path().join("tool");
    let source = std::fs::read_to_string(root.join("tool.go")).unwrap();
    assert!(source.contains(&format!("Copyright {} The Tool Authors", current_year())));
    assert!(source.contains("GNU Affero General Public License"));
    assert!(!root.join(".gitignore").exists());
    assert!(!root.join(".git").exists());
}

#[test]
fn test_new_cc0_package() {
    let temp_dir = TempDir::new().unwrap();
    let home = temp_dir.path().join("home");
    std::fs::create_dir(&home).unwrap();

    let out = gowizard(
        &[
            "-type=pkg",
            "-project=Lib",
            "-license=cc0",
            "-author=Jane",
            "-email=jane@example.com",
            "-vcs=none",
        ],
        temp_dir.path(),
        &home,
    );

    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let root = temp_dir.path().join("lib");
    let source = std::fs::read_to_string(root.join("lib.go")).unwrap();
    assert!(source.starts_with(&format!("// Written in {} by Jane\n", current_year())));
    assert!(!root.join("AUTHORS.txt.md").exists());
}

#[test]
fn test_project_name_with_spaces() {
    let temp_dir = TempDir::new().unwrap();
    let out = gowizard(
        &["-type=pkg", "-project=Go Foo", "-license=none", "-author=A", "-email=a@b.c", "-vcs=none"],
        temp_dir.path(),
        temp_dir.path(),
    );

    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(temp_dir.path().join("foo/foo.go").is_file());
}

#[test]
fn test_write_user_config() {
    let temp_dir = TempDir::new().unwrap();
    let out = gowizard(
        &[
            "-cfg",
            "-author=Jane",
            "-email=jane@example.com",
            "-license=mpl",
            "-vcs=git",
            "-org=Acme",
        ],
        temp_dir.path(),
        temp_dir.path(),
    );

    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let content = std::fs::read_to_string(temp_dir.path().join(".gowizard")).unwrap();
    assert!(content.starts_with("[DEFAULT]\n"));
    for line in ["org: Acme", "author: Jane", "email: jane@example.com", "license: mpl", "vcs: git"] {
        assert!(content.lines().any(|l| l == line), "missing {line:?} in {content}");
    }
}

#[test]
fn test_new_project_then_add_program() {
    let temp_dir = TempDir::new().unwrap();
    let home = temp_dir.path().join("home");
    std::fs::create_dir(&home).unwrap();

    let out = gowizard(
        &[
            "-type=pkg",
            "-project=Demo",
            "-license=mpl",
            "-org=Acme",
            "-author=Jane",
            "-email=jane@example.com",
            "-vcs=none",
        ],
        temp_dir.path(),
        &home,
    );
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let project = temp_dir.path().join("demo");
    assert!(project.join("demo.go").is_file());

    // pretend the project was created in 2010
    let readme = std::fs::read_to_string(project.join("README.md")).unwrap();
    let year = readme
        .lines()
        .find(|line| line.contains("Authors*"))
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap()
        .to_string();
    std::fs::write(project.join("README.md"), readme.replace(&year, "2010")).unwrap();

    let out = gowizard(
        &["-add", "-type=pkg", "-program=helper", "-license=mpl"],
        &project,
        &home,
    );
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let source = std::fs::read_to_string(project.join("helper/helper.go")).unwrap();
    assert!(source.starts_with("// Copyright 2010 The Demo Authors\n"), "{source}");
}

#[test]
fn test_add_program_outside_a_project() {
    let temp_dir = TempDir::new().unwrap();
    let cwd = temp_dir.path().join("empty");
    std::fs::create_dir(&cwd).unwrap();

    let out =
        gowizard(&["-add", "-type=pkg", "-program=helper", "-license=mpl"], &cwd, temp_dir.path());
    assert_eq!(out.status.code(), Some(2));
    assert!(!cwd.join("helper").exists());
}
