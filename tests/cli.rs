//! End-to-end tests for the build-packages binary.
//!
//! Process-level builds use `sh` as the interpreter, so each module's
//! `setup.py` is a small shell script receiving `bdist_wheel -d <dist_dir>`.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use wheel_release_builder::core::PACKAGE_MODULES;

fn build_cmd() -> Command {
    cargo_bin_cmd!("build-packages")
}

/// Create a clone root where every module's setup.py has `script` as content
fn create_clone(script: impl Fn(usize) -> String) -> TempDir {
    let root = TempDir::new().unwrap();
    for (i, relative) in PACKAGE_MODULES.iter().enumerate() {
        let dir = root.path().join(relative);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("setup.py"), script(i + 1)).unwrap();
    }
    root
}

/// Shell script that logs the module name and drops a wheel into the dist dir
const RECORDING_SETUP: &str = r#"name=$(basename "$PWD")
echo "$name" >> "$3/order.log"
touch "$3/$(echo "$name" | tr - _)-0.1.0-py3-none-any.whl"
"#;

fn read_order(dist: &Path) -> Vec<String> {
    fs::read_to_string(dist.join("order.log"))
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn no_arguments_is_a_usage_error() {
    build_cmd()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn missing_clone_root_is_a_usage_error() {
    build_cmd().arg("/tmp/out").assert().code(1);
}

#[test]
fn help_exits_successfully() {
    build_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("DIST_DIR"));
}

#[test]
fn missing_descriptor_fails_fast() {
    let clone = TempDir::new().unwrap();
    let dist = TempDir::new().unwrap();

    build_cmd()
        .arg(dist.path())
        .arg(clone.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to find file"))
        .stderr(predicate::str::contains("azdos-cli-common"));
}

#[test]
fn dry_run_checks_descriptors_without_building() {
    let clone = create_clone(|_| "exit 1\n".to_string());
    let dist = TempDir::new().unwrap();
    let dist_str = dist.path().to_string_lossy().to_string();

    build_cmd()
        .arg("--dry-run")
        .arg(&dist_str)
        .arg(clone.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "packages would be built to {dist_str}"
        )))
        .stdout(predicate::str::contains("were built").not())
        .stdout(predicate::str::contains("Done."));
}

#[cfg(unix)]
#[test]
fn builds_every_module_in_manifest_order() {
    let clone = create_clone(|_| RECORDING_SETUP.to_string());
    let dist = TempDir::new().unwrap();
    let dist_str = dist.path().to_string_lossy().to_string();

    build_cmd()
        .args(["--python", "sh"])
        .arg(&dist_str)
        .arg(clone.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(dist_str.as_str()));

    let expected: Vec<String> = PACKAGE_MODULES
        .iter()
        .map(|m| m.rsplit('/').next().unwrap().to_string())
        .collect();
    assert_eq!(read_order(dist.path()), expected);
    assert!(
        dist.path()
            .join("azdos_cli_work_common-0.1.0-py3-none-any.whl")
            .is_file()
    );
}

#[cfg(unix)]
#[test]
fn failed_build_stops_remaining_modules() {
    let clone = create_clone(|i| {
        if i == 5 {
            format!("{RECORDING_SETUP}exit 4\n")
        } else {
            RECORDING_SETUP.to_string()
        }
    });
    let dist = TempDir::new().unwrap();

    build_cmd()
        .args(["--python", "sh"])
        .arg(dist.path())
        .arg(clone.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Done.").not())
        .stderr(predicate::str::contains("Error building"))
        .stderr(predicate::str::contains("azdos-cli-package-common"));

    assert_eq!(read_order(dist.path()).len(), 5);
}

#[test]
fn unspawnable_interpreter_fails() {
    let clone = create_clone(|_| String::new());
    let dist = TempDir::new().unwrap();

    build_cmd()
        .args(["--python", "nonexistent_interpreter_12345"])
        .arg(dist.path())
        .arg(clone.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nonexistent_interpreter_12345"))
        .stdout(predicate::str::contains("Done.").not());
}
