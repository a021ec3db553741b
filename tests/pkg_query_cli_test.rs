#![cfg(unix)]

mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use common::fake_rpm;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const LISTING: &str = "printf 'kernel-core-5.14.0\\nbash-5.1.8\\nkernel-5.14.0\\nkernel-tools-5.14.0\\n'";

fn pkg_query() -> Command {
    let mut cmd = cargo_bin_cmd!("pkg-query");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn prints_matching_packages_sorted() {
    let dir = TempDir::new().unwrap();
    let rpm = fake_rpm(dir.path(), LISTING);

    pkg_query()
        .arg("--rpm")
        .arg(&rpm)
        .arg("kernel")
        .assert()
        .success()
        .stdout("kernel-5.14.0\nkernel-core-5.14.0\nkernel-tools-5.14.0\n");
}

#[test]
fn package_is_a_regex_by_default() {
    let dir = TempDir::new().unwrap();
    let rpm = fake_rpm(dir.path(), LISTING);

    pkg_query()
        .arg("--rpm")
        .arg(&rpm)
        .arg("^kernel-[a-z]")
        .assert()
        .success()
        .stdout("kernel-core-5.14.0\nkernel-tools-5.14.0\n");

    pkg_query()
        .arg("--rpm")
        .arg(&rpm)
        .arg("kernel.core")
        .assert()
        .success()
        .stdout("kernel-core-5.14.0\n");
}

#[test]
fn fixed_strings_match_literally() {
    let dir = TempDir::new().unwrap();
    let rpm = fake_rpm(
        dir.path(),
        "printf 'kernel-core-5.14.0\\nkernel.core-1.0\\nkernel(x86-64)\\n'",
    );

    pkg_query()
        .arg("--rpm")
        .arg(&rpm)
        .args(["-F", "kernel.core"])
        .assert()
        .success()
        .stdout("kernel.core-1.0\n");

    pkg_query()
        .arg("--rpm")
        .arg(&rpm)
        .args(["--fixed-strings", "kernel("])
        .assert()
        .success()
        .stdout("kernel(x86-64)\n");
}

#[test]
fn package_name_is_not_interpreted_by_a_shell() {
    let dir = TempDir::new().unwrap();
    let rpm = fake_rpm(dir.path(), LISTING);
    let marker = dir.path().join("pwned");

    pkg_query()
        .arg("--rpm")
        .arg(&rpm)
        .arg(format!("kernel; touch {}", marker.display()))
        .assert()
        .success()
        .stdout("\n");

    assert!(!marker.exists());
}

#[test]
fn failing_listing_exits_one_with_command_and_stderr() {
    let dir = TempDir::new().unwrap();
    let rpm = fake_rpm(dir.path(), "echo 'error: rpmdb open failed' >&2\nexit 1");

    pkg_query()
        .arg("--rpm")
        .arg(&rpm)
        .arg("kernel")
        .assert()
        .code(1)
        .stdout("")
        .stderr(contains(format!("Failed to run cmd '{} -qa'", rpm.display())))
        .stderr(contains("error: rpmdb open failed"));
}

#[test]
fn missing_program_exits_one() {
    pkg_query()
        .args(["--rpm", "/nonexistent/bin/rpm", "kernel"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(contains("/nonexistent/bin/rpm -qa"))
        .stderr(contains("Caught IO error"));
}

#[test]
fn bad_regex_is_an_argument_error() {
    let dir = TempDir::new().unwrap();
    let rpm = fake_rpm(dir.path(), LISTING);

    pkg_query()
        .arg("--rpm")
        .arg(&rpm)
        .arg("kernel(")
        .assert()
        .code(2)
        .stderr(contains("Invalid pattern"));
}

#[test]
fn blank_package_is_rejected() {
    pkg_query()
        .args(["--rpm", "/nonexistent/bin/rpm", "  "])
        .assert()
        .code(1)
        .stderr(contains("package"))
        .stderr(contains("Caught IO error").not());
}
