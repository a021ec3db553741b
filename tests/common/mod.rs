#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Writes an executable shell script standing in for `rpm`.
#[cfg(unix)]
pub fn fake_rpm(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-rpm");
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("write fake rpm");
    let mut perms = fs::metadata(&path).expect("stat fake rpm").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("chmod fake rpm");
    path
}

pub fn count_lines(path: &Path) -> usize {
    fs::read_to_string(path).expect("read log file").lines().count()
}
