//! PATH lookup against fake executables in temporary directories.
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use sdkprobe_core::{EnvironmentSnapshot, ToolLocatorPort, java_tool_exists};
use sdkprobe_runtime::PathToolLocator;
use tempfile::TempDir;

fn write_tool(dir: &Path, name: &str, mode: u32) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
    path
}

#[test]
fn locates_executable_in_search_path() {
    let dir = TempDir::new().unwrap();
    let tool = write_tool(dir.path(), "java", 0o755);

    let locator = PathToolLocator::with_search_path(dir.path());

    assert!(locator.exists("java"));
    assert!(java_tool_exists(&locator));
    assert_eq!(
        locator.locate("java").map(|p| p.canonicalize().unwrap()),
        Some(tool.canonicalize().unwrap())
    );
}

#[test]
fn ignores_non_executable_files() {
    let dir = TempDir::new().unwrap();
    write_tool(dir.path(), "javac", 0o644);

    let locator = PathToolLocator::with_search_path(dir.path());
    assert!(!locator.exists("javac"));
}

#[test]
fn first_directory_in_path_wins() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let expected = write_tool(first.path(), "jar", 0o755);
    write_tool(second.path(), "jar", 0o755);

    let search_path =
        std::env::join_paths([first.path(), second.path()]).expect("joinable temp paths");
    let located = PathToolLocator::with_search_path(search_path)
        .locate("jar")
        .unwrap();

    assert_eq!(located.canonicalize().unwrap(), expected.canonicalize().unwrap());
}

#[test]
fn snapshot_path_is_used_instead_of_process_path() {
    let dir = TempDir::new().unwrap();
    write_tool(dir.path(), "sdkprobe-fake-java", 0o755);

    let env = EnvironmentSnapshot::new().with("PATH", dir.path().to_str().unwrap());
    let locator = PathToolLocator::from_snapshot(&env);

    assert!(locator.exists("sdkprobe-fake-java"));
    assert!(!sdkprobe_runtime::exists("sdkprobe-fake-java"));
}
