use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use tessel_probe::{find_file, FileProbe};

#[test]
fn test_finds_nested_file() {
    let tmp = TempDir::new().unwrap();
    let deep = tmp.path().join("a").join("b").join("c");
    fs::create_dir_all(&deep).unwrap();
    fs::write(deep.join("needle.txt"), "x").unwrap();

    assert_eq!(
        find_file(tmp.path(), "needle.txt"),
        Some(deep.join("needle.txt"))
    );
}

#[test]
fn test_missing_file() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("a/b")).unwrap();
    fs::write(tmp.path().join("a/b/other"), "").unwrap();

    assert_eq!(find_file(tmp.path(), "needle.txt"), None);
}

#[test]
fn test_nonexistent_start() {
    let tmp = TempDir::new().unwrap();
    assert_eq!(find_file(tmp.path().join("missing"), "x"), None);
}

#[test]
fn test_start_is_a_file() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("plain");
    fs::write(&file, "").unwrap();
    assert_eq!(find_file(&file, "plain"), None);
}

#[test]
fn test_direct_child_found() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("target"), "").unwrap();

    assert_eq!(
        find_file(tmp.path(), "target"),
        Some(tmp.path().join("target"))
    );
}

#[test]
fn test_dev_is_never_searched() {
    assert_eq!(find_file("/dev", "null"), None);
    assert_eq!(FileProbe::new().find("/proc", "self"), None);
}

#[test]
fn test_skip_dir_prunes_real_tree() {
    let tmp = TempDir::new().unwrap();
    let hidden = tmp.path().join("hidden");
    fs::create_dir(&hidden).unwrap();
    fs::write(hidden.join("target"), "").unwrap();

    let probe = FileProbe::new().skip_dir(&hidden);
    assert_eq!(probe.find(tmp.path(), "target"), None);
    assert_eq!(
        FileProbe::new().find(tmp.path(), "target"),
        Some(hidden.join("target"))
    );
}

#[cfg(unix)]
#[test]
fn test_symlinked_directory_not_followed() {
    let outside = TempDir::new().unwrap();
    fs::write(outside.path().join("target.txt"), "elsewhere").unwrap();

    let root = TempDir::new().unwrap();
    let a = root.path().join("a");
    fs::create_dir(&a).unwrap();
    fs::write(a.join("target.txt"), "here").unwrap();
    std::os::unix::fs::symlink(outside.path(), root.path().join("b")).unwrap();

    let found = find_file(root.path(), "target.txt").unwrap();
    assert_eq!(found, a.join("target.txt"));
}

#[cfg(unix)]
#[test]
fn test_symlink_only_route_finds_nothing() {
    let outside = TempDir::new().unwrap();
    fs::write(outside.path().join("target.txt"), "").unwrap();

    let root = TempDir::new().unwrap();
    std::os::unix::fs::symlink(outside.path(), root.path().join("link")).unwrap();

    assert_eq!(find_file(root.path(), "target.txt"), None);
}

#[cfg(unix)]
#[test]
fn test_symlink_cycle_terminates() {
    let root = TempDir::new().unwrap();
    let sub = root.path().join("sub");
    fs::create_dir(&sub).unwrap();
    std::os::unix::fs::symlink(root.path(), sub.join("loop")).unwrap();

    assert_eq!(find_file(root.path(), "never"), None);
}

#[cfg(unix)]
#[test]
fn test_matching_symlink_name_is_returned() {
    let root = TempDir::new().unwrap();
    let target = root.path().join("real");
    fs::write(&target, "").unwrap();
    std::os::unix::fs::symlink(&target, root.path().join("alias")).unwrap();

    assert_eq!(
        find_file(root.path(), "alias"),
        Some(PathBuf::from(root.path()).join("alias"))
    );
}
