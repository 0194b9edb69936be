use quickstart::walker::list_files;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_lists_nested_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::write(root.join("top.txt"), "top").unwrap();
    fs::create_dir_all(root.join("a/b")).unwrap();
    fs::write(root.join("a/mid.txt"), "mid").unwrap();
    fs::write(root.join("a/b/deep.txt"), "deep").unwrap();

    let files = list_files(root).unwrap();
    assert_eq!(files.len(), 3);
    assert!(files.iter().all(|p| p.is_file()));
    assert!(files.iter().any(|p| p.ends_with("a/b/deep.txt")));
}

#[test]
fn test_directories_never_yielded() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::create_dir_all(root.join("empty/nested")).unwrap();

    let files = list_files(root).unwrap();
    assert!(files.is_empty());
}

#[test]
fn test_missing_root_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("does-not-exist");

    assert!(list_files(&missing).is_err());
}
