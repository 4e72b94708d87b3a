use jotpad::error::JotpadError;
use jotpad::store::backend::StorageBackend;
use jotpad::store::fs_backend::FsBackend;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_item_io() {
    let (_dir, backend) = setup();

    assert_eq!(backend.get_item("@texts").unwrap(), None);

    backend.set_item("@texts", "[]").unwrap();
    assert_eq!(backend.get_item("@texts").unwrap(), Some("[]".to_string()));

    backend.set_item("@texts", "[{}]").unwrap();
    assert_eq!(backend.get_item("@texts").unwrap(), Some("[{}]".to_string()));
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();

    backend.set_item("@texts", "first").unwrap();
    backend.set_item("@texts", "second").unwrap();

    let expected_path = dir.path().join("_texts.json");
    assert_eq!(backend.item_path("@texts"), expected_path);
    assert_eq!(fs::read_to_string(&expected_path).unwrap(), "second");

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_creates_missing_root() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("nested").join("data");
    let backend = FsBackend::new(root.clone());

    backend.set_item("notes", "[]").unwrap();
    assert!(root.join("notes.json").exists());
}

#[test]
fn test_fs_backend_keys_are_separate_slots() {
    let (_dir, backend) = setup();

    backend.set_item("a", "1").unwrap();
    backend.set_item("b", "2").unwrap();
    assert_eq!(backend.get_item("a").unwrap().as_deref(), Some("1"));
    assert_eq!(backend.get_item("b").unwrap().as_deref(), Some("2"));
}

#[test]
fn test_fs_backend_unreadable_slot_is_read_error() {
    let (dir, backend) = setup();
    // A directory where the file should be makes the read fail.
    fs::create_dir(dir.path().join("_texts.json")).unwrap();

    let err = backend.get_item("@texts").unwrap_err();
    assert!(matches!(err, JotpadError::StorageRead(_)));
}
