use std::env;

use vanilladata::{get_dataset_dir, DATA_DIR_ENV};

#[test]
fn resolves_and_creates_dataset_dir() {
    let base = tempfile::tempdir().expect("temp dir");
    let dir = get_dataset_dir("mnist", Some(base.path()), None, true).expect("resolve");
    assert_eq!(dir, base.path().join("mnist"));
    assert!(dir.is_dir());

    // Resolving again is idempotent and yields the same path.
    let again = get_dataset_dir("mnist", Some(base.path()), None, true).expect("resolve again");
    assert_eq!(dir, again);
    assert!(again.is_dir());
}

#[test]
fn folder_override_wins_over_dataset_name() {
    let base = tempfile::tempdir().expect("temp dir");
    let dir = get_dataset_dir("mnist", Some(base.path()), Some("override"), true).expect("resolve");
    assert!(dir.ends_with("override"));
    assert_eq!(dir, base.path().join("override"));
    assert!(dir.is_dir());
}

#[test]
fn without_create_flag_nothing_is_written() {
    let base = tempfile::tempdir().expect("temp dir");
    let dir = get_dataset_dir("news", Some(base.path()), None, false).expect("resolve");
    assert_eq!(dir, base.path().join("news"));
    assert!(!dir.exists());
}

#[test]
fn environment_variable_selects_base_dir() {
    let base = tempfile::tempdir().expect("temp dir");
    env::set_var(DATA_DIR_ENV, base.path());
    let dir = get_dataset_dir("digits", None, None, true);
    env::remove_var(DATA_DIR_ENV);

    let dir = dir.expect("resolve");
    assert_eq!(dir, base.path().join("digits"));
    assert!(dir.is_dir());
}
