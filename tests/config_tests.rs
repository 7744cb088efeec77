use std::fs;
use std::path::PathBuf;

use addressbook::config::{self, Config, Source, UserPrefs};

// ==========================================================================
// CONFIG FILE TESTS
// ==========================================================================

#[test]
fn missing_file_yields_defaults_and_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let config: Config = config::load_or_default(&path);
    assert_eq!(config, Config::default());
    assert!(path.exists());

    let reread: Option<Config> = config::read_json_file(&path).unwrap();
    assert_eq!(reread, Some(Config::default()));
}

#[test]
fn malformed_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    fs::write(&path, "{ not json").unwrap();

    let prefs: UserPrefs = config::load_or_default(&path);
    assert_eq!(prefs, UserPrefs::default());
}

#[test]
fn existing_values_are_kept() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    fs::write(
        &path,
        r#"{"addressBookFilePath":"elsewhere/book.db","addressBookName":"Work"}"#,
    )
    .unwrap();

    let prefs: UserPrefs = config::load_or_default(&path);
    assert_eq!(prefs.address_book_file_path, PathBuf::from("elsewhere/book.db"));
    assert_eq!(prefs.address_book_name, "Work");
}

// ==========================================================================
// LOAD OUTCOME
// ==========================================================================

#[test]
fn malformed_config_is_reported_before_being_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"logLevel": 3"#).unwrap();

    let loaded = config::load::<Config>(&path);
    assert!(matches!(loaded.source, Source::Malformed(_)));
    assert!(loaded.write_error.is_none());
    assert_eq!(loaded.value, Config::default());

    let rewritten: Option<Config> = config::read_json_file(&path).unwrap();
    assert_eq!(rewritten, Some(Config::default()));
}

#[test]
fn missing_and_present_files_are_told_apart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let first = config::load::<Config>(&path);
    assert!(matches!(first.source, Source::Missing));

    let second = config::load::<Config>(&path);
    assert!(matches!(second.source, Source::File));
    assert_eq!(second.value, first.value);
}

#[test]
fn save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("prefs.json");

    config::save_json_file(&path, &UserPrefs::default()).unwrap();
    let reread: Option<UserPrefs> = config::read_json_file(&path).unwrap();
    assert_eq!(reread, Some(UserPrefs::default()));
}
