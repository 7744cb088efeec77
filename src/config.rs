use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{AbError, AbResult};

pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Application-level settings, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub app_title: String,
    /// A `tracing` filter directive such as `info` or `addressbook=debug`.
    pub log_level: String,
    pub user_prefs_file_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_title: "Address App".into(),
            log_level: "warn".into(),
            user_prefs_file_path: PathBuf::from("preferences.json"),
        }
    }
}

/// Per-user preferences, written back on exit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPrefs {
    pub address_book_file_path: PathBuf,
    pub address_book_name: String,
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            address_book_file_path: PathBuf::from("data").join("addressbook.db"),
            address_book_name: "MyAddressBook".into(),
        }
    }
}

/// Reads a JSON file. `Ok(None)` when the file does not exist.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> AbResult<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let text = std::fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&text)?))
}

pub fn save_json_file<T: Serialize>(path: &Path, value: &T) -> AbResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Where a loaded value came from.
#[derive(Debug)]
pub enum Source {
    File,
    Missing,
    Malformed(AbError),
}

/// A value read by [`load`], plus what happened along the way. Nothing is
/// logged until [`Loaded::log`], so the config can be read before the
/// subscriber that depends on it exists.
#[derive(Debug)]
pub struct Loaded<T> {
    pub value: T,
    pub source: Source,
    pub write_error: Option<AbError>,
}

impl<T> Loaded<T> {
    pub fn log(&self, path: &Path) {
        match &self.source {
            Source::File => debug!(path = %path.display(), "loaded file"),
            Source::Missing => info!(path = %path.display(), "file not found, using defaults"),
            Source::Malformed(e) => {
                warn!(path = %path.display(), error = %e, "file is not in the correct format, using defaults")
            }
        }
        if let Some(e) = &self.write_error {
            warn!(path = %path.display(), error = %e, "failed to save file");
        }
    }
}

/// Loads `path`, falling back to defaults when it is missing or unreadable.
/// The result is written back so a fresh install ends up with a file to edit.
pub fn load<T>(path: &Path) -> Loaded<T>
where
    T: DeserializeOwned + Serialize + Default,
{
    let (value, source) = match read_json_file(path) {
        Ok(Some(value)) => (value, Source::File),
        Ok(None) => (T::default(), Source::Missing),
        Err(e) => (T::default(), Source::Malformed(e)),
    };
    let write_error = save_json_file(path, &value).err();
    Loaded {
        value,
        source,
        write_error,
    }
}

/// [`load`] for callers that run after logging is set up.
pub fn load_or_default<T>(path: &Path) -> T
where
    T: DeserializeOwned + Serialize + Default,
{
    let loaded = load(path);
    loaded.log(path);
    loaded.value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: Config = serde_json::from_str(r#"{"appTitle":"Typical App Title"}"#).unwrap();
        assert_eq!(config.app_title, "Typical App Title");
        assert_eq!(config.log_level, Config::default().log_level);
    }

    #[test]
    fn prefs_use_camel_case_keys() {
        let json = serde_json::to_string(&UserPrefs::default()).unwrap();
        assert!(json.contains("addressBookFilePath"));
        assert!(json.contains("addressBookName"));
    }
}
