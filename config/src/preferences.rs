//! Key-value storage for settings that outlive a session.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use thiserror::Error;
use toml_edit::DocumentMut;

use roster_utils::{AtomicWriteOptions, FileSyncPolicy, ParentDirSyncPolicy};

use crate::paths::preferences_path;

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("could not determine the preferences location")]
    NoLocation,
    #[error("preferences I/O failed at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("preferences at {} are not valid TOML: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml_edit::TomlError,
    },
}

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Preferences kept as top-level string keys in a TOML file.
///
/// Writes go through `toml_edit` so comments and unrelated keys survive, and
/// land on disk via temp file + rename.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<roster home>/preferences.toml`.
    pub fn open_default() -> Result<Self, PreferenceError> {
        preferences_path()
            .map(Self::new)
            .ok_or(PreferenceError::NoLocation)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> PreferenceError {
        PreferenceError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read_document(&self) -> Result<Option<DocumentMut>, PreferenceError> {
        roster_utils::recover_bak_file(&self.path);
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(self.io_error(err)),
        };
        content
            .parse::<DocumentMut>()
            .map(Some)
            .map_err(|source| PreferenceError::Parse {
                path: self.path.clone(),
                source,
            })
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let Some(doc) = self.read_document()? else {
            return Ok(None);
        };
        Ok(doc
            .get(key)
            .and_then(|item| item.as_str())
            .map(ToString::to_string))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }

        // An unparseable file is replaced rather than blocking every future write.
        let mut doc = match self.read_document() {
            Ok(doc) => doc.unwrap_or_default(),
            Err(PreferenceError::Parse { source, .. }) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "Replacing unparseable preferences file: {source}"
                );
                DocumentMut::new()
            }
            Err(err) => return Err(err),
        };
        doc[key] = toml_edit::value(value);

        roster_utils::atomic_write_with_options(
            &self.path,
            doc.to_string().as_bytes(),
            AtomicWriteOptions {
                file_sync: FileSyncPolicy::SyncAll,
                parent_dir_sync: ParentDirSyncPolicy::SyncBestEffort,
            },
        )
        .map_err(|err| self.io_error(err))?;

        tracing::debug!(path = %self.path.display(), key, value, "Preference saved");
        Ok(())
    }
}

/// In-memory store. Clones share the same map, so a clone handed to a new
/// reader sees what an earlier writer saved (like a reload in the same profile).
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    #[must_use]
    pub fn value(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.value(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
