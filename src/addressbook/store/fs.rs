use super::DataStore;
use crate::codec;
use crate::error::{AddressBookError, Result};
use crate::model::Person;
use log::{debug, info};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Opens a store backed by `path`, rejecting paths that can never hold a
    /// storage file (see [`is_valid_storage_path`]).
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !is_valid_storage_path(&path) {
            return Err(AddressBookError::InvalidStoragePath(path));
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates an empty storage file if none exists. Returns whether a file
    /// was created.
    pub fn ensure_exists(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        fs::File::create(&self.path).map_err(|source| AddressBookError::StorageCreate {
            path: self.path.clone(),
            source,
        })?;
        info!(
            "event=storage_created module=store path={}",
            self.path.display()
        );
        Ok(true)
    }
}

/// A usable storage path has an existing parent directory (or none), a file
/// name with an extension that is not just a leading dot, and is not
/// something other than a regular file.
pub fn is_valid_storage_path(path: &Path) -> bool {
    let parent_ok = match path.parent() {
        None => true,
        Some(p) if p.as_os_str().is_empty() => true,
        Some(p) => p.is_dir(),
    };

    let name_ok = path
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.rfind('.'))
        .is_some_and(|dot| dot > 0);

    let kind_ok = !path.exists() || path.is_file();

    parent_ok && name_ok && kind_ok
}

fn encode_all(persons: &[Person]) -> String {
    persons
        .iter()
        .map(|p| codec::encode(p) + "\n")
        .collect()
}

fn decode_all(content: &str) -> Result<Vec<Person>> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| {
            codec::decode(line)
                .map_err(|source| AddressBookError::InvalidStorageContent { line: i + 1, source })
        })
        .collect()
}

impl DataStore for FileStore {
    fn load_persons(&self) -> Result<Vec<Person>> {
        let content = fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                AddressBookError::MissingStorageFile(self.path.clone())
            } else {
                AddressBookError::StorageRead {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        let persons = decode_all(&content)?;
        debug!(
            "event=storage_load module=store status=ok count={} path={}",
            persons.len(),
            self.path.display()
        );
        Ok(persons)
    }

    fn save_persons(&mut self, persons: &[Person]) -> Result<()> {
        fs::write(&self.path, encode_all(persons)).map_err(|source| {
            AddressBookError::StorageWrite {
                path: self.path.clone(),
                source,
            }
        })?;
        debug!(
            "event=storage_save module=store status=ok count={} path={}",
            persons.len(),
            self.path.display()
        );
        Ok(())
    }
}
