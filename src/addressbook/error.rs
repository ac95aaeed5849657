use crate::codec::DecodeError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddressBookError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("The given file name [{}] is not a valid file name!", .0.display())]
    InvalidStoragePath(PathBuf),

    #[error("Storage file missing: {}", .0.display())]
    MissingStorageFile(PathBuf),

    #[error("Error: unable to create file: {}", .path.display())]
    StorageCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unexpected error: unable to read from file: {}", .path.display())]
    StorageRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Storage file has invalid content (line {line}: {source})")]
    InvalidStorageContent { line: usize, source: DecodeError },

    #[error("Unexpected error: unable to write to file: {}", .path.display())]
    StorageWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AddressBookError>;
