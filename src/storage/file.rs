//! FileBackend - Local File Storage
//!
//! Each key maps to `<dir>/<key>.json`.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use serde::de::IgnoredAny;
use snafu::ResultExt;
use tracing::debug;

use super::PersistenceBackend;
use crate::constants::STORAGE_FILE_EXTENSION;
use crate::error::{
    Error, MalformedPersistedDataSnafu, PersistenceReadSnafu, PersistenceWriteSnafu, Result,
};
use crate::helpers::get_or_create_data_dir;

/// Backend that persists each key as a file in one directory
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Use `dir` as the storage root, creating it on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Backend rooted at the platform data directory
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(get_or_create_data_dir()?))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolve the file path for a key
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.{STORAGE_FILE_EXTENSION}")))
    }
}

fn validate_key(key: &str) -> Result<()> {
    let bad = key.is_empty()
        || key.contains(['/', '\\'])
        || key.contains("..")
        || key.chars().any(char::is_control);
    if bad {
        return Err(Error::Invalid {
            message: format!("storage key '{key}' is not a valid file name"),
        });
    }
    Ok(())
}

/// Error for a stored file that is not UTF-8
///
/// Non-UTF-8 bytes are never valid JSON, so the decoder's error is reported as malformed data.
fn decode_error(key: &str, bytes: &[u8]) -> Result<Option<String>> {
    serde_json::from_slice::<IgnoredAny>(bytes).context(MalformedPersistedDataSnafu { key })?;
    Err(io::Error::new(ErrorKind::InvalidData, "stored value is not valid UTF-8"))
        .context(PersistenceReadSnafu { key })
}

impl PersistenceBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e).context(PersistenceReadSnafu { key }),
        };
        match String::from_utf8(bytes) {
            Ok(content) => Ok(Some(content)),
            Err(e) => decode_error(key, e.as_bytes()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).context(PersistenceWriteSnafu { key })?;
        }
        fs::write(&path, value).context(PersistenceWriteSnafu { key })?;
        debug!(path = ?path, bytes = value.len(), "Wrote storage file");
        Ok(())
    }
}
