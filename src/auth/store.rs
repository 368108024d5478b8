//! Durable storage for session material.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::session::SessionData;
use crate::Result;

/// A durable key-value blob holding the persisted [`SessionData`].
///
/// The store is a passive serialization target: the client owns the
/// session and reads/writes the store only at construction (device-token
/// bootstrap), [`dump`](crate::RobinhoodClient::dump), and
/// [`load`](crate::RobinhoodClient::load).
pub trait SessionStore: Send + Sync {
    /// Read the persisted record, or `None` if the store is empty.
    fn read(&self) -> Result<Option<SessionData>>;

    /// Write the record, replacing any previous contents.
    fn write(&self, data: &SessionData) -> Result<()>;
}

/// A [`SessionStore`] backed by a JSON file.
///
/// The file must survive process restarts; the device token written on
/// first construction is reused by every later client over the same path.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store over the given file path. The file is created on the
    /// first write.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileStore {
    fn read(&self) -> Result<Option<SessionData>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        if bytes.is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    fn write(&self, data: &SessionData) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(data)?;
        std::fs::write(&self.path, bytes)?;
        Ok(())
    }
}

/// An in-memory [`SessionStore`] for tests and ephemeral sessions.
///
/// Clones share the same underlying record.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Option<SessionData>>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn read(&self) -> Result<Option<SessionData>> {
        Ok(self.inner.lock().expect("store lock poisoned").clone())
    }

    fn write(&self, data: &SessionData) -> Result<()> {
        *self.inner.lock().expect("store lock poisoned") = Some(data.clone());
        Ok(())
    }
}
