use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// Fixed key the session record is persisted under, mirroring the browser
/// local-storage key of the original client.
pub const SESSION_STORAGE_KEY: &str = "livestoq_user";

/// The single session record: just the signed-in username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub username: String,
}

/// Persistence seam for the session mirror. The demo ships a memory-only
/// implementation and a JSON-file one standing in for local storage.
pub trait SessionStorage: Send + Sync {
    fn save(&self, record: &SessionRecord) -> Result<(), SessionStorageError>;
    fn load(&self) -> Result<Option<SessionRecord>, SessionStorageError>;
    fn clear(&self) -> Result<(), SessionStorageError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SessionStorageError {
    #[error("session file unreadable: {0}")]
    Io(#[from] std::io::Error),
    #[error("session file corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[derive(Default)]
pub struct InMemorySessionStorage {
    record: Mutex<Option<SessionRecord>>,
}

impl SessionStorage for InMemorySessionStorage {
    fn save(&self, record: &SessionRecord) -> Result<(), SessionStorageError> {
        *self.record.lock().expect("session mutex poisoned") = Some(record.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<SessionRecord>, SessionStorageError> {
        Ok(self.record.lock().expect("session mutex poisoned").clone())
    }

    fn clear(&self) -> Result<(), SessionStorageError> {
        *self.record.lock().expect("session mutex poisoned") = None;
        Ok(())
    }
}

/// File-backed storage: a JSON object keyed by [`SESSION_STORAGE_KEY`].
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_map(&self) -> Result<BTreeMap<String, SessionRecord>, SessionStorageError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn write_map(&self, map: &BTreeMap<String, SessionRecord>) -> Result<(), SessionStorageError> {
        let raw = serde_json::to_string(map)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl SessionStorage for FileSessionStorage {
    fn save(&self, record: &SessionRecord) -> Result<(), SessionStorageError> {
        let mut map = self.read_map()?;
        map.insert(SESSION_STORAGE_KEY.to_string(), record.clone());
        self.write_map(&map)
    }

    fn load(&self) -> Result<Option<SessionRecord>, SessionStorageError> {
        Ok(self.read_map()?.remove(SESSION_STORAGE_KEY))
    }

    fn clear(&self) -> Result<(), SessionStorageError> {
        let mut map = self.read_map()?;
        if map.remove(SESSION_STORAGE_KEY).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_path(tag: &str) -> PathBuf {
        env::temp_dir().join(format!("livestoq_session_{tag}_{}.json", std::process::id()))
    }

    #[test]
    fn file_storage_round_trips_under_the_fixed_key() {
        let path = temp_path("roundtrip");
        let storage = FileSessionStorage::new(path.clone());
        storage
            .save(&SessionRecord {
                username: "Testing".to_string(),
            })
            .expect("saves");

        let raw = fs::read_to_string(&path).expect("file exists");
        assert!(raw.contains(SESSION_STORAGE_KEY));

        let loaded = storage.load().expect("loads").expect("present");
        assert_eq!(loaded.username, "Testing");

        storage.clear().expect("clears");
        assert!(storage.load().expect("loads").is_none());

        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_file_reads_as_no_session() {
        let storage = FileSessionStorage::new(temp_path("missing"));
        assert!(storage.load().expect("loads").is_none());
    }
}
