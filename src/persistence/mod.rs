//! Save/load persistence
//!
//! Features:
//! - Raw key/value `Storage` backends (memory, file, browser LocalStorage)
//! - JSON encoding via serde
//! - Load never fails: a missing or corrupt record yields the caller's default
//! - Save is fire-and-forget: failures are logged, not propagated

use std::collections::HashMap;
use std::io;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod local;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;

/// A named-record store
pub trait Storage {
    /// Read a record. `Ok(None)` means the record does not exist.
    fn read(&self, key: &str) -> io::Result<Option<String>>;

    /// Replace a record
    fn write(&mut self, key: &str, contents: &str) -> io::Result<()>;
}

/// Load a record, returning `default` on any read or parse failure
pub fn try_load<T, S>(storage: &S, key: &str, default: T) -> T
where
    T: DeserializeOwned,
    S: Storage + ?Sized,
{
    match storage.read(key) {
        Ok(Some(json)) => match serde_json::from_str(&json) {
            Ok(value) => {
                log::info!("Loaded '{}'", key);
                value
            }
            Err(e) => {
                log::warn!("Corrupt record '{}', using default: {}", key, e);
                default
            }
        },
        Ok(None) => {
            log::info!("No record '{}', using default", key);
            default
        }
        Err(e) => {
            log::warn!("Failed to read '{}', using default: {}", key, e);
            default
        }
    }
}

/// Save a record; failures are logged and dropped
pub fn save<T, S>(storage: &mut S, key: &str, value: &T)
where
    T: Serialize + ?Sized,
    S: Storage + ?Sized,
{
    let json = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("Failed to encode '{}': {}", key, e);
            return;
        }
    };
    match storage.write(key, &json) {
        Ok(()) => log::info!("Saved '{}'", key),
        Err(e) => log::warn!("Failed to save '{}': {}", key, e),
    }
}

/// In-memory storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    records: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.records.get(key).cloned())
    }

    fn write(&mut self, key: &str, contents: &str) -> io::Result<()> {
        self.records.insert(key.to_string(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStorage;

    impl Storage for BrokenStorage {
        fn read(&self, _key: &str) -> io::Result<Option<String>> {
            Err(io::Error::other("disk on fire"))
        }

        fn write(&mut self, _key: &str, _contents: &str) -> io::Result<()> {
            Err(io::Error::other("disk on fire"))
        }
    }

    #[test]
    fn test_missing_record_yields_default() {
        let storage = MemoryStorage::new();
        let value: Vec<u32> = try_load(&storage, "nothing", vec![7]);
        assert_eq!(value, vec![7]);
    }

    #[test]
    fn test_corrupt_record_yields_default() {
        let mut storage = MemoryStorage::new();
        storage.write("numbers", "{ not json").unwrap();
        let value: Vec<u32> = try_load(&storage, "numbers", Vec::new());
        assert!(value.is_empty());
    }

    #[test]
    fn test_read_error_yields_default() {
        let value: u32 = try_load(&BrokenStorage, "anything", 3);
        assert_eq!(value, 3);
    }

    #[test]
    fn test_save_then_load() {
        let mut storage = MemoryStorage::new();
        save(&mut storage, "numbers", &vec![1u32, 2, 3]);
        let value: Vec<u32> = try_load(&storage, "numbers", Vec::new());
        assert_eq!(value, vec![1, 2, 3]);
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        let mut storage = BrokenStorage;
        save(&mut storage, "numbers", &vec![1u32]);
    }
}
