//! Browser LocalStorage backend (wasm32 only)

use std::io;

use super::Storage;

#[derive(Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> io::Result<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| io::Error::other("LocalStorage unavailable"))
    }
}

impl Storage for LocalStorage {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| io::Error::other("LocalStorage read failed"))
    }

    fn write(&mut self, key: &str, contents: &str) -> io::Result<()> {
        Self::storage()?
            .set_item(key, contents)
            .map_err(|_| io::Error::other("LocalStorage write failed"))
    }
}
