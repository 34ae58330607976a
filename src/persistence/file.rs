//! File-backed storage for native builds: one `<dir>/<key>.json` per record

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::Storage;

#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&mut self, key: &str, contents: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        // Write to a temp file first so a crash never leaves a torn record
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, contents)?;
        fs::rename(tmp, self.path_for(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("froggy-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_missing_file_reads_none() {
        let storage = FileStorage::new(scratch_dir("missing"));
        assert!(storage.read("pisteet").unwrap().is_none());
    }

    #[test]
    fn test_write_creates_dir_and_reads_back() {
        let dir = scratch_dir("roundtrip");
        let mut storage = FileStorage::new(&dir);
        storage.write("pisteet", "[1,2]").unwrap();
        assert_eq!(storage.read("pisteet").unwrap().as_deref(), Some("[1,2]"));
        assert!(dir.join("pisteet.json").exists());
        let _ = fs::remove_dir_all(dir);
    }
}
