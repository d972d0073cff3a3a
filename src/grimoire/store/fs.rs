use super::KeyValueStore;
use crate::error::{GrimoireError, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

pub const STORAGE_FILENAME: &str = "storage.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn storage_path(&self) -> PathBuf {
        self.root.join(STORAGE_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(GrimoireError::Io)?;
        }
        Ok(())
    }

    /// Reads every key. Values that are not strings are kept as written and
    /// read back as their JSON text. A file that is not a JSON object reads as
    /// empty, the same as a cleared browser store, and is replaced on the next
    /// write.
    fn load_entries(&self) -> Result<Map<String, Value>> {
        let path = self.storage_path();
        if !path.exists() {
            return Ok(Map::new());
        }
        let content = fs::read_to_string(&path).map_err(GrimoireError::Io)?;
        match serde_json::from_str(&content) {
            Ok(Value::Object(entries)) => Ok(entries),
            Ok(other) => {
                tracing::warn!(
                    path = %path.display(),
                    discarded = %other,
                    "storage file is not a JSON object, starting empty"
                );
                Ok(Map::new())
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    discarded = %content,
                    "unreadable storage file, starting empty"
                );
                Ok(Map::new())
            }
        }
    }

    fn save_entries(&self, entries: &Map<String, Value>) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(entries).map_err(GrimoireError::Serialization)?;

        let tmp_file = self
            .root
            .join(format!(".storage-{}.tmp", std::process::id()));
        fs::write(&tmp_file, content).map_err(GrimoireError::Io)?;
        fs::rename(&tmp_file, self.storage_path()).map_err(GrimoireError::Io)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load_entries()?.remove(key).map(|value| match value {
            Value::String(s) => s,
            other => other.to_string(),
        }))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.load_entries()?;
        entries.insert(key.to_string(), Value::String(value.to_string()));
        self.save_entries(&entries)?;
        tracing::debug!(key, bytes = value.len(), "stored value");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_absent() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("nested"));
        assert_eq!(store.get("selectedCards").unwrap(), None);
    }

    #[test]
    fn set_then_get_survives_a_new_handle() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("data"));
        store.set("selectedCards", r#"["a"]"#).unwrap();
        store.set("other", "value").unwrap();

        let reopened = FileStore::new(temp.path().join("data"));
        assert_eq!(
            reopened.get("selectedCards").unwrap().as_deref(),
            Some(r#"["a"]"#)
        );
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn set_overwrites_previous_value() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path());
        store.set("k", "1").unwrap();
        store.set("k", "2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn corrupt_file_reads_empty_and_is_replaced_on_write() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(STORAGE_FILENAME), "{{{ nope").unwrap();

        let mut store = FileStore::new(temp.path());
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn non_string_values_survive_other_writes() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(STORAGE_FILENAME),
            r#"{"selectedCards": ["a"], "other": "x", "count": 3}"#,
        )
        .unwrap();

        let mut store = FileStore::new(temp.path());
        assert_eq!(store.get("selectedCards").unwrap().as_deref(), Some(r#"["a"]"#));
        assert_eq!(store.get("count").unwrap().as_deref(), Some("3"));

        store.set("selectedCards", r#"["b"]"#).unwrap();
        assert_eq!(store.get("selectedCards").unwrap().as_deref(), Some(r#"["b"]"#));
        assert_eq!(store.get("other").unwrap().as_deref(), Some("x"));
        assert_eq!(store.get("count").unwrap().as_deref(), Some("3"));
    }

    #[test]
    fn non_object_file_reads_empty() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(STORAGE_FILENAME), r#"["a", "b"]"#).unwrap();

        let store = FileStore::new(temp.path());
        assert_eq!(store.get("selectedCards").unwrap(), None);
    }

    #[test]
    fn no_temp_files_left_behind() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path());
        store.set("k", "v").unwrap();

        let names: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec![STORAGE_FILENAME.to_string()]);
    }
}
