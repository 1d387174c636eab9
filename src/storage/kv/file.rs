//! File-backed key/value store: one `<key>.json` file per key inside a data directory.

use super::KeyValueStore;
use anyhow::Result;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens (and creates if needed) the data directory.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if !valid_key(key) {
            return Err(anyhow::anyhow!("Invalid store key '{}'", key));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

fn valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn put(&self, key: &str, value: String) -> Result<()> {
        let path = self.path_for(key)?;
        // Write-then-rename; readers never see a partial collection.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).await?;
        if let Err(e) = fs::rename(&tmp, &path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn round_trips_and_removes() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("data")).await.unwrap();

        assert_eq!(store.get("lunchboxd_reviews").await.unwrap(), None);
        store.put("lunchboxd_reviews", "[]".to_string()).await.unwrap();
        assert_eq!(
            store.get("lunchboxd_reviews").await.unwrap().as_deref(),
            Some("[]")
        );

        store.remove("lunchboxd_reviews").await.unwrap();
        store.remove("lunchboxd_reviews").await.unwrap();
        assert_eq!(store.get("lunchboxd_reviews").await.unwrap(), None);
    }

    #[tokio::test]
    async fn rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).await.unwrap();
        assert!(store.get("../etc/passwd").await.is_err());
        assert!(store.put("", "x".to_string()).await.is_err());
    }

    #[tokio::test]
    async fn failed_rename_cleans_up_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).await.unwrap();
        // A non-empty directory squatting on the target path makes the rename fail.
        let target = dir.path().join("lunchboxd_users.json");
        fs::create_dir(&target).await.unwrap();
        fs::write(target.join("keep"), "x").await.unwrap();

        assert!(store.put("lunchboxd_users", "[]".to_string()).await.is_err());
        assert!(!dir.path().join("lunchboxd_users.json.tmp").exists());
    }
}
