use super::{select_keys, IKeyValueStore, KeyValueRecord};
use anyhow::Context;
use std::path::PathBuf;
use tokio::sync::Mutex;

/// Storage area persisted as a single JSON object on disk
pub struct FileKeyValueStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles of `set`
    lock: Mutex<()>,
}

impl FileKeyValueStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    async fn read_all(&self) -> anyhow::Result<KeyValueRecord> {
        let content = match tokio::fs::read(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(KeyValueRecord::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("Unable to read {}", self.path.display()))
            }
        };
        if content.is_empty() {
            return Ok(KeyValueRecord::new());
        }
        serde_json::from_slice(&content)
            .with_context(|| format!("Malformed storage file {}", self.path.display()))
    }
}

#[async_trait::async_trait]
impl IKeyValueStore for FileKeyValueStore {
    async fn get(&self, keys: &[&str]) -> anyhow::Result<KeyValueRecord> {
        let _guard = self.lock.lock().await;
        let stored = self.read_all().await?;
        Ok(select_keys(&stored, keys))
    }

    async fn set(&self, record: KeyValueRecord) -> anyhow::Result<()> {
        let _guard = self.lock.lock().await;
        let mut stored = self.read_all().await?;
        stored.extend(record);

        let content = serde_json::to_vec_pretty(&stored)?;
        // Write next to the target and rename so a crash never leaves half a file
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("Unable to write {}", tmp_path.display()))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .with_context(|| format!("Unable to replace {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hosts::InMemoryKeyValueStore;
    use serde_json::json;

    fn temp_storage_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("wf_review_{}_{}.json", name, uuid::Uuid::new_v4()))
    }

    /// Runs the same queries against file and in-memory storage
    fn create_stores(name: &str) -> Vec<(Box<dyn IKeyValueStore>, Option<PathBuf>)> {
        let path = temp_storage_path(name);
        vec![
            (Box::new(InMemoryKeyValueStore::new()), None),
            (Box::new(FileKeyValueStore::new(path.clone())), Some(path)),
        ]
    }

    #[tokio::test]
    async fn test_kv_queries() {
        for (store, path) in create_stores("queries") {
            assert!(store.get(&["tip"]).await.unwrap().is_empty());

            let mut first = KeyValueRecord::new();
            first.insert("tip".into(), json!("hello"));
            first.insert("interval".into(), json!(240));
            store.set(first).await.unwrap();

            let mut second = KeyValueRecord::new();
            second.insert("tip".into(), json!("bye"));
            store.set(second).await.unwrap();

            let res = store.get(&["tip", "interval", "missing"]).await.unwrap();
            assert_eq!(res.len(), 2);
            assert_eq!(res["tip"], json!("bye"));
            assert_eq!(res["interval"], json!(240));

            if let Some(path) = path {
                let _ = std::fs::remove_file(path);
            }
        }
    }

    #[tokio::test]
    async fn it_reports_malformed_files() {
        let path = temp_storage_path("malformed");
        std::fs::write(&path, b"not json").unwrap();
        let store = FileKeyValueStore::new(path.clone());
        assert!(store.get(&["tip"]).await.is_err());
        let _ = std::fs::remove_file(path);
    }
}
