mod file;
mod inmemory;

pub use file::FileKeyValueStore;
pub use inmemory::InMemoryKeyValueStore;

/// A set of keys and their JSON values
pub type KeyValueRecord = serde_json::Map<String, serde_json::Value>;

/// The extension's private key-value storage area
#[async_trait::async_trait]
pub trait IKeyValueStore: Send + Sync {
    /// Returns the subset of `keys` that have a stored value
    async fn get(&self, keys: &[&str]) -> anyhow::Result<KeyValueRecord>;
    /// Writes every key of `record`, leaving other keys untouched
    async fn set(&self, record: KeyValueRecord) -> anyhow::Result<()>;
}

fn select_keys(stored: &KeyValueRecord, keys: &[&str]) -> KeyValueRecord {
    keys.iter()
        .filter_map(|key| {
            stored
                .get(*key)
                .map(|value| (key.to_string(), value.clone()))
        })
        .collect()
}
