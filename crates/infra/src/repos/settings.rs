use crate::hosts::{IKeyValueStore, KeyValueRecord};
use serde_json::Value;
use std::sync::Arc;
use wf_review_domain::SettingsRecord;

const INTERVAL_KEY: &str = "interval";
const TIP_KEY: &str = "tip";
const USER_DATA_KEY: &str = "userData";
const LAST_REVIEW_URL_KEY: &str = "lastReviewUrl";

#[async_trait::async_trait]
pub trait ISettingsRepo: Send + Sync {
    /// Returns an empty record on first run
    async fn load(&self) -> anyhow::Result<SettingsRecord>;
    async fn save(&self, record: &SettingsRecord) -> anyhow::Result<()>;
    async fn load_last_review_url(&self) -> anyhow::Result<Option<String>>;
    async fn save_last_review_url(&self, url: &str) -> anyhow::Result<()>;
}

/// Settings kept as separate keys of the key-value storage area
pub struct KeyValueSettingsRepo {
    store: Arc<dyn IKeyValueStore>,
}

impl KeyValueSettingsRepo {
    pub fn new(store: Arc<dyn IKeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl ISettingsRepo for KeyValueSettingsRepo {
    async fn load(&self) -> anyhow::Result<SettingsRecord> {
        let stored = self
            .store
            .get(&[INTERVAL_KEY, TIP_KEY, USER_DATA_KEY])
            .await?;
        let record = serde_json::from_value(Value::Object(stored))?;
        Ok(record)
    }

    async fn save(&self, record: &SettingsRecord) -> anyhow::Result<()> {
        match serde_json::to_value(record)? {
            Value::Object(record) => self.store.set(record).await,
            other => Err(anyhow::Error::msg(format!(
                "Settings record serialized to a non object value: {}",
                other
            ))),
        }
    }

    async fn load_last_review_url(&self) -> anyhow::Result<Option<String>> {
        let stored = self.store.get(&[LAST_REVIEW_URL_KEY]).await?;
        match stored.get(LAST_REVIEW_URL_KEY) {
            Some(Value::String(url)) if !url.is_empty() => Ok(Some(url.clone())),
            _ => Ok(None),
        }
    }

    async fn save_last_review_url(&self, url: &str) -> anyhow::Result<()> {
        let mut record = KeyValueRecord::new();
        record.insert(LAST_REVIEW_URL_KEY.into(), Value::String(url.into()));
        self.store.set(record).await
    }
}
