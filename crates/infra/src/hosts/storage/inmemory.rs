use super::{select_keys, IKeyValueStore, KeyValueRecord};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

pub struct InMemoryKeyValueStore {
    record: Mutex<KeyValueRecord>,
    unavailable: AtomicBool,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self {
            record: Mutex::new(KeyValueRecord::new()),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Makes every following read and write fail with an I/O error
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> anyhow::Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(anyhow::Error::msg("Storage area is unavailable"));
        }
        Ok(())
    }
}

impl Default for InMemoryKeyValueStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IKeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, keys: &[&str]) -> anyhow::Result<KeyValueRecord> {
        self.check_available()?;
        let record = self.record.lock().unwrap();
        Ok(select_keys(&record, keys))
    }

    async fn set(&self, record: KeyValueRecord) -> anyhow::Result<()> {
        self.check_available()?;
        self.record.lock().unwrap().extend(record);
        Ok(())
    }
}
