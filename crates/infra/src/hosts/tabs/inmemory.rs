use super::ITabOpener;
use std::sync::Mutex;

pub struct InMemoryTabOpener {
    opened: Mutex<Vec<String>>,
}

impl InMemoryTabOpener {
    pub fn new() -> Self {
        Self {
            opened: Mutex::new(vec![]),
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl Default for InMemoryTabOpener {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ITabOpener for InMemoryTabOpener {
    async fn open(&self, url: &str) -> anyhow::Result<()> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}
