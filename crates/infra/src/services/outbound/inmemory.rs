use super::{IOutboundHttp, LarkTextMessage};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Answers outbound calls locally and records posted messages
pub struct InMemoryOutboundHttp {
    posted: Mutex<Vec<LarkTextMessage>>,
    offline: AtomicBool,
}

impl InMemoryOutboundHttp {
    pub fn new() -> Self {
        Self {
            posted: Mutex::new(vec![]),
            offline: AtomicBool::new(false),
        }
    }

    /// Makes every following call fail like an unreachable network
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn posted(&self) -> Vec<LarkTextMessage> {
        self.posted.lock().unwrap().clone()
    }

    fn check_online(&self) -> anyhow::Result<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(anyhow::Error::msg("Network is unreachable"));
        }
        Ok(())
    }
}

impl Default for InMemoryOutboundHttp {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IOutboundHttp for InMemoryOutboundHttp {
    async fn probe(&self) -> anyhow::Result<String> {
        self.check_online()?;
        Ok("ok".into())
    }

    async fn post_text_message(&self, text: &str) -> anyhow::Result<serde_json::Value> {
        self.check_online()?;
        self.posted.lock().unwrap().push(LarkTextMessage::text(text));
        Ok(serde_json::json!({ "StatusCode": 0, "StatusMessage": "success" }))
    }
}
