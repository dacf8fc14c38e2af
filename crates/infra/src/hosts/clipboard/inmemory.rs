use super::{IClipboardBridge, PageContext};
use std::sync::Mutex;

/// Page contexts simulated in memory. Contexts listed in `failing` answer
/// every copy request with an error.
pub struct InMemoryClipboardBridge {
    contexts: Mutex<Vec<PageContext>>,
    failing: Mutex<Vec<PageContext>>,
    /// Successful copies as (context id, text)
    copies: Mutex<Vec<(String, String)>>,
}

impl InMemoryClipboardBridge {
    pub fn new() -> Self {
        Self {
            contexts: Mutex::new(vec![]),
            failing: Mutex::new(vec![]),
            copies: Mutex::new(vec![]),
        }
    }

    pub fn open_context(&self, context: PageContext) {
        self.contexts.lock().unwrap().push(context);
    }

    pub fn open_failing_context(&self, context: PageContext) {
        self.failing.lock().unwrap().push(context.clone());
        self.contexts.lock().unwrap().push(context);
    }

    pub fn copies(&self) -> Vec<(String, String)> {
        self.copies.lock().unwrap().clone()
    }
}

impl Default for InMemoryClipboardBridge {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IClipboardBridge for InMemoryClipboardBridge {
    async fn contexts(&self) -> anyhow::Result<Vec<PageContext>> {
        Ok(self.contexts.lock().unwrap().clone())
    }

    async fn copy_text(&self, context: &PageContext, text: &str) -> anyhow::Result<()> {
        if self.failing.lock().unwrap().contains(context) {
            return Err(anyhow::Error::msg(format!(
                "Context {} refused the clipboard write",
                context.id
            )));
        }
        self.copies
            .lock()
            .unwrap()
            .push((context.id.clone(), text.to_string()));
        Ok(())
    }
}
