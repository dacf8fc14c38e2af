mod inmemory;
mod system;

pub use inmemory::InMemoryClipboardBridge;
pub use system::SystemClipboardBridge;

/// A context able to write to the clipboard on request, e.g. an open page
/// with the helper script injected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    pub id: String,
}

impl PageContext {
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string() }
    }
}

/// Request/response channel to the contexts that can perform a clipboard
/// write
#[async_trait::async_trait]
pub trait IClipboardBridge: Send + Sync {
    /// Contexts currently reachable. May be empty.
    async fn contexts(&self) -> anyhow::Result<Vec<PageContext>>;
    async fn copy_text(&self, context: &PageContext, text: &str) -> anyhow::Result<()>;
}
