mod browser;
mod inmemory;

pub use browser::BrowserTabOpener;
pub use inmemory::InMemoryTabOpener;

#[async_trait::async_trait]
pub trait ITabOpener: Send + Sync {
    /// Opens `url` in a new page
    async fn open(&self, url: &str) -> anyhow::Result<()>;
}
