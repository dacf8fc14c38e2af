use super::ITabOpener;

/// Opens urls with the user's default browser
pub struct BrowserTabOpener {}

#[async_trait::async_trait]
impl ITabOpener for BrowserTabOpener {
    async fn open(&self, url: &str) -> anyhow::Result<()> {
        let url = url.to_string();
        tokio::task::spawn_blocking(move || open::that(url)).await??;
        Ok(())
    }
}
