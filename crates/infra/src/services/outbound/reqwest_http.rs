use super::{IOutboundHttp, LarkTextMessage};
use reqwest::Client;
use tracing::error;

pub struct ReqwestOutboundHttp {
    client: Client,
    probe_url: String,
    webhook_url: String,
}

impl ReqwestOutboundHttp {
    pub fn new(probe_url: &str, webhook_url: &str) -> Self {
        Self {
            client: Client::new(),
            probe_url: probe_url.into(),
            webhook_url: webhook_url.into(),
        }
    }
}

#[async_trait::async_trait]
impl IOutboundHttp for ReqwestOutboundHttp {
    async fn probe(&self) -> anyhow::Result<String> {
        match self.client.get(&self.probe_url).send().await {
            Ok(res) => res.text().await.map_err(|e| {
                error!(
                    "[Unexpected Response] Probe GET {} error. Error message: {:?}",
                    self.probe_url, e
                );
                anyhow::Error::new(e)
            }),
            Err(e) => {
                error!(
                    "[Network Error] Probe GET {} error. Error message: {:?}",
                    self.probe_url, e
                );
                Err(anyhow::Error::new(e))
            }
        }
    }

    async fn post_text_message(&self, text: &str) -> anyhow::Result<serde_json::Value> {
        // `json` sets the application/json content type
        match self
            .client
            .post(&self.webhook_url)
            .json(&LarkTextMessage::text(text))
            .send()
            .await
        {
            Ok(res) => res.json::<serde_json::Value>().await.map_err(|e| {
                error!(
                    "[Unexpected Response] Webhook POST error. Error message: {:?}",
                    e
                );
                anyhow::Error::new(e)
            }),
            Err(e) => {
                error!("[Network Error] Webhook POST error. Error message: {:?}", e);
                Err(anyhow::Error::new(e))
            }
        }
    }
}
