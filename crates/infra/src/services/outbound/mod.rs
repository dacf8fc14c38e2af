mod inmemory;
mod reqwest_http;

pub use inmemory::InMemoryOutboundHttp;
pub use reqwest_http::ReqwestOutboundHttp;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LarkTextContent {
    pub text: String,
}

/// Body of a text message posted to a Lark bot webhook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LarkTextMessage {
    pub msg_type: String,
    pub content: LarkTextContent,
}

impl LarkTextMessage {
    pub fn text(text: &str) -> Self {
        Self {
            msg_type: "text".into(),
            content: LarkTextContent { text: text.into() },
        }
    }
}

/// Diagnostic calls to third party services
#[async_trait::async_trait]
pub trait IOutboundHttp: Send + Sync {
    /// GETs the connectivity probe and returns the response body as text
    async fn probe(&self) -> anyhow::Result<String>;
    /// Posts a text message to the chat webhook and returns its JSON reply
    async fn post_text_message(&self, text: &str) -> anyhow::Result<serde_json::Value>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_serializes_lark_text_messages() {
        let body = serde_json::to_value(LarkTextMessage::text("hello")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "msg_type": "text", "content": { "text": "hello" } })
        );
    }
}
