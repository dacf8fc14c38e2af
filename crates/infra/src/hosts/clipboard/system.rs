use super::{IClipboardBridge, PageContext};
use arboard::Clipboard;
use std::sync::mpsc;
use tokio::sync::oneshot;
use tracing::warn;

const SYSTEM_CONTEXT_ID: &str = "system-clipboard";

struct CopyRequest {
    text: String,
    reply: oneshot::Sender<anyhow::Result<()>>,
}

/// The operating system clipboard, exposed as a single context.
///
/// The clipboard handle lives on a dedicated thread: on some platforms it
/// must stay alive for the copied text to remain available, and it is not
/// safe to move between threads everywhere.
pub struct SystemClipboardBridge {
    requests: mpsc::Sender<CopyRequest>,
}

impl SystemClipboardBridge {
    pub fn new() -> Self {
        let (requests, receiver) = mpsc::channel::<CopyRequest>();
        std::thread::spawn(move || {
            let mut clipboard: Option<Clipboard> = None;
            for request in receiver {
                if clipboard.is_none() {
                    match Clipboard::new() {
                        Ok(c) => clipboard = Some(c),
                        Err(e) => {
                            let _ = request.reply.send(Err(e.into()));
                            continue;
                        }
                    }
                }
                let res = match clipboard.as_mut() {
                    Some(c) => c.set_text(request.text).map_err(anyhow::Error::from),
                    None => Err(anyhow::Error::msg("System clipboard is unavailable")),
                };
                let _ = request.reply.send(res);
            }
        });
        Self { requests }
    }
}

impl Default for SystemClipboardBridge {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IClipboardBridge for SystemClipboardBridge {
    async fn contexts(&self) -> anyhow::Result<Vec<PageContext>> {
        Ok(vec![PageContext::new(SYSTEM_CONTEXT_ID)])
    }

    async fn copy_text(&self, context: &PageContext, text: &str) -> anyhow::Result<()> {
        if context.id != SYSTEM_CONTEXT_ID {
            warn!("Unknown clipboard context: {}", context.id);
            return Err(anyhow::Error::msg(format!("Unknown context {}", context.id)));
        }
        let (reply, response) = oneshot::channel();
        self.requests
            .send(CopyRequest {
                text: text.to_string(),
                reply,
            })
            .map_err(|_| anyhow::Error::msg("Clipboard thread has stopped"))?;
        response.await?
    }
}
