use super::{INotificationCenter, NotificationOptions};
use std::sync::Mutex;

pub struct InMemoryNotificationCenter {
    /// Every notification ever created, in order
    created: Mutex<Vec<(String, NotificationOptions)>>,
    /// Ids of notifications that have not been cleared
    active: Mutex<Vec<String>>,
}

impl InMemoryNotificationCenter {
    pub fn new() -> Self {
        Self {
            created: Mutex::new(vec![]),
            active: Mutex::new(vec![]),
        }
    }

    pub fn created(&self) -> Vec<(String, NotificationOptions)> {
        self.created.lock().unwrap().clone()
    }

    pub fn active(&self) -> Vec<String> {
        self.active.lock().unwrap().clone()
    }
}

impl Default for InMemoryNotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl INotificationCenter for InMemoryNotificationCenter {
    async fn create(&self, options: NotificationOptions) -> anyhow::Result<String> {
        let id = uuid::Uuid::new_v4().to_string();
        self.created.lock().unwrap().push((id.clone(), options));
        self.active.lock().unwrap().push(id.clone());
        Ok(id)
    }

    async fn clear(&self, id: &str) -> anyhow::Result<bool> {
        let mut active = self.active.lock().unwrap();
        let before = active.len();
        active.retain(|active_id| active_id != id);
        Ok(active.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn it_clears_notifications_idempotently() {
        let center = InMemoryNotificationCenter::new();
        let id = center
            .create(NotificationOptions {
                title: "WorkFlowy Review".into(),
                message: "tip".into(),
                icon_url: "icon.png".into(),
                require_interaction: true,
            })
            .await
            .unwrap();
        assert_eq!(center.active(), vec![id.clone()]);

        assert!(center.clear(&id).await.unwrap());
        assert!(!center.clear(&id).await.unwrap());
        assert!(center.active().is_empty());
        assert_eq!(center.created().len(), 1);
    }
}
