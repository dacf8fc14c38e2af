mod settings;

use crate::hosts::IKeyValueStore;
pub use settings::{ISettingsRepo, KeyValueSettingsRepo};
use std::sync::Arc;

#[derive(Clone)]
pub struct Repos {
    pub settings_repo: Arc<dyn ISettingsRepo>,
}

impl Repos {
    pub fn create_key_value(store: Arc<dyn IKeyValueStore>) -> Self {
        Self {
            settings_repo: Arc::new(KeyValueSettingsRepo::new(store)),
        }
    }
}
