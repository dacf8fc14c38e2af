use crate::interval::IntervalMinutes;
use crate::review_url::GenerationMode;
use serde::{Deserialize, Serialize};

/// Tip shown when a reminder fires but no tip has been stored yet
pub const FALLBACK_TIP: &str = "Time to review WorkFlowy! The link has been copied to your clipboard!";

/// The user's reminder settings as edited in the settings panel.
///
/// Empty `base_url` and `tag` mean "use the default" and are resolved
/// when a review url is generated, not when the preferences are stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    /// Root url of the WorkFlowy document, e.g. `https://workflowy.com/#`
    #[serde(default)]
    pub base_url: String,
    /// Filter token appended to every generated query
    #[serde(default)]
    pub tag: String,
    pub interval_minutes: IntervalMinutes,
    /// Message shown in the reminder notification
    #[serde(default)]
    pub tip_text: String,
    #[serde(default)]
    pub mode: GenerationMode,
}

impl UserPreferences {
    /// Overrides the fields the user has already stored. The stored record
    /// wins for url, tag and interval; a stored tip wins over `tip_text`.
    pub fn merge_with_stored(mut self, stored: &SettingsRecord) -> Self {
        if let Some(user_data) = &stored.user_data {
            self.base_url = user_data.base_url.clone();
            self.tag = user_data.tag.clone();
            self.interval_minutes = user_data.interval_minutes;
        }
        if let Some(tip) = stored.tip.as_ref().filter(|tip| !tip.is_empty()) {
            self.tip_text = tip.clone();
        }
        self
    }
}

/// The bundle preferences are synthesized from on first run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultSettings {
    pub default_user_url: String,
    pub default_query_url: String,
    pub default_tag: String,
    pub default_interval: IntervalMinutes,
    pub default_tip: String,
}

impl DefaultSettings {
    pub fn to_user_preferences(&self) -> UserPreferences {
        UserPreferences {
            base_url: self.default_user_url.clone(),
            tag: self.default_tag.clone(),
            interval_minutes: self.default_interval,
            tip_text: self.default_tip.clone(),
            mode: GenerationMode::default(),
        }
    }
}

impl Default for DefaultSettings {
    fn default() -> Self {
        Self {
            default_user_url: "https://workflowy.com/#".into(),
            default_query_url: "https://workflowy.com/#?q=".into(),
            default_tag: "".into(),
            default_interval: IntervalMinutes::new(240).expect("240 minutes to be a valid interval"),
            default_tip: "Review what you wrote in WorkFlowy! Click the notification to jump there!"
                .into(),
        }
    }
}

/// What is persisted when a reminder is armed: the active interval and tip
/// next to the full preferences they came from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<IntervalMinutes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserPreferences>,
}

impl SettingsRecord {
    pub fn new(interval: IntervalMinutes, tip: String, preferences: UserPreferences) -> Self {
        Self {
            interval: Some(interval),
            tip: Some(tip),
            user_data: Some(UserPreferences {
                interval_minutes: interval,
                ..preferences
            }),
        }
    }

    /// True on the very first run, before anything has been stored
    pub fn is_empty(&self) -> bool {
        self.interval.is_none() && self.tip.is_none() && self.user_data.is_none()
    }

    pub fn preferences_or_defaults(&self, defaults: &DefaultSettings) -> UserPreferences {
        self.user_data
            .clone()
            .unwrap_or_else(|| defaults.to_user_preferences())
    }

    pub fn tip_or_fallback(&self) -> String {
        match &self.tip {
            Some(tip) if !tip.is_empty() => tip.clone(),
            _ => FALLBACK_TIP.into(),
        }
    }
}
