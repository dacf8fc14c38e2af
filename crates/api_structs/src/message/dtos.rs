use serde::{Deserialize, Serialize};
use serde_json::Value;
use wf_review_domain::{
    format_schedule_time, Alarm, DefaultSettings, GenerationMode, IntervalMinutes,
    InvalidInterval, SettingsRecord, UserPreferences,
};

/// Preferences as typed into the settings panel. Every field is optional
/// and the interval may arrive as a number or as text.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesInput {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub interval_minutes: Option<Value>,
    #[serde(default)]
    pub tip_text: Option<String>,
    #[serde(default)]
    pub mode: Option<GenerationMode>,
}

impl PreferencesInput {
    /// The validated interval. A missing interval is an error.
    pub fn interval(&self) -> Result<IntervalMinutes, InvalidInterval> {
        match &self.interval_minutes {
            None | Some(Value::Null) => Err(InvalidInterval::Missing),
            Some(Value::Number(n)) => match (n.as_i64(), n.as_f64()) {
                (Some(minutes), _) => IntervalMinutes::new(minutes),
                (None, Some(minutes)) => IntervalMinutes::from_f64(minutes),
                (None, None) => Err(InvalidInterval::NotANumber(n.to_string())),
            },
            Some(Value::String(raw)) => IntervalMinutes::parse(raw),
            Some(other) => Err(InvalidInterval::NotANumber(other.to_string())),
        }
    }

    /// Like `interval` but a missing interval falls back to `default`
    pub fn interval_or(&self, default: IntervalMinutes) -> Result<IntervalMinutes, InvalidInterval> {
        match self.interval() {
            Err(InvalidInterval::Missing) => Ok(default),
            res => res,
        }
    }

    pub fn into_preferences(self, interval_minutes: IntervalMinutes) -> UserPreferences {
        UserPreferences {
            base_url: self.base_url.unwrap_or_default(),
            tag: self.tag.unwrap_or_default(),
            interval_minutes,
            tip_text: self.tip_text.unwrap_or_default(),
            mode: self.mode.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferencesDTO {
    pub base_url: String,
    pub tag: String,
    pub interval_minutes: u32,
    pub tip_text: String,
    pub mode: GenerationMode,
}

impl UserPreferencesDTO {
    pub fn new(prefs: UserPreferences) -> Self {
        Self {
            base_url: prefs.base_url,
            tag: prefs.tag,
            interval_minutes: prefs.interval_minutes.minutes(),
            tip_text: prefs.tip_text,
            mode: prefs.mode,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultSettingsDTO {
    pub default_user_url: String,
    pub default_query_url: String,
    pub default_tag: String,
    pub default_interval: u32,
    pub default_tip: String,
}

impl DefaultSettingsDTO {
    pub fn new(defaults: DefaultSettings) -> Self {
        Self {
            default_user_url: defaults.default_user_url,
            default_query_url: defaults.default_query_url,
            default_tag: defaults.default_tag,
            default_interval: defaults.default_interval.minutes(),
            default_tip: defaults.default_tip,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsRecordDTO {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserPreferencesDTO>,
}

impl SettingsRecordDTO {
    pub fn new(record: SettingsRecord) -> Self {
        Self {
            interval: record.interval.map(|interval| interval.minutes()),
            tip: record.tip,
            user_data: record.user_data.map(UserPreferencesDTO::new),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlarmDTO {
    pub name: String,
    pub period_in_minutes: Option<u32>,
    /// Timestamp in millis of the next fire
    pub scheduled_time: i64,
    /// `scheduled_time` in local time, `MM/dd/yyyy hh:mm:ss`
    pub scheduled_time_str: String,
}

impl AlarmDTO {
    pub fn new(alarm: Alarm) -> Self {
        Self {
            scheduled_time_str: format_schedule_time(alarm.scheduled_time),
            name: alarm.name,
            period_in_minutes: alarm.period_in_minutes,
            scheduled_time: alarm.scheduled_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(interval: Value) -> PreferencesInput {
        serde_json::from_value(serde_json::json!({ "intervalMinutes": interval })).unwrap()
    }

    #[test]
    fn it_accepts_numeric_and_text_intervals() {
        assert_eq!(input(serde_json::json!(30)).interval().unwrap().minutes(), 30);
        assert_eq!(input(serde_json::json!("45")).interval().unwrap().minutes(), 45);
        assert_eq!(input(serde_json::json!(240.0)).interval().unwrap().minutes(), 240);
    }

    #[test]
    fn it_rejects_invalid_intervals() {
        assert_eq!(
            input(serde_json::json!(0)).interval(),
            Err(InvalidInterval::TooShort(0))
        );
        assert_eq!(
            input(serde_json::json!(1.5)).interval(),
            Err(InvalidInterval::NotANumber("1.5".into()))
        );
        assert_eq!(
            input(serde_json::json!("abc")).interval(),
            Err(InvalidInterval::NotANumber("abc".into()))
        );
        assert_eq!(
            PreferencesInput::default().interval(),
            Err(InvalidInterval::Missing)
        );
    }

    #[test]
    fn it_falls_back_only_for_missing_intervals() {
        let default = IntervalMinutes::new(240).unwrap();
        assert_eq!(PreferencesInput::default().interval_or(default), Ok(default));
        assert!(input(serde_json::json!(-1)).interval_or(default).is_err());
    }

    #[test]
    fn it_lists_alarms_with_formatted_time() {
        let dto = AlarmDTO::new(Alarm::new("WFReviewReminder", 1_700_000_000_000, Some(240)));
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["name"], "WFReviewReminder");
        assert_eq!(json["periodInMinutes"], 240);
        assert_eq!(json["scheduledTime"], 1_700_000_000_000i64);
        assert_eq!(json["scheduledTimeStr"].as_str().unwrap().len(), 19);
    }
}
