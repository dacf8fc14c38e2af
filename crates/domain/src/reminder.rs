use serde::{Deserialize, Serialize};

/// Name of the one periodic alarm driving review reminders
pub const REVIEW_ALARM_NAME: &str = "WFReviewReminder";

/// An `Alarm` as reported by the host alarm facility, either when listing
/// the active alarms or when one of them fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alarm {
    pub name: String,
    /// Timestamp in millis of the (next) fire
    pub scheduled_time: i64,
    /// `None` for one-shot alarms
    pub period_in_minutes: Option<u32>,
}

impl Alarm {
    pub fn new(name: &str, scheduled_time: i64, period_in_minutes: Option<u32>) -> Self {
        Self {
            name: name.to_string(),
            scheduled_time,
            period_in_minutes,
        }
    }

    pub fn is_review_reminder(&self) -> bool {
        self.name == REVIEW_ALARM_NAME
    }

    /// Identifies one logical fire. The host may deliver the same fire more
    /// than once, each delivery carries the same key.
    pub fn fire_key(&self) -> String {
        format!("{}_{}", self.name, self.scheduled_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_keys_fires_by_name_and_schedule() {
        let alarm = Alarm::new(REVIEW_ALARM_NAME, 1000, Some(5));
        assert!(alarm.is_review_reminder());
        assert_eq!(alarm.fire_key(), "WFReviewReminder_1000");

        let next = Alarm::new(REVIEW_ALARM_NAME, 1000 + 5 * 60 * 1000, Some(5));
        assert_ne!(alarm.fire_key(), next.fire_key());
        assert!(!Alarm::new("other", 1000, None).is_review_reminder());
    }
}
