mod date;
mod interval;
mod preferences;
mod recent_fires;
mod reminder;
mod review_url;

pub use date::{
    days_since_anchor, epoch_anchor, format_query_date, format_schedule_time, parse_query_date,
    QUERY_DATE_FORMAT, SCHEDULE_TIME_FORMAT,
};
pub use interval::{IntervalMinutes, InvalidInterval, MIN_INTERVAL_MINUTES};
pub use preferences::{DefaultSettings, SettingsRecord, UserPreferences, FALLBACK_TIP};
pub use recent_fires::RecentFireKeys;
pub use reminder::{Alarm, REVIEW_ALARM_NAME};
pub use review_url::{
    generate_review_url, GenerationMode, InvalidYearsBack, WindowOutOfRange, YearsBack,
    MAX_YEARS_BACK,
};
