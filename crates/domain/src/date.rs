use chrono::prelude::*;
use chrono::LocalResult;

/// Date format understood by WorkFlowy's `last-changed-*` search operators
pub const QUERY_DATE_FORMAT: &str = "%m/%d/%Y";
/// Date format used when listing scheduled alarms
pub const SCHEDULE_TIME_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

const MILLIS_PER_DAY: f64 = 24.0 * 3600.0 * 1000.0;

/// The day the review tag was introduced. Random review windows are
/// never drawn from before this day.
pub fn epoch_anchor() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2021, 7, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("Epoch anchor to be a valid date")
}

/// Whole days between the epoch anchor and `now`, rounded to the nearest day.
/// Negative when the clock is set before the anchor.
pub fn days_since_anchor<Tz: TimeZone>(now: &DateTime<Tz>) -> i64 {
    let elapsed = now.naive_local() - epoch_anchor();
    (elapsed.num_milliseconds() as f64 / MILLIS_PER_DAY).round() as i64
}

pub fn format_query_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format(QUERY_DATE_FORMAT).to_string()
}

pub fn parse_query_date(datestr: &str) -> Option<NaiveDate> {
    // Reject unpadded input such as "7/1/2021", the query format is fixed width
    if datestr.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(datestr, QUERY_DATE_FORMAT).ok()
}

/// Formats a millisecond timestamp in the local timezone.
/// Returns an empty string for timestamps chrono cannot represent.
pub fn format_schedule_time(timestamp_millis: i64) -> String {
    match Local.timestamp_millis_opt(timestamp_millis) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => {
            dt.format(SCHEDULE_TIME_FORMAT).to_string()
        }
        LocalResult::None => String::new(),
    }
}
