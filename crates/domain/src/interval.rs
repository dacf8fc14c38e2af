use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The host alarm facility refuses periods shorter than one minute
pub const MIN_INTERVAL_MINUTES: i64 = 1;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInterval {
    #[error("The reminder interval is missing")]
    Missing,
    #[error("The reminder interval `{0}` is not a whole number of minutes")]
    NotANumber(String),
    #[error("The reminder interval must be at least 1 minute, got `{0}`")]
    TooShort(i64),
}

/// A validated reminder period in minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct IntervalMinutes(u32);

impl IntervalMinutes {
    pub fn new(minutes: i64) -> Result<Self, InvalidInterval> {
        if minutes < MIN_INTERVAL_MINUTES {
            return Err(InvalidInterval::TooShort(minutes));
        }
        u32::try_from(minutes)
            .map(Self)
            .map_err(|_| InvalidInterval::NotANumber(minutes.to_string()))
    }

    /// Parses user input such as `"240"` or `"240.0"`.
    pub fn parse(raw: &str) -> Result<Self, InvalidInterval> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(InvalidInterval::Missing);
        }
        match raw.parse::<i64>() {
            Ok(minutes) => Self::new(minutes),
            Err(_) => raw
                .parse::<f64>()
                .map_err(|_| InvalidInterval::NotANumber(raw.to_string()))
                .and_then(|minutes| Self::from_whole_f64(minutes, raw)),
        }
    }

    /// Accepts floats without a fractional part, e.g. `240.0`
    pub fn from_f64(minutes: f64) -> Result<Self, InvalidInterval> {
        Self::from_whole_f64(minutes, &minutes.to_string())
    }

    fn from_whole_f64(minutes: f64, raw: &str) -> Result<Self, InvalidInterval> {
        if !minutes.is_finite() || minutes.fract() != 0.0 {
            return Err(InvalidInterval::NotANumber(raw.to_string()));
        }
        if minutes < MIN_INTERVAL_MINUTES as f64 {
            return Err(InvalidInterval::TooShort(minutes as i64));
        }
        if minutes > f64::from(u32::MAX) {
            return Err(InvalidInterval::NotANumber(raw.to_string()));
        }
        Self::new(minutes as i64)
    }

    pub fn minutes(&self) -> u32 {
        self.0
    }

    pub fn as_millis(&self) -> i64 {
        i64::from(self.0) * 60 * 1000
    }
}

impl TryFrom<i64> for IntervalMinutes {
    type Error = InvalidInterval;

    fn try_from(minutes: i64) -> Result<Self, Self::Error> {
        Self::new(minutes)
    }
}

impl From<IntervalMinutes> for u32 {
    fn from(interval: IntervalMinutes) -> Self {
        interval.0
    }
}

impl std::fmt::Display for IntervalMinutes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_accepts_positive_intervals() {
        for minutes in &[1, 5, 240, 60 * 24 * 7] {
            let interval = IntervalMinutes::new(*minutes).expect("Valid interval");
            assert_eq!(i64::from(interval.minutes()), *minutes);
        }
        assert_eq!(IntervalMinutes::new(2).unwrap().as_millis(), 120_000);
    }

    #[test]
    fn it_rejects_intervals_below_one_minute() {
        assert_eq!(IntervalMinutes::new(0), Err(InvalidInterval::TooShort(0)));
        assert_eq!(IntervalMinutes::new(-5), Err(InvalidInterval::TooShort(-5)));
    }

    #[test]
    fn it_parses_user_input() {
        assert_eq!(IntervalMinutes::parse(" 30 ").unwrap().minutes(), 30);
        assert_eq!(IntervalMinutes::parse(""), Err(InvalidInterval::Missing));
        assert_eq!(
            IntervalMinutes::parse("soon"),
            Err(InvalidInterval::NotANumber("soon".into()))
        );
        assert_eq!(
            IntervalMinutes::parse("2.5"),
            Err(InvalidInterval::NotANumber("2.5".into()))
        );
        assert_eq!(IntervalMinutes::parse("0"), Err(InvalidInterval::TooShort(0)));
        assert_eq!(IntervalMinutes::parse("240.0").unwrap().minutes(), 240);
        assert_eq!(IntervalMinutes::parse("1e2").unwrap().minutes(), 100);
        assert_eq!(
            IntervalMinutes::parse("inf"),
            Err(InvalidInterval::NotANumber("inf".into()))
        );
    }

    #[test]
    fn it_accepts_whole_floats() {
        assert_eq!(IntervalMinutes::from_f64(240.0).unwrap().minutes(), 240);
        assert_eq!(IntervalMinutes::from_f64(0.0), Err(InvalidInterval::TooShort(0)));
        assert!(IntervalMinutes::from_f64(-3.0).is_err());
        assert!(IntervalMinutes::from_f64(1e12).is_err());
        assert_eq!(
            IntervalMinutes::from_f64(2.5),
            Err(InvalidInterval::NotANumber("2.5".into()))
        );
    }
}
