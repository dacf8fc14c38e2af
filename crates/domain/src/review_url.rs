use crate::date::{days_since_anchor, format_query_date};
use crate::preferences::{DefaultSettings, UserPreferences};
use chrono::{DateTime, Duration, Months, TimeZone};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;

const SINCE: &str = "last-changed-since:";
const BEFORE: &str = "last-changed-before:";
const CHANGED: &str = "changed:";
const NOT_CHANGED: &str = "-changed:";
/// Url encoded space between search operators
const BLANK: &str = "%20";

/// Width of every review window in days
const WINDOW_DAYS: i64 = 2;

/// Longest look back the years ago mode accepts
pub const MAX_YEARS_BACK: u32 = 100;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidYearsBack {
    #[error("The years ago mode must look back at least 1 year, got `{0}`")]
    TooShort(u32),
    #[error("The years ago mode can look back at most {} years, got `{0}`", MAX_YEARS_BACK)]
    TooLong(u32),
}

/// A validated number of years for the years ago mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct YearsBack(u32);

impl YearsBack {
    pub fn new(years: u32) -> Result<Self, InvalidYearsBack> {
        match years {
            0 => Err(InvalidYearsBack::TooShort(years)),
            years if years > MAX_YEARS_BACK => Err(InvalidYearsBack::TooLong(years)),
            years => Ok(Self(years)),
        }
    }

    pub fn years(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for YearsBack {
    type Error = InvalidYearsBack;

    fn try_from(years: u32) -> Result<Self, Self::Error> {
        Self::new(years)
    }
}

impl From<YearsBack> for u32 {
    fn from(years: YearsBack) -> Self {
        years.0
    }
}

/// The clock is too close to the edge of the representable calendar
#[derive(Error, Debug, Clone, PartialEq)]
#[error("No review window exists {years} years before {now}")]
pub struct WindowOutOfRange {
    pub years: u32,
    pub now: String,
}

/// Strategy used to pick the review window encoded in the url
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GenerationMode {
    /// Random window since the epoch anchor, as absolute `MM/dd/yyyy` dates
    AbsoluteWindow,
    /// Random window since the epoch anchor, as relative `changed:<N>d` tokens
    RelativeDays,
    /// Window around the same calendar day `years` years ago
    YearsAgo { years: YearsBack },
}

impl Default for GenerationMode {
    fn default() -> Self {
        Self::AbsoluteWindow
    }
}

/// Builds the WorkFlowy search url a reminder points the user to.
///
/// Only `now` and `rng` make the result vary, so a fixed clock and a seeded
/// random source always produce the same url.
pub fn generate_review_url<Tz, R>(
    prefs: &UserPreferences,
    defaults: &DefaultSettings,
    now: &DateTime<Tz>,
    rng: &mut R,
) -> Result<String, WindowOutOfRange>
where
    Tz: TimeZone,
    Tz::Offset: Display,
    R: Rng + ?Sized,
{
    let base = if prefs.base_url.is_empty() {
        defaults.default_query_url.clone()
    } else {
        format!("{}?q=", prefs.base_url)
    };
    let tag = if prefs.tag.is_empty() {
        &defaults.default_tag
    } else {
        &prefs.tag
    };

    let query = match prefs.mode {
        GenerationMode::AbsoluteWindow => {
            let days_back = random_days_back(now, rng);
            let since = now.clone() - Duration::days(days_back);
            let before = now.clone() - Duration::days(days_back - WINDOW_DAYS);
            absolute_window(&since, &before)
        }
        GenerationMode::RelativeDays => {
            let days_back = random_days_back(now, rng);
            let not_within = (days_back - WINDOW_DAYS).max(0);
            format!(
                "{}{}d{}{}{}d",
                CHANGED, days_back, BLANK, NOT_CHANGED, not_within
            )
        }
        GenerationMode::YearsAgo { years } => {
            let out_of_range = || WindowOutOfRange {
                years: years.years(),
                now: now.to_rfc3339(),
            };
            // Feb 29 falls back to Feb 28 in non leap years
            let same_day = now
                .clone()
                .checked_sub_months(Months::new(years.years() * 12))
                .ok_or_else(out_of_range)?;
            let half = Duration::days(WINDOW_DAYS / 2);
            let since = same_day
                .clone()
                .checked_sub_signed(half)
                .ok_or_else(out_of_range)?;
            let before = same_day
                .checked_add_signed(half)
                .ok_or_else(out_of_range)?;
            absolute_window(&since, &before)
        }
    };

    Ok(format!("{}{}{}{}", base, query, BLANK, tag))
}

/// Draws how many days back the review window starts, in `[1, days since anchor]`
fn random_days_back<Tz: TimeZone, R: Rng + ?Sized>(now: &DateTime<Tz>, rng: &mut R) -> i64 {
    let day_diff = days_since_anchor(now);
    let unit: f64 = rng.gen();
    let ran = (unit * day_diff as f64).ceil() as i64;
    // A zero draw, the anchor day itself or a clock before the anchor
    // would give an empty or inverted window
    ran.max(1)
}

fn absolute_window<Tz>(since: &DateTime<Tz>, before: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "{}{}{}{}{}",
        SINCE,
        format_query_date(since),
        BLANK,
        BEFORE,
        format_query_date(before)
    )
}
