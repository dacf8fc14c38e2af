use chrono::{DateTime, Local, LocalResult, TimeZone, Utc};

// Mocking out time so that it is possible to run tests that depend on time.
pub trait ISys: Send + Sync {
    /// The current timestamp in millis
    fn get_timestamp_millis(&self) -> i64;

    /// The current time in the user's timezone, which is what review
    /// windows and listed alarm times are expressed in
    fn get_local_datetime(&self) -> DateTime<Local> {
        match Local.timestamp_millis_opt(self.get_timestamp_millis()) {
            LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt,
            LocalResult::None => Local::now(),
        }
    }
}

/// System that gets the real time and is used when not testing
pub struct RealSys {}
impl ISys for RealSys {
    fn get_timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// System frozen at a given timestamp
pub struct StaticTimeSys(pub i64);
impl ISys for StaticTimeSys {
    fn get_timestamp_millis(&self) -> i64 {
        self.0
    }
}
