mod inmemory;
mod timer;

pub use inmemory::InMemoryAlarmFacility;
pub use timer::TokioAlarmFacility;
use wf_review_domain::Alarm;

/// The host's named alarm scheduler.
///
/// Creating an alarm with the name of an existing one replaces it.
/// Fires are delivered as `HostEvent::AlarmFired`.
#[async_trait::async_trait]
pub trait IAlarmFacility: Send + Sync {
    /// `when` is the timestamp in millis of the first fire
    async fn create(&self, name: &str, when: i64, period_in_minutes: u32) -> anyhow::Result<()>;
    async fn clear_all(&self) -> anyhow::Result<()>;
    async fn get_all(&self) -> anyhow::Result<Vec<Alarm>>;
}
