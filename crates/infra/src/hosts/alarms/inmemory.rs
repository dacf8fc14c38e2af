use super::IAlarmFacility;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use wf_review_domain::Alarm;

/// Records alarms without ever firing them. Tests fire alarms by sending
/// `HostEvent::AlarmFired` themselves.
pub struct InMemoryAlarmFacility {
    alarms: Mutex<Vec<Alarm>>,
    unavailable: AtomicBool,
}

impl InMemoryAlarmFacility {
    pub fn new() -> Self {
        Self {
            alarms: Mutex::new(vec![]),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Makes every following call fail like a host rejecting the request
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> anyhow::Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(anyhow::Error::msg("Alarm facility is unavailable"));
        }
        Ok(())
    }
}

impl Default for InMemoryAlarmFacility {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IAlarmFacility for InMemoryAlarmFacility {
    async fn create(&self, name: &str, when: i64, period_in_minutes: u32) -> anyhow::Result<()> {
        self.check_available()?;
        let mut alarms = self.alarms.lock().unwrap();
        alarms.retain(|a| a.name != name);
        alarms.push(Alarm::new(name, when, Some(period_in_minutes)));
        Ok(())
    }

    async fn clear_all(&self) -> anyhow::Result<()> {
        self.check_available()?;
        self.alarms.lock().unwrap().clear();
        Ok(())
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Alarm>> {
        self.check_available()?;
        Ok(self.alarms.lock().unwrap().clone())
    }
}
