use super::IAlarmFacility;
use crate::hosts::{HostEvent, HostEventSender};
use crate::system::ISys;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use wf_review_domain::Alarm;

struct ScheduledAlarm {
    /// Shared with the timer task which moves `scheduled_time` forward
    /// after every periodic fire
    state: Arc<Mutex<Alarm>>,
    task: JoinHandle<()>,
}

/// Alarm facility driven by tokio timers. Must be used from within a
/// tokio runtime.
pub struct TokioAlarmFacility {
    alarms: Mutex<HashMap<String, ScheduledAlarm>>,
    events: HostEventSender,
    sys: Arc<dyn ISys>,
}

impl TokioAlarmFacility {
    pub fn new(events: HostEventSender, sys: Arc<dyn ISys>) -> Self {
        Self {
            alarms: Mutex::new(HashMap::new()),
            events,
            sys,
        }
    }
}

impl Drop for TokioAlarmFacility {
    fn drop(&mut self) {
        if let Ok(alarms) = self.alarms.get_mut() {
            for (_, alarm) in alarms.drain() {
                alarm.task.abort();
            }
        }
    }
}

async fn run_alarm(state: Arc<Mutex<Alarm>>, events: HostEventSender, sys: Arc<dyn ISys>) {
    loop {
        let scheduled_time = state.lock().unwrap().scheduled_time;
        let delay_millis = (scheduled_time - sys.get_timestamp_millis()).max(0) as u64;
        tokio::time::sleep(Duration::from_millis(delay_millis)).await;

        let fired = state.lock().unwrap().clone();
        if events.send(HostEvent::AlarmFired(fired.clone())).is_err() {
            warn!("Host event loop is gone, stopping alarm: {}", fired.name);
            return;
        }
        match fired.period_in_minutes {
            Some(period) => {
                state.lock().unwrap().scheduled_time += i64::from(period) * 60 * 1000;
            }
            None => return,
        }
    }
}

#[async_trait::async_trait]
impl IAlarmFacility for TokioAlarmFacility {
    async fn create(&self, name: &str, when: i64, period_in_minutes: u32) -> anyhow::Result<()> {
        if period_in_minutes == 0 {
            return Err(anyhow::Error::msg("Alarm period must be at least one minute"));
        }
        let state = Arc::new(Mutex::new(Alarm::new(name, when, Some(period_in_minutes))));
        let task = tokio::spawn(run_alarm(
            state.clone(),
            self.events.clone(),
            self.sys.clone(),
        ));

        let mut alarms = self.alarms.lock().unwrap();
        if let Some(replaced) = alarms.insert(name.to_string(), ScheduledAlarm { state, task }) {
            replaced.task.abort();
        }
        info!(
            "Alarm {} scheduled at {} with a period of {} minutes",
            name, when, period_in_minutes
        );
        Ok(())
    }

    async fn clear_all(&self) -> anyhow::Result<()> {
        let mut alarms = self.alarms.lock().unwrap();
        for (_, alarm) in alarms.drain() {
            alarm.task.abort();
        }
        Ok(())
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Alarm>> {
        let alarms = self.alarms.lock().unwrap();
        Ok(alarms
            .values()
            .map(|alarm| alarm.state.lock().unwrap().clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::StaticTimeSys;
    use tokio::sync::mpsc;

    const NOW: i64 = 1_700_000_000_000;

    #[tokio::test(start_paused = true)]
    async fn it_fires_periodically() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let facility = TokioAlarmFacility::new(tx, Arc::new(StaticTimeSys(NOW)));
        facility.create("reminder", NOW + 60_000, 1).await.unwrap();

        for expected in &[NOW + 60_000, NOW + 120_000] {
            match rx.recv().await {
                Some(HostEvent::AlarmFired(alarm)) => {
                    assert_eq!(alarm.name, "reminder");
                    assert_eq!(alarm.scheduled_time, *expected);
                }
                other => panic!("Expected alarm fire, got {:?}", other),
            }
        }

        let alarms = facility.get_all().await.unwrap();
        assert_eq!(alarms.len(), 1);
        assert!(alarms[0].scheduled_time >= NOW + 120_000);
    }

    #[tokio::test(start_paused = true)]
    async fn it_stops_firing_after_clear() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let facility = TokioAlarmFacility::new(tx, Arc::new(StaticTimeSys(NOW)));
        facility.create("reminder", NOW + 60_000, 1).await.unwrap();
        facility.clear_all().await.unwrap();

        tokio::time::sleep(Duration::from_secs(600)).await;
        assert!(rx.try_recv().is_err());
        assert!(facility.get_all().await.unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn it_keeps_a_single_alarm_per_name() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let facility = TokioAlarmFacility::new(tx, Arc::new(StaticTimeSys(NOW)));
        facility.create("reminder", NOW + 60_000, 1).await.unwrap();
        facility.create("reminder", NOW + 120_000, 2).await.unwrap();

        let alarms = facility.get_all().await.unwrap();
        assert_eq!(alarms, vec![Alarm::new("reminder", NOW + 120_000, Some(2))]);

        match rx.recv().await {
            Some(HostEvent::AlarmFired(alarm)) => assert_eq!(alarm.scheduled_time, NOW + 120_000),
            other => panic!("Expected alarm fire, got {:?}", other),
        }
    }
}
