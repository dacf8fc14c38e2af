mod alarms;
mod clipboard;
mod notifications;
mod storage;
mod tabs;

pub use alarms::{IAlarmFacility, InMemoryAlarmFacility, TokioAlarmFacility};
pub use clipboard::{IClipboardBridge, InMemoryClipboardBridge, PageContext, SystemClipboardBridge};
pub use notifications::{
    DesktopNotificationCenter, INotificationCenter, InMemoryNotificationCenter,
    NotificationOptions,
};
pub use storage::{FileKeyValueStore, IKeyValueStore, InMemoryKeyValueStore, KeyValueRecord};
pub use tabs::{BrowserTabOpener, ITabOpener, InMemoryTabOpener};

use crate::services::{IOutboundHttp, InMemoryOutboundHttp, ReqwestOutboundHttp};
use crate::system::ISys;
use crate::Config;
use std::sync::Arc;
use tokio::sync::mpsc;
use wf_review_domain::Alarm;

/// Events the host pushes to the service
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    AlarmFired(Alarm),
    /// Id of the clicked notification
    NotificationClicked(String),
    /// Id of the notification dismissed without a click
    NotificationClosed(String),
}

pub type HostEventSender = mpsc::UnboundedSender<HostEvent>;
pub type HostEventReceiver = mpsc::UnboundedReceiver<HostEvent>;

pub fn host_event_channel() -> (HostEventSender, HostEventReceiver) {
    mpsc::unbounded_channel()
}

/// The host facilities the service talks to
#[derive(Clone)]
pub struct Hosts {
    pub alarms: Arc<dyn IAlarmFacility>,
    pub storage: Arc<dyn IKeyValueStore>,
    pub notifications: Arc<dyn INotificationCenter>,
    pub clipboard: Arc<dyn IClipboardBridge>,
    pub tabs: Arc<dyn ITabOpener>,
    pub outbound: Arc<dyn IOutboundHttp>,
}

impl Hosts {
    pub fn create_desktop(config: &Config, events: HostEventSender, sys: Arc<dyn ISys>) -> Self {
        Self {
            alarms: Arc::new(TokioAlarmFacility::new(events.clone(), sys)),
            storage: Arc::new(FileKeyValueStore::new(config.storage_path.clone())),
            notifications: Arc::new(DesktopNotificationCenter::new(events)),
            clipboard: Arc::new(SystemClipboardBridge::new()),
            tabs: Arc::new(BrowserTabOpener {}),
            outbound: Arc::new(ReqwestOutboundHttp::new(
                &config.probe_url,
                &config.webhook_url,
            )),
        }
    }
}

/// In-memory hosts with their concrete types kept around, so tests can
/// inspect what the service did and inject host events
#[derive(Clone)]
pub struct InMemoryHosts {
    pub alarms: Arc<InMemoryAlarmFacility>,
    pub storage: Arc<InMemoryKeyValueStore>,
    pub notifications: Arc<InMemoryNotificationCenter>,
    pub clipboard: Arc<InMemoryClipboardBridge>,
    pub tabs: Arc<InMemoryTabOpener>,
    pub outbound: Arc<InMemoryOutboundHttp>,
    pub events: HostEventSender,
}

impl InMemoryHosts {
    pub fn new(events: HostEventSender) -> Self {
        Self {
            alarms: Arc::new(InMemoryAlarmFacility::new()),
            storage: Arc::new(InMemoryKeyValueStore::new()),
            notifications: Arc::new(InMemoryNotificationCenter::new()),
            clipboard: Arc::new(InMemoryClipboardBridge::new()),
            tabs: Arc::new(InMemoryTabOpener::new()),
            outbound: Arc::new(InMemoryOutboundHttp::new()),
            events,
        }
    }

    pub fn as_hosts(&self) -> Hosts {
        Hosts {
            alarms: self.alarms.clone(),
            storage: self.storage.clone(),
            notifications: self.notifications.clone(),
            clipboard: self.clipboard.clone(),
            tabs: self.tabs.clone(),
            outbound: self.outbound.clone(),
        }
    }
}
