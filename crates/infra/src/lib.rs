mod config;
mod hosts;
mod repos;
mod services;
mod system;

pub use config::{Config, HostsMode};
pub use hosts::*;
pub use repos::{ISettingsRepo, Repos};
pub use services::*;
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};
use tracing::info;

#[derive(Clone)]
pub struct ReviewContext {
    pub hosts: Hosts,
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl ReviewContext {
    fn create(config: Config, hosts: Hosts, sys: Arc<dyn ISys>) -> Self {
        Self {
            repos: Repos::create_key_value(hosts.storage.clone()),
            hosts,
            config,
            sys,
        }
    }

    /// Context backed by in-memory hosts. The returned `InMemoryHosts` keeps
    /// the host event sender alive and lets callers inspect the hosts.
    pub fn create_inmemory(config: Config) -> (Self, InMemoryHosts, HostEventReceiver) {
        let (events, receiver) = host_event_channel();
        let hosts = InMemoryHosts::new(events);
        let ctx = Self::create(config, hosts.as_hosts(), Arc::new(RealSys {}));
        (ctx, hosts, receiver)
    }
}

/// Will setup the infrastructure context given the environment
pub fn setup_context() -> (ReviewContext, HostEventReceiver) {
    let config = Config::new();
    match config.hosts_mode {
        HostsMode::Desktop => {
            info!("Using desktop hosts, settings are stored at {:?}", config.storage_path);
            let (events, receiver) = host_event_channel();
            let sys: Arc<dyn ISys> = Arc::new(RealSys {});
            let hosts = Hosts::create_desktop(&config, events, sys.clone());
            (ReviewContext::create(config, hosts, sys), receiver)
        }
        HostsMode::InMemory => {
            let (ctx, _hosts, receiver) = ReviewContext::create_inmemory(config);
            (ctx, receiver)
        }
    }
}
