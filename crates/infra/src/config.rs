use std::path::PathBuf;
use tracing::{info, warn};

const DEFAULT_PORT: usize = 5000;
const DEFAULT_STORAGE_PATH: &str = "wf_review_storage.json";
const DEFAULT_PROBE_URL: &str = "https://api.day.app/test";
const DEFAULT_WEBHOOK_URL: &str =
    "https://open.feishu.cn/open-apis/bot/v2/hook/6c89f9db-0ec0-4edd-a170-79b167389768";
const DEFAULT_ICON_URL: &str = "icon.png";

/// Which host facilities the service runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostsMode {
    /// Real timers, file storage, desktop notifications and clipboard
    Desktop,
    /// Everything kept in process memory, nothing leaves the process
    InMemory,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the message api to run on
    pub port: usize,
    /// File the key-value storage area is persisted to
    pub storage_path: PathBuf,
    /// Url of the connectivity probe behind the `sendTest` action
    pub probe_url: String,
    /// Chat bot webhook the `sendLarkMsg` action posts to
    pub webhook_url: String,
    /// Icon shown in reminder notifications
    pub icon_url: String,
    pub hosts_mode: HostsMode,
}

impl Config {
    pub fn new() -> Self {
        let port = match std::env::var("PORT") {
            Ok(port) => match port.parse::<usize>() {
                Ok(port) => port,
                Err(_) => {
                    warn!(
                        "The given PORT: {} is not valid, falling back to the default port: {}.",
                        port, DEFAULT_PORT
                    );
                    DEFAULT_PORT
                }
            },
            Err(_) => DEFAULT_PORT,
        };

        let storage_path = std::env::var("WF_REVIEW_STORAGE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORAGE_PATH));

        let probe_url = http_url_from_env("WF_REVIEW_PROBE_URL", DEFAULT_PROBE_URL);
        let webhook_url = http_url_from_env("WF_REVIEW_WEBHOOK_URL", DEFAULT_WEBHOOK_URL);
        let icon_url =
            std::env::var("WF_REVIEW_ICON_URL").unwrap_or_else(|_| DEFAULT_ICON_URL.into());

        let hosts_mode = match std::env::var("WF_REVIEW_HOSTS").as_deref() {
            Ok("inmemory") => {
                info!("WF_REVIEW_HOSTS=inmemory, nothing will be persisted or shown on the desktop.");
                HostsMode::InMemory
            }
            Ok("desktop") | Err(_) => HostsMode::Desktop,
            Ok(other) => {
                warn!(
                    "Unknown WF_REVIEW_HOSTS value: {}, falling back to desktop hosts.",
                    other
                );
                HostsMode::Desktop
            }
        };

        Self {
            port,
            storage_path,
            probe_url,
            webhook_url,
            icon_url,
            hosts_mode,
        }
    }

    /// Config used by tests: random port and in-memory hosts
    pub fn inmemory() -> Self {
        Self {
            port: 0,
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            probe_url: DEFAULT_PROBE_URL.into(),
            webhook_url: DEFAULT_WEBHOOK_URL.into(),
            icon_url: DEFAULT_ICON_URL.into(),
            hosts_mode: HostsMode::InMemory,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn http_url_from_env(var: &str, default: &str) -> String {
    let url = match std::env::var(var) {
        Ok(url) => url,
        Err(_) => return default.into(),
    };
    if is_http_url(&url) {
        url
    } else {
        warn!(
            "The given {}: {} is not a valid http(s) url, falling back to: {}.",
            var, url, default
        );
        default.into()
    }
}

fn is_http_url(url: &str) -> bool {
    match url::Url::parse(url) {
        Ok(parsed_url) => {
            let allowed_schemes = ["https", "http"];
            allowed_schemes.contains(&parsed_url.scheme())
        }
        Err(_) => false,
    }
}
