pub mod client;
pub mod config;
pub mod error;
pub mod interpret;
pub mod logging;
pub mod notify;
pub mod proxy;
pub mod render;
pub mod time;
pub mod types;
pub mod workflow;

pub use client::AirportClient;
pub use config::{Config, ConfigError, Credentials, Profile};
pub use error::CheckinError;
pub use notify::{Notifier, NotifyOutcome};
pub use proxy::ProxyConfig;
pub use types::{ApiResult, CardItem, CheckinData, CheckinResponse, NotifyData, NotifyKind};
