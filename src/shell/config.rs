// Settings for the warmup binary, read from the environment.
//
// Variables
// - WARMUP_EVENTS: comma separated kinds (wallet-created, wallet-deleted, warmup-logging).
//   Defaults to all of them, also when the list names none (e.g. "," or "").
// - RUST_LOG: tracing filter. Defaults to "info".
//
// A `.env` file in the working directory is loaded first when present.

use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown warmup event `{0}`, expected one of: wallet-created, wallet-deleted, warmup-logging")]
    UnknownWarmupEvent(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarmupKind {
    WalletCreated,
    WalletDeleted,
    WarmupLogging,
}

impl WarmupKind {
    pub const ALL: [WarmupKind; 3] = [
        WarmupKind::WalletCreated,
        WarmupKind::WalletDeleted,
        WarmupKind::WarmupLogging,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WarmupKind::WalletCreated => "wallet-created",
            WarmupKind::WalletDeleted => "wallet-deleted",
            WarmupKind::WarmupLogging => "warmup-logging",
        }
    }
}

impl FromStr for WarmupKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WarmupKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownWarmupEvent(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_filter: String,
    pub warmup_events: Vec<WarmupKind>,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let log_filter = lookup("RUST_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "info".to_string());
        let warmup_events = lookup("WARMUP_EVENTS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(WarmupKind::from_str)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?
            .filter(|kinds| !kinds.is_empty())
            .unwrap_or_else(|| WarmupKind::ALL.to_vec());
        Ok(Self {
            log_filter,
            warmup_events,
        })
    }
}
