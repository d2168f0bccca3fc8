//! Process configuration, read once at startup from the environment.
//! A missing required variable is a startup fault; everything after
//! startup is handled without killing the process.

use std::env;
use std::time::Duration;

use teloxide::RequestError;

/// Database connection parameters.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
}

/// Reconnect delays for the polling loop, overridable via
/// `RETRY_TIMEOUT_SECS` / `RETRY_CONNECT_SECS` / `RETRY_OTHER_SECS`.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    pub read_timeout: Duration,
    pub connect: Duration,
    pub other: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            read_timeout: Duration::from_secs(10),
            connect: Duration::from_secs(15),
            other: Duration::from_secs(20),
        }
    }
}

impl RetryPolicy {
    fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            read_timeout: env_duration("RETRY_TIMEOUT_SECS").unwrap_or(defaults.read_timeout),
            connect: env_duration("RETRY_CONNECT_SECS").unwrap_or(defaults.connect),
            other: env_duration("RETRY_OTHER_SECS").unwrap_or(defaults.other),
        }
    }

    /// Picks the reconnect delay for a failed getUpdates call.
    /// Read timeouts and connection drops are expected with long polling;
    /// anything else still gets retried, just with the longest delay.
    pub fn delay_for(&self, err: &RequestError) -> Duration {
        match err {
            RequestError::Network(e) if e.is_timeout() => self.read_timeout,
            RequestError::Network(_) | RequestError::Io(_) => self.connect,
            _ => self.other,
        }
    }
}

fn env_duration(key: &str) -> Option<Duration> {
    env::var(key).ok()?.parse::<u64>().ok().map(Duration::from_secs)
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub db: DbConfig,
    pub retry: RetryPolicy,
}

impl Config {
    /// Panics with the variable name when a required value is absent.
    pub fn from_env() -> Self {
        let require = |key: &str| {
            env::var(key).unwrap_or_else(|_| panic!("Expected {key} in the environment or .env file."))
        };
        let port = require("DB_PORT")
            .parse::<u16>()
            .expect("DB_PORT must be a valid port number.");
        Self {
            bot_token: require("BOT_TOKEN"),
            db: DbConfig {
                host: require("DB_HOST"),
                port,
                name: require("DB_NAME"),
                user: require("DB_USER"),
                password: require("DB_PASSWORD"),
            },
            retry: RetryPolicy::from_env(),
        }
    }
}
