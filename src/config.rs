use std::{str::FromStr, time::Duration};

use thiserror::Error;
use tracing::level_filters::LevelFilter;

pub const DEFAULT_SENSOR_ID: &str = "28-00000001e2d1";
pub const DEFAULT_BASE_PATH: &str = "/sys/bus/w1/devices/";
pub const DEFAULT_MQTT_HOST: &str = "localhost";
pub const DEFAULT_MQTT_PORT: u16 = 1883;
pub const DEFAULT_MQTT_CLIENT_ID: &str = "fishcam-temperature";
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2400);

/// Process configuration, read once at start from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// `TEMP_ID`
    pub sensor_id: String,
    /// `TEMP_PATH`. Used as a prefix, so it should end with a separator.
    pub base_path: String,
    /// `MQTT_HOST`
    pub mqtt_host: String,
    /// `MQTT_PORT`
    pub mqtt_port: u16,
    /// `MQTT_CLIENT_ID`
    pub mqtt_client_id: String,
    /// `POLL_INTERVAL_MS`
    pub poll_interval: Duration,
    /// `LOG_LEVEL`
    pub log_level: LevelFilter,
    /// `RUN_ONCE`: run a single cycle and exit.
    pub run_once: bool,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}.")]
    InvalidValue { key: &'static str, value: String },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sensor_id: DEFAULT_SENSOR_ID.to_string(),
            base_path: DEFAULT_BASE_PATH.to_string(),
            mqtt_host: DEFAULT_MQTT_HOST.to_string(),
            mqtt_port: DEFAULT_MQTT_PORT,
            mqtt_client_id: DEFAULT_MQTT_CLIENT_ID.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            log_level: LevelFilter::INFO,
            run_once: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from `lookup`, falling back to defaults for unset or
    /// blank variables. Values are trimmed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        Ok(Self {
            sensor_id: get("TEMP_ID").unwrap_or(defaults.sensor_id),
            base_path: get("TEMP_PATH").unwrap_or(defaults.base_path),
            mqtt_host: get("MQTT_HOST").unwrap_or(defaults.mqtt_host),
            mqtt_port: parse_or("MQTT_PORT", get("MQTT_PORT"), defaults.mqtt_port)?,
            mqtt_client_id: get("MQTT_CLIENT_ID").unwrap_or(defaults.mqtt_client_id),
            poll_interval: parse_or(
                "POLL_INTERVAL_MS",
                get("POLL_INTERVAL_MS"),
                defaults.poll_interval.as_millis() as u64,
            )
            .map(Duration::from_millis)?,
            log_level: parse_or("LOG_LEVEL", get("LOG_LEVEL"), defaults.log_level)?,
            run_once: match get("RUN_ONCE") {
                None => defaults.run_once,
                Some(value) => parse_flag("RUN_ONCE", value)?,
            },
        })
    }
}

fn parse_or<T: FromStr>(
    key: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}

fn parse_flag(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue { key, value }),
    }
}
