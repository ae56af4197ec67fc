use std::{env, time::Duration};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_PROXY_URL: &str = "https://itp-ima-replicate-proxy.web.app/api/create_n_get";
pub const DEFAULT_EVENT_MODEL: &str = "anthropic/claude-3.7-sonnet";
pub const DEFAULT_IMAGE_MODEL: &str = "google/imagen-4-fast";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a valid port number, got {value:?}")]
    InvalidPort { name: &'static str, value: String },
    #[error("{name} must be a positive whole number of seconds, got {value:?}")]
    InvalidTimeout { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub proxy_url: String,
    pub auth_token: String,
    pub event_model: String,
    pub image_model: String,
    /// `None` leaves outbound calls without a deadline.
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            proxy_url: DEFAULT_PROXY_URL.to_string(),
            auth_token: String::new(),
            event_model: DEFAULT_EVENT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            request_timeout: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(value) = lookup("PORT") {
            config.port = value.trim().parse().map_err(|_| ConfigError::InvalidPort {
                name: "PORT",
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup("PROXY_URL") {
            config.proxy_url = value;
        }
        if let Some(value) = lookup("PROXY_AUTH_TOKEN") {
            config.auth_token = value;
        }
        if let Some(value) = lookup("EVENT_MODEL") {
            config.event_model = value;
        }
        if let Some(value) = lookup("IMAGE_MODEL") {
            config.image_model = value;
        }
        if let Some(value) = lookup("PROXY_TIMEOUT_SECS") {
            let secs = value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout {
                    name: "PROXY_TIMEOUT_SECS",
                    value: value.clone(),
                })?;
            config.request_timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }
}
