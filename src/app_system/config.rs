use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} has invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Runtime settings for the order system.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfig {
    /// Mailbox size of every store actor (env: ORDERS_CHANNEL_BUFFER)
    pub channel_buffer: usize,
    /// Maximum number of users, unbounded when unset (env: ORDERS_USER_CAPACITY)
    pub user_capacity: Option<usize>,
    /// `tracing` filter directive (env: ORDERS_LOG)
    pub log_filter: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            user_capacity: None,
            log_filter: "order_orchestrator=info".to_string(),
        }
    }
}

impl SystemConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let channel_buffer = match lookup("ORDERS_CHANNEL_BUFFER") {
            Some(value) => match value.parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => return Err(ConfigError::Invalid { name: "ORDERS_CHANNEL_BUFFER", value }),
            },
            None => defaults.channel_buffer,
        };

        let user_capacity = match lookup("ORDERS_USER_CAPACITY") {
            Some(value) => Some(
                value
                    .parse::<usize>()
                    .map_err(|_| ConfigError::Invalid { name: "ORDERS_USER_CAPACITY", value: value.clone() })?,
            ),
            None => defaults.user_capacity,
        };

        let log_filter = lookup("ORDERS_LOG").unwrap_or(defaults.log_filter);

        Ok(Self { channel_buffer, user_capacity, log_filter })
    }
}
