use crate::result::{HudError, HudErrorKind, HudResult};
use crate::context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 6990;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5 * 60);
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_RECEIVE_BUFFER_SIZE: usize = 8192;

/// Endpoint and retry settings of the remote input client.
///
/// Can be loaded from YAML; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    pub host: String,
    pub port: u16,
    /// Bounds connect, send and receive of every attempt.
    #[serde(rename = "timeout_secs", with = "duration_secs")]
    pub timeout: Duration,
    pub max_attempts: u32,
    pub receive_buffer_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            timeout: DEFAULT_TIMEOUT,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            receive_buffer_size: DEFAULT_RECEIVE_BUFFER_SIZE,
        }
    }
}

impl ClientConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn validate(&self) -> HudResult<()> {
        if self.host.trim().is_empty() {
            return Err(config_error("host must not be empty"));
        }
        if self.timeout.is_zero() {
            return Err(config_error("timeout_secs must be greater than zero"));
        }
        if self.max_attempts == 0 {
            return Err(config_error("max_attempts must be greater than zero"));
        }
        if self.receive_buffer_size == 0 {
            return Err(config_error("receive_buffer_size must be greater than zero"));
        }
        Ok(())
    }

    pub fn from_yaml_str(yaml: &str) -> HudResult<Self> {
        let config: ClientConfig = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> HudResult<Self> {
        let path = path.as_ref();
        context!("load client config from '{}'", path.display() => {
            std::fs::read_to_string(path)
                .map_err(HudError::from)
                .and_then(|yaml| Self::from_yaml_str(&yaml))
        })
    }
}

fn config_error(message: &str) -> HudError {
    HudError::new(HudErrorKind::Config(message.to_string()))
}

/// Durations as (possibly fractional) seconds.
mod duration_secs {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        if duration.subsec_nanos() == 0 {
            serializer.serialize_u64(duration.as_secs())
        } else {
            serializer.serialize_f64(duration.as_secs_f64())
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs)
            .map_err(|_| D::Error::custom(format!("invalid timeout of {} seconds", secs)))
    }
}
