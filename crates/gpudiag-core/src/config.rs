//! Runtime configuration for diagnostic runs.

use gpudiag_engine::GroupHandle;
use tracing::Level;

use crate::error::ConfigError;
use crate::level::DiagLevel;

pub const ENV_LEVEL: &str = "GPUDIAG_LEVEL";
pub const ENV_GROUP: &str = "GPUDIAG_GROUP";
pub const ENV_LOG_FORMAT: &str = "GPUDIAG_LOG_FORMAT";
pub const ENV_LOG_LEVEL: &str = "GPUDIAG_LOG_LEVEL";

/// Defaults for a diagnostic run and its logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagConfig {
    /// Level requested when the caller does not pick one.
    pub level: DiagLevel,
    /// Target group when the caller does not pick one.
    pub group: GroupHandle,
    /// Emit JSON log lines.
    pub log_json: bool,
    /// Default verbosity when `RUST_LOG` is unset.
    pub log_level: Level,
}

impl Default for DiagConfig {
    fn default() -> Self {
        Self {
            level: DiagLevel::QUICK,
            group: GroupHandle::from_raw(0),
            log_json: false,
            log_level: Level::INFO,
        }
    }
}

impl DiagConfig {
    /// Set the default level
    pub fn with_level(mut self, level: DiagLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the default group
    pub fn with_group(mut self, group: GroupHandle) -> Self {
        self.group = group;
        self
    }

    /// Enable or disable JSON logs
    pub fn with_log_json(mut self, json: bool) -> Self {
        self.log_json = json;
        self
    }

    /// Create from environment variables
    ///
    /// Reads:
    /// - GPUDIAG_LEVEL (optional, name or number, default: quick)
    /// - GPUDIAG_GROUP (optional, default: 0)
    /// - GPUDIAG_LOG_FORMAT (optional, "json" or "text", default: text)
    /// - GPUDIAG_LOG_LEVEL (optional, default: info)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`DiagConfig::from_env`] with a custom variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_LEVEL) {
            config.level = value
                .parse()
                .map_err(|_| invalid(ENV_LEVEL, &value))?;
        }

        if let Some(value) = lookup(ENV_GROUP) {
            let raw = value
                .trim()
                .parse::<u64>()
                .map_err(|_| invalid(ENV_GROUP, &value))?;
            config.group = GroupHandle::from_raw(raw);
        }

        if let Some(value) = lookup(ENV_LOG_FORMAT) {
            config.log_json = match value.trim().to_ascii_lowercase().as_str() {
                "json" => true,
                "text" | "" => false,
                _ => return Err(invalid(ENV_LOG_FORMAT, &value)),
            };
        }

        if let Some(value) = lookup(ENV_LOG_LEVEL) {
            config.log_level = value
                .trim()
                .parse::<Level>()
                .map_err(|_| invalid(ENV_LOG_LEVEL, &value))?;
        }

        Ok(config)
    }
}

fn invalid(var: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        var: var.to_string(),
        value: value.to_string(),
    }
}
