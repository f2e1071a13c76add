//! Configuration for the composer and the `briefing` binary.
//!
//! [`ComposerConfig`] holds runtime settings for [`Composer`](crate::compose::Composer).
//! [`BriefingConfig`] is the optional TOML file read by the CLI:
//!
//! ```toml
//! [capabilities]
//! automation = true
//! viewport = "1280x800"
//! registry = "server-use-only"
//!
//! [registry]
//! timeout_ms = 1500
//! snapshot = "/var/run/agent/registry.json"
//! ```
//!
//! Every field is optional. Command-line flags take precedence over the file.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::capability::CapabilityOverrides;
use crate::error::ConfigError;

/// Upper bound on each registry query before it is treated as failed.
pub const DEFAULT_REGISTRY_TIMEOUT: Duration = Duration::from_secs(2);

/// Runtime settings for the composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerConfig {
    /// Per-query bound for registry lookups. Default: 2 seconds.
    pub registry_timeout: Duration,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            registry_timeout: DEFAULT_REGISTRY_TIMEOUT,
        }
    }
}

impl ComposerConfig {
    pub fn with_registry_timeout(mut self, timeout: Duration) -> Self {
        self.registry_timeout = timeout;
        self
    }
}

/// Registry settings from the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistrySettings {
    pub timeout_ms: Option<u64>,
    /// JSON snapshot file read by
    /// [`SnapshotFileRegistry`](crate::registry::SnapshotFileRegistry).
    pub snapshot: Option<PathBuf>,
}

/// Contents of a `briefing` config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BriefingConfig {
    pub capabilities: CapabilityOverrides,
    pub registry: RegistrySettings,
}

impl BriefingConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn composer_config(&self) -> ComposerConfig {
        let mut config = ComposerConfig::default();
        if let Some(ms) = self.registry.timeout_ms {
            config = config.with_registry_timeout(Duration::from_millis(ms));
        }
        config
    }
}
