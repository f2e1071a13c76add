//! Snapshot-backed registry clients.
//!
//! The snapshot format is JSON:
//!
//! ```json
//! {
//!   "install_path": "/home/dev/Documents/MCP",
//!   "settings_path": "/home/dev/.config/agent/mcp_settings.json",
//!   "servers": [
//!     {
//!       "name": "weather",
//!       "status": "connected",
//!       "config": { "command": "node", "args": ["build/index.js"] },
//!       "tools": [{ "name": "get_forecast", "description": "Forecast for a city" }]
//!     }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

use super::{RegistryClient, RegistryEntry, RegistryFuture};
use crate::error::RegistryError;

/// In-memory registry snapshot.
///
/// `list_connected` filters out servers that are not connected; the path
/// queries fail with [`RegistryError::Unavailable`] when the path is unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticRegistry {
    #[serde(default)]
    pub servers: Vec<RegistryEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings_path: Option<PathBuf>,
}

impl StaticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_server(mut self, entry: RegistryEntry) -> Self {
        self.servers.push(entry);
        self
    }

    pub fn with_install_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.install_path = Some(path.into());
        self
    }

    pub fn with_settings_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_path = Some(path.into());
        self
    }

    /// Parse a JSON snapshot.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    fn connected(&self) -> Vec<RegistryEntry> {
        self.servers
            .iter()
            .filter(|e| e.is_connected())
            .cloned()
            .collect()
    }
}

fn path_or_unavailable(path: Option<&PathBuf>, what: &str) -> Result<PathBuf, RegistryError> {
    path.cloned()
        .ok_or_else(|| RegistryError::Unavailable(format!("{what} not reported by registry")))
}

impl RegistryClient for StaticRegistry {
    fn list_connected(&self) -> RegistryFuture<'_, Vec<RegistryEntry>> {
        Box::pin(async move { Ok(self.connected()) })
    }

    fn default_install_path(&self) -> RegistryFuture<'_, PathBuf> {
        Box::pin(async move { path_or_unavailable(self.install_path.as_ref(), "install path") })
    }

    fn settings_file_path(&self) -> RegistryFuture<'_, PathBuf> {
        Box::pin(async move { path_or_unavailable(self.settings_path.as_ref(), "settings path") })
    }
}

/// Registry that re-reads a JSON snapshot file on every query.
///
/// Each query sees whatever the file holds at that moment, so membership can
/// change between (or during) assemblies. A missing or unparsable file makes
/// the query fail with [`RegistryError::Unavailable`].
#[derive(Debug, Clone)]
pub struct SnapshotFileRegistry {
    path: PathBuf,
}

impl SnapshotFileRegistry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read(&self) -> Result<StaticRegistry, RegistryError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            RegistryError::Unavailable(format!("cannot read {}: {e}", self.path.display()))
        })?;
        let snapshot = StaticRegistry::from_json(&raw).map_err(|e| {
            RegistryError::Unavailable(format!("cannot parse {}: {e}", self.path.display()))
        })?;
        debug!(
            path = %self.path.display(),
            servers = snapshot.servers.len(),
            "Read registry snapshot"
        );
        Ok(snapshot)
    }
}

impl RegistryClient for SnapshotFileRegistry {
    fn list_connected(&self) -> RegistryFuture<'_, Vec<RegistryEntry>> {
        Box::pin(async move { Ok(self.read().await?.connected()) })
    }

    fn default_install_path(&self) -> RegistryFuture<'_, PathBuf> {
        Box::pin(async move {
            let snapshot = self.read().await?;
            path_or_unavailable(snapshot.install_path.as_ref(), "install path")
        })
    }

    fn settings_file_path(&self) -> RegistryFuture<'_, PathBuf> {
        Box::pin(async move {
            let snapshot = self.read().await?;
            path_or_unavailable(snapshot.settings_path.as_ref(), "settings path")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ServerStatus;

    const SNAPSHOT: &str = r#"{
        "install_path": "/srv/mcp",
        "settings_path": "/etc/agent/mcp_settings.json",
        "servers": [
            {"name": "weather", "tools": [{"name": "get_forecast", "description": "Forecast"}]},
            {"name": "slow", "status": "connecting"},
            {"name": "broken", "status": "failed"}
        ]
    }"#;

    #[tokio::test]
    async fn static_registry_lists_only_connected() {
        let registry = StaticRegistry::new()
            .with_server(RegistryEntry::connected("a"))
            .with_server(RegistryEntry::connected("b").with_status(ServerStatus::Connecting))
            .with_server(RegistryEntry::connected("c").with_status(ServerStatus::Failed));

        let names: Vec<String> = registry
            .list_connected()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["a"]);
    }

    #[tokio::test]
    async fn missing_paths_are_unavailable() {
        let registry = StaticRegistry::new();
        assert!(matches!(
            registry.default_install_path().await,
            Err(RegistryError::Unavailable(_))
        ));
        assert!(registry.settings_file_path().await.is_err());
    }

    #[tokio::test]
    async fn snapshot_file_is_read_per_query() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.json");
        std::fs::write(&path, SNAPSHOT).unwrap();

        let registry = SnapshotFileRegistry::new(&path);
        let entries = registry.list_connected().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "weather");
        assert_eq!(
            registry.default_install_path().await.unwrap(),
            PathBuf::from("/srv/mcp")
        );

        // Membership changes are visible on the next query.
        std::fs::write(&path, r#"{"servers": []}"#).unwrap();
        assert!(registry.list_connected().await.unwrap().is_empty());
        assert!(registry.settings_file_path().await.is_err());
    }

    #[tokio::test]
    async fn missing_snapshot_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let registry = SnapshotFileRegistry::new(dir.path().join("absent.json"));
        let err = registry.list_connected().await.unwrap_err();
        assert!(matches!(err, RegistryError::Unavailable(msg) if msg.contains("absent.json")));
    }

    #[tokio::test]
    async fn malformed_snapshot_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.json");
        std::fs::write(&path, "{ not json").unwrap();
        let registry = SnapshotFileRegistry::new(&path);
        assert!(matches!(
            registry.list_connected().await,
            Err(RegistryError::Unavailable(_))
        ));
    }
}
