//! Extension-server registry interface.
//!
//! The registry tracks pluggable tool providers (MCP servers) and the tools
//! and resources each one exposes. It owns the connection lifecycle; this
//! crate only reads a snapshot of it while assembling a document, through the
//! three queries on [`RegistryClient`].
//!
//! Two implementations ship with the crate:
//!
//! - [`StaticRegistry`]: an in-memory snapshot, also usable as a test fake.
//! - [`SnapshotFileRegistry`]: re-reads a JSON snapshot from disk on every
//!   query, for hosts that publish registry state to a file.
//!
//! [`NoRegistry`] stands in when no registry is configured; every query
//! fails with [`RegistryError::Unavailable`].

mod snapshot;

pub use snapshot::{SnapshotFileRegistry, StaticRegistry};

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use crate::error::RegistryError;

/// Boxed future returned by [`RegistryClient`] queries.
///
/// Keeps the trait dyn-compatible so clients can be passed as
/// `&dyn RegistryClient`.
pub type RegistryFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, RegistryError>> + Send + 'a>>;

/// Read-only query interface to the external registry.
///
/// Every query may suspend on external I/O and may race with connection
/// changes inside the registry. Implementations carry no ordering guarantee
/// beyond "stable within one call".
pub trait RegistryClient: Send + Sync {
    /// Servers whose status is [`ServerStatus::Connected`] at the time of the
    /// call. Servers still connecting, or that failed, are left out.
    fn list_connected(&self) -> RegistryFuture<'_, Vec<RegistryEntry>>;

    /// Directory new servers are installed into by default.
    fn default_install_path(&self) -> RegistryFuture<'_, PathBuf>;

    /// Location of the registry's settings file.
    fn settings_file_path(&self) -> RegistryFuture<'_, PathBuf>;
}

/// Registry that is never reachable.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRegistry;

impl RegistryClient for NoRegistry {
    fn list_connected(&self) -> RegistryFuture<'_, Vec<RegistryEntry>> {
        Box::pin(async { Err(RegistryError::Unavailable("no registry configured".into())) })
    }

    fn default_install_path(&self) -> RegistryFuture<'_, PathBuf> {
        Box::pin(async { Err(RegistryError::Unavailable("no registry configured".into())) })
    }

    fn settings_file_path(&self) -> RegistryFuture<'_, PathBuf> {
        Box::pin(async { Err(RegistryError::Unavailable("no registry configured".into())) })
    }
}

// ── Entry types ────────────────────────────────────────────────────

/// Connection state of a server inside the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerStatus {
    #[default]
    Connected,
    Connecting,
    Failed,
}

/// How the registry launches a server. Opaque beyond display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl ServerConfig {
    /// `command arg1 arg2`, or an empty string when no command is known.
    pub fn command_line(&self) -> String {
        std::iter::once(self.command.as_str())
            .chain(self.args.iter().map(String::as_str))
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A tool exposed by a server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_schema: Option<serde_json::Value>,
}

/// A concrete resource exposed by a server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    pub uri: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A parameterized resource URI exposed by a server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceTemplate {
    pub uri_template: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Snapshot of one server as seen by the registry at query time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryEntry {
    /// Unique within one connection generation of the registry.
    pub name: String,
    #[serde(default)]
    pub status: ServerStatus,
    #[serde(default)]
    pub config: ServerConfig,
    #[serde(default)]
    pub tools: Vec<ToolDescriptor>,
    #[serde(default)]
    pub resources: Vec<ResourceDescriptor>,
    #[serde(default)]
    pub resource_templates: Vec<ResourceTemplate>,
}

impl RegistryEntry {
    /// A connected entry with no tools or resources.
    pub fn connected(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: ServerStatus::Connected,
            config: ServerConfig::default(),
            tools: Vec::new(),
            resources: Vec::new(),
            resource_templates: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: ServerStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_command(mut self, command: impl Into<String>, args: &[&str]) -> Self {
        self.config = ServerConfig {
            command: command.into(),
            args: args.iter().map(|a| (*a).to_string()).collect(),
        };
        self
    }

    pub fn with_tool(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.tools.push(ToolDescriptor {
            name: name.into(),
            description: description.into(),
            input_schema: None,
        });
        self
    }

    pub fn is_connected(&self) -> bool {
        self.status == ServerStatus::Connected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_joins_command_and_args() {
        let entry = RegistryEntry::connected("weather").with_command("node", &["build/index.js", "--stdio"]);
        assert_eq!(entry.config.command_line(), "node build/index.js --stdio");
    }

    #[test]
    fn command_line_empty_without_command() {
        assert_eq!(ServerConfig::default().command_line(), "");
    }

    #[test]
    fn entry_deserializes_with_defaults() {
        let entry: RegistryEntry = serde_json::from_str(r#"{"name": "alpha"}"#).unwrap();
        assert_eq!(entry.name, "alpha");
        assert!(entry.is_connected());
        assert!(entry.tools.is_empty());
    }

    #[test]
    fn status_uses_lowercase_names() {
        let entry: RegistryEntry =
            serde_json::from_str(r#"{"name": "beta", "status": "connecting"}"#).unwrap();
        assert_eq!(entry.status, ServerStatus::Connecting);
    }

    #[tokio::test]
    async fn no_registry_is_unavailable() {
        let err = NoRegistry.list_connected().await.unwrap_err();
        assert!(matches!(err, RegistryError::Unavailable(_)));
        assert!(NoRegistry.settings_file_path().await.is_err());
    }
}
