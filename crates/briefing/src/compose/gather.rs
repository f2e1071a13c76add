//! Registry barrier: issue the registry queries the mode needs concurrently,
//! bound each by a timeout, and wait for all of them before any section reads
//! registry data.
//!
//! Nothing is spawned. The queries are polled inside the caller's task, so
//! dropping the assembly future drops every pending query with it.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, warn};

use crate::capability::RegistryMode;
use crate::error::RegistryError;
use crate::path::to_posix;
use crate::registry::{RegistryClient, RegistryEntry};

/// Result of the registry barrier. Each query succeeds or fails on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrySnapshot {
    /// Connected servers, sorted by name.
    pub servers: Result<Vec<RegistryEntry>, RegistryError>,
    /// Default install directory, forward-slash form. `None` when the mode
    /// does not render server-creation guidance and the path was not asked for.
    pub install_path: Option<Result<String, RegistryError>>,
    /// Settings file location, forward-slash form. `None` when not asked for.
    pub settings_path: Option<Result<String, RegistryError>>,
}

impl RegistrySnapshot {
    /// Connected servers, or an empty slice if the listing failed.
    pub fn connected(&self) -> &[RegistryEntry] {
        self.servers.as_deref().unwrap_or(&[])
    }

    /// Human-readable summary of every failed query, or `None` when every
    /// issued query succeeded. Queries that were not issued never count.
    pub fn failure_summary(&self) -> Option<String> {
        let failures: Vec<String> = [
            ("list_connected", self.servers.as_ref().err()),
            (
                "default_install_path",
                self.install_path.as_ref().and_then(|r| r.as_ref().err()),
            ),
            (
                "settings_file_path",
                self.settings_path.as_ref().and_then(|r| r.as_ref().err()),
            ),
        ]
        .into_iter()
        .filter_map(|(query, err)| err.map(|e| format!("{query}: {e}")))
        .collect();

        (!failures.is_empty()).then(|| failures.join("; "))
    }
}

async fn bounded<T>(
    query: &'static str,
    timeout: Duration,
    fut: impl Future<Output = Result<T, RegistryError>>,
) -> Result<T, RegistryError> {
    match tokio::time::timeout(timeout, fut).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => {
            warn!(query, error = %e, "Registry query failed");
            Err(e)
        }
        Err(_) => {
            warn!(query, ?timeout, "Registry query timed out");
            Err(RegistryError::TimedOut(timeout))
        }
    }
}

/// Run the registry queries concurrently and wait for all of them.
///
/// The server listing is always requested. The install and settings paths
/// are requested only when `mode` renders server-creation guidance.
///
/// Entries that are not connected are dropped even if the client returned
/// them, and the remainder is sorted by name so output does not depend on
/// the registry's internal ordering.
pub async fn gather_registry(
    client: &dyn RegistryClient,
    mode: RegistryMode,
    timeout: Duration,
) -> RegistrySnapshot {
    let with_paths = mode.allows_server_creation();
    let (servers, install_path, settings_path) = tokio::join!(
        bounded("list_connected", timeout, client.list_connected()),
        async {
            if with_paths {
                Some(bounded("default_install_path", timeout, client.default_install_path()).await)
            } else {
                None
            }
        },
        async {
            if with_paths {
                Some(bounded("settings_file_path", timeout, client.settings_file_path()).await)
            } else {
                None
            }
        },
    );

    let servers = servers.map(|mut entries| {
        let before = entries.len();
        entries.retain(RegistryEntry::is_connected);
        if entries.len() != before {
            debug!(
                dropped = before - entries.len(),
                "Dropped registry entries that are not connected"
            );
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    });

    RegistrySnapshot {
        servers,
        install_path: install_path.map(|r| r.map(|p| to_posix(&p))),
        settings_path: settings_path.map(|r| r.map(|p| to_posix(&p))),
    }
}
