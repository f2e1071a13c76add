//! Host environment facts embedded in the document.
//!
//! [`HostEnvironment`] is the read-only collaborator the composer asks for
//! the operating system, default shell, home directory, and current date.
//! Every query is synchronous and infallible: implementations return a
//! best-effort default rather than an error.

use chrono::{Local, NaiveDate};
use std::path::PathBuf;

use crate::path::to_posix;

/// Read-only view of the host the agent runs on.
pub trait HostEnvironment: Send + Sync {
    /// Human-readable operating system name, e.g. `"Linux"`.
    fn os_name(&self) -> String;
    /// The user's default shell executable.
    fn default_shell(&self) -> String;
    fn home_dir(&self) -> PathBuf;
    fn today(&self) -> NaiveDate;
}

/// [`HostEnvironment`] backed by the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl HostEnvironment for SystemEnvironment {
    fn os_name(&self) -> String {
        match std::env::consts::OS {
            "linux" => "Linux".to_string(),
            "macos" => "macOS".to_string(),
            "windows" => "Windows".to_string(),
            "freebsd" => "FreeBSD".to_string(),
            other => other.to_string(),
        }
    }

    fn default_shell(&self) -> String {
        if cfg!(windows) {
            std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
        } else {
            std::env::var("SHELL")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "/bin/sh".to_string())
        }
    }

    fn home_dir(&self) -> PathBuf {
        std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("~"))
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// [`HostEnvironment`] with fixed answers, for reproducible output.
#[derive(Debug, Clone)]
pub struct StaticEnvironment {
    pub os_name: String,
    pub default_shell: String,
    pub home_dir: PathBuf,
    pub today: NaiveDate,
}

impl HostEnvironment for StaticEnvironment {
    fn os_name(&self) -> String {
        self.os_name.clone()
    }

    fn default_shell(&self) -> String {
        self.default_shell.clone()
    }

    fn home_dir(&self) -> PathBuf {
        self.home_dir.clone()
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}

/// Snapshot of host facts taken once per assembly, with paths already in
/// forward-slash form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostFacts {
    pub os_name: String,
    pub default_shell: String,
    pub home_dir: String,
    pub today: NaiveDate,
}

impl HostFacts {
    pub fn capture(env: &dyn HostEnvironment) -> Self {
        Self {
            os_name: env.os_name(),
            default_shell: env.default_shell(),
            home_dir: to_posix(&env.home_dir()),
            today: env.today(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_environment_never_returns_empty_facts() {
        let env = SystemEnvironment;
        assert!(!env.os_name().is_empty());
        assert!(!env.default_shell().is_empty());
        assert!(!env.home_dir().as_os_str().is_empty());
    }

    #[test]
    fn capture_normalizes_home_dir() {
        let env = StaticEnvironment {
            os_name: "Windows".into(),
            default_shell: "powershell.exe".into(),
            home_dir: PathBuf::from(r"C:\Users\dev"),
            today: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        };
        let facts = HostFacts::capture(&env);
        assert_eq!(facts.home_dir, "C:/Users/dev");
        assert_eq!(facts.os_name, "Windows");
    }
}
