//! Capability flags describing what the current agent instance supports.
//!
//! [`CapabilityFlags`] is the fully-resolved record the
//! [`CapabilityGate`](crate::gate::CapabilityGate) works from. Callers that
//! hold partial or stringly-typed inputs (config files, CLI arguments) collect
//! them in [`CapabilityOverrides`] and call
//! [`resolve`](CapabilityOverrides::resolve), which never fails: every
//! unrecognised value falls back to the documented default for its flag.

use serde::Deserialize;
use std::fmt;
use tracing::warn;

/// Default browser viewport width in pixels.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 900;
/// Default browser viewport height in pixels.
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 600;

// ── Viewport ───────────────────────────────────────────────────────

/// Browser viewport dimensions handed to the automation section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Parse a `WIDTHxHEIGHT` string such as `"1280x800"`.
    ///
    /// Returns `None` for malformed input or a zero dimension.
    pub fn parse(s: &str) -> Option<Self> {
        let (w, h) = s.trim().split_once(['x', 'X'])?;
        let width: u32 = w.trim().parse().ok()?;
        let height: u32 = h.trim().parse().ok()?;
        (width > 0 && height > 0).then_some(Self { width, height })
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

// ── RegistryMode ───────────────────────────────────────────────────

/// How far extension-server (MCP) integration is exposed to the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistryMode {
    /// Integration disabled. Registry sections render empty and the registry
    /// is never queried.
    Off,
    /// Connected servers are listed, but guidance for creating new servers
    /// is omitted.
    ServerUseOnly,
    /// Connected servers are listed and server-creation guidance is included.
    #[default]
    Full,
}

impl RegistryMode {
    /// Parse a mode string, falling back to [`RegistryMode::default`] for
    /// anything unrecognised.
    ///
    /// Accepted spellings: `off` / `disabled` / `false`, `server-use-only`,
    /// `full` / `enabled` / `on` / `true`. Matching ignores case and treats
    /// `_` like `-`.
    pub fn parse_lenient(s: &str) -> Self {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "off" | "disabled" | "false" => Self::Off,
            "server-use-only" => Self::ServerUseOnly,
            "full" | "enabled" | "on" | "true" => Self::Full,
            _ => {
                warn!(value = s, "Unrecognised registry mode, using default (full)");
                Self::default()
            }
        }
    }

    /// Whether the registry participates in assembly at all.
    pub fn is_enabled(self) -> bool {
        !matches!(self, Self::Off)
    }

    /// Whether server-creation guidance is rendered.
    pub fn allows_server_creation(self) -> bool {
        matches!(self, Self::Full)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::ServerUseOnly => "server-use-only",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for RegistryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── CapabilityFlags ────────────────────────────────────────────────

/// Fully-resolved capability record for one assembly invocation.
///
/// # Example
///
/// ```
/// use briefing::capability::{CapabilityFlags, RegistryMode, Viewport};
///
/// let flags = CapabilityFlags::default()
///     .with_automation(true)
///     .with_viewport(Viewport::new(1280, 800))
///     .with_registry(RegistryMode::ServerUseOnly);
///
/// assert!(flags.automation);
/// assert_eq!(flags.viewport.to_string(), "1280x800");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CapabilityFlags {
    /// Interactive browser automation is available. Default: `false`.
    pub automation: bool,
    /// Viewport used by the automation section. Ignored when `automation`
    /// is off. Default: `900x600`.
    pub viewport: Viewport,
    /// Extension-server integration mode. Default: [`RegistryMode::Full`].
    pub registry: RegistryMode,
}

impl CapabilityFlags {
    pub fn with_automation(mut self, automation: bool) -> Self {
        self.automation = automation;
        self
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_registry(mut self, registry: RegistryMode) -> Self {
        self.registry = registry;
        self
    }
}

// ── CapabilityOverrides ────────────────────────────────────────────

/// Partially-specified capability inputs, as read from a config file or the
/// command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CapabilityOverrides {
    pub automation: Option<bool>,
    /// `WIDTHxHEIGHT`.
    pub viewport: Option<String>,
    /// See [`RegistryMode::parse_lenient`].
    pub registry: Option<String>,
}

impl CapabilityOverrides {
    /// Layer `other` on top of `self`; fields set in `other` win.
    pub fn overlay(self, other: CapabilityOverrides) -> Self {
        Self {
            automation: other.automation.or(self.automation),
            viewport: other.viewport.or(self.viewport),
            registry: other.registry.or(self.registry),
        }
    }

    /// Resolve into concrete flags. Never fails.
    pub fn resolve(&self) -> CapabilityFlags {
        let viewport = match self.viewport.as_deref() {
            Some(raw) => Viewport::parse(raw).unwrap_or_else(|| {
                warn!(value = raw, "Malformed viewport, using default {}", Viewport::default());
                Viewport::default()
            }),
            None => Viewport::default(),
        };

        CapabilityFlags {
            automation: self.automation.unwrap_or(false),
            viewport,
            registry: self
                .registry
                .as_deref()
                .map(RegistryMode::parse_lenient)
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_parses_both_separators() {
        assert_eq!(Viewport::parse("1280x800"), Some(Viewport::new(1280, 800)));
        assert_eq!(Viewport::parse(" 640 X 480 "), Some(Viewport::new(640, 480)));
    }

    #[test]
    fn viewport_rejects_malformed_and_zero() {
        assert_eq!(Viewport::parse("1280"), None);
        assert_eq!(Viewport::parse("axb"), None);
        assert_eq!(Viewport::parse("0x600"), None);
        assert_eq!(Viewport::parse("-5x600"), None);
    }

    #[test]
    fn registry_mode_aliases() {
        assert_eq!(RegistryMode::parse_lenient("enabled"), RegistryMode::Full);
        assert_eq!(RegistryMode::parse_lenient("FULL"), RegistryMode::Full);
        assert_eq!(RegistryMode::parse_lenient("off"), RegistryMode::Off);
        assert_eq!(RegistryMode::parse_lenient("disabled"), RegistryMode::Off);
        assert_eq!(
            RegistryMode::parse_lenient("server_use_only"),
            RegistryMode::ServerUseOnly
        );
    }

    #[test]
    fn unknown_registry_mode_falls_back_to_default() {
        assert_eq!(RegistryMode::parse_lenient("sometimes"), RegistryMode::Full);
    }

    #[test]
    fn empty_overrides_resolve_to_defaults() {
        let flags = CapabilityOverrides::default().resolve();
        assert_eq!(flags, CapabilityFlags::default());
        assert!(!flags.automation);
        assert_eq!(flags.viewport, Viewport::new(900, 600));
        assert_eq!(flags.registry, RegistryMode::Full);
    }

    #[test]
    fn malformed_viewport_resolves_to_default() {
        let flags = CapabilityOverrides {
            automation: Some(true),
            viewport: Some("wide".into()),
            registry: None,
        }
        .resolve();
        assert!(flags.automation);
        assert_eq!(flags.viewport, Viewport::default());
    }

    #[test]
    fn overlay_prefers_later_values() {
        let file = CapabilityOverrides {
            automation: Some(true),
            viewport: Some("800x600".into()),
            registry: Some("off".into()),
        };
        let cli = CapabilityOverrides {
            registry: Some("full".into()),
            ..Default::default()
        };
        let merged = file.overlay(cli);
        assert_eq!(merged.automation, Some(true));
        assert_eq!(merged.viewport.as_deref(), Some("800x600"));
        assert_eq!(merged.registry.as_deref(), Some("full"));
    }
}
