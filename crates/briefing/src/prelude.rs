//! Convenience re-exports for embedding the composer.
//!
//! ```
//! use briefing::prelude::*;
//! ```
//!
//! Section internals (render context, catalogue entries) are left out;
//! import those from [`sections`](crate::sections) when needed.

// ── Assembly ────────────────────────────────────────────────────────
pub use crate::compose::{AssembledDocument, Composer, RegistryOutcome};
pub use crate::config::{BriefingConfig, ComposerConfig};
pub use crate::gate::CapabilityGate;
pub use crate::sections::SectionId;

// ── Capabilities ────────────────────────────────────────────────────
pub use crate::capability::{CapabilityFlags, CapabilityOverrides, RegistryMode, Viewport};

// ── Registry ────────────────────────────────────────────────────────
pub use crate::registry::{
    NoRegistry, RegistryClient, RegistryEntry, RegistryFuture, ServerStatus, SnapshotFileRegistry,
    StaticRegistry,
};

// ── Host ────────────────────────────────────────────────────────────
pub use crate::env::{HostEnvironment, StaticEnvironment, SystemEnvironment};

// ── Errors ──────────────────────────────────────────────────────────
pub use crate::error::{ComposeError, ConfigError, RegistryError, SectionError};
