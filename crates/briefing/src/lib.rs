//! Capability-gated instruction document assembly for coding agents.
//!
//! `briefing` builds the system instruction text an LLM coding agent starts
//! every task with. The text is a fixed sequence of sections (role, tool
//! catalogue, editing guidance, connected extension servers, rules, host
//! information, objective). Which sections appear, and which variant of each,
//! depends on the host's [`CapabilityFlags`](capability::CapabilityFlags).
//! The list of connected extension servers comes from an asynchronous
//! [`RegistryClient`](registry::RegistryClient).
//!
//! ```
//! use briefing::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), ComposeError> {
//! let flags = CapabilityFlags::default().with_automation(true);
//! let document = Composer::new()
//!     .assemble("/home/dev/project", &flags, &NoRegistry)
//!     .await?;
//!
//! // The registry is unreachable, so the document says so and carries on.
//! assert!(document.text.contains(briefing::NO_SERVERS_PLACEHOLDER));
//! assert!(document.registry.is_degraded());
//! # Ok(())
//! # }
//! ```
//!
//! # Where to find things
//!
//! - **Assemble a document:** [`Composer`](compose::Composer), configured by
//!   [`ComposerConfig`](config::ComposerConfig).
//! - **Decide which sections render:** [`CapabilityGate`](gate::CapabilityGate)
//!   over the [`CATALOGUE`](sections::CATALOGUE).
//! - **Plug in a server registry:** implement
//!   [`RegistryClient`](registry::RegistryClient), or use
//!   [`StaticRegistry`](registry::StaticRegistry) and
//!   [`SnapshotFileRegistry`](registry::SnapshotFileRegistry).
//! - **Fake the host for tests:** [`StaticEnvironment`](env::StaticEnvironment).
//!
//! # Guarantees
//!
//! 1. **Deterministic.** Identical flags, working directory, host facts, and
//!    registry answers produce byte-identical text.
//! 2. **Stable order.** Sections always appear in catalogue order. The
//!    browser section sits directly after `execute_command`, and the server
//!    list sits after the editing guidance and before the rules.
//! 3. **Graceful degradation.** A failing or slow registry yields a
//!    placeholder, never an error.
//! 4. **Forward slashes.** Every path in the output uses `/`.

pub mod capability;
pub mod compose;
pub mod config;
pub mod env;
pub mod error;
pub mod gate;
pub mod path;
pub mod prelude;
pub mod registry;
pub mod sections;

pub use sections::NO_SERVERS_PLACEHOLDER;
