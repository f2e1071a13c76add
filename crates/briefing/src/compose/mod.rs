//! The [`Composer`]: turns a working directory, capability flags, and a
//! registry into an [`AssembledDocument`].
//!
//! One call to [`Composer::assemble`] runs these steps:
//!
//! 1. Reject caller misuse (no working directory) before anything else.
//! 2. Ask the [`CapabilityGate`] for the ordered section plan.
//! 3. If the registry is enabled and a planned section reads it, run the
//!    registry barrier ([`gather_registry`]). Failures and timeouts are
//!    absorbed here and show up as placeholder text plus
//!    [`RegistryOutcome::Degraded`].
//! 4. Render every planned section in order. A render error aborts the
//!    whole call; no partial document is returned.
//! 5. Join the non-empty outputs with a blank line.

mod builder;
mod gather;

pub use builder::{DocumentBuilder, SEPARATOR};
pub use gather::{RegistrySnapshot, gather_registry};

use std::path::Path;

use tracing::{debug, info, warn};

use crate::capability::CapabilityFlags;
use crate::config::ComposerConfig;
use crate::env::{HostEnvironment, HostFacts, SystemEnvironment};
use crate::error::ComposeError;
use crate::gate::CapabilityGate;
use crate::path::to_posix;
use crate::registry::RegistryClient;
use crate::sections::{RenderContext, SectionId};

/// What happened to the registry during an assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryOutcome {
    /// The registry was not consulted (integration off, or no planned section
    /// reads it).
    NotQueried,
    /// Every registry query succeeded.
    Available,
    /// At least one query failed or timed out; placeholder content was used.
    Degraded { reason: String },
}

impl RegistryOutcome {
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }
}

/// The result of one assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledDocument {
    /// The joined instruction text.
    pub text: String,
    /// Sections that contributed text, in document order.
    pub sections: Vec<SectionId>,
    pub registry: RegistryOutcome,
}

impl AssembledDocument {
    pub fn contains_section(&self, id: SectionId) -> bool {
        self.sections.contains(&id)
    }
}

/// Assembles instruction documents.
///
/// Holds no per-call state; one composer can serve any number of
/// concurrent assemblies.
///
/// # Example
///
/// ```
/// use briefing::prelude::*;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), ComposeError> {
/// let registry = StaticRegistry::new()
///     .with_server(RegistryEntry::connected("alpha").with_tool("fetch", "retrieves a URL"));
///
/// let document = Composer::new()
///     .assemble("/home/dev/project", &CapabilityFlags::default(), &registry)
///     .await?;
///
/// assert!(document.text.contains("- fetch: retrieves a URL"));
/// # Ok(())
/// # }
/// ```
pub struct Composer {
    env: Box<dyn HostEnvironment>,
    gate: CapabilityGate,
    config: ComposerConfig,
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

impl Composer {
    /// Composer over the real host environment with default settings.
    pub fn new() -> Self {
        Self {
            env: Box::new(SystemEnvironment),
            gate: CapabilityGate::new(),
            config: ComposerConfig::default(),
        }
    }

    pub fn with_environment(mut self, env: impl HostEnvironment + 'static) -> Self {
        self.env = Box::new(env);
        self
    }

    pub fn with_gate(mut self, gate: CapabilityGate) -> Self {
        self.gate = gate;
        self
    }

    pub fn with_config(mut self, config: ComposerConfig) -> Self {
        self.config = config;
        self
    }

    /// Assemble the document for one task.
    ///
    /// Registry unavailability never fails the call. Errors are returned
    /// only for caller misuse ([`ComposeError::MissingParameter`]) and for
    /// sections that cannot render ([`ComposeError::Section`]).
    pub async fn assemble(
        &self,
        cwd: impl AsRef<Path>,
        flags: &CapabilityFlags,
        registry: &dyn RegistryClient,
    ) -> Result<AssembledDocument, ComposeError> {
        let cwd = cwd.as_ref();
        if cwd.as_os_str().is_empty() {
            return Err(ComposeError::MissingParameter { parameter: "cwd" });
        }
        let cwd = to_posix(cwd);

        let plan = self.gate.plan(flags);
        debug!(
            sections = plan.len(),
            automation = flags.automation,
            registry = %flags.registry,
            "Planned sections"
        );

        let host = HostFacts::capture(self.env.as_ref());

        let snapshot = if flags.registry.is_enabled() && plan.needs_registry() {
            Some(gather_registry(registry, flags.registry, self.config.registry_timeout).await)
        } else {
            None
        };

        let outcome = match &snapshot {
            None => RegistryOutcome::NotQueried,
            Some(s) => match s.failure_summary() {
                None => RegistryOutcome::Available,
                Some(reason) => {
                    warn!(%reason, "Registry degraded, rendering placeholder content");
                    RegistryOutcome::Degraded { reason }
                }
            },
        };

        let mut builder = DocumentBuilder::new();
        let mut rendered = Vec::with_capacity(plan.len());
        for planned in plan.iter() {
            let ctx = RenderContext {
                params: planned.params,
                cwd: &cwd,
                host: &host,
                registry: snapshot.as_ref(),
            };
            let text = (planned.section.render)(&ctx).map_err(|source| ComposeError::Section {
                section: planned.section.id,
                source,
            })?;
            if text.is_empty() {
                debug!(section = %planned.section.id, "Section rendered empty, skipping");
                continue;
            }
            builder = builder.block(text);
            rendered.push(planned.section.id);
        }

        let blocks = builder.len();
        let text = builder.build();
        info!(
            sections = blocks,
            bytes = text.len(),
            degraded = outcome.is_degraded(),
            "Assembled instruction document"
        );

        Ok(AssembledDocument {
            text,
            sections: rendered,
            registry: outcome,
        })
    }
}
