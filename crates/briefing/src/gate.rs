//! Capability gate: which sections render, in which order, with which
//! parameter variant.
//!
//! The gate is a pure function of [`CapabilityFlags`]. It walks the section
//! catalogue once, keeps the sections whose predicate holds, and attaches the
//! [`SectionParams`] each one should render with. It never performs I/O and
//! has no failure mode.

use crate::capability::CapabilityFlags;
use crate::sections::{CATALOGUE, Section, SectionId, SectionParams};

/// A section selected for rendering.
#[derive(Debug, Clone, Copy)]
pub struct PlannedSection {
    pub section: &'static Section,
    pub params: SectionParams,
}

/// Ordered list of sections to render for one assembly.
#[derive(Debug, Clone, Default)]
pub struct SectionPlan {
    sections: Vec<PlannedSection>,
}

impl SectionPlan {
    pub fn iter(&self) -> impl Iterator<Item = &PlannedSection> {
        self.sections.iter()
    }

    pub fn ids(&self) -> Vec<SectionId> {
        self.sections.iter().map(|p| p.section.id).collect()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Whether any planned section reads registry data.
    pub fn needs_registry(&self) -> bool {
        self.sections.iter().any(|p| p.section.needs_registry)
    }
}

/// Selects sections from a catalogue.
#[derive(Debug, Clone, Copy)]
pub struct CapabilityGate {
    catalogue: &'static [Section],
}

impl Default for CapabilityGate {
    fn default() -> Self {
        Self::new()
    }
}

impl CapabilityGate {
    /// Gate over the built-in [`CATALOGUE`].
    pub fn new() -> Self {
        Self {
            catalogue: CATALOGUE,
        }
    }

    /// Gate over a caller-supplied catalogue, listed in document order.
    pub fn with_catalogue(catalogue: &'static [Section]) -> Self {
        Self { catalogue }
    }

    pub fn plan(&self, flags: &CapabilityFlags) -> SectionPlan {
        let params = SectionParams::from_flags(flags);
        SectionPlan {
            sections: self
                .catalogue
                .iter()
                .filter(|section| (section.include)(flags))
                .map(|section| PlannedSection { section, params })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{RegistryMode, Viewport};

    fn position(ids: &[SectionId], id: SectionId) -> Option<usize> {
        ids.iter().position(|s| *s == id)
    }

    #[test]
    fn automation_off_omits_browser_action() {
        let ids = CapabilityGate::new().plan(&CapabilityFlags::default()).ids();
        assert_eq!(position(&ids, SectionId::BrowserAction), None);
        assert_eq!(ids.len(), CATALOGUE.len() - 1);
    }

    #[test]
    fn automation_on_inserts_after_execute_command() {
        let flags = CapabilityFlags::default().with_automation(true);
        let ids = CapabilityGate::new().plan(&flags).ids();
        let exec = position(&ids, SectionId::ExecuteCommand).unwrap();
        assert_eq!(ids[exec + 1], SectionId::BrowserAction);
    }

    #[test]
    fn toggling_automation_changes_only_browser_action() {
        let gate = CapabilityGate::new();
        for registry in [RegistryMode::Off, RegistryMode::ServerUseOnly, RegistryMode::Full] {
            let base = CapabilityFlags::default().with_registry(registry);
            let without = gate.plan(&base).ids();
            let mut with = gate.plan(&base.with_automation(true)).ids();
            with.retain(|id| *id != SectionId::BrowserAction);
            assert_eq!(with, without, "registry mode {registry}");
        }
    }

    #[test]
    fn registry_status_sits_between_editing_and_rules() {
        let gate = CapabilityGate::new();
        for automation in [false, true] {
            for registry in [RegistryMode::Off, RegistryMode::ServerUseOnly, RegistryMode::Full] {
                let flags = CapabilityFlags::default()
                    .with_automation(automation)
                    .with_registry(registry);
                let ids = gate.plan(&flags).ids();
                let editing = position(&ids, SectionId::EditingFiles).unwrap();
                let servers = position(&ids, SectionId::ExtensionServers).unwrap();
                let rules = position(&ids, SectionId::Rules).unwrap();
                assert!(editing < servers && servers < rules);
            }
        }
    }

    #[test]
    fn params_carry_viewport_only_with_automation() {
        let flags = CapabilityFlags::default()
            .with_automation(true)
            .with_viewport(Viewport::new(800, 600));
        let plan = CapabilityGate::new().plan(&flags);
        assert!(
            plan.iter()
                .all(|p| p.params.automation == Some(Viewport::new(800, 600)))
        );

        let plan = CapabilityGate::new().plan(&flags.with_automation(false));
        assert!(plan.iter().all(|p| p.params.automation.is_none()));
    }

    #[test]
    fn plan_reports_registry_dependency() {
        assert!(CapabilityGate::new().plan(&CapabilityFlags::default()).needs_registry());
        assert!(CapabilityGate::with_catalogue(&[]).plan(&CapabilityFlags::default()).is_empty());
    }
}
