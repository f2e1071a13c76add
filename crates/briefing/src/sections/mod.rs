//! Document sections and the canonical catalogue.
//!
//! Each [`Section`] pairs an identifier with an inclusion predicate over
//! [`CapabilityFlags`] and a render function. [`CATALOGUE`] lists every
//! section in canonical document order; the
//! [`CapabilityGate`](crate::gate::CapabilityGate) filters it once per
//! assembly, so ordering is a pure function of the flags.
//!
//! Renderers are side-effect free. They read only the [`RenderContext`] they
//! are handed and return the section text, or an empty string when the
//! section has nothing to say for this configuration.

mod browser;
mod capabilities;
mod extensions;
mod guidance;
mod intro;
mod rules;
mod system;
mod tools;

pub use extensions::NO_SERVERS_PLACEHOLDER;

use std::fmt;

use crate::capability::{CapabilityFlags, RegistryMode, Viewport};
use crate::compose::RegistrySnapshot;
use crate::env::HostFacts;
use crate::error::SectionError;

/// Stable identifier for every section the catalogue knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Role,
    ToolUse,
    ExecuteCommand,
    BrowserAction,
    ReadFile,
    WriteToFile,
    ReplaceInFile,
    SearchFiles,
    ListFiles,
    ListCodeDefinitionNames,
    ExtensionTools,
    AskFollowupQuestion,
    AttemptCompletion,
    ToolUseExamples,
    ToolUseGuidelines,
    EditingFiles,
    ExtensionServers,
    ExtensionServerCreation,
    ActVsPlanMode,
    Capabilities,
    Rules,
    SystemInformation,
    Objective,
}

impl SectionId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Role => "role",
            Self::ToolUse => "tool_use",
            Self::ExecuteCommand => "execute_command",
            Self::BrowserAction => "browser_action",
            Self::ReadFile => "read_file",
            Self::WriteToFile => "write_to_file",
            Self::ReplaceInFile => "replace_in_file",
            Self::SearchFiles => "search_files",
            Self::ListFiles => "list_files",
            Self::ListCodeDefinitionNames => "list_code_definition_names",
            Self::ExtensionTools => "extension_tools",
            Self::AskFollowupQuestion => "ask_followup_question",
            Self::AttemptCompletion => "attempt_completion",
            Self::ToolUseExamples => "tool_use_examples",
            Self::ToolUseGuidelines => "tool_use_guidelines",
            Self::EditingFiles => "editing_files",
            Self::ExtensionServers => "extension_servers",
            Self::ExtensionServerCreation => "extension_server_creation",
            Self::ActVsPlanMode => "act_vs_plan_mode",
            Self::Capabilities => "capabilities",
            Self::Rules => "rules",
            Self::SystemInformation => "system_information",
            Self::Objective => "objective",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-section parameter variant chosen by the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionParams {
    /// `Some` only when browser automation is available.
    pub automation: Option<Viewport>,
    pub registry: RegistryMode,
}

impl SectionParams {
    pub fn from_flags(flags: &CapabilityFlags) -> Self {
        Self {
            automation: flags.automation.then_some(flags.viewport),
            registry: flags.registry,
        }
    }
}

/// Everything a renderer may read.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub params: SectionParams,
    /// Working directory, forward-slash form.
    pub cwd: &'a str,
    pub host: &'a HostFacts,
    /// Present once the registry barrier has passed, and only when the
    /// registry mode is enabled.
    pub registry: Option<&'a RegistrySnapshot>,
}

impl<'a> RenderContext<'a> {
    /// The registry snapshot, or a [`SectionError`] if the composer did not
    /// gather one.
    pub fn require_registry(&self) -> Result<&'a RegistrySnapshot, SectionError> {
        self.registry.ok_or(SectionError::MissingParameter {
            parameter: "registry snapshot",
        })
    }
}

pub type RenderFn = fn(&RenderContext<'_>) -> Result<String, SectionError>;

/// One entry in the catalogue.
#[derive(Clone, Copy)]
pub struct Section {
    pub id: SectionId,
    /// Whether the section may be left out entirely.
    pub optional: bool,
    /// Whether rendering reads registry data (and therefore waits on the
    /// registry barrier).
    pub needs_registry: bool,
    pub include: fn(&CapabilityFlags) -> bool,
    pub render: RenderFn,
}

impl fmt::Debug for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Section")
            .field("id", &self.id)
            .field("optional", &self.optional)
            .field("needs_registry", &self.needs_registry)
            .finish()
    }
}

fn always(_: &CapabilityFlags) -> bool {
    true
}

fn automation_available(flags: &CapabilityFlags) -> bool {
    flags.automation
}

const fn mandatory(id: SectionId, render: RenderFn) -> Section {
    Section {
        id,
        optional: false,
        needs_registry: false,
        include: always,
        render,
    }
}

const fn registry_backed(id: SectionId, render: RenderFn) -> Section {
    Section {
        id,
        optional: false,
        needs_registry: true,
        include: always,
        render,
    }
}

/// Every section in canonical document order.
pub static CATALOGUE: &[Section] = &[
    mandatory(SectionId::Role, intro::role),
    mandatory(SectionId::ToolUse, intro::tool_use),
    mandatory(SectionId::ExecuteCommand, tools::execute_command),
    Section {
        id: SectionId::BrowserAction,
        optional: true,
        needs_registry: false,
        include: automation_available,
        render: browser::browser_action,
    },
    mandatory(SectionId::ReadFile, tools::read_file),
    mandatory(SectionId::WriteToFile, tools::write_to_file),
    mandatory(SectionId::ReplaceInFile, tools::replace_in_file),
    mandatory(SectionId::SearchFiles, tools::search_files),
    mandatory(SectionId::ListFiles, tools::list_files),
    mandatory(SectionId::ListCodeDefinitionNames, tools::list_code_definition_names),
    mandatory(SectionId::ExtensionTools, extensions::extension_tools),
    mandatory(SectionId::AskFollowupQuestion, tools::ask_followup_question),
    mandatory(SectionId::AttemptCompletion, tools::attempt_completion),
    mandatory(SectionId::ToolUseExamples, guidance::tool_use_examples),
    mandatory(SectionId::ToolUseGuidelines, guidance::tool_use_guidelines),
    mandatory(SectionId::EditingFiles, guidance::editing_files),
    registry_backed(SectionId::ExtensionServers, extensions::extension_servers),
    registry_backed(
        SectionId::ExtensionServerCreation,
        extensions::extension_server_creation,
    ),
    mandatory(SectionId::ActVsPlanMode, guidance::act_vs_plan_mode),
    mandatory(SectionId::Capabilities, capabilities::capabilities),
    mandatory(SectionId::Rules, rules::rules),
    mandatory(SectionId::SystemInformation, system::system_information),
    mandatory(SectionId::Objective, system::objective),
];

/// Look up a catalogue entry by id.
pub fn find(id: SectionId) -> Option<&'static Section> {
    CATALOGUE.iter().find(|s| s.id == id)
}

#[cfg(test)]
pub(crate) mod fixture {
    //! Owned render inputs for section unit tests.

    use super::*;
    use crate::compose::RegistrySnapshot;
    use chrono::NaiveDate;

    pub struct Fixture {
        pub cwd: String,
        pub host: HostFacts,
        pub registry: Option<RegistrySnapshot>,
    }

    impl Fixture {
        pub fn new() -> Self {
            Self {
                cwd: "/home/dev/project".into(),
                host: HostFacts {
                    os_name: "Linux".into(),
                    default_shell: "/bin/bash".into(),
                    home_dir: "/home/dev".into(),
                    today: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
                },
                registry: None,
            }
        }

        pub fn with_registry(mut self, snapshot: RegistrySnapshot) -> Self {
            self.registry = Some(snapshot);
            self
        }

        pub fn ctx(&self, flags: &CapabilityFlags) -> RenderContext<'_> {
            RenderContext {
                params: SectionParams::from_flags(flags),
                cwd: &self.cwd,
                host: &self.host,
                registry: self.registry.as_ref(),
            }
        }

        pub fn render(&self, id: SectionId, flags: &CapabilityFlags) -> Result<String, SectionError> {
            let section = find(id).expect("section in catalogue");
            (section.render)(&self.ctx(flags))
        }
    }
}
