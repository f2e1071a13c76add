//! Error types for assembly, section rendering, registry queries, and config.
//!
//! Three kinds of failure exist and they propagate differently:
//!
//! - [`RegistryError`]: the external registry is unreachable or slow. Always
//!   absorbed by the [`Composer`](crate::compose::Composer), which renders
//!   placeholder content instead.
//! - [`SectionError`]: a section was handed parameters it cannot render.
//!   This is a local defect and surfaces as [`ComposeError::Section`].
//! - [`ComposeError::MissingParameter`]: the caller omitted a required
//!   input; rejected before any rendering starts.

use crate::sections::SectionId;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Fatal assembly failure returned to the caller. No partial document is
/// produced alongside it.
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("missing required parameter `{parameter}`")]
    MissingParameter { parameter: &'static str },

    #[error("section `{section}` failed to render: {source}")]
    Section {
        section: SectionId,
        #[source]
        source: SectionError,
    },
}

/// A section could not render from the parameters it was given.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionError {
    #[error("parameter `{parameter}` was not supplied")]
    MissingParameter { parameter: &'static str },

    #[error("parameter `{parameter}` is invalid: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },
}

/// A registry query did not produce a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("registry unavailable: {0}")]
    Unavailable(String),

    #[error("registry query timed out after {0:?}")]
    TimedOut(Duration),
}

/// Failure loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
