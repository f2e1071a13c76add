//! Print the instruction document for a working directory.
//!
//! Capability settings come from an optional TOML config file, overridden by
//! command-line flags. Connected servers are read from a JSON registry
//! snapshot when one is given. Logs go to stderr, filtered by `RUST_LOG`
//! (default `briefing=info`).
//!
//! # Examples
//!
//! ```sh
//! # Defaults: no automation, full registry integration, no snapshot.
//! briefing --cwd /path/to/project
//!
//! # Browser automation at 1280x800, servers from a snapshot file.
//! briefing --automation --viewport 1280x800 --registry-snapshot registry.json
//!
//! # Everything from a config file, written to disk.
//! briefing --config briefing.toml --output prompt.txt
//! ```

use std::path::PathBuf;
use std::time::Duration;

use briefing::capability::CapabilityOverrides;
use briefing::prelude::*;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Assemble the system instruction document for an LLM coding agent.
#[derive(Parser)]
#[command(name = "briefing", version)]
struct Cli {
    /// Working directory the agent operates in. Defaults to the current one.
    #[arg(long)]
    cwd: Option<PathBuf>,

    /// Advertise the browser automation tool. `--automation false` turns it
    /// off even when the config file enables it.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    automation: Option<bool>,

    /// Browser viewport as WIDTHxHEIGHT.
    #[arg(long)]
    viewport: Option<String>,

    /// Registry integration: off, server-use-only, or full.
    #[arg(long)]
    registry: Option<String>,

    /// JSON file describing connected servers and registry paths.
    #[arg(long)]
    registry_snapshot: Option<PathBuf>,

    /// Per-query registry timeout in milliseconds.
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the document here instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> CapabilityOverrides {
        CapabilityOverrides {
            automation: self.automation,
            viewport: self.viewport.clone(),
            registry: self.registry.clone(),
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("briefing=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let file_config = match &cli.config {
        Some(path) => match BriefingConfig::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        None => BriefingConfig::default(),
    };

    let flags = file_config.capabilities.clone().overlay(cli.overrides()).resolve();

    let mut composer_config = file_config.composer_config();
    if let Some(ms) = cli.timeout_ms {
        composer_config = composer_config.with_registry_timeout(Duration::from_millis(ms));
    }

    let snapshot = cli.registry_snapshot.clone().or(file_config.registry.snapshot);
    let registry: Box<dyn RegistryClient> = match snapshot {
        Some(path) => {
            info!(path = %path.display(), "Reading registry snapshot");
            Box::new(SnapshotFileRegistry::new(path))
        }
        None => Box::new(NoRegistry),
    };

    let cwd = match cli.cwd {
        Some(cwd) => cwd,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("Error: cannot determine current directory: {e}");
                std::process::exit(1);
            }
        },
    };
    let cwd = std::fs::canonicalize(&cwd).unwrap_or(cwd);

    let composer = Composer::new().with_config(composer_config);
    let document = match composer.assemble(&cwd, &flags, registry.as_ref()).await {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = tokio::fs::write(path, &document.text).await {
                eprintln!("Error: failed to write {}: {e}", path.display());
                std::process::exit(1);
            }
            info!(path = %path.display(), "Wrote instruction document");
        }
        None => println!("{}", document.text),
    }
}
