//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod fmt;
pub(crate) mod tree;

use std::path::{Path, PathBuf};

pub(crate) use check::CheckArgs;
pub(crate) use fmt::FmtArgs;
pub(crate) use tree::TreeArgs;

use navlint_config::{CliSettings, Config};
use navlint_manifest::Manifest;

use crate::error::CliError;

/// Config-related arguments shared by all commands.
#[derive(clap::Args)]
pub(crate) struct CommonArgs {
    /// Path to configuration file (default: auto-discover navlint.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Manifest file, relative to the source directory (overrides config).
    #[arg(short, long)]
    manifest: Option<PathBuf>,
}

impl CommonArgs {
    /// Load configuration with these arguments applied.
    fn load_config(&self, settings: CliSettings) -> Result<Config, CliError> {
        let settings = CliSettings {
            source_dir: self.source_dir.clone(),
            manifest: self.manifest.clone(),
            ..settings
        };
        Ok(Config::load(self.config.as_deref(), Some(&settings))?)
    }
}

/// Read and parse the manifest file named by the configuration.
fn load_manifest(config: &Config) -> Result<Manifest, CliError> {
    let manifest_file = config.docs_resolved.manifest_file();
    let text = read_manifest_text(&manifest_file)?;
    Ok(Manifest::parse(&text)?)
}

/// Read the manifest file, mapping a missing file to a clear message.
fn read_manifest_text(manifest_file: &Path) -> Result<String, CliError> {
    if !manifest_file.is_file() {
        return Err(CliError::Validation(format!(
            "Manifest not found: {}",
            manifest_file.display()
        )));
    }
    Ok(std::fs::read_to_string(manifest_file)?)
}

/// Output format for machine-readable commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text.
    Text,
    /// JSON on stdout.
    Json,
}
