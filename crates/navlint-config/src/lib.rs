//! Configuration management for navlint.
//!
//! Parses `navlint.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `docs.source_dir` (also `~`-expanded)
//! - `docs.manifest`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "navlint.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override manifest filename (relative to the source directory).
    pub manifest: Option<PathBuf>,
    /// Override the orphan check toggle.
    pub orphans: Option<bool>,
    /// Override the title check toggle.
    pub titles: Option<bool>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Documentation configuration (paths are relative strings from TOML).
    #[serde(default)]
    docs: DocsConfigRaw,
    /// Check configuration.
    pub check: CheckConfig,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
    manifest: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Source directory containing documentation files.
    pub source_dir: PathBuf,
    /// Manifest location, relative to `source_dir`.
    pub manifest: PathBuf,
}

impl DocsConfig {
    /// Absolute path to the manifest file.
    #[must_use]
    pub fn manifest_file(&self) -> PathBuf {
        self.source_dir.join(&self.manifest)
    }
}

/// Check configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Warn about docs files not referenced by the manifest.
    pub orphans: bool,
    /// Warn when manifest titles differ from document headings.
    pub titles: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            orphans: true,
            titles: true,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`docs.source_dir`").
        field: String,
        /// Error message.
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `navlint.toml` in current directory and
    /// parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing
    /// CLI arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing
    /// fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings)?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) -> Result<(), ConfigError> {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(manifest) = &settings.manifest {
            require_relative(manifest, "--manifest")?;
            self.docs_resolved.manifest.clone_from(manifest);
        }
        if let Some(orphans) = settings.orphans {
            self.check.orphans = orphans;
        }
        if let Some(titles) = settings.titles {
            self.check.titles = titles;
        }
        Ok(())
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            docs: DocsConfigRaw::default(),
            check: CheckConfig::default(),
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
                manifest: PathBuf::from("SUMMARY.md"),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir)?;
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref source_dir) = self.docs.source_dir {
            self.docs.source_dir = Some(expand::expand_env(source_dir, "docs.source_dir")?);
        }
        if let Some(ref manifest) = self.docs.manifest {
            self.docs.manifest = Some(expand::expand_env(manifest, "docs.manifest")?);
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) -> Result<(), ConfigError> {
        let source_dir = match self.docs.source_dir.as_deref() {
            Some(dir) => {
                let expanded = shellexpand::tilde(dir);
                config_dir.join(expanded.as_ref())
            }
            None => config_dir.join("docs"),
        };

        let manifest = PathBuf::from(self.docs.manifest.as_deref().unwrap_or("SUMMARY.md"));
        require_relative(&manifest, "docs.manifest")?;

        self.docs_resolved = DocsConfig {
            source_dir,
            manifest,
        };

        Ok(())
    }
}

/// Require a path field to be relative.
fn require_relative(path: &Path, field: &str) -> Result<(), ConfigError> {
    if path.is_absolute() {
        return Err(ConfigError::Validation(format!(
            "{field} must be a path relative to the docs directory"
        )));
    }
    Ok(())
}
