//! `navlint tree` command implementation.

use clap::Args;

use crate::error::CliError;
use crate::output::Output;

use super::{CommonArgs, OutputFormat, load_manifest};

/// Arguments for the tree command.
#[derive(Args)]
pub(crate) struct TreeArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl TreeArgs {
    /// Execute the tree command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or the
    /// manifest cannot be read or parsed.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.common.load_config(navlint_config::CliSettings::default())?;
        let manifest = load_manifest(&config)?;

        match self.format {
            OutputFormat::Json => {
                output.data(&serde_json::to_string_pretty(&manifest.nav_items())?);
            }
            OutputFormat::Text => {
                let mut rendered = String::new();
                for (depth, _, entry) in manifest.walk() {
                    rendered.push_str(&"  ".repeat(depth));
                    rendered.push_str(&entry.title);
                    if let Some(target) = &entry.target {
                        rendered.push_str(" (");
                        rendered.push_str(target);
                        rendered.push(')');
                    }
                    rendered.push('\n');
                }
                output.data(rendered.trim_end());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_tree_renders_manifest() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("index.md"), "# Home").unwrap();
        fs::write(
            temp_dir.path().join("SUMMARY.md"),
            "- [Home](index.md)\n    - [Nested](index.md)\n",
        )
        .unwrap();

        let args = TreeArgs {
            common: CommonArgs {
                config: None,
                source_dir: Some(temp_dir.path().to_path_buf()),
                manifest: Some(PathBuf::from("SUMMARY.md")),
            },
            format: OutputFormat::Text,
        };

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_tree_missing_manifest_fails() {
        let temp_dir = tempfile::tempdir().unwrap();

        let args = TreeArgs {
            common: CommonArgs {
                config: None,
                source_dir: Some(temp_dir.path().to_path_buf()),
                manifest: Some(PathBuf::from("SUMMARY.md")),
            },
            format: OutputFormat::Json,
        };

        assert!(matches!(args.execute(), Err(CliError::Validation(_))));
    }
}
