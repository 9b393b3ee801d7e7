//! `navlint fmt` command implementation.

use std::fs;

use clap::Args;
use navlint_manifest::Manifest;

use crate::error::CliError;
use crate::output::Output;

use super::{CommonArgs, read_manifest_text};

/// Arguments for the fmt command.
#[derive(Args)]
pub(crate) struct FmtArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Rewrite the manifest in place instead of printing it.
    #[arg(long, conflicts_with = "check")]
    write: bool,

    /// Exit with an error if the manifest is not already canonical.
    #[arg(long)]
    check: bool,
}

impl FmtArgs {
    /// Execute the fmt command.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read or parsed, if the
    /// rewrite fails, or in check mode if the manifest is not canonical.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.common.load_config(navlint_config::CliSettings::default())?;
        let manifest_file = config.docs_resolved.manifest_file();

        let text = read_manifest_text(&manifest_file)?;
        let manifest = Manifest::parse(&text)?;
        let canonical = manifest.render();

        if self.check {
            if text == canonical {
                output.success(&format!("{} is canonical", manifest_file.display()));
                return Ok(());
            }
            return Err(CliError::Validation(format!(
                "{} is not canonically formatted",
                manifest_file.display()
            )));
        }

        if self.write {
            if text == canonical {
                output.info(&format!("{} unchanged", manifest_file.display()));
            } else {
                fs::write(&manifest_file, &canonical)?;
                output.success(&format!("Rewrote {}", manifest_file.display()));
            }
            return Ok(());
        }

        output.data(canonical.trim_end());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use super::*;

    fn fmt_args(root: &Path) -> FmtArgs {
        FmtArgs {
            common: CommonArgs {
                config: None,
                source_dir: Some(root.to_path_buf()),
                manifest: Some(PathBuf::from("SUMMARY.md")),
            },
            write: false,
            check: false,
        }
    }

    #[test]
    fn test_fmt_check_accepts_canonical() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join("SUMMARY.md"),
            "- [Home](index.md)\n    - [Nested](index.md)\n",
        )
        .unwrap();

        let mut args = fmt_args(temp_dir.path());
        args.check = true;

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_fmt_check_rejects_drift() {
        let temp_dir = tempfile::tempdir().unwrap();
        // Two-space indent and star bullets parse fine but are not canonical.
        fs::write(
            temp_dir.path().join("SUMMARY.md"),
            "* [Home](index.md)\n  * [Nested](index.md)\n",
        )
        .unwrap();

        let mut args = fmt_args(temp_dir.path());
        args.check = true;

        assert!(matches!(args.execute(), Err(CliError::Validation(_))));
    }

    #[test]
    fn test_fmt_write_normalizes_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let manifest = temp_dir.path().join("SUMMARY.md");
        fs::write(&manifest, "* [Home](index.md)\n  * [Nested](index.md)\n").unwrap();

        let mut args = fmt_args(temp_dir.path());
        args.write = true;
        args.execute().unwrap();

        let rewritten = fs::read_to_string(&manifest).unwrap();
        assert_eq!(rewritten, "- [Home](index.md)\n    - [Nested](index.md)\n");
    }

    #[test]
    fn test_fmt_write_leaves_canonical_file_alone() {
        let temp_dir = tempfile::tempdir().unwrap();
        let manifest = temp_dir.path().join("SUMMARY.md");
        let canonical = "- [Home](index.md)\n";
        fs::write(&manifest, canonical).unwrap();

        let mut args = fmt_args(temp_dir.path());
        args.write = true;
        args.execute().unwrap();

        assert_eq!(fs::read_to_string(&manifest).unwrap(), canonical);
    }
}
