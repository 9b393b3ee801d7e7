//! `navlint check` command implementation.

use clap::Args;
use navlint_check::{CheckOptions, check_manifest};
use navlint_config::CliSettings;
use navlint_scan::DocTree;

use crate::error::CliError;
use crate::output::Output;

use super::{CommonArgs, OutputFormat, load_manifest};

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Skip the orphaned-file check.
    #[arg(long)]
    no_orphans: bool,

    /// Skip the title-mismatch check.
    #[arg(long)]
    no_titles: bool,

    /// Enable verbose output (show scan logs).
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, parsing, or scanning fails, or if
    /// any error-severity diagnostic is found.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let settings = CliSettings {
            orphans: self.no_orphans.then_some(false),
            titles: self.no_titles.then_some(false),
            ..CliSettings::default()
        };
        let config = self.common.load_config(settings)?;
        let manifest_file = config.docs_resolved.manifest_file();

        tracing::info!(manifest = %manifest_file.display(), "Checking manifest");

        let manifest = load_manifest(&config)?;
        let tree = DocTree::scan(&config.docs_resolved.source_dir)?;

        let options = CheckOptions {
            orphans: config.check.orphans,
            titles: config.check.titles,
            manifest_path: Some(config.docs_resolved.manifest.clone()),
        };
        let diagnostics = check_manifest(&manifest, &tree, &options);

        let errors = diagnostics.iter().filter(|d| d.is_error()).count();
        let warnings = diagnostics.len() - errors;

        match self.format {
            OutputFormat::Json => {
                output.data(&serde_json::to_string_pretty(&diagnostics)?);
            }
            OutputFormat::Text => {
                for diagnostic in &diagnostics {
                    if diagnostic.is_error() {
                        output.error(&diagnostic.to_string());
                    } else {
                        output.warning(&diagnostic.to_string());
                    }
                }
                if errors == 0 {
                    if warnings > 0 {
                        output.info(&format!("{warnings} warning(s)"));
                    }
                    output.success(&format!(
                        "OK: {} entries checked against {} files",
                        manifest.len(),
                        tree.len()
                    ));
                }
            }
        }

        if errors > 0 {
            return Err(CliError::Validation(format!(
                "{errors} error(s) in {}",
                manifest_file.display()
            )));
        }

        Ok(())
    }
}
