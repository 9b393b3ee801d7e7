//! Environment variable expansion for configuration strings.

use std::borrow::Cow;
use std::env;

use crate::ConfigError;

/// Expand `${VAR}` references in a configuration string.
///
/// `${VAR:-default}` falls back to `default` when `VAR` is unset.
///
/// # Errors
///
/// Returns [`ConfigError::EnvVar`] if a referenced variable is unset and no
/// default is given, naming the config `field` for context.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    let context = |name: &str| -> Result<Option<Cow<'static, str>>, env::VarError> {
        // Braced content is passed through verbatim, which lets us
        // implement the ${VAR:-default} fallback form here.
        let (name, default) = match name.split_once(":-") {
            Some((name, default)) => (name, Some(default)),
            None => (name, None),
        };
        match env::var(name) {
            Ok(value) => Ok(Some(Cow::Owned(value))),
            Err(env::VarError::NotPresent) => match default {
                Some(default) => Ok(Some(Cow::Owned(default.to_owned()))),
                None => Err(env::VarError::NotPresent),
            },
            Err(e) => Err(e),
        }
    };

    shellexpand::env_with_context(value, context)
        .map(Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} could not be expanded: {}", e.var_name, e.cause),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_string_unchanged() {
        let result = expand_env("docs/source", "docs.source_dir").unwrap();
        assert_eq!(result, "docs/source");
    }

    #[test]
    fn test_expands_set_variable() {
        // SAFETY: test-local variable, no concurrent reader cares about it
        unsafe { env::set_var("NAVLINT_TEST_EXPAND_SET", "from-env") };

        let result = expand_env("${NAVLINT_TEST_EXPAND_SET}/docs", "docs.source_dir").unwrap();

        assert_eq!(result, "from-env/docs");
    }

    #[test]
    fn test_default_used_when_unset() {
        let result = expand_env(
            "${NAVLINT_TEST_EXPAND_UNSET:-fallback}/docs",
            "docs.source_dir",
        )
        .unwrap();

        assert_eq!(result, "fallback/docs");
    }

    #[test]
    fn test_set_variable_wins_over_default() {
        // SAFETY: test-local variable, no concurrent reader cares about it
        unsafe { env::set_var("NAVLINT_TEST_EXPAND_DEFAULTED", "from-env") };

        let result = expand_env(
            "${NAVLINT_TEST_EXPAND_DEFAULTED:-fallback}",
            "docs.source_dir",
        )
        .unwrap();

        assert_eq!(result, "from-env");
    }

    #[test]
    fn test_unset_variable_is_error() {
        let err = expand_env("${NAVLINT_TEST_NEVER_SET}", "docs.source_dir").unwrap_err();

        match err {
            ConfigError::EnvVar { field, .. } => assert_eq!(field, "docs.source_dir"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
