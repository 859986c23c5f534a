use crate::error::{Result, UrlBuilderError};
use std::env;

/// Base url the binary starts building from
pub const BASE_URL_VAR: &str = "URL_BUILDER_BASE";

const REQUIRED_ENV_VARS: &[&str] = &[BASE_URL_VAR];

/// Checks up front that the binary has everything it needs, so a missing base
/// url is reported once with all absent names instead of on first use.
///
/// # Errors
/// `UrlBuilderError::MissingEnvVar` listing every unset variable, comma separated.
pub fn validate_env_vars() -> Result<()> {
    let missing_vars: Vec<&str> = REQUIRED_ENV_VARS
        .iter()
        .copied()
        .filter(|var_name| env::var(var_name).is_err())
        .collect();

    if !missing_vars.is_empty() {
        return Err(UrlBuilderError::MissingEnvVar(missing_vars.join(", ")));
    }

    Ok(())
}

/// Reads `var_name`, failing with `UrlBuilderError::MissingEnvVar` when it is
/// unset or not unicode.
pub fn get_required_env_var(var_name: &str) -> Result<String> {
    env::var(var_name).map_err(|_| UrlBuilderError::MissingEnvVar(var_name.to_string()))
}
