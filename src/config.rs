//! Viewer configuration baked in at build time.
//!
//! The viewer is a static bundle, so settings are read from the build
//! environment with `option_env!` rather than at runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// What to do with a gallery response that arrives after a newer load was
/// started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StaleResponsePolicy {
    /// Apply every response; the last one to arrive wins.
    #[default]
    Apply,
    /// Drop responses that belong to a superseded load.
    Discard,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown GALLERY_STALE_RESPONSES value '{0}' (expected 'apply' or 'discard')")]
    StaleResponses(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the storage endpoint; empty means same origin.
    pub server_url: String,
    pub stale_responses: StaleResponsePolicy,
}

impl AppConfig {
    /// Build typed config from the build environment.
    ///
    /// Optional:
    /// - `GALLERY_SERVER_URL`: storage base URL (default: same origin)
    /// - `GALLERY_STALE_RESPONSES`: `apply` (default) or `discard`
    ///
    /// # Errors
    ///
    /// Returns an error if `GALLERY_STALE_RESPONSES` has an unknown value.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("GALLERY_SERVER_URL"), option_env!("GALLERY_STALE_RESPONSES"))
    }

    /// Build typed config from raw setting values.
    ///
    /// # Errors
    ///
    /// Returns an error if `stale_responses` is not a known policy name.
    pub fn from_values(server_url: Option<&str>, stale_responses: Option<&str>) -> Result<Self, ConfigError> {
        let server_url = normalize_server_url(server_url.unwrap_or_default());
        let stale_responses = parse_stale_responses(stale_responses)?;
        Ok(Self { server_url, stale_responses })
    }
}

fn normalize_server_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

fn parse_stale_responses(raw: Option<&str>) -> Result<StaleResponsePolicy, ConfigError> {
    match raw.map(str::trim).unwrap_or("apply") {
        "" | "apply" => Ok(StaleResponsePolicy::Apply),
        "discard" => Ok(StaleResponsePolicy::Discard),
        other => Err(ConfigError::StaleResponses(other.to_owned())),
    }
}
