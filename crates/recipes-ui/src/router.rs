//! Router construction settings.
//!
//! # Design
//! - One `RouterConfig` is built at boot and handed to the root component as props.
//! - Settings come from the mount element's `data-history` and `data-basename`
//!   attributes; anything unparseable falls back to the defaults.

use crate::routes::Route;
use thiserror::Error;

/// How the router reads and writes browser history.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HistoryStrategy {
    /// Native history API (`pushState`), clean paths.
    #[default]
    Browser,
    /// Location fragment (`#/path`), for hosts without SPA fallback.
    Hash,
}

impl HistoryStrategy {
    /// Attribute value for the strategy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Hash => "hash",
        }
    }

    /// Parse a `data-history` attribute value.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnknownHistory`] when the value names no strategy.
    pub fn from_attr(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "browser" | "html5" => Ok(Self::Browser),
            "hash" => Ok(Self::Hash),
            other => Err(ConfigError::UnknownHistory(other.to_string())),
        }
    }
}

/// Failures while reading router settings from the host page.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `data-history` named an unsupported strategy.
    #[error("unknown history strategy `{0}`")]
    UnknownHistory(String),
    /// `data-basename` contained whitespace.
    #[error("invalid basename `{0}`")]
    InvalidBasename(String),
}

/// Settings the router is constructed with.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouterConfig {
    /// History strategy.
    pub history: HistoryStrategy,
    /// Optional path prefix the app is served under (e.g. `/app`).
    pub basename: Option<String>,
}

impl RouterConfig {
    /// Build a config from raw mount attributes.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when either attribute is malformed.
    pub fn from_attrs(history: Option<&str>, basename: Option<&str>) -> Result<Self, ConfigError> {
        let history = history
            .map(HistoryStrategy::from_attr)
            .transpose()?
            .unwrap_or_default();
        let basename = match basename {
            Some(raw) => normalize_basename(raw)?,
            None => None,
        };
        Ok(Self { history, basename })
    }

    /// Address the mounted router shows for `route`.
    ///
    /// Browser history keeps the path in the URL path; hash history moves it
    /// behind `#`.
    #[must_use]
    pub fn href(&self, route: Route) -> String {
        let prefix = self.basename.as_deref().unwrap_or_default();
        let path = format!("{prefix}{}", route.path());
        match self.history {
            HistoryStrategy::Browser => path,
            HistoryStrategy::Hash => format!("#{path}"),
        }
    }
}

/// Normalise a basename to `/segment[/segment]` form, or `None` for the root.
///
/// # Errors
/// Returns [`ConfigError::InvalidBasename`] when the value contains whitespace.
pub fn normalize_basename(raw: &str) -> Result<Option<String>, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidBasename(trimmed.to_string()));
    }
    let inner = trimmed.trim_matches('/');
    if inner.is_empty() {
        return Ok(None);
    }
    Ok(Some(format!("/{inner}")))
}
