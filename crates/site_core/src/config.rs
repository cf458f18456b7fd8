use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_SITE_NAME: &str = "txt.jarred.eu";
pub const DEFAULT_TITLE_SEPARATOR: &str = " | ";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("site name must not be empty")]
    EmptySiteName,
}

/// Site-wide settings handed to the helpers explicitly.
///
/// Titles fall back to the site name, so every constructor (including
/// deserialization) rejects a blank one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSiteConfig")]
pub struct SiteConfig {
    site_name: String,
    title_separator: String,
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawSiteConfig {
    site_name: String,
    title_separator: String,
}

impl Default for RawSiteConfig {
    fn default() -> Self {
        Self {
            site_name: DEFAULT_SITE_NAME.to_string(),
            title_separator: DEFAULT_TITLE_SEPARATOR.to_string(),
        }
    }
}

impl TryFrom<RawSiteConfig> for SiteConfig {
    type Error = ConfigError;

    fn try_from(raw: RawSiteConfig) -> Result<Self, Self::Error> {
        Ok(Self::new(raw.site_name)?.with_title_separator(raw.title_separator))
    }
}

impl SiteConfig {
    pub fn new(site_name: impl Into<String>) -> Result<Self, ConfigError> {
        let site_name = site_name.into();
        if site_name.trim().is_empty() {
            return Err(ConfigError::EmptySiteName);
        }
        Ok(Self {
            site_name,
            title_separator: DEFAULT_TITLE_SEPARATOR.to_string(),
        })
    }

    pub fn with_title_separator(mut self, separator: impl Into<String>) -> Self {
        self.title_separator = separator.into();
        self
    }

    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    pub fn title_separator(&self) -> &str {
        &self.title_separator
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: DEFAULT_SITE_NAME.to_string(),
            title_separator: DEFAULT_TITLE_SEPARATOR.to_string(),
        }
    }
}
