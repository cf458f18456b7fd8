use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use site_core::SiteConfig;
use site_logging::{site_debug, site_info};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Load site settings from a YAML file. A missing file yields the defaults.
///
/// A blank `site_name` fails to parse, like any other invalid value.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigFileError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            site_info!("No config at {:?}, using defaults", path);
            return Ok(SiteConfig::default());
        }
        Err(source) => {
            return Err(ConfigFileError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config = if content.trim().is_empty() {
        SiteConfig::default()
    } else {
        serde_yaml::from_str::<SiteConfig>(&content).map_err(|source| ConfigFileError::Yaml {
            path: path.to_path_buf(),
            source,
        })?
    };

    site_debug!("Loaded config from {:?}: {:?}", path, config);
    Ok(config)
}
