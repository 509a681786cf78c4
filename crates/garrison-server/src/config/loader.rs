//! Configuration loading.
//!
//! Three layered sources, later ones winning: the embedded defaults for
//! the `server`, `audit`, and `logging` sections, an optional TOML file,
//! and `GARRISON`-prefixed environment variables (`GARRISON_SERVER__PORT`
//! and the like, with `__` separating section from key).

use super::types::ServerConfig;
use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use std::path::{Path, PathBuf};
use tracing::info;

const DEFAULTS: &str = include_str!("defaults.toml");
const ENV_PREFIX: &str = "GARRISON";

/// Load configuration, layering an optional file over the embedded
/// defaults and the environment over both. A `path` that does not exist
/// is skipped, not an error.
pub fn load_config(path: Option<&Path>) -> Result<ServerConfig> {
    let mut builder = Config::builder().add_source(File::from_str(DEFAULTS, FileFormat::Toml));

    if let Some(path) = path {
        if path.exists() {
            info!(path = %path.display(), "Loading config file");
            builder = builder.add_source(File::from(path));
        }
    }

    builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("Failed to assemble configuration sources")?
        .try_deserialize()
        .context("Configuration did not match the expected shape")
}

/// Load configuration, taking the file path from `CONFIG_PATH` if set.
pub fn load_from_env() -> Result<ServerConfig> {
    let path = std::env::var_os("CONFIG_PATH").map(PathBuf::from);
    load_config(path.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_load() {
        let config = load_config(None).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.audit.api_prefix, "/api/");
        assert!(config.audit.database_url.is_none());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = load_config(Some(Path::new("/nonexistent/garrison.toml"))).unwrap();
        assert_eq!(config.server.request_timeout_secs, 30);
    }
}
