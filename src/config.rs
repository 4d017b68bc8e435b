use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::warn;

pub const DEFAULT_CONFIG_PATH: &str = "config/playerinv.toml";
const DEFAULT_FIXTURE_PATH: &str = "config/inventories.toml";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HostConfig {
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// TOML inventory fixture standing in for the live server.
    pub inventory_fixture: PathBuf,
    /// Player to resolve for when `--player` is not given. Unset means no
    /// player, which resolves every token to `null`.
    pub default_player: Option<String>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            inventory_fixture: PathBuf::from(DEFAULT_FIXTURE_PATH),
            default_player: None,
        }
    }
}

impl HostConfig {
    /// Load configuration from an explicit path, falling back to defaults on errors.
    ///
    /// Runs before the subscriber is installed, so failures are returned as
    /// a message for the caller to log once logging is up.
    pub fn load_from_path(path: &Path) -> (Self, Option<String>) {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<HostConfig>(&contents) {
                Ok(cfg) => (cfg, None),
                Err(err) => (
                    HostConfig::default(),
                    Some(format!(
                        "Failed to parse {}: {err}. Using defaults",
                        path.display()
                    )),
                ),
            },
            Err(err) => {
                let quiet = path == Path::new(DEFAULT_CONFIG_PATH)
                    && err.kind() == std::io::ErrorKind::NotFound;
                let message = (!quiet)
                    .then(|| format!("Failed to read {}: {err}. Using defaults", path.display()));
                (HostConfig::default(), message)
            }
        }
    }

    /// Save configuration to an explicit path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        Ok(())
    }
}

/// Log a deferred config-loading problem.
pub fn report(message: Option<String>) {
    if let Some(message) = message {
        warn!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "playerinv-config-{name}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = scratch_dir("missing");
        let (cfg, message) = HostConfig::load_from_path(&dir.join("nope.toml"));
        assert_eq!(cfg, HostConfig::default());
        assert!(message.unwrap().contains("Failed to read"));
    }

    #[test]
    fn partial_file_keeps_defaults_for_the_rest() {
        let dir = scratch_dir("partial");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("playerinv.toml");
        fs::write(&path, "default_player = \"Steve\"\n").unwrap();

        let (cfg, message) = HostConfig::load_from_path(&path);
        assert!(message.is_none());
        assert_eq!(cfg.default_player.as_deref(), Some("Steve"));
        assert_eq!(cfg.log_filter, "warn");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn malformed_file_uses_defaults() {
        let dir = scratch_dir("malformed");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("playerinv.toml");
        fs::write(&path, "log_filter = [").unwrap();

        let (cfg, message) = HostConfig::load_from_path(&path);
        assert_eq!(cfg, HostConfig::default());
        assert!(message.unwrap().contains("Failed to parse"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn save_then_load() {
        let dir = scratch_dir("save");
        let path = dir.join("nested").join("playerinv.toml");
        let cfg = HostConfig {
            log_filter: "playerinv=debug".to_string(),
            inventory_fixture: PathBuf::from("fixtures/server.toml"),
            default_player: Some("Alex".to_string()),
        };

        cfg.save_to_path(&path).unwrap();
        let (loaded, message) = HostConfig::load_from_path(&path);
        assert!(message.is_none());
        assert_eq!(loaded, cfg);
        let _ = fs::remove_dir_all(&dir);
    }
}
