//! Configuration file loading and saving

use super::file::{ConfigFile, CONFIG_FILE_NAME};
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

/// Handles loading and saving configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from .broiler-lca.toml in the given directory
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use broiler_lca::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new("."))?;
    /// println!("Target footprint: {}", config.thresholds.target);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(root: &Path) -> Result<ConfigFile> {
        Self::load_with_fs(root, &RealFileSystem)
    }

    /// Load config with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(root: &Path, fs: &FS) -> Result<ConfigFile> {
        let config_path = root.join(CONFIG_FILE_NAME);

        let contents = match fs.read_to_string(&config_path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(
                    "{} not found, using reference configuration",
                    config_path.display()
                );
                return Ok(ConfigFile::default());
            }
            Err(e) => {
                return Err(e).context("Failed to read .broiler-lca.toml");
            }
        };

        let config: ConfigFile =
            toml_edit::de::from_str(&contents).context("Failed to parse .broiler-lca.toml")?;

        config
            .validate()
            .context("Invalid configuration in .broiler-lca.toml")?;

        debug!(
            "Loaded {} (target {}, baseline {})",
            config_path.display(),
            config.thresholds.target,
            config.thresholds.baseline
        );
        Ok(config)
    }

    /// Save config to .broiler-lca.toml in the given directory
    pub fn save(config: &ConfigFile, root: &Path) -> Result<()> {
        Self::save_with_fs(config, root, &RealFileSystem)
    }

    /// Save config with a custom filesystem implementation
    pub fn save_with_fs<FS: FileSystem>(config: &ConfigFile, root: &Path, fs: &FS) -> Result<()> {
        let config_path = root.join(CONFIG_FILE_NAME);

        let contents =
            toml_edit::ser::to_string_pretty(config).context("Failed to serialize config")?;

        fs.write(&config_path, contents)
            .context("Failed to write .broiler-lca.toml")?;

        Ok(())
    }

    /// Check if config file exists in the directory
    pub fn exists(root: &Path) -> bool {
        RealFileSystem.exists(&root.join(CONFIG_FILE_NAME))
    }
}
