use std::path::{Path, PathBuf};
use std::fs;
use anyhow::{Result, Context};
use tracing::{debug, info};

use unistyle_types::Config;
use crate::error::CliError;

pub struct ConfigManager {
    config_dir: PathBuf,
    default_config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_file: Option<PathBuf>) -> Result<Self> {
        let (config_dir, default_config_path) = if let Some(path) = config_file {
            let dir = path.parent()
                .ok_or_else(|| anyhow::anyhow!("Invalid config file path"))?
                .to_path_buf();
            (dir, path)
        } else {
            Self::default_config_paths()?
        };

        Ok(Self {
            config_dir,
            default_config_path,
        })
    }

    fn default_config_paths() -> Result<(PathBuf, PathBuf)> {
        #[cfg(windows)]
        {
            use std::env;
            let app_data = env::var("APPDATA")
                .or_else(|_| env::var("USERPROFILE"))
                .context("Failed to determine user configuration directory")?;

            let config_dir = PathBuf::from(app_data).join("unistyle");
            let default_config = config_dir.join("config.json");

            Ok((config_dir, default_config))
        }

        #[cfg(not(windows))]
        {
            use std::env;
            let home = env::var("HOME")
                .context("Failed to determine home directory")?;

            let config_dir = PathBuf::from(home).join(".config").join("unistyle");
            let default_config = config_dir.join("config.json");

            Ok((config_dir, default_config))
        }
    }

    pub fn load_config(&self, profile: Option<&str>) -> Result<Config> {
        let config_path = match profile {
            Some(name) => self.get_profile_path(name),
            None => self.default_config_path.clone(),
        };

        debug!("Loading configuration from: {}", config_path.display());

        if !config_path.exists() {
            if let Some(name) = profile.filter(|name| *name != "default") {
                return Err(CliError::profile_not_found(name).into());
            }
            // Create default config if it doesn't exist
            let default_config = Config::default();
            self.save_config_to_path(&config_path, &default_config)?;
            info!("Created default configuration at: {}", config_path.display());
            return Ok(default_config);
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config(format!("{}: {}", config_path.display(), e)))?;

        Ok(config)
    }

    pub fn save_config(&self, profile: &str, config: &Config) -> Result<()> {
        let config_path = self.get_profile_path(profile);
        self.save_config_to_path(&config_path, config)
    }

    fn save_config_to_path(&self, path: &Path, config: &Config) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let json = serde_json::to_string_pretty(config)
            .context("Failed to serialize configuration")?;

        fs::write(path, json)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        debug!("Configuration saved to: {}", path.display());
        Ok(())
    }

    pub fn get_profile_path(&self, profile: &str) -> PathBuf {
        if profile == "default" {
            self.default_config_path.clone()
        } else {
            self.config_dir.join(format!("{}.json", profile))
        }
    }

    pub fn list_profiles(&self) -> Result<Vec<String>> {
        let mut profiles = Vec::new();

        // Always include default if it exists
        if self.default_config_path.exists() {
            profiles.push("default".to_string());
        }

        let default_stem = self.default_config_path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(str::to_string);

        // Scan for other profile files
        if self.config_dir.exists() {
            let entries = fs::read_dir(&self.config_dir)
                .context("Failed to read configuration directory")?;

            for entry in entries {
                let entry = entry.context("Failed to read directory entry")?;
                let path = entry.path();

                if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
                    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                        if Some(stem) != default_stem.as_deref() {
                            profiles.push(stem.to_string());
                        }
                    }
                }
            }
        }

        profiles.sort();
        Ok(profiles)
    }

    pub fn profile_exists(&self, profile: &str) -> bool {
        self.get_profile_path(profile).exists()
    }

    pub fn delete_profile(&self, profile: &str) -> Result<()> {
        if profile == "default" {
            anyhow::bail!("Cannot delete default profile");
        }

        let path = self.get_profile_path(profile);

        if !path.exists() {
            return Err(CliError::profile_not_found(profile).into());
        }

        fs::remove_file(&path)
            .with_context(|| format!("Failed to delete profile file: {}", path.display()))?;

        info!("Deleted profile: {}", profile);
        Ok(())
    }

    pub fn get_config_dir(&self) -> &Path {
        &self.config_dir
    }
}
