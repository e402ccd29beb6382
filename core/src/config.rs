//! User settings, stored as `config.json` next to the data file.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::parser::DEFAULT_DUE_IN_DAYS;
use crate::repository::file::DEFAULT_FILE_NAME;

pub const CONFIG_FILE_NAME: &str = "config.json";
const DEFAULT_DIR_NAME: &str = ".duetrack";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// File name of the tracker data, relative to the data directory.
    pub tracker_file: String,
    /// Window used by `dueIn` when neither `day/` nor `week/` is given.
    pub default_due_in_days: u32,
    /// Fill a fresh installation with sample tasks.
    pub seed_sample_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tracker_file: DEFAULT_FILE_NAME.to_string(),
            default_due_in_days: DEFAULT_DUE_IN_DAYS,
            seed_sample_data: true,
        }
    }
}

impl Config {
    /// Reads `config.json` from `data_dir`, writing the defaults first when
    /// the file does not exist yet. Keys missing from the file take their
    /// default values.
    pub fn load_or_create(data_dir: &Path) -> Result<Config> {
        let path = data_dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            let config = Config::default();
            config.save(data_dir)?;
            info!(path = %path.display(), "Wrote default configuration");
            return Ok(config);
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        Ok(config)
    }

    pub fn save(&self, data_dir: &Path) -> Result<()> {
        fs::create_dir_all(data_dir)?;
        let file = File::create(data_dir.join(CONFIG_FILE_NAME))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    pub fn tracker_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.tracker_file)
    }
}

/// `override_dir` when given, otherwise `~/.duetrack`.
pub fn data_dir(override_dir: Option<PathBuf>) -> Result<PathBuf> {
    match override_dir {
        Some(dir) => Ok(dir),
        None => {
            let home_dir =
                dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
            Ok(home_dir.join(DEFAULT_DIR_NAME))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_config_writes_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), r#"{"default_due_in_days": 3}"#).unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config.default_due_in_days, 3);
        assert_eq!(config.tracker_file, "tracker.json");
        assert!(config.seed_sample_data);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "{").unwrap();
        assert!(Config::load_or_create(dir.path()).is_err());
    }

    #[test]
    fn test_tracker_path_and_data_dir_override() {
        let dir = tempdir().unwrap();
        let data = data_dir(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(data, dir.path());
        assert_eq!(
            Config::default().tracker_path(&data),
            dir.path().join("tracker.json")
        );
    }
}
