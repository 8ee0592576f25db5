use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use physio_chart::ChartStyle;
use physio_core::storage_keys;

/// Current config version. Files written by a newer build are rejected.
const CURRENT_VERSION: u32 = 1;

const APP_DIR: &str = "physio-doc-pilot";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysioConfig {
    /// Schema version of the file on disk.
    #[serde(default = "current_version")]
    pub config_version: u32,
    /// Key the patient snapshot is stored under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// BCP 47 tag handed to the speech recognizer on every start.
    #[serde(default = "default_speech_language")]
    pub speech_language: String,
    #[serde(default)]
    pub chart: ChartStyle,
}

impl Default for PhysioConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            storage_key: default_storage_key(),
            speech_language: default_speech_language(),
            chart: ChartStyle::default(),
        }
    }
}

fn current_version() -> u32 {
    CURRENT_VERSION
}

fn default_storage_key() -> String {
    storage_keys::SNAPSHOT.to_string()
}

fn default_speech_language() -> String {
    "de-DE".to_string()
}

pub fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join(APP_DIR))
}

/// Where the local snapshot store keeps its files.
pub fn data_dir() -> eyre::Result<PathBuf> {
    let base =
        dirs::data_local_dir().ok_or_else(|| eyre::eyre!("no local data directory found"))?;
    Ok(base.join(APP_DIR))
}

/// Load the config in `dir`, writing the defaults there first if no config
/// has been saved yet.
pub fn load_or_init_config(dir: &Path) -> eyre::Result<PhysioConfig> {
    if dir.join("config.json").exists() {
        return load_config_from(dir);
    }
    let config = PhysioConfig::default();
    save_config_to(dir, &config)?;
    Ok(config)
}

pub fn load_config_from(dir: &Path) -> eyre::Result<PhysioConfig> {
    let path = dir.join("config.json");
    if !path.exists() {
        return Ok(PhysioConfig::default());
    }

    let contents = std::fs::read_to_string(&path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
    let config: PhysioConfig = serde_json::from_str(&contents)?;

    if config.config_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {} is newer than this build supports ({CURRENT_VERSION})",
            config.config_version
        ));
    }
    Ok(config)
}

pub fn save_config_to(dir: &Path, config: &PhysioConfig) -> eyre::Result<()> {
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join("config.json");
    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
