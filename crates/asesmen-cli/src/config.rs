use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Current config version. Version 1 is the first shipped shape; a bump
/// means older files need a migration step in [`load_config`].
const CURRENT_VERSION: u32 = 1;

const DEFAULT_BAR_WIDTH: u16 = 30;
const DEFAULT_LOG_FILTER: &str = "warn";

/// Terminal preferences. Holds no assessment data; answers are never
/// written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Schema version. Missing means the current version.
    #[serde(default = "default_config_version")]
    pub config_version: u32,
    /// Width in characters of the result and progress bars.
    #[serde(default = "default_bar_width")]
    pub bar_width: u16,
    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    pub created_at: jiff::Timestamp,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            bar_width: DEFAULT_BAR_WIDTH,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            created_at: jiff::Timestamp::now(),
        }
    }
}

fn default_config_version() -> u32 {
    CURRENT_VERSION
}

fn default_bar_width() -> u16 {
    DEFAULT_BAR_WIDTH
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("asesmen"))
}

/// Default location of the config file.
pub fn default_config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the config at `path`, falling back to defaults when the file does
/// not exist.
pub fn load_or_default(path: &Path) -> eyre::Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    load_config(path)
}

pub fn load_config(path: &Path) -> eyre::Result<AppConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so the version can be checked before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(u64::from(CURRENT_VERSION));
    if on_disk_version > u64::from(CURRENT_VERSION) {
        return Err(eyre::eyre!(
            "config_version {on_disk_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update asesmen."
        ));
    }

    let config: AppConfig = serde_json::from_value(json)?;
    Ok(config)
}

pub fn save_config(path: &Path, config: &AppConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
