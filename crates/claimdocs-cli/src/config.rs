use std::path::{Path, PathBuf};
use std::time::Duration;

use claimdocs_export::generator::{DEFAULT_DATE_FORMAT, DEFAULT_DOWNLOAD_PAUSE, GeneratorOptions};
use claimdocs_export::styles::DocumentStyles;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    pub config_version: u32,
    /// Where downloads land. `None` = current directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    pub download_pause_ms: u64,
    pub date_format: String,
    pub styles: DocumentStyles,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            output_dir: None,
            download_pause_ms: DEFAULT_DOWNLOAD_PAUSE.as_millis() as u64,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            styles: DocumentStyles::default(),
        }
    }
}

impl CliConfig {
    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            styles: self.styles.clone(),
            date_format: self.date_format.clone(),
            download_pause: Duration::from_millis(self.download_pause_ms),
        }
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.claimdocs.cli"))
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the config at `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> eyre::Result<CliConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(CliConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    // Versions too large for u32 count as newer than anything we support.
    let on_disk_version = match json.get("config_version").and_then(|v| v.as_u64()) {
        Some(v) => u32::try_from(v).unwrap_or(u32::MAX),
        None => 0,
    };

    let migrated = migrate(json, on_disk_version)?;
    let config: CliConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update claimdocs."
        ));
    }

    // v0 → v1: stamp the version; every field already has a default.
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1");
    }

    Ok(json)
}

pub fn save_config(config: &CliConfig, path: &Path) -> eyre::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
