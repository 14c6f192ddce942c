use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for autochangelog, loadable from `autochangelog.toml`.
///
/// Every field has a default so a missing or partial file always yields
/// a usable configuration. CLI flags override file values.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub limits: LimitsConfig,

    #[serde(default)]
    pub groups: GroupsConfig,
}

fn default_output_file() -> String {
    "CHANGELOG.md".to_string()
}

fn default_attribution() -> bool {
    true
}

/// Output document settings.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "default_output_file")]
    pub file: String,

    #[serde(default = "default_attribution")]
    pub attribution: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            file: default_output_file(),
            attribution: default_attribution(),
        }
    }
}

/// Size limits applied to the generated document.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct LimitsConfig {
    #[serde(default)]
    pub commits: Option<usize>,

    #[serde(default)]
    pub versions: Option<usize>,
}

/// Grouped-mode settings.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct GroupsConfig {
    /// Render commits matching no group under an "Others" heading
    /// instead of silently omitting them.
    #[serde(default)]
    pub uncategorized: bool,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `autochangelog.toml` in current directory
/// 3. `.autochangelog.toml` in user config directory
/// 4. Default configuration if no file found
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./autochangelog.toml").exists() {
        fs::read_to_string("./autochangelog.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".autochangelog.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
