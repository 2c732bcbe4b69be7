//! Configuration file support for liftlog.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/liftlog/config.toml`.

use crate::parse::DEFAULT_BODYWEIGHT;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,

    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub chart: ChartConfig,
}

/// Parser configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Load, in kilograms, assumed for sets logged without a weight
    #[serde(default = "default_bodyweight")]
    pub bodyweight: f64,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            bodyweight: default_bodyweight(),
        }
    }
}

/// Input and output location configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    /// Log files processed when none are named on the command line
    #[serde(default = "default_input_files")]
    pub input_files: Vec<PathBuf>,

    /// Directory chart and CSV artifacts are written to
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            input_files: default_input_files(),
            out_dir: default_out_dir(),
        }
    }
}

/// Chart geometry configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Horizontal pixels allotted per plotted day
    #[serde(default = "default_px_per_day")]
    pub px_per_day: u32,

    /// Chart height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            px_per_day: default_px_per_day(),
            height: default_height(),
        }
    }
}

// Default value functions
fn default_bodyweight() -> f64 {
    DEFAULT_BODYWEIGHT
}

fn default_input_files() -> Vec<PathBuf> {
    vec![
        PathBuf::from("push.txt"),
        PathBuf::from("pull.txt"),
        PathBuf::from("legs.txt"),
    ]
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("out")
}

fn default_px_per_day() -> u32 {
    64
}

fn default_height() -> u32 {
    480
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME")
                .expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("liftlog").join("config.toml")
    }
}
