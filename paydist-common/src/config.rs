use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Upper bound on any bin count, chosen or configured.
pub const MAX_BINS: usize = 1_000_000;
/// Largest accepted canvas side in pixels.
pub const MAX_CANVAS: u32 = 16_384;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_input_path")]
    pub path: String,
}

fn default_input_path() -> String {
    "data9-1.csv".into()
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinningConfig {
    #[serde(default = "default_fixed_bins")]
    pub fixed_bins: usize, // used by the density chart only
}

fn default_fixed_bins() -> usize {
    30
}

impl Default for BinningConfig {
    fn default() -> Self {
        Self {
            fixed_bins: default_fixed_bins(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandConfig {
    #[serde(default = "default_lower_factor")]
    pub lower_factor: f64,
    #[serde(default = "default_upper_factor")]
    pub upper_factor: f64,
}

fn default_lower_factor() -> f64 {
    0.8
}
fn default_upper_factor() -> f64 {
    1.2
}

impl Default for BandConfig {
    fn default() -> Self {
        Self {
            lower_factor: default_lower_factor(),
            upper_factor: default_upper_factor(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_density_output")]
    pub density_output: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_output() -> String {
    "PDF.png".into()
}
fn default_density_output() -> String {
    "density.png".into()
}
fn default_width() -> u32 {
    1920 // 6.4in at 300dpi
}
fn default_height() -> u32 {
    1440
}
fn default_theme() -> String {
    "classic".into()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            density_output: default_density_output(),
            width: default_width(),
            height: default_height(),
            theme: default_theme(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_output_dir() -> String {
    ".".into()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub binning: BinningConfig,
    #[serde(default)]
    pub band: BandConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("paydist")
            .join("config.toml")
    }

    pub fn load() -> crate::Result<Self> {
        let path = if let Ok(env_path) = std::env::var("PAYDIST_CONFIG") {
            PathBuf::from(env_path) // $PAYDIST_CONFIG overrides default config path
        } else {
            Self::config_path()
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let cfg: Self =
            toml::from_str(&content).map_err(|e| crate::PaydistError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.binning.fixed_bins == 0 || self.binning.fixed_bins > MAX_BINS {
            return Err(crate::PaydistError::Config(format!(
                "binning.fixed_bins must be in 1..={MAX_BINS}"
            )));
        }
        let (lo, hi) = (self.band.lower_factor, self.band.upper_factor);
        if !(lo.is_finite() && hi.is_finite()) || lo >= hi {
            return Err(crate::PaydistError::Config(format!(
                "band factors must satisfy lower < upper, got {lo} and {hi}"
            )));
        }
        let canvas = 1..=MAX_CANVAS;
        if !canvas.contains(&self.render.width) || !canvas.contains(&self.render.height) {
            return Err(crate::PaydistError::Config(format!(
                "render.width and render.height must be in 1..={MAX_CANVAS}"
            )));
        }
        Ok(())
    }

    pub fn save(&self) -> crate::Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::PaydistError::Config(e.to_string()))?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}
