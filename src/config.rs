use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::gaze::GazeRoles;
use crate::labels::LabelMap;
use crate::palette::{parse_hex, Palette};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub render: RenderConfig,
    pub labels: LabelConfig,
    pub palette: PaletteConfig,
    pub gaze: GazeRoles,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub class_threshold: f32,
    pub font_family: String,
    pub font_min_px: u32,
    pub fill_alpha: f32,
    pub min_line_width: f32,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// JSON array of class names; takes precedence over `names`.
    pub path: Option<PathBuf>,
    pub names: Option<Vec<String>>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub colors: Option<Vec<String>>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            class_threshold: 0.25,
            font_family: "Arial".to_string(),
            font_min_px: 14,
            fill_alpha: 0.2,
            min_line_width: 2.5,
        }
    }
}

impl AppConfig {
    pub const PATH: &'static str = "config.json";

    /// Missing file or unparsable content falls back to defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("Configuration file {} not found. Using defaults.", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io { path: path.to_path_buf(), source });
            }
        };

        // Missing fields use Default due to #[serde(default)]
        match serde_json::from_str::<AppConfig>(&content) {
            Ok(c) => {
                log::info!("Loaded configuration from {}", path.display());
                Ok(c)
            }
            Err(e) => {
                log::warn!("Error parsing config {}: {}. Loading defaults.", path.display(), e);
                Ok(Self::default())
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        fs::write(path, content).map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })
    }

    /// Relative label paths resolve against `base`, normally the config file's directory.
    pub fn label_map(&self, base: &Path) -> Result<LabelMap, ConfigError> {
        if let Some(path) = &self.labels.path {
            let path = if path.is_relative() { base.join(path) } else { path.clone() };
            return LabelMap::load(&path);
        }
        Ok(match &self.labels.names {
            Some(names) => LabelMap::new(names.clone()),
            None => LabelMap::default(),
        })
    }

    pub fn palette(&self) -> Palette {
        let Some(colors) = &self.palette.colors else {
            return Palette::default();
        };
        for c in colors.iter().filter(|c| parse_hex(c).is_none()) {
            log::warn!("Palette entry '{}' is not a #RRGGBB color; boxes using it get no fill and a black outline", c);
        }
        Palette::new(colors.clone()).unwrap_or_else(|| {
            log::warn!("Empty palette in configuration. Using default palette.");
            Palette::default()
        })
    }
}
