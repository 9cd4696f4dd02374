use crate::error::{GradientMapError, Result};
use crate::utils::palette::preset_declaration;
use std::str::FromStr;

/// Where a gradient declaration comes from.
#[derive(Debug, Clone)]
pub enum Source {
    Declaration(String),
    Preset(String),
}

impl Source {
    /// The declaration text, sampling built-in palettes as needed.
    pub fn declaration(&self, config: &Config) -> Result<String> {
        match self {
            Source::Declaration(text) => Ok(text.clone()),
            Source::Preset(name) => preset_declaration(name, config.preset_samples),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
    Csv,
    Svg,
}

impl FromStr for OutputFormat {
    type Err = GradientMapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "summary" | "table" => Ok(OutputFormat::Summary),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "svg" => Ok(OutputFormat::Svg),
            _ => Err(GradientMapError::UnsupportedFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub filter_id: String,
    pub preset_samples: usize,
    pub image_extensions: Vec<String>,
    pub output_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            filter_id: "gradient-map".to_string(),
            preset_samples: 11,
            image_extensions: ["png", "jpg", "jpeg", "bmp", "tif", "tiff"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            output_format: OutputFormat::Summary,
        }
    }
}

impl Config {
    pub fn accepts_extension(&self, ext: &str) -> bool {
        self.image_extensions
            .iter()
            .any(|known| known.eq_ignore_ascii_case(ext))
    }
}
