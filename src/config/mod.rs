//! Configuration management for the batch resizer

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ResizeError, Result};
use crate::processing::FilterType;

pub mod job;
pub use job::*;

/// Settings file contents. Read only: the program never writes these back.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Values used when the front-end does not supply them
    pub defaults: JobDefaults,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Default job values, matching the initial state of the selection widgets
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JobDefaults {
    /// Scale percentage (1-100)
    pub scale_percent: u8,

    /// Output format
    pub output_format: OutputFormat,

    /// Resampling filter
    pub filter: FilterType,

    /// JPEG encoder quality (1-100)
    pub jpeg_quality: u8,
}

impl Default for JobDefaults {
    fn default() -> Self {
        Self {
            scale_percent: 100,
            output_format: OutputFormat::Png,
            filter: FilterType::default(),
            jpeg_quality: 75,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Output formats offered to the user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Png,
    Jpg,
    Jpeg,
    Gif,
    Bmp,
    Tiff,
}

impl OutputFormat {
    /// Every selectable format, in the order they are offered
    pub const ALL: [OutputFormat; 6] = [
        Self::Png,
        Self::Jpg,
        Self::Jpeg,
        Self::Gif,
        Self::Bmp,
        Self::Tiff,
    ];

    /// File extension written for this format (always lowercase)
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
            Self::Jpeg => "jpeg",
            Self::Gif => "gif",
            Self::Bmp => "bmp",
            Self::Tiff => "tiff",
        }
    }

    /// Codec used to encode this format. `jpg` and `jpeg` share the generic JPEG codec.
    pub fn codec(self) -> image::ImageFormat {
        match self {
            Self::Png => image::ImageFormat::Png,
            Self::Jpg | Self::Jpeg => image::ImageFormat::Jpeg,
            Self::Gif => image::ImageFormat::Gif,
            Self::Bmp => image::ImageFormat::Bmp,
            Self::Tiff => image::ImageFormat::Tiff,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.extension().to_ascii_uppercase())
    }
}

impl FromStr for OutputFormat {
    type Err = ResizeError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().trim_start_matches('.');
        Self::ALL
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                ResizeError::config(format!(
                    "Unsupported output format '{}'. Choose one of: PNG, JPG, JPEG, GIF, BMP, TIFF",
                    s
                ))
            })
    }
}

impl Settings {
    /// Load settings from a `.toml` or `.yaml`/`.yml` file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            ResizeError::config(format!(
                "Failed to read settings file {:?}: {}",
                path.as_ref(),
                e
            ))
        })?;

        let extension = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");

        let settings: Settings = match extension.to_lowercase().as_str() {
            "toml" => toml::from_str(&content)?,
            "yaml" | "yml" => serde_yaml::from_str(&content)?,
            _ => {
                return Err(ResizeError::config(
                    "Unsupported settings file format. Use .toml or .yaml",
                ))
            }
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Validate settings values
    pub fn validate(&self) -> Result<()> {
        if !(1..=100).contains(&self.defaults.scale_percent) {
            return Err(ResizeError::config(format!(
                "Default scale must be between 1 and 100, got {}",
                self.defaults.scale_percent
            )));
        }

        if !(1..=100).contains(&self.defaults.jpeg_quality) {
            return Err(ResizeError::config(format!(
                "JPEG quality must be between 1 and 100, got {}",
                self.defaults.jpeg_quality
            )));
        }

        if self.logging.level.trim().is_empty() {
            return Err(ResizeError::config("Log level must not be empty"));
        }

        Ok(())
    }
}
