//! Program configuration
//!
//! Read from a TOML file; every field is optional and falls back to the
//! defaults below.
//!
//! ```toml
//! image_path = "kodim23.png"
//! output_path = "histeq_frame.png"
//! grayscale_check = "strict"
//!
//! [display]
//! min_width = 640
//! min_height = 480
//! histogram_panel_width = 258
//! bar_divisor = 17.0
//! bar_color = [0, 255, 0]
//! background = [125, 125, 125]
//! ```

use crate::error::{SessionError, SessionResult};
use histeq_core::{Color, GrayscaleCheck};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Grayscale validation mode as written in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckMode {
    #[default]
    Strict,
    Lenient,
}

impl From<CheckMode> for GrayscaleCheck {
    fn from(mode: CheckMode) -> Self {
        match mode {
            CheckMode::Strict => GrayscaleCheck::Strict,
            CheckMode::Lenient => GrayscaleCheck::Lenient,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Image loaded at start-up and on reload
    pub image_path: PathBuf,
    /// File the rendered frame is written to after each command
    pub output_path: PathBuf,
    pub grayscale_check: CheckMode,
    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            image_path: PathBuf::from("kodim23.png"),
            output_path: PathBuf::from("histeq_frame.png"),
            grayscale_check: CheckMode::Strict,
            display: DisplayConfig::default(),
        }
    }
}

/// Frame layout and colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Smallest width of the image area
    pub min_width: u32,
    /// Smallest frame height
    pub min_height: u32,
    /// Width added to the right of the image for the histogram
    pub histogram_panel_width: u32,
    /// A bucket with `n` pixels draws a bar `n / bar_divisor` pixels high
    pub bar_divisor: f64,
    pub bar_color: [u8; 3],
    pub background: [u8; 3],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            min_width: 640,
            min_height: 480,
            histogram_panel_width: 258,
            bar_divisor: 17.0,
            bar_color: [0, 255, 0],
            background: [125, 125, 125],
        }
    }
}

impl DisplayConfig {
    pub fn bar_color(&self) -> Color {
        Color::from(self.bar_color)
    }

    pub fn background(&self) -> Color {
        Color::from(self.background)
    }
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> SessionResult<Self> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> SessionResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SessionError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::info!("loaded config {}", path.display());
        Ok(config)
    }

    /// Check values serde cannot constrain.
    pub fn validate(&self) -> SessionResult<()> {
        let divisor = self.display.bar_divisor;
        if !divisor.is_finite() || divisor <= 0.0 {
            return Err(SessionError::InvalidConfig(format!(
                "bar_divisor must be a positive number, got {}",
                divisor
            )));
        }
        let display = &self.display;
        if display.min_width.checked_add(display.histogram_panel_width).is_none() {
            return Err(SessionError::InvalidConfig(format!(
                "min_width {} plus histogram_panel_width {} overflows the frame width",
                display.min_width, display.histogram_panel_width
            )));
        }
        Ok(())
    }

    pub fn grayscale_check(&self) -> GrayscaleCheck {
        self.grayscale_check.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_toml_str(
            r#"
            grayscale_check = "lenient"

            [display]
            bar_divisor = 4.0
            "#,
        )
        .unwrap();
        assert_eq!(config.grayscale_check(), GrayscaleCheck::Lenient);
        assert_eq!(config.display.bar_divisor, 4.0);
        assert_eq!(config.display.min_width, 640);
        assert_eq!(config.image_path, PathBuf::from("kodim23.png"));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Config::from_toml_str("grayscale_check = \"sometimes\""),
            Err(SessionError::Config(_))
        ));
        assert!(matches!(
            Config::from_toml_str("[display]\nbar_divisor = 0.0"),
            Err(SessionError::InvalidConfig(_))
        ));
        assert!(matches!(
            Config::from_toml_str("[display]\nbar_color = [0, 300, 0]"),
            Err(SessionError::Config(_))
        ));
    }

    #[test]
    fn test_rejects_overflowing_frame() {
        assert!(matches!(
            Config::from_toml_str("[display]\nhistogram_panel_width = 4294967295"),
            Err(SessionError::InvalidConfig(_))
        ));
        assert!(matches!(
            Config::from_toml_str("[display]\nmin_width = 4294967000\nhistogram_panel_width = 296"),
            Err(SessionError::InvalidConfig(_))
        ));
        let edge = Config::from_toml_str(
            "[display]\nmin_width = 4294967000\nhistogram_panel_width = 295",
        )
        .unwrap();
        assert_eq!(edge.display.min_width, 4294967000);
    }

    #[test]
    fn test_load_file() {
        let dir = histeq_test::regout_dir();
        std::fs::create_dir_all(&dir).unwrap();
        let path = Path::new(&dir).join("config_load.toml");
        std::fs::write(
            &path,
            "image_path = \"scan.jpg\"\ngrayscale_check = \"lenient\"\n\n[display]\nmin_height = 200\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.image_path, PathBuf::from("scan.jpg"));
        assert_eq!(config.grayscale_check(), GrayscaleCheck::Lenient);
        assert_eq!(config.display.min_height, 200);
        assert_eq!(config.display.min_width, 640);

        std::fs::write(&path, "[display]\nbar_divisor = -1.0\n").unwrap();
        assert!(matches!(
            Config::load(&path),
            Err(SessionError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            Config::load("/nonexistent/histeq.toml"),
            Err(SessionError::ConfigRead { .. })
        ));
    }

    #[test]
    fn test_serialize_roundtrip() {
        let text = toml::to_string(&Config::default()).unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), Config::default());
    }
}
