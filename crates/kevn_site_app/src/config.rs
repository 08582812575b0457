// SPDX-License-Identifier: MIT OR Apache-2.0
//! Site configuration.
//!
//! Settings live in a RON file next to the binary (or wherever the first
//! argument points). A missing file means defaults; a malformed one is an
//! error.

use crate::app::{AppError, Result};
use kevn_splash::SplashConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "site.ron";

/// Highest frame rate the host will tick at
pub const MAX_FRAME_RATE: f32 = 1000.0;

/// Top-level site settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Format version
    pub version: u32,
    /// Loading screen
    pub splash: SplashConfig,
    /// Frames per second the host ticks at
    pub frame_rate: f32,
    /// Content fade-in after the splash, in seconds
    pub crossfade_duration: f32,
    /// Hero backdrop drift relative to the page scroll
    pub parallax_speed: f32,
    /// Frames to run before giving up and unmounting
    pub max_frames: u64,
    /// Tracing filter directives, merged after `RUST_LOG`
    pub log_filter: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            splash: SplashConfig::default(),
            frame_rate: 60.0,
            crossfade_duration: 0.8,
            parallax_speed: 0.5,
            max_frames: 60 * 30,
            log_filter: None,
        }
    }
}

impl SiteConfig {
    /// Load settings from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SiteConfig = ron::from_str(&content)?;

        if config.version > CONFIG_FORMAT_VERSION {
            return Err(AppError::InvalidConfig(format!(
                "config version {} is newer than supported version {}",
                config.version, CONFIG_FORMAT_VERSION
            )));
        }

        config.validate()?;
        Ok(config)
    }

    /// Load settings, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Save settings to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let pretty = ron::ser::PrettyConfig::default().struct_names(true);
        let content = ron::ser::to_string_pretty(self, pretty)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check values the timeline cannot catch itself
    pub fn validate(&self) -> Result<()> {
        // also keeps the frame interval representable and non-zero
        if !(1.0..=MAX_FRAME_RATE).contains(&self.frame_rate) {
            return Err(AppError::InvalidConfig(format!(
                "frame rate must be between 1 and {MAX_FRAME_RATE}, got {}",
                self.frame_rate
            )));
        }
        if !(self.splash.speed.is_finite() && self.splash.speed > 0.0) {
            return Err(AppError::InvalidConfig(format!(
                "splash speed must be positive, got {}",
                self.splash.speed
            )));
        }
        if !(self.crossfade_duration.is_finite() && self.crossfade_duration >= 0.0) {
            return Err(AppError::InvalidConfig(format!(
                "crossfade duration must not be negative, got {}",
                self.crossfade_duration
            )));
        }
        if !self.parallax_speed.is_finite() {
            return Err(AppError::InvalidConfig(format!(
                "parallax speed must be finite, got {}",
                self.parallax_speed
            )));
        }
        Ok(())
    }

    /// Time between frames
    pub fn frame_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f32(1.0 / self.frame_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.version, CONFIG_FORMAT_VERSION);
        assert_eq!(config.splash.title, "Kev'n");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_serialization() {
        let mut config = SiteConfig::default();
        config.splash.title = "Test Studio".to_string();
        config.log_filter = Some("kevn_splash=debug".to_string());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        config.save(&path).unwrap();
        let loaded = SiteConfig::load(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: SiteConfig = ron::from_str("(frame_rate: 30.0)").unwrap();
        assert_eq!(config.frame_rate, 30.0);
        assert_eq!(config.crossfade_duration, 0.8);
        assert_eq!(config.frame_interval().as_millis(), 33);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::load_or_default(&dir.path().join("missing.ron")).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = SiteConfig {
            frame_rate: 0.0,
            ..SiteConfig::default()
        };
        assert!(matches!(config.validate(), Err(AppError::InvalidConfig(_))));

        for frame_rate in [1e-45, 0.5, 1e9, f32::NAN] {
            let config = SiteConfig {
                frame_rate,
                ..SiteConfig::default()
            };
            assert!(config.validate().is_err(), "frame rate {frame_rate}");
        }
        let config = SiteConfig {
            frame_rate: MAX_FRAME_RATE,
            ..SiteConfig::default()
        };
        assert!(config.validate().is_ok());
        assert!(!config.frame_interval().is_zero());

        let mut config = SiteConfig::default();
        config.splash.speed = -1.0;
        assert!(config.validate().is_err());

        let config = SiteConfig {
            version: CONFIG_FORMAT_VERSION + 1,
            ..SiteConfig::default()
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("future.ron");
        config.save(&path).unwrap();
        let result = SiteConfig::load(&path);
        assert!(matches!(result, Err(AppError::InvalidConfig(_))));
    }
}
