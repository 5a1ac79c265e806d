//! User-tunable settings.
//!
//! Stored as JSON in `<config_dir>/showcase/settings.json`. Every section is
//! `#[serde(default)]`, so a partial file only overrides what it names.

use crate::carousel::{CarouselGeometry, NonCenterClick};
use crate::constants::{SMOOTH_SCROLL_EASE, TAP_MAX_DURATION_MS};
use crate::error::{SettingsError, SettingsResult};
use crate::scroll::MomentumConfig;
use crate::slideshow::SlideshowOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Location of the settings file, if the platform has a config directory.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("showcase").join("settings.json"))
}

/// Card press handling
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    pub non_center_click: NonCenterClick,
    pub tap_max_ms: f64,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            non_center_click: NonCenterClick::default(),
            tap_max_ms: TAP_MAX_DURATION_MS,
        }
    }
}

/// Smooth scroll and wheel momentum
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollSettings {
    pub ease: f32,
    pub momentum: MomentumConfig,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            ease: SMOOTH_SCROLL_EASE,
            momentum: MomentumConfig::default(),
        }
    }
}

/// All settings
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub carousel: CarouselGeometry,
    pub interaction: InteractionSettings,
    pub slideshow: SlideshowOptions,
    pub scroll: ScrollSettings,
}

impl Settings {
    /// Load from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            debug!(path = %path.display(), "No settings file, using defaults");
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to load settings, using defaults");
                Self::default()
            }
        }
    }

    /// Load and validate a settings file.
    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> SettingsResult<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Write to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> SettingsResult<()> {
        self.carousel.validate()?;
        self.scroll.momentum.validate()?;
        if !(self.scroll.ease > 0.0 && self.scroll.ease <= 1.0) {
            return Err(SettingsError::Invalid {
                field: "scroll.ease",
                reason: format!("{} is not in (0, 1]", self.scroll.ease),
            });
        }
        if !(self.slideshow.interval_ms > 0.0) {
            return Err(SettingsError::Invalid {
                field: "slideshow.interval_ms",
                reason: "must be positive".to_string(),
            });
        }
        if !(self.slideshow.fade_duration_ms >= 0.0) {
            return Err(SettingsError::Invalid {
                field: "slideshow.fade_duration_ms",
                reason: "must not be negative".to_string(),
            });
        }
        if !(self.interaction.tap_max_ms > 0.0) {
            return Err(SettingsError::Invalid {
                field: "interaction.tap_max_ms",
                reason: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}
