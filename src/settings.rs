//! Presentation preferences
//!
//! Persisted as JSON next to the binary, separately from any game state.
//! Nothing here affects the simulation - these are renderer knobs only.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Decorative mote count for this preset
    pub fn mote_count(&self) -> usize {
        match self {
            QualityPreset::Low => 4,
            QualityPreset::Medium => 9,
            QualityPreset::High => 15,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,

    // === Visual Effects ===
    /// Decorative drifting motes
    pub particles: bool,
    /// Collectible spin animation
    pub spin: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Accessibility ===
    /// Reduced motion (no drift, no spin)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            particles: true,
            spin: true,
            show_fps: false,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective mote count (respects the particles toggle and reduced_motion)
    pub fn effective_mote_count(&self) -> usize {
        if !self.particles || self.reduced_motion {
            0
        } else {
            self.quality.mote_count()
        }
    }

    /// Effective spin animation (respects reduced_motion)
    pub fn effective_spin(&self) -> bool {
        self.spin && !self.reduced_motion
    }

    /// Load settings from a JSON file, falling back to defaults when the
    /// file is missing or unreadable
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring malformed settings {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("using default settings");
                Self::default()
            }
        }
    }

    /// Save settings as JSON
    pub fn save_to(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    log::warn!("could not save settings to {}: {err}", path.display());
                } else {
                    log::info!("settings saved");
                }
            }
            Err(err) => log::warn!("could not serialize settings: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_mote_count() {
        let mut settings = Settings::default();
        assert_eq!(settings.effective_mote_count(), 9);

        settings.quality = QualityPreset::High;
        assert_eq!(settings.effective_mote_count(), 15);

        settings.particles = false;
        assert_eq!(settings.effective_mote_count(), 0);

        settings.particles = true;
        settings.reduced_motion = true;
        assert_eq!(settings.effective_mote_count(), 0);
        assert!(!settings.effective_spin());
    }

    #[test]
    fn test_preset_names() {
        assert_eq!(QualityPreset::from_str("HIGH"), Some(QualityPreset::High));
        assert_eq!(QualityPreset::from_str("med"), Some(QualityPreset::Medium));
        assert_eq!(QualityPreset::from_str("ultra"), None);
        assert_eq!(QualityPreset::Low.as_str(), "Low");
    }

    #[test]
    fn test_load_round_trip_and_fallback() {
        let path = std::env::temp_dir().join(format!(
            "grove-dash-settings-{}.json",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);

        // Missing file falls back to defaults
        let settings = Settings::load_from(&path);
        assert_eq!(settings.quality, QualityPreset::Medium);

        let mut settings = Settings::default();
        settings.quality = QualityPreset::Low;
        settings.show_fps = true;
        settings.save_to(&path);

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded.quality, QualityPreset::Low);
        assert!(loaded.show_fps);

        // Corrupt file falls back to defaults
        fs::write(&path, "not json").unwrap();
        let loaded = Settings::load_from(&path);
        assert_eq!(loaded.quality, QualityPreset::Medium);
    }
}
