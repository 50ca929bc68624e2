//! Background effect preferences
//!
//! Persisted as JSON in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_PARTICLE_COUNT, MAX_PARTICLE_COUNT};

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

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Particle count for this preset
    pub fn particle_count(&self) -> usize {
        match self {
            QualityPreset::Low => DEFAULT_PARTICLE_COUNT / 2,
            QualityPreset::Medium => DEFAULT_PARTICLE_COUNT,
            QualityPreset::High => DEFAULT_PARTICLE_COUNT * 3 / 2,
        }
    }
}

/// Background settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,
    /// Explicit particle count, overrides the preset
    pub particle_count: Option<usize>,
    /// Particle background on/off
    pub particles: bool,
    /// Lines between nearby particles
    pub connections: bool,
    /// Reduced motion (particles drawn but kept still)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            particle_count: None,
            particles: true,
            connections: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Apply a quality preset (drops any explicit count)
    pub fn apply_preset(&mut self, preset: QualityPreset) {
        log::info!("Quality preset: {}", preset.as_str());
        self.quality = preset;
        self.particle_count = None;
        // Low preset skips the quadratic connection pass
        if preset == QualityPreset::Low {
            self.connections = false;
        }
    }

    /// Apply a preset by name. Unknown names leave the settings untouched.
    pub fn apply_preset_name(&mut self, name: &str) -> bool {
        match QualityPreset::parse(name) {
            Some(preset) => {
                self.apply_preset(preset);
                true
            }
            None => {
                log::warn!("Unknown quality preset: {}", name);
                false
            }
        }
    }

    /// Effective particle count, capped to keep the pair check cheap
    pub fn particle_count(&self) -> usize {
        if !self.particles {
            return 0;
        }
        self.particle_count
            .unwrap_or_else(|| self.quality.particle_count())
            .min(MAX_PARTICLE_COUNT)
    }

    /// Parse settings JSON, falling back to defaults on malformed input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring malformed settings: {}", e);
                Self::default()
            }
        }
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "veldivia_background_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        match crate::platform::storage::get(Self::STORAGE_KEY) {
            Some(json) => {
                log::info!("Loaded settings from LocalStorage");
                Self::from_json(&json)
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        if let Ok(json) = serde_json::to_string(self) {
            if crate::platform::storage::set(Self::STORAGE_KEY, &json) {
                log::info!("Settings saved");
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
