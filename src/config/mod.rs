// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! rail preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[rail]` - Looping, starting index and input mode
//! - `[gesture]` - Wheel threshold, cooldown, noise floor and swipe confidence
//! - `[autoplay]` - Autoplay toggle and interval
//! - `[diagnostics]` - In-memory event buffer size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `FOCUS_RAIL_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use focus_rail::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.rail.loop_enabled = Some(false);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::rail::{
    AutoplayInterval, BufferCapacity, CooldownWindow, NoiseFloor, StepThreshold,
    SwipeConfidence,
};
use crate::error::{Error, Result};
use crate::rail::{GestureSettings, InputMode, RailSettings};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Rail navigation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RailConfig {
    /// Whether navigation wraps around at both ends.
    #[serde(default = "default_loop_enabled", skip_serializing_if = "Option::is_none")]
    pub loop_enabled: Option<bool>,

    /// Index the rail starts on (normalized against the item count).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_index: Option<i64>,

    /// Whether the rail follows scroll position or discrete gestures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_mode: Option<InputMode>,
}

impl Default for RailConfig {
    fn default() -> Self {
        Self {
            loop_enabled: default_loop_enabled(),
            initial_index: Some(DEFAULT_INITIAL_INDEX),
            input_mode: Some(InputMode::default()),
        }
    }
}

/// Wheel and drag gesture tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GestureConfig {
    #[serde(default = "default_step_threshold", skip_serializing_if = "Option::is_none")]
    pub step_threshold: Option<f32>,

    #[serde(default = "default_cooldown_ms", skip_serializing_if = "Option::is_none")]
    pub cooldown_ms: Option<u64>,

    #[serde(default = "default_noise_floor", skip_serializing_if = "Option::is_none")]
    pub noise_floor: Option<f32>,

    #[serde(
        default = "default_swipe_confidence",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_confidence: Option<f32>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            step_threshold: default_step_threshold(),
            cooldown_ms: default_cooldown_ms(),
            noise_floor: default_noise_floor(),
            swipe_confidence: default_swipe_confidence(),
        }
    }
}

/// Autoplay settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AutoplayConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default = "default_interval_ms", skip_serializing_if = "Option::is_none")]
    pub interval_ms: Option<u64>,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            enabled: Some(DEFAULT_AUTOPLAY_ENABLED),
            interval_ms: default_interval_ms(),
        }
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    #[serde(
        default = "default_buffer_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub buffer_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub rail: RailConfig,

    #[serde(default)]
    pub gesture: GestureConfig,

    #[serde(default)]
    pub autoplay: AutoplayConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl Config {
    /// Builds validated rail settings, clamping every tunable into range.
    #[must_use]
    pub fn rail_settings(&self) -> RailSettings {
        let gesture = GestureSettings {
            step_threshold: StepThreshold::new(
                self.gesture.step_threshold.unwrap_or(DEFAULT_STEP_THRESHOLD),
            ),
            cooldown: CooldownWindow::from_millis(
                self.gesture.cooldown_ms.unwrap_or(DEFAULT_STEP_COOLDOWN_MS),
            ),
            noise_floor: NoiseFloor::new(self.gesture.noise_floor.unwrap_or(DEFAULT_NOISE_FLOOR)),
            swipe_confidence: SwipeConfidence::new(
                self.gesture
                    .swipe_confidence
                    .unwrap_or(DEFAULT_SWIPE_CONFIDENCE),
            ),
        };

        RailSettings {
            loop_enabled: self.rail.loop_enabled.unwrap_or(DEFAULT_LOOP_ENABLED),
            initial_index: self.rail.initial_index.unwrap_or(DEFAULT_INITIAL_INDEX),
            mode: self.rail.input_mode.unwrap_or_default(),
            gesture,
            autoplay_enabled: self.autoplay.enabled.unwrap_or(DEFAULT_AUTOPLAY_ENABLED),
            autoplay_interval: AutoplayInterval::new(Duration::from_millis(
                self.autoplay
                    .interval_ms
                    .unwrap_or(DEFAULT_AUTOPLAY_INTERVAL_MS),
            )),
            diagnostics_capacity: BufferCapacity::new(
                self.diagnostics
                    .buffer_capacity
                    .unwrap_or(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY),
            ),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_loop_enabled() -> Option<bool> {
    Some(DEFAULT_LOOP_ENABLED)
}

fn default_step_threshold() -> Option<f32> {
    Some(DEFAULT_STEP_THRESHOLD)
}

fn default_cooldown_ms() -> Option<u64> {
    Some(DEFAULT_STEP_COOLDOWN_MS)
}

fn default_noise_floor() -> Option<f32> {
    Some(DEFAULT_NOISE_FLOOR)
}

fn default_swipe_confidence() -> Option<f32> {
    Some(DEFAULT_SWIPE_CONFIDENCE)
}

fn default_interval_ms() -> Option<u64> {
    Some(DEFAULT_AUTOPLAY_INTERVAL_MS)
}

fn default_buffer_capacity() -> Option<usize> {
    Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("could not load {}: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            rail: RailConfig {
                loop_enabled: Some(false),
                initial_index: Some(2),
                input_mode: Some(InputMode::ScrollDriven),
            },
            gesture: GestureConfig {
                step_threshold: Some(120.0),
                cooldown_ms: Some(300),
                noise_floor: Some(4.0),
                swipe_confidence: Some(8000.0),
            },
            autoplay: AutoplayConfig {
                enabled: Some(true),
                interval_ms: Some(2500),
            },
            diagnostics: DiagnosticsConfig {
                buffer_capacity: Some(50),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[rail]\nloop_enabled = false\n").expect("failed to write");

        let loaded = load_from_path(&config_path).expect("partial config should load");
        assert_eq!(loaded.rail.loop_enabled, Some(false));
        assert_eq!(loaded.gesture, GestureConfig::default());
        assert_eq!(loaded.autoplay, AutoplayConfig::default());
    }

    #[test]
    fn input_mode_uses_kebab_case() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[rail]\ninput_mode = \"scroll-driven\"\n")
            .expect("failed to write");

        let loaded = load_from_path(&config_path).expect("config should load");
        assert_eq!(loaded.rail.input_mode, Some(InputMode::ScrollDriven));
    }

    #[test]
    fn load_with_override_missing_file_returns_default_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[").expect("failed to write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_some(), "should warn about parse error");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_with_override_writes_into_base_dir() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = temp_dir.path().join("cfg");

        save_with_override(&Config::default(), Some(base.clone())).expect("save should work");
        assert!(base.join(CONFIG_FILE).exists());
    }

    #[test]
    fn rail_settings_clamp_out_of_range_values() {
        let config = Config {
            gesture: GestureConfig {
                step_threshold: Some(-5.0),
                cooldown_ms: Some(999_999),
                noise_floor: Some(1000.0),
                swipe_confidence: Some(0.0),
            },
            autoplay: AutoplayConfig {
                enabled: Some(true),
                interval_ms: Some(1),
            },
            ..Config::default()
        };

        let settings = config.rail_settings();
        assert_eq!(settings.gesture.step_threshold.value(), MIN_STEP_THRESHOLD);
        assert_eq!(
            settings.gesture.cooldown.as_duration(),
            Duration::from_millis(MAX_STEP_COOLDOWN_MS)
        );
        assert_eq!(settings.gesture.noise_floor.value(), MAX_NOISE_FLOOR);
        assert_eq!(
            settings.gesture.swipe_confidence.value(),
            MIN_SWIPE_CONFIDENCE
        );
        assert_eq!(
            settings.autoplay_interval.as_duration(),
            Duration::from_millis(MIN_AUTOPLAY_INTERVAL_MS)
        );
        assert!(settings.autoplay_enabled);
    }

    #[test]
    fn default_rail_settings_match_defaults() {
        let settings = Config::default().rail_settings();
        assert_eq!(settings.loop_enabled, DEFAULT_LOOP_ENABLED);
        assert_eq!(settings.initial_index, DEFAULT_INITIAL_INDEX);
        assert_eq!(settings.mode, InputMode::Gesture);
        assert_eq!(settings.gesture.step_threshold.value(), DEFAULT_STEP_THRESHOLD);
        assert_eq!(
            settings.gesture.cooldown.as_duration(),
            Duration::from_millis(DEFAULT_STEP_COOLDOWN_MS)
        );
    }
}
