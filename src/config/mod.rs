// SPDX-License-Identifier: MPL-2.0
//! This module handles the chip configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! Every field is optional: missing values resolve to the constants in
//! [`defaults`], and out-of-range values are clamped by the domain newtypes
//! when converted into runtime settings.
//!
//! # Examples
//!
//! ```no_run
//! use iced_chip::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.banner.display_time_ms = Some(5_000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_file = PathBuf::from("./temp_config_dir/settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.banner.display_time_ms, Some(5_000));
//! ```

pub mod defaults;

use crate::banner::{BannerOptions, BannerSettings, SwipeSettings};
use crate::domain::banner::{AnimationDuration, DisplayTime, RestingOffset};
use crate::domain::gesture::{DismissFraction, FlingVelocity, TouchSlop};
use crate::error::Result;
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedChip";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub banner: BannerConfig,
    #[serde(default)]
    pub swipe: SwipeConfig,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

/// `[banner]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BannerConfig {
    pub animation_duration_ms: Option<u64>,
    pub resting_offset: Option<f32>,
    pub display_time_ms: Option<u64>,
    /// Keep banners up until dismissed; overrides `display_time_ms`.
    pub infinite_duration: Option<bool>,
    pub icon_pulse: Option<bool>,
    pub vibration: Option<bool>,
    pub swipe_to_dismiss: Option<bool>,
}

/// `[swipe]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwipeConfig {
    pub touch_slop: Option<f32>,
    pub min_fling_velocity: Option<f32>,
    pub max_fling_velocity: Option<f32>,
    pub dismiss_fraction: Option<f32>,
    pub fade_factor: Option<f32>,
    pub settle_duration_ms: Option<u64>,
    pub vertical_abort_ratio: Option<f32>,
}

/// `[diagnostics]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    pub buffer_capacity: Option<usize>,
}

impl Config {
    /// Timing and geometry shared by all banners.
    #[must_use]
    pub fn banner_settings(&self) -> BannerSettings {
        BannerSettings {
            animation_duration: AnimationDuration::from_millis(
                self.banner
                    .animation_duration_ms
                    .unwrap_or(DEFAULT_ANIMATION_DURATION_MS),
            ),
            resting_offset: RestingOffset::new(
                self.banner.resting_offset.unwrap_or(DEFAULT_RESTING_OFFSET),
            ),
        }
    }

    /// Default options for new banners. Buttons are never configured here.
    #[must_use]
    pub fn banner_options(&self) -> BannerOptions {
        let banner = &self.banner;
        let defaults = BannerOptions::default();
        let options = BannerOptions {
            pulse_icon: banner.icon_pulse.unwrap_or(defaults.pulse_icon),
            vibration: banner.vibration.unwrap_or(defaults.vibration),
            swipe_to_dismiss: banner.swipe_to_dismiss.unwrap_or(defaults.swipe_to_dismiss),
            ..defaults
        };
        if banner.infinite_duration.unwrap_or(false) {
            options.infinite_duration()
        } else {
            options.with_display_time(DisplayTime::from_millis(
                banner.display_time_ms.unwrap_or(DEFAULT_DISPLAY_TIME_MS),
            ))
        }
    }

    /// Swipe classifier tuning.
    #[must_use]
    pub fn swipe_settings(&self) -> SwipeSettings {
        let swipe = &self.swipe;
        let min_fling = FlingVelocity::new(
            swipe
                .min_fling_velocity
                .unwrap_or(DEFAULT_MIN_FLING_VELOCITY),
        );
        let max_fling = FlingVelocity::new(
            swipe
                .max_fling_velocity
                .unwrap_or(DEFAULT_MAX_FLING_VELOCITY)
                .max(min_fling.value()),
        );
        SwipeSettings {
            touch_slop: TouchSlop::new(swipe.touch_slop.unwrap_or(DEFAULT_TOUCH_SLOP)),
            min_fling,
            max_fling,
            dismiss_fraction: DismissFraction::new(
                swipe.dismiss_fraction.unwrap_or(DEFAULT_DISMISS_FRACTION),
            ),
            fade_factor: clamp_or(swipe.fade_factor, DEFAULT_FADE_FACTOR, MIN_FADE_FACTOR, MAX_FADE_FACTOR),
            settle_duration: Duration::from_millis(
                swipe
                    .settle_duration_ms
                    .unwrap_or(DEFAULT_SETTLE_DURATION_MS)
                    .clamp(MIN_SETTLE_DURATION_MS, MAX_SETTLE_DURATION_MS),
            ),
            vertical_abort_ratio: clamp_or(
                swipe.vertical_abort_ratio,
                DEFAULT_VERTICAL_ABORT_RATIO,
                MIN_VERTICAL_ABORT_RATIO,
                MAX_VERTICAL_ABORT_RATIO,
            ),
            ..SwipeSettings::default()
        }
    }

    /// Capacity of the diagnostics event buffer.
    #[must_use]
    pub fn diagnostics_capacity(&self) -> usize {
        self.diagnostics
            .buffer_capacity
            .unwrap_or(DEFAULT_DIAGNOSTICS_CAPACITY)
            .clamp(MIN_DIAGNOSTICS_CAPACITY, MAX_DIAGNOSTICS_CAPACITY)
    }
}

fn clamp_or(value: Option<f32>, default: f32, min: f32, max: f32) -> f32 {
    match value {
        Some(v) if !v.is_nan() => v.clamp(min, max),
        _ => default,
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads a config file. A file that is not valid TOML yields the defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
