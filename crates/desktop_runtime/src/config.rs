//! Shell layout and application catalog configuration.
//!
//! The source of truth is `desktop.toml` at the crate root. `build.rs` validates it and embeds it
//! as JSON; [`load_desktop_config`] decodes that payload at startup.

use std::collections::HashSet;

use desktop_app_contract::ApplicationId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::WindowRect;

include!(concat!(env!("OUT_DIR"), "/desktop_config_generated.rs"));

pub const DESKTOP_CONFIG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub w: i32,
    pub h: i32,
}

/// Region new windows are placed in. Max bounds are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementBand {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl PlacementBand {
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (self.x_min..self.x_max).contains(&x) && (self.y_min..self.y_max).contains(&y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopLayout {
    pub taskbar_height_px: i32,
    pub default_window: WindowSize,
    pub placement: PlacementBand,
}

impl Default for DesktopLayout {
    fn default() -> Self {
        Self {
            taskbar_height_px: 48,
            default_window: WindowSize { w: 900, h: 650 },
            placement: PlacementBand {
                x_min: 100,
                x_max: 250,
                y_min: 50,
                y_max: 130,
            },
        }
    }
}

impl DesktopLayout {
    /// Default-sized rect at the given origin.
    pub fn window_rect_at(&self, x: i32, y: i32) -> WindowRect {
        WindowRect {
            x,
            y,
            w: self.default_window.w,
            h: self.default_window.h,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppManifest {
    pub app_id: ApplicationId,
    pub display_name: String,
    pub icon: String,
    pub show_on_desktop: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopConfig {
    pub schema_version: u32,
    pub layout: DesktopLayout,
    pub apps: Vec<AppManifest>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("desktop config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("desktop config schema mismatch: expected {expected} found {found}")]
    SchemaVersion { expected: u32, found: u32 },
    #[error("placement band must have min < max on both axes")]
    EmptyPlacementBand,
    #[error("default window size must be positive, got {w}x{h}")]
    NonPositiveWindowSize { w: i32, h: i32 },
    #[error("duplicate app id `{0}` in desktop config")]
    DuplicateApp(ApplicationId),
}

/// Decodes the embedded desktop config.
///
/// # Errors
///
/// Returns [`ConfigError`] when the embedded payload fails to decode or validate.
pub fn load_desktop_config() -> Result<DesktopConfig, ConfigError> {
    parse_desktop_config(DESKTOP_CONFIG_JSON)
}

/// Decodes and validates a desktop config JSON document.
///
/// # Errors
///
/// Returns [`ConfigError`] for malformed JSON, an unexpected schema version, a non-positive
/// default window size, an empty placement band, or duplicate app ids.
pub fn parse_desktop_config(raw: &str) -> Result<DesktopConfig, ConfigError> {
    let config: DesktopConfig = serde_json::from_str(raw)?;
    if config.schema_version != DESKTOP_CONFIG_SCHEMA_VERSION {
        return Err(ConfigError::SchemaVersion {
            expected: DESKTOP_CONFIG_SCHEMA_VERSION,
            found: config.schema_version,
        });
    }

    let size = config.layout.default_window;
    if size.w <= 0 || size.h <= 0 {
        return Err(ConfigError::NonPositiveWindowSize {
            w: size.w,
            h: size.h,
        });
    }

    let band = config.layout.placement;
    if band.x_min >= band.x_max || band.y_min >= band.y_max {
        return Err(ConfigError::EmptyPlacementBand);
    }

    let mut seen = HashSet::new();
    for app in &config.apps {
        if !seen.insert(app.app_id.clone()) {
            return Err(ConfigError::DuplicateApp(app.app_id.clone()));
        }
    }

    Ok(config)
}
