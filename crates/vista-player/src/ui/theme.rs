//! Theme configuration for vista-player
//!
//! Provides configurable marker styling for the hotspot layer.
//! Configuration is stored as YAML in the user's config directory.
//! Default location: ~/.config/vista-player/theme.yaml

use iced::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use vista_widgets::{MARKER_COLOR, MARKER_RADIUS};

/// Global theme instance (initialized once at startup)
static THEME: OnceLock<ThemeConfig> = OnceLock::new();

/// Root theme configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Hotspot marker styling
    pub marker: MarkerTheme,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            marker: MarkerTheme::default(),
        }
    }
}

/// Marker styling
///
/// The color is specified as a hex string (e.g., "#F3B03D")
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerTheme {
    /// Marker fill color (default: amber)
    pub color: String,
    /// Marker radius in pixels
    pub radius: f32,
}

impl Default for MarkerTheme {
    fn default() -> Self {
        Self {
            color: "#F3B03D".to_string(),
            radius: MARKER_RADIUS,
        }
    }
}

/// Parse a hex color string to an iced Color
///
/// Supports formats: "#RRGGBB" or "RRGGBB"
/// Returns the built-in marker color on parse failure
fn parse_hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    // is_ascii keeps the byte slices below on char boundaries
    if hex.len() != 6 || !hex.is_ascii() {
        log::warn!("Invalid hex color '{}', using default marker color", hex);
        return MARKER_COLOR;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
    let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
    let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

    Color::from_rgb8(r, g, b)
}

/// Get the default theme file path
///
/// Returns: ~/.config/vista-player/theme.yaml
pub fn default_theme_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("vista-player")
        .join("theme.yaml")
}

/// Load theme configuration from a YAML file
///
/// If the file doesn't exist, returns default config.
/// If the file exists but is invalid, logs a warning and returns default config.
pub fn load_theme(path: &Path) -> ThemeConfig {
    log::info!("load_theme: Loading from {:?}", path);

    if !path.exists() {
        log::info!("load_theme: Theme file doesn't exist, using defaults");
        return ThemeConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<ThemeConfig>(&contents) {
            Ok(config) => {
                log::info!(
                    "load_theme: Loaded theme - marker {} r={}",
                    config.marker.color,
                    config.marker.radius
                );
                config
            }
            Err(e) => {
                log::warn!("load_theme: Failed to parse theme: {}, using defaults", e);
                ThemeConfig::default()
            }
        },
        Err(e) => {
            log::warn!(
                "load_theme: Failed to read theme file: {}, using defaults",
                e
            );
            ThemeConfig::default()
        }
    }
}

/// Initialize the global theme from the config file (call once at startup)
pub fn init_theme() {
    let path = default_theme_path();
    let config = load_theme(&path);
    if THEME.set(config).is_err() {
        log::warn!("Theme already initialized");
    }
}

/// Get the configured marker color
pub fn marker_color() -> Color {
    THEME
        .get()
        .map(|t| parse_hex_color(&t.marker.color))
        .unwrap_or(MARKER_COLOR)
}

/// Get the configured marker radius
pub fn marker_radius() -> f32 {
    THEME.get().map(|t| t.marker.radius).unwrap_or(MARKER_RADIUS)
}
