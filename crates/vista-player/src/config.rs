//! Player configuration for vista-player
//!
//! Configuration is stored as YAML in the user's config directory.
//! Default location: ~/.config/vista-player/config.yaml
//!
//! Defaults describe the standard installation: three clips, three
//! hotspots in the 1920x1080 reference space, 33 ms tick, 0.033 s rewind
//! step, 300 ms overlay delay and the bounded readiness retry loop.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use vista_core::{ClipId, NUM_CLIPS};
use vista_widgets::HotspotMarker;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Clip sources (frame directories + frame rates)
    pub media: MediaConfig,
    /// Hotspot markers in reference coordinates
    pub hotspots: Vec<HotspotConfig>,
    /// Window settings
    pub display: DisplayConfig,
    /// Timer and retry settings
    pub timing: TimingConfig,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            media: MediaConfig::default(),
            hotspots: default_hotspots(),
            display: DisplayConfig::default(),
            timing: TimingConfig::default(),
        }
    }
}

/// Media configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    /// One frame directory per clip, in clip order
    pub clips: [ClipConfig; NUM_CLIPS],
}

impl Default for MediaConfig {
    fn default() -> Self {
        // Default media folder: ~/Videos/vista-media/clip{1,2,3}
        let root = dirs::video_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("Videos")
            })
            .join("vista-media");

        Self {
            clips: std::array::from_fn(|i| ClipConfig {
                path: root.join(format!("clip{}", i + 1)),
                fps: vista_core::DEFAULT_FPS,
            }),
        }
    }
}

/// A single clip source: a directory of numbered frame images
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipConfig {
    /// Directory containing the frame sequence
    pub path: PathBuf,
    /// Frame rate the sequence was extracted at
    pub fps: f64,
}

/// A hotspot entry: reference-space position plus target clip index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotspotConfig {
    pub x: f32,
    pub y: f32,
    /// Index of the clip this hotspot plays (0-based)
    pub clip: usize,
}

/// The default marker layout against a 1920x1080 frame
fn default_hotspots() -> Vec<HotspotConfig> {
    vec![
        HotspotConfig {
            x: 200.0,
            y: 200.0,
            clip: 0,
        },
        HotspotConfig {
            x: 1720.0,
            y: 200.0,
            clip: 1,
        },
        HotspotConfig {
            x: 960.0,
            y: 880.0,
            clip: 2,
        },
    ]
}

/// Display configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Initial window width in logical pixels
    pub window_width: f32,
    /// Initial window height in logical pixels
    pub window_height: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            window_width: 1280.0,
            window_height: 720.0,
        }
    }
}

/// Timing configuration section
///
/// The tick period doubles as the rewind tick: one 33 ms subscription
/// drives both forward playback and the stepwise rewind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// UI tick period in milliseconds (~30 ticks/second)
    pub tick_ms: u64,
    /// Seconds removed from the position per rewind tick
    pub rewind_step: f64,
    /// Delay between end-of-clip and the overlay reveal, in milliseconds
    pub overlay_delay_ms: u64,
    /// Playback rate multiplier for forward playback
    pub playback_rate: f64,
    /// How many times to retry drawing the first frame on startup
    pub ready_retry_count: u32,
    /// Interval between readiness retries, in milliseconds
    pub ready_retry_ms: u64,
    /// One-shot unconditional redraw attempt after startup, in milliseconds
    pub fallback_redraw_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_ms: 33,
            rewind_step: 0.033,
            overlay_delay_ms: 300,
            playback_rate: 1.0,
            ready_retry_count: 10,
            ready_retry_ms: 100,
            fallback_redraw_ms: 500,
        }
    }
}

impl TimingConfig {
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Seconds of media consumed per forward tick
    pub fn tick_advance(&self) -> f64 {
        self.tick_ms as f64 / 1000.0 * self.playback_rate
    }

    pub fn overlay_delay(&self) -> Duration {
        Duration::from_millis(self.overlay_delay_ms)
    }

    pub fn retry_interval(&self) -> Duration {
        Duration::from_millis(self.ready_retry_ms)
    }

    pub fn fallback_delay(&self) -> Duration {
        Duration::from_millis(self.fallback_redraw_ms)
    }
}

impl PlayerConfig {
    /// Build the marker list, validating clip indices against the fixed set
    pub fn markers(&self) -> Result<Vec<HotspotMarker>> {
        self.hotspots
            .iter()
            .map(|h| {
                let clip = ClipId::new(h.clip)
                    .with_context(|| format!("hotspot at ({}, {})", h.x, h.y))?;
                Ok(HotspotMarker::new(h.x, h.y, clip))
            })
            .collect()
    }
}

/// Get the default config file path
///
/// Returns: ~/.config/vista-player/config.yaml
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("vista-player")
        .join("config.yaml")
}

/// Load configuration from a YAML file
///
/// If the file doesn't exist, returns default config.
/// If the file exists but is invalid, logs a warning and returns default config.
pub fn load_config(path: &Path) -> PlayerConfig {
    log::info!("load_config: Loading from {:?}", path);

    if !path.exists() {
        log::info!("load_config: Config file doesn't exist, using defaults");
        return PlayerConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<PlayerConfig>(&contents) {
            Ok(config) => {
                log::info!(
                    "load_config: Loaded config - {} hotspots, tick {} ms, overlay delay {} ms",
                    config.hotspots.len(),
                    config.timing.tick_ms,
                    config.timing.overlay_delay_ms
                );
                config
            }
            Err(e) => {
                log::warn!("load_config: Failed to parse config: {}, using defaults", e);
                PlayerConfig::default()
            }
        },
        Err(e) => {
            log::warn!(
                "load_config: Failed to read config file: {}, using defaults",
                e
            );
            PlayerConfig::default()
        }
    }
}

/// Save configuration to a YAML file
///
/// Creates parent directories if they don't exist.
pub fn save_config(config: &PlayerConfig, path: &Path) -> Result<()> {
    log::info!("save_config: Saving to {:?}", path);

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config to YAML")?;

    std::fs::write(path, yaml)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    log::info!("save_config: Config saved successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlayerConfig::default();
        assert_eq!(config.timing.tick_ms, 33);
        assert_eq!(config.timing.rewind_step, 0.033);
        assert_eq!(config.timing.overlay_delay_ms, 300);
        assert_eq!(config.timing.ready_retry_count, 10);
        assert_eq!(config.hotspots.len(), 3);
        assert_eq!(config.media.clips.len(), NUM_CLIPS);
    }

    #[test]
    fn test_default_markers_are_valid() {
        let config = PlayerConfig::default();
        let markers = config.markers().unwrap();
        assert_eq!(markers.len(), 3);
        assert_eq!(markers[0].clip, ClipId::FIRST);
        assert_eq!(markers[2].position.y, 880.0);
    }

    #[test]
    fn test_marker_with_bad_clip_index_fails() {
        let mut config = PlayerConfig::default();
        config.hotspots[1].clip = 7;
        assert!(config.markers().is_err());
    }

    #[test]
    fn test_tick_advance_respects_rate() {
        let mut timing = TimingConfig::default();
        assert!((timing.tick_advance() - 0.033).abs() < 1e-9);
        timing.playback_rate = 2.0;
        assert!((timing.tick_advance() - 0.066).abs() < 1e-9);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        // Nested path exercises parent directory creation
        let path = temp_dir.path().join("vista-player").join("config.yaml");

        let mut config = PlayerConfig::default();
        config.timing.rewind_step = 0.05;
        config.hotspots[2].clip = 1;
        save_config(&config, &path).unwrap();

        let loaded = load_config(&path);
        assert_eq!(loaded.timing.rewind_step, 0.05);
        assert_eq!(loaded.hotspots[2].clip, 1);
        assert_eq!(loaded.hotspots.len(), config.hotspots.len());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = load_config(Path::new("/nonexistent/vista/config.yaml"));
        assert_eq!(config.timing.tick_ms, 33);
        assert_eq!(config.hotspots.len(), 3);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let mut config = PlayerConfig::default();
        config.timing.overlay_delay_ms = 450;
        config.display.window_width = 1920.0;
        config.hotspots[0].x = 123.0;
        config.media.clips[2].fps = 24.0;

        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: PlayerConfig = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(parsed.timing.overlay_delay_ms, 450);
        assert_eq!(parsed.display.window_width, 1920.0);
        assert_eq!(parsed.hotspots[0].x, 123.0);
        assert_eq!(parsed.media.clips[2].fps, 24.0);
    }
}
