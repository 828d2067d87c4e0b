//! Shared theme constants for vista UI components
//!
//! Visual constants for the scene canvas and overlay panel. Marker color
//! and radius are configurable via ~/.config/vista-player/theme.yaml in
//! vista-player; these are the fallbacks.

use iced::Color;

/// Reference coordinate space for hotspot positions
///
/// Hotspot positions in config are expressed against a 1920x1080 frame
/// and scaled to the actual canvas size on every draw.
pub const REFERENCE_WIDTH: f32 = 1920.0;
pub const REFERENCE_HEIGHT: f32 = 1080.0;

/// Default marker fill color (#F3B03D, amber)
pub const MARKER_COLOR: Color = Color::from_rgb(0.953, 0.690, 0.239);

/// Default marker radius in reference pixels
pub const MARKER_RADIUS: f32 = 15.0;

/// Marker opacity while the pointer hovers it
pub const MARKER_HOVER_ALPHA: f32 = 0.8;

/// Canvas background shown before the first frame is ready
pub const SCENE_BACKGROUND: Color = Color::from_rgb(0.05, 0.05, 0.08);

/// Translucent scrim behind the overlay panel
pub const OVERLAY_SCRIM: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.75,
};
