//! Scene widget — render surface plus hotspot layer
//!
//! A single canvas draws both the current video frame (stretched to fill
//! the canvas, no letterboxing) and the hotspot markers on top of it.
//! Combining them in one canvas keeps the markers glued to the frame and
//! sidesteps iced bug #3040 where stacked Canvas widgets don't render
//! properly together.
//!
//! Marker visibility is controlled externally by the playback controller;
//! the scene only renders what the state says.

mod canvas;
mod view;

pub use canvas::{SceneCanvas, SceneInteraction};
pub use view::scene;

use iced::widget::image;
use iced::Color;

use crate::hotspot::HotspotMarker;
use crate::theme::{MARKER_COLOR, MARKER_RADIUS};

/// State for the scene canvas
///
/// The frame handle is whatever the player decided the current frame is;
/// `None` means the media is not ready yet and only the background is
/// drawn (the draw is skipped, never an error).
#[derive(Debug, Clone)]
pub struct SceneState {
    /// Current frame to display, if any is ready
    pub frame: Option<image::Handle>,
    /// Hotspot markers in reference coordinates
    pub markers: Vec<HotspotMarker>,
    /// Whether markers render and accept clicks
    pub markers_visible: bool,
    /// Marker radius in pixels
    pub marker_radius: f32,
    /// Marker fill color
    pub marker_color: Color,
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            frame: None,
            markers: Vec::new(),
            markers_visible: true,
            marker_radius: MARKER_RADIUS,
            marker_color: MARKER_COLOR,
        }
    }
}

impl SceneState {
    /// Create a scene with the given markers and default styling
    pub fn with_markers(markers: Vec<HotspotMarker>) -> Self {
        Self {
            markers,
            ..Self::default()
        }
    }
}
