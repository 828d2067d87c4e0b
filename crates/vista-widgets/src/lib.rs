//! Shared UI widgets for the Vista hotspot player
//!
//! This crate provides the iced widgets the player is built from.
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! Following idiomatic iced patterns:
//!
//! - **State structs**: Pure data (`SceneState`, `HotspotMarker`)
//! - **View functions**: Take state + callbacks, return `Element<Message>`
//! - **Canvas Programs**: Handle custom rendering and event-to-callback
//!   translation
//!
//! ## Widgets
//!
//! - `scene`: the render surface — current clip frame stretched to the
//!   canvas, hotspot markers with hover/click handling
//! - `overlay_panel`: the post-playback overlay with the back control

pub mod hotspot;
pub mod overlay;
pub mod scene;
pub mod theme;

// Re-export commonly used items
pub use hotspot::{scaled_position, HotspotMarker};
pub use overlay::overlay_panel;
pub use scene::{scene, SceneInteraction, SceneState};
pub use theme::{
    MARKER_COLOR, MARKER_HOVER_ALPHA, MARKER_RADIUS, OVERLAY_SCRIM, REFERENCE_HEIGHT,
    REFERENCE_WIDTH, SCENE_BACKGROUND,
};
