//! Hotspot marker data and reference-space scaling
//!
//! Markers are defined once in the 1920x1080 reference space and scaled to
//! whatever size the scene canvas currently has. Scaling happens on every
//! draw, so a resize is just the next draw with different bounds — the
//! reference configuration itself is never mutated.

use iced::{Point, Size};
use vista_core::ClipId;

use crate::theme::{REFERENCE_HEIGHT, REFERENCE_WIDTH};

/// A clickable marker bound to a target clip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HotspotMarker {
    /// Position in the reference coordinate space
    pub position: Point,
    /// Clip played when this marker is selected
    pub clip: ClipId,
}

impl HotspotMarker {
    pub fn new(x: f32, y: f32, clip: ClipId) -> Self {
        Self {
            position: Point::new(x, y),
            clip,
        }
    }

    /// Marker center scaled to the given canvas size
    pub fn scaled(&self, bounds: Size) -> Point {
        scaled_position(self.position, bounds)
    }

    /// Whether a cursor position (in canvas coordinates) hits this marker
    pub fn hit_test(&self, cursor: Point, bounds: Size, radius: f32) -> bool {
        let center = self.scaled(bounds);
        let dx = cursor.x - center.x;
        let dy = cursor.y - center.y;
        dx * dx + dy * dy <= radius * radius
    }
}

/// Scale a reference-space point to the given canvas size
///
/// Proportional on each axis independently — the frame itself is stretched
/// to fill the canvas the same way, so markers stay glued to the imagery.
pub fn scaled_position(reference: Point, bounds: Size) -> Point {
    Point::new(
        reference.x / REFERENCE_WIDTH * bounds.width,
        reference.y / REFERENCE_HEIGHT * bounds.height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker() -> HotspotMarker {
        HotspotMarker::new(200.0, 200.0, ClipId::FIRST)
    }

    #[test]
    fn test_scaling_is_proportional() {
        let m = marker();

        let small = m.scaled(Size::new(960.0, 540.0));
        assert_eq!(small, Point::new(100.0, 100.0));

        let full = m.scaled(Size::new(1920.0, 1080.0));
        assert_eq!(full, Point::new(200.0, 200.0));

        // Non-uniform stretch scales each axis independently
        let wide = m.scaled(Size::new(3840.0, 540.0));
        assert_eq!(wide, Point::new(400.0, 100.0));
    }

    #[test]
    fn test_resize_leaves_reference_untouched() {
        let m = marker();
        let _ = m.scaled(Size::new(640.0, 360.0));
        let _ = m.scaled(Size::new(2560.0, 1440.0));
        assert_eq!(m.position, Point::new(200.0, 200.0));
    }

    #[test]
    fn test_hit_test() {
        let m = marker();
        let bounds = Size::new(1920.0, 1080.0);

        assert!(m.hit_test(Point::new(200.0, 200.0), bounds, 15.0));
        assert!(m.hit_test(Point::new(210.0, 210.0), bounds, 15.0));
        assert!(!m.hit_test(Point::new(230.0, 200.0), bounds, 15.0));

        // Scaled-down canvas scales the marker center too
        let half = Size::new(960.0, 540.0);
        assert!(m.hit_test(Point::new(100.0, 100.0), half, 15.0));
        assert!(!m.hit_test(Point::new(200.0, 200.0), half, 15.0));
    }
}
