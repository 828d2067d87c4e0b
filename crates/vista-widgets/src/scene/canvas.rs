//! Canvas Program implementation for the scene
//!
//! Implements the iced canvas `Program` trait for frame + marker drawing,
//! taking a callback closure for marker selection following idiomatic
//! iced 0.14 patterns.

use iced::widget::canvas::{self, Event, Frame, Geometry, Path, Program};
use iced::{mouse, Color, Point, Rectangle, Theme};
use vista_core::ClipId;

use super::SceneState;
use crate::theme::{MARKER_HOVER_ALPHA, SCENE_BACKGROUND};

/// Canvas state for tracking which marker the pointer hovers
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneInteraction {
    /// Index into `SceneState::markers`, if the cursor is over one
    pub hovered: Option<usize>,
}

/// Canvas program for the scene
///
/// Takes a callback closure `on_select` that's called with the target
/// clip id when the user clicks a visible marker.
pub struct SceneCanvas<'a, Message, F>
where
    F: Fn(ClipId) -> Message,
{
    pub state: &'a SceneState,
    pub on_select: F,
}

impl<'a, Message, F> SceneCanvas<'a, Message, F>
where
    F: Fn(ClipId) -> Message,
{
    /// Marker index under the cursor, if markers are interactive
    fn marker_at(&self, position: Point, bounds: Rectangle) -> Option<usize> {
        if !self.state.markers_visible {
            return None;
        }
        self.state
            .markers
            .iter()
            .position(|m| m.hit_test(position, bounds.size(), self.state.marker_radius))
    }
}

impl<'a, Message, F> Program<Message> for SceneCanvas<'a, Message, F>
where
    Message: Clone,
    F: Fn(ClipId) -> Message,
{
    type State = SceneInteraction;

    fn update(
        &self,
        interaction: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        if let Some(position) = cursor.position_in(bounds) {
            match event {
                Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                    if let Some(index) = self.marker_at(position, bounds) {
                        let clip = self.state.markers[index].clip;
                        return Some(canvas::Action::publish((self.on_select)(clip)));
                    }
                }
                Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                    interaction.hovered = self.marker_at(position, bounds);
                }
                _ => {}
            }
        } else if matches!(event, Event::Mouse(mouse::Event::CursorMoved { .. })) {
            interaction.hovered = None;
        }

        None
    }

    fn mouse_interaction(
        &self,
        interaction: &Self::State,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if interaction.hovered.is_some() {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }

    fn draw(
        &self,
        interaction: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        // Background
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), SCENE_BACKGROUND);

        // Current clip frame, stretched to fill the canvas.
        // No frame yet means the media isn't ready; the draw is skipped
        // and the next tick retries naturally.
        if let Some(handle) = &self.state.frame {
            frame.draw_image(
                Rectangle::with_size(bounds.size()),
                canvas::Image::new(handle.clone()),
            );
        }

        // Hotspot markers, scaled from the reference space
        if self.state.markers_visible {
            for (index, marker) in self.state.markers.iter().enumerate() {
                let center = marker.scaled(bounds.size());
                let alpha = if interaction.hovered == Some(index) {
                    MARKER_HOVER_ALPHA
                } else {
                    1.0
                };
                let color = Color {
                    a: alpha,
                    ..self.state.marker_color
                };
                frame.fill(&Path::circle(center, self.state.marker_radius), color);
            }
        }

        vec![frame.into_geometry()]
    }
}
