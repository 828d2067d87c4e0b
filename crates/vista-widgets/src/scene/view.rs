//! Scene view function

use iced::widget::Canvas;
use iced::{Element, Length};
use vista_core::ClipId;

use super::canvas::SceneCanvas;
use super::SceneState;

/// Create the scene element (frame + hotspot layer)
///
/// # Arguments
///
/// * `state` - The scene state with the current frame and markers
/// * `on_select` - Callback closure called with the target clip id when a
///   visible marker is clicked
///
/// # Example
///
/// ```ignore
/// let scene = scene(&self.scene, Message::HotspotSelected);
/// ```
pub fn scene<'a, Message>(
    state: &'a SceneState,
    on_select: impl Fn(ClipId) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    Canvas::new(SceneCanvas { state, on_select })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
