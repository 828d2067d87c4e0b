//! Overlay panel shown after a clip finishes
//!
//! Pure visibility toggle driven by the playback controller — the panel
//! has no logic of its own beyond emitting the back message.

use iced::widget::{button, column, container, text};
use iced::{Center, Element, Fill};

use crate::theme::OVERLAY_SCRIM;

/// Create the overlay panel element
///
/// Stacked over the scene by the caller when the controller marks the
/// overlay active. The back button emits `on_back`.
pub fn overlay_panel<'a, Message>(message: &'a str, on_back: Message) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let content = column![
        text(message).size(28),
        button(text("Back").size(16)).on_press(on_back).padding(10),
    ]
    .spacing(20)
    .align_x(Center);

    container(content)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .style(|_theme| container::Style {
            background: Some(OVERLAY_SCRIM.into()),
            ..container::Style::default()
        })
        .into()
}
