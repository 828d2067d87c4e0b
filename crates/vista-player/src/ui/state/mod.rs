//! Application state modules for vista-player
//!
//! Per-clip slots pairing a transport (timing) with the decoded media
//! (pixels). The controller never sees the media; the scene never sees
//! the transport.

use std::sync::Arc;

use iced::widget::image;

use crate::loader::LoadedClip;
use vista_core::ClipTransport;

/// One clip's worth of state: transport plus (eventually) decoded frames
///
/// `media` is `None` until the background loader delivers; the transport
/// stays unready until then, so nothing moves or draws for this clip.
#[derive(Debug, Clone, Default)]
pub struct ClipSlot {
    /// Decoded frames, shared with nothing else (Arc for cheap cloning)
    pub media: Option<Arc<LoadedClip>>,
    /// Playback transport commanded by the controller's effects
    pub transport: ClipTransport,
}

impl ClipSlot {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Attach decoded media, marking the transport ready
    pub fn attach(&mut self, media: Arc<LoadedClip>) {
        self.transport.mark_ready(media.duration, media.fps);
        self.media = Some(media);
    }

    pub fn is_ready(&self) -> bool {
        self.transport.is_ready()
    }

    /// Frame to display for the transport's current position
    ///
    /// `None` while the media is unready — the caller skips the draw.
    pub fn current_frame(&self) -> Option<image::Handle> {
        let media = self.media.as_ref()?;
        let index = self.transport.frame_index(media.frames.len())?;
        media.frames.get(index).cloned()
    }
}
