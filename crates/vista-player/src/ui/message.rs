//! Application messages for vista-player
//!
//! All message types that can be dispatched in the vista-player application.

use vista_core::ClipId;

/// Messages that can be sent to the application
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Tick for periodic UI updates (playback advance, rewind stepping,
    /// loader polling, frame redraw)
    Tick,
    /// A hotspot marker was clicked
    HotspotSelected(ClipId),
    /// The overlay's back control was pressed
    BackPressed,
    /// The post-end overlay delay elapsed (tagged with its epoch so a
    /// reveal for a superseded playback is dropped)
    OverlayDelayElapsed { clip: ClipId, epoch: u64 },
    /// Bounded startup retry for drawing the first clip's first frame
    FirstFrameRetry { attempt: u32 },
    /// One-shot unconditional redraw attempt after startup
    FallbackRedraw,
}
