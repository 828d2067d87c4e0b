//! Clip identifiers and transports
//!
//! A `ClipTransport` models a media element's playback contract: ready
//! state, current time, duration, play/pause and seeking. The controller
//! only commands transports; it never touches pixels. Reverse playback is
//! not supported natively anywhere, so rewind is modeled as `step_back`,
//! decrementing the position in fixed steps.

use crate::error::ClipError;

/// Fixed number of clips in the scene
pub const NUM_CLIPS: usize = 3;

/// Default frame rate for clips without an explicit rate
pub const DEFAULT_FPS: f64 = 30.0;

/// Identifier for one of the three clips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClipId(usize);

impl ClipId {
    /// Create a clip id, rejecting indices outside the fixed set
    pub fn new(index: usize) -> Result<Self, ClipError> {
        if index < NUM_CLIPS {
            Ok(Self(index))
        } else {
            Err(ClipError::UnknownClip(index))
        }
    }

    /// The first clip — shown while idle
    pub const FIRST: ClipId = ClipId(0);

    /// Index into per-clip storage (always < NUM_CLIPS)
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ClipId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "clip{}", self.0 + 1)
    }
}

/// Playback transport for a single clip
///
/// Times are in seconds. `advance` and `step_back` clamp to
/// `[0, duration]` so the position can reach both endpoints exactly.
#[derive(Debug, Clone)]
pub struct ClipTransport {
    current_time: f64,
    duration: f64,
    fps: f64,
    ready: bool,
    playing: bool,
}

impl Default for ClipTransport {
    fn default() -> Self {
        Self::unloaded()
    }
}

impl ClipTransport {
    /// A transport with no media behind it yet (not ready, zero duration)
    pub fn unloaded() -> Self {
        Self {
            current_time: 0.0,
            duration: 0.0,
            fps: DEFAULT_FPS,
            ready: false,
            playing: false,
        }
    }

    /// Mark the media ready once at least one frame is decodable
    pub fn mark_ready(&mut self, duration: f64, fps: f64) {
        self.duration = duration.max(0.0);
        self.fps = if fps > 0.0 { fps } else { DEFAULT_FPS };
        self.ready = true;
    }

    /// Whether at least one frame can be rendered
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Reset the position to time zero (does not change play state)
    pub fn seek_to_start(&mut self) {
        self.current_time = 0.0;
    }

    /// Advance the position by `dt` seconds while playing
    ///
    /// Returns `true` when the position reaches the duration (end of
    /// stream). The position clamps at the duration; a paused or unready
    /// transport does not move.
    pub fn advance(&mut self, dt: f64) -> bool {
        if !self.playing || !self.ready {
            return false;
        }
        self.current_time = (self.current_time + dt).min(self.duration);
        self.current_time >= self.duration
    }

    /// Step the position backwards by `step` seconds (rewind tick)
    ///
    /// Returns `true` when the position reaches exactly zero. Works
    /// regardless of play state since rewind runs on a paused transport.
    pub fn step_back(&mut self, step: f64) -> bool {
        self.current_time = (self.current_time - step).max(0.0);
        self.current_time <= 0.0
    }

    /// Frame index to display for the current position
    ///
    /// `None` until the media is ready or when `frame_count` is zero.
    /// Clamped to the last frame so the end position stays renderable.
    pub fn frame_index(&self, frame_count: usize) -> Option<usize> {
        if !self.ready || frame_count == 0 {
            return None;
        }
        let index = (self.current_time * self.fps).floor() as usize;
        Some(index.min(frame_count - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_id_bounds() {
        assert!(ClipId::new(0).is_ok());
        assert!(ClipId::new(2).is_ok());
        assert_eq!(ClipId::new(3), Err(ClipError::UnknownClip(3)));
    }

    #[test]
    fn test_clip_id_display() {
        let clip = ClipId::new(1).unwrap();
        assert_eq!(clip.to_string(), "clip2");
    }

    #[test]
    fn test_unready_transport_does_not_move() {
        let mut t = ClipTransport::unloaded();
        t.play();
        assert!(!t.advance(0.1));
        assert_eq!(t.current_time(), 0.0);
        assert!(t.frame_index(10).is_none());
    }

    #[test]
    fn test_advance_clamps_at_duration() {
        let mut t = ClipTransport::unloaded();
        t.mark_ready(1.0, 30.0);
        t.play();
        assert!(!t.advance(0.5));
        assert!(t.advance(0.7));
        assert_eq!(t.current_time(), 1.0);
        // Clamped to the last frame even at the end position
        assert_eq!(t.frame_index(30), Some(29));
    }

    #[test]
    fn test_paused_transport_does_not_advance() {
        let mut t = ClipTransport::unloaded();
        t.mark_ready(1.0, 30.0);
        assert!(!t.advance(0.5));
        assert_eq!(t.current_time(), 0.0);
    }

    #[test]
    fn test_step_back_reaches_exact_zero() {
        let mut t = ClipTransport::unloaded();
        t.mark_ready(1.0, 30.0);
        t.play();
        t.advance(0.1);
        t.pause();

        let mut steps = 0;
        while !t.step_back(0.033) {
            steps += 1;
            assert!(steps < 100, "rewind never reached zero");
            // Monotonically decreasing
            assert!(t.current_time() < 0.1);
        }
        assert_eq!(t.current_time(), 0.0);
    }

    #[test]
    fn test_frame_index_tracks_position() {
        let mut t = ClipTransport::unloaded();
        t.mark_ready(2.0, 30.0);
        t.play();
        t.advance(0.5);
        assert_eq!(t.frame_index(60), Some(15));
    }

    #[test]
    fn test_zero_fps_falls_back_to_default() {
        let mut t = ClipTransport::unloaded();
        t.mark_ready(1.0, 0.0);
        assert_eq!(t.frame_index(30), Some(0));
        t.play();
        t.advance(0.5);
        assert_eq!(t.frame_index(30), Some(15));
    }
}
