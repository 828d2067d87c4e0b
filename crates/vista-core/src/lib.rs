//! Core playback logic for the Vista hotspot player
//!
//! This crate is GUI-free. It provides:
//!
//! - **Clip transports**: the small "media element" contract the controller
//!   drives — ready state, current time, duration, play/pause/seek and the
//!   stepwise rewind used to simulate reverse playback.
//! - **Playback controller**: an explicit state machine over playback
//!   phases (`Idle`, `Playing`, `Overlay`, `Rewinding`). Transitions are
//!   pure: `(phase, event)` in, `(phase, effects)` out. The UI layer
//!   interprets the effects against the transports and timers.
//!
//! Frame pixels never live here; the player crate owns decoded frames and
//! asks a transport which frame index to show.

pub mod clip;
pub mod controller;
pub mod error;

pub use clip::{ClipId, ClipTransport, DEFAULT_FPS, NUM_CLIPS};
pub use controller::{Effect, Phase, PlaybackController, PlaybackEvent, PlaybackFlags};
pub use error::ClipError;
