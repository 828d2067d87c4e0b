//! Message handlers for vista-player
//!
//! Each module handles one family of messages against the shared
//! `VistaApp` state. The controller decides, the handlers execute:
//! effects coming out of the state machine are applied to the clip
//! transports (and timers scheduled) here, never inside the controller.

pub mod clip_loading;
pub mod playback;
pub mod tick;
