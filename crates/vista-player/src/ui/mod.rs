//! UI module for Vista Player
//!
//! Built with iced - a cross-platform GUI library for Rust.
//! Uses a message-passing architecture: the playback controller emits
//! effects, the handlers interpret them against the clip transports.

pub mod app;
pub mod handlers;
pub mod message;
pub mod state;
pub mod theme;

pub use app::VistaApp;
