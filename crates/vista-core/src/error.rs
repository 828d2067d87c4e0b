//! Error types for vista-core

use thiserror::Error;

/// Errors from clip identification and transport setup
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipError {
    /// A hotspot or config entry referenced a clip index outside the fixed set
    #[error("unknown clip index {0} (expected 0..{max})", max = crate::NUM_CLIPS)]
    UnknownClip(usize),

    /// A clip directory decoded to zero frames
    #[error("clip {0} has no decodable frames")]
    EmptyClip(crate::ClipId),
}
