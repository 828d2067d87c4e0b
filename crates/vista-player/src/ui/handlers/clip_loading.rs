//! Clip loading handlers
//!
//! Applies background loader results to the clip slots, plus the two
//! startup redraw paths: a bounded retry loop for the first clip's first
//! frame and a one-shot fallback redraw.

use std::sync::Arc;

use iced::Task;

use vista_core::ClipId;

use crate::loader::ClipLoadResult;
use crate::ui::app::VistaApp;
use crate::ui::message::Message;

/// Apply one loader result to its clip slot
pub fn apply(app: &mut VistaApp, result: ClipLoadResult) {
    match result.result {
        Ok(media) => {
            let clip = result.clip;
            log::info!(
                "clip_loading: {clip} ready - {} frames, {:.2}s at {} fps",
                media.frames.len(),
                media.duration,
                media.fps
            );
            app.clips[clip.index()].attach(Arc::new(media));

            let ready = app.clips.iter().filter(|slot| slot.is_ready()).count();
            app.status = if ready == app.clips.len() {
                "Ready".to_string()
            } else {
                format!("Loaded {ready}/{} clips", app.clips.len())
            };

            // The first clip's first frame is the idle backdrop
            if clip == ClipId::FIRST {
                app.refresh_scene();
            }
        }
        Err(e) => {
            log::error!("clip_loading: {} failed to load: {}", result.clip, e);
            app.status = format!("Failed to load {}: {}", result.clip, e);
        }
    }
}

/// Outcome of one startup retry attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RetryOutcome {
    /// The idle backdrop is drawable; stop retrying
    Ready,
    /// Schedule the next attempt
    Again(u32),
    /// Retry budget exhausted
    GaveUp,
}

fn next_retry(app: &VistaApp, attempt: u32) -> RetryOutcome {
    if app.clips[ClipId::FIRST.index()].is_ready() {
        RetryOutcome::Ready
    } else if attempt < app.config.timing.ready_retry_count {
        RetryOutcome::Again(attempt + 1)
    } else {
        RetryOutcome::GaveUp
    }
}

/// Bounded retry loop for drawing the idle backdrop on startup
pub fn first_frame_retry(app: &mut VistaApp, attempt: u32) -> Task<Message> {
    match next_retry(app, attempt) {
        RetryOutcome::Ready => {
            log::debug!("first_frame_retry: ready on attempt {attempt}");
            app.refresh_scene();
            Task::none()
        }
        RetryOutcome::Again(next) => {
            let interval = app.config.timing.retry_interval();
            Task::perform(tokio::time::sleep(interval), move |_| {
                Message::FirstFrameRetry { attempt: next }
            })
        }
        RetryOutcome::GaveUp => {
            log::warn!("first_frame_retry: gave up after {attempt} attempts");
            Task::none()
        }
    }
}

/// One-shot unconditional redraw attempt after startup
pub fn fallback_redraw(app: &mut VistaApp) -> Task<Message> {
    log::debug!("fallback_redraw: refreshing scene");
    app.refresh_scene();
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlayerConfig;
    use crate::loader::{ClipLoader, LoadedClip};
    use iced::widget::image;

    fn test_app() -> VistaApp {
        let loader = ClipLoader::spawn().unwrap();
        VistaApp::new(PlayerConfig::default(), loader)
    }

    fn test_media(frame_count: usize) -> LoadedClip {
        LoadedClip {
            frames: (0..frame_count)
                .map(|_| image::Handle::from_rgba(1, 1, vec![0u8; 4]))
                .collect(),
            fps: 30.0,
            duration: frame_count as f64 / 30.0,
        }
    }

    #[test]
    fn test_retry_reschedules_until_bound() {
        let app = test_app();
        let max = app.config.timing.ready_retry_count;

        assert_eq!(next_retry(&app, 1), RetryOutcome::Again(2));
        assert_eq!(next_retry(&app, max - 1), RetryOutcome::Again(max));
        assert_eq!(next_retry(&app, max), RetryOutcome::GaveUp);
    }

    #[test]
    fn test_retry_stops_once_ready() {
        let mut app = test_app();
        app.clips[ClipId::FIRST.index()].attach(Arc::new(test_media(3)));
        assert_eq!(next_retry(&app, 1), RetryOutcome::Ready);

        // The ready path draws the idle backdrop
        assert!(app.scene.frame.is_none());
        let _ = first_frame_retry(&mut app, 1);
        assert!(app.scene.frame.is_some());
    }
}
