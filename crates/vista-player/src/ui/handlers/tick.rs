//! Periodic tick handler
//!
//! One 33 ms tick drives everything time-based: polling the loader,
//! advancing forward playback, stepping the rewind, and refreshing the
//! scene frame.

use iced::Task;

use vista_core::{Phase, PlaybackEvent};

use super::{clip_loading, playback};
use crate::ui::app::VistaApp;
use crate::ui::message::Message;

pub fn handle(app: &mut VistaApp) -> Task<Message> {
    // Drain loader results first so a clip can become ready and start
    // drawing on the same tick.
    loop {
        let Some(result) = app.loader.try_recv() else {
            break;
        };
        clip_loading::apply(app, result);
    }

    let mut task = Task::none();

    match app.controller.phase() {
        Phase::Playing(clip) => {
            let ended = app.clips[clip.index()]
                .transport
                .advance(app.config.timing.tick_advance());
            if ended {
                log::debug!("tick: {clip} reached its end");
                let effects = app.controller.handle(PlaybackEvent::Ended);
                task = playback::apply_effects(app, effects);
            }
        }
        Phase::Rewinding(clip) => {
            let done = app.clips[clip.index()]
                .transport
                .step_back(app.config.timing.rewind_step);
            if done {
                log::debug!("tick: {clip} rewound to zero");
                let effects = app.controller.handle(PlaybackEvent::RewindFinished);
                task = playback::apply_effects(app, effects);
            }
        }
        Phase::Idle | Phase::Overlay { .. } => {}
    }

    app.refresh_scene();
    task
}
