//! Playback message handlers
//!
//! Feed user events into the controller and interpret the resulting
//! effects against the clip transports. The only asynchronous effect is
//! the overlay reveal timer, which carries the epoch it was scheduled
//! under so a stale reveal is dropped by the controller.

use iced::Task;

use vista_core::{ClipId, Effect, PlaybackEvent};

use crate::ui::app::VistaApp;
use crate::ui::message::Message;

/// A hotspot marker was clicked
pub fn select(app: &mut VistaApp, clip: ClipId) -> Task<Message> {
    if !app.clips[clip.index()].is_ready() {
        log::warn!("select: {clip} not loaded yet, ignoring");
        return Task::none();
    }

    log::info!("select: playing {clip}");
    let effects = app.controller.handle(PlaybackEvent::Select(clip));
    let task = apply_effects(app, effects);
    app.refresh_scene();
    task
}

/// The overlay's back control was pressed
pub fn back(app: &mut VistaApp) -> Task<Message> {
    log::info!("back: rewinding to start");
    let effects = app.controller.handle(PlaybackEvent::Back);
    let task = apply_effects(app, effects);
    app.refresh_scene();
    task
}

/// The overlay reveal timer fired
pub fn overlay_delay_elapsed(app: &mut VistaApp, clip: ClipId, epoch: u64) -> Task<Message> {
    log::debug!("overlay: reveal timer fired for {clip} (epoch {epoch})");
    let effects = app.controller.handle(PlaybackEvent::OverlayDelayElapsed { epoch });
    let task = apply_effects(app, effects);
    app.refresh_scene();
    task
}

/// Apply controller effects to the transports, scheduling timers as needed
pub fn apply_effects(app: &mut VistaApp, effects: Vec<Effect>) -> Task<Message> {
    let mut tasks = Vec::new();

    for effect in effects {
        match effect {
            Effect::PauseAll => {
                for slot in &mut app.clips {
                    slot.transport.pause();
                }
            }
            Effect::RestartAndPlay(clip) => {
                let transport = &mut app.clips[clip.index()].transport;
                transport.seek_to_start();
                transport.play();
                app.status = format!("Playing {clip}");
            }
            Effect::Pause(clip) => {
                app.clips[clip.index()].transport.pause();
            }
            Effect::ScheduleOverlayReveal { clip, epoch } => {
                let delay = app.config.timing.overlay_delay();
                tasks.push(Task::perform(tokio::time::sleep(delay), move |_| {
                    Message::OverlayDelayElapsed { clip, epoch }
                }));
            }
        }
    }

    Task::batch(tasks)
}
