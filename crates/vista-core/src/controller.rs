//! Playback controller state machine
//!
//! Playback state lives in a single phase enum rather than a record of
//! mutable booleans toggled from event callbacks: `handle` consumes an
//! event, moves between phases, and returns a list of effects for the UI
//! layer to interpret (transport commands and the delayed overlay reveal).
//! Events that arrive in the wrong phase fall through an exhaustive match,
//! so a second click during an in-flight transition is structurally a
//! no-op.
//!
//! ## Phases
//!
//! ```text
//! Idle ──select──▶ Playing ──ended──▶ Overlay ──back──▶ Rewinding
//!  ▲                                  (reveal after delay)    │
//!  └──────────────────── rewind reaches zero ◀────────────────┘
//! ```
//!
//! ## Cancellation
//!
//! Every selection bumps a playback epoch. The overlay-reveal timer carries
//! the epoch it was scheduled under; a reveal arriving after a newer
//! selection no longer matches and is dropped. Timers never need
//! cancellation handles.

use crate::clip::ClipId;

/// Playback phase — at most one clip is active at a time by construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Markers visible, first clip's first frame on screen
    #[default]
    Idle,
    /// A clip is playing forward; markers hidden
    Playing(ClipId),
    /// The clip finished; the panel becomes visible after the reveal delay
    Overlay {
        clip: ClipId,
        /// False between end-of-stream and the delayed reveal
        visible: bool,
    },
    /// Stepping the clip's position back to zero
    Rewinding(ClipId),
}

/// Events fed into the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// A hotspot marker was clicked
    Select(ClipId),
    /// The active clip reached its duration
    Ended,
    /// The overlay reveal timer fired (tagged with its scheduling epoch)
    OverlayDelayElapsed { epoch: u64 },
    /// The back control was triggered
    Back,
    /// The rewind stepped the position to exactly zero
    RewindFinished,
}

/// Effects for the UI layer to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Pause every transport (selection stops whatever was running)
    PauseAll,
    /// Seek the clip to zero and start playback
    RestartAndPlay(ClipId),
    /// Pause the clip (end of stream, or before rewinding)
    Pause(ClipId),
    /// Start the overlay reveal timer, tagged with the current epoch
    ScheduleOverlayReveal { clip: ClipId, epoch: u64 },
}

/// Boolean projection of the phase for the view layer
///
/// `is_playing` and `is_rewinding` cannot both be true — they come from
/// the same enum discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackFlags {
    pub is_playing: bool,
    pub is_rewinding: bool,
    pub markers_visible: bool,
    pub overlay_active: bool,
    pub active_clip: Option<ClipId>,
}

/// The playback controller: current phase plus the cancellation epoch
#[derive(Debug, Clone, Default)]
pub struct PlaybackController {
    phase: Phase,
    epoch: u64,
}

impl PlaybackController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The clip currently owned by a non-idle phase
    pub fn active_clip(&self) -> Option<ClipId> {
        match self.phase {
            Phase::Idle => None,
            Phase::Playing(clip) | Phase::Rewinding(clip) => Some(clip),
            Phase::Overlay { clip, .. } => Some(clip),
        }
    }

    /// Derive the displayable flags from the phase
    pub fn flags(&self) -> PlaybackFlags {
        PlaybackFlags {
            is_playing: matches!(self.phase, Phase::Playing(_)),
            is_rewinding: matches!(self.phase, Phase::Rewinding(_)),
            markers_visible: matches!(self.phase, Phase::Idle),
            overlay_active: matches!(self.phase, Phase::Overlay { visible: true, .. }),
            active_clip: self.active_clip(),
        }
    }

    /// Apply one event; returns the effects the UI must carry out
    ///
    /// Events that do not apply to the current phase are no-ops returning
    /// no effects.
    pub fn handle(&mut self, event: PlaybackEvent) -> Vec<Effect> {
        match (self.phase, event) {
            // Selection is valid whenever nothing is playing or rewinding.
            // During Overlay the markers are hidden, so this only happens
            // programmatically, but the transition is still well-defined
            // (it dismisses the overlay by leaving the phase).
            (Phase::Idle, PlaybackEvent::Select(clip))
            | (Phase::Overlay { .. }, PlaybackEvent::Select(clip)) => {
                self.epoch += 1;
                self.phase = Phase::Playing(clip);
                log::debug!("playback: select {clip} (epoch {})", self.epoch);
                vec![Effect::PauseAll, Effect::RestartAndPlay(clip)]
            }

            (Phase::Playing(clip), PlaybackEvent::Ended) => {
                self.phase = Phase::Overlay {
                    clip,
                    visible: false,
                };
                log::debug!("playback: {clip} ended, scheduling overlay reveal");
                vec![
                    Effect::Pause(clip),
                    Effect::ScheduleOverlayReveal {
                        clip,
                        epoch: self.epoch,
                    },
                ]
            }

            (
                Phase::Overlay {
                    clip,
                    visible: false,
                },
                PlaybackEvent::OverlayDelayElapsed { epoch },
            ) => {
                if epoch == self.epoch {
                    self.phase = Phase::Overlay {
                        clip,
                        visible: true,
                    };
                } else {
                    log::debug!(
                        "playback: dropping stale overlay reveal (epoch {epoch} != {})",
                        self.epoch
                    );
                }
                vec![]
            }

            (Phase::Overlay { clip, .. }, PlaybackEvent::Back) => {
                self.phase = Phase::Rewinding(clip);
                log::debug!("playback: rewinding {clip}");
                vec![Effect::Pause(clip)]
            }

            (Phase::Rewinding(clip), PlaybackEvent::RewindFinished) => {
                self.phase = Phase::Idle;
                log::debug!("playback: {clip} rewound to start, back to idle");
                vec![]
            }

            // No-ops: wrong phase for the event (guarded transitions)
            _ => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clip::{ClipTransport, NUM_CLIPS};

    fn clip(index: usize) -> ClipId {
        ClipId::new(index).unwrap()
    }

    /// Minimal effect interpreter over a bank of transports, mirroring
    /// what the player's handlers do.
    struct Harness {
        controller: PlaybackController,
        transports: [ClipTransport; NUM_CLIPS],
        pending_reveal: Option<(ClipId, u64)>,
    }

    impl Harness {
        fn new() -> Self {
            let mut transports: [ClipTransport; NUM_CLIPS] = Default::default();
            for t in &mut transports {
                t.mark_ready(1.0, 30.0);
            }
            Self {
                controller: PlaybackController::new(),
                transports,
                pending_reveal: None,
            }
        }

        fn send(&mut self, event: PlaybackEvent) {
            for effect in self.controller.handle(event) {
                match effect {
                    Effect::PauseAll => {
                        for t in &mut self.transports {
                            t.pause();
                        }
                    }
                    Effect::RestartAndPlay(clip) => {
                        let t = &mut self.transports[clip.index()];
                        t.seek_to_start();
                        t.play();
                    }
                    Effect::Pause(clip) => self.transports[clip.index()].pause(),
                    Effect::ScheduleOverlayReveal { clip, epoch } => {
                        self.pending_reveal = Some((clip, epoch));
                    }
                }
            }
        }

        fn fire_reveal(&mut self) {
            if let Some((_, epoch)) = self.pending_reveal.take() {
                self.send(PlaybackEvent::OverlayDelayElapsed { epoch });
            }
        }
    }

    #[test]
    fn test_select_while_playing_is_noop() {
        let mut h = Harness::new();
        h.send(PlaybackEvent::Select(clip(0)));
        let before = h.controller.phase();

        for i in 0..NUM_CLIPS {
            h.send(PlaybackEvent::Select(clip(i)));
        }
        assert_eq!(h.controller.phase(), before);
        assert!(h.transports[0].is_playing());
    }

    #[test]
    fn test_select_while_rewinding_is_noop() {
        let mut h = Harness::new();
        h.send(PlaybackEvent::Select(clip(1)));
        h.send(PlaybackEvent::Ended);
        h.fire_reveal();
        h.send(PlaybackEvent::Back);
        assert!(h.controller.flags().is_rewinding);

        h.send(PlaybackEvent::Select(clip(0)));
        assert!(h.controller.flags().is_rewinding);
        assert_eq!(h.controller.active_clip(), Some(clip(1)));
    }

    #[test]
    fn test_select_plays_exactly_one_clip() {
        let mut h = Harness::new();
        // Leave another transport playing to verify PauseAll
        h.transports[2].play();

        h.send(PlaybackEvent::Select(clip(1)));
        let playing: Vec<usize> = (0..NUM_CLIPS)
            .filter(|&i| h.transports[i].is_playing())
            .collect();
        assert_eq!(playing, vec![1]);

        let flags = h.controller.flags();
        assert!(flags.is_playing);
        assert!(!flags.markers_visible);
        assert!(!flags.overlay_active);
        assert_eq!(h.transports[1].current_time(), 0.0);
    }

    #[test]
    fn test_ended_reveals_overlay_after_delay() {
        let mut h = Harness::new();
        h.send(PlaybackEvent::Select(clip(0)));
        h.send(PlaybackEvent::Ended);

        // Not visible until the delay fires
        assert!(!h.controller.flags().overlay_active);
        assert!(!h.transports[0].is_playing());

        h.fire_reveal();
        assert!(h.controller.flags().overlay_active);
        assert!(!h.controller.flags().markers_visible);
    }

    #[test]
    fn test_stale_reveal_is_dropped() {
        let mut h = Harness::new();
        h.send(PlaybackEvent::Select(clip(0)));
        h.send(PlaybackEvent::Ended);
        let stale = h.pending_reveal.take();

        // A new selection supersedes the finished playback
        h.send(PlaybackEvent::Select(clip(1)));
        if let Some((_, epoch)) = stale {
            h.send(PlaybackEvent::OverlayDelayElapsed { epoch });
        }

        // Still playing clip 2; the stale reveal changed nothing
        assert!(h.controller.flags().is_playing);
        assert_eq!(h.controller.active_clip(), Some(clip(1)));
        assert!(!h.controller.flags().overlay_active);
    }

    #[test]
    fn test_back_outside_overlay_is_noop() {
        let mut h = Harness::new();
        h.send(PlaybackEvent::Back);
        assert_eq!(h.controller.phase(), Phase::Idle);

        h.send(PlaybackEvent::Select(clip(0)));
        h.send(PlaybackEvent::Back);
        assert!(h.controller.flags().is_playing);
    }

    #[test]
    fn test_ended_outside_playing_is_noop() {
        let mut h = Harness::new();
        h.send(PlaybackEvent::Ended);
        assert_eq!(h.controller.phase(), Phase::Idle);
        assert!(h.pending_reveal.is_none());
    }

    #[test]
    fn test_rewind_steps_down_to_zero_then_idle() {
        let mut h = Harness::new();
        h.send(PlaybackEvent::Select(clip(2)));

        // Play to the end
        while !h.transports[2].advance(0.033) {}
        h.send(PlaybackEvent::Ended);
        h.fire_reveal();
        h.send(PlaybackEvent::Back);
        assert!(h.controller.flags().is_rewinding);
        assert!(!h.transports[2].is_playing());

        // Step back until zero, monotonically
        let mut last = h.transports[2].current_time();
        loop {
            let done = h.transports[2].step_back(0.033);
            assert!(h.transports[2].current_time() <= last);
            last = h.transports[2].current_time();
            if done {
                break;
            }
        }
        assert_eq!(h.transports[2].current_time(), 0.0);

        h.send(PlaybackEvent::RewindFinished);
        let flags = h.controller.flags();
        assert!(!flags.is_rewinding);
        assert!(!flags.is_playing);
        assert!(flags.markers_visible);
        assert_eq!(flags.active_clip, None);
    }

    #[test]
    fn test_full_scenario_select_end_back() {
        // The end-to-end walk: select clip 2, let it end, reveal, back,
        // rewind to zero, idle again.
        let mut h = Harness::new();

        h.send(PlaybackEvent::Select(clip(1)));
        let flags = h.controller.flags();
        assert!(flags.is_playing);
        assert_eq!(flags.active_clip, Some(clip(1)));
        assert!(!flags.markers_visible);

        while !h.transports[1].advance(0.033) {}
        h.send(PlaybackEvent::Ended);
        h.fire_reveal();
        assert!(h.controller.flags().overlay_active);

        h.send(PlaybackEvent::Back);
        assert!(h.controller.flags().is_rewinding);
        assert!(!h.controller.flags().overlay_active);

        while !h.transports[1].step_back(0.033) {}
        h.send(PlaybackEvent::RewindFinished);

        let flags = h.controller.flags();
        assert_eq!(
            flags,
            PlaybackFlags {
                is_playing: false,
                is_rewinding: false,
                markers_visible: true,
                overlay_active: false,
                active_clip: None,
            }
        );
    }

    #[test]
    fn test_reselect_after_full_cycle() {
        let mut h = Harness::new();
        h.send(PlaybackEvent::Select(clip(0)));
        h.send(PlaybackEvent::Ended);
        h.fire_reveal();
        h.send(PlaybackEvent::Back);
        h.send(PlaybackEvent::RewindFinished);

        h.send(PlaybackEvent::Select(clip(2)));
        assert!(h.controller.flags().is_playing);
        assert_eq!(h.controller.active_clip(), Some(clip(2)));
    }
}
