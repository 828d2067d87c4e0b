//! Main iced application for Vista Player
//!
//! Owns the clip slots, the playback controller and the scene state, and
//! dispatches messages to the handler modules. The view is a single scene
//! canvas with the overlay panel stacked on top when active.

use iced::widget::{column, container, stack, text};
use iced::{time, Element, Fill, Subscription, Task, Theme};

use vista_core::{ClipId, PlaybackController, NUM_CLIPS};
use vista_widgets::{overlay_panel, scene, SceneState};

use super::handlers;
use super::message::Message;
use super::state::ClipSlot;
use super::theme;
use crate::config::PlayerConfig;
use crate::loader::ClipLoader;

/// Application state
pub struct VistaApp {
    /// Loaded configuration (timings, hotspots, clip sources)
    pub(crate) config: PlayerConfig,
    /// Background clip loader handle
    pub(crate) loader: ClipLoader,
    /// Per-clip transport + media slots
    pub(crate) clips: [ClipSlot; NUM_CLIPS],
    /// The playback state machine
    pub(crate) controller: PlaybackController,
    /// Scene canvas state (current frame + markers)
    pub(crate) scene: SceneState,
    /// Status message
    pub(crate) status: String,
}

impl VistaApp {
    /// Create a new application instance and kick off clip loading
    pub fn new(config: PlayerConfig, loader: ClipLoader) -> Self {
        let markers = match config.markers() {
            Ok(markers) => markers,
            Err(e) => {
                log::error!("Invalid hotspot configuration: {:#}", e);
                Vec::new()
            }
        };

        let mut scene = SceneState::with_markers(markers);
        scene.marker_color = theme::marker_color();
        scene.marker_radius = theme::marker_radius();

        for (i, source) in config.media.clips.iter().enumerate() {
            // i < NUM_CLIPS by the array type
            let Ok(clip) = ClipId::new(i) else { continue };
            if let Err(e) = loader.load(clip, source.path.clone(), source.fps) {
                log::error!("Failed to request load for {}: {}", clip, e);
            }
        }

        Self {
            config,
            loader,
            clips: Default::default(),
            controller: PlaybackController::new(),
            scene,
            status: "Loading clips...".to_string(),
        }
    }

    /// Update application state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => handlers::tick::handle(self),
            Message::HotspotSelected(clip) => handlers::playback::select(self, clip),
            Message::BackPressed => handlers::playback::back(self),
            Message::OverlayDelayElapsed { clip, epoch } => {
                handlers::playback::overlay_delay_elapsed(self, clip, epoch)
            }
            Message::FirstFrameRetry { attempt } => {
                handlers::clip_loading::first_frame_retry(self, attempt)
            }
            Message::FallbackRedraw => handlers::clip_loading::fallback_redraw(self),
        }
    }

    /// Subscribe to periodic ticks (~30/second, also the rewind tick)
    pub fn subscription(&self) -> Subscription<Message> {
        time::every(self.config.timing.tick_period()).map(|_| Message::Tick)
    }

    /// Build the view
    pub fn view(&self) -> Element<'_, Message> {
        let scene_view = scene(&self.scene, Message::HotspotSelected);

        // Overlay panel stacks over the scene only while active
        let stage: Element<'_, Message> = if self.controller.flags().overlay_active {
            stack![
                scene_view,
                overlay_panel("Thanks for watching", Message::BackPressed),
            ]
            .into()
        } else {
            scene_view
        };

        let status_bar = container(text(&self.status).size(12)).padding(5);

        column![container(stage).width(Fill).height(Fill), status_bar].into()
    }

    /// Get the theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Sync the scene canvas from the controller and transports
    ///
    /// During Overlay the last drawn frame is kept on purpose (the clip
    /// sits at its end position behind the panel). An unready clip keeps
    /// whatever frame was there before — the draw is skipped, never an
    /// error.
    pub(crate) fn refresh_scene(&mut self) {
        use vista_core::Phase;

        let flags = self.controller.flags();
        self.scene.markers_visible = flags.markers_visible;

        let shown = match self.controller.phase() {
            Phase::Playing(clip) | Phase::Rewinding(clip) => Some(clip),
            Phase::Idle => Some(ClipId::FIRST),
            Phase::Overlay { .. } => None,
        };

        if let Some(clip) = shown {
            if let Some(frame) = self.clips[clip.index()].current_frame() {
                self.scene.frame = Some(frame);
            }
        }
    }
}
