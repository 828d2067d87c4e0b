//! Background clip loader for Vista Player
//!
//! Decoding a few hundred frame images takes long enough to stall the UI,
//! so loading runs on a dedicated thread. Requests and results travel over
//! mpsc channels; the tick handler polls `try_recv` and applies finished
//! loads on the UI thread.
//!
//! Each clip is a directory of numbered frame images (png/jpg), decoded
//! with the `image` crate and handed to iced as RGBA image handles.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result};
use iced::widget::image;

use vista_core::{ClipError, ClipId, DEFAULT_FPS};

/// Request to load a clip's frame sequence in the background
#[derive(Debug)]
pub struct ClipLoadRequest {
    pub clip: ClipId,
    /// Directory containing the frame sequence
    pub path: PathBuf,
    /// Frame rate the sequence was extracted at
    pub fps: f64,
}

/// A fully decoded clip
#[derive(Debug, Clone)]
pub struct LoadedClip {
    /// Frames in playback order
    pub frames: Vec<image::Handle>,
    pub fps: f64,
    /// Duration in seconds derived from frame count and rate
    pub duration: f64,
}

impl LoadedClip {
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

/// Result of a background clip load
pub struct ClipLoadResult {
    pub clip: ClipId,
    pub result: Result<LoadedClip, String>,
}

/// Handle to the background loader thread
pub struct ClipLoader {
    tx: Sender<ClipLoadRequest>,
    rx: Receiver<ClipLoadResult>,
    /// Thread handle (for graceful shutdown)
    _handle: JoinHandle<()>,
}

impl ClipLoader {
    /// Spawn the background loader thread
    pub fn spawn() -> Result<Self> {
        let (request_tx, request_rx) = std::sync::mpsc::channel::<ClipLoadRequest>();
        let (result_tx, result_rx) = std::sync::mpsc::channel::<ClipLoadResult>();

        let handle = thread::Builder::new()
            .name("clip-loader".to_string())
            .spawn(move || {
                loader_thread(request_rx, result_tx);
            })
            .context("Failed to spawn clip loader thread")?;

        log::info!("ClipLoader spawned");

        Ok(Self {
            tx: request_tx,
            rx: result_rx,
            _handle: handle,
        })
    }

    /// Request loading a clip (non-blocking)
    pub fn load(&self, clip: ClipId, path: PathBuf, fps: f64) -> Result<(), String> {
        self.tx
            .send(ClipLoadRequest { clip, path, fps })
            .map_err(|e| format!("Loader thread disconnected: {}", e))
    }

    /// Try to receive a completed load result (non-blocking)
    pub fn try_recv(&self) -> Option<ClipLoadResult> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                log::error!("Loader thread disconnected unexpectedly");
                None
            }
        }
    }
}

/// The background loader thread function
fn loader_thread(rx: Receiver<ClipLoadRequest>, tx: Sender<ClipLoadResult>) {
    log::info!("Clip loader thread started");

    while let Ok(request) = rx.recv() {
        handle_clip_load(request, &tx);
    }

    log::info!("Clip loader thread shutting down");
}

/// Handle a single clip load request
fn handle_clip_load(request: ClipLoadRequest, tx: &Sender<ClipLoadResult>) {
    log::info!(
        "Loader: decoding {} from {:?} at {} fps",
        request.clip,
        request.path,
        request.fps
    );
    let start = std::time::Instant::now();

    let fps = if request.fps > 0.0 {
        request.fps
    } else {
        DEFAULT_FPS
    };

    let result = load_frame_dir(&request.path).and_then(|frames| {
        if frames.is_empty() {
            return Err(ClipError::EmptyClip(request.clip).to_string());
        }
        let duration = frames.len() as f64 / fps;
        Ok(LoadedClip {
            frames,
            fps,
            duration,
        })
    });

    match &result {
        Ok(clip) => log::info!(
            "Loader: {} ready - {} frames, {:.2}s, decoded in {:?}",
            request.clip,
            clip.frame_count(),
            clip.duration,
            start.elapsed()
        ),
        Err(e) => log::error!("Loader: failed to load {}: {}", request.clip, e),
    }

    let _ = tx.send(ClipLoadResult {
        clip: request.clip,
        result,
    });
}

/// Decode every frame image in a directory, sorted by file name
///
/// Frame sequences are expected to be zero-padded (frame_0001.png, ...)
/// so lexicographic order is playback order.
fn load_frame_dir(dir: &Path) -> Result<Vec<image::Handle>, String> {
    let entries =
        std::fs::read_dir(dir).map_err(|e| format!("cannot read clip dir {:?}: {}", dir, e))?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            matches!(
                path.extension().and_then(|ext| ext.to_str()),
                Some("png" | "jpg" | "jpeg" | "bmp")
            )
        })
        .collect();
    paths.sort();

    let mut frames = Vec::with_capacity(paths.len());
    for path in &paths {
        let decoded = ::image::open(path)
            .map_err(|e| format!("cannot decode frame {:?}: {}", path, e))?
            .to_rgba8();
        let (width, height) = decoded.dimensions();
        frames.push(image::Handle::from_rgba(width, height, decoded.into_raw()));
    }

    Ok(frames)
}
