//! Vista Player - interactive hotspot video player
//!
//! This is the main entry point for the GUI application. It:
//! 1. Loads the YAML configuration and theme
//! 2. Spawns the background clip loader thread
//! 3. Launches the iced GUI application

mod config;
mod loader;
mod ui;

use iced::{Size, Task};

use loader::ClipLoader;
use ui::{message::Message, theme, VistaApp};

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("vista-player starting up");

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║                      Vista Player                             ║");
    println!("║            interactive hotspot video playback                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let config_path = config::default_config_path();
    let config: config::PlayerConfig = config::load_config(&config_path);

    let window_size = Size::new(config.display.window_width, config.display.window_height);

    // Initialize theme from ~/.config/vista-player/theme.yaml
    theme::init_theme();

    // Spawn the clip loader thread before the UI so decoding overlaps
    // with window creation
    let clip_loader = match ClipLoader::spawn() {
        Ok(loader) => loader,
        Err(e) => {
            log::error!("Failed to spawn clip loader: {:#}", e);
            eprintln!("Error: could not start the clip loader thread: {}", e);
            std::process::exit(1);
        }
    };

    println!("Starting Vista Player GUI...");

    // Wrap resources in cells so the boot closure can be Fn (required by iced)
    // The boot function is only called once, but iced requires Fn for API consistency
    let config_cell = std::cell::RefCell::new(Some(config));
    let loader_cell = std::cell::RefCell::new(Some(clip_loader));

    iced::application(
        move || {
            // Boot function: take ownership from the cells (only called once)
            let config = config_cell
                .borrow_mut()
                .take()
                .expect("config already taken");
            let clip_loader = loader_cell
                .borrow_mut()
                .take()
                .expect("clip loader already taken");

            let retry_interval = config.timing.retry_interval();
            let fallback_delay = config.timing.fallback_delay();
            let app = VistaApp::new(config, clip_loader);

            // The idle backdrop may not be decodable yet: retry a bounded
            // number of times, plus one unconditional fallback redraw.
            let startup_task = Task::batch([
                Task::perform(tokio::time::sleep(retry_interval), |_| {
                    Message::FirstFrameRetry { attempt: 1 }
                }),
                Task::perform(tokio::time::sleep(fallback_delay), |_| {
                    Message::FallbackRedraw
                }),
            ]);

            (app, startup_task)
        },
        update,
        view,
    )
    .subscription(subscription)
    .theme(app_theme)
    .title("Vista Player")
    .window_size(window_size)
    .run()
}

/// Update function for iced
fn update(app: &mut VistaApp, message: Message) -> Task<Message> {
    app.update(message)
}

/// View function for iced
fn view(app: &VistaApp) -> iced::Element<'_, Message> {
    app.view()
}

/// Subscription function for iced
fn subscription(app: &VistaApp) -> iced::Subscription<Message> {
    app.subscription()
}

/// Theme function for iced
fn app_theme(app: &VistaApp) -> iced::Theme {
    app.theme()
}
