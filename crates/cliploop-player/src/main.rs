//! Cliploop - video player with a loopable repeat range
//!
//! This is the main entry point for the GUI application. It:
//! 1. Loads (or creates) the YAML config
//! 2. Builds the clock transport standing in for the media element
//! 3. Launches the iced application

mod config;
mod media;
mod ui;

use iced::{Size, Task};

use config::PlayerConfig;
use ui::message::Message;
use ui::PlayerApp;

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("cliploop-player starting up");

    let config_path = config::default_config_path();
    if !config_path.exists() {
        // First run: write the defaults so there is a file to edit
        if let Err(e) = config::save_config(&PlayerConfig::default(), &config_path) {
            log::warn!("could not write default config: {:#}", e);
        }
    }
    let config = config::load_config(&config_path);

    iced::application(
        move || (PlayerApp::new(config.clone()), Task::none()),
        update,
        view,
    )
    .subscription(subscription)
    .theme(theme)
    .title("Cliploop")
    .window_size(Size::new(720.0, 400.0))
    .run()
}

/// Update function for iced
fn update(app: &mut PlayerApp, message: Message) -> Task<Message> {
    app.update(message)
}

/// View function for iced
fn view(app: &PlayerApp) -> iced::Element<'_, Message> {
    app.view()
}

/// Subscription function for iced
fn subscription(app: &PlayerApp) -> iced::Subscription<Message> {
    app.subscription()
}

/// Theme function for iced
fn theme(app: &PlayerApp) -> iced::Theme {
    app.theme()
}
