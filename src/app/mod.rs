mod messages;
mod starfield;
mod state;
mod update;
mod view;

use crate::config::AppConfig;
use state::App;
use crate::content::WINDOW_TITLE;
use horizons_core::SlideDeck;
use iced::{Size, window};
use std::path::PathBuf;

/// Helper to launch the app with the loaded deck and config.
pub fn run_app(config: AppConfig, deck: SlideDeck, preferences_path: PathBuf) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        min_size: Some(Size::new(state::MIN_WINDOW_WIDTH, state::MIN_WINDOW_HEIGHT)),
        exit_on_close_request: false,
        ..window::Settings::default()
    };

    iced::application(WINDOW_TITLE, App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(App::theme)
        .run_with(move || App::bootstrap(config, deck, preferences_path))
}
