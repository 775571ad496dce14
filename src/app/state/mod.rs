mod constants;
mod forms;
mod hero;
mod ui;

use crate::config::AppConfig;
use crate::routes::Route;
use horizons_core::{MotionPolicy, SlideDeck, Starfield};
use iced::{Task, window};
use std::path::PathBuf;

use super::messages::Message;

pub(crate) use constants::*;
pub(in crate::app) use forms::{ContactField, ContactForm, FormError, NewsletterField, NewsletterForm};
pub(in crate::app) use hero::HeroState;
pub(in crate::app) use ui::{ToastState, WindowState};

/// Core application state composed of sub-models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) route: Route,
    pub(super) deck: SlideDeck,
    pub(super) hero: HeroState,
    pub(super) newsletter: NewsletterForm,
    pub(super) contact: ContactForm,
    pub(super) toasts: ToastState,
    pub(super) window: WindowState,
    pub(super) starfield: Starfield,
    pub(super) preferences_path: PathBuf,
}

impl App {
    pub(super) fn bootstrap(
        mut config: AppConfig,
        deck: SlideDeck,
        preferences_path: PathBuf,
    ) -> (App, Task<Message>) {
        clamp_config(&mut config);
        let hero = HeroState::new(deck.len(), &config.end_anchor, config.reduced_motion);
        let app = App {
            route: Route::Home,
            hero,
            deck,
            newsletter: NewsletterForm::default(),
            contact: ContactForm::default(),
            toasts: ToastState::default(),
            window: WindowState {
                width: config.window_width,
                height: config.window_height,
            },
            starfield: Starfield::default(),
            preferences_path,
            config,
        };
        tracing::info!(
            slides = app.deck.len(),
            reduced_motion = app.config.reduced_motion,
            theme = %app.config.theme,
            "Initialized app state"
        );

        // Measure the real viewport once the window exists; resize events keep it fresh.
        let measure = window::get_latest()
            .and_then(window::get_size)
            .map(|size| Message::WindowResized {
                width: size.width,
                height: size.height,
            });
        (app, measure)
    }

    pub(super) fn motion_policy(&self) -> MotionPolicy {
        self.config.motion_policy()
    }

    /// The starfield turns behind content pages in night mode unless motion is reduced.
    pub(super) fn starfield_spinning(&self) -> bool {
        self.route != Route::Home
            && self.config.theme == crate::config::ThemeMode::Night
            && !self.config.reduced_motion
    }

    pub(super) fn theme(&self) -> iced::Theme {
        crate::theme::Theme::from(self.config.theme).into()
    }
}

fn clamp_config(config: &mut AppConfig) {
    fn normalize_key_binding(value: &mut String, fallback: String) {
        let normalized = value.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            *value = fallback;
        } else {
            *value = normalized;
        }
    }

    config.smooth_scroll_ms = config.smooth_scroll_ms.min(MAX_SMOOTH_SCROLL_MS);
    config.slide_transition_ms = config.slide_transition_ms.min(MAX_TRANSITION_MS);
    config.content_transition_ms = config.content_transition_ms.min(MAX_TRANSITION_MS);
    config.window_width = if config.window_width.is_finite() {
        config.window_width.clamp(MIN_WINDOW_WIDTH, 7680.0)
    } else {
        MIN_WINDOW_WIDTH
    };
    config.window_height = if config.window_height.is_finite() {
        config.window_height.clamp(MIN_WINDOW_HEIGHT, 4320.0)
    } else {
        MIN_WINDOW_HEIGHT
    };
    config.toast_secs = config.toast_secs.clamp(1, 60);
    let anchor = config.end_anchor.trim().trim_start_matches('#').to_string();
    config.end_anchor = if anchor.is_empty() {
        "about".to_string()
    } else {
        anchor
    };
    normalize_key_binding(&mut config.key_next_slide, "n".to_string());
    normalize_key_binding(&mut config.key_prev_slide, "p".to_string());
    normalize_key_binding(&mut config.key_toggle_motion, "ctrl+m".to_string());
    normalize_key_binding(&mut config.key_toggle_theme, "ctrl+t".to_string());
    normalize_key_binding(&mut config.key_safe_quit, "q".to_string());
}
