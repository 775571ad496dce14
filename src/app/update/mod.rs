mod core;
mod forms;
mod hero;
mod navigation;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Effect {
    /// Move the home scrollable to an absolute offset.
    ScrollHome { offset: f32 },
    ResetPageScroll,
    SavePreferences,
    QuitSafely,
}

#[cfg(test)]
pub(in crate::app) mod test_support {
    use super::super::messages::Message;
    use super::super::state::App;
    use crate::config::AppConfig;
    use horizons_core::SlideDeck;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static NEXT_APP: AtomicUsize = AtomicUsize::new(0);

    pub(in crate::app) fn build_test_app(config: AppConfig) -> App {
        let preferences_path = std::env::temp_dir().join(format!(
            "cosmic-horizons-app-test-{}-{}/preferences.toml",
            std::process::id(),
            NEXT_APP.fetch_add(1, Ordering::Relaxed)
        ));
        let (app, _task) = App::bootstrap(config, SlideDeck::builtin(), preferences_path);
        app
    }

    /// Builtin deck laid out in an 800 px tall window.
    pub(in crate::app) fn measured_app(config: AppConfig) -> App {
        let mut app = build_test_app(config);
        app.reduce(Message::WindowResized {
            width: 1280.0,
            height: 800.0,
        });
        app
    }
}
