use horizons_core::MotionPolicy;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::defaults;

/// Flattened app configuration assembled from the sectioned TOML tables.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub theme: ThemeMode,
    pub reduced_motion: bool,
    pub smooth_scroll_ms: u64,
    pub slide_transition_ms: u64,
    pub content_transition_ms: u64,
    pub slides_path: Option<String>,
    pub end_anchor: String,
    pub window_width: f32,
    pub window_height: f32,
    pub toast_secs: u64,
    pub log_level: LogLevel,
    pub key_next_slide: String,
    pub key_prev_slide: String,
    pub key_toggle_motion: String,
    pub key_toggle_theme: String,
    pub key_safe_quit: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: ThemeMode::Night,
            reduced_motion: defaults::default_reduced_motion(),
            smooth_scroll_ms: defaults::default_smooth_scroll_ms(),
            slide_transition_ms: defaults::default_slide_transition_ms(),
            content_transition_ms: defaults::default_content_transition_ms(),
            slides_path: None,
            end_anchor: defaults::default_end_anchor(),
            window_width: defaults::default_window_width(),
            window_height: defaults::default_window_height(),
            toast_secs: defaults::default_toast_secs(),
            log_level: defaults::default_log_level(),
            key_next_slide: defaults::default_key_next_slide(),
            key_prev_slide: defaults::default_key_prev_slide(),
            key_toggle_motion: defaults::default_key_toggle_motion(),
            key_toggle_theme: defaults::default_key_toggle_theme(),
            key_safe_quit: defaults::default_key_safe_quit(),
        }
    }
}

impl AppConfig {
    pub fn motion_policy(&self) -> MotionPolicy {
        MotionPolicy {
            reduced_motion: self.reduced_motion,
            slide_transition: Duration::from_millis(self.slide_transition_ms),
            content_transition: Duration::from_millis(self.content_transition_ms),
        }
    }

    /// Duration of an animated jump; zero when reduced motion is on.
    pub fn smooth_scroll(&self) -> Duration {
        if self.reduced_motion {
            Duration::ZERO
        } else {
            Duration::from_millis(self.smooth_scroll_ms)
        }
    }

    pub fn toast_lifetime(&self) -> Duration {
        Duration::from_secs(self.toast_secs)
    }

    pub fn slides_path(&self) -> Option<PathBuf> {
        self.slides_path
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Default, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Day,
    #[default]
    Night,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Day => ThemeMode::Night,
            ThemeMode::Night => ThemeMode::Day,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Default, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    #[default]
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
