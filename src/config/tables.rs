use super::defaults;
use super::models::{AppConfig, LogLevel, ThemeMode};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    motion: MotionConfig,
    #[serde(default)]
    hero: HeroConfig,
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    ui: UiConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    keys: KeysConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            theme: tables.appearance.theme,
            reduced_motion: tables.motion.reduced_motion,
            smooth_scroll_ms: tables.motion.smooth_scroll_ms,
            slide_transition_ms: tables.motion.slide_transition_ms,
            content_transition_ms: tables.motion.content_transition_ms,
            slides_path: tables.hero.slides_path,
            end_anchor: tables.hero.end_anchor,
            window_width: tables.window.width,
            window_height: tables.window.height,
            toast_secs: tables.ui.toast_secs,
            log_level: tables.logging.log_level,
            key_next_slide: tables.keys.next_slide,
            key_prev_slide: tables.keys.prev_slide,
            key_toggle_motion: tables.keys.toggle_motion,
            key_toggle_theme: tables.keys.toggle_theme,
            key_safe_quit: tables.keys.safe_quit,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            appearance: AppearanceConfig {
                theme: config.theme,
            },
            motion: MotionConfig {
                reduced_motion: config.reduced_motion,
                smooth_scroll_ms: config.smooth_scroll_ms,
                slide_transition_ms: config.slide_transition_ms,
                content_transition_ms: config.content_transition_ms,
            },
            hero: HeroConfig {
                slides_path: config.slides_path.clone(),
                end_anchor: config.end_anchor.clone(),
            },
            window: WindowConfig {
                width: config.window_width,
                height: config.window_height,
            },
            ui: UiConfig {
                toast_secs: config.toast_secs,
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
            keys: KeysConfig {
                next_slide: config.key_next_slide.clone(),
                prev_slide: config.key_prev_slide.clone(),
                toggle_motion: config.key_toggle_motion.clone(),
                toggle_theme: config.key_toggle_theme.clone(),
                safe_quit: config.key_safe_quit.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct MotionConfig {
    #[serde(default = "defaults::default_reduced_motion")]
    reduced_motion: bool,
    #[serde(default = "defaults::default_smooth_scroll_ms")]
    smooth_scroll_ms: u64,
    #[serde(default = "defaults::default_slide_transition_ms")]
    slide_transition_ms: u64,
    #[serde(default = "defaults::default_content_transition_ms")]
    content_transition_ms: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        MotionConfig {
            reduced_motion: defaults::default_reduced_motion(),
            smooth_scroll_ms: defaults::default_smooth_scroll_ms(),
            slide_transition_ms: defaults::default_slide_transition_ms(),
            content_transition_ms: defaults::default_content_transition_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct HeroConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    slides_path: Option<String>,
    #[serde(default = "defaults::default_end_anchor")]
    end_anchor: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        HeroConfig {
            slides_path: None,
            end_anchor: defaults::default_end_anchor(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct WindowConfig {
    #[serde(default = "defaults::default_window_width")]
    width: f32,
    #[serde(default = "defaults::default_window_height")]
    height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: defaults::default_window_width(),
            height: defaults::default_window_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct UiConfig {
    #[serde(default = "defaults::default_toast_secs")]
    toast_secs: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            toast_secs: defaults::default_toast_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct KeysConfig {
    #[serde(default = "defaults::default_key_next_slide")]
    next_slide: String,
    #[serde(default = "defaults::default_key_prev_slide")]
    prev_slide: String,
    #[serde(default = "defaults::default_key_toggle_motion")]
    toggle_motion: String,
    #[serde(default = "defaults::default_key_toggle_theme")]
    toggle_theme: String,
    #[serde(default = "defaults::default_key_safe_quit")]
    safe_quit: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        KeysConfig {
            next_slide: defaults::default_key_next_slide(),
            prev_slide: defaults::default_key_prev_slide(),
            toggle_motion: defaults::default_key_toggle_motion(),
            toggle_theme: defaults::default_key_toggle_theme(),
            safe_quit: defaults::default_key_safe_quit(),
        }
    }
}
