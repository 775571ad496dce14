pub(crate) fn default_reduced_motion() -> bool {
    false
}

pub(crate) fn default_smooth_scroll_ms() -> u64 {
    700
}

pub(crate) fn default_slide_transition_ms() -> u64 {
    950
}

pub(crate) fn default_content_transition_ms() -> u64 {
    450
}

pub(crate) fn default_end_anchor() -> String {
    "about".to_string()
}

pub(crate) fn default_window_width() -> f32 {
    1280.0
}

pub(crate) fn default_window_height() -> f32 {
    800.0
}

pub(crate) fn default_toast_secs() -> u64 {
    5
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}

pub(crate) fn default_key_next_slide() -> String {
    "n".to_string()
}

pub(crate) fn default_key_prev_slide() -> String {
    "p".to_string()
}

pub(crate) fn default_key_toggle_motion() -> String {
    "ctrl+m".to_string()
}

pub(crate) fn default_key_toggle_theme() -> String {
    "ctrl+t".to_string()
}

pub(crate) fn default_key_safe_quit() -> String {
    "q".to_string()
}
