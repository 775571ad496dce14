//! Persisted viewer preferences.
//!
//! Toggles made at runtime (theme, reduced motion) are stored under `.cache/`
//! as a tiny TOML file and re-applied over the base config on the next start.

use crate::config::{AppConfig, ThemeMode};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const CACHE_DIR: &str = ".cache";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: ThemeMode,
    pub reduced_motion: bool,
}

impl Preferences {
    pub fn from_config(config: &AppConfig) -> Self {
        Preferences {
            theme: config.theme,
            reduced_motion: config.reduced_motion,
        }
    }

    pub fn apply_to(self, config: &mut AppConfig) {
        config.theme = self.theme;
        config.reduced_motion = self.reduced_motion;
    }
}

pub fn preferences_path() -> PathBuf {
    Path::new(CACHE_DIR).join("preferences.toml")
}

/// Load stored preferences, if present and readable.
pub fn load_preferences(path: &Path) -> Option<Preferences> {
    let data = fs::read_to_string(path).ok()?;
    match toml::from_str(&data) {
        Ok(preferences) => Some(preferences),
        Err(err) => {
            warn!(
                path = %path.display(),
                "Ignoring unreadable preferences cache: {err}"
            );
            None
        }
    }
}

pub fn save_preferences(path: &Path, preferences: &Preferences) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let contents = toml::to_string(preferences).context("Failed to serialize preferences")?;
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("cosmic-horizons-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn preferences_survive_a_save_and_load() {
        let path = temp_path("prefs.toml");
        let prefs = Preferences {
            theme: ThemeMode::Day,
            reduced_motion: true,
        };
        save_preferences(&path, &prefs).expect("preferences saved");
        assert_eq!(load_preferences(&path), Some(prefs));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_or_corrupt_file_is_ignored() {
        assert_eq!(load_preferences(Path::new("/nonexistent/prefs.toml")), None);
        let path = temp_path("corrupt.toml");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("temp dir");
        }
        fs::write(&path, "theme = 42").expect("write corrupt file");
        assert_eq!(load_preferences(&path), None);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn mistyped_cache_entry_falls_back_to_base_config() {
        let path = temp_path("mistyped.toml");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("temp dir");
        }
        fs::write(&path, "theme = \"day\"\nreduced_motion = \"yes\"\n").expect("write cache");
        assert_eq!(load_preferences(&path), None);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn preferences_override_base_config() {
        let mut config = AppConfig::default();
        Preferences {
            theme: ThemeMode::Day,
            reduced_motion: true,
        }
        .apply_to(&mut config);
        assert_eq!(config.theme, ThemeMode::Day);
        assert!(config.reduced_motion);
        assert_eq!(config.smooth_scroll_ms, 700);
    }
}
