use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load configuration from the given path, falling back to defaults on error.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err:#}");
            AppConfig::default()
        }
    }
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let tables: ConfigTables = toml::from_str(contents).context("Failed to parse config tables")?;
    Ok(tables.into())
}

#[cfg(test)]
pub fn serialize_config(config: &AppConfig) -> Result<String> {
    toml::to_string_pretty(&ConfigTables::from(config)).context("Failed to serialize config")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogLevel, ThemeMode};

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse_config("").expect("empty config parses");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn sections_flatten_into_app_config() {
        let config = parse_config(
            r#"
            [appearance]
            theme = "day"

            [motion]
            reduced_motion = true
            smooth_scroll_ms = 300

            [hero]
            slides_path = "conf/slides.toml"
            end_anchor = "mission"

            [logging]
            log_level = "warn"

            [keys]
            next_slide = "ctrl+j"
            "#,
        )
        .expect("config parses");

        assert_eq!(config.theme, ThemeMode::Day);
        assert!(config.reduced_motion);
        assert_eq!(config.smooth_scroll_ms, 300);
        assert_eq!(config.slide_transition_ms, 950);
        assert_eq!(config.end_anchor, "mission");
        assert_eq!(
            config.slides_path(),
            Some(std::path::PathBuf::from("conf/slides.toml"))
        );
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.key_next_slide, "ctrl+j");
        assert_eq!(config.key_prev_slide, "p");
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(parse_config("[motion\nreduced_motion = ").is_err());
        assert!(parse_config("[motion]\nsmooth_scroll_ms = \"fast\"").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_config(Path::new("/nonexistent/horizons/config.toml"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn serialized_config_parses_back() {
        let mut config = AppConfig::default();
        config.theme = ThemeMode::Day;
        config.reduced_motion = true;
        config.toast_secs = 9;
        let text = serialize_config(&config).expect("serializes");
        assert!(text.contains("[motion]"));
        assert_eq!(parse_config(&text).expect("parses"), config);
    }

    #[test]
    fn reduced_motion_zeroes_transitions() {
        let mut config = AppConfig::default();
        assert_eq!(config.smooth_scroll().as_millis(), 700);
        config.reduced_motion = true;
        assert!(config.smooth_scroll().is_zero());
        assert!(config.motion_policy().content_transition().is_zero());
    }
}
