//! Entry point for the Cosmic Horizons site viewer.
//!
//! Responsibilities here are intentionally minimal:
//! - Load user configuration from `conf/config.toml`.
//! - Re-apply preferences persisted by a previous session.
//! - Load the hero slide deck.
//! - Launch the GUI application with the loaded deck and config.

mod app;
mod cache;
mod config;
mod content;
mod routes;
mod theme;

use crate::app::run_app;
use crate::cache::{load_preferences, preferences_path};
use crate::config::load_config;
use anyhow::{Context, Result};
use horizons_core::load_deck;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

static SIGINT_REQUESTED: AtomicBool = AtomicBool::new(false);

/// Returns true once per Ctrl+C received since the last call.
pub fn take_sigint_requested() -> bool {
    SIGINT_REQUESTED.swap(false, Ordering::SeqCst)
}

fn main() {
    let reload_handle = init_tracing();
    install_sigint_handler();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let mut config = load_config(Path::new("conf/config.toml"));
    let preferences_path = preferences_path();
    if let Some(preferences) = load_preferences(&preferences_path) {
        info!(
            theme = %preferences.theme,
            reduced_motion = preferences.reduced_motion,
            "Restored preferences from cache"
        );
        preferences.apply_to(&mut config);
    }
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(level = %config.log_level, "Starting Cosmic Horizons");

    let slides_path = config.slides_path();
    let deck = load_deck(slides_path.as_deref());
    info!(slides = deck.len(), "Loaded hero slides");

    run_app(config, deck, preferences_path).context("Failed to start the GUI")?;
    Ok(())
}

fn install_sigint_handler() {
    if let Err(err) = ctrlc::set_handler(|| {
        info!("Received Ctrl+C; requesting safe shutdown");
        SIGINT_REQUESTED.store(true, Ordering::SeqCst);
    }) {
        warn!("Failed to install Ctrl+C signal handler: {err}");
    }
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
