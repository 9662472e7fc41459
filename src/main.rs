//! Caption Timeline
//!
//! A caption editor built around a zoomable, draggable timeline.

mod app;
mod components;
mod constants;
mod core;
mod error;
mod hotkeys;
mod state;
mod timeline;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use std::path::Path;

use state::{TimelineConfig, CONFIG_FILE_NAME};

fn load_timeline_config() -> TimelineConfig {
    let path = Path::new(CONFIG_FILE_NAME);
    match TimelineConfig::load(path) {
        Ok(config) => {
            log::debug!("Timeline settings: {:?}", config);
            config
        }
        Err(err) => {
            log::warn!("Ignoring {}: {}", path.display(), err);
            TimelineConfig::default()
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let timeline_config = load_timeline_config();

    // Configure the window
    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Caption Timeline")
                .with_inner_size(LogicalSize::new(1280.0, 800.0))
                .with_resizable(true),
        )
        .with_menu(None); // Disable default menu bar

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(timeline_config)
        .launch(app::App);
}
