use techbuzz_config::Config;

mod ui;

use ui::App;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("techbuzz starting up!");

    let config = load_config();
    log::info!(
        "Serving '{}' with Leaflet {} and Pyodide {}",
        config.site_name,
        config.leaflet_version,
        config.pyodide_version
    );

    log::info!("About to launch Dioxus app for desktop");
    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config(&config.site_name))
        .with_context(config)
        .launch(App);
}

/// Resolves the site configuration; any failure falls back to defaults.
fn load_config() -> Config {
    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());

    match Config::load_from_path(&config_path) {
        Ok(Some(config)) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        Ok(None) => {
            log::info!("No config file found, using defaults");
            Config::default()
        }
        Err(e) => {
            log::error!("{e}");
            log::warn!("Falling back to default configuration");
            Config::default()
        }
    }
}

fn make_window_config(title: &str) -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title(title)
        .with_always_on_top(false);

    Config::default().with_window(window)
}
