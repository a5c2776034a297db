//! Config Demo - Main Entry Point
//!
//! Terminal front-end for the persisted preference store.

use config_demo::app::application::run_app;
use config_demo::app::logging::init_tracing;
use config_demo::app::settings::Settings;
use config_demo::helpers::is_development;

fn main() -> anyhow::Result<()> {
    let settings = match Settings::try_load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error loading settings: {e}");
            eprintln!("Using default settings");
            Settings::default()
        }
    };

    // Keep the guard alive so file logs flush on exit
    let _guard = init_tracing(&settings)?;

    tracing::info!(development = is_development(), "Starting Config Demo...");

    run_app(&settings)
}
