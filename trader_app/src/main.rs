// trader_app/src/main.rs
//
// Desktop trader picker.
//
//   - Home screen: one button per trader (CyCap, Trader2, Trader3)
//   - CyCap opens the recent-trades screen; the others print a notice
//   - Recent-trades screen: connect button (inert), static trade list, back button
//
// Run:
//   cargo run -p trader_app
//
//   # custom window config / verbose logs:
//   export TRADER_APP_CONFIG=./config.json
//   export TRADER_APP_LOG=trader_app=debug
//   cargo run -p trader_app
//

mod app;
mod settings;

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

use crate::app::AppRuntime;
use crate::settings::AppConfig;

const LOG_ENV: &str = "TRADER_APP_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    init_tracing();

    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("config unusable, falling back to defaults: {e:#}");
        AppConfig::default()
    });

    let options = config.native_options();
    tracing::info!(title = %config.window_title, "starting");

    eframe::run_native(
        &config.window_title,
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Box::new(AppRuntime::new())
        }),
    )
    .map_err(|e| anyhow!("eframe error: {e}"))
}
