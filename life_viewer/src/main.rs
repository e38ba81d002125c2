// main.rs - Window for Conway's Game of Life on a wraparound board

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod game;
mod ui;

use config::Config;
use game::GameOfLife;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log))
        .with_context(|| format!("invalid log filter `{}`", config.log))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    config.validate()?;
    info!(
        width = config.width,
        height = config.height,
        ticks_per_second = config.ticks_per_second,
        "starting"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size())
            .with_resizable(false),
        ..Default::default()
    };

    let game = GameOfLife::new(&config);
    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |_cc| Box::new(game)),
    )
    .map_err(|err| anyhow::anyhow!("window failed: {err}"))
}
