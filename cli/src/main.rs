//! bistro: browse the menu, read the reviews, leave your own.

mod config;
mod store;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use bistro_shared::menu::Menu;
use config::AppConfig;
use store::MenuStore;

#[derive(Parser)]
#[command(name = "bistro", version, about)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Path to the menu JSON document (overrides the config file).
    #[arg(short, long)]
    menu: Option<PathBuf>,
    /// Dish id to open at startup (defaults to the first dish on the menu).
    #[arg(short, long)]
    dish: Option<u32>,
    /// Simulated fetch latency in milliseconds (overrides the config file).
    #[arg(long)]
    fetch_delay_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(menu) = cli.menu {
        config.menu_path = menu;
    }
    if let Some(delay) = cli.fetch_delay_ms {
        config.fetch_delay_ms = delay;
    }

    // Logs go to a file so they never corrupt the terminal UI.
    let _log_guard = init_tracing().context("failed to initialize logging")?;
    tracing::info!(menu = %config.menu_path.display(), "starting bistro");

    let menu = Menu::load(&config.menu_path);
    let store = MenuStore::new(
        menu,
        Duration::from_millis(config.fetch_delay_ms),
        config.image_base_url,
        cli.dish,
    );

    let (input_tx, input_rx) = mpsc::channel(32);
    let (output_tx, output_rx) = mpsc::channel(32);

    let store_task = tokio::spawn(store.run(input_tx, output_rx));
    let result = bistro_tui::run(input_rx, output_tx).await;
    store_task.abort();

    result.context("terminal UI failed")
}

fn init_tracing() -> anyhow::Result<tracing_appender::non_blocking::WorkerGuard> {
    let file_appender = tracing_appender::rolling::never(".", "bistro.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}
