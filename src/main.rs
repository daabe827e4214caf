use std::sync::Arc;

use clap::Parser;
use color_eyre::Result;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::App;
use crate::config::KeyResolver;

mod app;
mod cli;
mod config;
mod shell;
mod theme;
mod tui;
mod ui;

pub use theme::Theme;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let _guard = initialize_logging()?;
    info!("Starting lazytodo");

    let args = cli::Args::parse();

    let config = config::load()?;
    let resolver = Arc::new(KeyResolver::new(Arc::new(config.keybindings)));
    let theme = startup_theme(args.theme.as_deref(), &config.theme.name);

    let mut app = App::new(resolver, theme);
    app.run().await?;

    Ok(())
}

/// `--theme` wins when it names a known theme, otherwise the configured one is used.
fn startup_theme(requested: Option<&str>, configured: &str) -> Theme {
    if let Some(name) = requested {
        if let Some(info) = theme::find_theme(name) {
            return info.theme;
        }
        warn!(theme = name, "Unknown theme, falling back to config");
    }
    theme::theme_from_name(configured)
}

fn initialize_logging() -> Result<WorkerGuard> {
    let directory = dirs::data_local_dir().map_or_else(
        || std::path::PathBuf::from("logs"),
        |path| path.join("lazytodo").join("logs"),
    );
    std::fs::create_dir_all(&directory)?;

    let file_appender = tracing_appender::rolling::daily(&directory, "lazytodo.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true),
        )
        .init();

    Ok(guard)
}
