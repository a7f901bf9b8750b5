use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fxconv::config::Config;
use fxconv::ui::runtime;

#[derive(Debug, Parser)]
#[command(name = "fxconv", version, about = "Terminal EUR to USD currency converter")]
struct Cli {
    /// Path to the config file (default: ~/.config/fxconv/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the rates endpoint URL.
    #[arg(long)]
    endpoint: Option<String>,

    /// Append tracing output to this file. Logging is off without it,
    /// since stderr would corrupt the UI.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_tracing(path)?;
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(endpoint) = cli.endpoint {
        config.rates.endpoint = endpoint;
        config.validate()?;
    }

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    tracing::info!(endpoint = %config.rates.endpoint, "starting fxconv");
    runtime::run(&config, rt.handle().clone())?;
    tracing::info!("fxconv exited cleanly");
    Ok(())
}

fn init_tracing(path: &Path) -> anyhow::Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file '{}'", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Arc::new(file))
        .init();

    Ok(())
}
