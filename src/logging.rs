use anyhow::Result;
use chrono::Local;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

/// Initialize tracing with a file writer in the platform cache
/// directory. The TUI owns the terminal, so logs must never reach
/// stdout.
///
/// Filtering follows RUST_LOG when set, defaulting to `info`.
pub fn init_tracing() -> Result<PathBuf> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_dir = dirs::cache_dir()
        .ok_or_else(|| anyhow::anyhow!("Cannot determine cache directory"))?
        .join("userdir-cli");
    fs::create_dir_all(&log_dir)?;

    let log_path = log_dir.join(format!("userdir-{}.log", Local::now().format("%Y%m%d")));
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let fmt_layer = fmt::layer()
        .with_writer(Arc::new(file))
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .compact();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();

    tracing::info!(target: "system", "Session started, logging to {}", log_path.display());

    Ok(log_path)
}
