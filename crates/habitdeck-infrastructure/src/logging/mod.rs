//! Tracing setup shared by every binary embedding the habit engine.
//!
//! Logs go to stdout (human-readable, local time) and optionally to a
//! daily-rotated file. Filtering follows `RUST_LOG`, defaulting to `info`.

use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static LOGGER_READY: OnceLock<()> = OnceLock::new();
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Initialize the global subscriber. Safe to call more than once; only the
/// first call takes effect.
pub fn init_logging(log_dir: Option<PathBuf>) -> anyhow::Result<()> {
    if LOGGER_READY.get().is_some() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stdout_layer = fmt::layer()
        .with_target(true)
        .with_timer(fmt::time::ChronoLocal::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ));

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer);

    match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(&dir)?;
            let file_appender = rolling::daily(&dir, "habitdeck.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let _ = FILE_GUARD.set(guard);

            let file_layer = fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true);

            registry.with(file_layer).try_init()?;
        }
        None => {
            registry.try_init()?;
        }
    }

    let _ = LOGGER_READY.set(());
    Ok(())
}
