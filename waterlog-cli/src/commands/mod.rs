//! CLI command implementations

pub mod add;
pub mod list;
pub mod logs;
pub mod record;
pub mod remove;
pub mod rename;
pub mod show;

use std::path::PathBuf;

use anyhow::{Context, Result};
use waterlog_core::{EntryPoint, LoadReport, LogEvent, LoggingService, WaterlogContext};

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger() -> Option<LoggingService> {
    let waterlog_dir = get_waterlog_dir();
    // Ensure directory exists
    std::fs::create_dir_all(&waterlog_dir).ok()?;
    LoggingService::new(&waterlog_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Get the waterlog directory from environment or default
pub fn get_waterlog_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("WATERLOG_DIR") {
        PathBuf::from(dir)
    } else if let Some(home) = dirs::home_dir() {
        home.join(".waterlog")
    } else {
        PathBuf::from(".waterlog")
    }
}

/// Get or create waterlog context with the data file loaded
///
/// The load report (skipped rows, missing file) is returned alongside
/// so each command decides how to render it. A structurally broken
/// data file aborts here rather than operating on half a store.
pub fn get_loaded_context() -> Result<(WaterlogContext, LoadReport)> {
    let waterlog_dir = get_waterlog_dir();

    std::fs::create_dir_all(&waterlog_dir)
        .with_context(|| format!("Failed to create waterlog directory: {:?}", waterlog_dir))?;

    let mut ctx = WaterlogContext::new(&waterlog_dir)?;
    let report = ctx
        .load()
        .with_context(|| format!("Failed to load data file: {:?}", ctx.data_path()))?;

    Ok((ctx, report))
}
