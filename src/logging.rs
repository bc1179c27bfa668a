use crate::config::{ensure_config_dir, get_log_file_path};
use crate::error::Result;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "clipmemo=info";

/// Send tracing output to `clipmemo.log` inside `dir`.
///
/// Logs never go to the terminal, which the list view owns. `RUST_LOG`
/// overrides the default filter.
pub fn init_logging(dir: &Path) -> Result<()> {
    ensure_config_dir(dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(get_log_file_path(dir))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
