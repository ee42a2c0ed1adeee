//! File logging.
//!
//! The TUI owns the terminal, so log output goes to `skillbridge.log` in the
//! configured log directory. `RUST_LOG` overrides the default filter.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::ClientConfig;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "skillbridge=info";

/// Install the global subscriber.
///
/// Returns the log file path on success. When the file cannot be opened,
/// logging stays disabled and `None` is returned; startup continues.
pub fn init_logging(config: &ClientConfig) -> Option<PathBuf> {
    let path = config.log_file()?;
    let file = match open_log_file(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Logging disabled: cannot open {}: {}", path.display(), e);
            return None;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("skillbridge {} logging to {}", env!("CARGO_PKG_VERSION"), path.display());
        Some(path)
    } else {
        None
    }
}

/// Open `path` for appending, creating its directory first.
fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
