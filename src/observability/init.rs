//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when neither `RUST_LOG` nor `trace_level` is set.
const DEFAULT_LEVEL: &str = "warn";

/// Initializes the global tracing subscriber.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` environment variable
/// 2. `config.trace_level`
/// 3. `"warn"`
///
/// # Output
///
/// Events go to stderr, or to the rotating `config.log_file` when one is set.
/// If the log file's directory cannot be created, stderr is used instead.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let log_file = config.log_file.as_ref().filter(|path| {
        path.parent()
            .map_or(true, |dir| dir.as_os_str().is_empty() || std::fs::create_dir_all(dir).is_ok())
    });

    if let Some(path) = log_file {
        let layer = fmt::layer()
            .with_ansi(false)
            .with_target(false)
            .with_writer(FileWriter::new(path.clone()));
        let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
    } else {
        let layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
        let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
    }
}
