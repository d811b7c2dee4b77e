//! Logging setup.
//!
//! All code logs through `tracing` macros. [`init_tracing`] installs a
//! `tracing-subscriber` pipeline for the binary:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → stderr | rotating log file
//! ```
//!
//! # Configuration
//!
//! Level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"warn"`
//!
//! # Usage
//!
//! ```rust
//! use mvvm_counterpart::observability::init_tracing;
//! use mvvm_counterpart::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("logging is active");
//! ```

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;
