//! Infrastructure layer for environment interactions.
//!
//! - [`paths`]: configuration locations, tilde expansion and project path
//!   normalization

pub mod paths;

pub use paths::{default_config_path, expand_tilde, get_config_dir, project_directory};
