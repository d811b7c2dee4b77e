//! Application layer: the command a host binds to its menu or key binding.
//!
//! - [`host`]: the [`EditorHost`] trait implemented by integrations
//! - [`actions`]: the [`Action`] a lookup turns into
//! - [`handler`]: [`run_command`] and its building blocks

pub mod actions;
pub mod handler;
pub mod host;

pub use actions::Action;
pub use handler::{execute, plan, resolve_active, run_command};
pub use host::EditorHost;
