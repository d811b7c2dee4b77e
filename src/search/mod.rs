//! Counterpart search: project root selection, name derivation and the
//! directory walk.
//!
//! - [`resolver`]: [`Resolver`], the entry point used by the application layer
//! - [`walker`]: the [`TreeSearch`] seam and its `walkdir` implementation

pub mod resolver;
pub mod walker;

pub use resolver::{select_project_root, Resolver};
pub use walker::{DirectoryWalker, TreeSearch, WalkOutcome, WalkStats};
