//! Depth-first search of a project subtree for a counterpart file.
//!
//! The walk runs on `walkdir`: pre-order, a subdirectory is descended into
//! before its later siblings, entries come in the order the platform lists
//! them. Symlinks are followed and `walkdir` reports a link back to an
//! ancestor as an error instead of looping. Every error entry (unreadable
//! directory, dangling link, loop) is logged and skipped; it contributes no
//! matches and the walk continues.

use crate::domain::SearchTarget;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Counters collected during one walk, reported in trace output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    pub directories_entered: usize,
    pub files_checked: usize,
    pub errors_skipped: usize,
}

/// Result of a walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkOutcome {
    pub found: Option<PathBuf>,
    pub stats: WalkStats,
}

/// Searches a directory tree for a [`SearchTarget`].
///
/// The resolver only depends on this trait, so lookups can be tested without
/// touching the disk.
pub trait TreeSearch {
    /// Searches the tree under `root` for a file matching `target`.
    fn find(&self, root: &Path, target: &SearchTarget) -> WalkOutcome;
}

impl<T: TreeSearch + ?Sized> TreeSearch for &T {
    fn find(&self, root: &Path, target: &SearchTarget) -> WalkOutcome {
        (**self).find(root, target)
    }
}

/// [`TreeSearch`] over the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryWalker {
    sort_entries: bool,
}

impl DirectoryWalker {
    #[must_use]
    pub const fn new() -> Self {
        Self { sort_entries: false }
    }

    /// Visits the entries of each directory sorted by file name instead of in
    /// platform order, making the first match the same on every machine.
    #[must_use]
    pub const fn sorted(mut self, sort_entries: bool) -> Self {
        self.sort_entries = sort_entries;
        self
    }
}

impl TreeSearch for DirectoryWalker {
    /// Returns the first file whose name matches the target's primary base name.
    /// When the whole tree holds none, falls back to the first file seen that
    /// matches the alternate base name.
    fn find(&self, root: &Path, target: &SearchTarget) -> WalkOutcome {
        let mut stats = WalkStats::default();
        let mut alternate: Option<PathBuf> = None;

        let mut walk = WalkDir::new(root).follow_links(true);
        if self.sort_entries {
            walk = walk.sort_by_file_name();
        }

        for entry_result in walk {
            let entry = match entry_result {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(
                        path = ?e.path(),
                        loop_ancestor = ?e.loop_ancestor(),
                        error = %e,
                        "skipping unreadable entry"
                    );
                    stats.errors_skipped += 1;
                    continue;
                }
            };

            let file_type = entry.file_type();
            if file_type.is_dir() {
                stats.directories_entered += 1;
                continue;
            }
            if !file_type.is_file() {
                continue;
            }

            stats.files_checked += 1;
            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            if target.matches(name) {
                tracing::debug!(path = %entry.path().display(), "counterpart matched");
                return WalkOutcome {
                    found: Some(entry.into_path()),
                    stats,
                };
            }
            if alternate.is_none() && target.matches_alternate(name) {
                tracing::debug!(path = %entry.path().display(), "alternate counterpart noted");
                alternate = Some(entry.into_path());
            }
        }

        WalkOutcome {
            found: alternate,
            stats,
        }
    }
}
