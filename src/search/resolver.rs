//! The counterpart resolver.
//!
//! [`Resolver::resolve`] ties the pieces together: it picks the project that
//! owns the active file, derives the counterpart name and walks the project
//! tree. It holds no mutable state and can be called any number of times,
//! from any single-threaded context, with the same inputs giving the same
//! answer on an unchanged tree.

use crate::domain::{ActiveFile, MissReason, NamingConvention, Resolution};
use crate::search::walker::{DirectoryWalker, TreeSearch};
use std::path::{Path, PathBuf};

/// Resolves View ⇄ ViewModel counterparts.
///
/// # Example
///
/// ```no_run
/// use mvvm_counterpart::search::Resolver;
/// use mvvm_counterpart::NamingConvention;
/// use std::path::{Path, PathBuf};
///
/// let resolver = Resolver::new(NamingConvention::default());
/// let resolution = resolver.resolve(
///     Path::new("/proj/UI/CustomerView.xaml"),
///     &[PathBuf::from("/proj")],
/// );
/// if let Some(path) = resolution.path() {
///     println!("{}", path.display());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Resolver<W = DirectoryWalker> {
    convention: NamingConvention,
    walker: W,
}

impl Resolver<DirectoryWalker> {
    /// Creates a resolver walking the local filesystem in platform order.
    #[must_use]
    pub fn new(convention: NamingConvention) -> Self {
        Self::with_walker(convention, DirectoryWalker::new())
    }
}

impl<W: TreeSearch> Resolver<W> {
    /// Creates a resolver that searches project trees with `walker`.
    pub const fn with_walker(convention: NamingConvention, walker: W) -> Self {
        Self { convention, walker }
    }

    #[must_use]
    pub const fn convention(&self) -> &NamingConvention {
        &self.convention
    }

    /// Finds the counterpart of `active_file` inside the project that owns it.
    ///
    /// `project_roots` is searched in order; the first root containing the
    /// active file wins. Every failure mode is reported as
    /// [`Resolution::NotFound`] with its [`MissReason`].
    pub fn resolve(&self, active_file: &Path, project_roots: &[PathBuf]) -> Resolution {
        let span = tracing::debug_span!("resolve", active_file = %active_file.display());
        let _guard = span.enter();

        if active_file.as_os_str().is_empty() {
            return miss(MissReason::NoActiveDocument);
        }

        let Some(root) = select_project_root(active_file, project_roots) else {
            return miss(MissReason::NoMatchingProject);
        };
        tracing::debug!(root = %root.display(), "project root selected");

        let active = ActiveFile::new(active_file, &self.convention);
        let Some(target) = active.search_target(&self.convention) else {
            return miss(MissReason::UnrecognizedNamingConvention);
        };
        tracing::debug!(
            role = ?active.role,
            expected = %target.expected_base_name,
            extension = %target.expected_extension,
            "searching for counterpart"
        );

        let outcome = self.walker.find(root, &target);
        tracing::debug!(
            directories_entered = outcome.stats.directories_entered,
            files_checked = outcome.stats.files_checked,
            errors_skipped = outcome.stats.errors_skipped,
            "walk finished"
        );

        match outcome.found {
            Some(path) => {
                tracing::info!(path = %path.display(), "counterpart found");
                Resolution::found(path)
            }
            None => miss(MissReason::CounterpartNotPresent),
        }
    }
}

fn miss(reason: MissReason) -> Resolution {
    tracing::info!(%reason, "no counterpart");
    Resolution::not_found(reason)
}

/// Returns the first root that contains `active_file`.
///
/// Containment is decided per path component, so `/proj` contains
/// `/proj/UI/A.xaml` but not `/proj2/A.xaml`.
///
/// # Examples
///
/// ```
/// use mvvm_counterpart::search::select_project_root;
/// use std::path::{Path, PathBuf};
///
/// let roots = vec![PathBuf::from("/proj"), PathBuf::from("/proj2")];
/// assert_eq!(
///     select_project_root(Path::new("/proj2/A.xaml"), &roots),
///     Some(Path::new("/proj2")),
/// );
/// assert_eq!(select_project_root(Path::new("/other/A.xaml"), &roots), None);
/// ```
#[must_use]
pub fn select_project_root<'a>(active_file: &Path, project_roots: &'a [PathBuf]) -> Option<&'a Path> {
    project_roots
        .iter()
        .map(PathBuf::as_path)
        .find(|root| !root.as_os_str().is_empty() && active_file.starts_with(root))
}
