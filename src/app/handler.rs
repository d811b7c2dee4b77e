//! The "switch to counterpart" command.
//!
//! # Flow
//!
//! 1. Ask the host for the active document and the project paths
//! 2. [`Resolver::resolve`] the counterpart
//! 3. Turn the [`Resolution`] into an [`Action`]
//! 4. Have the host execute the action
//!
//! # Example
//!
//! ```no_run
//! use mvvm_counterpart::app::{run_command, EditorHost};
//! use mvvm_counterpart::search::Resolver;
//! use mvvm_counterpart::NamingConvention;
//!
//! fn on_menu_click(host: &mut impl EditorHost) -> mvvm_counterpart::Result<()> {
//!     let resolver = Resolver::new(NamingConvention::default());
//!     let (resolution, _action) = run_command(host, &resolver)?;
//!     tracing::debug!(?resolution, "command finished");
//!     Ok(())
//! }
//! ```

use crate::app::{Action, EditorHost};
use crate::domain::error::Result;
use crate::domain::{MissReason, Resolution};
use crate::search::{Resolver, TreeSearch};

/// Looks up the counterpart of the host's active document.
///
/// Does not execute anything on the host.
pub fn resolve_active<H, W>(host: &H, resolver: &Resolver<W>) -> Resolution
where
    H: EditorHost + ?Sized,
    W: TreeSearch,
{
    let Some(active) = host.active_document_path() else {
        tracing::debug!("host reports no active document");
        return Resolution::not_found(MissReason::NoActiveDocument);
    };

    let projects = host.project_paths();
    tracing::debug!(active = %active.display(), projects = ?projects, "resolving active document");
    resolver.resolve(&active, &projects)
}

/// Maps a resolution to the action the host should perform.
#[must_use]
pub fn plan(resolution: &Resolution, active_file: Option<&std::path::Path>) -> Action {
    match resolution {
        Resolution::Found { path } => Action::OpenFile(path.clone()),
        Resolution::NotFound { reason } => Action::not_found(*reason, active_file),
    }
}

/// Executes `action` on the host.
///
/// # Errors
///
/// Propagates the host's error when opening the file fails.
pub fn execute<H: EditorHost + ?Sized>(host: &mut H, action: &Action) -> Result<()> {
    match action {
        Action::OpenFile(path) => {
            tracing::debug!(path = %path.display(), "opening counterpart");
            host.open_file(path)
        }
        Action::NotifyNotFound { message, .. } => {
            host.notify(message);
            Ok(())
        }
    }
}

/// Runs the whole command against `host`.
///
/// Returns the resolution together with the action that was executed.
///
/// # Errors
///
/// Fails only when the host cannot open a found counterpart. Lookups that
/// find nothing are reported through the host's notification instead.
pub fn run_command<H, W>(host: &mut H, resolver: &Resolver<W>) -> Result<(Resolution, Action)>
where
    H: EditorHost + ?Sized,
    W: TreeSearch,
{
    let resolution = resolve_active(host, resolver);
    let active = host.active_document_path();
    let action = plan(&resolution, active.as_deref());
    execute(host, &action)?;
    Ok((resolution, action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CounterpartError, NamingConvention};
    use std::path::{Path, PathBuf};

    #[derive(Default)]
    struct RecordingHost {
        active: Option<PathBuf>,
        projects: Vec<PathBuf>,
        opened: Vec<PathBuf>,
        notes: Vec<String>,
        refuse_open: bool,
    }

    impl EditorHost for RecordingHost {
        fn active_document_path(&self) -> Option<PathBuf> {
            self.active.clone()
        }

        fn project_paths(&self) -> Vec<PathBuf> {
            self.projects.clone()
        }

        fn open_file(&mut self, path: &Path) -> Result<()> {
            if self.refuse_open {
                return Err(CounterpartError::Host("editor busy".to_string()));
            }
            self.opened.push(path.to_path_buf());
            Ok(())
        }

        fn notify(&mut self, message: &str) {
            self.notes.push(message.to_string());
        }
    }

    fn tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("UI")).unwrap();
        std::fs::create_dir_all(dir.path().join("VM")).unwrap();
        std::fs::write(dir.path().join("UI/CustomerView.xaml"), "<UserControl />").unwrap();
        std::fs::write(dir.path().join("VM/CustomerViewModel.cs"), "class C {}").unwrap();
        dir
    }

    #[test]
    fn found_counterpart_is_opened() {
        let dir = tree();
        let mut host = RecordingHost {
            active: Some(dir.path().join("UI/CustomerView.xaml")),
            projects: vec![dir.path().to_path_buf()],
            ..Default::default()
        };
        let resolver = Resolver::new(NamingConvention::default());

        let (resolution, action) = run_command(&mut host, &resolver).unwrap();

        let expected = dir.path().join("VM/CustomerViewModel.cs");
        assert_eq!(resolution, Resolution::found(expected.clone()));
        assert_eq!(action, Action::OpenFile(expected.clone()));
        assert_eq!(host.opened, vec![expected]);
        assert!(host.notes.is_empty());
    }

    #[test]
    fn missing_document_notifies() {
        let mut host = RecordingHost::default();
        let resolver = Resolver::new(NamingConvention::default());

        let (resolution, _) = run_command(&mut host, &resolver).unwrap();

        assert_eq!(resolution, Resolution::not_found(MissReason::NoActiveDocument));
        assert_eq!(host.notes, vec!["No counterpart: no active document.".to_string()]);
        assert!(host.opened.is_empty());
    }

    #[test]
    fn unrecognized_file_message_names_the_file() {
        let dir = tree();
        let mut host = RecordingHost {
            active: Some(dir.path().join("README.md")),
            projects: vec![dir.path().to_path_buf()],
            ..Default::default()
        };
        let resolver = Resolver::new(NamingConvention::default());

        run_command(&mut host, &resolver).unwrap();

        assert_eq!(host.notes.len(), 1);
        assert!(host.notes[0].starts_with("No counterpart for README.md:"));
    }

    #[test]
    fn open_failure_propagates() {
        let dir = tree();
        let mut host = RecordingHost {
            active: Some(dir.path().join("VM/CustomerViewModel.cs")),
            projects: vec![dir.path().to_path_buf()],
            refuse_open: true,
            ..Default::default()
        };
        let resolver = Resolver::new(NamingConvention::default());

        let err = run_command(&mut host, &resolver).unwrap_err();
        assert!(matches!(err, CounterpartError::Host(_)));
    }

    #[test]
    fn plan_maps_each_outcome() {
        let found = Resolution::found("/p/A.xaml");
        assert_eq!(plan(&found, None), Action::OpenFile(PathBuf::from("/p/A.xaml")));

        let missed = Resolution::not_found(MissReason::CounterpartNotPresent);
        let action = plan(&missed, Some(Path::new("/p/FooView.xaml")));
        assert_eq!(
            action,
            Action::NotifyNotFound {
                reason: MissReason::CounterpartNotPresent,
                message: "No counterpart for FooView.xaml: counterpart file not found in project."
                    .to_string(),
            }
        );
    }
}
