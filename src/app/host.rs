//! The editor host seam.
//!
//! Whatever runs the "switch to counterpart" command, an editor plugin or the
//! bundled command-line shim, implements [`EditorHost`]. The application layer
//! only talks to the host through this trait.

use crate::domain::error::Result;
use std::path::{Path, PathBuf};

/// Capabilities the command needs from the editor.
pub trait EditorHost {
    /// Full path of the document that has focus, if any.
    fn active_document_path(&self) -> Option<PathBuf>;

    /// Root directories of the open projects, in priority order.
    fn project_paths(&self) -> Vec<PathBuf>;

    /// Opens `path` in the editor.
    ///
    /// # Errors
    ///
    /// Returns [`CounterpartError::Host`](crate::CounterpartError::Host) when the
    /// editor cannot open the file.
    fn open_file(&mut self, path: &Path) -> Result<()>;

    /// Shows a user-visible notification.
    fn notify(&mut self, message: &str);
}
