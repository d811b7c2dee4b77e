//! Actions the host executes after a lookup.
//!
//! The handler turns a [`Resolution`](crate::domain::Resolution) into exactly
//! one [`Action`]. Keeping the decision separate from its execution lets the
//! decision be tested without a host.

use crate::domain::MissReason;
use std::path::PathBuf;

/// Side effect requested from the [`EditorHost`](crate::app::EditorHost).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Open the counterpart in the editor.
    OpenFile(PathBuf),

    /// Tell the user nothing was found.
    NotifyNotFound {
        /// Why the lookup missed.
        reason: MissReason,
        /// Text shown to the user.
        message: String,
    },
}

impl Action {
    /// Builds the not-found action, naming the active file when there is one.
    #[must_use]
    pub fn not_found(reason: MissReason, active_file: Option<&std::path::Path>) -> Self {
        let message = match (reason, active_file.and_then(|p| p.file_name())) {
            (MissReason::NoActiveDocument, _) | (_, None) => format!("No counterpart: {reason}."),
            (_, Some(name)) => {
                format!("No counterpart for {}: {reason}.", name.to_string_lossy())
            }
        };
        Self::NotifyNotFound { reason, message }
    }
}
