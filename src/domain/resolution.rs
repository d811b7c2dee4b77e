//! Outcome of a counterpart lookup.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Why a lookup produced no counterpart.
///
/// Every variant is an ordinary outcome, not an error. The host decides how to
/// present it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissReason {
    /// The host has no active document.
    NoActiveDocument,
    /// The active document is not under any project root.
    NoMatchingProject,
    /// The active file is neither a View nor a ViewModel. No search was run.
    UnrecognizedNamingConvention,
    /// The project subtree was searched without finding the counterpart.
    CounterpartNotPresent,
}

impl fmt::Display for MissReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NoActiveDocument => "no active document",
            Self::NoMatchingProject => "active document is not part of any project",
            Self::UnrecognizedNamingConvention => "active document is neither a View nor a ViewModel",
            Self::CounterpartNotPresent => "counterpart file not found in project",
        };
        f.write_str(text)
    }
}

/// Two-valued result of a lookup.
///
/// Serializes as `{"status":"found","path":"..."}` or
/// `{"status":"not_found","reason":"..."}` for editor integrations that read
/// JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolution {
    Found { path: PathBuf },
    NotFound { reason: MissReason },
}

impl Resolution {
    #[must_use]
    pub fn found(path: impl Into<PathBuf>) -> Self {
        Self::Found { path: path.into() }
    }

    #[must_use]
    pub const fn not_found(reason: MissReason) -> Self {
        Self::NotFound { reason }
    }

    /// Path of the counterpart, if one was found.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found { path } => Some(path),
            Self::NotFound { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}
