//! mvvm-counterpart: jump between a View and its ViewModel.
//!
//! Given the file open in an editor, the crate finds its counterpart under the
//! View/ViewModel naming convention and asks the editor to open it:
//!
//! - `CustomerView.xaml` or `CustomerView.xaml.cs` → `CustomerViewModel.cs`
//! - `Shell.xaml` → `ShellViewModel.cs`
//! - `CustomerViewModel.cs` → `CustomerView.xaml` (or `Customer.xaml`)
//!
//! The counterpart is searched depth-first in the directory tree of the
//! project that owns the active file. The first match wins.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI Host Shim (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - EditorHost trait                                 │
//! │  - Resolution → Action                              │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Search Layer (search/)                             │
//! │  - Project root selection                           │
//! │  - Iterative depth-first walk                       │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────────────────┐   ┌───────────────────────────┐
//! │ Domain (domain/)          │   │ Infrastructure            │
//! │ - Naming convention       │   │ - Platform paths          │
//! │ - Resolution, errors      │   │ - Config/home paths       │
//! └───────────────────────────┘   └───────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: the command an editor binds, and the [`EditorHost`] seam
//! - [`domain`]: naming rules, lookup outcomes, errors
//! - [`search`]: the [`Resolver`] and its directory walk
//! - [`infrastructure`]: platform paths
//! - [`observability`]: `tracing` subscriber setup
//!
//! # Configuration
//!
//! Read from `<config dir>/mvvm-counterpart/config.toml` when present:
//!
//! ```toml
//! projects = ["~/src/Shop"]
//! open_with = ["code", "--reuse-window"]
//! trace_level = "debug"
//! log_file = "~/.local/state/mvvm-counterpart/log.txt"
//! sort_entries = false
//!
//! [convention]
//! view_extension = ".xaml"
//! code_behind_extension = ".xaml.cs"
//! code_extension = ".cs"
//! view_token = "View"
//! model_token = "Model"
//! ```
//!
//! # Example
//!
//! ```no_run
//! use mvvm_counterpart::{Config, Resolution};
//! use std::path::{Path, PathBuf};
//!
//! let config = Config::default();
//! let resolver = config.resolver();
//! match resolver.resolve(Path::new("/proj/UI/CustomerView.xaml"), &[PathBuf::from("/proj")]) {
//!     Resolution::Found { path } => println!("{}", path.display()),
//!     Resolution::NotFound { reason } => eprintln!("{reason}"),
//! }
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod search;

pub use app::{run_command, Action, EditorHost};
pub use domain::{CounterpartError, MissReason, NamingConvention, Resolution, Result, Role};
pub use search::Resolver;

use infrastructure::paths;
use search::DirectoryWalker;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Tool configuration, read from TOML.
///
/// Every field is optional in the file; missing fields take the defaults below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Project roots used when none are given on the command line.
    ///
    /// A leading `~` is expanded. Default: empty (the working directory is used).
    pub projects: Vec<PathBuf>,

    /// Program and leading arguments used to open a found counterpart.
    ///
    /// The path is appended as the last argument. Default: empty (the path is
    /// printed on stdout).
    pub open_with: Vec<String>,

    /// Tracing filter, e.g. `info` or `mvvm_counterpart=debug`. Default: `"warn"`.
    pub trace_level: Option<String>,

    /// Write logs to this file (rotated at 10 MB) instead of stderr.
    pub log_file: Option<PathBuf>,

    /// Walk each directory in file-name order rather than the order the
    /// platform lists it, so ties between candidates break the same way on
    /// every machine. Default: `false`.
    pub sort_entries: bool,

    /// Naming convention overrides.
    pub convention: NamingConvention,
}

impl Config {
    /// Parses a TOML document, expands `~` in paths and validates the convention.
    ///
    /// # Errors
    ///
    /// Returns [`CounterpartError::Config`] on malformed TOML, unknown keys or an
    /// invalid naming convention.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mvvm_counterpart::Config;
    ///
    /// let config = Config::from_toml_str(r#"
    ///     open_with = ["code"]
    ///     [convention]
    ///     view_extension = ".axaml"
    /// "#)?;
    /// assert_eq!(config.open_with, vec!["code"]);
    /// assert_eq!(config.convention.view_extension, ".axaml");
    /// assert_eq!(config.convention.code_extension, ".cs");
    /// # Ok::<(), mvvm_counterpart::CounterpartError>(())
    /// ```
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(contents)?;
        config.expand_paths();
        config.convention.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CounterpartError::Io`] if the file cannot be read, otherwise
    /// the errors of [`Config::from_toml_str`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            CounterpartError::Config(msg) => {
                CounterpartError::Config(format!("{}: {msg}", path.as_ref().display()))
            }
            other => other,
        })
    }

    /// Loads the explicit file if given, else the default file if it exists,
    /// else the built-in defaults.
    ///
    /// # Errors
    ///
    /// Fails when the chosen file cannot be read or parsed. A missing default
    /// file is not an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match paths::default_config_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "loading default config");
                Self::from_file(path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Builds a resolver for the configured naming convention and walk order.
    #[must_use]
    pub fn resolver(&self) -> Resolver {
        let walker = DirectoryWalker::new().sorted(self.sort_entries);
        Resolver::with_walker(self.convention.clone(), walker)
    }

    fn expand_paths(&mut self) {
        for project in &mut self.projects {
            *project = expand(project);
        }
        if let Some(log_file) = self.log_file.as_mut() {
            *log_file = expand(log_file);
        }
    }
}

fn expand(path: &Path) -> PathBuf {
    path.to_str()
        .map_or_else(|| path.to_path_buf(), paths::expand_tilde)
}
