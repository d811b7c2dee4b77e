//! View/ViewModel naming convention.
//!
//! A View lives in a markup file (`CustomerView.xaml`, optionally with a
//! code-behind `CustomerView.xaml.cs`), its ViewModel in a code file
//! (`CustomerViewModel.cs`). This module classifies a file name into a [`Role`]
//! and derives the [`SearchTarget`] naming its counterpart.
//!
//! Token handling is anchored at the end of the base name. `ModelEditorViewModel`
//! becomes `ModelEditorView`, never `EditorViewModel`.
//!
//! Views are not always named with the `View` token (`Foo.xaml` pairs with
//! `FooViewModel.cs`), so a ViewModel target also carries an alternate base
//! name with the whole ViewModel token removed. The primary name wins when
//! both exist.

use crate::domain::error::{CounterpartError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Role a file plays in the View/ViewModel convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Markup view or its code-behind.
    View,
    /// Code file whose base name ends with the ViewModel token.
    ViewModel,
    /// Anything else. No search is attempted for these.
    Unknown,
}

/// Suffixes and tokens that make up the naming convention.
///
/// Defaults follow the XAML convention. All fields can be overridden from the
/// `[convention]` table of the configuration file.
///
/// # Example
///
/// ```toml
/// [convention]
/// view_extension = ".axaml"
/// code_behind_extension = ".axaml.cs"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NamingConvention {
    /// Markup view extension, including the leading dot.
    pub view_extension: String,
    /// Code-behind suffix of a view, including the leading dot.
    pub code_behind_extension: String,
    /// Extension of ViewModel source files, including the leading dot.
    pub code_extension: String,
    /// Literal token that ends view base names.
    pub view_token: String,
    /// Literal token that turns a view name into a ViewModel name.
    pub model_token: String,
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self {
            view_extension: ".xaml".to_string(),
            code_behind_extension: ".xaml.cs".to_string(),
            code_extension: ".cs".to_string(),
            view_token: "View".to_string(),
            model_token: "Model".to_string(),
        }
    }
}

impl NamingConvention {
    /// Checks that every token is non-empty and every extension starts with `.`.
    ///
    /// # Errors
    ///
    /// Returns [`CounterpartError::Config`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let extensions = [
            ("view_extension", &self.view_extension),
            ("code_behind_extension", &self.code_behind_extension),
            ("code_extension", &self.code_extension),
        ];
        for (field, value) in extensions {
            if value.len() < 2 || !value.starts_with('.') {
                return Err(CounterpartError::Config(format!(
                    "{field} must start with '.' and name an extension, got {value:?}"
                )));
            }
        }

        for (field, value) in [("view_token", &self.view_token), ("model_token", &self.model_token)] {
            if value.is_empty() {
                return Err(CounterpartError::Config(format!("{field} must not be empty")));
            }
        }

        Ok(())
    }

    /// The token that ends ViewModel base names (`View` + `Model`).
    #[must_use]
    pub fn view_model_token(&self) -> String {
        format!("{}{}", self.view_token, self.model_token)
    }

    /// View suffixes, longest first so `.xaml.cs` wins over a bare `.cs`.
    fn view_suffixes(&self) -> [&str; 2] {
        if self.code_behind_extension.len() >= self.view_extension.len() {
            [self.code_behind_extension.as_str(), self.view_extension.as_str()]
        } else {
            [self.view_extension.as_str(), self.code_behind_extension.as_str()]
        }
    }

    /// Classifies a bare file name, returning its role and stripped base name.
    ///
    /// # Examples
    ///
    /// ```
    /// use mvvm_counterpart::domain::{NamingConvention, Role};
    ///
    /// let convention = NamingConvention::default();
    /// assert_eq!(convention.classify("Foo.xaml.cs"), (Role::View, "Foo".to_string()));
    /// assert_eq!(convention.classify("FooViewModel.cs"), (Role::ViewModel, "FooViewModel".to_string()));
    /// assert_eq!(convention.classify("Notes.txt").0, Role::Unknown);
    /// ```
    #[must_use]
    pub fn classify(&self, file_name: &str) -> (Role, String) {
        for suffix in self.view_suffixes() {
            if let Some(base) = non_empty_strip(file_name, suffix) {
                return (Role::View, base.to_string());
            }
        }

        if let Some(base) = non_empty_strip(file_name, &self.code_extension) {
            if base.ends_with(&self.view_model_token()) {
                return (Role::ViewModel, base.to_string());
            }
        }

        let stem = Path::new(file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(file_name);
        (Role::Unknown, stem.to_string())
    }

    /// Derives the counterpart target for a bare file name.
    ///
    /// Returns `None` for files outside the convention.
    ///
    /// # Examples
    ///
    /// ```
    /// use mvvm_counterpart::domain::NamingConvention;
    ///
    /// let convention = NamingConvention::default();
    ///
    /// let target = convention.derive_target("Foo.xaml").unwrap();
    /// assert_eq!(target.expected_base_name, "FooViewModel");
    ///
    /// let target = convention.derive_target("FooViewModel.cs").unwrap();
    /// assert_eq!(target.expected_base_name, "FooView");
    /// assert_eq!(target.expected_extension, ".xaml");
    ///
    /// assert!(convention.derive_target("Notes.txt").is_none());
    /// ```
    #[must_use]
    pub fn derive_target(&self, file_name: &str) -> Option<SearchTarget> {
        let (role, base) = self.classify(file_name);
        self.target_for(role, &base)
    }

    fn target_for(&self, role: Role, base: &str) -> Option<SearchTarget> {
        match role {
            Role::View => {
                let expected_base_name = if base.ends_with(&self.view_token) {
                    format!("{base}{}", self.model_token)
                } else {
                    format!("{base}{}", self.view_model_token())
                };
                Some(SearchTarget {
                    role,
                    expected_base_name,
                    expected_extension: self.code_extension.clone(),
                    alternate_base_name: None,
                })
            }
            Role::ViewModel => {
                let view_base = base.strip_suffix(self.model_token.as_str())?;
                let alternate_base_name = base
                    .strip_suffix(self.view_model_token().as_str())
                    .filter(|bare| !bare.is_empty())
                    .map(String::from);
                Some(SearchTarget {
                    role,
                    expected_base_name: view_base.to_string(),
                    expected_extension: self.view_extension.clone(),
                    alternate_base_name,
                })
            }
            Role::Unknown => None,
        }
    }
}

fn non_empty_strip<'a>(file_name: &'a str, suffix: &str) -> Option<&'a str> {
    file_name.strip_suffix(suffix).filter(|base| !base.is_empty())
}

/// The file the user is looking at when the command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveFile {
    pub full_path: PathBuf,
    pub base_name: String,
    pub role: Role,
}

impl ActiveFile {
    /// Classifies `full_path` by its file name under `convention`.
    ///
    /// Paths without a UTF-8 file name are [`Role::Unknown`].
    #[must_use]
    pub fn new(full_path: &Path, convention: &NamingConvention) -> Self {
        let (role, base_name) = full_path
            .file_name()
            .and_then(|name| name.to_str())
            .map_or_else(|| (Role::Unknown, String::new()), |name| convention.classify(name));

        Self {
            full_path: full_path.to_path_buf(),
            base_name,
            role,
        }
    }

    /// Derives the counterpart target, or `None` when the role is unknown.
    #[must_use]
    pub fn search_target(&self, convention: &NamingConvention) -> Option<SearchTarget> {
        convention.target_for(self.role, &self.base_name)
    }
}

/// Name of the counterpart file to look for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTarget {
    /// Role of the file the target was derived from.
    pub role: Role,
    pub expected_base_name: String,
    pub expected_extension: String,
    /// Lower-priority base name, only set for ViewModel targets (`Foo` for `FooViewModel`).
    pub alternate_base_name: Option<String>,
}

impl SearchTarget {
    /// Whether a bare file name carries the expected extension and base name.
    ///
    /// Comparison is exact and case-sensitive.
    #[must_use]
    pub fn matches(&self, file_name: &str) -> bool {
        self.base_of(file_name)
            .is_some_and(|base| base == self.expected_base_name)
    }

    /// Whether a bare file name carries the expected extension and the alternate base name.
    #[must_use]
    pub fn matches_alternate(&self, file_name: &str) -> bool {
        match (&self.alternate_base_name, self.base_of(file_name)) {
            (Some(alternate), Some(base)) => base == alternate.as_str(),
            _ => false,
        }
    }

    fn base_of<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        file_name.strip_suffix(self.expected_extension.as_str())
    }
}
