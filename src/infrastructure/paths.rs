//! Path utilities for configuration lookup and project path normalization.

use std::path::{Path, PathBuf};

/// Directory name used under the platform configuration directory.
const APP_DIR_NAME: &str = "mvvm-counterpart";

/// Returns the configuration directory, e.g. `~/.config/mvvm-counterpart` on Linux.
///
/// Returns `None` when the platform has no notion of a configuration directory.
#[must_use]
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME))
}

/// Returns the default configuration file path (`<config dir>/config.toml`).
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a tilde, and all paths when the home directory is unknown,
/// are returned unchanged.
///
/// # Examples
///
/// ```
/// use mvvm_counterpart::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
/// if let Some(home) = dirs::home_dir() {
///     assert_eq!(expand_tilde("~/src"), home.join("src"));
///     assert_eq!(expand_tilde("~"), home);
/// }
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_tilde_with(path, dirs::home_dir().as_deref())
}

fn expand_tilde_with(path: &str, home: Option<&Path>) -> PathBuf {
    match (path, home) {
        ("~", Some(home)) => home.to_path_buf(),
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        _ => PathBuf::from(path),
    }
}

/// Turns a project path into the directory that roots its source tree.
///
/// Editors report projects either as directories or as project files
/// (`App.csproj`). A project file stands for its parent directory.
#[must_use]
pub fn project_directory(project: &Path) -> PathBuf {
    if project.is_file() {
        if let Some(parent) = project.parent() {
            return parent.to_path_buf();
        }
    }
    project.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_expansion() {
        let home = Path::new("/home/dev");
        assert_eq!(expand_tilde_with("~", Some(home)), PathBuf::from("/home/dev"));
        assert_eq!(expand_tilde_with("~/src/App", Some(home)), PathBuf::from("/home/dev/src/App"));
        assert_eq!(expand_tilde_with("~other/x", Some(home)), PathBuf::from("~other/x"));
        assert_eq!(expand_tilde_with("~/src", None), PathBuf::from("~/src"));
        assert_eq!(expand_tilde_with("/opt/x", Some(home)), PathBuf::from("/opt/x"));
    }

    #[test]
    fn project_file_maps_to_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let project_file = dir.path().join("App.csproj");
        std::fs::write(&project_file, "<Project />").unwrap();

        assert_eq!(project_directory(&project_file), dir.path());
        assert_eq!(project_directory(dir.path()), dir.path());
    }

    #[test]
    fn missing_project_path_is_kept() {
        let missing = Path::new("/definitely/not/here");
        assert_eq!(project_directory(missing), missing);
    }
}
