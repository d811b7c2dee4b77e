use mvvm_counterpart::{run_command, Action, Config, EditorHost, MissReason, Resolution};
use std::fs;
use std::path::{Path, PathBuf};

/// Host that records what the command asked of it.
struct ScriptedHost {
    active: Option<PathBuf>,
    projects: Vec<PathBuf>,
    opened: Vec<PathBuf>,
    notifications: Vec<String>,
}

impl ScriptedHost {
    fn new(active: Option<PathBuf>, projects: Vec<PathBuf>) -> Self {
        Self {
            active,
            projects,
            opened: Vec::new(),
            notifications: Vec::new(),
        }
    }
}

impl EditorHost for ScriptedHost {
    fn active_document_path(&self) -> Option<PathBuf> {
        self.active.clone()
    }

    fn project_paths(&self) -> Vec<PathBuf> {
        self.projects.clone()
    }

    fn open_file(&mut self, path: &Path) -> mvvm_counterpart::Result<()> {
        self.opened.push(path.to_path_buf());
        Ok(())
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}

#[test]
fn custom_convention_from_config_drives_the_lookup() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("Views")).unwrap();
    fs::create_dir_all(dir.path().join("ViewModels")).unwrap();
    fs::write(dir.path().join("Views/MainWindow.axaml"), "").unwrap();
    fs::write(dir.path().join("ViewModels/MainWindowViewModel.cs"), "").unwrap();

    let config = Config::from_toml_str(
        "[convention]\nview_extension = \".axaml\"\ncode_behind_extension = \".axaml.cs\"",
    )
    .unwrap();
    let resolver = config.resolver();

    let mut host = ScriptedHost::new(
        Some(dir.path().join("ViewModels/MainWindowViewModel.cs")),
        vec![dir.path().to_path_buf()],
    );
    let (resolution, action) = run_command(&mut host, &resolver).unwrap();

    let view = dir.path().join("Views/MainWindow.axaml");
    assert_eq!(resolution, Resolution::found(view.clone()));
    assert_eq!(action, Action::OpenFile(view.clone()));
    assert_eq!(host.opened, vec![view]);
}

#[test]
fn second_project_owns_the_file() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    fs::write(first.path().join("CustomerViewModel.cs"), "").unwrap();
    fs::write(second.path().join("CustomerView.xaml"), "").unwrap();

    let mut host = ScriptedHost::new(
        Some(second.path().join("CustomerView.xaml")),
        vec![first.path().to_path_buf(), second.path().to_path_buf()],
    );
    let (resolution, _) = run_command(&mut host, &Config::default().resolver()).unwrap();

    // The ViewModel lives in another project, which is not searched.
    assert_eq!(resolution, Resolution::not_found(MissReason::CounterpartNotPresent));
    assert!(host.opened.is_empty());
    assert_eq!(host.notifications.len(), 1);
}
