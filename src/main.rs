//! Command-line host for the counterpart lookup.
//!
//! Editors bind this binary to a key or menu entry through their "external
//! tool" hook, passing the active file (and optionally the project paths):
//!
//! ```text
//! mvvm-counterpart -p ~/src/Shop/Shop.csproj ~/src/Shop/UI/CustomerView.xaml
//! ```
//!
//! A found counterpart is opened with the configured `open_with` program, or
//! printed on stdout when none is configured. A miss is reported on stderr.
//!
//! # Exit Status
//!
//! - `0`: counterpart found and opened
//! - `1`: no counterpart
//! - `2`: configuration or host error

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};

use mvvm_counterpart::infrastructure::paths::project_directory;
use mvvm_counterpart::{run_command, Config, CounterpartError, EditorHost, Resolution};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File currently open in the editor.
    active_file: PathBuf,

    /// Project directory or project file; repeat for several projects.
    #[arg(short, long = "project", value_name = "PATH")]
    projects: Vec<PathBuf>,

    /// Configuration file (default: <config dir>/mvvm-counterpart/config.toml).
    #[arg(short, long, env = "MVVM_COUNTERPART_CONFIG")]
    config: Option<PathBuf>,

    /// Opener command, one argument per occurrence; the path is appended.
    ///
    /// `--open-with code --open-with --reuse-window` runs
    /// `code --reuse-window <PATH>`. Arguments are passed as given, so a
    /// program path may contain spaces.
    #[arg(long, value_name = "ARG", allow_hyphen_values = true)]
    open_with: Vec<String>,

    /// Print the lookup result as JSON instead of opening the file.
    #[arg(long)]
    json: bool,

    /// Tracing filter (overridden by RUST_LOG).
    #[arg(long, value_name = "LEVEL")]
    trace_level: Option<String>,
}

/// [`EditorHost`] backed by the command line and the terminal.
#[derive(Debug)]
struct CliHost {
    active_file: PathBuf,
    projects: Vec<PathBuf>,
    open_with: Vec<String>,
    json: bool,
}

impl CliHost {
    fn new(cli: &Cli, config: &Config) -> std::io::Result<Self> {
        let cwd = std::env::current_dir()?;
        let absolute = |p: &Path| if p.is_absolute() { p.to_path_buf() } else { cwd.join(p) };

        let mut projects: Vec<PathBuf> = if cli.projects.is_empty() {
            config.projects.clone()
        } else {
            cli.projects.clone()
        };
        if projects.is_empty() {
            projects.push(cwd.clone());
        }
        let projects = projects
            .iter()
            .map(|p| project_directory(&absolute(p)))
            .collect();

        let open_with = if cli.open_with.is_empty() {
            config.open_with.clone()
        } else {
            cli.open_with.clone()
        };

        Ok(Self {
            active_file: absolute(&cli.active_file),
            projects,
            open_with,
            json: cli.json,
        })
    }
}

impl EditorHost for CliHost {
    fn active_document_path(&self) -> Option<PathBuf> {
        Some(self.active_file.clone()).filter(|p| !p.as_os_str().is_empty())
    }

    fn project_paths(&self) -> Vec<PathBuf> {
        self.projects.clone()
    }

    fn open_file(&mut self, path: &Path) -> mvvm_counterpart::Result<()> {
        if self.json {
            return Ok(());
        }

        let Some((program, args)) = self.open_with.split_first() else {
            println!("{}", path.display());
            return Ok(());
        };

        tracing::debug!(program = %program, path = %path.display(), "spawning opener");
        let status = Command::new(program)
            .args(args)
            .arg(path)
            .status()
            .map_err(|e| CounterpartError::Host(format!("cannot run {program}: {e}")))?;

        if status.success() {
            Ok(())
        } else {
            Err(CounterpartError::Host(format!("{program} exited with {status}")))
        }
    }

    fn notify(&mut self, message: &str) {
        if !self.json {
            eprintln!("{message}");
        }
    }
}

fn run(cli: &Cli) -> mvvm_counterpart::Result<Resolution> {
    let mut config = Config::load(cli.config.as_deref())?;
    if cli.trace_level.is_some() {
        config.trace_level.clone_from(&cli.trace_level);
    }
    mvvm_counterpart::observability::init_tracing(&config);

    let span = tracing::debug_span!("command");
    let _guard = span.enter();

    let mut host = CliHost::new(cli, &config)?;
    tracing::debug!(?host, "host ready");

    let resolver = config.resolver();
    let (resolution, _action) = run_command(&mut host, &resolver)?;

    if cli.json {
        let json = serde_json::to_string(&resolution)
            .map_err(|e| CounterpartError::Host(format!("cannot encode result: {e}")))?;
        println!("{json}");
    }

    Ok(resolution)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(resolution) if resolution.is_found() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("mvvm-counterpart: {e}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("mvvm-counterpart").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn command_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn project_files_become_directories() {
        let dir = tempfile::tempdir().unwrap();
        let csproj = dir.path().join("Shop.csproj");
        std::fs::write(&csproj, "<Project />").unwrap();
        let active = dir.path().join("UI/CustomerView.xaml");

        let args = cli(&["-p", csproj.to_str().unwrap(), active.to_str().unwrap()]);
        let host = CliHost::new(&args, &Config::default()).unwrap();

        assert_eq!(host.project_paths(), vec![dir.path().to_path_buf()]);
        assert_eq!(host.active_document_path(), Some(active));
    }

    #[test]
    fn config_projects_used_without_flags() {
        let config = Config {
            projects: vec![PathBuf::from("/src/Shop")],
            open_with: vec!["code".to_string()],
            ..Config::default()
        };
        let host = CliHost::new(&cli(&["/src/Shop/A.xaml"]), &config).unwrap();

        assert_eq!(host.project_paths(), vec![PathBuf::from("/src/Shop")]);
        assert_eq!(host.open_with, vec!["code".to_string()]);
    }

    #[test]
    fn open_with_flag_overrides_config() {
        let config = Config {
            open_with: vec!["code".to_string()],
            ..Config::default()
        };
        let args = cli(&["--open-with", "vim", "--open-with", "-p", "/a/A.xaml"]);
        let host = CliHost::new(&args, &config).unwrap();
        assert_eq!(host.open_with, vec!["vim".to_string(), "-p".to_string()]);
    }

    #[test]
    fn open_with_keeps_spaces_inside_an_argument() {
        let args = cli(&[
            "--open-with",
            "/opt/My Editor/edit",
            "--open-with",
            "--new-tab",
            "/a/A.xaml",
        ]);
        let host = CliHost::new(&args, &Config::default()).unwrap();
        assert_eq!(
            host.open_with,
            vec!["/opt/My Editor/edit".to_string(), "--new-tab".to_string()]
        );
    }

    #[test]
    fn working_directory_is_fallback_project() {
        let host = CliHost::new(&cli(&["A.xaml"]), &Config::default()).unwrap();
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(host.project_paths(), vec![cwd.clone()]);
        assert_eq!(host.active_document_path(), Some(cwd.join("A.xaml")));
    }
}
