//! CLI entry point for ember-nav.
//!
//! Lists the files of an Ember application category with the files related
//! to the one being edited on top, and opens the chosen one in an editor.
//!
//! # Usage
//!
//! ```bash
//! ember-nav [OPTIONS] <COMMAND>
//!
//! # Models, with the model of the open controller first
//! ember-nav models --current app/assets/javascripts/controllers/post_controller.js
//!
//! # Print the listing instead of showing the panel
//! ember-nav templates --print
//!
//! # Open the application entry file
//! ember-nav application --project ~/src/blog
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

mod host;

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{WrapErr, eyre};
use en_core::{ColorScheme, Config};
use en_nav::{COMMANDS, CommandAction, CommandSpec, Outcome};
use en_scanner::FileWalker;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::host::{CliWorkspace, TerminalUi, UiMode};

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Jump between related files of an Ember application.
///
/// Each command lists one category (models, controllers, ...) of the
/// application. Files related to the one passed with `--current` are listed
/// first.
#[derive(Parser)]
#[command(name = "ember-nav", version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    command: Commands,

    /// Project folder. The first one is the project root.
    ///
    /// Defaults to the current directory.
    #[arg(short, long = "project", global = true)]
    projects: Vec<Utf8PathBuf>,

    /// File currently being edited.
    #[arg(short, long, global = true)]
    current: Option<Utf8PathBuf>,

    /// User settings file merged over the defaults.
    #[arg(long, global = true, env = "EMBER_NAV_SETTINGS")]
    settings: Option<Utf8PathBuf>,

    /// Project settings file.
    ///
    /// Defaults to `.ember-nav.json` in the project root, when present.
    #[arg(long, global = true)]
    project_settings: Option<Utf8PathBuf>,

    /// Print the listing to stdout instead of showing the panel.
    #[arg(long, global = true)]
    print: bool,

    /// Editor to use for opening files (overrides $VISUAL and $EDITOR).
    #[arg(long, global = true, env = "EMBER_NAV_EDITOR")]
    editor: Option<String>,

    /// Panel colors.
    #[arg(long, global = true, value_enum, default_value_t = ColorArg::Auto)]
    color_scheme: ColorArg,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
}

/// Available subcommands.
#[derive(Subcommand, Clone, Copy, PartialEq, Eq, Debug)]
enum Commands {
    /// List models, related to the open controller first.
    Models,
    /// List controllers, related to the open model first.
    Controllers,
    /// List views, related to the open template first.
    Views,
    /// List templates, related to the open view first.
    Templates,
    /// List mixins.
    Mixins,
    /// List data files.
    Data,
    /// List adapters.
    Adapters,
    /// List states.
    States,
    /// Open the application entry file.
    Application,
    /// List the files at the application root.
    Root,
    /// Show every navigation command.
    Commands,
}

impl Commands {
    /// Returns the navigation command this subcommand runs.
    fn spec(self) -> Option<&'static CommandSpec> {
        let name = match self {
            Self::Models => "models",
            Self::Controllers => "controllers",
            Self::Views => "views",
            Self::Templates => "templates",
            Self::Mixins => "mixins",
            Self::Data => "data",
            Self::Adapters => "adapters",
            Self::States => "states",
            Self::Application => "application",
            Self::Root => "root",
            Self::Commands => return None,
        };
        CommandSpec::by_name(name)
    }
}

/// Panel color scheme.
#[derive(Clone, Copy, ValueEnum)]
enum ColorArg {
    /// Pick from the terminal.
    Auto,
    /// Dark text on a light background.
    Light,
    /// Light text on a dark background.
    Dark,
}

impl From<ColorArg> for ColorScheme {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Light => Self::Light,
            ColorArg::Dark => Self::Dark,
        }
    }
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Initializes the tracing subscriber for logging.
///
/// Respects the `RUST_LOG` environment variable if set. Otherwise, uses
/// `debug` level if `--verbose` is set, or `warn` level by default. Logs go
/// to stderr so they never mix with printed listings.
fn init_tracing(verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "warn" };
        EnvFilter::new(format!("{level},ignore=warn,globset=warn"))
    });

    // Check if colors should be disabled (flag or NO_COLOR env var)
    let use_ansi = !no_color && std::env::var("NO_COLOR").is_err();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(use_ansi)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Builds the terminal host [`Config`] from CLI arguments.
fn build_config(cli: &Cli) -> Config {
    let mut config = Config::default();
    config.tui.color_scheme = cli.color_scheme.into();
    config.editor.editor.clone_from(&cli.editor);
    config
}

/// Builds the [`CliWorkspace`] from CLI arguments.
///
/// Project folders and the current file are made absolute so they compare
/// equal to the paths the file walker produces.
///
/// # Errors
///
/// Returns an error if a path does not exist or is not valid UTF-8.
fn build_workspace(cli: &Cli) -> color_eyre::Result<CliWorkspace> {
    let folders = if cli.projects.is_empty() {
        let cwd = Utf8PathBuf::try_from(std::env::current_dir()?)
            .wrap_err("Current directory is not valid UTF-8")?;
        vec![absolute(&cwd, "Current directory")?]
    } else {
        cli.projects
            .iter()
            .map(|path| absolute(path, "Project folder"))
            .collect::<color_eyre::Result<Vec<_>>>()?
    };

    if let Some(root) = folders.first().filter(|root| !root.is_dir()) {
        return Err(eyre!("Project folder is not a directory: {root}"));
    }

    let current = cli
        .current
        .as_deref()
        .map(|path| absolute(path, "Current file"))
        .transpose()?;

    Ok(CliWorkspace::new(folders, current)
        .with_project_settings(cli.project_settings.clone())
        .with_user_settings(cli.settings.clone()))
}

fn absolute(path: &Utf8Path, label: &str) -> color_eyre::Result<Utf8PathBuf> {
    path.canonicalize_utf8()
        .wrap_err_with(|| format!("{label} not found: {path}"))
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

/// Runs one navigation command.
///
/// # Errors
///
/// Returns an error if the project cannot be listed or the UI fails.
fn run_command(cli: &Cli, spec: &CommandSpec) -> color_eyre::Result<()> {
    let workspace = build_workspace(cli)?;
    let mode = if cli.print {
        UiMode::Print
    } else {
        UiMode::Interactive
    };
    let mut ui = TerminalUi::stdout(build_config(cli), mode);

    let outcome = en_nav::execute(spec, &workspace, &FileWalker::new(), &mut ui)?;
    match outcome {
        Outcome::Opened(path) => info!(command = spec.name, file = %path, "Done"),
        Outcome::Cancelled => info!(command = spec.name, "Cancelled"),
        Outcome::NoListing => info!(command = spec.name, "Nothing to show"),
    }
    Ok(())
}

/// Prints every command with the categories it works on.
fn print_commands() -> color_eyre::Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    for spec in COMMANDS {
        let detail = match spec.action {
            CommandAction::List {
                listed,
                related: Some(related),
                ..
            } => format!("{listed}, related from {related}"),
            CommandAction::List { listed, .. } => listed.to_string(),
            CommandAction::OpenApplicationFile => "application_file in root".to_owned(),
            CommandAction::OpenRootFile => "files in root".to_owned(),
        };
        writeln!(handle, "{:<12} {:<24} {detail}", spec.name, spec.caption)?;
    }

    Ok(())
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
fn main() -> color_eyre::Result<()> {
    // 1. Install color-eyre FIRST (before any potential panics)
    color_eyre::install()?;

    // 2. Parse CLI arguments
    let cli = Cli::parse();

    // 3. Initialize tracing (handles --no-color for log output)
    init_tracing(cli.verbose, cli.no_color);

    // 4. Route to appropriate command
    match cli.command.spec() {
        Some(spec) => run_command(&cli, spec),
        None => print_commands(),
    }
}
