//! `dossier`: terminal viewer and editor for an employee profile.
//!
//! # Usage
//!
//! ```
//! dossier
//! dossier --record profile.json --theme light
//! dossier --config ~/.config/dossier/config.toml --log-file dossier.log
//! ```

mod app;
mod startup;
mod theme;
mod ui;

use std::{
  fs::File,
  io,
  path::{Path, PathBuf},
  sync::Mutex,
  time::Duration,
};

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use crossterm::{
  event::{self, Event, KeyEventKind},
  execute,
  terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
  },
};
use dossier_core::{
  record::Employee,
  source::{JsonFile, RecordSource, SampleRecord},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use serde::Deserialize;
use startup::Startup;
use theme::Theme;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOAD_DELAY_MS: u64 = 800;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "dossier", about = "View and edit an employee profile")]
struct Args {
  /// Path to a TOML config file (record, load_delay_ms, log_file, theme).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// JSON record to open (default: the built-in sample profile).
  #[arg(short, long, value_name = "FILE", env = "DOSSIER_RECORD")]
  record: Option<PathBuf>,

  /// How long the loading screen stays up, in milliseconds (default: 800).
  #[arg(long, value_name = "MS")]
  load_delay_ms: Option<u64>,

  /// Write logs here. Nothing is logged without it.
  #[arg(long, value_name = "FILE", env = "DOSSIER_LOG_FILE")]
  log_file: Option<PathBuf>,

  /// Colour theme (default: dark).
  #[arg(long, value_enum)]
  theme: Option<Theme>,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default, Debug)]
#[serde(default)]
struct ConfigFile {
  record:        Option<PathBuf>,
  load_delay_ms: Option<u64>,
  log_file:      Option<PathBuf>,
  theme:         Option<Theme>,
}

/// Settings after merging flags, config file and defaults.
#[derive(Debug)]
struct Settings {
  record:     Option<PathBuf>,
  load_delay: Duration,
  log_file:   Option<PathBuf>,
  theme:      Theme,
}

impl Settings {
  /// CLI flags override the config file, which overrides defaults.
  fn resolve(args: Args, file: ConfigFile) -> Self {
    Self {
      record:     args.record.or(file.record),
      load_delay: Duration::from_millis(
        args
          .load_delay_ms
          .or(file.load_delay_ms)
          .unwrap_or(DEFAULT_LOAD_DELAY_MS),
      ),
      log_file:   args.log_file.or(file.log_file),
      theme:      args.theme.or(file.theme).unwrap_or_default(),
    }
  }
}

fn read_config(path: &Path) -> Result<ConfigFile> {
  let raw = std::fs::read_to_string(path)
    .with_context(|| format!("reading config file {}", path.display()))?;
  toml::from_str(&raw).context("parsing config file")
}

/// Install a file-backed subscriber. The terminal belongs to the UI, so
/// without a log file there is no subscriber at all.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
  let Some(path) = log_file else {
    return Ok(());
  };
  let file = File::create(path)
    .with_context(|| format!("creating log file {}", path.display()))?;
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(Mutex::new(file))
    .with_ansi(false)
    .init();
  Ok(())
}

fn load_record(path: Option<&Path>) -> Result<Employee> {
  match path {
    Some(path) => JsonFile(path.to_path_buf())
      .load()
      .with_context(|| format!("loading record {}", path.display())),
    None => SampleRecord.load().context("loading sample record"),
  }
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();

  let file_cfg = match &args.config {
    Some(path) => read_config(path)?,
    None => ConfigFile::default(),
  };
  let settings = Settings::resolve(args, file_cfg);

  init_tracing(settings.log_file.as_deref())?;
  let record = load_record(settings.record.as_deref())?;
  tracing::info!(employee = %record.id, theme = %settings.theme, "starting");

  let mut app = App::new(record, settings.theme);
  let startup = Startup::spawn(settings.load_delay);
  app.loading = startup.is_loading();

  // Set up the terminal.
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  let run_result = run_event_loop(&mut terminal, &mut app, &startup);
  startup.cancel();

  // Restore terminal regardless of result.
  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  run_result
}

// ─── Event loop ───────────────────────────────────────────────────────────────

fn run_event_loop(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App,
  startup: &Startup,
) -> Result<()> {
  loop {
    app.loading = startup.is_loading();
    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    // Poll for an event, yielding control to tokio while waiting.
    let maybe_event = tokio::task::block_in_place(|| {
      if event::poll(Duration::from_millis(50))? {
        Ok::<_, io::Error>(Some(event::read()?))
      } else {
        Ok(None)
      }
    })?;

    if let Some(Event::Key(key)) = maybe_event {
      if key.kind == KeyEventKind::Press && !app.handle_key(key) {
        break;
      }
    }
  }

  tracing::info!(mode = %app.mode(), "quitting");
  Ok(())
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use tempfile::NamedTempFile;

  use super::*;

  fn args(argv: &[&str]) -> Args {
    Args::parse_from(std::iter::once("dossier").chain(argv.iter().copied()))
  }

  #[test]
  fn defaults_apply_without_flags_or_file() {
    let settings = Settings::resolve(args(&[]), ConfigFile::default());
    assert_eq!(settings.load_delay, Duration::from_millis(800));
    assert_eq!(settings.theme, Theme::Dark);
    assert!(settings.log_file.is_none());
  }

  #[test]
  fn flags_override_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "load_delay_ms = 10\ntheme = \"light\"\nrecord = \"a.json\"")
      .unwrap();
    let cfg = read_config(file.path()).unwrap();

    let settings =
      Settings::resolve(args(&["--load-delay-ms", "0", "--theme", "dark"]), cfg);
    assert_eq!(settings.load_delay, Duration::ZERO);
    assert_eq!(settings.theme, Theme::Dark);
    assert_eq!(settings.record, Some(PathBuf::from("a.json")));
  }

  #[test]
  fn malformed_config_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "load_delay_ms = \"soon\"").unwrap();
    assert!(read_config(file.path()).is_err());
  }

  #[test]
  fn sample_record_is_the_default() {
    let record = load_record(None).unwrap();
    assert_eq!(record.full_name(), "Ming Li");
  }
}
