use std::fs::File;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use kanban::core::Column;
use kanban::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    #[default]
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser)]
#[command(name = "kanban", about = "Three-column kanban board for the terminal")]
struct Args {
    /// Config file to read instead of ~/.kanban/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Column focused at startup
    #[arg(short, long, value_enum)]
    start_column: Option<Column>,

    /// Where log lines are written
    #[arg(long, default_value = "kanban.log")]
    log_file: PathBuf,

    #[arg(long, default_value_t, value_enum)]
    log_level: LogLevel,
}

fn main() {
    let args = Args::parse();

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(args.log_level.into(), log_config, log_file);
    }

    log::info!("Kanban starting up");

    if let Err(e) = run(&args) {
        log::error!("Fatal: {e}");
        eprintln!("kanban: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> kanban::Result<()> {
    // An explicit path must load; the default location falls back to defaults
    let mut file_config = match &args.config {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config().unwrap_or_else(|e| {
            log::warn!("Using default config: {e}");
            Default::default()
        }),
    };
    config::apply_env(&mut file_config);
    let overrides = CliOverrides {
        start_column: args.start_column,
    };
    let resolved = config::resolve(&file_config, &overrides);
    log::info!(
        "Resolved config: chrome_height={}, start_column={:?}",
        resolved.chrome_height,
        resolved.start_column
    );

    kanban::tui::run(resolved)
}
