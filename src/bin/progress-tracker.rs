//! Interactive terminal tracker.
//!
//! Reads one command per line from stdin and redraws the progress bar on
//! stdout. Logs go to stderr, filtered by `--log-level` or `RUST_LOG`.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use progress_mvu::console::{parse_line, ConsoleRenderer, HELP};
use progress_mvu::{AppController, Command, Config, Emitter, GoalType, Locale, TokioScheduler};

#[derive(Parser, Debug)]
#[command(name = "progress-tracker", about = "Track progress toward a goal")]
struct Cli {
    /// TOML file with session defaults.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    goal: Option<f64>,
    /// `currency` or `elements`.
    #[arg(long)]
    goal_type: Option<GoalType>,
    /// `en` or `es`.
    #[arg(long)]
    locale: Option<Locale>,
    /// Overrides RUST_LOG, e.g. `debug` or `progress_mvu=trace`.
    #[arg(long)]
    log_level: Option<String>,
}

fn init_tracing(level: Option<&str>) {
    let env_filter = match level {
        Some(level) => EnvFilter::try_new(level).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    }
    .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(env_filter)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };
    let mut config = config
        .apply_env()
        .context("applying environment overrides")?;

    if let Some(goal) = cli.goal {
        config.goal = goal;
    }
    if let Some(goal_type) = cli.goal_type {
        config.goal_type = goal_type;
    }
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    Ok(config)
}

/// Blocking stdin reader on its own thread. End of input quits the session.
fn spawn_input_reader(emitter: Emitter) -> io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("stdin".into())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(err) => {
                        warn!(error = %err, "stdin read failed");
                        break;
                    }
                };
                if line.trim().eq_ignore_ascii_case("help") {
                    eprintln!("{HELP}");
                    continue;
                }
                match parse_line(&line) {
                    Ok(commands) => commands.into_iter().for_each(|cmd| emitter.emit(cmd)),
                    Err(err) => eprintln!("{err} (type `help` for commands)"),
                }
            }
            emitter.emit(Command::Shutdown);
        })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let config = load_config(&cli)?;
    info!(
        goal = config.goal,
        goal_type = %config.goal_type,
        locale = %config.locale,
        "starting tracker"
    );

    let scheduler = TokioScheduler::from_current().context("no tokio runtime")?;
    let mut controller =
        AppController::new(config, ConsoleRenderer::new(io::stdout()), scheduler);

    // The reader thread is left blocked on stdin if we quit first.
    spawn_input_reader(controller.emitter()).context("spawning stdin reader")?;

    controller.run().await;
    info!("tracker stopped");
    Ok(())
}
