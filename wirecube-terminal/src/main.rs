/// wirecube - drag-to-spin wireframe cube in the terminal
///
/// Controls:
///   - Left mouse drag: Rotate the cube (it keeps spinning after release)
///   - R: Reset orientation
///   - H: Toggle the status line
///   - Q/ESC: Quit
use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wirecube_core::config::{DEFAULT_CADENCE, DEFAULT_DECAY, DEFAULT_SCALE_DIVISOR};
use wirecube_core::SceneConfig;
use wirecube_terminal::{AppOptions, TerminalApp};

#[derive(Parser, Debug)]
#[command(name = "wirecube")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Wireframe cube you can spin with the mouse", long_about = None)]
struct Cli {
    /// Frames between drag anchor resamples (also the velocity divisor)
    #[arg(long, default_value_t = DEFAULT_CADENCE)]
    cadence: u32,

    /// Per-frame velocity factor once the mouse is released
    #[arg(long, default_value_t = DEFAULT_DECAY)]
    decay: f64,

    /// Cube size is min(width, height) divided by this
    #[arg(long, default_value_t = DEFAULT_SCALE_DIVISOR)]
    scale_divisor: f64,

    /// Sleep between frames, in milliseconds
    #[arg(long, default_value_t = 10)]
    frame_delay_ms: u64,

    /// Write logs to this file (logging is off without it)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable verbose output in the log file
    #[arg(short, long, requires = "log_file")]
    verbose: bool,
}

/// Install the log subscriber.
///
/// The frame loop owns the tty, so logs only go to `--log-file`; without one
/// nothing is installed and events are discarded.
fn init_tracing(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    run(Cli::parse())
}

fn run(cli: Cli) -> Result<()> {
    init_tracing(&cli)?;

    let scene = SceneConfig::new(cli.cadence, cli.decay, cli.scale_divisor)
        .context("Invalid scene configuration")?;
    let options = AppOptions {
        scene,
        frame_delay: Duration::from_millis(cli.frame_delay_ms),
    };

    println!("Starting wirecube (drag with the left mouse button, press Q to quit)...");

    let mut app = TerminalApp::new(options).context("Failed to read terminal size")?;
    app.run().context("Terminal frame loop failed")?;

    Ok(())
}
