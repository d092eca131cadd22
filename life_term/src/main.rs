// main.rs - Conway's Game of Life in the terminal
//
// Parses the grid size, sets up logging, then hands the terminal to the
// dispatch loop on a single-threaded tokio runtime.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use clap::builder::RangedU64ValueParser;
use life_core::{Dimensions, REFERENCE_HEIGHT, REFERENCE_WIDTH};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod app;       // Dispatch loop
mod input;     // Key decoding and reader task
mod terminal;  // Raw-mode session guard
mod ui;        // Render model painting

#[derive(Parser, Debug)]
#[command(
    name = "life_term",
    version,
    about = "Conway's Game of Life in the terminal",
    long_about = "Move the cursor with wasd or the arrow keys, toggle cells with space, \
                  start and pause with return, change speed with plus and minus, \
                  reset with r and quit with q or ctrl+c."
)]
struct Cli {
    /// Number of grid columns.
    #[arg(long, default_value_t = REFERENCE_WIDTH, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    width: usize,

    /// Number of grid rows.
    #[arg(long, default_value_t = REFERENCE_HEIGHT, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    height: usize,

    /// Write logs to this file. Nothing is logged without it, since the terminal is in use.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Most verbose level written to the log file.
    #[arg(long, default_value_t = Level::INFO)]
    log_level: Level,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let dimensions = Dimensions::new(cli.width, cli.height)
        .context("invalid grid size")?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("cannot start the runtime")?;
    runtime.block_on(app::run(dimensions))
}

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
