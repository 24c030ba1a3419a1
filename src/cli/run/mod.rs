//! Run command - processes console commands from a file or stdin

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::cli::console::Console;
use crate::config::AppConfig;
use crate::infrastructure::logging;
use crate::infrastructure::services::Controller;

/// Arguments for the run command
#[derive(Args, Clone, Debug)]
pub struct RunArgs {
    /// Read commands from this file instead of stdin
    #[arg(long, short)]
    pub input: Option<PathBuf>,
}

/// Run the console until `End` or end of input
pub fn run(args: RunArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&logging::LoggingConfig {
        level: config.logging.level.clone(),
        format: config.logging.format.clone(),
    });

    let mut console = Console::new(Controller::in_memory(), &config.console);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.input {
        Some(path) => {
            info!(path = %path.display(), "Reading commands from file");
            let file = File::open(&path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            console.run(BufReader::new(file), &mut out)
        }
        None => console.run(io::stdin().lock(), &mut out),
    }
}
