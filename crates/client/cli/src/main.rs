//! `armory`: inspects a save file and prints derived equipment views as JSON.
mod commands;
mod config;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use armory_runtime::{Armory, FileSaveRepository};
use clap::Parser;
use commands::Command;
use config::CliConfig;

/// Equipment composition inspector
#[derive(Parser)]
#[command(name = "armory")]
#[command(about = "Print effective weapons and player effects for a save", long_about = None)]
#[command(version)]
struct Cli {
    /// Save file (overrides ARMORY_SAVE_PATH)
    #[arg(short, long, value_name = "FILE", global = true)]
    save: Option<PathBuf>,

    /// Catalog directory (overrides CONTENT_DATA_DIR)
    #[arg(short, long, value_name = "DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = CliConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    let data_dir = cli.data_dir.or(config.data_dir);
    let armory = match &data_dir {
        Some(dir) => Armory::builder().data_dir(dir).build()?,
        None => Armory::builtin()?,
    };

    let save_path = cli.save.unwrap_or(config.save_path);
    tracing::info!("Inspecting save {}", save_path.display());
    let repository = FileSaveRepository::new(&save_path);

    cli.command
        .execute(&armory, &repository, std::io::stdout().lock())
}
