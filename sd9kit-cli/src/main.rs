//! sd9kit - SD9/SSP sound asset tool
//!
//! # Commands
//!
//! - `sd9kit info` - print an SD9 file's decoded header fields
//! - `sd9kit modify` - change volume/loop parameters and save
//! - `sd9kit import` - replace the audio payload from a file and save
//! - `sd9kit export` - dump the audio payload to a file
//! - `sd9kit scan` - extract every SD9 embedded in an SSP archive

mod export;
mod import;
mod info;
mod modify;
mod scan;

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sd9kit_sd9::{Sd9Sound, create_output};

/// sd9kit - SD9 import, export, and modification tool
#[derive(Parser)]
#[command(name = "sd9kit")]
#[command(about = "SD9 import, export, and modification tool")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print an SD9 file's decoded header fields
    Info(info::InfoArgs),

    /// Modify SD9 volume/loop parameters and save
    Modify(modify::ModifyArgs),

    /// Import an audio payload into an SD9 file and save
    Import(import::ImportArgs),

    /// Export the audio payload from an SD9 file
    Export(export::ExportArgs),

    /// Scan an SSP archive and extract embedded SD9 records
    Scan(scan::ScanArgs),
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Info(args) => info::execute(args),
        Commands::Modify(args) => modify::execute(args),
        Commands::Import(args) => import::execute(args),
        Commands::Export(args) => export::execute(args),
        Commands::Scan(args) => scan::execute(args),
    }
}

/// Load a complete SD9 file into memory; the handle is released before the
/// caller writes anything back.
pub(crate) fn load_sd9(path: &Path) -> Result<Sd9Sound> {
    let file = File::open(path).with_context(|| format!("could not open {}", path.display()))?;
    Sd9Sound::read_from(file).with_context(|| format!("invalid SD9 file {}", path.display()))
}

/// Persist a sound to `dest`, honoring the overwrite guard.
pub(crate) fn save_sd9(sound: &Sd9Sound, dest: &Path, overwrite: bool) -> Result<()> {
    let mut file = create_output(dest, overwrite)
        .with_context(|| format!("could not create {}", dest.display()))?;
    sound
        .write_to(&mut file)
        .with_context(|| format!("could not save SD9 to {}", dest.display()))?;
    Ok(())
}
