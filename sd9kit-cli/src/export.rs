use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use sd9kit_sd9::create_output;

#[derive(Args)]
pub struct ExportArgs {
    /// SD9 file to read the payload from
    sd9: PathBuf,

    /// Destination for the raw audio payload
    output: PathBuf,

    /// Overwrite an existing destination
    #[arg(short, long)]
    clobber: bool,
}

pub fn execute(args: ExportArgs) -> Result<()> {
    let sound = crate::load_sd9(&args.sd9)?;

    let mut file = create_output(&args.output, args.clobber)
        .with_context(|| format!("could not create {}", args.output.display()))?;
    file.write_all(sound.audio())
        .with_context(|| format!("could not write {}", args.output.display()))?;

    println!("Audio exported from SD9: {}", args.output.display());
    Ok(())
}
