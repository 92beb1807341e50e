use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::modify::{TrackOpts, apply_track, default_output};

#[derive(Args)]
pub struct ImportArgs {
    /// SD9 file to use as base
    sd9: PathBuf,

    /// Audio file to import as the new payload (no transcoding is done)
    audio: PathBuf,

    #[command(flatten)]
    track: TrackOpts,

    /// Overwrite the input file instead of writing `<input>_out`
    #[arg(short, long)]
    clobber: bool,

    /// Explicit output path (defaults to the clobber naming)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn execute(args: ImportArgs) -> Result<()> {
    let mut sound = crate::load_sd9(&args.sd9)?;
    apply_track(&mut sound, &args.track);

    let audio = fs::read(&args.audio)
        .with_context(|| format!("could not read audio track {}", args.audio.display()))?;
    sound.import_audio(audio);

    let dest = args
        .output
        .unwrap_or_else(|| default_output(&args.sd9, args.clobber));
    crate::save_sd9(&sound, &dest, args.clobber)?;

    println!("Audio imported into SD9: {}", dest.display());
    Ok(())
}
