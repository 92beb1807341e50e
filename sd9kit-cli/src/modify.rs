use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use sd9kit_sd9::{Sd9Sound, TrackParams};

#[derive(Args)]
pub struct ModifyArgs {
    /// SD9 file to use as base
    sd9: PathBuf,

    #[command(flatten)]
    track: TrackOpts,

    /// Overwrite the input file instead of writing `<input>_out`
    #[arg(short, long)]
    clobber: bool,

    /// Explicit output path (defaults to the clobber naming)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Track parameters shared by `modify` and `import`.
#[derive(Args)]
pub struct TrackOpts {
    /// Playback volume, 0..=125 (higher is louder)
    #[arg(short = 'v', long)]
    volume: Option<u32>,

    /// Enable section looping
    #[arg(short = 'l', long = "loop")]
    loop_enabled: bool,

    /// Loop start in samples
    #[arg(long)]
    loop_start: Option<u32>,

    /// Loop end in samples
    #[arg(long)]
    loop_end: Option<u32>,
}

impl TrackOpts {
    fn to_params(&self) -> TrackParams {
        TrackParams {
            volume: self.volume,
            loop_enabled: self.loop_enabled,
            loop_start: self.loop_start,
            loop_end: self.loop_end,
        }
    }
}

/// Apply the requested parameters, logging each rejected one.
pub(crate) fn apply_track(sound: &mut Sd9Sound, track: &TrackOpts) {
    for warning in track.to_params().apply_to(&mut sound.header) {
        tracing::warn!("ignoring parameter: {warning}");
    }
}

/// Historical output naming: rewrite in place when clobbering, otherwise
/// append `_out` to the input's file name.
pub(crate) fn default_output(input: &Path, clobber: bool) -> PathBuf {
    if clobber {
        return input.to_path_buf();
    }
    let mut name = input
        .file_name()
        .map_or_else(OsString::new, OsString::from);
    name.push("_out");
    input.with_file_name(name)
}

pub fn execute(args: ModifyArgs) -> Result<()> {
    let mut sound = crate::load_sd9(&args.sd9)?;
    apply_track(&mut sound, &args.track);

    let dest = args
        .output
        .unwrap_or_else(|| default_output(&args.sd9, args.clobber));
    crate::save_sd9(&sound, &dest, args.clobber)?;

    println!("Saved SD9: {}", dest.display());
    Ok(())
}
