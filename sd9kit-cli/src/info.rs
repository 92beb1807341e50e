use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct InfoArgs {
    /// SD9 file to inspect
    sd9: PathBuf,

    /// Emit machine-readable JSON instead of text
    #[arg(long)]
    json: bool,
}

pub fn execute(args: InfoArgs) -> Result<()> {
    let sound = crate::load_sd9(&args.sd9)?;
    let info = sound.info();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("[{}]", args.sd9.display());
        print!("{info}");
    }
    Ok(())
}
