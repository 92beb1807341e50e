use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use sd9kit_sd9::create_output;
use sd9kit_ssp::{Sd9Record, SspScanner};

#[derive(Args)]
pub struct ScanArgs {
    /// SSP archive to scan
    ssp: PathBuf,

    /// Export records as .sd9 (header + payload) instead of .wav (payload only)
    #[arg(long)]
    sd9: bool,

    /// Output directory (default: export_<archive name>)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Overwrite existing output files
    #[arg(short, long)]
    clobber: bool,

    /// Print one line per record instead of a progress mark
    #[arg(short = 'v', long)]
    verbose: bool,
}

pub fn execute(args: ScanArgs) -> Result<()> {
    let name = args
        .ssp
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .context("archive path has no file name")?;

    let out_dir = args
        .out_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("export_{name}")));
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("could not create directory {}", out_dir.display()))?;

    println!("Scanning {}", args.ssp.display());
    let file =
        File::open(&args.ssp).with_context(|| format!("could not open {}", args.ssp.display()))?;
    let scanner = SspScanner::new(BufReader::new(file));

    let extension = if args.sd9 { "sd9" } else { "wav" };
    let mut extracted = 0u32;
    let mut result = Ok(());

    for item in scanner {
        match item {
            Ok(record) => {
                if args.verbose {
                    println!(
                        "Found SD9: offset={:#x} size={}",
                        record.offset,
                        record.sound.audio().len()
                    );
                } else {
                    print!("\u{266a}");
                    io::stdout().flush()?;
                }

                let out_path = out_dir.join(format!("{name}_{extracted}.{extension}"));
                if let Err(e) = write_record(&record, &out_path, args.sd9, args.clobber) {
                    result = Err(e);
                    break;
                }
                extracted += 1;
            }
            Err(e) => {
                result = Err(e.into());
                break;
            }
        }
    }

    if !args.verbose {
        println!();
    }
    println!("Found {extracted} file(s) in {name}");
    result
}

fn write_record(record: &Sd9Record, path: &Path, as_sd9: bool, overwrite: bool) -> Result<()> {
    let mut file = create_output(path, overwrite)
        .with_context(|| format!("could not create {}", path.display()))?;
    if as_sd9 {
        record.sound.write_to(&mut file)?;
    } else {
        file.write_all(record.sound.audio())?;
    }
    Ok(())
}
