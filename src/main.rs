use clap::Parser;
use std::path::PathBuf;

use wav_trim::trimmer;

/// Trim audio clips and export them as 16-bit PCM WAV
#[derive(Parser, Debug)]
#[command(name = "wav-trim")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input_file: PathBuf,

    /// Trim start position in seconds
    #[arg(short, long, default_value = "0")]
    start: f32,

    /// Trim end position in seconds (defaults to the end of the clip)
    #[arg(short, long)]
    end: Option<f32>,

    /// Output WAV file (defaults to <input stem>_trimmed.wav)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print clip information and exit without writing
    #[arg(short, long)]
    info: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.info {
        trimmer::print_info(&args.input_file)?;
        return Ok(());
    }

    if let Some(end) = args.end {
        if end <= args.start {
            eprintln!("Error: --end must be greater than --start");
            std::process::exit(1);
        }
    }

    trimmer::process_file(
        &args.input_file,
        args.output.as_deref(),
        args.start,
        args.end,
        args.verbose,
    )?;

    Ok(())
}
