//! Trim pipeline: read a clip, cut the requested range, write the result.

use std::path::{Path, PathBuf};

use crate::clip::format_time;
use crate::error::ClipResult;
use crate::input::read_wav;
use crate::output::{default_output_path, write_wav_file};

/// Read `input_path`, trim it to `[start_secs, end_secs)`, and write the
/// result as 16-bit PCM WAV.
///
/// `end_secs` defaults to the end of the clip, `output_path` to
/// `<stem>_trimmed.wav` next to the input. Returns the path written.
pub fn process_file(
    input_path: &Path,
    output_path: Option<&Path>,
    start_secs: f32,
    end_secs: Option<f32>,
    verbose: bool,
) -> ClipResult<PathBuf> {
    let clip = read_wav(input_path)?;

    if verbose {
        println!(
            "Loaded {} frames at {} Hz, {} channel(s) ({:.2}s)",
            clip.frames(),
            clip.sample_rate,
            clip.channels,
            clip.duration_seconds()
        );
    }

    let end_secs = end_secs.unwrap_or_else(|| clip.duration_seconds());
    let trimmed = clip.trim(start_secs, end_secs)?;

    if verbose {
        println!(
            "Selection: {} - {} ({:.2}s)",
            format_time(start_secs),
            format_time(end_secs),
            trimmed.duration_seconds()
        );
    }

    let output_path = match output_path {
        Some(p) => p.to_path_buf(),
        None => default_output_path(input_path),
    };
    write_wav_file(&output_path, &trimmed)?;

    println!(
        "Saved {:.2}s to {}",
        trimmed.duration_seconds(),
        output_path.display()
    );

    Ok(output_path)
}

/// Print clip metadata without writing anything.
pub fn print_info(input_path: &Path) -> ClipResult<()> {
    let clip = read_wav(input_path)?;

    println!("File:        {}", input_path.display());
    println!("Channels:    {}", clip.channels);
    println!("Sample rate: {} Hz", clip.sample_rate);
    println!("Frames:      {}", clip.frames());
    println!(
        "Duration:    {} ({:.2}s)",
        format_time(clip.duration_seconds()),
        clip.duration_seconds()
    );

    Ok(())
}
