//! 16-bit PCM WAV encoding.
//!
//! Writes a 44-byte RIFF/WAVE header followed by little-endian 16-bit
//! samples, with no timestamps or variable metadata, so encoding a given
//! clip is byte-for-byte reproducible.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::clip::Clip;
use crate::error::{ClipError, ClipResult};

/// Encode an interleaved float sample buffer as a complete WAV file.
///
/// Samples are clamped to [-1.0, 1.0] and quantized to 16-bit by truncation.
/// Validation happens before any byte is produced; the returned buffer is
/// always a well-formed file.
pub fn encode(samples: &[f32], channels: u16, sample_rate: u32) -> ClipResult<Vec<u8>> {
    if channels < 1 {
        return Err(ClipError::InvalidChannelCount { channels });
    }
    if sample_rate < 1 {
        return Err(ClipError::InvalidSampleRate { rate: sample_rate });
    }
    if samples.len() % channels as usize != 0 {
        return Err(ClipError::MisalignedBuffer {
            len: samples.len(),
            channels,
        });
    }

    let mut buffer = Vec::with_capacity(44 + samples.len() * 2);
    write_wav(&mut buffer, samples, channels, sample_rate)
        .expect("writing to a Vec should not fail");
    Ok(buffer)
}

/// Encode a clip as a complete WAV file.
pub fn encode_clip(clip: &Clip) -> ClipResult<Vec<u8>> {
    encode(&clip.samples, clip.channels, clip.sample_rate)
}

/// Encode a clip and write it to `path`.
///
/// The file is only created after the clip has been fully encoded in memory,
/// so a validation failure leaves no file behind and an I/O failure never
/// leaves a file with a partial header.
pub fn write_wav_file<P: AsRef<Path>>(path: P, clip: &Clip) -> ClipResult<()> {
    let bytes = encode_clip(clip)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Default output path for a trimmed clip: `<stem>_trimmed.wav` next to the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("clip");
    input.with_file_name(format!("{}_trimmed.wav", stem))
}

fn write_wav<W: Write>(
    writer: &mut W,
    samples: &[f32],
    channels: u16,
    sample_rate: u32,
) -> io::Result<()> {
    let data_size = (samples.len() * 2) as u32;
    let byte_rate = sample_rate * channels as u32 * 2;
    let block_align = channels * 2;

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&(36 + data_size).to_le_bytes())?; // total file size minus 8
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // audio format (1 = PCM)
    writer.write_all(&channels.to_le_bytes())?;
    writer.write_all(&sample_rate.to_le_bytes())?;
    writer.write_all(&byte_rate.to_le_bytes())?;
    writer.write_all(&block_align.to_le_bytes())?;
    writer.write_all(&16u16.to_le_bytes())?; // bits per sample

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;

    for &sample in samples {
        writer.write_all(&quantize(sample).to_le_bytes())?;
    }

    Ok(())
}

/// Clamp to [-1, 1] and narrow to 16-bit. The cast truncates toward zero
/// rather than rounding.
fn quantize(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * 32767.0) as i16
}
