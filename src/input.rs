//! WAV file input.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use hound::{SampleFormat, WavReader};

use crate::clip::Clip;
use crate::error::ClipResult;

/// Read a WAV file into a clip.
///
/// Accepts any channel count and both float and integer PCM sources; integer
/// samples are normalized by their bit depth so everything downstream works
/// on [-1.0, 1.0] floats.
pub fn read_wav<P: AsRef<Path>>(path: P) -> ClipResult<Clip> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();

    let samples = match spec.sample_format {
        SampleFormat::Float => read_float_samples(reader)?,
        SampleFormat::Int => read_int_samples(reader, spec.bits_per_sample)?,
    };

    Clip::new(samples, spec.channels, spec.sample_rate)
}

fn read_float_samples(mut reader: WavReader<BufReader<File>>) -> ClipResult<Vec<f32>> {
    reader.samples::<f32>().map(|s| Ok(s?)).collect()
}

fn read_int_samples(mut reader: WavReader<BufReader<File>>, bits: u16) -> ClipResult<Vec<f32>> {
    let max_val = (1i64 << (bits - 1)) as f32;
    reader
        .samples::<i32>()
        .map(|s| Ok(s? as f32 / max_val))
        .collect()
}
