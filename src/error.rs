//! Error types for clip loading, trimming, and WAV encoding.

use thiserror::Error;

/// Result type for clip operations.
pub type ClipResult<T> = Result<T, ClipError>;

/// Errors that can occur while loading, trimming, or encoding a clip.
#[derive(Debug, Error)]
pub enum ClipError {
    /// Channel count must be at least 1.
    #[error("invalid channel count: {channels}")]
    InvalidChannelCount {
        /// The rejected channel count.
        channels: u16,
    },

    /// Sample rate must be at least 1 Hz.
    #[error("invalid sample rate: {rate} Hz")]
    InvalidSampleRate {
        /// The rejected sample rate.
        rate: u32,
    },

    /// Interleaved buffer length must be a multiple of the channel count.
    #[error("sample buffer length {len} is not a multiple of {channels} channel(s)")]
    MisalignedBuffer {
        /// Buffer length in samples.
        len: usize,
        /// Channel count the buffer was declared with.
        channels: u16,
    },

    /// Trim range is empty, inverted, negative, or not finite.
    #[error("invalid trim range: {start}s..{end}s")]
    InvalidTrimRange {
        /// Requested start position in seconds.
        start: f32,
        /// Requested end position in seconds.
        end: f32,
    },

    /// Input file could not be decoded as WAV.
    #[error("failed to decode WAV input: {0}")]
    Wav(#[from] hound::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClipError {
    /// True for errors the caller can only fix by correcting its inputs,
    /// as opposed to source/sink failures that may succeed elsewhere.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ClipError::InvalidChannelCount { .. }
                | ClipError::InvalidSampleRate { .. }
                | ClipError::MisalignedBuffer { .. }
                | ClipError::InvalidTrimRange { .. }
        )
    }
}
