use crate::error::{ClipError, ClipResult};

/// An audio clip: interleaved normalized samples plus format metadata.
///
/// Samples are laid out channel-interleaved (L0, R0, L1, R1, ... for stereo)
/// in the range [-1.0, 1.0]. The buffer length is always a multiple of the
/// channel count.
#[derive(Debug, Clone)]
pub struct Clip {
    pub samples: Vec<f32>,
    pub channels: u16,
    pub sample_rate: u32,
}

impl Clip {
    /// Build a clip, validating the format descriptor and buffer alignment.
    pub fn new(samples: Vec<f32>, channels: u16, sample_rate: u32) -> ClipResult<Self> {
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
        Ok(Self {
            samples,
            channels,
            sample_rate,
        })
    }

    /// Number of sample frames (one sample per channel).
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    pub fn duration_seconds(&self) -> f32 {
        self.frames() as f32 / self.sample_rate as f32
    }

    /// Extract the `[start_secs, end_secs)` range as a new clip.
    ///
    /// Positions are converted to frame indices by truncation, and the end is
    /// clamped to the clip length. The range must be finite, non-negative,
    /// and non-empty after conversion.
    pub fn trim(&self, start_secs: f32, end_secs: f32) -> ClipResult<Clip> {
        if !start_secs.is_finite() || !end_secs.is_finite() || start_secs < 0.0 {
            return Err(ClipError::InvalidTrimRange {
                start: start_secs,
                end: end_secs,
            });
        }

        let start_frame = (start_secs * self.sample_rate as f32) as usize;
        let end_frame = ((end_secs * self.sample_rate as f32) as usize).min(self.frames());
        if start_frame >= end_frame {
            return Err(ClipError::InvalidTrimRange {
                start: start_secs,
                end: end_secs,
            });
        }

        let ch = self.channels as usize;
        let samples = self.samples[start_frame * ch..end_frame * ch].to_vec();
        Ok(Clip {
            samples,
            channels: self.channels,
            sample_rate: self.sample_rate,
        })
    }
}

/// Format a position in seconds as mm:ss.
pub fn format_time(seconds: f32) -> String {
    let total = seconds.max(0.0) as u32;
    format!("{:02}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stereo_ramp(frames: usize, sample_rate: u32) -> Clip {
        // Left channel counts up, right channel counts down, so any frame can
        // be identified after a trim.
        let mut samples = Vec::with_capacity(frames * 2);
        for i in 0..frames {
            samples.push(i as f32 / frames as f32);
            samples.push(-(i as f32) / frames as f32);
        }
        Clip::new(samples, 2, sample_rate).unwrap()
    }

    #[test]
    fn test_new_rejects_zero_channels() {
        let err = Clip::new(vec![0.0; 4], 0, 44100).unwrap_err();
        assert!(matches!(err, ClipError::InvalidChannelCount { channels: 0 }));
    }

    #[test]
    fn test_new_rejects_zero_sample_rate() {
        let err = Clip::new(vec![0.0; 4], 1, 0).unwrap_err();
        assert!(matches!(err, ClipError::InvalidSampleRate { rate: 0 }));
    }

    #[test]
    fn test_new_rejects_misaligned_buffer() {
        let err = Clip::new(vec![0.0; 3], 2, 44100).unwrap_err();
        assert!(matches!(
            err,
            ClipError::MisalignedBuffer {
                len: 3,
                channels: 2
            }
        ));
    }

    #[test]
    fn test_frames_and_duration() {
        let clip = stereo_ramp(1000, 1000);
        assert_eq!(clip.frames(), 1000);
        assert_eq!(clip.duration_seconds(), 1.0);
    }

    #[test]
    fn test_trim_extracts_expected_frames() {
        let clip = stereo_ramp(1000, 1000);
        let trimmed = clip.trim(0.25, 0.75).unwrap();

        assert_eq!(trimmed.frames(), 500);
        assert_eq!(trimmed.channels, 2);
        assert_eq!(trimmed.sample_rate, 1000);
        // First frame of the trimmed clip is frame 250 of the source.
        assert_eq!(trimmed.samples[0], 250.0 / 1000.0);
        assert_eq!(trimmed.samples[1], -250.0 / 1000.0);
    }

    #[test]
    fn test_trim_clamps_end_to_clip_length() {
        let clip = stereo_ramp(100, 100);
        let trimmed = clip.trim(0.5, 10.0).unwrap();
        assert_eq!(trimmed.frames(), 50);
    }

    #[test]
    fn test_trim_rejects_empty_or_inverted_range() {
        let clip = stereo_ramp(100, 100);
        assert!(clip.trim(0.5, 0.5).unwrap_err().is_invalid_input());
        assert!(clip.trim(0.8, 0.2).unwrap_err().is_invalid_input());
        assert!(clip.trim(-1.0, 0.5).unwrap_err().is_invalid_input());
        assert!(clip.trim(f32::NAN, 0.5).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_trim_rejects_range_past_end() {
        let clip = stereo_ramp(100, 100);
        let err = clip.trim(2.0, 3.0).unwrap_err();
        assert!(matches!(err, ClipError::InvalidTrimRange { .. }));
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "00:00");
        assert_eq!(format_time(59.9), "00:59");
        assert_eq!(format_time(61.0), "01:01");
        assert_eq!(format_time(600.0), "10:00");
    }
}
