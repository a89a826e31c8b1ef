//! Trim audio clips and export them as deterministic 16-bit PCM WAV files.
//!
//! The crate is split into a clip model ([`clip`]), WAV input ([`input`]), a
//! hand-written byte-exact WAV encoder ([`output`]), and the read-trim-write
//! pipeline the `wav-trim` binary drives ([`trimmer`]).

pub mod clip;
pub mod error;
pub mod input;
pub mod output;
pub mod trimmer;

// Re-export public API
pub use clip::{format_time, Clip};
pub use error::{ClipError, ClipResult};
pub use input::read_wav;
pub use output::{default_output_path, encode, encode_clip, write_wav_file};
