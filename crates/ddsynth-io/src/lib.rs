//! PCM output layer for ddsynth.
//!
//! This crate provides:
//!
//! - **Sink contract**: [`PcmSpec`] and the [`PcmSink`] trait, the boundary
//!   between the synthesis core and whatever stores the samples
//! - **Sinks**: [`WavSink`] (RIFF/WAVE file via `hound`) and [`MemorySink`]
//!   (raw little-endian bytes)
//! - **Validated writes**: [`write_pcm`] range-checks the whole buffer before
//!   a sink is touched, so a failed render leaves nothing behind
//! - **Inspection**: [`read_wav_info`] and [`read_wav_samples`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ddsynth_io::{PcmSpec, WavSink, write_pcm};
//!
//! let spec = PcmSpec::pcm16(2, 44_100)?;
//! let mut sink = WavSink::new("tone.wav");
//! write_pcm(&mut sink, spec, &interleaved)?;
//! ```

mod pcm;
mod wav;

pub use pcm::{MemorySink, PcmSink, PcmSpec, write_pcm};
pub use wav::{WavFormat, WavInfo, WavSink, read_wav_info, read_wav_samples};

use ddsynth_core::{RangeError, ValidationError};

/// Error types for PCM output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A sample does not fit the sink's sample width.
    #[error(transparent)]
    Range(#[from] RangeError),

    /// Invalid stream layout (channel count, rate).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Sample width in bytes that no sink can write.
    #[error("Unsupported sample width: {0} bytes")]
    UnsupportedWidth(u16),

    /// The interleaved buffer does not hold a whole number of frames.
    #[error("{samples} samples do not divide into {channels}-channel frames")]
    PartialFrame {
        /// Number of samples offered.
        samples: usize,
        /// Channel count of the stream.
        channels: u16,
    },
}

/// Convenience result type for PCM output.
pub type Result<T> = std::result::Result<T, Error>;
