//! Sink contract for interleaved integer PCM.

use ddsynth_core::{BitDepth, Sample, SampleRate, ValidationError, check_sample};

use crate::{Error, Result};

/// Layout of an interleaved PCM stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmSpec {
    channels: u16,
    depth: BitDepth,
    sample_rate: SampleRate,
}

impl PcmSpec {
    /// Describe a stream of `channels` channels, `sample_width` bytes per
    /// sample, at `sample_rate` Hz.
    pub fn new(channels: u16, sample_width: u16, sample_rate: u32) -> Result<Self> {
        if channels == 0 {
            return Err(ValidationError::NoChannels.into());
        }
        let depth = BitDepth::from_bytes(sample_width).ok_or(Error::UnsupportedWidth(sample_width))?;
        Ok(Self {
            channels,
            depth,
            sample_rate: SampleRate::new(sample_rate)?,
        })
    }

    /// 16-bit stream, the width every ddsynth render produces.
    pub fn pcm16(channels: u16, sample_rate: u32) -> Result<Self> {
        Self::new(channels, 2, sample_rate)
    }

    /// Channel count.
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Bytes per sample.
    pub fn sample_width(&self) -> u16 {
        self.depth.bytes()
    }

    /// Bit depth.
    pub fn depth(&self) -> BitDepth {
        self.depth
    }

    /// Sample rate.
    pub fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }
}

/// Destination for a finished, interleaved, range-checked buffer.
///
/// Implementors write `samples` frame by frame as little-endian signed
/// integers of `spec.sample_width()` bytes. Callers go through
/// [`write_pcm`], which has already validated every sample.
pub trait PcmSink {
    /// Store one complete stream.
    fn write_frames(&mut self, spec: PcmSpec, samples: &[Sample]) -> Result<()>;
}

/// Validate `samples` against `spec` and hand them to `sink`.
///
/// Nothing reaches the sink unless every sample fits the sample width and
/// the buffer holds a whole number of frames.
pub fn write_pcm<S: PcmSink + ?Sized>(sink: &mut S, spec: PcmSpec, samples: &[Sample]) -> Result<()> {
    if samples.len() % usize::from(spec.channels) != 0 {
        return Err(Error::PartialFrame {
            samples: samples.len(),
            channels: spec.channels,
        });
    }
    for &s in samples {
        check_sample(i64::from(s), spec.depth)?;
    }
    sink.write_frames(spec, samples)
}

/// Sink that collects the little-endian byte stream in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    spec: Option<PcmSpec>,
    bytes: Vec<u8>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout of the last stream written.
    pub fn spec(&self) -> Option<PcmSpec> {
        self.spec
    }

    /// Raw bytes written so far.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the sink, returning the bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl PcmSink for MemorySink {
    fn write_frames(&mut self, spec: PcmSpec, samples: &[Sample]) -> Result<()> {
        let width = usize::from(spec.sample_width());
        self.bytes.reserve(samples.len() * width);
        for &s in samples {
            self.bytes.extend_from_slice(&s.to_le_bytes()[..width]);
        }
        self.spec = Some(spec);
        Ok(())
    }
}
