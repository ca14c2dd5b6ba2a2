//! WAV file sink and metadata reader.

use crate::pcm::{PcmSink, PcmSpec};
use crate::{Error, Result};
use ddsynth_core::Sample;
use hound::{SampleFormat, WavReader, WavWriter};
use std::path::{Path, PathBuf};

/// WAV audio encoding format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavFormat {
    /// Linear PCM (integer samples).
    Pcm,
    /// IEEE 754 floating-point samples.
    IeeeFloat,
}

/// WAV file metadata extracted without loading sample data.
#[derive(Debug, Clone)]
pub struct WavInfo {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample.
    pub bits_per_sample: u16,
    /// Total number of sample frames (samples per channel).
    pub num_frames: u64,
    /// Duration in seconds.
    pub duration_secs: f64,
    /// Audio encoding format.
    pub format: WavFormat,
}

/// Read WAV metadata without loading sample data.
pub fn read_wav_info<P: AsRef<Path>>(path: P) -> Result<WavInfo> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    let total_samples = u64::from(reader.len()); // total across all channels
    let num_frames = total_samples / u64::from(spec.channels);
    let duration_secs = num_frames as f64 / f64::from(spec.sample_rate);

    let format = match spec.sample_format {
        SampleFormat::Float => WavFormat::IeeeFloat,
        SampleFormat::Int => WavFormat::Pcm,
    };

    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        num_frames,
        duration_secs,
        format,
    })
}

/// Read an integer PCM WAV file back as interleaved samples.
pub fn read_wav_samples<P: AsRef<Path>>(path: P) -> Result<(Vec<Sample>, PcmSpec)> {
    let reader = WavReader::open(path)?;
    let hound_spec = reader.spec();
    if hound_spec.sample_format != SampleFormat::Int {
        return Err(Error::Wav(hound::Error::Unsupported));
    }
    let spec = PcmSpec::new(
        hound_spec.channels,
        hound_spec.bits_per_sample / 8,
        hound_spec.sample_rate,
    )?;
    let samples = reader
        .into_samples::<i32>()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok((samples, spec))
}

/// Sink that writes one integer PCM WAV file per stream.
///
/// The file is created when a stream is written and finalized before
/// [`write_frames`](PcmSink::write_frames) returns.
#[derive(Debug, Clone)]
pub struct WavSink {
    path: PathBuf,
    frames_written: u64,
}

impl WavSink {
    /// Sink targeting `path`. Nothing is created until a stream is written.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            frames_written: 0,
        }
    }

    /// Target path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Frames in the last stream written.
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }
}

impl From<PcmSpec> for hound::WavSpec {
    fn from(spec: PcmSpec) -> Self {
        hound::WavSpec {
            channels: spec.channels(),
            sample_rate: spec.sample_rate().hz(),
            bits_per_sample: spec.depth().bits(),
            sample_format: SampleFormat::Int,
        }
    }
}

impl PcmSink for WavSink {
    fn write_frames(&mut self, spec: PcmSpec, samples: &[Sample]) -> Result<()> {
        let mut writer = WavWriter::create(&self.path, hound::WavSpec::from(spec))?;
        for &sample in samples {
            writer.write_sample(sample)?;
        }
        writer.finalize()?;

        self.frames_written = (samples.len() / usize::from(spec.channels())) as u64;
        tracing::info!(
            path = %self.path.display(),
            channels = spec.channels(),
            sample_rate = spec.sample_rate().hz(),
            frames = self.frames_written,
            "wrote WAV file"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::write_pcm;
    use tempfile::NamedTempFile;

    #[test]
    fn wav_info_reports_layout() {
        let file = NamedTempFile::new().unwrap();
        let spec = PcmSpec::pcm16(2, 8000).unwrap();
        let mut sink = WavSink::new(file.path());
        write_pcm(&mut sink, spec, &vec![0; 8000 * 2]).unwrap();
        assert_eq!(sink.frames_written(), 8000);

        let info = read_wav_info(file.path()).unwrap();
        assert_eq!(info.channels, 2);
        assert_eq!(info.sample_rate, 8000);
        assert_eq!(info.bits_per_sample, 16);
        assert_eq!(info.num_frames, 8000);
        assert!((info.duration_secs - 1.0).abs() < 1e-12);
        assert_eq!(info.format, WavFormat::Pcm);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_wav_info("/nonexistent/ddsynth/none.wav").is_err());
    }
}
