//! Render configuration loaded from TOML.

use std::path::{Path, PathBuf};

use ddsynth_core::{SampleRate, ValidationError, Waveform};
use ddsynth_synth::AdsrParams;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::program::Program;

/// ADSR shape as fractions of the note period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdsrConfig {
    /// Attack fraction.
    pub attack: f64,
    /// Decay fraction.
    pub decay: f64,
    /// Sustain fraction.
    pub sustain: f64,
    /// Sustain level in `[0, 1]`.
    pub sustain_level: f64,
    /// Release fraction.
    pub release: f64,
}

impl Default for AdsrConfig {
    fn default() -> Self {
        let p = AdsrParams::default();
        Self {
            attack: p.attack(),
            decay: p.decay(),
            sustain: p.sustain(),
            sustain_level: p.sustain_level(),
            release: p.release(),
        }
    }
}

impl AdsrConfig {
    /// Validated period-fraction shape.
    pub fn to_params(&self) -> Result<AdsrParams, ValidationError> {
        AdsrParams::fractions(
            self.attack,
            self.decay,
            self.sustain,
            self.sustain_level,
            self.release,
        )
    }
}

/// Everything a render needs.
///
/// Every field has a default, so a TOML file only lists what it changes.
///
/// ```toml
/// program = "delay"
/// waveform = "tri"
/// frequency = 220.0
/// loops = 2
/// feedback = 0.4
///
/// [adsr]
/// attack = 0.05
/// sustain = 0.85
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Program to render.
    pub program: Program,
    /// Waveform for programs that take one.
    #[serde(with = "waveform_name")]
    pub waveform: Waveform,
    /// Samples per second.
    pub sample_rate: u32,
    /// Base frequency in Hz.
    pub frequency: f64,
    /// Note duration in seconds.
    pub duration: f64,
    /// Output channel count. Every channel carries the same signal.
    pub channels: u16,
    /// Sequencer loop count.
    pub loops: usize,
    /// Delay time in seconds.
    pub delay: f64,
    /// Delay feedback in `[0, 1]`.
    pub feedback: f64,
    /// Output WAV path.
    pub output: PathBuf,
    /// Seed for noise and random melodies. Unseeded renders draw from entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Envelope shape.
    pub adsr: AdsrConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            program: Program::default(),
            waveform: Waveform::default(),
            sample_rate: SampleRate::CD.hz(),
            frequency: 440.0,
            duration: 1.0,
            channels: 1,
            loops: 1,
            delay: 0.5,
            feedback: 0.0,
            output: PathBuf::from("tone.wav"),
            seed: None,
            adsr: AdsrConfig::default(),
        }
    }
}

impl RenderConfig {
    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml_str(&content)
    }

    /// Parse a configuration from a TOML string.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the configuration to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the configuration to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validated sample rate.
    pub fn sample_rate(&self) -> Result<SampleRate, ValidationError> {
        SampleRate::new(self.sample_rate)
    }

    /// Check every numeric parameter before any buffer is allocated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sr = self.sample_rate()?;
        positive("frequency", self.frequency)?;
        positive("duration", self.duration)?;
        if self.channels == 0 {
            return Err(ValidationError::NoChannels.into());
        }
        if !(0.0..=1.0).contains(&self.feedback) {
            return Err(ValidationError::Feedback(self.feedback).into());
        }
        self.adsr.to_params()?;

        if self.program == Program::Delay {
            positive("delay time", self.delay)?;
            if (sr.as_f64() * self.delay).round() < 1.0 {
                return Err(ValidationError::EmptyDelayLine {
                    seconds: self.delay,
                    sample_rate: sr.hz(),
                }
                .into());
            }
        }
        Ok(())
    }
}

fn positive(param: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NonPositive { param, value })
    }
}

/// Serialize [`Waveform`] by selector name.
mod waveform_name {
    use ddsynth_core::Waveform;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(w: &Waveform, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(w.name())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Waveform, D::Error> {
        let name = String::deserialize(d)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
