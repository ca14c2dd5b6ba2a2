//! Render program selector.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// What a render produces.
///
/// Names are kebab-case both in TOML and on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Program {
    /// One enveloped note.
    #[default]
    Tone,
    /// Kick and snare pattern at 120 BPM.
    Beats,
    /// One note with an 8 Hz phase modulator.
    Vibrato,
    /// A note mixed with the note five semitones up.
    TwoTone,
    /// A fixed note mixed with each step of a major scale.
    TwoToneScale,
    /// Full-scale constant signal.
    Constant,
    /// Full-range integer ramp.
    Slope,
    /// Major scale from the configured frequency.
    Scale,
    /// Major scale through a feedback delay.
    Delay,
    /// Random-walk melody.
    Random,
    /// Quarter then eighth notes at 120 BPM.
    Divider,
    /// Raw tone with a short fade in and out.
    Fade,
}

impl Program {
    /// Every program, in listing order.
    pub const ALL: [Program; 12] = [
        Program::Tone,
        Program::Beats,
        Program::Vibrato,
        Program::TwoTone,
        Program::TwoToneScale,
        Program::Constant,
        Program::Slope,
        Program::Scale,
        Program::Delay,
        Program::Random,
        Program::Divider,
        Program::Fade,
    ];

    /// Selector name.
    pub fn name(self) -> &'static str {
        match self {
            Program::Tone => "tone",
            Program::Beats => "beats",
            Program::Vibrato => "vibrato",
            Program::TwoTone => "two-tone",
            Program::TwoToneScale => "two-tone-scale",
            Program::Constant => "constant",
            Program::Slope => "slope",
            Program::Scale => "scale",
            Program::Delay => "delay",
            Program::Random => "random",
            Program::Divider => "divider",
            Program::Fade => "fade",
        }
    }

    /// One-line description for listings.
    pub fn description(self) -> &'static str {
        match self {
            Program::Tone => "single enveloped note at --frequency for --duration",
            Program::Beats => "kick/snare pattern, two bars of quarter notes",
            Program::Vibrato => "single note with an 8 Hz sine phase modulator",
            Program::TwoTone => "note mixed with a perfect fourth above",
            Program::TwoToneScale => "fixed note mixed with each major scale degree",
            Program::Constant => "full-scale DC for --duration",
            Program::Slope => "ten-step ramp across the 16-bit range",
            Program::Scale => "major scale, repeated --loops times",
            Program::Delay => "major scale through a feedback delay",
            Program::Random => "random-walk melody of --loops notes",
            Program::Divider => "four quarter notes then four eighth notes",
            Program::Fade => "raw tone with a 10 ms fade in and out",
        }
    }

    /// Whether the render reads the waveform selector.
    pub fn uses_waveform(self) -> bool {
        matches!(
            self,
            Program::Tone | Program::Vibrato | Program::Scale | Program::Delay | Program::Fade
        )
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Program {
    type Err = ddsynth_core::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Program::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| ddsynth_core::Error::unknown("program", s))
    }
}
