//! Render a program to a WAV file.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use ddsynth_config::{AdsrConfig, Program, RenderConfig};
use ddsynth_core::{RandomSource, Waveform};
use ddsynth_effects::interleave_strict;
use ddsynth_io::{PcmSpec, WavSink, write_pcm};

use crate::programs;

/// Render settings. Every flag overrides the config file value.
#[derive(Args)]
pub struct RenderArgs {
    /// Program to render (see `ddsynth list`)
    pub program: Option<Program>,

    /// Load settings from a TOML file; flags override it
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Oscillator waveform (sin, square, tri, saw, noise)
    #[arg(short, long)]
    pub waveform: Option<Waveform>,

    /// Sample rate in Hz
    #[arg(short = 'r', long)]
    pub rate: Option<u32>,

    /// Base frequency in Hz
    #[arg(short, long)]
    pub frequency: Option<f64>,

    /// Note duration in seconds
    #[arg(short, long)]
    pub duration: Option<f64>,

    /// Number of output channels
    #[arg(short, long)]
    pub channels: Option<u16>,

    /// Sequencer loop count
    #[arg(short, long)]
    pub loops: Option<usize>,

    /// Delay time in seconds
    #[arg(long)]
    pub delay: Option<f64>,

    /// Delay feedback (0.0-1.0)
    #[arg(long)]
    pub feedback: Option<f64>,

    /// Envelope as ATTACK,DECAY,SUSTAIN,LEVEL,RELEASE period fractions
    #[arg(long, value_parser = parse_adsr, value_name = "A,D,S,LEVEL,R")]
    pub adsr: Option<AdsrConfig>,

    /// Output WAV path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Seed for noise and random melodies
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the effective settings to a TOML file
    #[arg(long, value_name = "FILE")]
    pub save_config: Option<PathBuf>,
}

impl RenderArgs {
    /// Merge the flags over `config`.
    fn apply(&self, config: &mut RenderConfig) {
        if let Some(p) = self.program {
            config.program = p;
        }
        if let Some(w) = self.waveform {
            config.waveform = w;
        }
        if let Some(r) = self.rate {
            config.sample_rate = r;
        }
        if let Some(f) = self.frequency {
            config.frequency = f;
        }
        if let Some(d) = self.duration {
            config.duration = d;
        }
        if let Some(c) = self.channels {
            config.channels = c;
        }
        if let Some(l) = self.loops {
            config.loops = l;
        }
        if let Some(d) = self.delay {
            config.delay = d;
        }
        if let Some(fb) = self.feedback {
            config.feedback = fb;
        }
        if let Some(a) = self.adsr {
            config.adsr = a;
        }
        if let Some(o) = &self.output {
            config.output.clone_from(o);
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

fn parse_adsr(s: &str) -> Result<AdsrConfig, String> {
    let values = s
        .split(',')
        .map(|v| v.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid ADSR value: {e}"))?;

    let [attack, decay, sustain, sustain_level, release] = values[..] else {
        return Err(format!(
            "expected 5 comma-separated values, got {}",
            values.len()
        ));
    };
    Ok(AdsrConfig {
        attack,
        decay,
        sustain,
        sustain_level,
        release,
    })
}

/// Run the render command.
pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    args.apply(&mut config);
    config.validate()?;

    if let Some(path) = &args.save_config {
        config.save(path)?;
        tracing::info!(path = %path.display(), "saved render config");
    }

    let mut rng = match config.seed {
        Some(seed) => RandomSource::seeded(seed),
        None => RandomSource::from_entropy(),
    };

    tracing::info!(
        program = %config.program,
        waveform = %config.waveform,
        sample_rate = config.sample_rate,
        frequency = config.frequency,
        "rendering"
    );

    let mono = programs::render(&config, &mut rng)
        .with_context(|| format!("rendering program '{}'", config.program))?;
    let channels = vec![mono; usize::from(config.channels)];
    let interleaved = interleave_strict(&channels)?;

    let spec = PcmSpec::pcm16(config.channels, config.sample_rate)?;
    let mut sink = WavSink::new(&config.output);
    write_pcm(&mut sink, spec, &interleaved)
        .with_context(|| format!("writing {}", config.output.display()))?;

    let frames = sink.frames_written();
    println!(
        "Rendered {} to {} ({} Hz, {} ch, {:.3}s, {})",
        config.program,
        config.output.display(),
        config.sample_rate,
        config.channels,
        frames as f64 / f64::from(config.sample_rate),
        super::info::format_bytes(std::fs::metadata(&config.output)?.len()),
    );

    Ok(())
}
