//! Display WAV file metadata and sample peak.

use std::path::PathBuf;

use clap::Args;
use ddsynth_core::Sample;
use ddsynth_io::{WavFormat, read_wav_info, read_wav_samples};

/// Display WAV file information.
#[derive(Args)]
pub struct InfoArgs {
    /// Path to the WAV file
    pub file: PathBuf,

    /// Skip reading sample data (header only)
    #[arg(long)]
    pub header_only: bool,
}

/// Run the info command.
pub fn run(args: InfoArgs) -> anyhow::Result<()> {
    let info = read_wav_info(&args.file)?;
    let file_size = std::fs::metadata(&args.file)?.len();

    let encoding = match info.format {
        WavFormat::Pcm => "PCM",
        WavFormat::IeeeFloat => "IEEE Float",
    };

    println!("File:        {}", args.file.display());
    println!("Format:      {encoding} {}-bit", info.bits_per_sample);
    println!("Channels:    {}", info.channels);
    println!("Sample Rate: {} Hz", info.sample_rate);
    println!(
        "Duration:    {:.3}s ({} frames)",
        info.duration_secs, info.num_frames
    );
    println!("File Size:   {}", format_bytes(file_size));

    if args.header_only || info.format != WavFormat::Pcm {
        return Ok(());
    }

    let (samples, spec) = read_wav_samples(&args.file)?;
    let full_scale = spec.depth().max();
    match peak(&samples) {
        Some(p) => println!(
            "Peak:        {p} of {full_scale} ({:.1}% full scale)",
            100.0 * p as f64 / full_scale as f64
        ),
        None => println!("Peak:        (silent)"),
    }

    Ok(())
}

/// Largest absolute sample, or `None` when every sample is zero.
fn peak(samples: &[Sample]) -> Option<i64> {
    samples
        .iter()
        .map(|&s| i64::from(s).abs())
        .max()
        .filter(|&p| p > 0)
}

pub(crate) fn format_bytes(bytes: u64) -> String {
    match bytes {
        b if b < 1024 => format!("{b} B"),
        b if b < 1024 * 1024 => format!("{:.1} KB", b as f64 / 1024.0),
        b => format!("{:.1} MB", b as f64 / (1024.0 * 1024.0)),
    }
}
