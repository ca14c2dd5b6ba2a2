//! Integration tests for the ddsynth binary.
//!
//! Each test runs the built binary end to end and inspects the files it
//! writes.

use std::path::Path;
use std::process::{Command, Output};

use ddsynth_io::{read_wav_info, read_wav_samples};
use tempfile::tempdir;

/// Helper to get the path to the `ddsynth` binary built by cargo.
fn ddsynth_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ddsynth"))
}

fn render(args: &[&str]) -> Output {
    ddsynth_bin()
        .arg("render")
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run ddsynth render")
}

fn path_arg(p: &Path) -> &str {
    p.to_str().expect("temp path is UTF-8")
}

// ---------------------------------------------------------------------------
// `ddsynth list`
// ---------------------------------------------------------------------------

#[test]
fn list_names_every_program_and_waveform() {
    let output = ddsynth_bin().arg("list").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in [
        "tone",
        "beats",
        "vibrato",
        "two-tone",
        "two-tone-scale",
        "constant",
        "slope",
        "scale",
        "delay",
        "random",
        "divider",
        "fade",
    ] {
        assert!(stdout.contains(name), "listing should contain '{name}'");
    }
    for wave in ["sin", "square", "tri", "saw", "noise"] {
        assert!(stdout.contains(wave), "listing should contain '{wave}'");
    }
}

// ---------------------------------------------------------------------------
// `ddsynth render`
// ---------------------------------------------------------------------------

#[test]
fn tone_renders_one_second_mono_pcm16() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("tone.wav");

    let output = render(&["tone", "-o", path_arg(&out), "--seed", "1"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let info = read_wav_info(&out).unwrap();
    assert_eq!(info.channels, 1);
    assert_eq!(info.sample_rate, 44_100);
    assert_eq!(info.bits_per_sample, 16);
    assert_eq!(info.num_frames, 44_100);
}

#[test]
fn stereo_render_duplicates_the_mono_signal() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("stereo.wav");

    let output = render(&[
        "scale",
        "-c",
        "2",
        "-r",
        "8000",
        "-d",
        "0.1",
        "-w",
        "square",
        "-o",
        path_arg(&out),
    ]);
    assert!(output.status.success());

    let (samples, spec) = read_wav_samples(&out).unwrap();
    assert_eq!(spec.channels(), 2);
    assert_eq!(samples.len(), 2 * 8 * 800);
    for frame in samples.chunks_exact(2) {
        assert_eq!(frame[0], frame[1]);
    }
}

#[test]
fn config_file_is_read_and_flags_override_it() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("render.toml");
    let out = dir.path().join("divider.wav");
    std::fs::write(
        &config,
        "program = \"divider\"\nsample_rate = 8000\nfrequency = 330.0\n",
    )
    .unwrap();

    let output = render(&[
        "--config",
        path_arg(&config),
        "-r",
        "4000",
        "-o",
        path_arg(&out),
    ]);
    assert!(output.status.success());

    let info = read_wav_info(&out).unwrap();
    assert_eq!(info.sample_rate, 4000);
    assert_eq!(info.num_frames, 4 * 2000 + 4 * 1000);
}

#[test]
fn save_config_writes_effective_settings() {
    let dir = tempdir().unwrap();
    let saved = dir.path().join("saved.toml");
    let out = dir.path().join("slope.wav");

    let output = render(&[
        "slope",
        "-f",
        "123",
        "-o",
        path_arg(&out),
        "--save-config",
        path_arg(&saved),
    ]);
    assert!(output.status.success());

    let text = std::fs::read_to_string(&saved).unwrap();
    assert!(text.contains("program = \"slope\""), "got:\n{text}");
    assert!(text.contains("frequency = 123.0"), "got:\n{text}");

    let (samples, _) = read_wav_samples(&out).unwrap();
    assert_eq!(samples.len(), 11);
    assert_eq!(samples[0], -32768);
}

#[test]
fn unknown_program_fails_without_writing() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("chirp.wav");

    let output = render(&["chirp", "-o", path_arg(&out)]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("chirp"));
    assert!(!out.exists());
}

#[test]
fn out_of_range_feedback_is_rejected() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("delay.wav");

    let output = render(&["delay", "--feedback", "1.5", "-o", path_arg(&out)]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("feedback 1.5"));
    assert!(!out.exists());
}

#[test]
fn adsr_fractions_must_sum_to_one() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("tone.wav");

    let output = render(&["--adsr", "0.3,0,0.8,1,0.1", "-o", path_arg(&out)]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("should add to 1"));
}

#[test]
fn seeded_noise_is_reproducible() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.wav");
    let b = dir.path().join("b.wav");
    let common = ["-w", "noise", "-r", "8000", "-d", "0.05", "--seed", "42"];

    for out in [&a, &b] {
        let mut args = vec!["tone", "-o", path_arg(out)];
        args.extend(common);
        assert!(render(&args).status.success());
    }
    assert_eq!(std::fs::read(&a).unwrap(), std::fs::read(&b).unwrap());
}

// ---------------------------------------------------------------------------
// `ddsynth info`
// ---------------------------------------------------------------------------

#[test]
fn info_reports_rendered_file() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("constant.wav");
    assert!(
        render(&["constant", "-r", "8000", "-d", "0.5", "-o", path_arg(&out)])
            .status
            .success()
    );

    let output = ddsynth_bin().arg("info").arg(&out).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("PCM 16-bit"), "got:\n{stdout}");
    assert!(stdout.contains("8000 Hz"), "got:\n{stdout}");
    assert!(stdout.contains("4000 frames"), "got:\n{stdout}");
    assert!(stdout.contains("32767 of 32767"), "got:\n{stdout}");
}
