//! List programs and waveforms.

use ddsynth_config::Program;
use ddsynth_core::Waveform;

/// Run the list command.
pub fn run() -> anyhow::Result<()> {
    println!("Programs:");
    for p in Program::ALL {
        let marker = if p.uses_waveform() { "*" } else { " " };
        println!("  {:<16}{marker} {}", p.name(), p.description());
    }
    println!();
    println!("  * reads --waveform");
    println!();

    let names: Vec<&str> = Waveform::ALL.iter().map(|w| w.name()).collect();
    println!("Waveforms: {}", names.join(", "));

    Ok(())
}
