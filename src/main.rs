use clap::{Parser, Subcommand};
use fourier_resynth::{dominant_waves, signal, spectral, synth, wav, Error, Wave};
use std::path::PathBuf;
use std::time::Instant;

/// Fourier Resynth — decompose a sampled signal into sinusoids, keep the
/// dominant ones, and rebuild an approximation from them
#[derive(Parser)]
#[command(name = "fourier-resynth", version, about)]
struct Cli {
    /// Sampling rate in samples per second
    #[arg(long, default_value_t = 10_000.0)]
    rate: f64,

    /// Signal duration in seconds
    #[arg(long, default_value_t = 2.0)]
    duration: f64,

    /// Base frequency of the demo signal in Hz
    #[arg(long, default_value_t = 440.0)]
    freq: f64,

    /// Minimum absolute amplitude for a wave to count as dominant
    #[arg(long, default_value_t = 0.2)]
    threshold: f64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decompose the demo signal and print its dominant waves
    Analyze,
    /// Decompose, filter, reconstruct, and write signal.wav + reconstructed.wav
    Resynth {
        /// Directory for the output WAV files
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Write the dominant wave collection as JSON
    Export {
        /// Output path
        #[arg(long, default_value = "waves.json")]
        out: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze => cmd_analyze(&cli),
        Commands::Resynth { ref out_dir } => cmd_resynth(&cli, out_dir),
        Commands::Export { ref out } => cmd_export(&cli, out),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Generate the demo signal and decompose it, shared by all subcommands.
fn decompose_demo(cli: &Cli) -> Result<(Vec<f64>, Vec<f64>, Vec<Wave>), Error> {
    let times = signal::time_axis(cli.duration, cli.rate);
    let samples = signal::demo_signal(&times, cli.freq);

    let start = Instant::now();
    let waves = spectral::decompose(&samples, cli.rate)?;
    println!(
        "Decomposed {} samples into {} waves in {:.2?}",
        samples.len(),
        waves.len(),
        start.elapsed()
    );

    Ok((times, samples, waves))
}

fn cmd_analyze(cli: &Cli) -> Result<(), Error> {
    let (_, _, waves) = decompose_demo(cli)?;
    let dominant = dominant_waves(&waves, cli.threshold);

    println!(
        "\n{} dominant waves (|amplitude| > {}):",
        dominant.len(),
        cli.threshold
    );
    for w in &dominant {
        println!("  {}", w.display());
    }
    Ok(())
}

fn cmd_resynth(cli: &Cli, out_dir: &PathBuf) -> Result<(), Error> {
    let (times, samples, waves) = decompose_demo(cli)?;
    let dominant = dominant_waves(&waves, cli.threshold);
    println!("Kept {} of {} waves.", dominant.len(), waves.len());

    // Period 1 second keeps wave frequencies in Hz against a time axis in
    // seconds.
    let reconstructed = synth::reconstruct(&dominant, 1.0, &times)?;

    let rate = cli.rate.round() as u32;
    let signal_path = out_dir.join("signal.wav");
    let reconstructed_path = out_dir.join("reconstructed.wav");
    wav::write_wav(&signal_path, &samples, rate)?;
    wav::write_wav(&reconstructed_path, &reconstructed, rate)?;

    println!("Wrote {:?} and {:?}", signal_path, reconstructed_path);
    Ok(())
}

fn cmd_export(cli: &Cli, out: &PathBuf) -> Result<(), Error> {
    let (_, _, waves) = decompose_demo(cli)?;
    let dominant = dominant_waves(&waves, cli.threshold);

    let json = serde_json::to_string_pretty(&dominant).expect("wave serialization cannot fail");
    std::fs::write(out, json).expect("failed to write wave export");

    println!("Wrote {} dominant waves to {:?}", dominant.len(), out);
    Ok(())
}
