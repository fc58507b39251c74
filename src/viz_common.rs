//! Shared utilities for the visualization binaries.
//!
//! Each viz binary (src/bin/viz_*.rs) imports this module for flag parsing,
//! demo-pipeline setup, and plot-point conversion.

use crate::{dominant_waves, signal, spectral, Wave};

/// Parse a `--name value` flag from the command line, falling back to
/// `default` when absent or unparseable.
pub fn parse_flag(name: &str, default: f64) -> f64 {
    std::env::args()
        .skip_while(|a| a != name)
        .nth(1)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Everything a viz binary needs: the demo signal, its full decomposition,
/// and the dominant subset.
pub struct DemoPipeline {
    pub sampling_rate: f64,
    pub threshold: f64,
    pub times: Vec<f64>,
    pub samples: Vec<f64>,
    pub waves: Vec<Wave>,
    pub dominant: Vec<Wave>,
}

/// Build the demo signal from `--rate`, `--duration`, `--freq` and
/// `--threshold` flags and run the decomposition, printing progress to
/// stdout.
pub fn load_demo_pipeline() -> DemoPipeline {
    let sampling_rate = parse_flag("--rate", 10_000.0);
    let duration = parse_flag("--duration", 2.0);
    let base_frequency = parse_flag("--freq", 440.0);
    let threshold = parse_flag("--threshold", 0.2);

    println!(
        "Generating {}s demo signal at {} Hz (base {} Hz)...",
        duration, sampling_rate, base_frequency
    );
    let times = signal::time_axis(duration, sampling_rate);
    let samples = signal::demo_signal(&times, base_frequency);

    println!("Decomposing {} samples...", samples.len());
    let waves = spectral::decompose(&samples, sampling_rate)
        .unwrap_or_else(|e| panic!("decomposition failed: {e}"));
    let dominant = dominant_waves(&waves, threshold);
    println!("{} waves, {} dominant (threshold {}).", waves.len(), dominant.len(), threshold);

    DemoPipeline {
        sampling_rate,
        threshold,
        times,
        samples,
        waves,
        dominant,
    }
}

/// Pair a time axis with sample values as `[x, y]` plot points.
pub fn to_plot_points(times: &[f64], values: &[f64]) -> Vec<[f64; 2]> {
    times
        .iter()
        .zip(values.iter())
        .map(|(&t, &v)| [t, v])
        .collect()
}

/// Wave magnitudes as `[frequency, magnitude]` plot points.
pub fn spectrum_points(waves: &[Wave]) -> Vec<[f64; 2]> {
    waves.iter().map(|w| [w.frequency(), w.magnitude()]).collect()
}
