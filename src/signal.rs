//! Synthetic test-signal construction.
//!
//! Generators for the sampled waveforms the CLI and viz binaries feed into
//! the decomposer. Real inputs can come from anywhere; the decomposer only
//! sees a sample slice and a rate.

use std::f64::consts::TAU;

/// Uniformly-spaced time axis covering `[0, duration)` at `sampling_rate`
/// samples per second.
pub fn time_axis(duration: f64, sampling_rate: f64) -> Vec<f64> {
    let n = (duration * sampling_rate).round() as usize;
    (0..n).map(|i| i as f64 / sampling_rate).collect()
}

/// Unit-amplitude sine at `frequency` Hz sampled over `times`.
pub fn sine(times: &[f64], frequency: f64) -> Vec<f64> {
    times.iter().map(|&t| (TAU * frequency * t).sin()).collect()
}

/// Unit-amplitude square wave at `frequency` Hz sampled over `times`.
/// +1 on the half-cycles where the matching sine is non-negative, -1 elsewhere.
pub fn square(times: &[f64], frequency: f64) -> Vec<f64> {
    times
        .iter()
        .map(|&t| if (TAU * frequency * t).sin() >= 0.0 { 1.0 } else { -1.0 })
        .collect()
}

/// Elementwise sum of several equal-length sample sequences.
pub fn mix(parts: &[Vec<f64>]) -> Vec<f64> {
    let len = parts.first().map_or(0, |p| p.len());
    (0..len)
        .map(|i| parts.iter().map(|p| p[i]).sum())
        .collect()
}

/// The demo waveform used by the CLI and viz binaries: a square wave at the
/// base frequency plus sines at the base frequency and 1.333× it.
pub fn demo_signal(times: &[f64], base_frequency: f64) -> Vec<f64> {
    mix(&[
        square(times, base_frequency),
        sine(times, base_frequency),
        sine(times, base_frequency * 1.333),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_axis_spacing() {
        let times = time_axis(2.0, 4.0);
        assert_eq!(times.len(), 8);
        assert_eq!(times[0], 0.0);
        for pair in times.windows(2) {
            assert!((pair[1] - pair[0] - 0.25).abs() < 1e-12);
        }
        assert!(times.last().unwrap() < &2.0);
    }

    #[test]
    fn test_square_is_plus_minus_one() {
        let times = time_axis(1.0, 100.0);
        for &v in &square(&times, 3.0) {
            assert!(v == 1.0 || v == -1.0);
        }
        // First half-cycle of a 1 Hz square is high
        let s = square(&time_axis(1.0, 8.0), 1.0);
        assert_eq!(&s[..4], &[1.0, 1.0, 1.0, 1.0]);
        assert_eq!(&s[5..], &[-1.0, -1.0, -1.0]);
    }

    #[test]
    fn test_mix_sums_elementwise() {
        let mixed = mix(&[vec![1.0, 2.0], vec![0.5, -2.0]]);
        assert_eq!(mixed, vec![1.5, 0.0]);
        assert!(mix(&[]).is_empty());
    }
}
