//! Signal synthesis from a finite cosine/sine wave basis.
//!
//! The inverse side of [`crate::spectral::decompose`]: given a wave
//! collection (usually filtered down to its dominant components), evaluates
//! the summed waveform pointwise over a time axis.

use crate::{Error, Wave};
use std::f64::consts::TAU;

/// Evaluate the summed waveform of `waves` at a single point in time.
///
/// `period` is the duration of one fundamental cycle in the same unit as
/// `time`; frequencies are interpreted as cycles per period. A `Cosine` wave
/// contributes `a * cos(f · 2π/period · t)`, a `Sine` wave
/// `b * sin(f · 2π/period · t)`. An empty collection evaluates to 0.
///
/// Pure function; no state is shared between calls.
pub fn evaluate(waves: &[Wave], period: f64, time: f64) -> Result<f64, Error> {
    check_period(period)?;
    Ok(evaluate_unchecked(waves, period, time))
}

/// Evaluate the summed waveform at every point of `times`.
///
/// Equivalent to calling [`evaluate`] once per time point, with the period
/// validated once up front. Cost is `waves.len() × times.len()` trig
/// evaluations.
pub fn reconstruct(waves: &[Wave], period: f64, times: &[f64]) -> Result<Vec<f64>, Error> {
    check_period(period)?;
    Ok(times
        .iter()
        .map(|&t| evaluate_unchecked(waves, period, t))
        .collect())
}

fn check_period(period: f64) -> Result<(), Error> {
    if !(period > 0.0) || !period.is_finite() {
        return Err(Error::InvalidPeriod(period));
    }
    Ok(())
}

fn evaluate_unchecked(waves: &[Wave], period: f64, time: f64) -> f64 {
    waves
        .iter()
        .map(|w| match *w {
            Wave::Cosine { frequency, amplitude } => {
                amplitude * (frequency * TAU / period * time).cos()
            }
            Wave::Sine { frequency, amplitude } => {
                amplitude * (frequency * TAU / period * time).sin()
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectral::decompose;
    use proptest::prelude::*;

    #[test]
    fn test_empty_wave_set_is_zero() {
        assert_eq!(evaluate(&[], 1.0, 0.42).unwrap(), 0.0);
    }

    #[test]
    fn test_nonpositive_period_rejected() {
        let waves = [Wave::Cosine { frequency: 1.0, amplitude: 1.0 }];
        assert!(matches!(
            evaluate(&waves, 0.0, 0.0),
            Err(Error::InvalidPeriod(_))
        ));
        assert!(matches!(
            evaluate(&waves, -1.0, 0.0),
            Err(Error::InvalidPeriod(_))
        ));
        assert!(matches!(
            reconstruct(&waves, f64::NAN, &[0.0]),
            Err(Error::InvalidPeriod(_))
        ));
    }

    #[test]
    fn test_single_cosine_wave() {
        let waves = [Wave::Cosine { frequency: 2.0, amplitude: 1.5 }];
        for &t in &[0.0, 0.1, 0.25, 0.7] {
            let expected = 1.5 * (2.0 * TAU * t).cos();
            assert!((evaluate(&waves, 1.0, t).unwrap() - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_single_sine_wave_respects_period() {
        // Period 2: frequency 3 means 3 cycles per 2 time units.
        let waves = [Wave::Sine { frequency: 3.0, amplitude: -0.5 }];
        for &t in &[0.0, 0.3, 1.0, 1.9] {
            let expected = -0.5 * (3.0 * TAU / 2.0 * t).sin();
            assert!((evaluate(&waves, 2.0, t).unwrap() - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_zero_amplitude_waves_contribute_nothing() {
        let waves = [
            Wave::Cosine { frequency: 5.0, amplitude: 0.0 },
            Wave::Sine { frequency: 5.0, amplitude: 0.0 },
            Wave::Cosine { frequency: 0.0, amplitude: 2.0 },
        ];
        assert!((evaluate(&waves, 1.0, 0.37).unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_reconstruct_matches_pointwise_evaluate() {
        let waves = [
            Wave::Cosine { frequency: 1.0, amplitude: 0.8 },
            Wave::Sine { frequency: 4.0, amplitude: -1.2 },
        ];
        let times = [0.0, 0.01, 0.02, 0.5, 0.99];
        let batch = reconstruct(&waves, 1.0, &times).unwrap();
        for (&t, &v) in times.iter().zip(batch.iter()) {
            assert_eq!(v, evaluate(&waves, 1.0, t).unwrap());
        }
    }

    // Decomposing a pure sine of amplitude B must produce a wave the
    // synthesizer turns back into B·sin(2πft) — this pins down the sine
    // sign convention end to end.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_sine_sign_convention_round_trips(
            n in 16usize..=128,
            f_frac in 0.05f64..0.95,
            b in -5.0f64..=5.0
        ) {
            let half = n / 2;
            let f = ((f_frac * half as f64).round() as usize).clamp(1, half - 1);

            let signal: Vec<f64> = (0..n)
                .map(|i| b * (TAU * f as f64 * i as f64 / n as f64).sin())
                .collect();

            let waves = decompose(&signal, n as f64).unwrap();

            // The matching sine wave carries amplitude ≈ B under the -im
            // split convention.
            let sine = waves
                .iter()
                .find(|w| matches!(w, Wave::Sine { .. }) && w.frequency() == f as f64)
                .unwrap();
            prop_assert!(
                (sine.amplitude() - b).abs() < 1e-9,
                "sine amplitude {}, expected {}", sine.amplitude(), b
            );

            // And the synthesizer reproduces B·sin at off-grid times too.
            for &t in &[0.0, 0.11, 0.37, 0.52] {
                let expected = b * (TAU * f as f64 * t).sin();
                let got = evaluate(&waves, 1.0, t).unwrap();
                prop_assert!(
                    (got - expected).abs() < 1e-8,
                    "t={}: got {}, expected {}", t, got, expected
                );
            }
        }
    }
}
