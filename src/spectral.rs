//! Spectral decomposition of real-valued sampled signals.
//!
//! Runs a forward FFT over the full sample sequence, keeps the
//! non-negative-frequency half of the spectrum, and splits each complex
//! coefficient into a cosine/sine wave pair with Fourier-series scaling.

use crate::{Error, Wave};
use rustfft::{num_complex::Complex, FftPlanner};

/// Decompose a real-valued signal into its sinusoidal components.
///
/// `signal` is a sequence of uniformly-spaced samples taken at `sampling_rate`
/// samples per second. Returns one `Cosine`/`Sine` wave pair per frequency bin
/// in `0 .. N/2`, in increasing bin order with the cosine wave first. Bin `k`
/// maps to frequency `k * sampling_rate / N`.
///
/// Coefficients are normalized by `2/N` so that an on-bin sinusoid of
/// amplitude `A` comes back as a wave of amplitude `A`. The DC bin is
/// normalized by `1/N` only, since it has no negative-frequency counterpart
/// to fold in. Negative-frequency bins carry no independent information for a
/// real signal (they are conjugates of the positive bins) and are dropped.
///
/// Zero-amplitude waves are still emitted; filtering is the caller's decision
/// (see [`crate::dominant_waves`]).
pub fn decompose(signal: &[f64], sampling_rate: f64) -> Result<Vec<Wave>, Error> {
    if signal.is_empty() {
        return Err(Error::EmptySignal);
    }
    if !(sampling_rate > 0.0) || !sampling_rate.is_finite() {
        return Err(Error::InvalidSamplingRate(sampling_rate));
    }

    let n = signal.len();

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(n);

    let mut buffer: Vec<Complex<f64>> = signal
        .iter()
        .map(|&x| Complex::new(x, 0.0))
        .collect();

    fft.process(&mut buffer);

    // A one-sample signal has no positive-frequency bins, only DC.
    let kept = (n / 2).max(1);
    let mut waves = Vec::with_capacity(2 * kept);

    for (k, coeff) in buffer[..kept].iter().enumerate() {
        let frequency = k as f64 * sampling_rate / n as f64;
        let scale = if k == 0 { 1.0 } else { 2.0 } / n as f64;
        let amplitude = *coeff * scale;

        waves.push(Wave::Cosine {
            frequency,
            amplitude: amplitude.re,
        });
        // Sign flip so the synthesizer's plain sin() term reproduces the
        // original phase: sine content shows up as a negative imaginary part
        // under the forward-FFT e^{-2πikn/N} convention.
        waves.push(Wave::Sine {
            frequency,
            amplitude: -amplitude.im,
        });
    }

    Ok(waves)
}
