pub mod signal;
pub mod spectral;
pub mod synth;
pub mod viz_common;
pub mod wav;

use serde::{Deserialize, Serialize};

// ─── Data model ─────────────────────────────────────────────────────────────

/// A single sinusoidal component in the frequency domain.
///
/// Every wave is either a cosine-basis or a sine-basis component with a real
/// amplitude. The decomposer emits one of each per frequency bin, so a complex
/// Fourier coefficient is always represented as a `Cosine`/`Sine` pair rather
/// than a complex amplitude inspected for which part is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Wave {
    /// Cosine component: contributes `amplitude * cos(2π * frequency / period * t)`.
    Cosine { frequency: f64, amplitude: f64 },
    /// Sine component: contributes `amplitude * sin(2π * frequency / period * t)`.
    Sine { frequency: f64, amplitude: f64 },
}

impl Wave {
    /// The frequency of this component, in cycles per period unit.
    pub fn frequency(&self) -> f64 {
        match *self {
            Wave::Cosine { frequency, .. } | Wave::Sine { frequency, .. } => frequency,
        }
    }

    /// The signed amplitude of this component.
    pub fn amplitude(&self) -> f64 {
        match *self {
            Wave::Cosine { amplitude, .. } | Wave::Sine { amplitude, .. } => amplitude,
        }
    }

    /// Absolute amplitude, used for dominance filtering.
    pub fn magnitude(&self) -> f64 {
        self.amplitude().abs()
    }

    /// Format as "<freq> Hz : <amplitude> (cos|sin)".
    pub fn display(&self) -> String {
        let basis = match self {
            Wave::Cosine { .. } => "cos",
            Wave::Sine { .. } => "sin",
        };
        format!("{:.2} Hz : {:.6} ({})", self.frequency(), self.amplitude(), basis)
    }
}

/// Keep only waves whose absolute amplitude exceeds `threshold`.
///
/// This is the lossy step of the pipeline: reconstruction from the filtered
/// collection approximates the original signal using only its dominant
/// components. Ordering is preserved. A higher threshold never keeps more
/// waves than a lower one.
pub fn dominant_waves(waves: &[Wave], threshold: f64) -> Vec<Wave> {
    waves
        .iter()
        .copied()
        .filter(|w| w.magnitude() > threshold)
        .collect()
}

// ─── Errors ─────────────────────────────────────────────────────────────────

/// Errors produced by the decomposition / resynthesis pipeline.
///
/// All variants are programming or input errors surfaced immediately; there
/// are no retries or partial results.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("signal is empty; at least one sample is required")]
    EmptySignal,

    #[error("sampling rate must be strictly positive, got {0}")]
    InvalidSamplingRate(f64),

    #[error("period must be strictly positive, got {0}")]
    InvalidPeriod(f64),

    #[error("signal contains only zero samples; cannot rescale for audio output")]
    SilentSignal,

    #[error("failed to write WAV file: {0}")]
    Wav(#[from] hound::Error),
}

// ─── Tests ──────────────────────────────────────────────────────────────────
