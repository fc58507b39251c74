//! Audio output: peak-normalized 16-bit mono WAV files.

use crate::Error;
use std::path::Path;

/// Rescale samples so the largest absolute value maps to `i16::MAX`.
///
/// Fails with [`Error::SilentSignal`] if every sample is zero, since there is
/// no peak to normalize against.
pub fn rescale_to_i16(samples: &[f64]) -> Result<Vec<i16>, Error> {
    let peak = samples.iter().fold(0.0f64, |acc, &s| acc.max(s.abs()));
    if peak == 0.0 {
        return Err(Error::SilentSignal);
    }
    Ok(samples
        .iter()
        .map(|&s| (s / peak * i16::MAX as f64).round() as i16)
        .collect())
}

/// Write `samples` as a 16-bit mono PCM WAV file at `sample_rate` Hz,
/// peak-normalized via [`rescale_to_i16`].
pub fn write_wav(path: &Path, samples: &[f64], sample_rate: u32) -> Result<(), Error> {
    let scaled = rescale_to_i16(samples)?;

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for s in scaled {
        writer.write_sample(s)?;
    }
    writer.finalize()?;
    Ok(())
}
