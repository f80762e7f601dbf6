//! Render captured output levels to a WAV file.
//!
//! Requires the `wav-capture` feature. This is an audition aid: a simulated
//! run records each line's level per tick, and this module turns those level
//! streams into 16-bit mono audio so the chip's voice can be heard without
//! hardware.

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

/// Writes one sample per recorded level, HIGH as +25000 and LOW as -25000.
///
/// `sample_rate` should be the tick rate of the run that produced the levels
/// (for the canonical 25 us tick, 40_000 Hz).
///
/// # Errors
///
/// Returns any I/O or encoding error from the underlying writer.
///
/// # Examples
///
/// ```no_run
/// use drumnoise::capture::write_levels_wav;
///
/// let levels = vec![true, true, false, false];
/// write_levels_wav("tone.wav", &levels, 40_000)?;
/// # Ok::<(), hound::Error>(())
/// ```
pub fn write_levels_wav(
    path: impl AsRef<Path>,
    levels: &[bool],
    sample_rate: u32,
) -> Result<(), hound::Error> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec)?;
    for &level in levels {
        writer.write_sample(if level { 25_000i16 } else { -25_000i16 })?;
    }
    writer.finalize()
}

/// Mixes several level streams into one sample stream, averaging the lines.
///
/// Streams shorter than the longest are treated as LOW once exhausted.
pub fn mix_levels(streams: &[&[bool]]) -> Vec<f32> {
    let len = streams.iter().map(|s| s.len()).max().unwrap_or(0);
    let scale = 1.0 / streams.len().max(1) as f32;
    (0..len)
        .map(|i| {
            streams
                .iter()
                .map(|s| if s.get(i).copied().unwrap_or(false) { 1.0 } else { -1.0 })
                .sum::<f32>()
                * scale
        })
        .collect()
}

/// Writes a pre-mixed float stream as 16-bit mono.
///
/// # Errors
///
/// Returns any I/O or encoding error from the underlying writer.
pub fn write_mix_wav(
    path: impl AsRef<Path>,
    samples: &[f32],
    sample_rate: u32,
) -> Result<(), hound::Error> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec)?;
    for &sample in samples {
        let value = (sample.clamp(-1.0, 1.0) * 25_000.0) as i16;
        writer.write_sample(value)?;
    }
    writer.finalize()
}
