//! Placeholder sound-effect synthesis: an amplitude-enveloped white-noise
//! burst written as mono 16-bit PCM WAV.
use std::fs;
use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;

/// Parameters for the retro hit sound
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HitSoundParams {
    pub duration_secs: f64,
    pub sample_rate: u32,
    /// Peak amplitude in 16-bit full-scale units
    pub amplitude: f64,
}

impl Default for HitSoundParams {
    fn default() -> Self {
        Self {
            duration_secs: 0.15,
            sample_rate: 44100,
            amplitude: 20000.0,
        }
    }
}

/// Linear decay: full volume at the first sample, silence at the end.
pub fn envelope(index: usize, total: usize) -> f64 {
    1.0 - index as f64 / total as f64
}

/// Amplitude-enveloped white noise as 16-bit signed mono samples. The RNG
/// is injected so callers can seed it.
pub fn synthesize_hit<R: Rng>(rng: &mut R, params: &HitSoundParams) -> Vec<i16> {
    let n_samples = (params.sample_rate as f64 * params.duration_secs).round() as usize;
    let mut samples = Vec::with_capacity(n_samples);
    for i in 0..n_samples {
        let noise: f64 = rng.gen_range(-1.0..1.0);
        samples.push((noise * params.amplitude * envelope(i, n_samples)) as i16);
    }
    samples
}

/// Synthesize the hit sound and write it to `output`, creating parent
/// directories if absent.
pub fn write_hit_wav(output: &Path, params: &HitSoundParams) -> Result<()> {
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }

    let spec = WavSpec {
        channels: 1,
        sample_rate: params.sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(output, spec)?;
    for sample in synthesize_hit(&mut rand::thread_rng(), params) {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;

    info!("Generated {:?}", output);
    Ok(())
}
