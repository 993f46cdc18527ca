use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use spritenorm::types::ResampleFilter;

#[derive(Parser)]
#[command(name = "spritenorm", version, about = "SPRITENORM CLI")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Enable logging
    #[arg(long, global = true, default_value_t = false)]
    pub log: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Remove the background, crop to content, recenter and resize sprites in place
    Normalize(NormalizeArgs),
    /// Report the channel values of the top-left pixel of each file
    Corner(InspectArgs),
    /// Report the most frequent pixel values of each file
    Histogram(HistogramArgs),
    /// Report the content bounding box against a solid reference color
    Bbox(BboxArgs),
    /// Synthesize a retro hit sound effect (mono 16-bit PCM WAV)
    Synth(SynthArgs),
}

#[derive(Args)]
pub struct NormalizeArgs {
    /// Sprite PNG files to normalize in place
    pub inputs: Vec<PathBuf>,

    /// Directory to scan (non-recursive) for .png files (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Background brightness threshold; a pixel is background when every
    /// RGB channel exceeds this value
    #[arg(long, default_value_t = 245)]
    pub threshold: u8,

    /// Output square side in pixels. Options:
    /// - Predefined: 512, 1024
    /// - Custom: any positive integer (e.g., 768)
    /// - Original: "original" (keep the padded canvas size)
    #[arg(long, default_value = "512")]
    pub size: String,

    /// Make the background fully transparent instead of opaque near-white
    #[arg(long, default_value_t = false)]
    pub transparent: bool,

    /// Resampling filter (bilinear, catmull-rom, lanczos3)
    #[arg(long, value_enum, default_value_t = ResampleFilter::Lanczos3)]
    pub filter: ResampleFilter,

    /// Load parameters from a JSON preset file instead of the flags above
    #[arg(long)]
    pub preset: Option<PathBuf>,
}

#[derive(Args)]
pub struct InspectArgs {
    /// Image files to inspect
    pub inputs: Vec<PathBuf>,
}

#[derive(Args)]
pub struct HistogramArgs {
    /// Image files to inspect
    pub inputs: Vec<PathBuf>,

    /// Number of most frequent pixel values to report
    #[arg(long, default_value_t = 10)]
    pub top: usize,
}

#[derive(Args)]
pub struct BboxArgs {
    /// Image files to inspect
    pub inputs: Vec<PathBuf>,

    /// Solid reference color as R,G,B
    #[arg(long, default_value = "255,255,255")]
    pub reference: String,
}

#[derive(Args)]
pub struct SynthArgs {
    /// Output WAV path; parent directories are created if absent
    #[arg(short, long)]
    pub output: PathBuf,

    /// Duration in seconds
    #[arg(long, default_value_t = 0.15)]
    pub duration: f64,

    /// Sample rate in Hz
    #[arg(long, default_value_t = 44100)]
    pub sample_rate: u32,

    /// Peak amplitude in 16-bit full-scale units
    #[arg(long, default_value_t = 20000.0)]
    pub amplitude: f64,
}
