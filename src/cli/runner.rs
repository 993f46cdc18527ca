use std::fs;
use std::path::PathBuf;

use image::Rgb;
use tracing::info;

use spritenorm::analysis::{corner_sample, pixel_histogram, reference_diff_bbox};
use spritenorm::audio::{HitSoundParams, write_hit_wav};
use spritenorm::core::params::NormalizeParams;
use spritenorm::io::png::{list_png_files, open_image};
use spritenorm::normalize_paths;
use spritenorm::types::BackgroundMode;

use super::args::{BboxArgs, CliArgs, Command, HistogramArgs, InspectArgs, NormalizeArgs, SynthArgs};
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    match args.command {
        Command::Normalize(args) => run_normalize(args),
        Command::Corner(args) => run_corner(args),
        Command::Histogram(args) => run_histogram(args),
        Command::Bbox(args) => run_bbox(args),
        Command::Synth(args) => run_synth(args),
    }
}

fn build_params(args: &NormalizeArgs) -> Result<NormalizeParams, Box<dyn std::error::Error>> {
    if let Some(preset) = &args.preset {
        let text = fs::read_to_string(preset)?;
        return Ok(serde_json::from_str(&text)?);
    }

    let size = if args.size == "original" {
        None
    } else {
        let parsed = args.size.parse::<u32>().map_err(|_| AppError::InvalidSize {
            size: args.size.clone(),
        })?;

        if parsed == 0 {
            return Err(AppError::ZeroSize { size: 0 }.into());
        }

        Some(parsed)
    };

    Ok(NormalizeParams {
        threshold: args.threshold,
        size,
        background: if args.transparent {
            BackgroundMode::Transparent
        } else {
            BackgroundMode::Opaque
        },
        filter: args.filter,
    })
}

fn run_normalize(args: NormalizeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let params = build_params(&args)?;

    let files: Vec<PathBuf> = if let Some(dir) = &args.input_dir {
        info!("Starting batch processing from directory: {:?}", dir);
        list_png_files(dir)?
    } else if !args.inputs.is_empty() {
        args.inputs
    } else {
        return Err(AppError::MissingArgument {
            arg: "<INPUTS> or --input-dir".to_string(),
        }
        .into());
    };

    let report = normalize_paths(&files, &params, true)?;

    info!("Batch processing complete!");
    info!("Processed: {}", report.processed);
    info!("Skipped: {}", report.skipped);
    info!("Errors: {}", report.errors);

    println!(
        "processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(())
}

fn run_corner(args: InspectArgs) -> Result<(), Box<dyn std::error::Error>> {
    require_inputs(&args.inputs)?;

    for path in &args.inputs {
        match open_image(path) {
            Ok(img) => {
                let px = corner_sample(&img);
                println!(
                    "{} at (0,0): ({}, {}, {}, {})",
                    path.display(),
                    px[0],
                    px[1],
                    px[2],
                    px[3]
                );
            }
            Err(e) => eprintln!("{}: error: {}", path.display(), e),
        }
    }
    Ok(())
}

fn run_histogram(args: HistogramArgs) -> Result<(), Box<dyn std::error::Error>> {
    require_inputs(&args.inputs)?;

    for path in &args.inputs {
        match open_image(path) {
            Ok(img) => {
                println!("Top {} pixels in {}:", args.top, path.display());
                for (px, count) in pixel_histogram(&img, args.top) {
                    println!("  ({}, {}, {}, {}): {}", px[0], px[1], px[2], px[3], count);
                }
            }
            Err(e) => eprintln!("{}: error: {}", path.display(), e),
        }
    }
    Ok(())
}

fn run_bbox(args: BboxArgs) -> Result<(), Box<dyn std::error::Error>> {
    require_inputs(&args.inputs)?;
    let reference = parse_reference(&args.reference)?;

    for path in &args.inputs {
        match open_image(path) {
            Ok(img) => match reference_diff_bbox(&img, reference) {
                Some(bbox) => println!("{}: {}", path.display(), bbox),
                None => println!("{}: no difference found", path.display()),
            },
            Err(e) => eprintln!("{}: error: {}", path.display(), e),
        }
    }
    Ok(())
}

fn run_synth(args: SynthArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.duration <= 0.0 {
        return Err(AppError::InvalidDuration {
            duration: args.duration,
        }
        .into());
    }

    let params = HitSoundParams {
        duration_secs: args.duration,
        sample_rate: args.sample_rate,
        amplitude: args.amplitude,
    };

    write_hit_wav(&args.output, &params)?;
    println!("Generated {}", args.output.display());
    Ok(())
}

fn require_inputs(inputs: &[PathBuf]) -> Result<(), AppError> {
    if inputs.is_empty() {
        return Err(AppError::MissingArgument {
            arg: "<INPUTS>".to_string(),
        });
    }
    Ok(())
}

fn parse_reference(value: &str) -> Result<Rgb<u8>, AppError> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(AppError::InvalidColor {
            value: value.to_string(),
        });
    }

    let mut channels = [0u8; 3];
    for (slot, part) in channels.iter_mut().zip(&parts) {
        *slot = part.parse().map_err(|_| AppError::InvalidColor {
            value: value.to_string(),
        })?;
    }
    Ok(Rgb(channels))
}
