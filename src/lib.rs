#![doc = r#"
SPRITENORM — a batch normalizer for game-asset sprite PNGs.

This crate turns sprites drawn on a near-uniform light background into
tightly cropped, centered, fixed-size assets: pixels are classified as
background or content by a brightness threshold, the content bounding box
is cropped out, centered on a freshly allocated square canvas, and the
canvas is resampled to a fixed resolution (512x512 by default) with a
convolution filter. The background can be kept as an opaque near-white
fill or made fully transparent. Files are overwritten in place.

It also ships read-only diagnostics (corner sampling, pixel-frequency
histograms, difference-based bounding boxes) for picking thresholds, and
a small synthesizer that produces a placeholder "retro hit" sound effect
as a mono 16-bit PCM WAV. All of it powers the `spritenorm` CLI and can
be embedded in your own Rust applications.

Quick start: normalize one sprite in place
------------------------------------------
```rust,no_run
use std::path::Path;
use spritenorm::{NormalizeOutcome, NormalizeParams, normalize_file};

fn main() -> spritenorm::Result<()> {
    match normalize_file(Path::new("assets/monsters/dragon.png"), &NormalizeParams::default())? {
        NormalizeOutcome::Normalized { bbox, width, height } => {
            println!("content {bbox} -> {width}x{height}");
        }
        NormalizeOutcome::NoContent => println!("nothing to do"),
    }
    Ok(())
}
```

Batch over a directory
----------------------
```rust,no_run
use std::path::Path;
use spritenorm::{BackgroundMode, NormalizeParams, normalize_directory};

fn main() -> spritenorm::Result<()> {
    let params = NormalizeParams {
        background: BackgroundMode::Transparent,
        ..Default::default()
    };

    let report = normalize_directory(Path::new("assets/monsters"), &params, true)?;
    println!(
        "processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(())
}
```

In-memory processing
--------------------
```rust,no_run
use spritenorm::{NormalizeParams, normalize_to_buffer};

fn main() -> spritenorm::Result<()> {
    let img = image::open("sprite.png")?;
    if let Some(out) = normalize_to_buffer(img, &NormalizeParams::default())? {
        // use `out` in your pipeline
        assert_eq!(out.width(), 512);
    }
    Ok(())
}
```

Placeholder sound effect
------------------------
```rust,no_run
use std::path::Path;
use spritenorm::{HitSoundParams, write_hit_wav};

fn main() -> spritenorm::Result<()> {
    write_hit_wav(Path::new("public/assets/sounds/attack.wav"), &HitSoundParams::default())
}
```

Error handling
--------------
All public functions return `spritenorm::Result<T>`; match on
`spritenorm::Error` to handle specific cases. An image that is entirely
background is not an error: it surfaces as `NormalizeOutcome::NoContent`
(or `None` from the in-memory variant) and batch runs count it as
skipped.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`analysis`] — read-only diagnostics (corner sample, histogram, diff bbox).
- [`audio`] — hit-sound synthesis and WAV writing.
- [`types`] — enums and core types (e.g. `BackgroundMode`, `ResampleFilter`).
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod analysis;
pub mod api;
pub mod audio;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::NormalizeParams;
pub use crate::core::processing::bbox::BoundingBox;
pub use crate::core::processing::save::NormalizeOutcome;
pub use error::{Error, Result};
pub use types::{BackgroundMode, ResampleFilter};

// High-level API re-exports
pub use api::{
    BatchReport, normalize_directory, normalize_file, normalize_paths, normalize_to_buffer,
};
pub use audio::{HitSoundParams, synthesize_hit, write_hit_wav};
