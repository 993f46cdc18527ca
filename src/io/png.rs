use std::fs;
use std::path::{Path, PathBuf};

use image::DynamicImage;
use tracing::debug;

use crate::error::Result;

/// Open a raster file. Unreadable files surface as an error for that file
/// only; batch callers warn and continue.
pub fn open_image(path: &Path) -> Result<DynamicImage> {
    let img = image::open(path)?;
    debug!("Opened {:?}: {}x{}", path, img.width(), img.height());
    Ok(img)
}

/// Non-recursive scan of `dir` for files with a `.png` extension, sorted
/// so batch runs visit files in a deterministic order.
pub fn list_png_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
        {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
