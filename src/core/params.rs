use serde::{Deserialize, Serialize};

use crate::types::{BackgroundMode, ResampleFilter};

/// Normalization parameters suitable for config files and batch presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizeParams {
    /// Background brightness threshold; a pixel is background when every
    /// RGB channel exceeds this value
    pub threshold: u8,
    /// Target square side in pixels; None keeps the padded canvas size
    pub size: Option<u32>,
    pub background: BackgroundMode,
    pub filter: ResampleFilter,
}

impl Default for NormalizeParams {
    fn default() -> Self {
        Self {
            threshold: 245,
            size: Some(512),
            background: BackgroundMode::Opaque,
            filter: ResampleFilter::Lanczos3,
        }
    }
}
