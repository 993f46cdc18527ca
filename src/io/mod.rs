//! I/O layer: PNG loading and directory scanning for batch runs.
pub mod png;
pub use png::{list_png_files, open_image};
