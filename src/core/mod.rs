//! Core processing building blocks: background classification, bounding
//! boxes, canvas centering, resizing, and save helpers. These are internal
//! primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
