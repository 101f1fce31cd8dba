//! Shape geometry consumed by the detector.
//!
//! A shape is one text box on a slide: its text and its axis-aligned
//! bounding box in absolute slide coordinates. Shapes are produced by a slide
//! enumerator, either directly as [`ShapeGeometry`] values or, with the
//! `json` feature, from loosely typed records via [`shapes_from_json`].

// Submodule declarations
pub mod geometry;
#[cfg(feature = "json")]
pub mod record;

// Re-exports
pub use geometry::{Axis, ShapeGeometry};
#[cfg(feature = "json")]
pub use record::{shapes_from_json, shapes_from_values};
