//! Immutable text-box geometry.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Axis along which shapes are clustered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left-to-right; positions are `left` edges
    Horizontal,
    /// Top-to-bottom; positions are `top` edges
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    #[inline]
    pub fn cross(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Geometry and text of a single slide shape.
///
/// Coordinates are absolute and share one unit for all shapes handed to a
/// single parse (EMU for OOXML slides, points or pixels elsewhere). The
/// detector never converts units; its tolerances must be given in the same
/// unit, see [`ParserOptions`](crate::detect::ParserOptions).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeGeometry {
    /// Text content of the shape
    pub text: String,
    /// Y coordinate of the top edge
    pub top: f64,
    /// X coordinate of the left edge
    pub left: f64,
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

impl ShapeGeometry {
    /// Create a shape from its text and bounding box.
    ///
    /// # Examples
    ///
    /// ```
    /// use pseudotable::ShapeGeometry;
    ///
    /// let shape = ShapeGeometry::new("Revenue", 100.0, 50.0, 200.0, 30.0);
    /// assert_eq!(shape.right(), 250.0);
    /// assert_eq!(shape.bottom(), 130.0);
    /// ```
    pub fn new(text: impl Into<String>, top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            text: text.into(),
            top,
            left,
            width,
            height,
        }
    }

    /// X coordinate of the right edge.
    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Y coordinate of the bottom edge.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Leading edge along `axis` (`left` or `top`).
    #[inline]
    pub fn position(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// Text with surrounding whitespace removed.
    #[inline]
    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }

    /// Whether the shape carries any non-whitespace text.
    #[inline]
    pub fn has_text(&self) -> bool {
        !self.trimmed_text().is_empty()
    }

    /// Whether every coordinate is a finite number.
    ///
    /// Negative extents are kept; they only widen the table's bounding box.
    pub fn is_valid(&self) -> bool {
        [self.top, self.left, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
    }

    /// Total reading order: primary `axis`, then the cross axis, then text.
    ///
    /// The text tie-break only matters for coincident boxes and keeps the
    /// order independent of how the caller listed the shapes.
    pub fn reading_order(&self, other: &Self, axis: Axis) -> Ordering {
        self.position(axis)
            .total_cmp(&other.position(axis))
            .then_with(|| {
                self.position(axis.cross())
                    .total_cmp(&other.position(axis.cross()))
            })
            .then_with(|| self.trimmed_text().cmp(other.trimmed_text()))
    }
}
