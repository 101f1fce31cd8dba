//! One-dimensional anchor clustering.
//!
//! Both grouping passes compare each new value only with the anchor of the
//! cluster currently being built: the first member for shape lines, the first
//! accepted value for boundary centers. The anchor never moves, so a long
//! chain of values each within tolerance of its neighbour but not of the
//! anchor still splits into several clusters.

use crate::shape::{Axis, ShapeGeometry};
use smallvec::SmallVec;

/// Shapes sharing a row or column, ordered along the cross axis.
pub(crate) type Line<'a> = SmallVec<[&'a ShapeGeometry; 8]>;

/// Boundary positions (column lefts or row tops), ascending.
pub(crate) type Centers = SmallVec<[f64; 16]>;

/// Split shapes, sorted along `axis`, into lines anchored on their first member.
///
/// Each finished line is re-sorted along the cross axis.
pub(crate) fn group_by_anchor<'a>(
    sorted: &[&'a ShapeGeometry],
    axis: Axis,
    tolerance: f64,
) -> Vec<Line<'a>> {
    let mut lines: Vec<Line<'a>> = Vec::new();
    let mut current: Line<'a> = SmallVec::new();
    let mut anchor: Option<f64> = None;

    for &shape in sorted {
        let position = shape.position(axis);
        match anchor {
            Some(a) if (position - a).abs() <= tolerance => current.push(shape),
            _ => {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                anchor = Some(position);
                current.push(shape);
            },
        }
    }

    // Don't forget the last line
    if !current.is_empty() {
        lines.push(current);
    }

    let cross = axis.cross();
    for line in &mut lines {
        line.sort_by(|a, b| a.reading_order(b, cross));
    }

    lines
}

/// Greedy boundary detection over all `axis` positions in `lines`.
///
/// A value more than `tolerance` away from the last accepted center starts a
/// new center; anything closer is absorbed without moving it.
pub(crate) fn anchor_centers(lines: &[Line<'_>], axis: Axis, tolerance: f64) -> Centers {
    let mut positions: SmallVec<[f64; 32]> = lines
        .iter()
        .flat_map(|line| line.iter().map(|shape| shape.position(axis)))
        .collect();
    positions.sort_by(f64::total_cmp);

    let mut centers = Centers::new();
    for position in positions {
        match centers.last() {
            Some(&last) if (position - last).abs() <= tolerance => {},
            _ => centers.push(position),
        }
    }
    centers
}

/// Index of and distance to the center nearest to `value`.
///
/// Ties go to the earlier center.
pub(crate) fn nearest_center(value: f64, centers: &[f64]) -> Option<(usize, f64)> {
    centers
        .iter()
        .enumerate()
        .map(|(index, center)| (index, (value - center).abs()))
        .fold(None, |best, candidate| match best {
            Some((_, distance)) if distance <= candidate.1 => best,
            _ => Some(candidate),
        })
}

/// Median of line lengths; the mean of the middle pair for even counts.
pub(crate) fn median_length(lines: &[Line<'_>]) -> Option<f64> {
    let mut lengths: SmallVec<[usize; 16]> = lines.iter().map(|line| line.len()).collect();
    if lengths.is_empty() {
        return None;
    }
    lengths.sort_unstable();

    let mid = lengths.len() / 2;
    let median = if lengths.len() % 2 == 0 {
        (lengths[mid - 1] + lengths[mid]) as f64 / 2.0
    } else {
        lengths[mid] as f64
    };
    Some(median)
}

/// Sort shapes into reading order along `axis`.
pub(crate) fn sorted_along<'a>(shapes: &[&'a ShapeGeometry], axis: Axis) -> Vec<&'a ShapeGeometry> {
    let mut sorted = shapes.to_vec();
    sorted.sort_by(|a, b| a.reading_order(b, axis));
    sorted
}
