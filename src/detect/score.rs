//! Grid measurements shared by both detection strategies.
//!
//! A candidate grid is a list of lines clustered along one axis (rows along
//! the vertical axis, columns along the horizontal one) plus the boundary
//! centers detected along the cross axis. Every measure here is written in
//! those terms so the row- and column-major strategies can share it.

use super::cluster::{Line, median_length};
use super::config::{GridPolicy, ParserOptions};
use crate::shape::Axis;
use std::cmp::Ordering;

/// Extent (`max - min`) of `positions`, `None` for fewer than two values.
fn spread<I: IntoIterator<Item = f64>>(positions: I) -> Option<f64> {
    let mut count = 0usize;
    let (min, max) = positions
        .into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
            count += 1;
            (min.min(v), max.max(v))
        });
    (count > 1).then_some(max - min)
}

/// `1 - mean(spread) / (2 * tolerance)`, clamped to `[0, 1]`.
///
/// No spreads to measure means nothing is misaligned: the score is perfect.
pub(crate) fn alignment_score(spreads: &[f64], tolerance: f64) -> f64 {
    if spreads.is_empty() {
        return 1.0;
    }
    let mean = spreads.iter().sum::<f64>() / spreads.len() as f64;
    (1.0 - mean / (tolerance * 2.0)).clamp(0.0, 1.0)
}

/// Jitter along `axis` inside each line with more than one shape.
pub(crate) fn line_spreads(lines: &[Line<'_>], axis: Axis) -> Vec<f64> {
    lines
        .iter()
        .filter_map(|line| spread(line.iter().map(|shape| shape.position(axis))))
        .collect()
}

/// Jitter along `axis` of the shapes gathered around each center.
///
/// A shape belongs to every center within `tolerance` of its position.
pub(crate) fn center_spreads(
    lines: &[Line<'_>],
    centers: &[f64],
    axis: Axis,
    tolerance: f64,
) -> Vec<f64> {
    centers
        .iter()
        .filter_map(|&center| {
            spread(
                lines
                    .iter()
                    .flat_map(|line| line.iter())
                    .map(|shape| shape.position(axis))
                    .filter(|position| (position - center).abs() <= tolerance),
            )
        })
        .collect()
}

/// Present shapes over `lines x centers` cells; may exceed 1 when a line
/// holds two shapes near the same center.
pub(crate) fn density(lines: &[Line<'_>], center_count: usize) -> f64 {
    let expected = lines.len() * center_count;
    if expected == 0 {
        return 0.0;
    }
    let total: usize = lines.iter().map(|line| line.len()).sum();
    total as f64 / expected as f64
}

/// Share of lines whose length is within `slack` of the median length.
pub(crate) fn consistency_ratio(lines: &[Line<'_>], slack: usize) -> f64 {
    let Some(median) = median_length(lines) else {
        return 0.0;
    };
    let consistent = lines
        .iter()
        .filter(|line| (line.len() as f64 - median).abs() <= slack as f64)
        .count();
    consistent as f64 / lines.len() as f64
}

/// Round to two decimals based on the exact binary value, ties to even.
///
/// `0.975` is stored just below the midpoint and rounds to `0.97`.
pub(crate) fn round_hundredths(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let lower = (value * 100.0).floor();
    // Sign of `value * 200 - (2 * lower + 1)` computed with a single rounding,
    // which is the exact sign of `value` against the midpoint above `lower`
    let offset = value.mul_add(200.0, -(2.0 * lower + 1.0));
    let hundredths = match offset.partial_cmp(&0.0) {
        Some(Ordering::Less) => lower,
        Some(Ordering::Greater) => lower + 1.0,
        _ if lower % 2.0 == 0.0 => lower,
        _ => lower + 1.0,
    };
    hundredths / 100.0
}

/// Weighted blend of row alignment, column alignment and density, each
/// clamped to `[0, 1]`, rounded to two decimals.
pub(crate) fn weighted_confidence(row: f64, column: f64, density: f64, policy: &GridPolicy) -> f64 {
    let score = row.clamp(0.0, 1.0) * policy.row_alignment_weight
        + column.clamp(0.0, 1.0) * policy.column_alignment_weight
        + density.clamp(0.0, 1.0) * policy.density_weight;
    round_hundredths(score).clamp(0.0, 1.0)
}

/// Confidence of a grid made of `lines` clustered along `line_axis`, with
/// boundary `centers` along the cross axis.
///
/// Line jitter is measured on `line_axis` and center jitter on the cross
/// axis; they are then mapped to the row and column components so both
/// strategies are weighted identically.
pub(crate) fn grid_confidence(
    lines: &[Line<'_>],
    centers: &[f64],
    line_axis: Axis,
    options: &ParserOptions,
) -> f64 {
    let center_axis = line_axis.cross();
    let line_score = alignment_score(
        &line_spreads(lines, line_axis),
        options.tolerance(line_axis),
    );
    let center_score = alignment_score(
        &center_spreads(lines, centers, center_axis, options.tolerance(center_axis)),
        options.tolerance(center_axis),
    );

    let (row, column) = match line_axis {
        Axis::Vertical => (line_score, center_score),
        Axis::Horizontal => (center_score, line_score),
    };
    weighted_confidence(row, column, density(lines, centers.len()), &options.policy)
}
