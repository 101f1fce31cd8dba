//! Column-major detection.
//!
//! The transpose of row-major detection for layouts authored column by
//! column, such as vertical blocks of figures: shapes are read left-to-right
//! into columns, row boundaries are inferred from the top edges of every
//! shape, and the grid is transposed back to row-major order.

use super::cluster::{self, Centers, Line};
use super::config::ParserOptions;
use super::score;
use crate::shape::{Axis, ShapeGeometry};
use crate::table::{BoundingBox, PseudoTable};
use tracing::{debug, trace};

/// Detect a column-major grid among `shapes` (all with text).
pub(crate) fn detect(shapes: &[&ShapeGeometry], options: &ParserOptions) -> Option<PseudoTable> {
    let sorted = cluster::sorted_along(shapes, Axis::Horizontal);

    let columns = cluster::group_by_anchor(&sorted, Axis::Horizontal, options.x_tolerance);
    trace!(columns = columns.len(), "Clustered shapes into columns");
    if columns.len() < options.min_cols {
        debug!(
            columns = columns.len(),
            min_cols = options.min_cols,
            "Column-based: too few columns"
        );
        return None;
    }

    let rows = cluster::anchor_centers(&columns, Axis::Vertical, options.y_tolerance);
    trace!(?rows, "Detected row boundaries");
    if rows.len() < options.min_rows {
        debug!(rows = rows.len(), min_rows = options.min_rows, "Column-based: too few rows");
        return None;
    }

    if !validate_grid(&columns, &rows, options) {
        return None;
    }

    let confidence = score::grid_confidence(&columns, &rows, Axis::Horizontal, options);
    let data = transpose_grid(&columns, &rows, options.y_tolerance);
    let bbox = BoundingBox::enclosing(sorted.iter().copied())?;

    Some(PseudoTable::new(confidence, bbox, data))
}

/// Columns must be mostly the same length and fill most of the grid.
fn validate_grid(columns: &[Line<'_>], rows: &Centers, options: &ParserOptions) -> bool {
    let policy = &options.policy;

    let consistency = score::consistency_ratio(columns, policy.row_length_slack);
    if consistency < policy.consistency_threshold {
        debug!(consistency, "Column-based: column lengths are irregular");
        return false;
    }

    let density = score::density(columns, rows.len());
    if density < policy.density_threshold {
        debug!(density, "Column-based: grid is too sparse");
        return false;
    }

    true
}

/// Build row-major cells: for each row boundary, take from every column the
/// shape whose top is closest to it, if within `y_tolerance`.
///
/// Ties go to the upper shape.
fn transpose_grid(columns: &[Line<'_>], rows: &Centers, y_tolerance: f64) -> Vec<Vec<Option<String>>> {
    rows.iter()
        .map(|&row_top| {
            columns
                .iter()
                .map(|column| {
                    closest_to(column, row_top)
                        .filter(|(_, distance)| *distance <= y_tolerance)
                        .map(|(shape, _)| shape.trimmed_text().to_string())
                })
                .collect()
        })
        .collect()
}

fn closest_to<'a>(column: &Line<'a>, row_top: f64) -> Option<(&'a ShapeGeometry, f64)> {
    column
        .iter()
        .map(|&shape| (shape, (shape.top - row_top).abs()))
        .min_by(|(a, a_distance), (b, b_distance)| {
            a_distance
                .total_cmp(b_distance)
                .then_with(|| a.top.total_cmp(&b.top))
        })
}
