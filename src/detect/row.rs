//! Row-major detection.
//!
//! Shapes are read top-to-bottom into rows, then column boundaries are
//! inferred from the left edges of every shape in every row. Most slide
//! tables are authored row by row, so this strategy runs first.

use super::cluster::{self, Centers, Line};
use super::config::ParserOptions;
use super::score;
use crate::shape::{Axis, ShapeGeometry};
use crate::table::{BoundingBox, PseudoTable};
use tracing::{debug, trace};

/// Detect a row-major grid among `shapes` (all with text).
pub(crate) fn detect(shapes: &[&ShapeGeometry], options: &ParserOptions) -> Option<PseudoTable> {
    let sorted = cluster::sorted_along(shapes, Axis::Vertical);

    let rows = cluster::group_by_anchor(&sorted, Axis::Vertical, options.y_tolerance);
    trace!(rows = rows.len(), "Clustered shapes into rows");
    if rows.len() < options.min_rows {
        debug!(rows = rows.len(), min_rows = options.min_rows, "Row-based: too few rows");
        return None;
    }

    let columns = cluster::anchor_centers(&rows, Axis::Horizontal, options.x_tolerance);
    trace!(?columns, "Detected column boundaries");
    if columns.len() < options.min_cols {
        debug!(
            columns = columns.len(),
            min_cols = options.min_cols,
            "Row-based: too few columns"
        );
        return None;
    }

    if !validate_grid(&rows, &columns, options) {
        return None;
    }

    let confidence = score::grid_confidence(&rows, &columns, Axis::Vertical, options);
    let data = extract_grid(&rows, &columns, options.x_tolerance);
    let bbox = BoundingBox::enclosing(sorted.iter().copied())?;

    Some(PseudoTable::new(confidence, bbox, data))
}

/// Rows must be mostly the same length and fill most of the grid.
fn validate_grid(rows: &[Line<'_>], columns: &Centers, options: &ParserOptions) -> bool {
    let policy = &options.policy;

    let consistency = score::consistency_ratio(rows, policy.row_length_slack);
    if consistency < policy.consistency_threshold {
        debug!(consistency, "Row-based: row lengths are irregular");
        return false;
    }

    let density = score::density(rows, columns.len());
    if density < policy.density_threshold {
        debug!(density, "Row-based: grid is too sparse");
        return false;
    }

    true
}

/// Place each shape in the column whose boundary is nearest its left edge.
///
/// Shapes farther than `x_tolerance` from every boundary are dropped; when two
/// shapes of a row land in one column the rightmost wins.
fn extract_grid(rows: &[Line<'_>], columns: &Centers, x_tolerance: f64) -> Vec<Vec<Option<String>>> {
    rows.iter()
        .map(|row| {
            let mut cells: Vec<Option<String>> = vec![None; columns.len()];
            for shape in row {
                if let Some((index, distance)) = cluster::nearest_center(shape.left, columns)
                    && distance <= x_tolerance
                {
                    cells[index] = Some(shape.trimmed_text().to_string());
                }
            }
            cells
        })
        .collect()
}
