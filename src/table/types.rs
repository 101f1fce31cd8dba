//! Pseudo-table record types.

use crate::shape::ShapeGeometry;
use serde::{Deserialize, Serialize};

/// One data row keyed by header name, in column order.
pub type Record = Vec<(String, Option<String>)>;

/// Kind tag distinguishing reconstructed grids from native table objects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableKind {
    /// Grid recovered from free-floating text boxes
    #[default]
    #[serde(rename = "pseudo_table")]
    PseudoTable,
}

impl TableKind {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            TableKind::PseudoTable => "pseudo_table",
        }
    }
}

/// Axis-aligned rectangle, serialized as `[left, top, right, bottom]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl BoundingBox {
    /// Smallest rectangle containing every shape, or `None` for no shapes.
    pub fn enclosing<'a, I>(shapes: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a ShapeGeometry>,
    {
        shapes.into_iter().fold(None, |acc, shape| {
            let bbox = match acc {
                None => BoundingBox {
                    left: shape.left,
                    top: shape.top,
                    right: shape.right(),
                    bottom: shape.bottom(),
                },
                Some(b) => BoundingBox {
                    left: b.left.min(shape.left),
                    top: b.top.min(shape.top),
                    right: b.right.max(shape.right()),
                    bottom: b.bottom.max(shape.bottom()),
                },
            };
            Some(bbox)
        })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Coordinates as `[left, top, right, bottom]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 4] {
        [self.left, self.top, self.right, self.bottom]
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from([left, top, right, bottom]: [f64; 4]) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(bbox: BoundingBox) -> Self {
        bbox.to_array()
    }
}

/// A grid recovered from positioned text boxes.
///
/// `data` is row-major and rectangular: every row has one entry per detected
/// column, and `None` marks a cell no shape landed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PseudoTable {
    #[serde(rename = "type")]
    pub kind: TableKind,
    /// Heuristic grid quality in `[0, 1]`, rounded to two decimals
    pub confidence_score: f64,
    /// Extent of all contributing shapes
    pub bbox: BoundingBox,
    /// Cell text, `rows x columns`
    pub data: Vec<Vec<Option<String>>>,
}

impl PseudoTable {
    pub fn new(confidence_score: f64, bbox: BoundingBox, data: Vec<Vec<Option<String>>>) -> Self {
        Self {
            kind: TableKind::PseudoTable,
            confidence_score,
            bbox,
            data,
        }
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn column_count(&self) -> usize {
        self.data.first().map_or(0, Vec::len)
    }

    /// Text at `(row, column)`, `None` when empty or out of range.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.data.get(row)?.get(column)?.as_deref()
    }

    /// Column names taken from the first row.
    ///
    /// Empty header cells are named `column_<n>` (1-based).
    pub fn header(&self) -> Vec<String> {
        self.data
            .first()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(i, cell)| match cell {
                        Some(name) => name.clone(),
                        None => format!("column_{}", i + 1),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Zip the header row against every following row.
    ///
    /// # Examples
    ///
    /// ```
    /// use pseudotable::{BoundingBox, PseudoTable};
    ///
    /// let table = PseudoTable::new(
    ///     1.0,
    ///     BoundingBox::from([0.0, 0.0, 10.0, 10.0]),
    ///     vec![
    ///         vec![Some("Name".into()), Some("Value".into())],
    ///         vec![Some("a".into()), None],
    ///     ],
    /// );
    /// let records = table.to_records();
    /// assert_eq!(records.len(), 1);
    /// assert_eq!(records[0][0], ("Name".to_string(), Some("a".to_string())));
    /// assert_eq!(records[0][1], ("Value".to_string(), None));
    /// ```
    pub fn to_records(&self) -> Vec<Record> {
        let header = self.header();
        self.data
            .iter()
            .skip(1)
            .map(|row| header.iter().cloned().zip(row.iter().cloned()).collect())
            .collect()
    }
}
