//! Pseudo-table detection.
//!
//! [`PseudoTableParser`] takes the text boxes of one slide and decides whether
//! they form a grid. Two strategies are tried in order:
//!
//! 1. **Row-major**: cluster shapes into rows by `top`, infer column
//!    boundaries from `left` edges.
//! 2. **Column-major**: cluster into columns by `left`, infer row boundaries
//!    from `top` edges, transpose.
//!
//! The first strategy that yields a grid wins. Finding no table is a normal
//! outcome and produces an empty result, never an error.
//!
//! Tolerances are in the caller's coordinate unit; see [`ParserOptions`].

// Submodule declarations
mod cluster;
mod column;
pub mod config;
mod row;
mod score;

// Re-exports
pub use config::{GridPolicy, ParserOptions};

use crate::common::Result;
use crate::shape::ShapeGeometry;
use crate::table::PseudoTable;
use tracing::debug;

/// Detection strategy that produced a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Rows clustered first, columns inferred
    RowMajor,
    /// Columns clustered first, rows inferred and transposed
    ColumnMajor,
}

impl Strategy {
    /// Strategies in the order they are attempted.
    pub const ORDER: [Strategy; 2] = [Strategy::RowMajor, Strategy::ColumnMajor];

    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::RowMajor => "row_major",
            Strategy::ColumnMajor => "column_major",
        }
    }

    fn run(self, shapes: &[&ShapeGeometry], options: &ParserOptions) -> Option<PseudoTable> {
        match self {
            Strategy::RowMajor => row::detect(shapes, options),
            Strategy::ColumnMajor => column::detect(shapes, options),
        }
    }
}

/// A detected table together with the strategy that found it.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// Strategy whose grid was accepted
    pub strategy: Strategy,
    /// The recovered table
    pub table: PseudoTable,
}

/// Detector for grids of free-floating text boxes.
///
/// The parser holds only its options; every call is a pure function of its
/// input, so one parser can be shared across threads.
///
/// # Examples
///
/// ```
/// use pseudotable::{PseudoTableParser, ShapeGeometry};
///
/// let shapes = vec![
///     ShapeGeometry::new("H1", 100.0, 50.0, 100.0, 20.0),
///     ShapeGeometry::new("H2", 100.0, 160.0, 100.0, 20.0),
///     ShapeGeometry::new("R1C1", 130.0, 50.0, 100.0, 20.0),
///     ShapeGeometry::new("R1C2", 130.0, 160.0, 100.0, 20.0),
///     ShapeGeometry::new("R2C1", 160.0, 50.0, 100.0, 20.0),
///     ShapeGeometry::new("R2C2", 160.0, 160.0, 100.0, 20.0),
/// ];
///
/// let tables = PseudoTableParser::default().parse(&shapes);
/// assert_eq!(tables.len(), 1);
/// assert_eq!(tables[0].cell(1, 0), Some("R1C1"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PseudoTableParser {
    options: ParserOptions,
}

impl PseudoTableParser {
    /// Create a parser after validating `options`.
    pub fn new(options: ParserOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    #[inline]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Detect pseudo-tables among `shapes`.
    ///
    /// Returns zero or one table. Shapes without text or with non-finite
    /// coordinates are ignored.
    pub fn parse(&self, shapes: &[ShapeGeometry]) -> Vec<PseudoTable> {
        self.detect(shapes)
            .map(|detection| detection.table)
            .into_iter()
            .collect()
    }

    /// Like [`parse`](Self::parse), also reporting which strategy succeeded.
    pub fn detect(&self, shapes: &[ShapeGeometry]) -> Option<Detection> {
        let candidates: Vec<&ShapeGeometry> = shapes
            .iter()
            .filter(|shape| shape.has_text() && shape.is_valid())
            .collect();

        if candidates.len() < self.options.min_cells() {
            debug!(
                shapes = shapes.len(),
                candidates = candidates.len(),
                min_cells = self.options.min_cells(),
                "Too few text shapes for a table"
            );
            return None;
        }

        Strategy::ORDER.into_iter().find_map(|strategy| {
            let table = strategy.run(&candidates, &self.options)?;
            debug!(
                strategy = strategy.as_str(),
                rows = table.row_count(),
                columns = table.column_count(),
                confidence = table.confidence_score,
                "Detected pseudo-table"
            );
            Some(Detection { strategy, table })
        })
    }

    /// Decode loosely typed shape records, then [`parse`](Self::parse) them.
    ///
    /// Malformed records are skipped; see [`shapes_from_values`](crate::shape::shapes_from_values).
    #[cfg(feature = "json")]
    pub fn parse_records(&self, records: &[serde_json::Value]) -> Vec<PseudoTable> {
        self.parse(&crate::shape::shapes_from_values(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::unit::CoordinateUnit;
    use crate::common::Error;

    fn shape(text: &str, top: f64, left: f64, width: f64, height: f64) -> ShapeGeometry {
        ShapeGeometry::new(text, top, left, width, height)
    }

    fn cells(row: &[&str]) -> Vec<Option<String>> {
        row.iter().map(|s| Some(s.to_string())).collect()
    }

    fn simple_3x2_grid() -> Vec<ShapeGeometry> {
        vec![
            shape("Header 1", 100.0, 50.0, 200.0, 30.0),
            shape("Header 2", 100.0, 260.0, 200.0, 30.0),
            shape("Row1Col1", 140.0, 50.0, 200.0, 30.0),
            shape("Row1Col2", 140.0, 260.0, 200.0, 30.0),
            shape("Row2Col1", 180.0, 50.0, 200.0, 30.0),
            shape("Row2Col2", 180.0, 260.0, 200.0, 30.0),
        ]
    }

    fn imperfect_alignment_grid() -> Vec<ShapeGeometry> {
        vec![
            shape("H1", 100.0, 50.0, 150.0, 25.0),
            shape("H2", 102.0, 205.0, 150.0, 25.0),
            shape("R1C1", 135.0, 52.0, 150.0, 25.0),
            shape("R1C2", 136.0, 207.0, 150.0, 25.0),
            shape("R2C1", 170.0, 48.0, 150.0, 25.0),
            shape("R2C2", 171.0, 203.0, 150.0, 25.0),
        ]
    }

    fn irregular_grid() -> Vec<ShapeGeometry> {
        vec![
            shape("H1", 100.0, 50.0, 100.0, 25.0),
            shape("H2", 100.0, 160.0, 100.0, 25.0),
            shape("H3", 100.0, 270.0, 100.0, 25.0),
            shape("R1C1", 135.0, 50.0, 100.0, 25.0),
            shape("R1C2", 135.0, 160.0, 100.0, 25.0),
            shape("R2C1", 170.0, 50.0, 100.0, 25.0),
            shape("R2C2", 170.0, 160.0, 100.0, 25.0),
            shape("R2C3", 170.0, 270.0, 100.0, 25.0),
        ]
    }

    /// Savings table from a real slide, EMU coordinates with visible jitter.
    fn emu_savings_table() -> Vec<ShapeGeometry> {
        vec![
            shape("Cost Category", 1_108_515.0, 798_971.0, 1_978_434.0, 336_322.0),
            shape("Main desc", 1_108_515.0, 3_026_139.0, 4_380_974.0, 336_322.0),
            shape("Net saving", 1_182_081.0, 8_920_753.0, 1_485_146.0, 153_888.0),
            shape("Additional saving", 1_133_765.0, 10_431_796.0, 1_279_177.0, 307_777.0),
            shape("Text Category", 1_503_083.0, 771_788.0, 1_978_987.0, 485_193.0),
            shape("Text row Text row", 1_455_675.0, 2_954_784.0, 5_043_527.0, 555_742.0),
            shape("-21.4", 1_455_237.0, 9_079_535.0, 1_241_809.0, 555_742.0),
            shape("-2", 1_492_964.0, 10_502_720.0, 1_314_626.0, 485_193.0),
            shape("Text Category", 2_049_052.0, 771_788.0, 1_978_987.0, 485_193.0),
            shape("Text row", 2_018_039.0, 2_961_031.0, 5_043_527.0, 555_742.0),
            shape("-1.9", 2_046_734.0, 9_072_740.0, 1_241_809.0, 555_742.0),
            shape(".", 2_038_933.0, 10_502_720.0, 1_314_626.0, 485_193.0),
            shape("Text Category", 2_595_021.0, 771_788.0, 1_978_987.0, 485_193.0),
            shape("Text row Text row Text row", 2_572_390.0, 2_961_031.0, 5_279_146.0, 555_742.0),
            shape("-3.2", 2_552_495.0, 9_072_741.0, 1_241_809.0, 555_742.0),
            shape(".", 2_584_902.0, 10_502_720.0, 1_314_626.0, 485_193.0),
        ]
    }

    #[test]
    fn test_end_to_end_example() {
        let shapes = vec![
            shape("H1", 100.0, 50.0, 100.0, 20.0),
            shape("H2", 100.0, 160.0, 100.0, 20.0),
            shape("R1C1", 130.0, 50.0, 100.0, 20.0),
            shape("R1C2", 130.0, 160.0, 100.0, 20.0),
            shape("R2C1", 160.0, 50.0, 100.0, 20.0),
            shape("R2C2", 160.0, 160.0, 100.0, 20.0),
        ];
        let options = ParserOptions::new()
            .with_tolerance(10.0)
            .with_min_rows(3)
            .with_min_cols(2);
        let tables = PseudoTableParser::new(options).unwrap().parse(&shapes);

        assert_eq!(tables.len(), 1);
        assert_eq!(
            tables[0].data,
            vec![cells(&["H1", "H2"]), cells(&["R1C1", "R1C2"]), cells(&["R2C1", "R2C2"])]
        );
        assert!(tables[0].confidence_score >= 0.9);
    }

    #[test]
    fn test_basic_grid_3x2() {
        let tables = PseudoTableParser::default().parse(&simple_3x2_grid());
        assert_eq!(tables.len(), 1);

        let table = &tables[0];
        assert_eq!(table.kind.as_str(), "pseudo_table");
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.data[0], cells(&["Header 1", "Header 2"]));
        assert_eq!(table.data[1], cells(&["Row1Col1", "Row1Col2"]));
        assert_eq!(table.data[2], cells(&["Row2Col1", "Row2Col2"]));
    }

    #[test]
    fn test_perfect_grid_high_confidence() {
        let tables = PseudoTableParser::default().parse(&simple_3x2_grid());
        assert!(tables[0].confidence_score >= 0.9);
        assert_eq!(tables[0].confidence_score, 1.0);
    }

    #[test]
    fn test_imperfect_alignment_lowers_confidence() {
        let detection = PseudoTableParser::default()
            .detect(&imperfect_alignment_grid())
            .unwrap();

        assert_eq!(detection.strategy, Strategy::RowMajor);
        assert_eq!(detection.table.data[0], cells(&["H1", "H2"]));
        assert_eq!(detection.table.data[2], cells(&["R2C1", "R2C2"]));
        // Row jitter 4/3 and column jitter 4 against a tolerance of 10
        assert_eq!(detection.table.confidence_score, 0.92);
    }

    #[test]
    fn test_missing_cell_is_none() {
        let tables = PseudoTableParser::default().parse(&irregular_grid());
        assert_eq!(tables.len(), 1);

        let table = &tables[0];
        assert_eq!(table.row_count(), 3);
        assert!(table.data.iter().all(|row| row.len() == 3));
        assert_eq!(table.data[0], cells(&["H1", "H2", "H3"]));
        assert_eq!(table.data[1][0].as_deref(), Some("R1C1"));
        assert_eq!(table.data[1][1].as_deref(), Some("R1C2"));
        assert_eq!(table.data[1][2], None);
        assert_eq!(table.data[2], cells(&["R2C1", "R2C2", "R2C3"]));
        assert_eq!(table.confidence_score, 0.96);
    }

    #[test]
    fn test_confidence_rounds_on_exact_value() {
        // 4 x 4 grid without its last cell: 0.3 + 0.3 + 0.4 * 15 / 16
        let shapes: Vec<ShapeGeometry> = (0..15)
            .map(|i| {
                let (row, col) = (i / 4, i % 4);
                shape(
                    &format!("r{}c{}", row, col),
                    100.0 + row as f64 * 40.0,
                    50.0 + col as f64 * 120.0,
                    100.0,
                    25.0,
                )
            })
            .collect();

        let tables = PseudoTableParser::default().parse(&shapes);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].data[3][3], None);
        assert_eq!(tables[0].confidence_score, 0.97);
    }

    #[test]
    fn test_scattered_boxes_rejected() {
        let shapes = vec![
            shape("Title", 50.0, 100.0, 300.0, 40.0),
            shape("Some text", 150.0, 200.0, 100.0, 20.0),
            shape("Another", 250.0, 50.0, 80.0, 20.0),
            shape("Random", 320.0, 400.0, 70.0, 20.0),
        ];
        assert!(PseudoTableParser::default().parse(&shapes).is_empty());

        // Even with enough material, unaligned boxes are not a grid
        let shapes: Vec<ShapeGeometry> = (0..8)
            .map(|i| shape(&format!("n{}", i), i as f64 * 37.0, (i * i) as f64 * 23.0, 20.0, 10.0))
            .collect();
        assert!(PseudoTableParser::default().parse(&shapes).is_empty());
    }

    #[test]
    fn test_insufficient_rows_and_columns() {
        let two_rows = vec![
            shape("H1", 100.0, 50.0, 150.0, 25.0),
            shape("H2", 100.0, 210.0, 150.0, 25.0),
            shape("R1C1", 135.0, 50.0, 150.0, 25.0),
            shape("R1C2", 135.0, 210.0, 150.0, 25.0),
        ];
        assert!(PseudoTableParser::default().parse(&two_rows).is_empty());

        let one_column: Vec<ShapeGeometry> = (0..6)
            .map(|i| shape(&format!("R{}", i), 100.0 + i as f64 * 35.0, 50.0, 150.0, 25.0))
            .collect();
        assert!(PseudoTableParser::default().parse(&one_column).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(PseudoTableParser::default().parse(&[]).is_empty());
        assert!(PseudoTableParser::default().detect(&[]).is_none());
    }

    #[test]
    fn test_bounding_box() {
        let tables = PseudoTableParser::default().parse(&simple_3x2_grid());
        assert_eq!(tables[0].bbox.to_array(), [50.0, 100.0, 460.0, 210.0]);
    }

    #[test]
    fn test_tolerance_sensitivity() {
        // Second column sits 15 units lower than the first
        let shapes = vec![
            shape("H1", 100.0, 50.0, 100.0, 20.0),
            shape("H2", 115.0, 160.0, 100.0, 20.0),
            shape("R1C1", 130.0, 50.0, 100.0, 20.0),
            shape("R1C2", 145.0, 160.0, 100.0, 20.0),
            shape("R2C1", 160.0, 50.0, 100.0, 20.0),
            shape("R2C2", 175.0, 160.0, 100.0, 20.0),
        ];

        let strict = PseudoTableParser::new(ParserOptions::new().with_y_tolerance(10.0)).unwrap();
        assert!(strict.parse(&shapes).is_empty());

        let relaxed = PseudoTableParser::new(ParserOptions::new().with_y_tolerance(20.0)).unwrap();
        let tables = relaxed.parse(&shapes);
        assert_eq!(tables.len(), 1);
        assert_eq!(
            tables[0].data,
            vec![cells(&["H1", "H2"]), cells(&["R1C1", "R1C2"]), cells(&["R2C1", "R2C2"])]
        );
    }

    #[test]
    fn test_blank_and_invalid_shapes_ignored() {
        let mut shapes = simple_3x2_grid();
        shapes.push(shape("", 100.0, 470.0, 100.0, 30.0));
        shapes.push(shape("   ", 140.0, 470.0, 100.0, 30.0));
        shapes.push(shape("ghost", f64::NAN, 470.0, 100.0, 30.0));
        shapes.push(shape("endless", 180.0, 470.0, f64::INFINITY, 30.0));

        let tables = PseudoTableParser::default().parse(&shapes);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].column_count(), 2);
        assert_eq!(tables[0].bbox.to_array(), [50.0, 100.0, 460.0, 210.0]);
    }

    #[test]
    fn test_negative_extent_still_clusters() {
        let shapes = vec![
            shape("H1", 100.0, 50.0, 100.0, 20.0),
            shape("H2", 100.0, 160.0, -100.0, 20.0),
            shape("R1C1", 130.0, 50.0, 100.0, 20.0),
            shape("R1C2", 130.0, 160.0, 100.0, 20.0),
            shape("R2C1", 160.0, 50.0, 100.0, 20.0),
            shape("R2C2", 160.0, 160.0, 100.0, -20.0),
        ];
        let tables = PseudoTableParser::default().parse(&shapes);

        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].data[0], cells(&["H1", "H2"]));
        assert_eq!(tables[0].confidence_score, 1.0);
        // R2C2 ends above its top; R2C1 sets the bottom edge
        assert_eq!(tables[0].bbox.to_array(), [50.0, 100.0, 260.0, 180.0]);
    }

    #[test]
    fn test_filtered_input_below_minimum() {
        let shapes = vec![
            shape("H1", 100.0, 50.0, 100.0, 20.0),
            shape("", 100.0, 160.0, 100.0, 20.0),
            shape("  ", 100.0, 270.0, 100.0, 20.0),
            shape("R1C1", 130.0, 50.0, 100.0, 20.0),
            shape("R1C2", 130.0, 160.0, 100.0, 20.0),
            shape("R2C1", 160.0, 50.0, 100.0, 20.0),
            shape("R2C2", 160.0, 160.0, 100.0, 20.0),
        ];
        // Five text shapes remain, fewer than 3 x 2
        assert!(PseudoTableParser::default().parse(&shapes).is_empty());
    }

    #[test]
    fn test_cell_text_is_trimmed() {
        let mut shapes = simple_3x2_grid();
        shapes[0].text = "  Header 1\n".to_string();
        let tables = PseudoTableParser::default().parse(&shapes);
        assert_eq!(tables[0].cell(0, 0), Some("Header 1"));
    }

    #[test]
    fn test_column_major_fallback() {
        let mut shapes = Vec::new();
        for row in 0..5 {
            let width = if row < 3 { 4 } else { 2 };
            for col in 0..width {
                shapes.push(shape(
                    &format!("r{}c{}", row, col),
                    row as f64 * 50.0,
                    col as f64 * 100.0,
                    80.0,
                    30.0,
                ));
            }
        }

        let detection = PseudoTableParser::default().detect(&shapes).unwrap();
        assert_eq!(detection.strategy, Strategy::ColumnMajor);
        assert_eq!(detection.table.row_count(), 5);
        assert_eq!(detection.table.column_count(), 4);
        assert_eq!(detection.table.data[4], vec![Some("r4c0".into()), Some("r4c1".into()), None, None]);
    }

    #[test]
    fn test_emu_coordinates_need_scaled_tolerance() {
        let shapes = emu_savings_table();

        // A point-sized tolerance splits every jittered row
        assert!(PseudoTableParser::default().parse(&shapes).is_empty());

        let options = ParserOptions::new()
            .with_tolerance_inches(300_000.0 / 914_400.0, CoordinateUnit::Emu)
            .with_min_cols(3);
        let tables = PseudoTableParser::new(options).unwrap().parse(&shapes);
        assert_eq!(tables.len(), 1);

        let table = &tables[0];
        assert_eq!(table.row_count(), 4);
        assert_eq!(table.column_count(), 4);
        assert_eq!(
            table.data[0],
            cells(&["Cost Category", "Main desc", "Net saving", "Additional saving"])
        );
        assert_eq!(table.data[1], cells(&["Text Category", "Text row Text row", "-21.4", "-2"]));
        assert_eq!(table.cell(3, 2), Some("-3.2"));
        assert_eq!(table.confidence_score, 0.93);
        assert_eq!(
            table.bbox.to_array(),
            [771_788.0, 1_108_515.0, 11_817_346.0, 3_128_132.0]
        );
    }

    #[test]
    fn test_new_rejects_invalid_options() {
        let err = PseudoTableParser::new(ParserOptions::new().with_min_rows(0)).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_idempotent() {
        let parser = PseudoTableParser::default();
        let shapes = imperfect_alignment_grid();
        assert_eq!(parser.parse(&shapes), parser.parse(&shapes));
    }

    #[test]
    fn test_coincident_boxes_order_independent() {
        let mut shapes = simple_3x2_grid();
        shapes.push(shape("Overlay", 140.0, 50.0, 200.0, 30.0));
        let parser = PseudoTableParser::default();

        let forward = parser.parse(&shapes);
        shapes.reverse();
        assert_eq!(forward, parser.parse(&shapes));
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_parse_records() {
        use serde_json::json;

        let records = vec![
            json!({"text": "H1", "top": 100, "left": 50, "width": 100, "height": 20}),
            json!({"text": "H2", "top": 100, "left": 160, "width": 100, "height": 20}),
            json!({"text": "R1C1", "top": "130", "left": 50, "width": 100, "height": 20}),
            json!({"text": "R1C2", "top": 130, "left": 160, "width": 100, "height": 20}),
            json!({"text": "broken", "top": "n/a", "left": 50, "width": 100, "height": 20}),
            json!({"text": "R2C1", "top": 160, "left": 50, "width": 100, "height": 20}),
            json!({"text": "R2C2", "top": 160, "left": 160, "width": 100, "height": 20}),
        ];
        let tables = PseudoTableParser::default().parse_records(&records);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].cell(1, 0), Some("R1C1"));

        let value = serde_json::to_value(&tables[0]).unwrap();
        assert_eq!(value["type"], "pseudo_table");
        assert_eq!(value["data"][2][1], "R2C2");
    }

    #[cfg(test)]
    mod property_tests {
        use crate::detect::PseudoTableParser;
        use crate::shape::ShapeGeometry;
        use proptest::prelude::*;

        /// A jittered grid with some cells left out, labelled by position.
        fn grid_strategy() -> impl Strategy<Value = Vec<ShapeGeometry>> {
            (1usize..6, 1usize..5)
                .prop_flat_map(|(rows, cols)| {
                    (
                        prop::collection::vec(any::<bool>(), rows * cols),
                        prop::collection::vec((-4.0f64..4.0, -4.0f64..4.0), rows * cols),
                        Just(cols),
                    )
                })
                .prop_map(|(present, jitter, cols)| {
                    present
                        .iter()
                        .zip(jitter)
                        .enumerate()
                        .filter(|(_, (keep, _))| **keep)
                        .map(|(i, (_, (dy, dx)))| {
                            let (row, col) = (i / cols, i % cols);
                            ShapeGeometry::new(
                                format!("r{}c{}", row, col),
                                100.0 + row as f64 * 40.0 + dy,
                                50.0 + col as f64 * 120.0 + dx,
                                100.0,
                                25.0,
                            )
                        })
                        .collect()
                })
        }

        fn shuffled_grid() -> impl Strategy<Value = (Vec<ShapeGeometry>, Vec<ShapeGeometry>)> {
            grid_strategy().prop_flat_map(|shapes| {
                let original = shapes.clone();
                Just(shapes).prop_shuffle().prop_map(move |s| (original.clone(), s))
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(100))]

            #[test]
            fn prop_parse_is_idempotent(shapes in grid_strategy()) {
                let parser = PseudoTableParser::default();
                prop_assert_eq!(parser.parse(&shapes), parser.parse(&shapes));
            }

            #[test]
            fn prop_caller_order_does_not_matter((original, shuffled) in shuffled_grid()) {
                let parser = PseudoTableParser::default();
                prop_assert_eq!(parser.parse(&original), parser.parse(&shuffled));
            }

            #[test]
            fn prop_too_few_shapes_yield_nothing(shapes in grid_strategy()) {
                let parser = PseudoTableParser::default();
                let limit = parser.options().min_cells() - 1;
                let few: Vec<ShapeGeometry> = shapes.into_iter().take(limit).collect();
                prop_assert!(parser.parse(&few).is_empty());
            }

            #[test]
            fn prop_tables_are_rectangular(shapes in grid_strategy()) {
                let parser = PseudoTableParser::default();
                for table in parser.parse(&shapes) {
                    let options = parser.options();
                    prop_assert!(table.row_count() >= options.min_rows);
                    prop_assert!(table.column_count() >= options.min_cols);
                    prop_assert!(table.data.iter().all(|row| row.len() == table.column_count()));
                    prop_assert!((0.0..=1.0).contains(&table.confidence_score));
                }
            }
        }
    }
}
