//! Pseudotable - Detect tables drawn with free-floating text boxes
//!
//! Slide decks often fake a table by laying out independent text boxes on a
//! grid instead of inserting a real table object. This library recovers the
//! grid from the position and size of each box.
//!
//! # Features
//!
//! - **Row-major detection**: Cluster boxes into rows, infer columns
//! - **Column-major fallback**: Cluster into columns, infer rows, transpose
//! - **Tolerant alignment**: Configurable jitter per axis, in any coordinate unit
//! - **Confidence scoring**: Alignment and density blended into `[0, 1]`
//! - **Lenient intake**: Decode loosely typed JSON shape records (`json` feature)
//! - **YAML configuration**: Load detection options from a file (`yaml` feature)
//!
//! # Example - Detecting a table
//!
//! ```
//! use pseudotable::{PseudoTableParser, ShapeGeometry};
//!
//! let shapes = vec![
//!     ShapeGeometry::new("Name", 100.0, 50.0, 100.0, 20.0),
//!     ShapeGeometry::new("Score", 100.0, 160.0, 100.0, 20.0),
//!     ShapeGeometry::new("Alice", 130.0, 50.0, 100.0, 20.0),
//!     ShapeGeometry::new("91", 130.0, 160.0, 100.0, 20.0),
//!     ShapeGeometry::new("Bob", 160.0, 50.0, 100.0, 20.0),
//!     ShapeGeometry::new("78", 160.0, 160.0, 100.0, 20.0),
//! ];
//!
//! let tables = PseudoTableParser::default().parse(&shapes);
//! assert_eq!(tables.len(), 1);
//! assert_eq!(tables[0].header(), vec!["Name", "Score"]);
//! assert!(tables[0].confidence_score >= 0.9);
//! ```
//!
//! # Example - EMU coordinates
//!
//! ```
//! use pseudotable::{ParserOptions, PseudoTableParser};
//! use pseudotable::common::unit::CoordinateUnit;
//!
//! # fn main() -> pseudotable::Result<()> {
//! // A tenth of an inch expressed in English Metric Units
//! let parser = PseudoTableParser::new(ParserOptions::for_unit(CoordinateUnit::Emu))?;
//! assert!((parser.options().x_tolerance - 91_440.0).abs() < 1e-6);
//! # Ok(())
//! # }
//! ```

/// Error types and coordinate unit helpers
pub mod common;

/// Detection of pseudo-tables among text shapes
pub mod detect;

/// Input shape geometry and record decoding
pub mod shape;

/// Detected table model and rendering
pub mod table;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use detect::{Detection, GridPolicy, ParserOptions, PseudoTableParser, Strategy};
pub use shape::{Axis, ShapeGeometry};
pub use table::{BoundingBox, PseudoTable, Record, TableKind};
