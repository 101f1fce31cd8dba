//! Detected table output.
//!
//! [`PseudoTable`] is the only thing the detector produces. It serializes to
//! the record shape downstream consumers expect:
//!
//! ```json
//! {"type": "pseudo_table", "confidence_score": 0.97,
//!  "bbox": [50.0, 100.0, 460.0, 210.0], "data": [["H1", "H2"], ["a", null]]}
//! ```

// Submodule declarations
pub mod render;
pub mod types;

// Re-exports
pub use types::{BoundingBox, PseudoTable, Record, TableKind};
