//! Error types for pseudo-table detection.
//!
//! Detection itself is total and never fails; errors only surface at the
//! boundaries where options are validated or untyped input is decoded.

// Submodule declarations
pub mod types;
pub mod conversions;

// Re-exports
pub use types::{Error, Result};
