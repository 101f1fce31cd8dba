//! Types shared across the crate.

// Submodule declarations
pub mod error;
pub mod unit;

// Re-exports for convenience
pub use error::{Error, Result};
