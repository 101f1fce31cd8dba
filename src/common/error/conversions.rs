//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from the
//! decoding errors of optional dependencies to the unified Error type.

#[cfg(any(feature = "json", feature = "yaml"))]
use super::types::Error;

#[cfg(feature = "json")]
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

#[cfg(feature = "yaml")]
impl From<serde_saphyr::Error> for Error {
    fn from(err: serde_saphyr::Error) -> Self {
        Error::Yaml(err.to_string())
    }
}
