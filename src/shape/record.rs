//! Lenient intake of untyped shape records.
//!
//! Slide enumerators usually hand over one dictionary per text box:
//!
//! ```json
//! {"text": "Net saving", "top": 1182081, "left": 8920753, "width": 1485146, "height": 153888}
//! ```
//!
//! A single bad entry must not cost the whole slide, so records that are not
//! objects, miss a geometry field, or carry non-numeric or non-finite
//! geometry are skipped. Numeric strings (`"100"`) are accepted as numbers.

use crate::common::{Error, Result};
use crate::shape::ShapeGeometry;
use serde_json::{Map, Value};
use tracing::debug;

/// Why a record was skipped.
#[derive(Debug, thiserror::Error)]
enum RecordError {
    #[error("record is not an object")]
    NotAnObject,
    #[error("field '{0}' is missing")]
    MissingField(&'static str),
    #[error("field '{0}' is not a number")]
    NotNumeric(&'static str),
    #[error("field '{0}' is not finite")]
    NonFinite(&'static str),
    #[error("field 'text' is not a string")]
    TextNotString,
}

/// Decode a JSON array of shape records.
///
/// Fails only when the document is not JSON or its top level is not an
/// array; malformed entries inside the array are dropped.
///
/// # Examples
///
/// ```
/// use pseudotable::shape::shapes_from_json;
///
/// let shapes = shapes_from_json(r#"[
///     {"text": "H1", "top": 100, "left": 50, "width": 100, "height": 20},
///     {"text": "H2", "top": "100", "left": 160, "width": 100, "height": 20},
///     {"text": "bad", "top": "n/a", "left": 0, "width": 1, "height": 1}
/// ]"#)?;
/// assert_eq!(shapes.len(), 2);
/// # Ok::<(), pseudotable::Error>(())
/// ```
pub fn shapes_from_json(json: &str) -> Result<Vec<ShapeGeometry>> {
    let value: Value = serde_json::from_str(json)?;
    match value {
        Value::Array(items) => Ok(shapes_from_values(&items)),
        other => Err(Error::Json(format!(
            "expected an array of shape records, found {}",
            value_kind(&other)
        ))),
    }
}

/// Convert already-parsed records, skipping the malformed ones.
pub fn shapes_from_values(values: &[Value]) -> Vec<ShapeGeometry> {
    values
        .iter()
        .enumerate()
        .filter_map(|(index, value)| match shape_from_value(value) {
            Ok(shape) => Some(shape),
            Err(reason) => {
                debug!(index, %reason, "Skipping malformed shape record");
                None
            },
        })
        .collect()
}

fn shape_from_value(value: &Value) -> std::result::Result<ShapeGeometry, RecordError> {
    let record = value.as_object().ok_or(RecordError::NotAnObject)?;

    let text = match record.get("text") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(_) => return Err(RecordError::TextNotString),
    };

    Ok(ShapeGeometry {
        text,
        top: number_field(record, "top")?,
        left: number_field(record, "left")?,
        width: number_field(record, "width")?,
        height: number_field(record, "height")?,
    })
}

fn number_field(
    record: &Map<String, Value>,
    name: &'static str,
) -> std::result::Result<f64, RecordError> {
    let number = match record.get(name) {
        None | Some(Value::Null) => return Err(RecordError::MissingField(name)),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    }
    .ok_or(RecordError::NotNumeric(name))?;

    if number.is_finite() {
        Ok(number)
    } else {
        Err(RecordError::NonFinite(name))
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
