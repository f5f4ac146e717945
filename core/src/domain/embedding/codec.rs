//! Normalizes the heterogeneous embedding shapes the model service and the
//! store hand back (native array, serialized text like "[1,2,3]", object
//! wrapping a `vector` field) into one canonical element sequence.
//!
//! Nothing here returns an error. `None` means "embedding unavailable" and
//! every call site degrades instead of aborting the request.

use serde_json::Value;
use tracing::warn;

/// Structurally normalize a raw embedding into its element sequence.
pub fn normalize(raw: &Value) -> Option<Vec<Value>> {
    match raw {
        Value::Array(items) => Some(items.clone()),
        Value::String(text) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Array(items)) => Some(items),
            Ok(_) | Err(_) => {
                warn!("failed to parse embedding string");
                None
            }
        },
        Value::Object(map) => match map.get("vector") {
            Some(inner) => normalize(inner),
            None => {
                warn!("embedding object has no vector field");
                None
            }
        },
        _ => {
            warn!("unknown embedding format");
            None
        }
    }
}

/// Coerce one embedding element to a finite number. Numeric strings count
/// because some store paths render vectors as text.
pub fn coerce_element(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Fully numeric view of a raw embedding, for call sites that must hold a
/// well-formed vector. A single bad element invalidates the whole thing.
pub fn to_vector(raw: &Value) -> Option<Vec<f32>> {
    normalize(raw)?
        .iter()
        .map(|element| coerce_element(element).map(|v| v as f32))
        .collect()
}
