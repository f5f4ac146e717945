//! Cosine similarity over raw embedding values with graceful degradation.
//!
//! Embeddings sourced from a generative model are not guaranteed well-formed.
//! Structural failures (unparseable operand, length mismatch) score 0.0;
//! individual elements that fail numeric coercion are skipped on both sides
//! of their index without nullifying the rest of the comparison.

use serde_json::{Value, json};
use tracing::warn;

use crate::domain::embedding::codec;

/// Cosine similarity of two raw embedding values. Always returns a finite
/// number; worst case is 0.0, never an error.
pub fn score(a: &Value, b: &Value) -> f64 {
    let Some(vec_a) = codec::normalize(a) else {
        return 0.0;
    };
    let Some(vec_b) = codec::normalize(b) else {
        return 0.0;
    };

    if vec_a.len() != vec_b.len() {
        warn!(
            len_a = vec_a.len(),
            len_b = vec_b.len(),
            "embedding length mismatch"
        );
        return 0.0;
    }

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for (element_a, element_b) in vec_a.iter().zip(vec_b.iter()) {
        let (Some(x), Some(y)) = (codec::coerce_element(element_a), codec::coerce_element(element_b))
        else {
            continue;
        };

        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let similarity = dot / (norm_a.sqrt() * norm_b.sqrt());
    if similarity.is_finite() { similarity } else { 0.0 }
}

/// Score two stored embeddings. A missing operand (the invalid-embedding
/// marker on a food item) scores 0.0.
pub fn score_stored(a: &[f32], b: Option<&[f32]>) -> f64 {
    let Some(b) = b else {
        return 0.0;
    };
    score(&json!(a), &json!(b))
}
