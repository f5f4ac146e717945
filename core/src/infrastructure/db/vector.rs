//! Text rendering of pgvector columns. Writes go through a `$n::vector`
//! cast; reads select `embedding::text` and reuse the embedding codec to
//! parse the bracketed list back.

use serde_json::Value;

use crate::domain::embedding::codec;

/// Render a vector in the `[x,y,z]` literal form the vector column accepts.
pub fn render(values: &[f32]) -> String {
    let rendered: Vec<String> = values.iter().map(f32::to_string).collect();
    format!("[{}]", rendered.join(","))
}

/// Parse a vector column selected as text. A NULL column or malformed text
/// yields None; callers treat that as the invalid-embedding marker.
pub fn parse(text: Option<String>) -> Option<Vec<f32>> {
    text.and_then(|t| codec::to_vector(&Value::String(t)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_bracketed_literal() {
        assert_eq!(render(&[1.0, -2.5, 3.0]), "[1,-2.5,3]");
        assert_eq!(render(&[]), "[]");
    }

    #[test]
    fn round_trips_through_text() {
        let original = vec![0.25_f32, -1.0, 42.0];
        assert_eq!(parse(Some(render(&original))), Some(original));
    }

    #[test]
    fn null_and_garbage_are_none() {
        assert_eq!(parse(None), None);
        assert_eq!(parse(Some("not a vector".to_string())), None);
    }
}
