//! Best-effort parsing of model-generated nutrition text.
//!
//! Model responses are untyped text, nominally one `Key: Value` pair per
//! line. The output here is a best-effort mapping with defined fallbacks,
//! not a strict schema; the pipeline validates only the single invariant it
//! needs (a dish name is present).

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Mapping key under which the model reports the dish name.
pub const FOOD_ITEM_KEY: &str = "Food Item";

static INTEGER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("integer pattern compiles"));

/// Parse line-oriented `Key: Value` model output into a mapping.
///
/// The first colon splits label from value; lines without a colon are
/// dropped silently. Duplicated labels keep the last occurrence, since
/// model output order is not guaranteed duplicate-free.
pub fn extract(model_text: &str) -> HashMap<String, String> {
    let mut fields = HashMap::new();

    for line in model_text.lines() {
        let Some((label, value)) = line.split_once(':') else {
            continue;
        };
        fields.insert(label.trim().to_string(), value.trim().to_string());
    }

    fields
}

/// Resolve a textual value that may contain a numeric range ("370-400")
/// to a single representative number, as text.
///
/// No integers found resolves to "0"; a single integer passes through;
/// two or more resolve to the rounded mean of the first two.
pub fn resolve_range(value: &str) -> String {
    let numbers: Vec<i64> = INTEGER_RE
        .find_iter(value)
        .filter_map(|m| m.as_str().parse().ok())
        .collect();

    match numbers.as_slice() {
        [] => "0".to_string(),
        [single] => single.to_string(),
        [first, second, ..] => {
            let mean = ((*first + *second) as f64 / 2.0).round() as i64;
            mean.to_string()
        }
    }
}
