//! Tolerant conversions between stored columns and profile fields.

/// Tag lists are stored as one comma-delimited text column. Some rows
/// predate that convention, so the split tolerates empty segments and
/// stray whitespace; the domain always sees a materialized sequence.
pub fn split_tags(raw: Option<String>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}

pub fn join_tags(tags: &[String]) -> String {
    tags.join(",")
}
