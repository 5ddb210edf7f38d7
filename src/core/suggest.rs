use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A suggestion candidate. `value` is the identity used for matching and
/// for exact-match suppression; `description` is presentation only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Item {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Caller-supplied match predicate: `(query, item) -> bool`.
pub type FilterFn = Arc<dyn Fn(&str, &Item) -> bool + Send + Sync>;

/// Default match rule: case-insensitive substring containment, with both
/// operands trimmed. Custom predicates passed to [`compute_suggestions`]
/// replace this entirely.
pub fn default_filter(query: &str, item: &Item) -> bool {
    let needle = query.trim().to_lowercase();
    item.value.trim().to_lowercase().contains(&needle)
}

/// Compute the ordered set of suggestions to display for `query`.
///
/// Returns indices into `items`, in their original relative order. The
/// result is empty when `query` is the exact (case-sensitive) `value` of
/// some item: an input that already holds a complete selection gets no
/// dropdown. Otherwise items are kept by `filter` (or [`default_filter`])
/// and truncated to `limit`; `None` means no cap.
pub fn compute_suggestions(
    items: &[Item],
    query: &str,
    limit: Option<usize>,
    filter: Option<&FilterFn>,
) -> Vec<usize> {
    if items.iter().any(|item| item.value == query) {
        return Vec::new();
    }

    let mut indices: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| match filter {
            Some(filter) => filter(query, item),
            None => default_filter(query, item),
        })
        .map(|(index, _)| index)
        .collect();

    if let Some(limit) = limit {
        indices.truncate(limit);
    }
    indices
}

/// Char range of the first case-insensitive occurrence of `query` in
/// `value`, for highlighting rows matched by the default rule.
pub fn match_range(query: &str, value: &str) -> Option<(usize, usize)> {
    let needle: Vec<char> = query.trim().chars().map(|ch| ch.to_ascii_lowercase()).collect();
    if needle.is_empty() {
        return None;
    }

    let hay: Vec<char> = value.chars().map(|ch| ch.to_ascii_lowercase()).collect();
    if needle.len() > hay.len() {
        return None;
    }

    (0..=hay.len() - needle.len())
        .find(|&start| hay[start..start + needle.len()] == needle[..])
        .map(|start| (start, start + needle.len()))
}
