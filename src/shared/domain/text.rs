/// Raised when a stored or submitted string does not name a known enum variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Trimmed value, or `None` when blank.
pub fn required_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Blank optional fields are stored as absent.
pub fn optional_text(raw: Option<String>) -> Option<String> {
    raw.as_deref().and_then(required_text)
}

/// Trims entries, drops blanks and keeps the first occurrence of duplicates.
pub fn normalize_list(items: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if let Some(value) = required_text(&item) {
            if !out.contains(&value) {
                out.push(value);
            }
        }
    }
    out
}
