use regex::Regex;
use std::sync::LazyLock;

pub const DEFAULT_COLOR: &str = "#3B82F6";

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("hex color pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Color must be a #RRGGBB hex value, got {0:?}")]
pub struct InvalidColor(pub String);

/// `#RRGGBB`, stored upper-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexColor(String);

impl HexColor {
    pub fn parse(raw: &str) -> Result<Self, InvalidColor> {
        let trimmed = raw.trim();
        if !HEX_COLOR.is_match(trimmed) {
            return Err(InvalidColor(raw.to_string()));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self(DEFAULT_COLOR.to_string())
    }
}
