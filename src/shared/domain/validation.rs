use super::color::InvalidColor;

/// A draft that failed its field checks. `code` is the envelope error code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub code: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Generic field failure (`VALIDATION_ERROR`).
    pub fn field(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    pub fn required(field: &str) -> Self {
        Self::field(format!("{field} is required"))
    }

    pub fn too_long(field: &str, max: usize) -> Self {
        Self::field(format!("{field} must be at most {max} characters"))
    }
}

impl From<InvalidColor> for ValidationError {
    fn from(e: InvalidColor) -> Self {
        Self::new("INVALID_COLOR", e.to_string())
    }
}

/// Typed request payload for a resource. `validate` yields the normalized
/// value handed to the repository.
pub trait Draft {
    type Valid;

    fn validate(&self) -> Result<Self::Valid, ValidationError>;
}

/// Trimmed, non-empty and bounded.
pub fn checked_text(field: &str, raw: &str, max: usize) -> Result<String, ValidationError> {
    let value = super::text::required_text(raw).ok_or_else(|| ValidationError::required(field))?;
    if value.chars().count() > max {
        return Err(ValidationError::too_long(field, max));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::domain::HexColor;

    #[test]
    fn checked_text_trims() {
        assert_eq!(checked_text("Name", "  React ", 10).unwrap(), "React");
    }

    #[test]
    fn checked_text_rejects_blank_and_long() {
        assert_eq!(
            checked_text("Name", "  ", 10).unwrap_err().message,
            "Name is required"
        );
        let err = checked_text("Name", "abcdefghijk", 10).unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(err.message, "Name must be at most 10 characters");
    }

    #[test]
    fn invalid_color_maps_to_its_own_code() {
        let err: ValidationError = HexColor::parse("blue").unwrap_err().into();
        assert_eq!(err.code, "INVALID_COLOR");
    }
}
