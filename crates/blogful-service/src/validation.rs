use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing '{0}' in request body")]
    MissingField(&'static str),
    #[error("Request body must contain 'title', 'style', or 'content'")]
    EmptyUpdate,
}

/// Presence check for a required field. Only an absent or null value is
/// missing; an empty string is still a value.
pub fn require(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    value.ok_or(ValidationError::MissingField(field))
}

/// Keeps a value only if it is usable for an update: present, non-null and
/// non-empty.
pub fn truthy(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_present_value() {
        assert_eq!(require("title", Some("Hello".into())), Ok("Hello".into()));
    }

    #[test]
    fn test_require_keeps_empty_string() {
        assert_eq!(require("title", Some(String::new())), Ok(String::new()));
    }

    #[test]
    fn test_require_missing_names_field() {
        let err = require("style", None).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("style"));
        assert_eq!(err.to_string(), "Missing 'style' in request body");
    }

    #[test]
    fn test_truthy() {
        assert_eq!(truthy(Some("x".into())), Some("x".into()));
        assert_eq!(truthy(Some(String::new())), None);
        assert_eq!(truthy(None), None);
    }

    #[test]
    fn test_empty_update_message() {
        assert_eq!(
            ValidationError::EmptyUpdate.to_string(),
            "Request body must contain 'title', 'style', or 'content'"
        );
    }
}
