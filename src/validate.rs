use crate::error::{Error, Result};
use tracing::debug;

/// Trims whitespace and rejects empty strings.
///
/// # Errors
///
/// Returns `Error::InvalidValue` if nothing is left after trimming.
pub fn validate_non_empty(input: &str) -> Result<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        debug!(len = input.len(), "rejected blank input");
        return Err(Error::invalid_value("input cannot be blank"));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(validate_non_empty("  xyz \n").ok(), Some("xyz"));
    }

    #[test]
    fn keeps_inner_whitespace() {
        assert_eq!(validate_non_empty(" a  b ").ok(), Some("a  b"));
    }

    #[test]
    fn rejects_blank() {
        for input in ["", " ", "\t\r\n", "\u{3000}"] {
            assert!(matches!(
                validate_non_empty(input),
                Err(Error::InvalidValue(_))
            ));
        }
    }
}
