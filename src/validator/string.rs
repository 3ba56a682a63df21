//! Built-in string leaf validators: alphanumeric, length, and pattern.

use regex::Regex;

use crate::error::ErrorTree;
use crate::validator::Validate;
use crate::ValidationResult;

/// Validates that a string contains only alphanumeric characters.
pub(crate) struct AlphanumericValidator;

impl Validate<String> for AlphanumericValidator {
    fn readable(&self) -> String {
        "alphanumeric".to_string()
    }

    fn validate(&self, value: &String) -> ValidationResult {
        if value.chars().all(char::is_alphanumeric) {
            Ok(())
        } else {
            Err(ErrorTree::leaf("is not alphanumeric"))
        }
    }
}

/// Validates that a string's character count falls within bounds.
pub(crate) struct LengthValidator {
    min: Option<usize>,
    max: Option<usize>,
}

impl LengthValidator {
    pub(crate) fn new(min: Option<usize>, max: Option<usize>) -> Self {
        Self { min, max }
    }
}

impl Validate<String> for LengthValidator {
    fn readable(&self) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("between {} and {} characters", min, max),
            (Some(min), None) => format!("at least {} characters", min),
            (None, Some(max)) => format!("at most {} characters", max),
            (None, None) => "any length".to_string(),
        }
    }

    fn validate(&self, value: &String) -> ValidationResult {
        let count = value.chars().count();

        if let Some(min) = self.min {
            if count < min {
                return Err(ErrorTree::leaf(format!("is less than {}", min)));
            }
        }
        if let Some(max) = self.max {
            if count > max {
                return Err(ErrorTree::leaf(format!("is greater than {}", max)));
            }
        }

        Ok(())
    }
}

/// Validates that a string matches a regex pattern.
pub(crate) struct PatternValidator {
    regex: Regex,
    pattern: String,
}

impl PatternValidator {
    pub(crate) fn new(pattern: &str) -> Result<Self, InvalidPattern> {
        let regex = Regex::new(pattern).map_err(|source| InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            regex,
            pattern: pattern.to_string(),
        })
    }
}

impl Validate<String> for PatternValidator {
    fn readable(&self) -> String {
        format!("a match of pattern '{}'", self.pattern)
    }

    fn validate(&self, value: &String) -> ValidationResult {
        if self.regex.is_match(value) {
            Ok(())
        } else {
            Err(ErrorTree::leaf(format!(
                "does not match pattern '{}'",
                self.pattern
            )))
        }
    }
}

/// Error returned when a pattern validator is built from a regex that
/// does not compile.
#[derive(Debug, thiserror::Error)]
#[error("invalid validation pattern '{pattern}'")]
pub struct InvalidPattern {
    pattern: String,
    #[source]
    source: regex::Error,
}

impl InvalidPattern {
    /// Returns the pattern that failed to compile.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

#[cfg(test)]
mod tests {
    use crate::Rule;

    #[test]
    fn test_alphanumeric_accepts() {
        let validator = Rule::alphanumeric();
        assert!(validator.validate(&"abc123".to_string()).is_ok());
        assert!(validator.validate(&"".to_string()).is_ok());
    }

    #[test]
    fn test_alphanumeric_rejects() {
        let validator = Rule::alphanumeric();
        let error = validator.validate(&"abc 123".to_string()).unwrap_err();
        assert_eq!(error.flatten(), vec!["is not alphanumeric"]);
    }

    #[test]
    fn test_length_below_minimum() {
        let validator = Rule::length(5..);
        let error = validator.validate(&"ab".to_string()).unwrap_err();
        assert_eq!(error.flatten(), vec!["is less than 5"]);
    }

    #[test]
    fn test_length_above_maximum() {
        let validator = Rule::length(..=3);
        let error = validator.validate(&"abcd".to_string()).unwrap_err();
        assert_eq!(error.flatten(), vec!["is greater than 3"]);
    }

    #[test]
    fn test_length_within_range() {
        let validator = Rule::length(2..=4);
        assert!(validator.validate(&"abc".to_string()).is_ok());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let validator = Rule::length(..=3);
        // Three characters, more than three bytes.
        assert!(validator.validate(&"héé".to_string()).is_ok());
    }

    #[test]
    fn test_length_readable() {
        assert_eq!(Rule::length(2..=4).readable(), "between 2 and 4 characters");
        assert_eq!(Rule::length(5..).readable(), "at least 5 characters");
        assert_eq!(Rule::length(..=9).readable(), "at most 9 characters");
    }

    #[test]
    fn test_pattern_match() {
        let validator = Rule::pattern(r"^\d+$").unwrap();
        assert!(validator.validate(&"12345".to_string()).is_ok());
    }

    #[test]
    fn test_pattern_mismatch() {
        let validator = Rule::pattern(r"^\d+$").unwrap();
        let error = validator.validate(&"abc".to_string()).unwrap_err();
        assert_eq!(error.flatten(), vec![r"does not match pattern '^\d+$'"]);
    }

    #[test]
    fn test_pattern_invalid_regex() {
        let error = Rule::pattern("(unclosed").unwrap_err();
        assert_eq!(error.pattern(), "(unclosed");
        assert!(error.to_string().contains("invalid validation pattern"));
    }
}
