//! Membership validation against a candidate set.

use std::fmt::Display;

use crate::error::ErrorTree;
use crate::validator::Validate;
use crate::ValidationResult;

/// Validates that a value is equal to some element of a candidate set.
pub(crate) struct MemberOfValidator<T> {
    candidates: Vec<T>,
}

impl<T> MemberOfValidator<T> {
    pub(crate) fn new(candidates: Vec<T>) -> Self {
        Self { candidates }
    }
}

impl<T> Validate<T> for MemberOfValidator<T>
where
    T: PartialEq + Display + Send + Sync,
{
    fn readable(&self) -> String {
        let all = self
            .candidates
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!("in ({})", all)
    }

    fn validate(&self, value: &T) -> ValidationResult {
        if self.candidates.iter().any(|candidate| candidate == value) {
            Ok(())
        } else {
            Err(ErrorTree::leaf(format!("is not {}", self.readable())))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Rule;

    #[test]
    fn test_member_of_accepts_candidate() {
        let validator = Rule::member_of(vec!["foo", "bar"]);
        assert!(validator.validate(&"foo").is_ok());
        assert!(validator.validate(&"bar").is_ok());
    }

    #[test]
    fn test_member_of_rejects_non_candidate() {
        let validator = Rule::member_of(vec!["x", "y", "z"]);
        let error = validator.validate(&"w").unwrap_err();
        assert_eq!(error.flatten(), vec!["is not in (x, y, z)"]);
    }

    #[test]
    fn test_member_of_readable() {
        let validator = Rule::member_of(vec![1, 2, 3]);
        assert_eq!(validator.readable(), "in (1, 2, 3)");
    }

    #[test]
    #[should_panic(expected = "at least one candidate")]
    fn test_member_of_empty_candidates_panics() {
        let _ = Rule::member_of(Vec::<String>::new());
    }
}
