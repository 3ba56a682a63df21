//! AND/OR combinators over validators.
//!
//! Both combinators wrap two [`Validator`]s and merge their failures into
//! a composite [`ErrorTree`]. The two differ in evaluation strategy: AND
//! always evaluates both sides so a report covers every simultaneous
//! violation, while OR short-circuits on the left side's success.

use crate::error::ErrorTree;
use crate::validator::{Validate, Validator};
use crate::ValidationResult;

/// Combines two validators with AND logic, succeeding only if both
/// succeed.
pub(crate) struct AndValidator<T> {
    lhs: Validator<T>,
    rhs: Validator<T>,
}

impl<T> AndValidator<T> {
    pub(crate) fn new(lhs: Validator<T>, rhs: Validator<T>) -> Self {
        Self { lhs, rhs }
    }
}

impl<T: 'static> Validate<T> for AndValidator<T> {
    fn readable(&self) -> String {
        format!("{} and is {}", self.lhs.readable(), self.rhs.readable())
    }

    fn validate(&self, value: &T) -> ValidationResult {
        // Not short-circuiting: both sides run so the failure carries
        // everything wrong with the value at once.
        let left = self.lhs.validate(value).err();
        let right = self.rhs.validate(value).err();

        if left.is_some() || right.is_some() {
            Err(ErrorTree::and(left, right))
        } else {
            Ok(())
        }
    }
}

/// Combines two validators with OR logic, succeeding if either succeeds.
pub(crate) struct OrValidator<T> {
    lhs: Validator<T>,
    rhs: Validator<T>,
}

impl<T> OrValidator<T> {
    pub(crate) fn new(lhs: Validator<T>, rhs: Validator<T>) -> Self {
        Self { lhs, rhs }
    }
}

impl<T: 'static> Validate<T> for OrValidator<T> {
    fn readable(&self) -> String {
        format!("{} or is {}", self.lhs.readable(), self.rhs.readable())
    }

    fn validate(&self, value: &T) -> ValidationResult {
        // The right side only runs when the left side failed; a known-good
        // left side proves the disjunction.
        match self.lhs.validate(value) {
            Ok(()) => Ok(()),
            Err(left) => match self.rhs.validate(value) {
                Ok(()) => Ok(()),
                Err(right) => Err(ErrorTree::or(left, right)),
            },
        }
    }
}
