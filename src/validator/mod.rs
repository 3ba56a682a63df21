//! Validators and the combinators that compose them.
//!
//! This module provides the [`Validate`] contract, the type-erased
//! [`Validator`] handle, and the [`Rule`] factory for the built-in leaf
//! validators. Validators compose with [`Validator::and`] and
//! [`Validator::or`]; the record-level binder lives in
//! [`RecordValidator`].
//!
//! # Example
//!
//! ```rust
//! use verdict::Rule;
//!
//! let name = Rule::length(5..).and(Rule::alphanumeric());
//!
//! assert!(name.validate(&"hello1".to_string()).is_ok());
//!
//! let error = name.validate(&"ab".to_string()).unwrap_err();
//! assert_eq!(error.render(), "data is less than 5");
//! ```

mod combinators;
mod member_of;
mod record;
mod string;

use std::fmt::{self, Display};
use std::ops::{Bound, RangeBounds};
use std::sync::Arc;

use crate::ValidationResult;
use combinators::{AndValidator, OrValidator};
use member_of::MemberOfValidator;
use string::{AlphanumericValidator, LengthValidator, PatternValidator};

pub use record::RecordValidator;
pub use string::InvalidPattern;

/// The contract every validator satisfies.
///
/// A validator is a pure check over a value of type `T`: it either
/// succeeds (no output) or fails with an [`ErrorTree`](crate::ErrorTree)
/// describing why. Validators hold only read-only configuration
/// established at construction time, so they are safe to share across
/// threads.
///
/// External leaf validators implement this trait, build their failures
/// via [`ErrorTree::leaf`](crate::ErrorTree::leaf) with an empty initial
/// path, and convert into a composable handle with [`Validator::new`].
pub trait Validate<T>: Send + Sync {
    /// A human-readable descriptor of what this validator checks,
    /// used by composite validators to build their own descriptor.
    fn readable(&self) -> String;

    /// Checks a value, returning a failure tree if it does not pass.
    fn validate(&self, value: &T) -> ValidationResult;
}

/// A type-erased, cheaply clonable validator over values of type `T`.
///
/// `Validator` is what combinators produce and consume: it captures a
/// [`Validate`] implementation behind an `Arc`, so composed validators
/// can be cloned and shared freely.
///
/// # Example
///
/// ```rust
/// use verdict::Rule;
///
/// let role = Rule::member_of(vec!["admin", "member", "guest"]);
///
/// assert!(role.validate(&"admin").is_ok());
///
/// let error = role.validate(&"intruder").unwrap_err();
/// assert_eq!(error.render(), "data is not in (admin, member, guest)");
/// ```
pub struct Validator<T> {
    readable: String,
    check: Arc<dyn Fn(&T) -> ValidationResult + Send + Sync>,
}

impl<T> fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("readable", &self.readable)
            .finish_non_exhaustive()
    }
}

impl<T> Clone for Validator<T> {
    fn clone(&self) -> Self {
        Self {
            readable: self.readable.clone(),
            check: Arc::clone(&self.check),
        }
    }
}

impl<T: 'static> Validator<T> {
    /// Wraps a [`Validate`] implementation into a composable handle.
    ///
    /// The descriptor is captured once at construction; validators are
    /// immutable afterwards.
    pub fn new(validator: impl Validate<T> + 'static) -> Self {
        Self {
            readable: validator.readable(),
            check: Arc::new(move |value| validator.validate(value)),
        }
    }

    /// Builds a validator directly from a descriptor and a check
    /// function, without a named [`Validate`] type.
    pub fn from_fn(
        readable: impl Into<String>,
        check: impl Fn(&T) -> ValidationResult + Send + Sync + 'static,
    ) -> Self {
        Self {
            readable: readable.into(),
            check: Arc::new(check),
        }
    }

    /// Returns the human-readable descriptor for this validator.
    pub fn readable(&self) -> &str {
        &self.readable
    }

    /// Checks a value against this validator.
    pub fn validate(&self, value: &T) -> ValidationResult {
        (self.check)(value)
    }

    /// Combines two validators with AND logic.
    ///
    /// Both sides are always evaluated, even when the left side already
    /// failed: callers need the full picture of everything wrong with a
    /// value, not just the first failure. When either side fails, the
    /// combined validator fails with an `And` tree carrying whichever
    /// sides failed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::Rule;
    ///
    /// let name = Rule::length(3..=20).and(Rule::alphanumeric());
    ///
    /// // Both checks fail and both failures are reported.
    /// let error = name.validate(&"a!".to_string()).unwrap_err();
    /// assert_eq!(
    ///     error.flatten(),
    ///     vec!["is less than 3", "is not alphanumeric"],
    /// );
    /// ```
    pub fn and(self, rhs: Validator<T>) -> Validator<T> {
        Validator::new(AndValidator::new(self, rhs))
    }

    /// Combines two validators with OR logic.
    ///
    /// If the left side succeeds, the right side is not evaluated: once
    /// one side is known-good the disjunction is proven. Only when both
    /// sides fail does the combined validator fail, with an `Or` tree
    /// carrying both failures.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::Rule;
    ///
    /// let id = Rule::alphanumeric().or(Rule::member_of(vec!["-".to_string()]));
    ///
    /// assert!(id.validate(&"abc123".to_string()).is_ok());
    /// assert!(id.validate(&"-".to_string()).is_ok());
    /// assert!(id.validate(&"!!".to_string()).is_err());
    /// ```
    pub fn or(self, rhs: Validator<T>) -> Validator<T> {
        Validator::new(OrValidator::new(self, rhs))
    }
}

impl<T: 'static> Validate<T> for Validator<T> {
    fn readable(&self) -> String {
        self.readable.clone()
    }

    fn validate(&self, value: &T) -> ValidationResult {
        (self.check)(value)
    }
}

/// Factory for the built-in leaf validators.
///
/// `Rule` provides constructors for the primitive checks shipped with the
/// crate. Each returns a [`Validator`] ready to be composed with
/// [`Validator::and`] and [`Validator::or`].
///
/// # Example
///
/// ```rust
/// use verdict::Rule;
///
/// let username = Rule::length(3..=20).and(Rule::alphanumeric());
/// assert!(username.validate(&"alice".to_string()).is_ok());
/// ```
pub struct Rule;

impl Rule {
    /// Creates a validator that checks membership in a candidate set.
    ///
    /// Succeeds iff the value equals some element of `candidates`;
    /// otherwise fails with `is not in (<candidates>)`.
    ///
    /// # Panics
    ///
    /// Panics if `candidates` is empty. A validator that can never
    /// succeed is a caller bug, caught here rather than silently
    /// accepted.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::Rule;
    ///
    /// let weekday = Rule::member_of(vec!["mon", "tue", "wed", "thu", "fri"]);
    ///
    /// assert!(weekday.validate(&"wed").is_ok());
    /// assert!(weekday.validate(&"sun").is_err());
    /// ```
    pub fn member_of<T>(candidates: Vec<T>) -> Validator<T>
    where
        T: PartialEq + Display + Send + Sync + 'static,
    {
        assert!(
            !candidates.is_empty(),
            "member_of requires at least one candidate"
        );
        Validator::new(MemberOfValidator::new(candidates))
    }

    /// Creates a validator that checks a string is entirely alphanumeric.
    pub fn alphanumeric() -> Validator<String> {
        Validator::new(AlphanumericValidator)
    }

    /// Creates a validator that checks a string's character count falls
    /// within `range`.
    ///
    /// Counts Unicode scalar values, not bytes. Fails with
    /// `is less than <min>` below the minimum and `is greater than <max>`
    /// above the maximum.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::Rule;
    ///
    /// let name = Rule::length(5..);
    ///
    /// assert!(name.validate(&"hello".to_string()).is_ok());
    ///
    /// let error = name.validate(&"ab".to_string()).unwrap_err();
    /// assert_eq!(error.render(), "data is less than 5");
    /// ```
    pub fn length(range: impl RangeBounds<usize>) -> Validator<String> {
        let min = match range.start_bound() {
            Bound::Included(&min) => Some(min),
            Bound::Excluded(&min) => Some(min.saturating_add(1)),
            Bound::Unbounded => None,
        };
        let max = match range.end_bound() {
            Bound::Included(&max) => Some(max),
            Bound::Excluded(&max) => Some(max.saturating_sub(1)),
            Bound::Unbounded => None,
        };
        Validator::new(LengthValidator::new(min, max))
    }

    /// Creates a validator that checks a string against a regex pattern.
    ///
    /// Returns [`InvalidPattern`] if the pattern does not compile.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::Rule;
    ///
    /// let digits = Rule::pattern(r"^\d+$").unwrap();
    ///
    /// assert!(digits.validate(&"12345".to_string()).is_ok());
    /// assert!(digits.validate(&"abc".to_string()).is_err());
    /// ```
    pub fn pattern(pattern: &str) -> Result<Validator<String>, InvalidPattern> {
        Ok(Validator::new(PatternValidator::new(pattern)?))
    }
}
