//! # Verdict
//!
//! A composable validation library: build rules for typed values out of
//! small primitive checks and combine them with logical AND/OR, producing
//! a single structured error when validation fails.
//!
//! ## Overview
//!
//! Failures are values, not exceptions. Every failing check produces an
//! [`ErrorTree`], and combinators merge child failures into a tree that
//! preserves provenance: which sub-check failed, with what message, at
//! what field path. The tree flattens into a list of discrete messages
//! for structured responses, or renders into one human-readable report.
//!
//! The AND combinator always evaluates both sides so a report covers
//! every simultaneous violation; the OR combinator short-circuits on the
//! left side's success.
//!
//! ## Core Types
//!
//! - [`ErrorTree`]: the recursive failure value (leaf, AND, OR, or batch)
//! - [`FieldPath`]: dotted paths locating failures in nested records
//! - [`Validator`]: a composable, type-erased validation rule
//! - [`Rule`]: factory for the built-in leaf validators
//! - [`RecordValidator`]: binds validators to named record fields
//!
//! ## Example
//!
//! ```rust
//! use verdict::{FieldPath, Rule};
//!
//! let name = Rule::length(5..).and(Rule::alphanumeric());
//!
//! assert!(name.validate(&"hello1".to_string()).is_ok());
//!
//! // "ab" is alphanumeric but too short; only the failing side is
//! // reported.
//! let error = name.validate(&"ab".to_string()).unwrap_err();
//! let error = error.with_path_prefix(&FieldPath::from_field("name"));
//! assert_eq!(error.render(), "'name' is less than 5");
//! ```
//!
//! ## A note on OR reports
//!
//! When both branches of an OR fail, the rendered report joins the two
//! reasons with the word `"and"`, not `"or"`. This mirrors the behavior
//! of the system this crate replaces and is kept deliberately for
//! report compatibility; it is covered by a test rather than silently
//! corrected.

pub mod error;
pub mod path;
pub mod validator;

pub use error::{ErrorKind, ErrorTree};
pub use path::FieldPath;
pub use validator::{InvalidPattern, RecordValidator, Rule, Validate, Validator};

/// The result of running a validator: success carries nothing, failure
/// carries the tree describing why.
pub type ValidationResult = Result<(), ErrorTree>;
