//! Field binding for validating whole records.
//!
//! This module provides [`RecordValidator`], which attaches validators to
//! named fields of a record and merges per-field failures into a single
//! [`ErrorTree`] batch with each failure qualified by its field name.

use indexmap::IndexMap;

use crate::error::ErrorTree;
use crate::validator::Validator;
use crate::ValidationResult;

type FieldCheck<T> = Box<dyn Fn(&T) -> ValidationResult + Send + Sync>;

/// Binds validators to named fields of a record type `T`.
///
/// Every field's validators run on every call; validation never stops at
/// the first failing field. Each failure is prefixed with its field name
/// and the batch is merged into a single `Multiple` tree, so one report
/// covers everything wrong with the record.
///
/// # Example
///
/// ```rust
/// use verdict::{RecordValidator, Rule};
///
/// struct User {
///     name: String,
///     role: String,
/// }
///
/// let validator = RecordValidator::new()
///     .field("name", |u: &User| &u.name, Rule::length(5..).and(Rule::alphanumeric()))
///     .field("role", |u: &User| &u.role, Rule::member_of(vec![
///         "admin".to_string(),
///         "member".to_string(),
///     ]));
///
/// let user = User {
///     name: "ab".to_string(),
///     role: "guest".to_string(),
/// };
///
/// let error = validator.validate(&user).unwrap_err();
/// assert_eq!(
///     error.render(),
///     "'name' is less than 5, 'role' is not in (admin, member)",
/// );
/// ```
pub struct RecordValidator<T> {
    fields: IndexMap<String, Vec<FieldCheck<T>>>,
}

impl<T> RecordValidator<T> {
    /// Creates a record validator with no fields bound.
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Binds a validator to a named field.
    ///
    /// `extract` projects the field's value out of the record. Binding
    /// the same field name twice adds a second validator for that field;
    /// fields keep their binding order in reports.
    pub fn field<F: 'static>(
        mut self,
        name: impl Into<String>,
        extract: impl Fn(&T) -> &F + Send + Sync + 'static,
        validator: Validator<F>,
    ) -> Self {
        let check: FieldCheck<T> = Box::new(move |value| validator.validate(extract(value)));
        self.fields.entry(name.into()).or_default().push(check);
        self
    }

    /// Validates every bound field of a record.
    ///
    /// Failures come back as a single `Multiple` tree, one entry per
    /// failing check, each path-prefixed with its field name. A record
    /// with no failing fields returns `Ok(())` rather than an empty
    /// batch.
    pub fn validate(&self, value: &T) -> ValidationResult {
        let mut errors = Vec::new();
        for (name, checks) in &self.fields {
            for check in checks {
                if let Err(error) = check(value) {
                    errors.push(error.with_field_prefix(name.clone()));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ErrorTree::multiple(errors))
        }
    }
}

impl<T> Default for RecordValidator<T> {
    fn default() -> Self {
        Self::new()
    }
}
