//! The recursive failure value produced by validators.

use std::fmt::{self, Display};

use crate::path::FieldPath;

/// The shape of an [`ErrorTree`] node.
///
/// A tree is either a single leaf failure or a composite built by one of
/// the combinators. Composite variants own their children; children are
/// never shared or mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    /// A single leaf failure with no internal structure.
    Basic,
    /// The result of combining two validators with AND. Each side is
    /// present only if that side actually failed; both absent never
    /// occurs (that would be overall success, which produces no error).
    And {
        left: Option<Box<ErrorTree>>,
        right: Option<Box<ErrorTree>>,
    },
    /// The result of combining two validators with OR when both sides
    /// failed. If either side succeeds, OR produces no error at all, so
    /// a one-sided `Or` never exists.
    Or {
        left: Box<ErrorTree>,
        right: Box<ErrorTree>,
    },
    /// An explicit flat batch of unrelated failures, e.g. one per
    /// independently failing field of a record.
    Multiple(Vec<ErrorTree>),
}

/// A validation failure, or a whole tree of them.
///
/// `ErrorTree` is the single error value this crate produces. A leaf
/// validator creates a [`Basic`](ErrorKind::Basic) node; the AND/OR
/// combinators and the record binder merge child failures into composite
/// nodes, preserving which sub-check failed, with what message, at what
/// field path.
///
/// Trees are immutable once constructed. The only "modification" is
/// [`with_path_prefix`](ErrorTree::with_path_prefix), which returns a new
/// tree and leaves the original usable by other callers.
///
/// # Example
///
/// ```rust
/// use verdict::{ErrorTree, FieldPath};
///
/// let error = ErrorTree::leaf("is not alphanumeric")
///     .with_path_prefix(&FieldPath::from_field("name"));
///
/// assert_eq!(error.render(), "'name' is not alphanumeric");
/// assert_eq!(error.flatten(), vec!["is not alphanumeric"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorTree {
    path: FieldPath,
    message: String,
    kind: ErrorKind,
}

impl ErrorTree {
    /// Creates a leaf failure with the given message and an empty path.
    ///
    /// Path attachment happens later, at the field-binding layer, via
    /// [`with_path_prefix`](ErrorTree::with_path_prefix).
    pub fn leaf(message: impl Into<String>) -> Self {
        Self {
            path: FieldPath::root(),
            message: message.into(),
            kind: ErrorKind::Basic,
        }
    }

    /// Creates an AND node from the failures of the two sides.
    ///
    /// At least one side must be present: an AND where both sides passed
    /// is a success and must not be reified as an error. The AND
    /// combinator upholds this by only constructing a node when it has a
    /// failure to report; calling this with two `None`s is a caller bug.
    pub fn and(left: Option<ErrorTree>, right: Option<ErrorTree>) -> Self {
        debug_assert!(
            left.is_some() || right.is_some(),
            "ErrorTree::and requires at least one failed side"
        );
        Self {
            path: FieldPath::root(),
            message: String::new(),
            kind: ErrorKind::And {
                left: left.map(Box::new),
                right: right.map(Box::new),
            },
        }
    }

    /// Creates an OR node from the failures of both sides.
    ///
    /// Both arguments are required because OR only produces an error when
    /// both branches failed; a succeeding branch suppresses the error
    /// entirely.
    pub fn or(left: ErrorTree, right: ErrorTree) -> Self {
        Self {
            path: FieldPath::root(),
            message: String::new(),
            kind: ErrorKind::Or {
                left: Box::new(left),
                right: Box::new(right),
            },
        }
    }

    /// Creates a flat batch of failures.
    ///
    /// An empty batch renders as an empty string and flattens to nothing;
    /// callers should avoid surfacing an empty batch as if it were a
    /// failure.
    pub fn multiple(errors: Vec<ErrorTree>) -> Self {
        Self {
            path: FieldPath::root(),
            message: String::new(),
            kind: ErrorKind::Multiple(errors),
        }
    }

    /// Returns the path segments accumulated on this node.
    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Returns this node's own message.
    ///
    /// Only meaningful for `Basic` nodes; composite nodes carry an empty
    /// message and derive their text from their children.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the shape of this node.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns a new tree identical to this one with `prefix` prepended
    /// ahead of its existing path.
    ///
    /// This is a pure transform: the original tree is untouched and stays
    /// usable by other branches that may hold it. During rendering the
    /// prefix propagates to every leaf, so prefixing the root is enough to
    /// qualify the whole tree.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{ErrorTree, FieldPath};
    ///
    /// let inner = ErrorTree::leaf("is required");
    /// let outer = inner.with_path_prefix(&FieldPath::from_field("email"));
    ///
    /// assert_eq!(inner.render(), "data is required");
    /// assert_eq!(outer.render(), "'email' is required");
    /// ```
    pub fn with_path_prefix(&self, prefix: &FieldPath) -> Self {
        Self {
            path: self.path.prepend(prefix),
            message: self.message.clone(),
            kind: self.kind.clone(),
        }
    }

    /// Convenience for prefixing with a single field name.
    pub fn with_field_prefix(&self, name: impl Into<String>) -> Self {
        self.with_path_prefix(&FieldPath::from_field(name))
    }

    /// Collects every leaf message reachable from this node, in
    /// left-to-right, depth-first order.
    ///
    /// Paths are ignored here; they are applied during rendering. Flatten
    /// answers "what messages exist", [`render`](ErrorTree::render)
    /// answers "what do they say including location".
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::ErrorTree;
    ///
    /// let error = ErrorTree::and(
    ///     Some(ErrorTree::leaf("is too short")),
    ///     Some(ErrorTree::leaf("is not alphanumeric")),
    /// );
    ///
    /// assert_eq!(error.flatten(), vec!["is too short", "is not alphanumeric"]);
    /// ```
    pub fn flatten(&self) -> Vec<String> {
        let mut messages = Vec::new();
        self.collect_messages(&mut messages);
        messages
    }

    fn collect_messages(&self, messages: &mut Vec<String>) {
        match &self.kind {
            ErrorKind::Basic => messages.push(self.message.clone()),
            ErrorKind::And { left, right } => {
                if let Some(left) = left {
                    left.collect_messages(messages);
                }
                if let Some(right) = right {
                    right.collect_messages(messages);
                }
            }
            ErrorKind::Or { left, right } => {
                left.collect_messages(messages);
                right.collect_messages(messages);
            }
            ErrorKind::Multiple(errors) => {
                for error in errors {
                    error.collect_messages(messages);
                }
            }
        }
    }

    /// Produces the full human-readable reason for this tree.
    ///
    /// A `Basic` node renders as `'<path>' <message>`, or
    /// `data <message>` when no path has been attached. Composite nodes
    /// render their children with this node's path prepended to each
    /// child's own path, joined by `" and "` for `And`/`Or` and `", "`
    /// for `Multiple`.
    ///
    /// Note that `Or` joins with the word `"and"` as well. This mirrors
    /// the behavior of the system this crate replaces and is kept for
    /// report compatibility; see the crate docs.
    pub fn render(&self) -> String {
        match &self.kind {
            ErrorKind::Basic => {
                if self.path.is_root() {
                    format!("data {}", self.message)
                } else {
                    format!("'{}' {}", self.path, self.message)
                }
            }
            ErrorKind::And { left, right } => match (left, right) {
                (Some(left), Some(right)) => format!(
                    "{} and {}",
                    left.with_path_prefix(&self.path).render(),
                    right.with_path_prefix(&self.path).render()
                ),
                (Some(left), None) => left.with_path_prefix(&self.path).render(),
                (None, Some(right)) => right.with_path_prefix(&self.path).render(),
                (None, None) => String::new(),
            },
            ErrorKind::Or { left, right } => format!(
                "{} and {}",
                left.with_path_prefix(&self.path).render(),
                right.with_path_prefix(&self.path).render()
            ),
            ErrorKind::Multiple(errors) => errors
                .iter()
                .map(|error| error.with_path_prefix(&self.path).render())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

impl Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl std::error::Error for ErrorTree {}

// ErrorTree is Send + Sync since all fields are owned types
// (FieldPath with Vec<String>, String, boxed children). This is
// automatically derived, but we add these assertions to ensure it
// remains true if the types change.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ErrorTree>();
    assert_sync::<ErrorTree>();
};
