//! Error types for node assertions

/// Result type for node assertions
pub type Result<T, E = AssertionError> = std::result::Result<T, E>;

/// A failed assertion.
///
/// Every variant carries the names and rendered values needed to say which expectation
/// failed. The message is meant to be shown verbatim by the test framework.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssertionError {
    /// The value does not have the virtual node shape
    #[error("expected a virtual node, found {found}")]
    Shape { found: String },

    /// The node type is not the expected one
    #[error("expected a node of type {expected}, found {actual}")]
    NodeTypeMismatch { expected: String, actual: String },

    /// The node is a component with the expected name but not the expected component
    #[error("expected component {name}, found a different component named {name}")]
    ComponentMismatch { name: String },

    /// The `class` attribute holds something other than text
    #[error("expected a string for the class name, found {found}")]
    ClassNotString { found: String },

    /// A required argument was empty
    #[error("expected {0}")]
    MissingArgument(&'static str),

    /// An index or a path segment is not a non-negative integer
    #[error("expected a non-negative integer index at path segment {segment}, found {found}")]
    InvalidIndex { segment: usize, found: String },

    #[error("expected to find the attribute {name} in the given node")]
    MissingAttribute { name: String },

    #[error("expected the attribute {name} to equal {expected}, found {actual}")]
    AttributeMismatch {
        name: String,
        expected: String,
        actual: String,
    },

    #[error("expected to not find the attribute {name} in the given node")]
    UnexpectedAttribute { name: String },

    #[error("expected to find class name {name}")]
    MissingClass { name: String },

    #[error("expected to not find class name {name}")]
    UnexpectedClass { name: String },

    #[error("expected to find child nodes")]
    NoChildren,

    #[error("expected to not find any child nodes, found {count}")]
    UnexpectedChildren { count: usize },

    #[error("expected the child nodes to equal {expected}, found {actual}")]
    ChildrenMismatch { expected: String, actual: String },

    #[error("expected {expected} child nodes, found {actual}")]
    ChildCountMismatch { expected: usize, actual: usize },

    #[error("expected the child nodes to pass the function test, child {index} did not")]
    ChildPredicate { index: usize },

    #[error("expected to find a child at {path}, nothing at index {index} ({count} children)")]
    ChildNotFound {
        path: String,
        index: usize,
        count: usize,
    },

    #[error("expected the child at {path} to equal {expected}, found {actual}")]
    ChildMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    /// Failure reported by a caller-supplied validator
    #[error("{0}")]
    Custom(String),
}

/// Machine-readable tag for an [`AssertionError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Shape,
    TypeMismatch,
    MissingArgument,
    InvalidIndex,
    MissingAttribute,
    AttributeMismatch,
    UnexpectedAttribute,
    MissingClass,
    UnexpectedClass,
    NoChildren,
    UnexpectedChildren,
    ChildrenMismatch,
    ChildCountMismatch,
    ChildPredicate,
    ChildNotFound,
    ChildMismatch,
    Custom,
}

impl ErrorKind {
    /// Misuse of the API, as opposed to an assertion that did not hold
    pub fn is_usage(self) -> bool {
        matches!(self, ErrorKind::MissingArgument | ErrorKind::InvalidIndex)
    }
}

impl AssertionError {
    /// Create a failure for a caller-supplied validator
    pub fn custom<S: Into<String>>(msg: S) -> Self {
        AssertionError::Custom(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AssertionError::Shape { .. } => ErrorKind::Shape,
            AssertionError::NodeTypeMismatch { .. }
            | AssertionError::ComponentMismatch { .. }
            | AssertionError::ClassNotString { .. } => ErrorKind::TypeMismatch,
            AssertionError::MissingArgument(_) => ErrorKind::MissingArgument,
            AssertionError::InvalidIndex { .. } => ErrorKind::InvalidIndex,
            AssertionError::MissingAttribute { .. } => ErrorKind::MissingAttribute,
            AssertionError::AttributeMismatch { .. } => ErrorKind::AttributeMismatch,
            AssertionError::UnexpectedAttribute { .. } => ErrorKind::UnexpectedAttribute,
            AssertionError::MissingClass { .. } => ErrorKind::MissingClass,
            AssertionError::UnexpectedClass { .. } => ErrorKind::UnexpectedClass,
            AssertionError::NoChildren => ErrorKind::NoChildren,
            AssertionError::UnexpectedChildren { .. } => ErrorKind::UnexpectedChildren,
            AssertionError::ChildrenMismatch { .. } => ErrorKind::ChildrenMismatch,
            AssertionError::ChildCountMismatch { .. } => ErrorKind::ChildCountMismatch,
            AssertionError::ChildPredicate { .. } => ErrorKind::ChildPredicate,
            AssertionError::ChildNotFound { .. } => ErrorKind::ChildNotFound,
            AssertionError::ChildMismatch { .. } => ErrorKind::ChildMismatch,
            AssertionError::Custom(_) => ErrorKind::Custom,
        }
    }

    pub fn is_usage(&self) -> bool {
        self.kind().is_usage()
    }
}
