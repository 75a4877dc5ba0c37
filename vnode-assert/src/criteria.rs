//! Criteria accepted by the attribute and children assertions
//!
//!     Rather than guessing what a criteria argument means from its runtime shape, callers
//!     pick the variant: compare against a value, run a validator, count, and so on. The
//!     assertions dispatch on it with a single match.

use std::fmt;

use crate::error::{AssertionError, Result};
use crate::node::Value;

/// Validator over a single value. An `Err` it returns is handed back to the caller unchanged.
pub type Validator<'f> = Box<dyn Fn(&Value) -> Result<()> + 'f>;

/// Validator over a node's whole child list
pub type ListValidator<'f> = Box<dyn Fn(&[Value]) -> Result<()> + 'f>;

/// Predicate over a single child
pub type Predicate<'f> = Box<dyn Fn(&Value) -> bool + 'f>;

/// What a resolved attribute value or child must satisfy
#[derive(Default)]
pub enum Criteria<'f> {
    /// Presence is enough
    #[default]
    Any,
    /// Must equal this value
    Equals(Value),
    /// Must pass this validator
    Validate(Validator<'f>),
}

impl<'f> Criteria<'f> {
    pub fn equals(value: impl Into<Value>) -> Self {
        Criteria::Equals(value.into())
    }

    pub fn validate<F>(validator: F) -> Self
    where
        F: Fn(&Value) -> Result<()> + 'f,
    {
        Criteria::Validate(Box::new(validator))
    }
}

impl fmt::Debug for Criteria<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criteria::Any => write!(f, "Any"),
            Criteria::Equals(value) => f.debug_tuple("Equals").field(value).finish(),
            Criteria::Validate(_) => write!(f, "Validate(..)"),
        }
    }
}

/// What the child list of a node must satisfy
#[derive(Default)]
pub enum Children<'f> {
    /// At least one child
    #[default]
    NonEmpty,
    /// Element-wise equal to these values, in order
    Exactly(Vec<Value>),
    /// Exactly this many children
    Count(usize),
    /// Every child passes the validator, which is run on each child in order
    Validate(Validator<'f>),
    /// The child list as a whole passes the validator
    ValidateAll(ListValidator<'f>),
    /// Every child satisfies the predicate
    Predicate(Predicate<'f>),
}

impl<'f> Children<'f> {
    pub fn exactly<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Children::Exactly(values.into_iter().map(Into::into).collect())
    }

    /// A node with exactly one child equal to `value`. Same as `Children::exactly([value])`.
    pub fn single(value: impl Into<Value>) -> Self {
        Children::Exactly(vec![value.into()])
    }

    pub fn count(count: usize) -> Self {
        Children::Count(count)
    }

    pub fn validate<F>(validator: F) -> Self
    where
        F: Fn(&Value) -> Result<()> + 'f,
    {
        Children::Validate(Box::new(validator))
    }

    pub fn validate_all<F>(validator: F) -> Self
    where
        F: Fn(&[Value]) -> Result<()> + 'f,
    {
        Children::ValidateAll(Box::new(validator))
    }

    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + 'f,
    {
        Children::Predicate(Box::new(predicate))
    }
}

impl fmt::Debug for Children<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Children::NonEmpty => write!(f, "NonEmpty"),
            Children::Exactly(values) => f.debug_tuple("Exactly").field(values).finish(),
            Children::Count(count) => f.debug_tuple("Count").field(count).finish(),
            Children::Validate(_) => write!(f, "Validate(..)"),
            Children::ValidateAll(_) => write!(f, "ValidateAll(..)"),
            Children::Predicate(_) => write!(f, "Predicate(..)"),
        }
    }
}

/// Index path from a node down to one of its descendants.
///
/// `[1, 0]` is the first child of the node's second child. A single index is a path of
/// length one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildPath(Vec<usize>);

impl ChildPath {
    pub fn segments(&self) -> &[usize] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Build a path from signed indices, rejecting negative segments.
    pub fn from_signed(indices: &[i64]) -> Result<Self> {
        if indices.is_empty() {
            return Err(AssertionError::MissingArgument("a child index"));
        }
        indices
            .iter()
            .enumerate()
            .map(|(segment, &index)| {
                usize::try_from(index).map_err(|_| AssertionError::InvalidIndex {
                    segment,
                    found: index.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(ChildPath)
    }
}

impl fmt::Display for ChildPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", index)?;
        }
        write!(f, "]")
    }
}

impl From<usize> for ChildPath {
    fn from(index: usize) -> Self {
        ChildPath(vec![index])
    }
}

impl From<Vec<usize>> for ChildPath {
    fn from(path: Vec<usize>) -> Self {
        ChildPath(path)
    }
}

impl From<&[usize]> for ChildPath {
    fn from(path: &[usize]) -> Self {
        ChildPath(path.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for ChildPath {
    fn from(path: [usize; N]) -> Self {
        ChildPath(path.to_vec())
    }
}

/// Paths read from dynamic data: a number, or a list of numbers.
impl TryFrom<&Value> for ChildPath {
    type Error = AssertionError;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Err(AssertionError::MissingArgument("a child index")),
            Value::List(items) if items.is_empty() => {
                Err(AssertionError::MissingArgument("a child index"))
            }
            Value::List(items) => items
                .iter()
                .enumerate()
                .map(|(segment, item)| index_at(segment, item))
                .collect::<Result<Vec<_>>>()
                .map(ChildPath),
            other => index_at(0, other).map(ChildPath::from),
        }
    }
}

fn index_at(segment: usize, value: &Value) -> Result<usize> {
    match value {
        Value::Number(n) if n.is_finite() && *n >= 0.0 && n.fract() == 0.0 => Ok(*n as usize),
        other => Err(AssertionError::InvalidIndex {
            segment,
            found: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_path_from_indices() {
        assert_eq!(ChildPath::from(2).segments(), &[2]);
        assert_eq!(ChildPath::from([1, 0]).segments(), &[1, 0]);
        assert_eq!(ChildPath::from(vec![0, 0, 0]).to_string(), "[0, 0, 0]");
    }

    #[test]
    fn test_signed_path_rejects_negative_segments() {
        let err = ChildPath::from_signed(&[0, -1]).unwrap_err();
        assert_eq!(
            err,
            AssertionError::InvalidIndex {
                segment: 1,
                found: "-1".to_string()
            }
        );
        assert_eq!(
            ChildPath::from_signed(&[]).unwrap_err().kind(),
            ErrorKind::MissingArgument
        );
        assert_eq!(ChildPath::from_signed(&[3, 1]).unwrap().segments(), &[3, 1]);
    }

    #[test]
    fn test_path_from_dynamic_values() {
        let path = ChildPath::try_from(&Value::List(vec![1.into(), 0.into()])).unwrap();
        assert_eq!(path.segments(), &[1, 0]);
        assert_eq!(ChildPath::try_from(&Value::from(0)).unwrap().segments(), &[0]);

        let missing = ChildPath::try_from(&Value::Null).unwrap_err();
        assert_eq!(missing.kind(), ErrorKind::MissingArgument);

        let negative = ChildPath::try_from(&Value::from(-1)).unwrap_err();
        assert_eq!(negative.kind(), ErrorKind::InvalidIndex);

        let fractional = ChildPath::try_from(&Value::List(vec![0.into(), 1.5.into()])).unwrap_err();
        assert_eq!(
            fractional,
            AssertionError::InvalidIndex {
                segment: 1,
                found: "1.5".to_string()
            }
        );

        let text = ChildPath::try_from(&Value::from("0")).unwrap_err();
        assert_eq!(text.kind(), ErrorKind::InvalidIndex);
    }

    #[test]
    fn test_children_single_is_a_one_item_list() {
        match Children::single("a") {
            Children::Exactly(values) => assert_eq!(values, vec![Value::from("a")]),
            other => panic!("Expected Exactly, found {:?}", other),
        }
    }
}
