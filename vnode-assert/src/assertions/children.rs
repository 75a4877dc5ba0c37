//! Children assertions (bulk operations)

use tracing::trace;

use super::Inspector;
use crate::criteria::Children;
use crate::error::{AssertionError, Result};
use crate::node::Value;

impl Inspector {
    pub fn has_children(&self, value: &Value, criteria: Children<'_>) -> Result<()> {
        let node = self.is_node(value, None)?;
        let children = node.children.as_slice();
        trace!(node = %node, count = children.len(), ?criteria, "checking children");

        match criteria {
            Children::NonEmpty if children.is_empty() => Err(AssertionError::NoChildren),
            Children::NonEmpty => Ok(()),
            Children::Exactly(expected) if children == expected.as_slice() => Ok(()),
            Children::Exactly(expected) => Err(AssertionError::ChildrenMismatch {
                expected: self.options.render(&Value::List(expected)),
                actual: self.options.render(&Value::List(children.to_vec())),
            }),
            Children::Count(expected) if children.len() == expected => Ok(()),
            Children::Count(expected) => Err(AssertionError::ChildCountMismatch {
                expected,
                actual: children.len(),
            }),
            Children::Validate(validator) => {
                children.iter().try_for_each(|child| validator(child))
            }
            Children::ValidateAll(validator) => validator(children),
            Children::Predicate(predicate) => {
                match children.iter().position(|child| !predicate(child)) {
                    Some(index) => Err(AssertionError::ChildPredicate { index }),
                    None => Ok(()),
                }
            }
        }
    }

    pub fn not_has_children(&self, value: &Value) -> Result<()> {
        let node = self.is_node(value, None)?;
        if !node.children.is_empty() {
            return Err(AssertionError::UnexpectedChildren {
                count: node.children.len(),
            });
        }
        Ok(())
    }

    pub fn all_children_match<F>(&self, value: &Value, predicate: F) -> Result<()>
    where
        F: Fn(&Value) -> bool,
    {
        self.has_children(value, Children::predicate(predicate))
    }
}
