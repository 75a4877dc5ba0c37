//! Child lookup by index path
//!
//!     A path is walked one segment at a time from the root's children. Every value the walk
//!     descends through must itself be a node; the value the path ends on can be anything,
//!     a node or a leaf such as text.

use tracing::trace;

use super::Inspector;
use crate::criteria::{ChildPath, Criteria};
use crate::error::{AssertionError, Result};
use crate::node::{VNode, Value};

impl Inspector {
    pub fn has_child(
        &self,
        value: &Value,
        path: impl Into<ChildPath>,
        criteria: Criteria<'_>,
    ) -> Result<()> {
        let path = path.into();
        let child = self.child(value, &path)?;

        match criteria {
            Criteria::Any => Ok(()),
            Criteria::Equals(expected) if *child == expected => Ok(()),
            Criteria::Equals(expected) => Err(AssertionError::ChildMismatch {
                path: path.to_string(),
                expected: self.options.render(&expected),
                actual: self.options.render(child),
            }),
            Criteria::Validate(validator) => validator(child),
        }
    }

    /// Resolve the descendant of `value` at `path`.
    pub fn child<'v>(&self, value: &'v Value, path: &ChildPath) -> Result<&'v Value> {
        let root = self.is_node(value, None)?;
        if root.children.is_empty() {
            return Err(AssertionError::NoChildren);
        }
        let (&first, rest) = path
            .segments()
            .split_first()
            .ok_or(AssertionError::MissingArgument("a child index"))?;

        let mut current = lookup(root, first, path)?;
        for &index in rest {
            let node = self.is_node(current, None)?;
            trace!(%path, node = %node, index, "descending");
            current = lookup(node, index, path)?;
        }
        Ok(current)
    }
}

fn lookup<'v>(node: &'v VNode, index: usize, path: &ChildPath) -> Result<&'v Value> {
    node.children
        .get(index)
        .ok_or_else(|| AssertionError::ChildNotFound {
            path: path.to_string(),
            index,
            count: node.children.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::node::Attributes;

    fn element(tag: &str, children: Vec<Value>) -> Value {
        VNode::new(tag, Attributes::new(), children).into()
    }

    fn list() -> Value {
        element(
            "ul",
            vec![
                element("li", vec!["A".into()]),
                element("li", vec!["B".into()]),
            ],
        )
    }

    #[test]
    fn test_resolves_nested_children() {
        let inspector = Inspector::default();
        let root = list();

        assert_eq!(
            inspector.child(&root, &ChildPath::from([1, 0])),
            Ok(&Value::from("B"))
        );
        assert_eq!(
            inspector.child(&root, &ChildPath::from(0)),
            Ok(&element("li", vec!["A".into()]))
        );
    }

    #[test]
    fn test_out_of_range_segments() {
        let inspector = Inspector::default();
        let root = list();

        let err = inspector.child(&root, &ChildPath::from([2, 0])).unwrap_err();
        assert_eq!(
            err,
            AssertionError::ChildNotFound {
                path: "[2, 0]".to_string(),
                index: 2,
                count: 2,
            }
        );

        let err = inspector.child(&root, &ChildPath::from([0, 1])).unwrap_err();
        assert_eq!(
            err,
            AssertionError::ChildNotFound {
                path: "[0, 1]".to_string(),
                index: 1,
                count: 1,
            }
        );
    }

    #[test]
    fn test_cannot_descend_through_a_leaf() {
        let err = Inspector::default()
            .child(&list(), &ChildPath::from([0, 0, 0]))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape);
    }

    #[test]
    fn test_empty_path_is_a_usage_error() {
        let err = Inspector::default()
            .child(&list(), &ChildPath::from(Vec::<usize>::new()))
            .unwrap_err();
        assert_eq!(err, AssertionError::MissingArgument("a child index"));
    }

    #[test]
    fn test_root_without_children() {
        let err = Inspector::default()
            .child(&element("div", Vec::new()), &ChildPath::from(0))
            .unwrap_err();
        assert_eq!(err, AssertionError::NoChildren);
    }
}
