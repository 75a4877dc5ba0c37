//! Node shape and type assertions

use super::Inspector;
use crate::error::{AssertionError, Result};
use crate::node::{NodeType, VNode, Value};
use crate::options::FalsyExpectations;

impl Inspector {
    /// Validate `value` as a virtual node and return it.
    ///
    /// A node must have a truthy type; attributes and children are always present on a
    /// [`VNode`]. When `expected_type` is given the node type must equal it.
    pub fn is_node<'v>(
        &self,
        value: &'v Value,
        expected_type: Option<&NodeType>,
    ) -> Result<&'v VNode> {
        let node = match value.as_node() {
            Some(node) if node.node_type.is_truthy() => node,
            Some(_) => {
                return Err(AssertionError::Shape {
                    found: "a node without a type".to_string(),
                })
            }
            None => {
                return Err(AssertionError::Shape {
                    found: self.options.render(value),
                })
            }
        };

        let expected = match expected_type {
            Some(expected) if self.checks(expected.is_truthy()) => expected,
            _ => return Ok(node),
        };
        match (&node.node_type, expected) {
            (actual, expected) if actual == expected => Ok(node),
            (NodeType::Component(actual), NodeType::Component(expected))
                if actual.name() == expected.name() =>
            {
                Err(AssertionError::ComponentMismatch {
                    name: self.options.render(&expected.name()),
                })
            }
            (actual, expected) => Err(AssertionError::NodeTypeMismatch {
                expected: self.options.render(expected),
                actual: self.options.render(actual),
            }),
        }
    }

    /// Whether an expected value with the given truthiness should be compared at all
    pub(super) fn checks(&self, truthy: bool) -> bool {
        truthy || self.options.falsy_expectations == FalsyExpectations::Check
    }
}
