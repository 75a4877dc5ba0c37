//! Node assertions
//!
//!     Every assertion validates its subject as a virtual node first, then checks one thing
//!     about it. Assertions return `Ok(())` when the expectation holds and an
//!     [`AssertionError`](crate::AssertionError) describing the failed expectation otherwise.
//!
//!     The free functions use the default [`Options`]. Use an [`Inspector`] to assert with
//!     other options, for instance the ones loaded by `vnode-config`.
//!
//!     Validators supplied by the caller are run as-is: an `Err` they return is the error the
//!     assertion returns, and a panic inside them unwinds through the assertion untouched.

mod attributes;
mod child;
mod children;
mod classes;
mod node;

use crate::criteria::{ChildPath, Children, Criteria};
use crate::error::Result;
use crate::node::{NodeType, VNode, Value};
use crate::options::Options;

/// Runs assertions with a given set of [`Options`]
#[derive(Debug, Clone, Default)]
pub struct Inspector {
    options: Options,
}

impl Inspector {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
}

/// Check that `value` is a virtual node, of `expected_type` when one is given.
///
/// Component types match by identity, tag names by equality.
pub fn assert_is_node<'v>(value: &'v Value, expected_type: Option<&NodeType>) -> Result<&'v VNode> {
    Inspector::default().is_node(value, expected_type)
}

/// Check that the node has the attribute `name`, and that its value satisfies `expected`.
///
/// Presence is about the key only: an attribute set to `false` is present.
pub fn assert_has_attribute(value: &Value, name: &str, expected: Criteria<'_>) -> Result<()> {
    Inspector::default().has_attribute(value, name, expected)
}

/// Check that the node does not have the attribute `name`, whatever its value would be.
pub fn assert_not_has_attribute(value: &Value, name: &str) -> Result<()> {
    Inspector::default().not_has_attribute(value, name)
}

/// Check that the node's `class` attribute lists `name`.
pub fn assert_has_class(value: &Value, name: &str) -> Result<()> {
    Inspector::default().has_class(value, name)
}

/// Check that the node's `class` attribute does not list `name`.
pub fn assert_not_has_class(value: &Value, name: &str) -> Result<()> {
    Inspector::default().not_has_class(value, name)
}

/// Check the node's children against `criteria`.
pub fn assert_has_children(value: &Value, criteria: Children<'_>) -> Result<()> {
    Inspector::default().has_children(value, criteria)
}

/// Check that the node has no children.
pub fn assert_not_has_children(value: &Value) -> Result<()> {
    Inspector::default().not_has_children(value)
}

/// Check that every child of the node satisfies `predicate`.
pub fn assert_all_children_match<F>(value: &Value, predicate: F) -> Result<()>
where
    F: Fn(&Value) -> bool,
{
    Inspector::default().all_children_match(value, predicate)
}

/// Check that the node has a descendant at `path`, and that it satisfies `criteria`.
pub fn assert_has_child(
    value: &Value,
    path: impl Into<ChildPath>,
    criteria: Criteria<'_>,
) -> Result<()> {
    Inspector::default().has_child(value, path, criteria)
}
