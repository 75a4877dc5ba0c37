//! Fluent assertion API for virtual nodes
//!
//!     The functions in [`assertions`](crate::assertions) return errors, which suits helpers
//!     and validators. Test bodies usually want to fail on the spot and to check several
//!     things about a tree in one go; this module wraps the same assertions in chainable
//!     builders that panic with the failure message, prefixed by where in the tree the
//!     failure happened.
//!
//!     ```rust,ignore
//!     assert_node(&root)
//!         .node_type("ul")
//!         .child_count(2)
//!         .child([1, 0], |item| {
//!             item.is_text("B");
//!         });
//!     ```

use crate::assertions::Inspector;
use crate::criteria::{ChildPath, Children, Criteria};
use crate::error::Result;
use crate::node::{NodeType, VNode, Value};
use crate::options::Options;

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a node, panicking if `value` is not one.
pub fn assert_node(value: &Value) -> NodeAssertion<'_> {
    NodeAssertion::new(value, Inspector::default(), "root".to_string())
}

// ============================================================================
// Node Assertions
// ============================================================================

pub struct NodeAssertion<'a> {
    value: &'a Value,
    node: &'a VNode,
    inspector: Inspector,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    fn new(value: &'a Value, inspector: Inspector, context: String) -> Self {
        let node = match inspector.is_node(value, None) {
            Ok(node) => node,
            Err(err) => panic!("{}: {}", context, err),
        };
        Self {
            value,
            node,
            inspector,
            context,
        }
    }

    /// Run the following assertions with `options`
    pub fn with_options(mut self, options: Options) -> Self {
        self.inspector = Inspector::new(options);
        self
    }

    pub fn node(&self) -> &'a VNode {
        self.node
    }

    pub fn node_type(self, expected: impl Into<NodeType>) -> Self {
        let expected = expected.into();
        let result = self.inspector.is_node(self.value, Some(&expected)).map(|_| ());
        self.check(result)
    }

    pub fn has_attribute(self, name: &str) -> Self {
        let result = self.inspector.has_attribute(self.value, name, Criteria::Any);
        self.check(result)
    }

    pub fn attribute(self, name: &str, expected: impl Into<Value>) -> Self {
        let result = self
            .inspector
            .has_attribute(self.value, name, Criteria::equals(expected));
        self.check(result)
    }

    pub fn not_has_attribute(self, name: &str) -> Self {
        let result = self.inspector.not_has_attribute(self.value, name);
        self.check(result)
    }

    pub fn has_class(self, name: &str) -> Self {
        let result = self.inspector.has_class(self.value, name);
        self.check(result)
    }

    pub fn not_has_class(self, name: &str) -> Self {
        let result = self.inspector.not_has_class(self.value, name);
        self.check(result)
    }

    pub fn has_children(self) -> Self {
        let result = self.inspector.has_children(self.value, Children::NonEmpty);
        self.check(result)
    }

    pub fn child_count(self, expected: usize) -> Self {
        let result = self.inspector.has_children(self.value, Children::Count(expected));
        self.check(result)
    }

    /// The children must equal `expected`, in order
    pub fn children<I, V>(self, expected: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let result = self
            .inspector
            .has_children(self.value, Children::exactly(expected));
        self.check(result)
    }

    pub fn no_children(self) -> Self {
        let result = self.inspector.not_has_children(self.value);
        self.check(result)
    }

    /// Resolve the descendant at `path` and run `assertion` on it
    pub fn child<F>(self, path: impl Into<ChildPath>, assertion: F) -> Self
    where
        F: FnOnce(ValueAssertion<'a>),
    {
        let path = path.into();
        let child = match self.inspector.child(self.value, &path) {
            Ok(child) => child,
            Err(err) => panic!("{}: {}", self.context, err),
        };
        let context = path
            .segments()
            .iter()
            .fold(self.context.clone(), |context, index| format!("{}[{}]", context, index));
        assertion(ValueAssertion {
            value: child,
            inspector: self.inspector.clone(),
            context,
        });
        self
    }

    fn check(self, result: Result<()>) -> Self {
        if let Err(err) = result {
            panic!("{}: {}", self.context, err);
        }
        self
    }
}

// ============================================================================
// Value Assertions
// ============================================================================

/// Assertions on a resolved child, which may be a node or a leaf
pub struct ValueAssertion<'a> {
    value: &'a Value,
    inspector: Inspector,
    context: String,
}

impl<'a> ValueAssertion<'a> {
    pub fn value(&self) -> &'a Value {
        self.value
    }

    pub fn equals(self, expected: impl Into<Value>) -> Self {
        let expected = expected.into();
        assert!(
            *self.value == expected,
            "{}: Expected {}, found {}",
            self.context,
            self.inspector.options().render(&expected),
            self.inspector.options().render(self.value)
        );
        self
    }

    pub fn is_text(self, expected: &str) -> Self {
        match self.value.as_text() {
            Some(actual) => assert_eq!(
                actual, expected,
                "{}: Expected text to be '{}', but got '{}'",
                self.context, expected, actual
            ),
            None => panic!(
                "{}: Expected text, found {}",
                self.context,
                self.value.kind_name()
            ),
        }
        self
    }

    /// Assert this value is a node and return node assertions for it
    pub fn assert_node(self) -> NodeAssertion<'a> {
        NodeAssertion::new(self.value, self.inspector, self.context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Attributes;

    fn element(tag: &str, attributes: &[(&str, Value)], children: Vec<Value>) -> Value {
        let attributes: Attributes = attributes
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect();
        VNode::new(tag, attributes, children).into()
    }

    fn links() -> Value {
        element(
            "ul",
            &[("class", "links".into())],
            vec![
                element(
                    "li",
                    &[],
                    vec![element("a", &[("href", "http://example.com/".into())], vec![])],
                ),
                element("li", &[], vec!["plain".into()]),
            ],
        )
    }

    #[test]
    fn test_assertions_are_fluent() {
        assert_node(&links())
            .node_type("ul")
            .has_class("links")
            .not_has_class("nav")
            .has_attribute("class")
            .not_has_attribute("id")
            .has_children()
            .child_count(2)
            .child([0, 0], |link| {
                link.assert_node()
                    .node_type("a")
                    .attribute("href", "http://example.com/")
                    .no_children();
            })
            .child([1, 0], |text| {
                text.is_text("plain").equals("plain");
            });
    }

    #[test]
    #[should_panic(expected = "root: expected a virtual node, found \"text\"")]
    fn test_rejects_leaf_values() {
        assert_node(&Value::from("text"));
    }

    #[test]
    #[should_panic(expected = "root: expected 3 child nodes, found 2")]
    fn test_child_count_fails() {
        assert_node(&links()).child_count(3);
    }

    #[test]
    #[should_panic(
        expected = "root: expected to find a child at [2, 0], nothing at index 2 (2 children)"
    )]
    fn test_missing_child_fails() {
        assert_node(&links()).child([2, 0], |_| {});
    }

    #[test]
    #[should_panic(expected = "root[1][0]: Expected text to be 'fancy', but got 'plain'")]
    fn test_nested_context_is_reported() {
        assert_node(&links()).child([1, 0], |text| {
            text.is_text("fancy");
        });
    }

    #[test]
    #[should_panic(expected = "root[0]: expected a node of type span, found li")]
    fn test_nested_node_assertions_keep_context() {
        assert_node(&links()).child(0, |item| {
            item.assert_node().node_type("span");
        });
    }

    #[test]
    fn test_children_in_order() {
        let node = element("p", &[], vec!["a".into(), "b".into()]);
        assert_node(&node).children(["a", "b"]);
    }
}
