//! # vnode-assert
//!
//! Assertions for inspecting virtual node trees in test suites.
//!
//! A virtual node is the `{type, attributes, children}` structure produced by virtual-DOM
//! style element builders. This crate does not build, render or diff such trees; it only
//! reads them, and tells a test whether a node has a given type, attribute, CSS class or set
//! of children.
//!
//! Layout
//!
//!     - [node]: the data model being inspected ([Value], [VNode], [NodeType]).
//!     - [assertions]: the assertions themselves, as free functions returning
//!       [`Result`] and as methods on an [Inspector] carrying [Options].
//!     - [criteria]: the explicit criteria types ([Criteria], [Children], [ChildPath]).
//!     - [fluent]: chainable, panicking builders for test bodies ([assert_node]).
//!     - [classes]: `class` attribute parsing.
//!
//! Options can be loaded from TOML files with the `vnode-config` crate.

pub mod assertions;
pub mod classes;
pub mod criteria;
pub mod error;
pub mod fluent;
pub mod node;
pub mod options;

pub use assertions::{
    assert_all_children_match, assert_has_attribute, assert_has_child, assert_has_children,
    assert_has_class, assert_is_node, assert_not_has_attribute, assert_not_has_children,
    assert_not_has_class, Inspector,
};
pub use classes::class_names;
pub use criteria::{ChildPath, Children, Criteria};
pub use error::{AssertionError, ErrorKind, Result};
pub use fluent::{assert_node, NodeAssertion, ValueAssertion};
pub use node::{Attributes, Component, Handler, NodeType, VNode, Value};
pub use options::{FalsyExpectations, Options};
