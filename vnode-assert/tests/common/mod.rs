//! Test factories for building virtual nodes succinctly
#![allow(dead_code)]

use vnode_assert::{Attributes, NodeType, VNode, Value};

/// Make a node with the given attributes and children
pub fn element(
    node_type: impl Into<NodeType>,
    attributes: &[(&str, Value)],
    children: Vec<Value>,
) -> Value {
    VNode::new(node_type, attrs(attributes), children).into()
}

/// Make a node with no attributes
pub fn el(node_type: impl Into<NodeType>, children: Vec<Value>) -> Value {
    element(node_type, &[], children)
}

/// Make a node with no attributes whose children are all text
pub fn text_el(node_type: impl Into<NodeType>, texts: &[&str]) -> Value {
    el(node_type, texts.iter().map(|&text| Value::from(text)).collect())
}

pub fn attrs(pairs: &[(&str, Value)]) -> Attributes {
    pairs
        .iter()
        .cloned()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

/// `<ul><li>A</li><li>B</li></ul>`
pub fn letter_list() -> Value {
    el("ul", vec![text_el("li", &["A"]), text_el("li", &["B"])])
}

/// `<ul><li><b>Hello</b></li><li><span>World</span></li></ul>`
pub fn greeting_list() -> Value {
    el(
        "ul",
        vec![
            el("li", vec![text_el("b", &["Hello"])]),
            el("li", vec![text_el("span", &["World"])]),
        ],
    )
}
