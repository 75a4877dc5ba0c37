//! End-to-end scenarios over small trees, through both the result and the fluent APIs

mod common;

use common::{el, element, letter_list, text_el};
use vnode_assert::{
    assert_has_attribute, assert_has_child, assert_has_children, assert_has_class,
    assert_node, assert_not_has_attribute, assert_not_has_children, AssertionError, Children,
    Criteria, ErrorKind, Result, Value,
};

#[test]
fn test_empty_div() {
    let node = el("div", vec![]);

    assert!(assert_not_has_children(&node).is_ok());
    assert!(assert_has_children(&node, Children::NonEmpty).is_err());

    assert_node(&node).node_type("div").no_children();
}

#[test]
fn test_disabled_input() {
    let node = element("input", &[("disabled", false.into())], vec![]);

    assert!(assert_has_attribute(&node, "disabled", Criteria::Any).is_ok());
    assert!(assert_not_has_attribute(&node, "disabled").is_err());

    assert_node(&node)
        .has_attribute("disabled")
        .attribute("disabled", false);
}

#[test]
fn test_classed_div() {
    let node = element("div", &[("class", "a b".into())], vec!["x".into()]);

    assert!(assert_has_class(&node, "a").is_ok());
    assert!(assert_has_class(&node, "c").is_err());

    assert_node(&node).has_class("a").not_has_class("c").children(["x"]);
}

#[test]
fn test_letter_list() {
    let root = letter_list();

    assert!(assert_has_child(&root, [1, 0], Criteria::equals("B")).is_ok());
    assert_eq!(
        assert_has_child(&root, [2, 0], Criteria::equals("B"))
            .unwrap_err()
            .kind(),
        ErrorKind::ChildNotFound
    );

    assert_node(&root).child_count(2).child([1, 0], |letter| {
        letter.is_text("B");
    });
}

fn exactly_two(children: &[Value]) -> Result<()> {
    if children.len() != 2 {
        return Err(AssertionError::custom("bad"));
    }
    Ok(())
}

#[test]
fn test_child_list_validator() {
    let one = text_el("p", &["a"]);
    let two = text_el("p", &["a", "b"]);

    assert!(assert_has_children(&one, Children::validate_all(exactly_two)).is_err());
    assert!(assert_has_children(&two, Children::validate_all(exactly_two)).is_ok());
}

#[test]
#[should_panic(expected = "root: expected to not find the attribute disabled in the given node")]
fn test_fluent_failure_reports_the_message() {
    let node = element("input", &[("disabled", false.into())], vec![]);
    assert_node(&node).not_has_attribute("disabled");
}
