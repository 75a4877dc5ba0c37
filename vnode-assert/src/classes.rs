//! Class attribute parsing

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{AssertionError, Result};
use crate::node::Value;
use crate::options::Options;

static CLASS_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("class separator regex is valid"));

/// Split a `class` attribute value into class names.
///
/// Always returns a list, even when empty: an absent or falsy value, or one made only of
/// whitespace, has no class names. Anything other than text is rejected.
pub fn class_names(value: Option<&Value>) -> Result<Vec<&str>> {
    class_names_with(value, &Options::default())
}

pub(crate) fn class_names_with<'v>(
    value: Option<&'v Value>,
    options: &Options,
) -> Result<Vec<&'v str>> {
    let value = match value {
        Some(value) if value.is_truthy() => value,
        _ => return Ok(Vec::new()),
    };
    let text = value.as_text().ok_or_else(|| AssertionError::ClassNotString {
        found: options.render(value),
    })?;
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }
    Ok(CLASS_SEPARATOR.split(text).collect())
}
