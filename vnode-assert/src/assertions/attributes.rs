//! Attribute assertions

use tracing::trace;

use super::Inspector;
use crate::criteria::Criteria;
use crate::error::{AssertionError, Result};
use crate::node::Value;

impl Inspector {
    pub fn has_attribute(&self, value: &Value, name: &str, expected: Criteria<'_>) -> Result<()> {
        let node = self.is_node(value, None)?;
        if name.is_empty() {
            return Err(AssertionError::MissingArgument("an attribute name"));
        }
        let actual = node
            .attribute(name)
            .ok_or_else(|| AssertionError::MissingAttribute {
                name: name.to_string(),
            })?;

        match expected {
            Criteria::Any => Ok(()),
            Criteria::Equals(expected) if !self.checks(expected.is_truthy()) => {
                trace!(attribute = name, %expected, "ignoring falsy expected value");
                Ok(())
            }
            Criteria::Equals(expected) if *actual == expected => Ok(()),
            Criteria::Equals(expected) => Err(AssertionError::AttributeMismatch {
                name: name.to_string(),
                expected: self.options.render(&expected),
                actual: self.options.render(actual),
            }),
            Criteria::Validate(validator) => validator(actual),
        }
    }

    pub fn not_has_attribute(&self, value: &Value, name: &str) -> Result<()> {
        let node = self.is_node(value, None)?;
        if name.is_empty() {
            return Err(AssertionError::MissingArgument("an attribute name"));
        }
        if node.attributes.contains_key(name) {
            return Err(AssertionError::UnexpectedAttribute {
                name: name.to_string(),
            });
        }
        Ok(())
    }
}
