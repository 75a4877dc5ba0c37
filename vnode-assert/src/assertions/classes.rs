//! Class name assertions

use super::Inspector;
use crate::classes::class_names_with;
use crate::error::{AssertionError, Result};
use crate::node::Value;

impl Inspector {
    pub fn has_class(&self, value: &Value, name: &str) -> Result<()> {
        if self.lists_class(value, name)? {
            Ok(())
        } else {
            Err(AssertionError::MissingClass {
                name: name.to_string(),
            })
        }
    }

    pub fn not_has_class(&self, value: &Value, name: &str) -> Result<()> {
        if self.lists_class(value, name)? {
            Err(AssertionError::UnexpectedClass {
                name: name.to_string(),
            })
        } else {
            Ok(())
        }
    }

    fn lists_class(&self, value: &Value, name: &str) -> Result<bool> {
        let node = self.is_node(value, None)?;
        if name.is_empty() {
            return Err(AssertionError::MissingArgument("a class name"));
        }
        let classes = class_names_with(node.attribute("class"), &self.options)?;
        Ok(classes.contains(&name))
    }
}
