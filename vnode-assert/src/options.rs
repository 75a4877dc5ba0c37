//! Knobs that change how assertions behave and how failures are reported

use serde::Deserialize;

/// Options shared by every assertion made through an [`Inspector`](crate::Inspector).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Options {
    pub falsy_expectations: FalsyExpectations,
    /// Rendered values longer than this are cut short in failure messages
    pub max_value_width: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            falsy_expectations: FalsyExpectations::Check,
            max_value_width: 80,
        }
    }
}

/// What to do with an expected attribute value that is falsy (`false`, `0`, `""`, `null`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FalsyExpectations {
    /// Compare it like any other expected value
    #[default]
    Check,
    /// Treat it as if no expected value had been given
    Ignore,
}

impl Options {
    /// Render a value for a failure message, honoring `max_value_width`
    pub fn render(&self, value: &impl std::fmt::Display) -> String {
        let rendered = value.to_string();
        if rendered.chars().count() <= self.max_value_width {
            return rendered;
        }
        let mut cut: String = rendered.chars().take(self.max_value_width).collect();
        cut.push_str("...");
        cut
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_truncates_long_values() {
        let options = Options {
            max_value_width: 4,
            ..Options::default()
        };

        assert_eq!(options.render(&"abcd"), "abcd");
        assert_eq!(options.render(&"abcdef"), "abcd...");
    }

    #[test]
    fn test_defaults_check_falsy_expectations() {
        assert_eq!(Options::default().falsy_expectations, FalsyExpectations::Check);
        assert_eq!(Options::default().max_value_width, 80);
    }
}
