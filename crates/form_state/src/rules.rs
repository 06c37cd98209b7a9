//! Composable validation rule sets.
//!
//! The builders here cover the common cases a schema library would: presence,
//! length bounds, numeric ranges. Each finished set converts into a single
//! [`Validator`] producing one issue-object descriptor per violated rule, in
//! declaration order. For anything beyond these, attach a closure validator
//! directly on the [`FieldSpec`](crate::FieldSpec).
//!
//! ```
//! use form_state::{rules, FieldSpec};
//! use serde_json::json;
//!
//! let spec = FieldSpec::new("username")
//!     .initial(json!(""))
//!     .rule(rules::string().min_len(3, "Username must be at least 3 characters"));
//! ```

use serde_json::Value;

use crate::error::ErrorDescriptor;
use crate::field::{IntoValidator, Validator};

/// Start a rule set for string-valued fields.
pub fn string() -> StringRules {
    StringRules { checks: Vec::new() }
}

/// Start a rule set for number-valued fields.
pub fn number() -> NumberRules {
    NumberRules { checks: Vec::new() }
}

type StringCheck = Box<dyn Fn(&str) -> Option<String>>;
type NumberCheck = Box<dyn Fn(f64) -> Option<String>>;

/// Rule set over string values. Non-string input yields a single
/// type-mismatch descriptor instead of running any checks.
pub struct StringRules {
    checks: Vec<StringCheck>,
}

impl StringRules {
    /// Reject values that are empty after trimming.
    pub fn required(self, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        self.check(move |s| s.trim().is_empty().then(|| msg.clone()))
    }

    /// Reject values shorter than `n` characters.
    pub fn min_len(self, n: usize, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        self.check(move |s| (s.chars().count() < n).then(|| msg.clone()))
    }

    /// Reject values longer than `n` characters.
    pub fn max_len(self, n: usize, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        self.check(move |s| (s.chars().count() > n).then(|| msg.clone()))
    }

    /// Reject values failing an arbitrary predicate.
    pub fn matches(self, pred: impl Fn(&str) -> bool + 'static, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        self.check(move |s| (!pred(s)).then(|| msg.clone()))
    }

    fn check(mut self, f: impl Fn(&str) -> Option<String> + 'static) -> Self {
        self.checks.push(Box::new(f));
        self
    }
}

impl IntoValidator for StringRules {
    fn into_validator(self) -> Validator {
        Box::new(move |value: &Value| match value.as_str() {
            Some(s) => self
                .checks
                .iter()
                .filter_map(|c| c(s))
                .map(ErrorDescriptor::message)
                .collect(),
            None => vec![ErrorDescriptor::message("Expected a string value")],
        })
    }
}

/// Rule set over numeric values. Non-number input yields a single
/// type-mismatch descriptor.
pub struct NumberRules {
    checks: Vec<NumberCheck>,
}

impl NumberRules {
    /// Reject values below `min`.
    pub fn min(self, min: f64, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        self.check(move |n| (n < min).then(|| msg.clone()))
    }

    /// Reject values above `max`.
    pub fn max(self, max: f64, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        self.check(move |n| (n > max).then(|| msg.clone()))
    }

    /// Reject values with a fractional part.
    pub fn integer(self, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        self.check(move |n| (n.fract() != 0.0).then(|| msg.clone()))
    }

    fn check(mut self, f: impl Fn(f64) -> Option<String> + 'static) -> Self {
        self.checks.push(Box::new(f));
        self
    }
}

impl IntoValidator for NumberRules {
    fn into_validator(self) -> Validator {
        Box::new(move |value: &Value| match value.as_f64() {
            Some(n) => self
                .checks
                .iter()
                .filter_map(|c| c(n))
                .map(ErrorDescriptor::message)
                .collect(),
            None => vec![ErrorDescriptor::message("Expected a number value")],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn string_rules_report_in_declaration_order() {
        let v = string()
            .required("Required")
            .min_len(3, "Too short")
            .into_validator();

        assert_eq!(
            v(&json!("")),
            vec![
                ErrorDescriptor::message("Required"),
                ErrorDescriptor::message("Too short"),
            ]
        );
        assert_eq!(v(&json!("ab")), vec![ErrorDescriptor::message("Too short")]);
        assert!(v(&json!("abc")).is_empty());
    }

    #[test]
    fn string_rules_reject_non_strings() {
        let v = string().required("Required").into_validator();
        assert_eq!(
            v(&json!(42)),
            vec![ErrorDescriptor::message("Expected a string value")]
        );
    }

    #[test]
    fn min_len_counts_characters_not_bytes() {
        let v = string().min_len(3, "Too short").into_validator();
        assert!(v(&json!("äöü")).is_empty());
    }

    #[test]
    fn number_rules_bound_and_integer() {
        let v = number()
            .min(13.0, "Must be at least 13")
            .integer("Must be whole")
            .into_validator();

        assert_eq!(
            v(&json!(12.5)),
            vec![
                ErrorDescriptor::message("Must be at least 13"),
                ErrorDescriptor::message("Must be whole"),
            ]
        );
        assert!(v(&json!(21)).is_empty());
        assert_eq!(
            v(&json!("21")),
            vec![ErrorDescriptor::message("Expected a number value")]
        );
    }
}
