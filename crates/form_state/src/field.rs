//! Declarative field specification.
//!
//! A `FieldSpec` describes one named, independently validated field: its key,
//! its initial value, and the ordered validators that run against it. The
//! mutable runtime state (current value, errors, touched/dirty flags) lives in
//! `form.rs`; this module is purely data-centric.

use serde_json::Value;

use crate::error::ErrorDescriptor;

/// A synchronous validation function.
///
/// Returns the list of descriptors for every violated check; the empty vector
/// means the value passed. Validators must be pure with respect to the form:
/// they receive the candidate value and must not re-enter the container.
pub type Validator = Box<dyn Fn(&Value) -> Vec<ErrorDescriptor>>;

/// Anything that can be turned into a [`Validator`].
///
/// Implemented by the rule builders in [`crate::rules`]; attach these via
/// [`FieldSpec::rule`]. Free-form closures go through
/// [`FieldSpec::validator`] instead.
pub trait IntoValidator {
    fn into_validator(self) -> Validator;
}

/// Declarative description of a form field.
pub struct FieldSpec {
    pub key: String,
    pub initial: Value,
    pub(crate) validators: Vec<Validator>,
}

impl FieldSpec {
    /// Create a new field definition. The initial value defaults to `null`.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            initial: Value::Null,
            validators: Vec::new(),
        }
    }

    /// Set the initial (and post-reset) value.
    pub fn initial(mut self, value: impl Into<Value>) -> Self {
        self.initial = value.into();
        self
    }

    /// Attach a validator closure. Validators run in attachment order and
    /// their descriptor lists are concatenated.
    pub fn validator(mut self, f: impl Fn(&Value) -> Vec<ErrorDescriptor> + 'static) -> Self {
        self.validators.push(Box::new(f));
        self
    }

    /// Attach a composed rule set (see [`crate::rules`]).
    pub fn rule(mut self, r: impl IntoValidator) -> Self {
        self.validators.push(r.into_validator());
        self
    }

    /// Run every validator against `value`, concatenating the results.
    pub(crate) fn run_validators(&self, value: &Value) -> Vec<ErrorDescriptor> {
        self.validators
            .iter()
            .flat_map(|v| v(value))
            .collect()
    }
}
