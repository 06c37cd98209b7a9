//! Container configuration.

use strum::{Display, EnumString};

/// When edits trigger validation.
///
/// Blur and submit have fixed behavior on top of this mode: submitting always
/// validates every field, and a field already carrying errors re-validates on
/// every change and blur so corrections clear their message immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum ValidateOn {
    /// Validate on every change, blur, and submit.
    #[default]
    Change,
    /// Validate on blur and submit.
    Blur,
    /// Validate on submit only.
    Submit,
}

/// Options applied to a form at build time.
#[derive(Debug, Clone, Default)]
pub struct FormOptions {
    pub validate_on: ValidateOn,
}

impl FormOptions {
    pub fn validate_on(mut self, mode: ValidateOn) -> Self {
        self.validate_on = mode;
        self
    }
}
