//! Derived display state for one field row.
//!
//! Pure functions from container snapshots to what the renderers need: is the
//! row eligible to show its error, is it actually invalid, and which single
//! message (if any) gets displayed. Nothing here holds state; callers
//! recompute on every render pass, driven by container notifications.

use form_state::{ErrorDescriptor, FieldState, FormSnapshot};
use serde_json::Value;

/// Display decisions for one field row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Projection {
    /// Eligibility gate: the field was touched, or a submission was attempted.
    /// Until then validation results stay hidden so pristine forms do not
    /// open covered in red.
    pub show_error: bool,
    /// The row is eligible *and* the field currently holds errors. Drives
    /// `aria-invalid`, `data-error`, and the message-id inclusion in
    /// `aria-describedby`.
    pub invalid: bool,
    /// The message displayed by the message renderer: the normalization of
    /// the first error descriptor, when eligible.
    pub message: Option<String>,
}

/// Extract a displayable message from a raw error descriptor.
///
/// Plain strings and issue objects yield their message. A `null` descriptor
/// yields no message. Anything else is stringified as JSON.
pub fn normalize(descriptor: &ErrorDescriptor) -> Option<String> {
    match descriptor {
        ErrorDescriptor::Text(s) => Some(s.clone()),
        ErrorDescriptor::Object { message } => Some(message.clone()),
        ErrorDescriptor::Other(Value::Null) => None,
        ErrorDescriptor::Other(Value::String(s)) => Some(s.clone()),
        ErrorDescriptor::Other(v) => Some(v.to_string()),
    }
}

/// Compute the display projection for a field from current snapshots.
pub fn project(field: &FieldState, form: &FormSnapshot) -> Projection {
    let show_error = field.meta.is_touched || form.submission_attempts > 0;
    let invalid = show_error && !field.meta.errors.is_empty();
    let message = if show_error {
        field.meta.errors.first().and_then(normalize)
    } else {
        None
    };
    Projection {
        show_error,
        invalid,
        message,
    }
}
