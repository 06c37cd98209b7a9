//! Error descriptors and container errors.
//!
//! Two unrelated kinds of "error" meet here and must not be confused:
//! - `ErrorDescriptor` is ordinary data: the value a validator produces for a
//!   field that failed a check. It flows through field metadata and is
//!   eventually displayed (or not) by a UI layer.
//! - `FormError` is a recoverable API error returned by fallible accessors
//!   (`try_field` and friends). The infallible twins panic instead.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// The raw validation-failure value attached to a field.
///
/// Validators in the wild produce two shapes: a bare message string, or an
/// issue object carrying a `message` key (plus whatever else). Anything that
/// fits neither lands in `Other` untouched; display layers decide how to
/// stringify it.
///
/// Serde uses the untagged representation, so `"too short"` and
/// `{"message": "too short"}` both round-trip into their respective variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDescriptor {
    /// Issue-object shape: `{ "message": ... }`. Extra keys are ignored.
    Object { message: String },
    /// Plain string message.
    Text(String),
    /// Any other value a validator emitted (numbers, arrays, null, ...).
    Other(Value),
}

impl ErrorDescriptor {
    /// Plain-string descriptor.
    pub fn text(message: impl Into<String>) -> Self {
        Self::Text(message.into())
    }

    /// Issue-object descriptor (`{ message }`).
    pub fn message(message: impl Into<String>) -> Self {
        Self::Object {
            message: message.into(),
        }
    }
}

impl From<&str> for ErrorDescriptor {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ErrorDescriptor {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Recoverable container errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// A field name was looked up that no `FieldSpec` registered.
    #[error("unknown field `{name}` (registered: {registered:?})")]
    UnknownField {
        name: String,
        registered: Vec<String>,
    },
}
