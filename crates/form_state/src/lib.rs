//! Observable form-state container.
//!
//! Owns everything a form UI observes but must not own itself: field values,
//! validation scheduling, touched/dirty metadata, and the submission
//! lifecycle. UI layers bind field handles, mutate exclusively through the
//! `handle_*` entry points, and subscribe for synchronous change
//! notifications.
//!
//! # Core types
//!
//! - **FieldSpec**: declarative field definition (key, initial value,
//!   validators)
//! - **FormHandle / FieldHandle**: cheap-to-clone handles onto shared state
//! - **ErrorDescriptor**: tagged validation-failure value (string, issue
//!   object, or anything else a validator emitted)
//! - **FormEvent**: synchronous state-change notification
//!
//! # Example
//!
//! ```
//! use form_state::{rules, FieldSpec, FormHandle};
//! use serde_json::json;
//!
//! let form = FormHandle::builder()
//!     .field(
//!         FieldSpec::new("username")
//!             .initial(json!(""))
//!             .rule(rules::string().min_len(3, "Must be at least 3 characters")),
//!     )
//!     .on_submit(|values| println!("submitted: {values:?}"))
//!     .build();
//!
//! let username = form.field("username");
//! username.handle_change(json!("ada"));
//! username.handle_blur();
//! form.handle_submit(); // all valid -> handler runs exactly once
//! ```

mod config;
mod error;
mod field;
mod form;
mod observer;
pub mod rules;

pub use config::{FormOptions, ValidateOn};
pub use error::{ErrorDescriptor, FormError};
pub use field::{FieldSpec, IntoValidator, Validator};
pub use form::{FieldHandle, FieldMeta, FieldState, FormBuilder, FormHandle, FormSnapshot};
pub use observer::{FormEvent, SubscriptionId};
