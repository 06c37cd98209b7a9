//! Accessible form components over an observable form-state container.
//!
//! A thin, fully synchronous layer that adapts [`form_state`]'s field and
//! submission snapshots into accessible markup: label/control association,
//! `aria-invalid`, `aria-describedby` composition, and conditional error
//! messages. Data flows one direction, container state through the
//! projector into rendered attributes, and every mutation is delegated back
//! to the container's handlers.
//!
//! # Pieces
//!
//! - **FormScope**: wraps a container handle; renders the `<form>` shell and
//!   intercepts submit events
//! - **FormItem**: one field row; owns the row identity (unique id plus
//!   derived companion ids) and the bound field handle
//! - **projector**: pure derived display state (`show_error`, `invalid`,
//!   the single displayed message)
//! - **markup**: the `Element`/`Node` tree the renderers produce
//! - **LiveRegion**: subscription-driven synchronous re-rendering
//!
//! # Example
//!
//! ```
//! use form_state::{rules, FieldSpec, FormHandle};
//! use form_ui::{Element, FormScope, SubmitEvent};
//! use serde_json::json;
//!
//! let form = FormHandle::builder()
//!     .field(
//!         FieldSpec::new("email")
//!             .initial(json!(""))
//!             .rule(rules::string().matches(|s| s.contains('@'), "Invalid email")),
//!     )
//!     .on_submit(|values| println!("submitted {values:?}"))
//!     .build();
//!
//! let scope = FormScope::new(&form);
//! let item = scope.item("email");
//! let row = item.render(vec![
//!     item.label("Email").into(),
//!     item.control(Element::new("input").attr("type", "email")).into(),
//!     item.description("Where we can reach you.").into(),
//! ]);
//! let shell = scope.render(vec![row.into()]);
//! assert!(shell.to_html().starts_with("<form"));
//! ```

mod binding;
mod form;
mod item;
mod markup;
mod projector;
mod render;

pub use binding::LiveRegion;
pub use form::{FormScope, SubmitEvent};
pub use item::{FieldIds, FormItem};
pub use markup::{Element, Node};
pub use projector::{normalize, project, Projection};
pub use render::Slot;
