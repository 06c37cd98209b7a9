//! Field rows: per-row identity and the field binding.
//!
//! A `FormItem` is the accessibility-scoping unit for one field: it owns the
//! row's identity token (minted once at bind time, stable until the item is
//! dropped) and the live handle to the bound field. The rendering methods
//! live in `render.rs`; this module is binding and identity only.

use form_state::{FieldHandle, FormError, FormHandle};
use uuid::Uuid;

use crate::projector::{project, Projection};

/// The identity of one field row and its derived companion ids.
///
/// The base token is unique among concurrently live rows; the companions are
/// composed from it so a row's label, control, description, and message
/// always reference each other consistently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIds {
    base: String,
}

impl FieldIds {
    pub(crate) fn mint() -> Self {
        Self {
            base: Uuid::new_v4().to_string(),
        }
    }

    /// Id carried by the control element and targeted by the label's `for`.
    pub fn control(&self) -> String {
        format!("{}-form-item", self.base)
    }

    /// Id of the description element.
    pub fn description(&self) -> String {
        format!("{}-form-item-description", self.base)
    }

    /// Id of the message element.
    pub fn message(&self) -> String {
        format!("{}-form-item-message", self.base)
    }
}

/// One field row: bound field handle plus row identity.
///
/// Bind items once per mounted row and keep them across render passes; the
/// identity is minted at bind time, so re-binding mints fresh ids.
pub struct FormItem {
    field: FieldHandle,
    form: FormHandle,
    ids: FieldIds,
}

impl FormItem {
    pub(crate) fn bind(form: &FormHandle, name: &str) -> Result<Self, FormError> {
        let field = form.try_field(name)?;
        Ok(Self {
            field,
            form: form.clone(),
            ids: FieldIds::mint(),
        })
    }

    /// The bound field's live handle.
    pub fn field(&self) -> &FieldHandle {
        &self.field
    }

    /// This row's identity.
    pub fn ids(&self) -> &FieldIds {
        &self.ids
    }

    /// Current display projection, recomputed from live snapshots.
    pub fn projection(&self) -> Projection {
        project(&self.field.state(), &self.form.snapshot())
    }
}
