//! Form scope and the submit shell.

use form_state::{FormError, FormHandle};
use tracing::trace;

use crate::item::FormItem;

/// A native submit event, reduced to the two flags the shell controls.
///
/// Hosts construct one per submission gesture and hand it to
/// [`FormScope::on_submit`]; afterwards both flags are set, which a real
/// document host maps to `preventDefault()` / `stopPropagation()`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
    propagation_stopped: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Scope wrapping one form's container handle.
///
/// Rows are bound through [`item`](Self::item); the scope itself renders the
/// `<form>` shell (see `render.rs`) and owns submission plumbing. Cloning a
/// scope clones the handle, not the form.
#[derive(Clone)]
pub struct FormScope {
    form: FormHandle,
}

impl FormScope {
    pub fn new(form: &FormHandle) -> Self {
        Self { form: form.clone() }
    }

    /// The underlying container handle.
    pub fn form(&self) -> &FormHandle {
        &self.form
    }

    /// Bind a field row.
    ///
    /// # Panics
    ///
    /// Panics when `name` was never registered on the form; binding a row
    /// outside an active form scope is a programming error, surfaced loudly
    /// at the call site. Use [`try_item`](Self::try_item) for dynamic names.
    pub fn item(&self, name: &str) -> FormItem {
        match self.try_item(name) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible twin of [`item`](Self::item).
    pub fn try_item(&self, name: &str) -> Result<FormItem, FormError> {
        FormItem::bind(&self.form, name)
    }

    /// The submit shell: suppress the browser's default action and event
    /// propagation, then delegate to the container's submit entry point.
    /// Validation sequencing and outcome handling are the container's
    /// concern; this layer only observes the resulting state.
    pub fn on_submit(&self, event: &mut SubmitEvent) {
        event.prevent_default();
        event.stop_propagation();
        trace!("submit event intercepted, delegating to container");
        self.form.handle_submit();
    }
}
