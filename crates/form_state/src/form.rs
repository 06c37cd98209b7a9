//! Form handles: runtime state, mutation entry points, submission lifecycle.
//!
//! `FormHandle` is a cheap-to-clone handle onto shared single-threaded state
//! (`Rc<RefCell<_>>`; the container targets a cooperative UI event loop and
//! promises no `Send`/`Sync`). All mutation goes through the handler methods
//! here; readers take value snapshots and never observe intermediate state.
//!
//! Notification discipline: every mutating operation applies its changes,
//! releases the internal borrow, and only then invokes observers. Observers
//! can therefore re-enter the form freely.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::config::{FormOptions, ValidateOn};
use crate::error::{ErrorDescriptor, FormError};
use crate::field::FieldSpec;
use crate::observer::{FormEvent, ObserverRegistry, SubscriptionId};

/// Per-field metadata, read-only to consumers.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FieldMeta {
    pub errors: Vec<ErrorDescriptor>,
    pub is_touched: bool,
    pub is_dirty: bool,
    pub is_validating: bool,
}

/// Snapshot of one field: current value plus metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldState {
    pub value: Value,
    pub meta: FieldMeta,
}

/// Snapshot of the form-level store surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormSnapshot {
    pub values: Map<String, Value>,
    pub errors: std::collections::BTreeMap<String, Vec<ErrorDescriptor>>,
    pub can_submit: bool,
    pub is_submitting: bool,
    pub submission_attempts: u32,
}

/// Runtime state of a single field.
struct FieldRuntime {
    spec: FieldSpec,
    value: Value,
    errors: Vec<ErrorDescriptor>,
    is_touched: bool,
    is_dirty: bool,
    is_validating: bool,
}

impl FieldRuntime {
    fn new(spec: FieldSpec) -> Self {
        let value = spec.initial.clone();
        Self {
            spec,
            value,
            errors: Vec::new(),
            is_touched: false,
            is_dirty: false,
            is_validating: false,
        }
    }

    /// Re-run this field's validators. Returns true when the error list
    /// changed.
    fn revalidate(&mut self) -> bool {
        self.is_validating = true;
        let fresh = self.spec.run_validators(&self.value);
        self.is_validating = false;
        if fresh != self.errors {
            debug!(field = %self.spec.key, errors = fresh.len(), "validation result changed");
            self.errors = fresh;
            true
        } else {
            false
        }
    }

    fn reset(&mut self) {
        self.value = self.spec.initial.clone();
        self.errors.clear();
        self.is_touched = false;
        self.is_dirty = false;
        self.is_validating = false;
    }
}

type SubmitHandler = Rc<dyn Fn(&Map<String, Value>)>;

struct FormInner {
    fields: Vec<FieldRuntime>,
    options: FormOptions,
    on_submit: Option<SubmitHandler>,
    is_submitting: bool,
    submission_attempts: u32,
    observers: ObserverRegistry,
}

impl FormInner {
    fn runtime(&self, key: &str) -> Option<&FieldRuntime> {
        self.fields.iter().find(|rt| rt.spec.key == key)
    }

    fn runtime_mut(&mut self, key: &str) -> &mut FieldRuntime {
        // FieldHandles only exist for registered keys and fields are never
        // removed, so the lookup cannot miss.
        self.fields
            .iter_mut()
            .find(|rt| rt.spec.key == key)
            .expect("field runtime for a handed-out FieldHandle")
    }

    fn can_submit(&self) -> bool {
        !self.is_submitting && self.fields.iter().all(|rt| rt.errors.is_empty())
    }

    fn keys(&self) -> Vec<String> {
        self.fields.iter().map(|rt| rt.spec.key.clone()).collect()
    }
}

/// Builder for a [`FormHandle`].
pub struct FormBuilder {
    fields: Vec<FieldSpec>,
    options: FormOptions,
    on_submit: Option<SubmitHandler>,
}

impl FormBuilder {
    /// Register a field.
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    /// Apply container options.
    pub fn options(mut self, options: FormOptions) -> Self {
        self.options = options;
        self
    }

    /// Install the submit handler. Invoked with the current values exactly
    /// once per successful submission attempt.
    pub fn on_submit(mut self, f: impl Fn(&Map<String, Value>) + 'static) -> Self {
        self.on_submit = Some(Rc::new(f));
        self
    }

    /// Build the form.
    ///
    /// # Panics
    ///
    /// Panics when two fields share a key; that is a programming error in the
    /// form definition, not a runtime condition.
    pub fn build(self) -> FormHandle {
        for (i, spec) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|other| other.key == spec.key) {
                panic!("duplicate field key `{}` in form definition", spec.key);
            }
        }
        let fields = self.fields.into_iter().map(FieldRuntime::new).collect();
        FormHandle {
            inner: Rc::new(RefCell::new(FormInner {
                fields,
                options: self.options,
                on_submit: self.on_submit,
                is_submitting: false,
                submission_attempts: 0,
                observers: ObserverRegistry::default(),
            })),
        }
    }
}

/// Handle onto a form's shared state.
#[derive(Clone)]
pub struct FormHandle {
    inner: Rc<RefCell<FormInner>>,
}

impl FormHandle {
    pub fn builder() -> FormBuilder {
        FormBuilder {
            fields: Vec::new(),
            options: FormOptions::default(),
            on_submit: None,
        }
    }

    /// Obtain a live handle to a registered field.
    ///
    /// # Panics
    ///
    /// Panics when `name` was never registered. Binding an unknown field is a
    /// programming error; use [`try_field`](Self::try_field) where the name is
    /// not statically known.
    pub fn field(&self, name: &str) -> FieldHandle {
        match self.try_field(name) {
            Ok(handle) => handle,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible twin of [`field`](Self::field).
    pub fn try_field(&self, name: &str) -> Result<FieldHandle, FormError> {
        let inner = self.inner.borrow();
        if inner.runtime(name).is_some() {
            Ok(FieldHandle {
                form: self.clone(),
                key: name.to_string(),
            })
        } else {
            Err(FormError::UnknownField {
                name: name.to_string(),
                registered: inner.keys(),
            })
        }
    }

    /// Keys of all registered fields, in registration order.
    pub fn field_names(&self) -> Vec<String> {
        self.inner.borrow().keys()
    }

    /// Snapshot of the form-level store surface.
    pub fn snapshot(&self) -> FormSnapshot {
        let inner = self.inner.borrow();
        FormSnapshot {
            values: inner
                .fields
                .iter()
                .map(|rt| (rt.spec.key.clone(), rt.value.clone()))
                .collect(),
            errors: inner
                .fields
                .iter()
                .map(|rt| (rt.spec.key.clone(), rt.errors.clone()))
                .collect(),
            can_submit: inner.can_submit(),
            is_submitting: inner.is_submitting,
            submission_attempts: inner.submission_attempts,
        }
    }

    /// Register an observer; it is invoked synchronously, in subscription
    /// order, by every mutating operation from now on.
    pub fn subscribe(&self, f: impl Fn(&FormEvent) + 'static) -> SubscriptionId {
        self.inner.borrow_mut().observers.subscribe(f)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.borrow_mut().observers.unsubscribe(id);
    }

    /// Attempt to submit the form.
    ///
    /// The attempt counter increments unconditionally. Every field is
    /// re-validated; only when all error lists come back empty is the submit
    /// handler invoked, exactly once, with the current values. The in-flight
    /// flag is set for the duration of the handler.
    pub fn handle_submit(&self) {
        let (all_valid, values, handler, events) = {
            let mut inner = self.inner.borrow_mut();
            inner.submission_attempts += 1;
            let mut events = Vec::new();
            for i in 0..inner.fields.len() {
                if inner.fields[i].revalidate() {
                    events.push(FormEvent::ErrorsChanged {
                        field: inner.fields[i].spec.key.clone(),
                    });
                }
            }
            let all_valid = inner.fields.iter().all(|rt| rt.errors.is_empty());
            let values: Map<String, Value> = inner
                .fields
                .iter()
                .map(|rt| (rt.spec.key.clone(), rt.value.clone()))
                .collect();
            if all_valid {
                inner.is_submitting = true;
            }
            events.push(FormEvent::SubmissionChanged);
            (all_valid, values, inner.on_submit.clone(), events)
        };
        debug!(
            attempts = self.inner.borrow().submission_attempts,
            all_valid, "submit attempt"
        );
        self.notify(&events);

        if all_valid {
            if let Some(handler) = handler {
                handler(&values);
            }
            self.inner.borrow_mut().is_submitting = false;
            self.notify(&[FormEvent::SubmissionChanged]);
        }
    }

    /// Restore every field to its initial value, clear all metadata, and zero
    /// the attempt counter.
    pub fn reset(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            for rt in &mut inner.fields {
                rt.reset();
            }
            inner.is_submitting = false;
            inner.submission_attempts = 0;
        }
        debug!("form reset");
        self.notify(&[FormEvent::Reset]);
    }

    // --- Field mutation entry points (called through FieldHandle) ----------

    fn change(&self, key: &str, value: Value) {
        let events = {
            let mut inner = self.inner.borrow_mut();
            let could_submit = inner.can_submit();
            let mode = inner.options.validate_on;
            let rt = inner.runtime_mut(key);
            trace!(field = %key, "handle_change");
            rt.value = value;
            rt.is_dirty = true;
            let mut events = vec![FormEvent::ValueChanged {
                field: key.to_string(),
            }];
            // A field already showing errors re-validates eagerly in every
            // mode so corrections take effect without waiting for blur.
            let validate = mode == ValidateOn::Change || !rt.errors.is_empty();
            if validate && rt.revalidate() {
                events.push(FormEvent::ErrorsChanged {
                    field: key.to_string(),
                });
            }
            if inner.can_submit() != could_submit {
                events.push(FormEvent::SubmissionChanged);
            }
            events
        };
        self.notify(&events);
    }

    fn blur(&self, key: &str) {
        let events = {
            let mut inner = self.inner.borrow_mut();
            let could_submit = inner.can_submit();
            let mode = inner.options.validate_on;
            let rt = inner.runtime_mut(key);
            trace!(field = %key, "handle_blur");
            rt.is_touched = true;
            let mut events = vec![FormEvent::FieldBlurred {
                field: key.to_string(),
            }];
            let validate = mode != ValidateOn::Submit || !rt.errors.is_empty();
            if validate && rt.revalidate() {
                events.push(FormEvent::ErrorsChanged {
                    field: key.to_string(),
                });
            }
            if inner.can_submit() != could_submit {
                events.push(FormEvent::SubmissionChanged);
            }
            events
        };
        self.notify(&events);
    }

    fn field_state(&self, key: &str) -> FieldState {
        let inner = self.inner.borrow();
        let rt = inner
            .runtime(key)
            .expect("field runtime for a handed-out FieldHandle");
        FieldState {
            value: rt.value.clone(),
            meta: FieldMeta {
                errors: rt.errors.clone(),
                is_touched: rt.is_touched,
                is_dirty: rt.is_dirty,
                is_validating: rt.is_validating,
            },
        }
    }

    /// Invoke observers with the internal borrow released.
    fn notify(&self, events: &[FormEvent]) {
        if events.is_empty() {
            return;
        }
        let observers = self.inner.borrow().observers.observers();
        for event in events {
            trace!(?event, "notify");
            for observer in &observers {
                observer(event);
            }
        }
    }
}

/// Live handle to one field of a form.
#[derive(Clone)]
pub struct FieldHandle {
    form: FormHandle,
    key: String,
}

impl FieldHandle {
    pub fn name(&self) -> &str {
        &self.key
    }

    /// Snapshot of the field's current value and metadata.
    pub fn state(&self) -> FieldState {
        self.form.field_state(&self.key)
    }

    /// Store a new value. Marks the field dirty; validates per the form's
    /// [`ValidateOn`] mode.
    pub fn handle_change(&self, value: impl Into<Value>) {
        self.form.change(&self.key, value.into());
    }

    /// Mark the field touched and re-validate it (except in submit-only mode
    /// while the field has no errors).
    pub fn handle_blur(&self) {
        self.form.blur(&self.key);
    }
}
