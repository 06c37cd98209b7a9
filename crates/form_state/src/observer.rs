//! Observer registration for form state changes.
//!
//! Mutating operations on a form notify every registered observer before they
//! return, synchronously and in subscription order. Observers therefore never
//! see stale state: by the time a callback runs, the mutation that caused it
//! is fully applied, and a snapshot taken inside the callback reflects it.
//!
//! Observers may call back into the form (take snapshots, read field state);
//! no internal borrow is held across the callbacks.

use std::rc::Rc;

/// A state-change notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A field's value changed via `handle_change`.
    ValueChanged { field: String },
    /// A field was blurred via `handle_blur`.
    FieldBlurred { field: String },
    /// A field's error list changed (validation ran with a different result).
    ErrorsChanged { field: String },
    /// Submission metadata changed (attempt count, in-flight flag, or the
    /// derived can-submit flag).
    SubmissionChanged,
    /// The form was reset to its initial values.
    Reset,
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

pub(crate) type Observer = Rc<dyn Fn(&FormEvent)>;

/// Registry of observers. Lives inside the form's shared state.
#[derive(Default)]
pub(crate) struct ObserverRegistry {
    next_id: u64,
    entries: Vec<(SubscriptionId, Observer)>,
}

impl ObserverRegistry {
    pub(crate) fn subscribe(&mut self, f: impl Fn(&FormEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Rc::new(f)));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) {
        self.entries.retain(|(sid, _)| *sid != id);
    }

    /// Clone the current observer list so callers can invoke callbacks after
    /// releasing the form borrow.
    pub(crate) fn observers(&self) -> Vec<Observer> {
        self.entries.iter().map(|(_, o)| Rc::clone(o)).collect()
    }
}
