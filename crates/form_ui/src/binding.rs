//! Live binding between a form container and a rendered element tree.
//!
//! `LiveRegion` keeps a rendered tree synchronized with its container: the
//! render closure runs once at mount and again, synchronously, inside every
//! container notification. By the time any mutating call
//! (`handle_change`, `handle_blur`, `handle_submit`, `reset`) returns, the
//! region already reflects the new state: there is no window in which a
//! reader can observe stale attributes.
//!
//! Bind `FormItem`s once, outside the closure, and move them in; row
//! identity is minted at bind time and must stay stable across render
//! passes.

use std::cell::RefCell;
use std::rc::Rc;

use form_state::{FormHandle, SubscriptionId};
use tracing::trace;

use crate::markup::Element;

/// A rendered region re-rendered on every container notification.
pub struct LiveRegion {
    form: FormHandle,
    subscription: SubscriptionId,
    latest: Rc<RefCell<Element>>,
}

impl LiveRegion {
    /// Render once and subscribe for synchronous re-renders.
    pub fn mount(form: &FormHandle, render: impl Fn(&FormHandle) -> Element + 'static) -> Self {
        let latest = Rc::new(RefCell::new(render(form)));
        let subscription = form.subscribe({
            let latest = Rc::clone(&latest);
            let form = form.clone();
            move |event| {
                trace!(?event, "re-rendering live region");
                let next = render(&form);
                *latest.borrow_mut() = next;
            }
        });
        Self {
            form: form.clone(),
            subscription,
            latest,
        }
    }

    /// The most recently rendered tree.
    pub fn element(&self) -> Element {
        self.latest.borrow().clone()
    }

    /// The most recently rendered tree, serialized.
    pub fn html(&self) -> String {
        self.latest.borrow().to_html()
    }
}

impl Drop for LiveRegion {
    fn drop(&mut self) {
        self.form.unsubscribe(self.subscription);
    }
}
