//! Rendering: accessible markup for the form shell and field rows.
//!
//! Binding logic lives in `form.rs` / `item.rs`; this module holds the
//! renderers. Every method is a synchronous pure function of the current
//! container snapshots, with no caching and no retained state. Each rendered
//! element carries a `data-slot` attribute naming its role, for styling
//! hooks and test automation.

use strum::Display;

use crate::form::FormScope;
use crate::item::FormItem;
use crate::markup::{Element, Node};

/// Component roles, serialized into `data-slot` attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Slot {
    Form,
    FormItem,
    FormLabel,
    FormControl,
    FormDescription,
    FormMessage,
}

impl FormScope {
    /// The `<form>` shell element.
    pub fn render(&self, children: Vec<Node>) -> Element {
        Element::new("form")
            .attr("data-slot", Slot::Form)
            .children(children)
    }
}

impl FormItem {
    /// The row container: `<div data-slot="form-item">`.
    pub fn render(&self, children: Vec<Node>) -> Element {
        Element::new("div")
            .attr("data-slot", Slot::FormItem)
            .children(children)
    }

    /// The row label, associated with the control via `for`.
    pub fn label(&self, text: impl Into<String>) -> Element {
        let projection = self.projection();
        Element::new("label")
            .attr("data-slot", Slot::FormLabel)
            .attr("data-error", projection.invalid)
            .attr("for", self.ids().control())
            .child(text.into())
    }

    /// Decorate a control element with the row's accessibility attributes.
    ///
    /// The control receives the row's control id, `aria-invalid`, and an
    /// `aria-describedby` that always references the description and
    /// additionally the message only while an error is displayed.
    pub fn control(&self, control: Element) -> Element {
        let projection = self.projection();
        let ids = self.ids();
        let describedby = if projection.invalid {
            format!("{} {}", ids.description(), ids.message())
        } else {
            ids.description()
        };
        control
            .attr("data-slot", Slot::FormControl)
            .attr("id", ids.control())
            .attr("aria-describedby", describedby)
            .attr("aria-invalid", projection.invalid)
    }

    /// Static auxiliary text: `<p data-slot="form-description">`.
    pub fn description(&self, text: impl Into<String>) -> Element {
        Element::new("p")
            .attr("data-slot", Slot::FormDescription)
            .attr("id", self.ids().description())
            .child(text.into())
    }

    /// The row's message: the projected error when one is displayed,
    /// otherwise nothing at all (no node is produced).
    pub fn message(&self) -> Option<Element> {
        self.message_body(None)
    }

    /// Like [`message`](Self::message), but with fallback content rendered
    /// when no error is displayed.
    pub fn message_or(&self, fallback: impl Into<Node>) -> Option<Element> {
        self.message_body(Some(fallback.into()))
    }

    fn message_body(&self, fallback: Option<Node>) -> Option<Element> {
        let body = match self.projection().message {
            Some(message) => Some(Node::Text(message)),
            None => fallback,
        };
        body.map(|body| {
            Element::new("p")
                .attr("data-slot", Slot::FormMessage)
                .attr("id", self.ids().message())
                .child(body)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use form_state::{rules, FieldSpec, FormHandle};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn scope() -> FormScope {
        let form = FormHandle::builder()
            .field(
                FieldSpec::new("username")
                    .initial(json!(""))
                    .rule(rules::string().min_len(3, "Too short")),
            )
            .build();
        FormScope::new(&form)
    }

    #[test]
    fn slot_names_serialize_kebab_case() {
        assert_eq!(Slot::Form.to_string(), "form");
        assert_eq!(Slot::FormItem.to_string(), "form-item");
        assert_eq!(Slot::FormMessage.to_string(), "form-message");
    }

    #[test]
    fn label_targets_the_control_id() {
        let scope = scope();
        let item = scope.item("username");
        let label = item.label("Username");
        let control = item.control(Element::new("input"));
        assert_eq!(
            label.attr_value("for"),
            control.attr_value("id"),
            "label must reference the control"
        );
    }

    #[test]
    fn pristine_row_renders_clean_attributes() {
        let scope = scope();
        let item = scope.item("username");

        let label = item.label("Username");
        assert_eq!(label.attr_value("data-error"), Some("false"));

        let control = item.control(Element::new("input"));
        assert_eq!(control.attr_value("aria-invalid"), Some("false"));
        assert_eq!(
            control.attr_value("aria-describedby"),
            Some(item.ids().description().as_str())
        );

        assert!(item.message().is_none());
    }

    #[test]
    fn erroring_row_flips_aria_attributes() {
        let scope = scope();
        let item = scope.item("username");
        item.field().handle_change(json!("ab"));
        item.field().handle_blur();

        let control = item.control(Element::new("input"));
        assert_eq!(control.attr_value("aria-invalid"), Some("true"));
        let describedby = control.attr_value("aria-describedby").unwrap().to_string();
        assert_eq!(
            describedby,
            format!("{} {}", item.ids().description(), item.ids().message())
        );

        let message = item.message().unwrap();
        assert_eq!(message.text_content(), "Too short");
        assert_eq!(
            message.attr_value("id"),
            Some(item.ids().message().as_str())
        );
    }

    #[test]
    fn message_fallback_renders_only_without_error() {
        let scope = scope();
        let item = scope.item("username");

        let fallback = item.message_or("All good").unwrap();
        assert_eq!(fallback.text_content(), "All good");

        item.field().handle_change(json!("x"));
        item.field().handle_blur();
        let message = item.message_or("All good").unwrap();
        assert_eq!(message.text_content(), "Too short");
    }

    #[test]
    fn form_shell_carries_its_slot() {
        let scope = scope();
        let el = scope.render(vec![]);
        assert_eq!(el.tag(), "form");
        assert_eq!(el.attr_value("data-slot"), Some("form"));
    }
}
