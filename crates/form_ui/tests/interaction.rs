//! End-to-end interaction flows: typing, blurring, submitting, observing.

use std::cell::RefCell;
use std::rc::Rc;

use form_state::{rules, FieldSpec, FormHandle};
use form_ui::{Element, FormScope, LiveRegion, Node, SubmitEvent};
use pretty_assertions::assert_eq;
use serde_json::{json, Map, Value};

fn signup_form(submitted: Rc<RefCell<Vec<Map<String, Value>>>>) -> FormHandle {
    FormHandle::builder()
        .field(
            FieldSpec::new("username")
                .initial(json!(""))
                .rule(rules::string().min_len(3, "Username must be at least 3 characters")),
        )
        .field(
            FieldSpec::new("email").initial(json!("")).rule(
                rules::string()
                    .required("Email is required")
                    .matches(|s| s.contains('@'), "Email must contain @"),
            ),
        )
        .on_submit(move |values| submitted.borrow_mut().push(values.clone()))
        .build()
}

#[test]
fn short_value_plus_blur_shows_message_and_correction_clears_it() {
    let form = signup_form(Rc::default());
    let scope = FormScope::new(&form);
    let item = scope.item("username");
    let region = LiveRegion::mount(&form, move |_| {
        let mut children: Vec<Node> = vec![
            item.label("Username").into(),
            item.control(Element::new("input")).into(),
        ];
        if let Some(message) = item.message() {
            children.push(message.into());
        }
        item.render(children)
    });

    assert!(!region.html().contains("Username must be at least 3 characters"));

    form.field("username").handle_change(json!("ab"));
    form.field("username").handle_blur();
    assert!(region.html().contains("Username must be at least 3 characters"));

    form.field("username").handle_change(json!("abc"));
    form.field("username").handle_blur();
    assert!(!region.html().contains("Username must be at least 3 characters"));
}

#[test]
fn rendered_attributes_are_current_before_the_mutating_call_returns() {
    let form = signup_form(Rc::default());
    let scope = FormScope::new(&form);
    let item = scope.item("username");
    let region = Rc::new(LiveRegion::mount(&form, move |_| {
        item.render(vec![item.control(Element::new("input")).into()])
    }));

    // An observer registered after the region sees the region's output for
    // the same notification; the region must already be up to date.
    let observed: Rc<RefCell<Vec<String>>> = Rc::default();
    form.subscribe({
        let observed = Rc::clone(&observed);
        let region = Rc::clone(&region);
        move |_| observed.borrow_mut().push(region.html())
    });

    form.field("username").handle_change(json!("ab"));
    form.field("username").handle_blur();

    let observed = observed.borrow();
    let last = observed.last().expect("observer ran");
    assert!(last.contains(r#"aria-invalid="true""#));
}

#[test]
fn valid_submission_invokes_handler_exactly_once_with_current_values() {
    let submitted = Rc::new(RefCell::new(Vec::new()));
    let form = signup_form(Rc::clone(&submitted));
    let scope = FormScope::new(&form);

    form.field("username").handle_change(json!("ada"));
    form.field("email").handle_change(json!("ada@example.com"));

    let mut event = SubmitEvent::new();
    scope.on_submit(&mut event);

    assert!(event.default_prevented());
    assert!(event.propagation_stopped());

    let submitted = submitted.borrow();
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].get("username"), Some(&json!("ada")));
    assert_eq!(submitted[0].get("email"), Some(&json!("ada@example.com")));
}

#[test]
fn invalid_submission_never_reaches_the_handler() {
    let submitted = Rc::new(RefCell::new(Vec::new()));
    let form = signup_form(Rc::clone(&submitted));
    let scope = FormScope::new(&form);

    form.field("username").handle_change(json!("ada"));
    // email stays empty -> invalid

    let mut event = SubmitEvent::new();
    scope.on_submit(&mut event);
    scope.on_submit(&mut SubmitEvent::new());

    assert!(submitted.borrow().is_empty());
    assert_eq!(form.snapshot().submission_attempts, 2);
}

#[test]
#[should_panic(expected = "unknown field")]
fn binding_outside_the_registered_fields_fails_loudly() {
    let form = signup_form(Rc::default());
    let scope = FormScope::new(&form);
    let _ = scope.item("nickname");
}
