//! Signup screen: three validated fields, driven programmatically.
//!
//! Run with `cargo run --example signup` (set `RUST_LOG=trace` to watch the
//! container notify the live region).

use anyhow::Result;
use form_state::{rules, FieldSpec, FormHandle};
use form_ui::{Element, FormItem, FormScope, LiveRegion, Node, SubmitEvent};
use serde_json::json;

fn text_input(name: &str, kind: &str, value: &str) -> Element {
    Element::new("input")
        .attr("name", name)
        .attr("type", kind)
        .attr("value", value)
}

/// One accessible row: label, control, optional description, message.
fn row(item: &FormItem, label: &str, control: Element, description: Option<&str>) -> Element {
    let mut children: Vec<Node> = vec![item.label(label).into(), item.control(control).into()];
    if let Some(text) = description {
        children.push(item.description(text).into());
    }
    if let Some(message) = item.message() {
        children.push(message.into());
    }
    item.render(children)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let form = FormHandle::builder()
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
        .field(
            FieldSpec::new("password")
                .initial(json!(""))
                .rule(rules::string().min_len(8, "Password must be at least 8 characters")),
        )
        .on_submit(|values| println!("\n=== submitted: {} ===\n", json!(values)))
        .build();

    let scope = FormScope::new(&form);
    let username = scope.item("username");
    let email = scope.item("email");
    let password = scope.item("password");

    let region = LiveRegion::mount(&form, {
        let form = form.clone();
        let scope = scope.clone();
        move |_| {
            let values = form.snapshot().values;
            let value = |key: &str| values[key].as_str().unwrap_or("").to_string();
            scope.render(vec![
                row(
                    &username,
                    "Username",
                    text_input("username", "text", &value("username")),
                    Some("Public display name."),
                )
                .into(),
                row(
                    &email,
                    "Email",
                    text_input("email", "email", &value("email")),
                    Some("Never shared."),
                )
                .into(),
                row(
                    &password,
                    "Password",
                    text_input("password", "password", ""),
                    None,
                )
                .into(),
            ])
        }
    });

    println!("--- pristine ---\n{}\n", region.html());

    // The user types a too-short username and tabs away.
    form.field("username").handle_change(json!("ab"));
    form.field("username").handle_blur();
    println!("--- after short username + blur ---\n{}\n", region.html());

    // Submit with invalid fields: the handler must not run.
    let mut event = SubmitEvent::new();
    scope.on_submit(&mut event);
    println!(
        "--- after invalid submit (attempts={}) ---\n{}\n",
        form.snapshot().submission_attempts,
        region.html()
    );

    // Fix everything and submit for real.
    form.field("username").handle_change(json!("ada"));
    form.field("email").handle_change(json!("ada@example.com"));
    form.field("password").handle_change(json!("correct horse"));
    let mut event = SubmitEvent::new();
    scope.on_submit(&mut event);

    println!("--- final ---\n{}", region.html());
    Ok(())
}
