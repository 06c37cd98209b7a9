//! Profile screen: blur-mode validation, message fallback text, and reset.

use anyhow::Result;
use form_state::{rules, FieldSpec, FormHandle, FormOptions, ValidateOn};
use form_ui::{Element, FormScope, SubmitEvent};
use serde_json::json;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let form = FormHandle::builder()
        .field(
            FieldSpec::new("display_name")
                .initial(json!("Ada"))
                .rule(rules::string().max_len(32, "Display name is too long")),
        )
        .field(
            FieldSpec::new("age")
                .initial(json!(36))
                .rule(rules::number().min(13.0, "Must be at least 13").integer("Must be whole")),
        )
        .options(FormOptions::default().validate_on(ValidateOn::Blur))
        .on_submit(|values| println!("saved profile: {}", json!(values)))
        .build();

    let scope = FormScope::new(&form);
    let name = scope.item("display_name");
    let age = scope.item("age");

    let render = |note: &str| {
        let name_row = name.render(vec![
            name.label("Display name").into(),
            name.control(Element::new("input").attr("type", "text")).into(),
            // Fallback text keeps the row height stable while there is no error.
            name.message_or("Shown on your public profile.").unwrap().into(),
        ]);
        let mut age_children = vec![
            age.label("Age").into(),
            age.control(Element::new("input").attr("type", "number")).into(),
        ];
        if let Some(message) = age.message() {
            age_children.push(message.into());
        }
        let age_row = age.render(age_children);
        println!("--- {note} ---\n{}\n", scope.render(vec![name_row.into(), age_row.into()]).to_html());
    };

    render("pristine");

    // Blur mode: typing alone does not validate.
    form.field("age").handle_change(json!(11));
    render("typed an invalid age, not yet blurred");

    form.field("age").handle_blur();
    render("blurred: the message appears");

    form.field("age").handle_change(json!(14));
    render("corrected: an erroring field revalidates on change");

    let mut event = SubmitEvent::new();
    scope.on_submit(&mut event);

    form.reset();
    render("after reset");
    Ok(())
}
