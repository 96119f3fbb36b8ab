//! "Book a Demo" form.
//!
//! Every control is controlled: its displayed value comes from the
//! owning `DemoForm` signal and every input event is written back through
//! [`apply_edit`]. Server-rendered markup carries the current values too
//! (`value` attribute for inputs, body text for the textarea).

use leptos::prelude::*;

use crate::form::{SubmitHandler, apply_edit, submit_demo_request};
use crate::types::{DemoForm, FormField};

/// Demo-booking form bound to the root's form signal.
#[component]
pub fn DemoBookingSection(
    /// Current form record
    form: ReadSignal<DemoForm>,
    /// Setter for the form record
    set_form: WriteSignal<DemoForm>,
    /// Action run on submit; inert unless provided
    #[prop(optional)]
    on_submit: SubmitHandler,
) -> impl IntoView {
    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_demo_request(form, &on_submit);
    };

    view! {
        <section id="book-demo" class="demo-booking">
            <h2 class="section-title centered">"Book a Demo"</h2>
            <form class="demo-form" on:submit=handle_submit>
                {FormField::ALL
                    .into_iter()
                    .map(|field| view! { <FormControl field=field form=form set_form=set_form /> })
                    .collect_view()}
                <button type="submit" class="btn btn-primary">"Schedule My Demo"</button>
            </form>
        </section>
    }
}

/// One input (or the message textarea) tied to a single field.
#[component]
fn FormControl(
    field: FormField,
    form: ReadSignal<DemoForm>,
    set_form: WriteSignal<DemoForm>,
) -> impl IntoView {
    let current = move || form.with(|f| f.get(field).to_string());

    if field.is_multiline() {
        // The HTML parser drops one newline right after `<textarea>`.
        let initial = form.with_untracked(|f| {
            let value = f.get(field);
            if value.starts_with('\n') {
                format!("\n{value}")
            } else {
                value.to_string()
            }
        });
        view! {
            <textarea
                class="form-textarea"
                name=field.name()
                placeholder=field.placeholder()
                prop:value=current
                on:input=move |ev| apply_edit(form, set_form, field, event_target_value(&ev))
            >
                {initial}
            </textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                class="form-input"
                type="text"
                name=field.name()
                placeholder=field.placeholder()
                value=current
                prop:value=current
                on:input=move |ev| apply_edit(form, set_form, field, event_target_value(&ev))
            />
        }
        .into_any()
    }
}
