use leptos::prelude::*;

use crate::content::CONTACT;

/// Footer with the company contact line.
#[component]
pub fn ContactSection() -> impl IntoView {
    let heading = format!("Contact {}", CONTACT.company);
    let line = format!("Email: {} | Phone: {}", CONTACT.email, CONTACT.phone);

    view! {
        <footer class="contact">
            <h2 class="section-title">{heading}</h2>
            <p class="contact-line">{line}</p>
            <div class="contact-copyright">{CONTACT.copyright}</div>
        </footer>
    }
}
