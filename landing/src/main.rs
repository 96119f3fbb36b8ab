// Lintrag landing page - browser build (Leptos 0.8, trunk)

use leptos::prelude::*;
use lintrag_page::SubmitHandler;
use lintrag_page::components::LintragHome;
use lintrag_page::styles::PAGE_CSS;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    // No booking backend yet: note the request without echoing what was typed.
    let on_submit = SubmitHandler::new(|_form| {
        web_sys::console::log_1(&"demo request dispatched (no booking backend configured)".into());
    });

    view! {
        <style>{PAGE_CSS}</style>
        <LintragHome on_submit=on_submit />
    }
}
