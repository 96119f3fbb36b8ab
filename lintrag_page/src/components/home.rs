use leptos::prelude::*;

use super::{
    AboutSection, ContactSection, DemoBookingSection, FeaturesSection, HeroSection,
    SegmentsSection,
};
use crate::form::SubmitHandler;
use crate::types::DemoForm;

/// The page root.
///
/// Owns the only mutable state on the page (the demo form record) for as
/// long as it is mounted, and hands it to [`DemoBookingSection`] alone.
#[component]
pub fn LintragHome(
    /// Starting form values; empty by default
    #[prop(optional)]
    initial: DemoForm,
    /// Action run when the demo form is submitted
    #[prop(optional)]
    on_submit: SubmitHandler,
) -> impl IntoView {
    let (form, set_form) = signal(initial);

    view! {
        <div class="lintrag-page">
            <HeroSection />
            <AboutSection />
            <SegmentsSection />
            <FeaturesSection />
            <DemoBookingSection form=form set_form=set_form on_submit=on_submit />
            <ContactSection />
        </div>
    }
}
