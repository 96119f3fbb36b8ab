use leptos::prelude::*;

use crate::content::FEATURES;

/// "Why Choose Lintrag?": one tile per entry of [`FEATURES`].
#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section class="features">
            <h2 class="section-title">"Why Choose Lintrag?"</h2>
            <div class="features-grid">
                {FEATURES
                    .into_iter()
                    .map(|feature| {
                        view! {
                            <div class="feature-tile">
                                <h3 class="feature-label">{feature}</h3>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
