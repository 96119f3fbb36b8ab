use leptos::prelude::*;

use crate::config::AssetBase;
use crate::content::{HERO_IMAGE, HERO_TAGLINE, HERO_TITLE};

/// Full-width banner with the product pitch and two call-to-action buttons.
///
/// The buttons are presentational; no actions are attached.
#[component]
pub fn HeroSection() -> impl IntoView {
    let assets = use_context::<AssetBase>().unwrap_or_default();
    let background = format!("background-image: url('{}');", assets.resolve(HERO_IMAGE));

    view! {
        <section class="hero" style=background>
            <h1 class="hero-title">{HERO_TITLE}</h1>
            <p class="hero-tagline">{HERO_TAGLINE}</p>
            <div class="hero-actions">
                <button type="button" class="btn btn-primary">"Explore Features"</button>
                <button type="button" class="btn btn-outline">"Book a Demo"</button>
            </div>
        </section>
    }
}
