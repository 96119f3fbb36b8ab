use leptos::prelude::*;

use crate::config::AssetBase;
use crate::content::{ABOUT_IMAGE, ABOUT_TEXT, ABOUT_TITLE};

/// Two-column "What is Lintrag?" block.
#[component]
pub fn AboutSection() -> impl IntoView {
    let assets = use_context::<AssetBase>().unwrap_or_default();

    view! {
        <section class="about">
            <img class="about-image" src=assets.resolve(ABOUT_IMAGE) alt="Lintrag About" />
            <div>
                <h2 class="section-title">{ABOUT_TITLE}</h2>
                <p class="about-text">{ABOUT_TEXT}</p>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::with_owner;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_image_and_copy() {
        let html = with_owner(|| view! { <AboutSection /> }.to_html());

        assert!(html.contains(r#"src="/images/about.jpg""#));
        assert!(html.contains(r#"alt="Lintrag About""#));
        assert!(html.contains(ABOUT_TITLE));
        assert!(html.contains("AutonomousSpark"));
    }
}
