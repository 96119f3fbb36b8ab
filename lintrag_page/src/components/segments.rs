//! Audience segment cards.

use leptos::prelude::*;

use crate::config::AssetBase;
use crate::content::SEGMENTS;
use crate::types::Segment;

/// Card for one audience segment: image, title, one bullet per benefit.
///
/// An empty benefit list renders an empty `<ul>`.
#[component]
pub fn SegmentCard(segment: Segment) -> impl IntoView {
    let assets = use_context::<AssetBase>().unwrap_or_default();

    view! {
        <article class="segment-card">
            <img class="segment-image" src=assets.resolve(segment.image) alt=segment.title />
            <div class="segment-card-body">
                <h3 class="segment-title">{segment.title}</h3>
                <ul class="segment-benefits">
                    {segment
                        .benefits
                        .iter()
                        .map(|benefit| view! { <li>{*benefit}</li> })
                        .collect_view()}
                </ul>
            </div>
        </article>
    }
}

/// "Segments We Serve": one [`SegmentCard`] per entry of [`SEGMENTS`].
#[component]
pub fn SegmentsSection() -> impl IntoView {
    view! {
        <section class="segments">
            <h2 class="section-title">"Segments We Serve"</h2>
            <div class="segments-grid">
                {SEGMENTS
                    .into_iter()
                    .map(|segment| view! { <SegmentCard segment=segment /> })
                    .collect_view()}
            </div>
        </section>
    }
}
