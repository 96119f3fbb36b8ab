//! Root document component - the complete HTML page

use leptos::prelude::*;

use super::LintragHome;
use crate::config::RenderConfig;
use crate::styles::PAGE_CSS;
use crate::types::DemoForm;

/// The complete HTML document: head, styles and [`LintragHome`].
///
/// Provides the configured [`crate::config::AssetBase`] as context for the
/// sections that render images.
#[component]
pub fn PageDocument(
    config: RenderConfig,
    #[prop(optional)]
    initial: DemoForm,
) -> impl IntoView {
    provide_context(config.asset_base());

    let styles = match config.stylesheet {
        Some(href) => view! { <link rel="stylesheet" href=href /> }.into_any(),
        None => view! { <style>{PAGE_CSS}</style> }.into_any(),
    };

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{config.title}</title>
                {styles}
            </head>
            <body>
                <LintragHome initial=initial />
            </body>
        </html>
    }
}
