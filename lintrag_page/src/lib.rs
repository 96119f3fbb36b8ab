//! # lintrag-page
//!
//! Leptos components and static renderer for the Lintrag landing page:
//! hero banner, about blurb, audience segments, feature tiles, the
//! "Book a Demo" form and a contact footer.
//!
//! The same component tree serves two builds:
//!
//! - **SSR** (default `ssr` feature): [`render_page`] produces a complete
//!   static HTML document, used by the `lintrag` CLI.
//! - **CSR** (`csr` feature): the `landing` crate mounts
//!   [`components::LintragHome`] in the browser, where the demo form is live.
//!
//! ## Quick Start
//!
//! ```rust
//! use lintrag_page::{render_page, RenderConfig, types::DemoForm};
//!
//! let html = render_page(&RenderConfig::default(), &DemoForm::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Segments We Serve"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Segment, Contact, DemoForm and FormField
//! - [`content`] - the constant copy shown on the page
//! - [`form`] - form edits and the pluggable submit action
//! - [`components`] - Leptos UI components
//! - [`config`] - render options and asset resolution
//! - [`styles`] - CSS constants
//!
//! ---
//!
//! Built by the AutonomousSpark team (c)2025

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod form;
pub mod styles;
pub mod types;

pub use config::RenderConfig;
pub use error::{PageError, Result};
pub use form::{SubmitHandler, SubmitOutcome};

use components::PageDocument;
use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use leptos::tachys::view::RenderHtml;
use types::DemoForm;

/// Render the complete landing page as an HTML document.
///
/// `initial` seeds the demo form; pass `DemoForm::default()` for an empty
/// form. The output is deterministic for identical inputs.
///
/// # Example
///
/// ```rust
/// use lintrag_page::{render_page, RenderConfig, types::{DemoForm, FormField}};
///
/// let form = DemoForm::default().with_field(FormField::Name, "Jane Doe");
/// let html = render_page(&RenderConfig::default(), &form);
/// assert!(html.contains(r#"value="Jane Doe""#));
/// ```
pub fn render_page(config: &RenderConfig, initial: &DemoForm) -> String {
    let owner = Owner::new();
    let html = owner.with(|| {
        view! { <PageDocument config=config.clone() initial=initial.clone() /> }.to_html()
    });
    tracing::debug!(bytes = html.len(), "rendered landing page");

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}
