//! Leptos components for the landing page.
//!
//! # Component hierarchy
//!
//! ```text
//! PageDocument            (SSR only: <html> shell, CSS, asset context)
//! └── LintragHome         (owns the DemoForm signal)
//!     ├── HeroSection
//!     ├── AboutSection
//!     ├── SegmentsSection
//!     │   └── SegmentCard (per segment)
//!     ├── FeaturesSection
//!     ├── DemoBookingSection  (form + set_form + SubmitHandler)
//!     └── ContactSection
//! ```
//!
//! Everything except [`DemoBookingSection`] is stateless and renders the
//! same markup every time.

mod about;
mod contact;
mod demo_booking;
mod document;
mod features;
mod hero;
mod home;
mod segments;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use demo_booking::DemoBookingSection;
pub use document::PageDocument;
pub use features::FeaturesSection;
pub use hero::HeroSection;
pub use home::LintragHome;
pub use segments::{SegmentCard, SegmentsSection};

#[cfg(test)]
pub(crate) mod test_support {
    use leptos::reactive::owner::Owner;

    /// Runs `f` under a fresh reactive owner, as `render_page` does.
    pub fn with_owner<T>(f: impl FnOnce() -> T) -> T {
        Owner::new().with(f)
    }
}
