//! Constant page content.
//!
//! Everything the page shows apart from the form values lives here, so the
//! components stay purely presentational and the CLI can dump the copy.

use serde::Serialize;

use crate::types::{Contact, Feature, Segment};

/// Product name used across the page.
pub const PRODUCT: &str = "Lintrag";

/// Hero background image.
pub const HERO_IMAGE: &str = "/images/hero-laundry.jpg";
/// Hero heading.
pub const HERO_TITLE: &str = "Revolutionize Linen Management with Lintrag";
/// Hero tagline.
pub const HERO_TAGLINE: &str = "Save Time. Cut Costs. Gain Control.";

/// About section image.
pub const ABOUT_IMAGE: &str = "/images/about.jpg";
/// About section heading.
pub const ABOUT_TITLE: &str = "What is Lintrag?";
/// About section paragraph.
pub const ABOUT_TEXT: &str = "Lintrag is a modern, intelligent linen tracking and laundry \
management solution built for laundry owners, renters, and service providers. Powered by \
cutting-edge technology and deep industry insights from AutonomousSpark.";

/// The three audience segments, in display order.
pub const SEGMENTS: [Segment; 3] = [
    Segment {
        title: "Laundry Owners",
        benefits: &["Save Time", "Save Money", "Enhance Efficiency"],
        image: "/images/owners.jpg",
    },
    Segment {
        title: "Laundry Renters",
        benefits: &["Track with Confidence", "Lower Costs", "Smart Automation"],
        image: "/images/renters.jpg",
    },
    Segment {
        title: "Service Providers",
        benefits: &[
            "Time Optimization",
            "Performance Insight",
            "Operational Automation",
        ],
        image: "/images/providers.jpg",
    },
];

/// The six marketed features, in display order.
pub const FEATURES: [Feature; 6] = [
    "RFID/barcode linen tracking",
    "Real-time location monitoring",
    "Automated workflows",
    "Lifecycle analytics",
    "Staff optimization",
    "Roller cage association",
];

/// Footer contact details.
pub const CONTACT: Contact = Contact {
    company: "AutonomousSpark",
    email: "info@autspark.net",
    phone: "+1 (555) 123-4567",
    copyright: "© 2025 AutonomousSpark. All rights reserved.",
};

/// Snapshot of all constant copy, for `lintrag content`.
#[derive(Clone, Debug, Serialize)]
pub struct PageContent {
    /// Product name
    pub product: &'static str,
    /// Hero background image path
    pub hero_image: &'static str,
    /// Hero heading
    pub hero_title: &'static str,
    /// Hero tagline
    pub hero_tagline: &'static str,
    /// About image path
    pub about_image: &'static str,
    /// About heading
    pub about_title: &'static str,
    /// About paragraph
    pub about_text: &'static str,
    /// Audience segments in display order
    pub segments: Vec<Segment>,
    /// Feature labels in display order
    pub features: Vec<Feature>,
    /// Footer contact details
    pub contact: Contact,
}

impl PageContent {
    /// The content currently compiled into the page.
    pub fn current() -> Self {
        Self {
            product: PRODUCT,
            hero_image: HERO_IMAGE,
            hero_title: HERO_TITLE,
            hero_tagline: HERO_TAGLINE,
            about_image: ABOUT_IMAGE,
            about_title: ABOUT_TITLE,
            about_text: ABOUT_TEXT,
            segments: SEGMENTS.to_vec(),
            features: FEATURES.to_vec(),
            contact: CONTACT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_titles_are_unique() {
        let mut titles: Vec<_> = SEGMENTS.iter().map(|s| s.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), SEGMENTS.len());
    }

    #[test]
    fn every_image_lives_under_images() {
        let images = SEGMENTS
            .iter()
            .map(|s| s.image)
            .chain([HERO_IMAGE, ABOUT_IMAGE]);
        for image in images {
            assert!(image.starts_with("/images/"), "{image}");
        }
    }

    #[test]
    fn content_snapshot_serializes() {
        let json = serde_json::to_value(PageContent::current()).unwrap();
        assert_eq!(json["segments"].as_array().map(Vec::len), Some(3));
        assert_eq!(json["features"].as_array().map(Vec::len), Some(6));
        assert_eq!(json["contact"]["email"], "info@autspark.net");
        assert_eq!(json["segments"][2]["benefits"][0], "Time Optimization");
    }
}
