//! Data model for the landing page.
//!
//! Segments, features and contact details are constant content (see
//! [`crate::content`]). [`DemoForm`] is the only mutable record: it backs
//! the "Book a Demo" form and is replaced one field at a time.
//!
//! # Example
//!
//! ```rust
//! use lintrag_page::types::{DemoForm, FormField};
//!
//! let form = DemoForm::default().with_field(FormField::Name, "Jane Doe");
//! assert_eq!(form.name, "Jane Doe");
//! assert_eq!(form.email, "");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PageError;

/// A target-customer category with its marketing copy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Card heading, also used as the image alt text
    pub title: &'static str,
    /// Bullet points, rendered in order
    pub benefits: &'static [&'static str],
    /// Image path, resolved against the configured asset base
    pub image: &'static str,
}

/// A single marketed product capability.
pub type Feature = &'static str;

/// Footer contact details, rendered verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Contact {
    /// Company name shown in the footer heading
    pub company: &'static str,
    /// Contact email address
    pub email: &'static str,
    /// Contact phone number
    pub phone: &'static str,
    /// Copyright line
    pub copyright: &'static str,
}

/// One of the six fields of the demo-booking form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    /// Contact name
    Name,
    /// Contact email
    Email,
    /// Organization
    Org,
    /// Customer segment (owner / renter / provider), free text
    Segment,
    /// Preferred date, free text
    Date,
    /// Free-form message
    Message,
}

impl FormField {
    /// All fields in display order.
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Email,
        FormField::Org,
        FormField::Segment,
        FormField::Date,
        FormField::Message,
    ];

    /// Lowercase key, used for the HTML `name` attribute and CLI prefill.
    pub fn name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Org => "org",
            FormField::Segment => "segment",
            FormField::Date => "date",
            FormField::Message => "message",
        }
    }

    /// Placeholder text shown in the empty control.
    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Org => "Organization",
            FormField::Segment => "Segment (Owner / Renter / Provider)",
            FormField::Date => "Preferred Date",
            FormField::Message => "Message",
        }
    }

    /// Whether the field is rendered as a textarea.
    pub fn is_multiline(self) -> bool {
        matches!(self, FormField::Message)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormField {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        FormField::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(key))
            .ok_or_else(|| PageError::UnknownField(s.to_string()))
    }
}

/// The in-memory record behind the "Book a Demo" form.
///
/// Never validated: any text, including empty, is accepted in every field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoForm {
    /// Contact name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Organization
    pub org: String,
    /// Customer segment
    pub segment: String,
    /// Preferred date (free text, not a date picker)
    pub date: String,
    /// Free-form message
    pub message: String,
}

impl DemoForm {
    /// Current text of `field`.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Org => &self.org,
            FormField::Segment => &self.segment,
            FormField::Date => &self.date,
            FormField::Message => &self.message,
        }
    }

    /// Copy of this record with exactly `field` replaced by `value`.
    pub fn with_field(&self, field: FormField, value: impl Into<String>) -> DemoForm {
        let mut next = self.clone();
        let slot = match field {
            FormField::Name => &mut next.name,
            FormField::Email => &mut next.email,
            FormField::Org => &mut next.org,
            FormField::Segment => &mut next.segment,
            FormField::Date => &mut next.date,
            FormField::Message => &mut next.message,
        };
        *slot = value.into();
        next
    }

    /// Parses a `field=value` pair and applies it.
    ///
    /// Only the first `=` splits; the value may contain further `=` signs.
    pub fn with_prefill(&self, entry: &str) -> Result<DemoForm, PageError> {
        let (key, value) = entry
            .split_once('=')
            .ok_or_else(|| PageError::InvalidPrefill(entry.to_string()))?;
        let field: FormField = key.parse()?;
        Ok(self.with_field(field, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_form_is_all_empty() {
        let form = DemoForm::default();
        for field in FormField::ALL {
            assert_eq!(form.get(field), "");
        }
    }

    #[test]
    fn with_field_replaces_only_the_target() {
        let base = DemoForm {
            name: "n".into(),
            email: "e".into(),
            org: "o".into(),
            segment: "s".into(),
            date: "d".into(),
            message: "m".into(),
        };

        for field in FormField::ALL {
            let next = base.with_field(field, "changed");
            assert_eq!(next.get(field), "changed");
            for other in FormField::ALL.into_iter().filter(|f| *f != field) {
                assert_eq!(next.get(other), base.get(other), "{other} drifted when editing {field}");
            }
        }
        // source record untouched
        assert_eq!(base.name, "n");
    }

    #[test]
    fn sequential_edits_accumulate() {
        let form = DemoForm::default()
            .with_field(FormField::Email, "a@b.com")
            .with_field(FormField::Org, "Acme");

        assert_eq!(
            form,
            DemoForm {
                email: "a@b.com".into(),
                org: "Acme".into(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn empty_value_is_accepted() {
        let form = DemoForm::default()
            .with_field(FormField::Date, "next Tuesday")
            .with_field(FormField::Date, "");
        assert_eq!(form.date, "");
    }

    #[test]
    fn field_keys_round_trip_through_from_str() {
        for field in FormField::ALL {
            assert_eq!(field.name().parse::<FormField>().unwrap(), field);
        }
        assert_eq!("ORG".parse::<FormField>().unwrap(), FormField::Org);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = "phone".parse::<FormField>().unwrap_err();
        assert!(matches!(err, PageError::UnknownField(ref key) if key == "phone"));
    }

    #[test]
    fn only_message_is_multiline() {
        let multiline: Vec<_> = FormField::ALL
            .into_iter()
            .filter(|f| f.is_multiline())
            .collect();
        assert_eq!(multiline, vec![FormField::Message]);
    }

    #[test]
    fn prefill_splits_on_first_equals() {
        let form = DemoForm::default()
            .with_prefill("message=a=b")
            .unwrap();
        assert_eq!(form.message, "a=b");

        let err = DemoForm::default().with_prefill("name").unwrap_err();
        assert!(matches!(err, PageError::InvalidPrefill(_)));
    }
}
