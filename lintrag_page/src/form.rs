//! Demo form state transitions.
//!
//! The root component owns a single `signal(DemoForm)`. Edits go through
//! [`apply_edit`], which derives the next record from the current one and
//! writes it back whole, so the displayed values always equal the signal.
//! Submission goes through [`submit_demo_request`] and never touches the state.

use std::fmt;
use std::sync::Arc;

use leptos::prelude::*;

use crate::types::{DemoForm, FormField};

/// Replace one field of the form record.
pub fn apply_edit(
    form: ReadSignal<DemoForm>,
    set_form: WriteSignal<DemoForm>,
    field: FormField,
    value: String,
) {
    let next = form.get_untracked().with_field(field, value);
    tracing::debug!(field = %field, "demo form field updated");
    set_form.set(next);
}

/// Pluggable action run when the demo form is submitted.
///
/// No backend exists yet, so the default handler is inert. Embedders that
/// have one pass a handler to [`crate::components::LintragHome`].
#[derive(Clone, Default)]
pub struct SubmitHandler(Option<Arc<dyn Fn(DemoForm) + Send + Sync>>);

impl SubmitHandler {
    /// Wraps a closure receiving a snapshot of the form.
    pub fn new(f: impl Fn(DemoForm) + Send + Sync + 'static) -> Self {
        Self(Some(Arc::new(f)))
    }

    /// A handler that does nothing.
    pub fn inert() -> Self {
        Self(None)
    }

    /// Whether submitting runs any action.
    pub fn is_inert(&self) -> bool {
        self.0.is_none()
    }
}

impl fmt::Debug for SubmitHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_inert() {
            f.write_str("SubmitHandler(inert)")
        } else {
            f.write_str("SubmitHandler(..)")
        }
    }
}

/// What happened on submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No handler configured; nothing happened
    Inert,
    /// The handler received the current record
    Dispatched,
}

/// Handle a submit of the demo form. Never modifies the form state.
pub fn submit_demo_request(form: ReadSignal<DemoForm>, handler: &SubmitHandler) -> SubmitOutcome {
    match &handler.0 {
        Some(action) => {
            tracing::info!("demo request dispatched");
            action(form.get_untracked());
            SubmitOutcome::Dispatched
        }
        None => {
            tracing::debug!("demo request submitted with no handler configured");
            SubmitOutcome::Inert
        }
    }
}
