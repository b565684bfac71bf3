//! # govsite-forms
//!
//! Simulated form submission. A submit captures the payload, waits a fixed
//! delay standing in for the network, shows the captured payload as a
//! confirmation, then resets after a second delay. Nothing is transmitted.
//!
//! The deferred steps run as a tokio task tied to the form's
//! [`CancellationToken`](govsite_core::CancellationToken): unmounting or
//! dropping the form stops the task before it touches state.

pub mod delays;
pub mod form;
pub mod payload;
pub mod state;

pub use delays::FormDelays;
pub use form::SimulatedForm;
pub use payload::{ContactRequest, FormKind, FormPayload, InquiryTopic, NewsletterSignup};
pub use state::{FormPhase, FormState};

/// The site's contact form.
pub type ContactForm = SimulatedForm<ContactRequest>;

/// The footer newsletter form.
pub type NewsletterForm = SimulatedForm<NewsletterSignup>;
