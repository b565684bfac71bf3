//! Form payloads and their required-field check.

use std::fmt;

use govsite_core::errors::FormError;
use serde::{Deserialize, Serialize};

/// Which form a payload belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormKind {
    Contact,
    Newsletter,
}

impl FormKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Newsletter => "newsletter",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Data captured by a simulated form.
pub trait FormPayload: Clone + fmt::Debug + Send + Sync + 'static {
    fn kind(&self) -> FormKind;

    /// `(field, value)` pairs that must be non-blank.
    fn required_fields(&self) -> Vec<(&'static str, &str)>;

    /// One-line confirmation text, also what gets logged.
    fn summary(&self) -> String;

    /// The only validation: required fields are non-blank after trimming.
    fn validate(&self) -> Result<(), FormError> {
        match self
            .required_fields()
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
        {
            Some((field, _)) => Err(FormError::MissingField { field }),
            None => Ok(()),
        }
    }
}

/// Topic picked on the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InquiryTopic {
    Assessment,
    ManagedService,
    EvidencePack,
    #[default]
    General,
}

impl InquiryTopic {
    pub const ALL: &'static [InquiryTopic] = &[
        InquiryTopic::Assessment,
        InquiryTopic::ManagedService,
        InquiryTopic::EvidencePack,
        InquiryTopic::General,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Assessment => "Governance assessment",
            Self::ManagedService => "Managed service",
            Self::EvidencePack => "Evidence pack",
            Self::General => "General enquiry",
        }
    }
}

impl fmt::Display for InquiryTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub topic: InquiryTopic,
    pub message: String,
}

impl FormPayload for ContactRequest {
    fn kind(&self) -> FormKind {
        FormKind::Contact
    }

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("message", self.message.as_str()),
        ]
    }

    fn summary(&self) -> String {
        let company = self
            .company
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(|c| format!(" ({c})"))
            .unwrap_or_default();
        format!(
            "{} <{}>{company}: {}",
            self.name.trim(),
            self.email.trim(),
            self.topic
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewsletterSignup {
    pub email: String,
}

impl FormPayload for NewsletterSignup {
    fn kind(&self) -> FormKind {
        FormKind::Newsletter
    }

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("email", self.email.as_str())]
    }

    fn summary(&self) -> String {
        self.email.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> ContactRequest {
        ContactRequest {
            name: "Ada Byron".into(),
            email: "ada@example.com".into(),
            company: Some("Analytical Engines Ltd".into()),
            topic: InquiryTopic::Assessment,
            message: "We need an EU AI Act readiness review.".into(),
        }
    }

    #[test]
    fn test_complete_contact_validates() {
        assert!(contact().validate().is_ok());
    }

    #[test]
    fn test_blank_field_is_reported_in_order() {
        let mut request = contact();
        request.email = "   ".into();
        request.message.clear();
        assert_eq!(
            request.validate(),
            Err(FormError::MissingField { field: "email" })
        );
    }

    #[test]
    fn test_company_is_optional() {
        let mut request = contact();
        request.company = None;
        assert!(request.validate().is_ok());
        assert_eq!(
            request.summary(),
            "Ada Byron <ada@example.com>: Governance assessment"
        );
    }

    #[test]
    fn test_summary_includes_company() {
        assert_eq!(
            contact().summary(),
            "Ada Byron <ada@example.com> (Analytical Engines Ltd): Governance assessment"
        );
    }

    #[test]
    fn test_newsletter_requires_email() {
        let signup = NewsletterSignup::default();
        assert_eq!(
            signup.validate(),
            Err(FormError::MissingField { field: "email" })
        );
        assert_eq!(signup.kind(), FormKind::Newsletter);
    }
}
