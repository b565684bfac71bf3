//! Closed option catalogs for the estimator inputs.
//!
//! Every dropdown and checkbox group on the tool pages draws from one of
//! these enums. Parsing accepts the slug or the display label
//! (case-insensitive); anything else is an `UnknownOption` error, never a
//! silent default.

use std::fmt;
use std::str::FromStr;

use govsite_core::errors::EstimatorError;
use serde::{Deserialize, Serialize};

macro_rules! catalog {
    (
        $(#[$meta:meta])*
        $name:ident, field = $field:literal {
            $($variant:ident => ($slug:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $slug)] $variant),+
        }

        impl $name {
            /// All entries in catalog order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Stable machine name.
            pub fn slug(self) -> &'static str {
                match self {
                    $($name::$variant => $slug),+
                }
            }

            /// Human-readable label.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = EstimatorError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| {
                        v.slug().eq_ignore_ascii_case(needle)
                            || v.label().eq_ignore_ascii_case(needle)
                    })
                    .ok_or_else(|| EstimatorError::UnknownOption {
                        field: $field,
                        value: s.to_string(),
                    })
            }
        }
    };
}

catalog! {
    /// Industry the prospect operates in.
    Industry, field = "industry" {
        FinancialServices => ("financial-services", "Financial Services"),
        Healthcare => ("healthcare", "Healthcare"),
        PublicSector => ("public-sector", "Public Sector"),
        Technology => ("technology", "Technology"),
        Retail => ("retail", "Retail"),
        Energy => ("energy", "Energy"),
    }
}

catalog! {
    /// Regulatory and standards frameworks (seven-entry catalog).
    Framework, field = "framework" {
        EuAiAct => ("eu-ai-act", "EU AI Act"),
        NistAiRmf => ("nist-ai-rmf", "NIST AI RMF"),
        Iso42001 => ("iso-42001", "ISO/IEC 42001"),
        Iso27001 => ("iso-27001", "ISO/IEC 27001"),
        Gdpr => ("gdpr", "GDPR"),
        Soc2 => ("soc2", "SOC 2"),
        Hipaa => ("hipaa", "HIPAA"),
    }
}

catalog! {
    /// Tooling integrations (ten-entry catalog).
    Integration, field = "integration" {
        ServiceNow => ("servicenow", "ServiceNow"),
        Jira => ("jira", "Jira"),
        Slack => ("slack", "Slack"),
        MicrosoftTeams => ("microsoft-teams", "Microsoft Teams"),
        Okta => ("okta", "Okta"),
        EntraId => ("entra-id", "Entra ID"),
        Aws => ("aws", "AWS"),
        GoogleCloud => ("google-cloud", "Google Cloud"),
        Snowflake => ("snowflake", "Snowflake"),
        Databricks => ("databricks", "Databricks"),
    }
}

catalog! {
    /// Data-sensitivity tier.
    Sensitivity, field = "sensitivity" {
        Low => ("low", "Low"),
        Medium => ("medium", "Medium"),
        High => ("high", "High"),
    }
}

catalog! {
    /// Managed-service coverage window.
    CoverageTier, field = "coverage" {
        BusinessHours => ("8x5", "8x5"),
        Extended => ("16x5", "16x5"),
        AroundTheClock => ("24x7", "24x7"),
    }
}

catalog! {
    /// Response SLA tier for one managed-service stream.
    SlaTier, field = "sla" {
        Standard => ("standard", "Standard"),
        Enhanced => ("enhanced", "Enhanced"),
        Premium => ("premium", "Premium"),
    }
}

catalog! {
    /// Managed-service work streams that carry their own SLA.
    SlaStream, field = "sla stream" {
        Triage => ("triage", "Incident triage"),
        Change => ("change", "Change review"),
        Dsar => ("dsar", "DSAR handling"),
        Reporting => ("reporting", "Regulatory reporting"),
    }
}

impl Default for Sensitivity {
    fn default() -> Self {
        Self::Medium
    }
}

impl Default for CoverageTier {
    fn default() -> Self {
        Self::BusinessHours
    }
}

impl Default for SlaTier {
    fn default() -> Self {
        Self::Standard
    }
}

impl CoverageTier {
    /// Staffing multiplier: `8x5 → ×1`, `16x5 → ×1.5`, `24x7 → ×2.5`.
    pub fn multiplier(self) -> f64 {
        match self {
            Self::BusinessHours => 1.0,
            Self::Extended => 1.5,
            Self::AroundTheClock => 2.5,
        }
    }
}

impl SlaTier {
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Standard => 1.0,
            Self::Enhanced => 1.25,
            Self::Premium => 1.5,
        }
    }
}
