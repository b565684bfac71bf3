//! Per-framework control references for the evidence-pack checklist.

use crate::catalog::Framework;
use crate::input::ScopeInput;
use crate::plan::{EvidenceControl, EvidenceStatus};

/// Fixed control references collected for `framework`.
pub fn controls_for(framework: Framework) -> &'static [&'static str] {
    match framework {
        Framework::EuAiAct => &[
            "Art. 9 Risk management system",
            "Art. 10 Data and data governance",
            "Art. 12 Record-keeping",
            "Art. 14 Human oversight",
        ],
        Framework::NistAiRmf => &["GOVERN 1.1", "MAP 1.1", "MEASURE 2.7", "MANAGE 4.1"],
        Framework::Iso42001 => &[
            "6.1 Actions to address risks",
            "8.4 AI system impact assessment",
            "A.6 AI system life cycle",
        ],
        Framework::Iso27001 => &[
            "A.5.1 Information security policies",
            "A.8.16 Monitoring activities",
        ],
        Framework::Gdpr => &[
            "Art. 30 Records of processing",
            "Art. 35 Data protection impact assessment",
        ],
        Framework::Soc2 => &["CC6.1 Logical access", "CC7.2 System monitoring"],
        Framework::Hipaa => &[
            "164.308 Administrative safeguards",
            "164.312 Technical safeguards",
        ],
    }
}

/// Checklist for every selected framework, in catalog order.
///
/// Status is always `InProgress`: there is no evidence source to read
/// completion from.
pub fn checklist(scope: &ScopeInput) -> Vec<EvidenceControl> {
    scope
        .frameworks
        .iter()
        .flat_map(|&framework| {
            controls_for(framework).iter().map(move |reference| EvidenceControl {
                framework,
                reference: (*reference).to_string(),
                status: EvidenceStatus::InProgress,
            })
        })
        .collect()
}
