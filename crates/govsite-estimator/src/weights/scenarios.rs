//! Built-in scenario tables.

use super::{
    BandThresholds, ExportSpec, FactorRule, Metric, RosterRule, RosterScale, ScaledRole,
    ScenarioId, ScenarioWeights, ScoreRule,
};
use crate::catalog::{Sensitivity, SlaStream};
use crate::export::ExportFormat;
use crate::plan::DurationUnit;

const MANY_FRAMEWORKS: FactorRule = FactorRule::Above {
    name: "more than 3 frameworks",
    metric: Metric::FrameworkCount,
    threshold: 3,
    multiplier: 1.4,
};

const MULTI_REGION: FactorRule = FactorRule::Above {
    name: "more than 2 regions",
    metric: Metric::Regions,
    threshold: 2,
    multiplier: 1.3,
};

const HIGH_SENSITIVITY: FactorRule = FactorRule::SensitivityIs {
    name: "high data sensitivity",
    tier: Sensitivity::High,
    multiplier: 1.2,
};

const MANY_INTEGRATIONS: FactorRule = FactorRule::Above {
    name: "more than 5 integrations",
    metric: Metric::IntegrationCount,
    threshold: 5,
    multiplier: 1.2,
};

const MANY_AGENTS: FactorRule = FactorRule::Above {
    name: "more than 20 AI systems",
    metric: Metric::Agents,
    threshold: 20,
    multiplier: 1.3,
};

const MANY_AGENTS_ASSESSMENT: FactorRule = FactorRule::Above {
    name: "more than 20 AI systems",
    metric: Metric::Agents,
    threshold: 20,
    multiplier: 1.4,
};

const DELIVERY_TEAM: RosterRule = RosterRule::Fractions(&[
    ("Consultant", 0.6),
    ("Subject-matter expert", 0.4),
    ("Project manager", 0.3),
]);

const DEFAULT_THRESHOLDS: BandThresholds = BandThresholds {
    low_below: 1.5,
    medium_below: 2.5,
};

const REGION_STAFFING: RosterScale = RosterScale::RegionsAbove {
    threshold: 2,
    multiplier: 1.3,
};

pub static ASSESSMENT_PLANNER: ScenarioWeights = ScenarioWeights {
    id: ScenarioId::AssessmentPlanner,
    title: "AI Governance Assessment Brief",
    base: 4.0,
    unit: DurationUnit::Weeks,
    factors: &[MANY_FRAMEWORKS, MULTI_REGION, HIGH_SENSITIVITY, MANY_AGENTS_ASSESSMENT],
    roster: DELIVERY_TEAM,
    score: ScoreRule::Multiplier,
    thresholds: DEFAULT_THRESHOLDS,
    deliverables_heading: "Deliverables",
    deliverables: &[
        "AI system inventory and risk classification",
        "Framework gap analysis",
        "Control maturity scorecard",
        "Prioritised remediation roadmap",
        "Executive readout",
    ],
    evidence_checklist: false,
    export: ExportSpec {
        filename: "assessment-brief.txt",
        format: ExportFormat::PlainText,
    },
};

pub static MANAGED_SERVICE_COMPOSER: ScenarioWeights = ScenarioWeights {
    id: ScenarioId::ManagedServiceComposer,
    title: "Managed Governance Runbook",
    base: 4.0,
    unit: DurationUnit::Weeks,
    factors: &[MANY_FRAMEWORKS, MULTI_REGION, HIGH_SENSITIVITY, MANY_AGENTS],
    roster: RosterRule::Scaled(&[
        ScaledRole {
            role: "Governance analyst",
            base: 1.0,
            scale_by: &[
                RosterScale::Coverage,
                RosterScale::Sla(SlaStream::Triage),
                REGION_STAFFING,
            ],
        },
        ScaledRole {
            role: "Change reviewer",
            base: 0.5,
            scale_by: &[RosterScale::Sla(SlaStream::Change), REGION_STAFFING],
        },
        ScaledRole {
            role: "Privacy specialist",
            base: 0.5,
            scale_by: &[RosterScale::Sla(SlaStream::Dsar), REGION_STAFFING],
        },
        ScaledRole {
            role: "Reporting lead",
            base: 0.25,
            scale_by: &[RosterScale::Sla(SlaStream::Reporting)],
        },
    ]),
    score: ScoreRule::MultiplierWithCoverage,
    thresholds: BandThresholds {
        low_below: 2.0,
        medium_below: 4.0,
    },
    deliverables_heading: "Escalation path",
    deliverables: &[
        "L1: Governance analyst triages the alert and logs it in the risk register",
        "L2: Change reviewer assesses model or policy impact",
        "L3: Privacy specialist engages for personal-data exposure",
        "L4: Engagement lead briefs the client's accountable executive",
    ],
    evidence_checklist: false,
    export: ExportSpec {
        filename: "managed-governance-runbook.md",
        format: ExportFormat::Markdown,
    },
};

pub static EVIDENCE_PACK_BUILDER: ScenarioWeights = ScenarioWeights {
    id: ScenarioId::EvidencePackBuilder,
    title: "Evidence Pack Manifest",
    base: 8.0,
    unit: DurationUnit::Days,
    factors: &[
        MANY_FRAMEWORKS,
        MANY_INTEGRATIONS,
        HIGH_SENSITIVITY,
        MANY_AGENTS,
    ],
    roster: RosterRule::Fractions(&[
        ("Evidence lead", 0.5),
        ("Control owner", 0.4),
        ("Audit liaison", 0.2),
    ]),
    score: ScoreRule::Multiplier,
    thresholds: DEFAULT_THRESHOLDS,
    deliverables_heading: "Pack contents",
    deliverables: &[
        "Control-to-evidence mapping",
        "Policy and procedure excerpts",
        "Model cards and data sheets",
        "Monitoring logs and sign-offs",
        "Auditor cover letter",
    ],
    evidence_checklist: true,
    export: ExportSpec {
        filename: "evidence-pack-manifest.txt",
        format: ExportFormat::PlainText,
    },
};

pub static SCOPING_CONFIGURATOR: ScenarioWeights = ScenarioWeights {
    id: ScenarioId::ScopingConfigurator,
    title: "Draft Statement of Work",
    base: 8.0,
    unit: DurationUnit::Weeks,
    factors: &[
        MANY_FRAMEWORKS,
        MULTI_REGION,
        HIGH_SENSITIVITY,
        MANY_AGENTS,
        MANY_INTEGRATIONS,
    ],
    roster: DELIVERY_TEAM,
    score: ScoreRule::Multiplier,
    thresholds: DEFAULT_THRESHOLDS,
    deliverables_heading: "Scope of work",
    deliverables: &[
        "Discovery workshops and stakeholder interviews",
        "Governance operating model design",
        "Policy and control framework",
        "Tooling integration plan",
        "Training and handover",
    ],
    evidence_checklist: false,
    export: ExportSpec {
        filename: "draft-sow.txt",
        format: ExportFormat::PlainText,
    },
};

/// Table for a built-in scenario.
pub fn builtin(id: ScenarioId) -> &'static ScenarioWeights {
    match id {
        ScenarioId::AssessmentPlanner => &ASSESSMENT_PLANNER,
        ScenarioId::ManagedServiceComposer => &MANAGED_SERVICE_COMPOSER,
        ScenarioId::EvidencePackBuilder => &EVIDENCE_PACK_BUILDER,
        ScenarioId::ScopingConfigurator => &SCOPING_CONFIGURATOR,
    }
}
