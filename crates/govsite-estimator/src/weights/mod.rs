//! Scenario weight tables.
//!
//! A scenario is pure data: a base value, threshold-gated multiplicative
//! factors, a roster rule, band thresholds, and fixed copy. The formula in
//! [`crate::formula`] is shared by all of them.

pub mod scenarios;

use std::fmt;
use std::str::FromStr;

use govsite_core::errors::EstimatorError;
use serde::{Deserialize, Serialize};

use crate::catalog::{Sensitivity, SlaStream};
use crate::export::ExportFormat;
use crate::plan::DurationUnit;

/// Identifies one of the built-in estimator scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioId {
    AssessmentPlanner,
    ManagedServiceComposer,
    EvidencePackBuilder,
    ScopingConfigurator,
}

impl ScenarioId {
    pub const ALL: &'static [ScenarioId] = &[
        ScenarioId::AssessmentPlanner,
        ScenarioId::ManagedServiceComposer,
        ScenarioId::EvidencePackBuilder,
        ScenarioId::ScopingConfigurator,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Self::AssessmentPlanner => "assessment-planner",
            Self::ManagedServiceComposer => "managed-service-composer",
            Self::EvidencePackBuilder => "evidence-pack-builder",
            Self::ScopingConfigurator => "scoping-configurator",
        }
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ScenarioId {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.slug() == s.trim())
            .ok_or_else(|| EstimatorError::UnknownOption {
                field: "scenario",
                value: s.to_string(),
            })
    }
}

/// Count-valued inputs a factor can be gated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    FrameworkCount,
    Regions,
    Agents,
    IntegrationCount,
}

/// A threshold-gated multiplicative factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FactorRule {
    /// Fires when `metric > threshold`.
    Above {
        name: &'static str,
        metric: Metric,
        threshold: u32,
        multiplier: f64,
    },
    /// Fires when the sensitivity tier equals `tier`.
    SensitivityIs {
        name: &'static str,
        tier: Sensitivity,
        multiplier: f64,
    },
}

impl FactorRule {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Above { name, .. } | Self::SensitivityIs { name, .. } => name,
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Above { multiplier, .. } | Self::SensitivityIs { multiplier, .. } => *multiplier,
        }
    }
}

/// A scale applied to a base roster value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RosterScale {
    /// Coverage tier multiplier.
    Coverage,
    /// SLA tier multiplier of one stream.
    Sla(SlaStream),
    /// `multiplier` when regions exceed `threshold`.
    RegionsAbove { threshold: u32, multiplier: f64 },
}

/// A managed-service role: base FTE scaled by independent multipliers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledRole {
    pub role: &'static str,
    pub base: f64,
    pub scale_by: &'static [RosterScale],
}

/// How the team composition is derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RosterRule {
    /// `ceil(duration × fraction)` per role.
    Fractions(&'static [(&'static str, f64)]),
    /// `ceil(base × Π scales)` FTE per role.
    Scaled(&'static [ScaledRole]),
}

/// What the band thresholds are compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreRule {
    /// The complexity multiplier itself.
    Multiplier,
    /// Complexity multiplier × coverage multiplier.
    MultiplierWithCoverage,
}

/// Score thresholds: below `low_below` → Low, below `medium_below` →
/// Medium, otherwise High.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandThresholds {
    pub low_below: f64,
    pub medium_below: f64,
}

/// Fixed export target of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSpec {
    pub filename: &'static str,
    pub format: ExportFormat,
}

/// The constants table of one estimator scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioWeights {
    pub id: ScenarioId,
    pub title: &'static str,
    pub base: f64,
    pub unit: DurationUnit,
    pub factors: &'static [FactorRule],
    pub roster: RosterRule,
    pub score: ScoreRule,
    pub thresholds: BandThresholds,
    pub deliverables_heading: &'static str,
    pub deliverables: &'static [&'static str],
    /// Attach the per-framework evidence checklist to the plan.
    pub evidence_checklist: bool,
    pub export: ExportSpec,
}

/// Source of scenario tables.
///
/// The default implementation serves the built-in constants.
pub trait WeightsProvider: Send + Sync {
    fn weights(&self, id: ScenarioId) -> &'static ScenarioWeights {
        scenarios::builtin(id)
    }
}

/// Provider for the compiled-in scenario tables.
pub struct StaticWeights;

impl WeightsProvider for StaticWeights {}
