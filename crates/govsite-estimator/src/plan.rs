//! Derived plan: the output of one estimate.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::Framework;
use crate::input::EstimatorInput;
use crate::weights::ScenarioId;

/// Coarse Low/Medium/High classification of a complexity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Band {
    Low,
    Medium,
    High,
}

impl Band {
    pub fn name(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unit of the derived duration and of fraction-based roster amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DurationUnit {
    Weeks,
    Days,
}

impl DurationUnit {
    pub fn name(self) -> &'static str {
        match self {
            Self::Weeks => "weeks",
            Self::Days => "days",
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One factor of the complexity multiplier and whether it fired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedFactor {
    pub name: String,
    pub multiplier: f64,
    pub triggered: bool,
}

/// What a roster amount counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RosterUnit {
    /// Same unit as the plan duration.
    Duration(DurationUnit),
    /// Full-time equivalents.
    Fte,
}

impl fmt::Display for RosterUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duration(unit) => unit.fmt(f),
            Self::Fte => f.write_str("FTE"),
        }
    }
}

/// A role in the team composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAllocation {
    pub role: String,
    pub amount: u32,
    pub unit: RosterUnit,
}

/// Evidence status of a control.
///
/// Always `InProgress` today; `Complete` is reserved for when a real
/// evidence source exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvidenceStatus {
    InProgress,
    Complete,
}

impl EvidenceStatus {
    pub fn name(self) -> &'static str {
        match self {
            Self::InProgress => "In Progress",
            Self::Complete => "Complete",
        }
    }
}

/// One control line of an evidence-pack checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceControl {
    pub framework: Framework,
    pub reference: String,
    pub status: EvidenceStatus,
}

/// The structured result of an estimate.
///
/// Carries the input snapshot it was computed from, so rendering never has
/// to consult live widget state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedPlan {
    pub scenario: ScenarioId,
    pub title: String,
    pub input: EstimatorInput,
    pub factors: Vec<AppliedFactor>,
    pub multiplier: f64,
    pub duration: u32,
    pub unit: DurationUnit,
    pub roster: SmallVec<[RoleAllocation; 4]>,
    pub score: f64,
    pub band: Band,
    pub deliverables_heading: String,
    pub deliverables: Vec<String>,
    pub evidence: Vec<EvidenceControl>,
}

impl DerivedPlan {
    /// Roster amount for `role`, if the plan staffs it.
    pub fn role(&self, role: &str) -> Option<u32> {
        self.roster.iter().find(|r| r.role == role).map(|r| r.amount)
    }

    /// Names of the factors that fired.
    pub fn triggered_factors(&self) -> impl Iterator<Item = &str> {
        self.factors
            .iter()
            .filter(|f| f.triggered)
            .map(|f| f.name.as_str())
    }
}
