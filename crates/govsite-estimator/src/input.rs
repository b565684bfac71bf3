//! Estimator input snapshots.

use std::collections::BTreeSet;

use govsite_core::constants::{
    DEFAULT_AGENTS, DEFAULT_REGIONS, MAX_AGENTS, MAX_REGIONS, MIN_AGENTS, MIN_REGIONS,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{CoverageTier, Framework, Industry, Integration, Sensitivity, SlaStream, SlaTier};

/// Scope options chosen on a tool page.
///
/// Sliders are clamped on every write, deserialisation included, so a
/// `ScopeInput` always holds in-range values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawScopeInput")]
pub struct ScopeInput {
    pub industry: Option<Industry>,
    regions: u32,
    pub frameworks: BTreeSet<Framework>,
    agents: u32,
    pub sensitivity: Sensitivity,
    pub integrations: BTreeSet<Integration>,
}

impl Default for ScopeInput {
    fn default() -> Self {
        Self {
            industry: None,
            regions: DEFAULT_REGIONS,
            frameworks: BTreeSet::new(),
            agents: DEFAULT_AGENTS,
            sensitivity: Sensitivity::default(),
            integrations: BTreeSet::new(),
        }
    }
}

/// Wire shape of [`ScopeInput`]; sliders pass through the clamping setters.
#[derive(Deserialize)]
struct RawScopeInput {
    industry: Option<Industry>,
    regions: u32,
    frameworks: BTreeSet<Framework>,
    agents: u32,
    sensitivity: Sensitivity,
    integrations: BTreeSet<Integration>,
}

impl From<RawScopeInput> for ScopeInput {
    fn from(raw: RawScopeInput) -> Self {
        let mut scope = Self {
            industry: raw.industry,
            frameworks: raw.frameworks,
            sensitivity: raw.sensitivity,
            integrations: raw.integrations,
            ..Self::default()
        };
        scope.set_regions(raw.regions);
        scope.set_agents(raw.agents);
        scope
    }
}

impl ScopeInput {
    pub fn regions(&self) -> u32 {
        self.regions
    }

    pub fn agents(&self) -> u32 {
        self.agents
    }

    /// Set the region count, clamped to 1–10.
    pub fn set_regions(&mut self, regions: u32) {
        self.regions = regions.clamp(MIN_REGIONS, MAX_REGIONS);
    }

    /// Set the agent / application count, clamped to 1–100.
    pub fn set_agents(&mut self, agents: u32) {
        self.agents = agents.clamp(MIN_AGENTS, MAX_AGENTS);
    }

    /// Add or remove a framework. Returns whether it is now selected.
    pub fn toggle_framework(&mut self, framework: Framework) -> bool {
        if !self.frameworks.remove(&framework) {
            self.frameworks.insert(framework);
            true
        } else {
            false
        }
    }

    /// Add or remove an integration. Returns whether it is now selected.
    pub fn toggle_integration(&mut self, integration: Integration) -> bool {
        if !self.integrations.remove(&integration) {
            self.integrations.insert(integration);
            true
        } else {
            false
        }
    }

    /// Required fields that are still empty, in display order.
    pub fn missing_requirements(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.industry.is_none() {
            missing.push("industry");
        }
        if self.frameworks.is_empty() {
            missing.push("frameworks");
        }
        missing
    }

    /// True once industry and at least one framework are chosen.
    pub fn is_ready(&self) -> bool {
        self.industry.is_some() && !self.frameworks.is_empty()
    }
}

/// Operating-model options of the managed-service composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OperatingInput {
    pub coverage: CoverageTier,
    pub triage_sla: SlaTier,
    pub change_sla: SlaTier,
    pub dsar_sla: SlaTier,
    pub reporting_sla: SlaTier,
}

impl OperatingInput {
    pub fn sla(&self, stream: SlaStream) -> SlaTier {
        match stream {
            SlaStream::Triage => self.triage_sla,
            SlaStream::Change => self.change_sla,
            SlaStream::Dsar => self.dsar_sla,
            SlaStream::Reporting => self.reporting_sla,
        }
    }

    pub fn set_sla(&mut self, stream: SlaStream, tier: SlaTier) {
        match stream {
            SlaStream::Triage => self.triage_sla = tier,
            SlaStream::Change => self.change_sla = tier,
            SlaStream::Dsar => self.dsar_sla = tier,
            SlaStream::Reporting => self.reporting_sla = tier,
        }
    }
}

/// The full input record handed to the formula.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EstimatorInput {
    pub scope: ScopeInput,
    pub operating: OperatingInput,
}
