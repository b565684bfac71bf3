//! EstimatorWidget: per-page estimator state.
//!
//! Owns the live input, the currently displayed plan, and the export of
//! that displayed plan. Editing the input never touches the displayed plan;
//! only `generate` replaces it.

use std::sync::Arc;

use govsite_core::errors::{EstimatorError, ExportError};
use govsite_core::events::types::{PlanExportedEvent, PlanGeneratedEvent};
use govsite_core::events::EventDispatcher;
use tracing::debug;

use crate::catalog::{CoverageTier, Framework, Industry, Integration, Sensitivity, SlaStream, SlaTier};
use crate::export::ExportArtifact;
use crate::formula;
use crate::input::EstimatorInput;
use crate::plan::DerivedPlan;
use crate::weights::{ScenarioId, ScenarioWeights, StaticWeights, WeightsProvider};

pub struct EstimatorWidget {
    weights: &'static ScenarioWeights,
    input: EstimatorInput,
    displayed: Option<DerivedPlan>,
    dispatcher: Arc<EventDispatcher>,
}

impl EstimatorWidget {
    /// Mount a widget for a built-in scenario with default input.
    pub fn new(id: ScenarioId) -> Self {
        Self::with_provider(id, &StaticWeights)
    }

    /// Mount a widget whose table comes from `provider`.
    pub fn with_provider(id: ScenarioId, provider: &dyn WeightsProvider) -> Self {
        Self {
            weights: provider.weights(id),
            input: EstimatorInput::default(),
            displayed: None,
            dispatcher: Arc::new(EventDispatcher::new()),
        }
    }

    /// Attach a shared event dispatcher.
    pub fn with_dispatcher(mut self, dispatcher: Arc<EventDispatcher>) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    pub fn scenario(&self) -> ScenarioId {
        self.weights.id
    }

    pub fn weights(&self) -> &'static ScenarioWeights {
        self.weights
    }

    pub fn input(&self) -> &EstimatorInput {
        &self.input
    }

    /// The plan currently on screen, if one was generated.
    pub fn displayed(&self) -> Option<&DerivedPlan> {
        self.displayed.as_ref()
    }

    // ---- Input ----

    pub fn set_industry(&mut self, industry: Option<Industry>) {
        self.input.scope.industry = industry;
    }

    /// Select an industry by slug or label; an empty string clears it.
    pub fn select_industry(&mut self, value: &str) -> Result<(), EstimatorError> {
        let industry = if value.trim().is_empty() {
            None
        } else {
            Some(value.parse()?)
        };
        self.set_industry(industry);
        Ok(())
    }

    pub fn set_regions(&mut self, regions: u32) {
        self.input.scope.set_regions(regions);
    }

    pub fn set_agents(&mut self, agents: u32) {
        self.input.scope.set_agents(agents);
    }

    pub fn set_sensitivity(&mut self, sensitivity: Sensitivity) {
        self.input.scope.sensitivity = sensitivity;
    }

    pub fn toggle_framework(&mut self, framework: Framework) -> bool {
        self.input.scope.toggle_framework(framework)
    }

    pub fn toggle_integration(&mut self, integration: Integration) -> bool {
        self.input.scope.toggle_integration(integration)
    }

    pub fn set_coverage(&mut self, coverage: CoverageTier) {
        self.input.operating.coverage = coverage;
    }

    pub fn set_sla(&mut self, stream: SlaStream, tier: SlaTier) {
        self.input.operating.set_sla(stream, tier);
    }

    /// Replace the whole input record.
    pub fn set_input(&mut self, input: EstimatorInput) {
        self.input = input;
    }

    /// Restore the default input and clear the displayed plan.
    pub fn reset(&mut self) {
        self.input = EstimatorInput::default();
        self.displayed = None;
    }

    // ---- Generate ----

    /// Whether the generate action is enabled.
    pub fn can_generate(&self) -> bool {
        self.input.scope.is_ready()
    }

    /// Required fields that keep generate disabled.
    pub fn missing_requirements(&self) -> Vec<&'static str> {
        self.input.scope.missing_requirements()
    }

    /// Live recomputation for re-rendering; does not change the displayed plan.
    pub fn preview(&self) -> DerivedPlan {
        formula::estimate(self.weights, &self.input)
    }

    /// Compute the plan for the current input and display it.
    pub fn generate(&mut self) -> Result<&DerivedPlan, EstimatorError> {
        if !self.can_generate() {
            return Err(EstimatorError::GenerateDisabled {
                missing: self.missing_requirements().join(", "),
            });
        }

        let plan = formula::estimate(self.weights, &self.input);
        debug!(
            scenario = %plan.scenario,
            multiplier = plan.multiplier,
            duration = plan.duration,
            "estimate computed"
        );
        self.dispatcher.emit_plan_generated(&PlanGeneratedEvent {
            scenario: plan.scenario.to_string(),
            duration: plan.duration,
            unit: plan.unit.to_string(),
            band: plan.band.to_string(),
        });

        Ok(self.displayed.insert(plan))
    }

    // ---- Export ----

    /// Render the displayed plan with the scenario's fixed filename and format.
    pub fn export(&self) -> Result<ExportArtifact, ExportError> {
        let plan = self
            .displayed
            .as_ref()
            .ok_or_else(|| ExportError::NothingToExport {
                scenario: self.weights.id.to_string(),
            })?;

        let spec = self.weights.export;
        let artifact = ExportArtifact {
            filename: spec.filename.to_string(),
            content_type: spec.format.content_type(),
            body: spec.format.render(plan),
        };

        self.dispatcher.emit_plan_exported(&PlanExportedEvent {
            scenario: plan.scenario.to_string(),
            filename: artifact.filename.clone(),
            bytes: artifact.len(),
        });
        Ok(artifact)
    }
}

impl std::fmt::Debug for EstimatorWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EstimatorWidget")
            .field("scenario", &self.weights.id)
            .field("input", &self.input)
            .field("displayed", &self.displayed.is_some())
            .finish()
    }
}
