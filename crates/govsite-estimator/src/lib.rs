//! # govsite-estimator
//!
//! The estimator widgets behind the site's tool pages. Each scenario is a
//! constant weight table; one pure formula turns a table plus an input
//! snapshot into a [`DerivedPlan`]. The [`EstimatorWidget`] wraps that with
//! the generate guard and the export of the displayed plan.

pub mod catalog;
pub mod evidence;
pub mod export;
pub mod formats;
pub mod formula;
pub mod input;
pub mod plan;
pub mod weights;
pub mod widget;

pub use catalog::{
    CoverageTier, Framework, Industry, Integration, Sensitivity, SlaStream, SlaTier,
};
pub use export::{ExportArtifact, ExportFormat};
pub use formula::estimate;
pub use input::{EstimatorInput, OperatingInput, ScopeInput};
pub use plan::{
    AppliedFactor, Band, DerivedPlan, DurationUnit, EvidenceControl, EvidenceStatus, RoleAllocation,
    RosterUnit,
};
pub use weights::{ScenarioId, ScenarioWeights, StaticWeights, WeightsProvider};
pub use widget::EstimatorWidget;
