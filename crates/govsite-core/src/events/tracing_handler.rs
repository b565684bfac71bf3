//! Handler that writes every event to `tracing`.
//!
//! Simulated submissions are never transmitted anywhere; this log line is
//! their only trace.

use super::handler::SiteEventHandler;
use super::types::*;

pub struct TracingEventHandler;

impl SiteEventHandler for TracingEventHandler {
    fn on_plan_generated(&self, event: &PlanGeneratedEvent) {
        tracing::info!(
            scenario = %event.scenario,
            duration = event.duration,
            unit = %event.unit,
            band = %event.band,
            "plan generated"
        );
    }

    fn on_plan_exported(&self, event: &PlanExportedEvent) {
        tracing::info!(
            scenario = %event.scenario,
            filename = %event.filename,
            bytes = event.bytes,
            "plan exported"
        );
    }

    fn on_form_submitted(&self, event: &FormSubmittedEvent) {
        tracing::info!(form = %event.form, summary = %event.summary, "form submitted");
    }

    fn on_form_succeeded(&self, event: &FormSucceededEvent) {
        tracing::info!(form = %event.form, "form submission succeeded");
    }

    fn on_form_reset(&self, event: &FormResetEvent) {
        tracing::debug!(form = %event.form, "form reset");
    }

    fn on_form_cancelled(&self, event: &FormCancelledEvent) {
        tracing::debug!(form = %event.form, phase = %event.phase, "form task cancelled");
    }

    fn on_route_not_found(&self, event: &RouteNotFoundEvent) {
        tracing::warn!(path = %event.path, "no route matched");
    }
}
