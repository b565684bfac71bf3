//! SiteEventHandler trait with no-op defaults.

use super::types::*;

/// Receives site events. Every method defaults to a no-op so handlers
/// implement only what they care about.
pub trait SiteEventHandler: Send + Sync {
    fn on_plan_generated(&self, _event: &PlanGeneratedEvent) {}
    fn on_plan_exported(&self, _event: &PlanExportedEvent) {}

    fn on_form_submitted(&self, _event: &FormSubmittedEvent) {}
    fn on_form_succeeded(&self, _event: &FormSucceededEvent) {}
    fn on_form_reset(&self, _event: &FormResetEvent) {}
    fn on_form_cancelled(&self, _event: &FormCancelledEvent) {}

    fn on_route_not_found(&self, _event: &RouteNotFoundEvent) {}
}
