//! Event payload types.

/// Payload for `on_plan_generated`.
#[derive(Debug, Clone)]
pub struct PlanGeneratedEvent {
    pub scenario: String,
    pub duration: u32,
    pub unit: String,
    pub band: String,
}

/// Payload for `on_plan_exported`.
#[derive(Debug, Clone)]
pub struct PlanExportedEvent {
    pub scenario: String,
    pub filename: String,
    pub bytes: usize,
}

/// Payload for `on_form_submitted`.
#[derive(Debug, Clone)]
pub struct FormSubmittedEvent {
    pub form: String,
    pub summary: String,
}

/// Payload for `on_form_succeeded`.
#[derive(Debug, Clone)]
pub struct FormSucceededEvent {
    pub form: String,
}

/// Payload for `on_form_reset`.
#[derive(Debug, Clone)]
pub struct FormResetEvent {
    pub form: String,
}

/// Payload for `on_form_cancelled`. `phase` is the phase the form was in
/// when its deferred task stopped.
#[derive(Debug, Clone)]
pub struct FormCancelledEvent {
    pub form: String,
    pub phase: String,
}

/// Payload for `on_route_not_found`.
#[derive(Debug, Clone)]
pub struct RouteNotFoundEvent {
    pub path: String,
}
