//! EventDispatcher: synchronous event dispatch, zero cost when empty.

use std::sync::Arc;

use super::handler::SiteEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn SiteEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn SiteEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler does not prevent later handlers from running.
    fn emit<F: Fn(&dyn SiteEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!("event handler panicked; continuing with remaining handlers");
            }
        }
    }

    // ---- Estimators ----
    pub fn emit_plan_generated(&self, event: &PlanGeneratedEvent) {
        self.emit(|h| h.on_plan_generated(event));
    }

    pub fn emit_plan_exported(&self, event: &PlanExportedEvent) {
        self.emit(|h| h.on_plan_exported(event));
    }

    // ---- Forms ----
    pub fn emit_form_submitted(&self, event: &FormSubmittedEvent) {
        self.emit(|h| h.on_form_submitted(event));
    }

    pub fn emit_form_succeeded(&self, event: &FormSucceededEvent) {
        self.emit(|h| h.on_form_succeeded(event));
    }

    pub fn emit_form_reset(&self, event: &FormResetEvent) {
        self.emit(|h| h.on_form_reset(event));
    }

    pub fn emit_form_cancelled(&self, event: &FormCancelledEvent) {
        self.emit(|h| h.on_form_cancelled(event));
    }

    // ---- Routing ----
    pub fn emit_route_not_found(&self, event: &RouteNotFoundEvent) {
        self.emit(|h| h.on_route_not_found(event));
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
