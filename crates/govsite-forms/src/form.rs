//! SimulatedForm: captured submit, fixed delays, cancellable on unmount.

use std::sync::Arc;

use govsite_core::errors::FormError;
use govsite_core::events::types::{
    FormCancelledEvent, FormResetEvent, FormSubmittedEvent, FormSucceededEvent,
};
use govsite_core::events::EventDispatcher;
use govsite_core::traits::{Cancellable, CancellationToken};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tracing::debug;

use crate::delays::FormDelays;
use crate::payload::{FormKind, FormPayload};
use crate::state::{FormPhase, FormState};

/// A form whose submission is simulated with two fixed delays.
///
/// State is published on a `watch` channel. The deferred steps run on the
/// current tokio runtime and stop, without touching state, once the form is
/// unmounted or dropped.
pub struct SimulatedForm<P: FormPayload> {
    delays: FormDelays,
    state: Arc<watch::Sender<FormState<P>>>,
    token: CancellationToken,
    dispatcher: Arc<EventDispatcher>,
}

impl<P: FormPayload> SimulatedForm<P> {
    pub fn new(delays: FormDelays, dispatcher: Arc<EventDispatcher>) -> Self {
        let (state, _) = watch::channel(FormState::default());
        Self {
            delays,
            state: Arc::new(state),
            token: CancellationToken::new(),
            dispatcher,
        }
    }

    pub fn delays(&self) -> FormDelays {
        self.delays
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> FormState<P> {
        self.state.borrow().clone()
    }

    pub fn phase(&self) -> FormPhase {
        self.state.borrow().phase
    }

    /// Receiver that observes every phase change.
    pub fn subscribe(&self) -> watch::Receiver<FormState<P>> {
        self.state.subscribe()
    }

    pub fn is_mounted(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Capture `payload` and start the simulated submission.
    ///
    /// Must be called from within a tokio runtime. Returns once the form is
    /// `Submitting`; the later phases arrive on [`subscribe`](Self::subscribe).
    pub fn submit(&self, payload: P) -> Result<(), FormError> {
        if self.token.is_cancelled() {
            return Err(FormError::Unmounted);
        }
        if !self.state.borrow().is_idle() {
            return Err(FormError::AlreadyInFlight);
        }
        let handle = Handle::try_current().map_err(|_| FormError::NoRuntime)?;
        payload.validate()?;

        let kind = payload.kind();
        let summary = payload.summary();
        // Check and transition under the channel lock: concurrent submits
        // race here, and only one may leave Idle.
        let accepted = self.state.send_if_modified(move |state| {
            if !state.is_idle() {
                return false;
            }
            *state = FormState {
                phase: FormPhase::Submitting,
                submission: Some(payload),
            };
            true
        });
        if !accepted {
            return Err(FormError::AlreadyInFlight);
        }
        debug!(form = %kind, "submission captured");
        self.dispatcher.emit_form_submitted(&FormSubmittedEvent {
            form: kind.to_string(),
            summary,
        });

        handle.spawn(settle(
            kind,
            self.delays,
            Arc::clone(&self.state),
            self.token.clone(),
            Arc::clone(&self.dispatcher),
        ));
        Ok(())
    }

    /// Stop any pending step and refuse further submissions.
    pub fn unmount(&self) {
        if !self.token.is_cancelled() {
            debug!(phase = self.phase().name(), "form unmounted");
            self.token.cancel();
        }
    }
}

impl<P: FormPayload> Drop for SimulatedForm<P> {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

impl<P: FormPayload> std::fmt::Debug for SimulatedForm<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulatedForm")
            .field("phase", &self.phase())
            .field("delays", &self.delays)
            .field("mounted", &self.is_mounted())
            .finish()
    }
}

/// Deferred half of a submission: Submitting → Success → Idle.
async fn settle<P: FormPayload>(
    kind: FormKind,
    delays: FormDelays,
    state: Arc<watch::Sender<FormState<P>>>,
    token: CancellationToken,
    dispatcher: Arc<EventDispatcher>,
) {
    let form = kind.to_string();

    if !wait_or_cancel(&token, delays.submit).await {
        cancelled(&dispatcher, &form, FormPhase::Submitting);
        return;
    }
    state.send_modify(|s| s.phase = FormPhase::Success);
    debug!(%form, "form succeeded");
    dispatcher.emit_form_succeeded(&FormSucceededEvent { form: form.clone() });

    if !wait_or_cancel(&token, delays.reset).await {
        cancelled(&dispatcher, &form, FormPhase::Success);
        return;
    }
    state.send_replace(FormState::default());
    debug!(%form, "form reset");
    dispatcher.emit_form_reset(&FormResetEvent { form });
}

/// `true` if `delay` elapsed, `false` if the token fired first.
async fn wait_or_cancel(token: &CancellationToken, delay: std::time::Duration) -> bool {
    tokio::select! {
        biased;
        _ = token.cancelled() => false,
        _ = tokio::time::sleep(delay) => !token.is_cancelled(),
    }
}

fn cancelled(dispatcher: &EventDispatcher, form: &str, phase: FormPhase) {
    debug!(form, phase = phase.name(), "deferred form step cancelled");
    dispatcher.emit_form_cancelled(&FormCancelledEvent {
        form: form.to_string(),
        phase: phase.name().to_string(),
    });
}
