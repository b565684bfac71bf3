//! Simulated submission lifecycle under a paused tokio clock.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use govsite_core::errors::FormError;
use govsite_core::events::types::{
    FormCancelledEvent, FormResetEvent, FormSubmittedEvent, FormSucceededEvent,
};
use govsite_core::events::{EventDispatcher, SiteEventHandler};
use govsite_forms::*;
use tokio::time::Instant;

#[derive(Default)]
struct Recorder {
    log: Mutex<Vec<String>>,
}

impl Recorder {
    fn entries(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

impl SiteEventHandler for Recorder {
    fn on_form_submitted(&self, e: &FormSubmittedEvent) {
        self.log.lock().unwrap().push(format!("submitted:{}", e.form));
    }
    fn on_form_succeeded(&self, e: &FormSucceededEvent) {
        self.log.lock().unwrap().push(format!("succeeded:{}", e.form));
    }
    fn on_form_reset(&self, e: &FormResetEvent) {
        self.log.lock().unwrap().push(format!("reset:{}", e.form));
    }
    fn on_form_cancelled(&self, e: &FormCancelledEvent) {
        self.log
            .lock()
            .unwrap()
            .push(format!("cancelled:{}:{}", e.form, e.phase));
    }
}

fn recorded() -> (Arc<Recorder>, Arc<EventDispatcher>) {
    let recorder = Arc::new(Recorder::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(recorder.clone());
    (recorder, Arc::new(dispatcher))
}

fn request() -> ContactRequest {
    ContactRequest {
        name: "Grace Hopper".into(),
        email: "grace@example.com".into(),
        company: None,
        topic: InquiryTopic::ManagedService,
        message: "Quote for 24x7 coverage please.".into(),
    }
}

#[tokio::test(start_paused = true)]
async fn full_cycle_idle_submitting_success_idle() {
    let (recorder, dispatcher) = recorded();
    let form = ContactForm::new(FormDelays::default(), dispatcher);
    let mut rx = form.subscribe();
    let started = Instant::now();

    form.submit(request()).unwrap();
    assert_eq!(form.phase(), FormPhase::Submitting);
    assert_eq!(form.state().submission, Some(request()));
    assert!(form.state().confirmation().is_none());

    rx.wait_for(|s| s.phase == FormPhase::Success).await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(1500));
    assert!(started.elapsed() < Duration::from_millis(1600));
    assert_eq!(form.state().confirmation(), Some(&request()));

    rx.wait_for(|s| s.phase == FormPhase::Idle).await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(4500));
    assert_eq!(form.state(), FormState::default());

    assert_eq!(
        recorder.entries(),
        vec!["submitted:contact", "succeeded:contact", "reset:contact"]
    );
}

#[tokio::test(start_paused = true)]
async fn second_submit_while_in_flight_is_refused() {
    let (_, dispatcher) = recorded();
    let form = ContactForm::new(FormDelays::from_millis(100, 100), dispatcher);

    form.submit(request()).unwrap();
    assert_eq!(form.submit(request()), Err(FormError::AlreadyInFlight));

    let mut rx = form.subscribe();
    rx.wait_for(|s| s.phase == FormPhase::Success).await.unwrap();
    assert_eq!(form.submit(request()), Err(FormError::AlreadyInFlight));

    rx.wait_for(|s| s.is_idle()).await.unwrap();
    assert!(form.submit(request()).is_ok());
}

#[tokio::test(start_paused = true)]
async fn blank_required_field_is_rejected_without_state_change() {
    let (recorder, dispatcher) = recorded();
    let form = ContactForm::new(FormDelays::default(), dispatcher);

    let mut incomplete = request();
    incomplete.name = "  ".into();
    assert_eq!(
        form.submit(incomplete),
        Err(FormError::MissingField { field: "name" })
    );
    assert_eq!(form.phase(), FormPhase::Idle);
    assert!(recorder.entries().is_empty());
}

#[tokio::test(start_paused = true)]
async fn unmount_mid_submit_stops_the_deferred_step() {
    let (recorder, dispatcher) = recorded();
    let form = ContactForm::new(FormDelays::default(), dispatcher);

    form.submit(request()).unwrap();
    tokio::time::sleep(Duration::from_millis(500)).await;
    form.unmount();

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(form.phase(), FormPhase::Submitting);
    assert_eq!(
        recorder.entries(),
        vec!["submitted:contact", "cancelled:contact:submitting"]
    );
    assert_eq!(form.submit(request()), Err(FormError::Unmounted));
}

#[tokio::test(start_paused = true)]
async fn unmount_during_success_skips_the_reset() {
    let (recorder, dispatcher) = recorded();
    let form = NewsletterForm::new(FormDelays::default(), dispatcher);
    let mut rx = form.subscribe();

    form.submit(NewsletterSignup {
        email: "news@example.com".into(),
    })
    .unwrap();
    rx.wait_for(|s| s.phase == FormPhase::Success).await.unwrap();
    form.unmount();

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(form.phase(), FormPhase::Success);
    assert_eq!(
        recorder.entries().last().map(String::as_str),
        Some("cancelled:newsletter:success")
    );
}

#[tokio::test(start_paused = true)]
async fn dropping_the_form_cancels_its_task() {
    let (recorder, dispatcher) = recorded();
    let form = ContactForm::new(FormDelays::default(), dispatcher);
    let rx = form.subscribe();

    form.submit(request()).unwrap();
    drop(form);

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(rx.borrow().phase, FormPhase::Submitting);
    assert_eq!(
        recorder.entries(),
        vec!["submitted:contact", "cancelled:contact:submitting"]
    );
}

#[test]
fn submit_outside_a_runtime_is_refused() {
    let form = ContactForm::new(FormDelays::default(), Arc::new(EventDispatcher::new()));
    assert_eq!(form.submit(request()), Err(FormError::NoRuntime));
    assert_eq!(form.phase(), FormPhase::Idle);
}

#[test]
fn state_serializes_phase_and_submission() {
    let state = FormState {
        phase: FormPhase::Success,
        submission: Some(NewsletterSignup {
            email: "a@b.c".into(),
        }),
    };
    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["phase"], "Success");
    assert_eq!(json["submission"]["email"], "a@b.c");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_submits_admit_exactly_one() {
    const CALLERS: usize = 16;

    let (recorder, dispatcher) = recorded();
    let form = Arc::new(ContactForm::new(
        FormDelays::from_millis(60_000, 60_000),
        dispatcher,
    ));
    let barrier = Arc::new(tokio::sync::Barrier::new(CALLERS));

    let mut tasks = Vec::with_capacity(CALLERS);
    for _ in 0..CALLERS {
        let form = Arc::clone(&form);
        let barrier = Arc::clone(&barrier);
        tasks.push(tokio::spawn(async move {
            barrier.wait().await;
            form.submit(request())
        }));
    }

    let mut accepted = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(()) => accepted += 1,
            Err(err) => assert_eq!(err, FormError::AlreadyInFlight),
        }
    }

    assert_eq!(accepted, 1);
    assert_eq!(form.phase(), FormPhase::Submitting);
    assert_eq!(
        recorder
            .entries()
            .iter()
            .filter(|e| e.starts_with("submitted:"))
            .count(),
        1
    );
}
