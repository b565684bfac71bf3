//! Routing, mounting, and export saving through the assembled site.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use govsite_core::config::SiteConfig;
use govsite_core::events::types::{FormCancelledEvent, RouteNotFoundEvent};
use govsite_core::events::{EventDispatcher, SiteEventHandler};
use govsite_estimator::{Framework, Industry, ScenarioId};
use govsite_forms::{ContactRequest, FormPhase, InquiryTopic};
use govsite_site::*;
use tempfile::TempDir;

#[derive(Default)]
struct Counter {
    not_found: AtomicUsize,
    cancelled: AtomicUsize,
}

impl SiteEventHandler for Counter {
    fn on_route_not_found(&self, _event: &RouteNotFoundEvent) {
        self.not_found.fetch_add(1, Ordering::SeqCst);
    }

    fn on_form_cancelled(&self, _event: &FormCancelledEvent) {
        self.cancelled.fetch_add(1, Ordering::SeqCst);
    }
}

fn counted_site(config: SiteConfig) -> (Arc<Counter>, Site) {
    let counter = Arc::new(Counter::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(counter.clone());
    (counter, Site::new(config).with_dispatcher(Arc::new(dispatcher)))
}

#[test]
fn known_paths_resolve_to_their_pages() {
    let site = Site::new(SiteConfig::default());
    assert_eq!(site.resolve("/").kind, PageKind::Home);
    assert_eq!(site.resolve("/pricing/").kind, PageKind::Pricing);
    assert_eq!(
        site.resolve("/industries/healthcare?src=nav").kind,
        PageKind::Industry(Industry::Healthcare)
    );
    assert_eq!(
        site.resolve("/tools/evidence-pack-builder").kind,
        PageKind::Tool(ScenarioId::EvidencePackBuilder)
    );
    assert_eq!(
        site.resolve("/managed-services/dsar-operations").kind,
        PageKind::ManagedUseCase
    );
}

#[test]
fn every_industry_page_resolves() {
    let site = Site::new(SiteConfig::default());
    for industry in Industry::ALL {
        let page = site.resolve(&format!("/industries/{}/", industry.slug()));
        assert_eq!(page.kind, PageKind::Industry(*industry));
    }
}

#[test]
fn unknown_paths_fall_through_to_not_found() {
    let (counter, site) = counted_site(SiteConfig::default());

    assert!(site.resolve("/blog/2024/some-post").is_not_found());
    assert!(site.resolve("/tools/pricing-wizard").is_not_found());
    assert!(!site.resolve("/about").is_not_found());

    assert_eq!(counter.not_found.load(Ordering::SeqCst), 2);
}

#[test]
fn tool_pages_mount_their_own_widget() {
    let site = Site::new(SiteConfig::default());
    for id in ScenarioId::ALL {
        let mounted = site.mount(&format!("/tools/{id}"));
        let widget = mounted.widget.as_ref().unwrap();
        assert_eq!(widget.scenario(), *id);
        assert!(mounted.contact.is_none());
    }

    let home = site.mount("/");
    assert!(home.widget.is_none());
    assert!(home.contact.is_none());
    assert!(home.newsletter.is_none());
}

#[test]
fn mounts_do_not_share_state() {
    let site = Site::new(SiteConfig::default());
    let mut first = site.mount("/tools/assessment-planner");
    let second = site.mount("/tools/assessment-planner");

    let widget = first.widget.as_mut().unwrap();
    widget.set_industry(Some(Industry::Technology));
    widget.toggle_framework(Framework::Iso42001);
    widget.generate().unwrap();

    let other = second.widget.as_ref().unwrap();
    assert!(other.displayed().is_none());
    assert!(!other.can_generate());
}

#[test]
fn form_pages_mount_forms_with_configured_delays() {
    let config = SiteConfig::from_toml("[forms]\nsubmit_delay_ms = 200\n").unwrap();
    let site = Site::new(config);

    let contact = site.mount("/contact");
    let form = contact.contact.as_ref().unwrap();
    assert_eq!(form.delays().submit, Duration::from_millis(200));
    assert_eq!(form.delays().reset, Duration::from_millis(3000));
    assert!(contact.newsletter.is_none());

    let guide = site.mount("/resources/ai-governance-guide/");
    assert!(guide.newsletter.is_some());
    assert!(guide.contact.is_none());
}

#[tokio::test(start_paused = true)]
async fn dropping_a_mounted_page_cancels_pending_submission() {
    let (counter, site) = counted_site(SiteConfig::default());
    let page = site.mount("/contact");
    let form = page.contact.as_ref().unwrap();
    let rx = form.subscribe();

    form.submit(ContactRequest {
        name: "Alan".into(),
        email: "alan@example.com".into(),
        company: Some("Bletchley".into()),
        topic: InquiryTopic::EvidencePack,
        message: "Need a SOC 2 evidence pack.".into(),
    })
    .unwrap();
    page.unmount();

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(rx.borrow().phase, FormPhase::Submitting);
    assert_eq!(counter.cancelled.load(Ordering::SeqCst), 1);
}

#[test]
fn save_export_writes_into_configured_dir() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("downloads");
    let config = SiteConfig::from_toml(&format!(
        "[export]\noutput_dir = {:?}\n",
        out.display().to_string()
    ))
    .unwrap();
    let site = Site::new(config);
    assert_eq!(site.export_dir(), out);

    let mut page = site.mount("/tools/managed-service-composer");
    let widget = page.widget.as_mut().unwrap();
    widget.set_industry(Some(Industry::FinancialServices));
    widget.toggle_framework(Framework::Gdpr);
    widget.generate().unwrap();
    let artifact = widget.export().unwrap();

    let path = site.save_export(&artifact).unwrap();
    assert_eq!(path, out.join("managed-governance-runbook.md"));
    assert!(std::fs::read_to_string(path)
        .unwrap()
        .starts_with("# Managed Governance Runbook"));
}

#[test]
fn load_reads_project_file() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("govsite.toml"),
        "[forms]\nreset_delay_ms = 10\n",
    )
    .unwrap();

    let site = Site::load(tmp.path()).unwrap();
    assert_eq!(site.config().forms.effective_reset_delay_ms(), 10);
    assert_eq!(site.routes().len(), PAGES.len());
}
