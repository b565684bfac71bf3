//! Page registry.

use govsite_estimator::{Industry, ScenarioId};
use govsite_forms::FormKind;
use serde::Serialize;

/// What a page renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PageKind {
    Home,
    Services,
    Pricing,
    About,
    Contact,
    Industry(Industry),
    /// A tool page hosting one estimator widget.
    Tool(ScenarioId),
    ManagedUseCase,
    Resource,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    pub path: &'static str,
    pub title: &'static str,
    pub kind: PageKind,
    /// Simulated form embedded in the page, if any.
    pub form: Option<FormKind>,
}

impl Page {
    pub const fn new(path: &'static str, title: &'static str, kind: PageKind) -> Self {
        Self {
            path,
            title,
            kind,
            form: None,
        }
    }

    pub const fn with_form(mut self, form: FormKind) -> Self {
        self.form = Some(form);
        self
    }

    pub fn scenario(&self) -> Option<ScenarioId> {
        match self.kind {
            PageKind::Tool(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == PageKind::NotFound
    }
}

/// Catch-all page for unknown paths.
pub static NOT_FOUND: Page = Page::new("*", "Page not found", PageKind::NotFound);

pub static PAGES: &[Page] = &[
    Page::new("/", "AI governance, operated", PageKind::Home),
    Page::new("/services", "Services", PageKind::Services),
    Page::new("/pricing", "Pricing", PageKind::Pricing),
    Page::new("/about", "About us", PageKind::About),
    Page::new("/contact", "Contact", PageKind::Contact).with_form(FormKind::Contact),
    // Industries
    Page::new(
        "/industries/financial-services",
        "Financial services",
        PageKind::Industry(Industry::FinancialServices),
    ),
    Page::new(
        "/industries/healthcare",
        "Healthcare",
        PageKind::Industry(Industry::Healthcare),
    ),
    Page::new(
        "/industries/public-sector",
        "Public sector",
        PageKind::Industry(Industry::PublicSector),
    ),
    Page::new(
        "/industries/technology",
        "Technology",
        PageKind::Industry(Industry::Technology),
    ),
    Page::new(
        "/industries/retail",
        "Retail",
        PageKind::Industry(Industry::Retail),
    ),
    Page::new(
        "/industries/energy",
        "Energy",
        PageKind::Industry(Industry::Energy),
    ),
    // Tools
    Page::new(
        "/tools/assessment-planner",
        "Assessment planner",
        PageKind::Tool(ScenarioId::AssessmentPlanner),
    ),
    Page::new(
        "/tools/managed-service-composer",
        "Managed service composer",
        PageKind::Tool(ScenarioId::ManagedServiceComposer),
    ),
    Page::new(
        "/tools/evidence-pack-builder",
        "Evidence pack builder",
        PageKind::Tool(ScenarioId::EvidencePackBuilder),
    ),
    Page::new(
        "/tools/scoping-configurator",
        "Scoping configurator",
        PageKind::Tool(ScenarioId::ScopingConfigurator),
    ),
    // Managed-service use cases
    Page::new(
        "/managed-services/model-risk-monitoring",
        "Model risk monitoring",
        PageKind::ManagedUseCase,
    ),
    Page::new(
        "/managed-services/dsar-operations",
        "DSAR operations",
        PageKind::ManagedUseCase,
    ),
    Page::new(
        "/managed-services/regulatory-reporting",
        "Regulatory reporting",
        PageKind::ManagedUseCase,
    ),
    Page::new(
        "/managed-services/incident-triage",
        "AI incident triage",
        PageKind::ManagedUseCase,
    ),
    // Resources
    Page::new(
        "/resources/ai-governance-guide",
        "AI governance guide",
        PageKind::Resource,
    )
    .with_form(FormKind::Newsletter),
    Page::new(
        "/resources/eu-ai-act-readiness",
        "EU AI Act readiness",
        PageKind::Resource,
    )
    .with_form(FormKind::Newsletter),
    Page::new("/resources/faq", "Frequently asked questions", PageKind::Resource),
];
