//! Site: configuration, routes, and page mounting.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use govsite_core::config::SiteConfig;
use govsite_core::errors::{ConfigError, ExportError};
use govsite_core::events::types::RouteNotFoundEvent;
use govsite_core::events::{EventDispatcher, TracingEventHandler};
use govsite_estimator::{EstimatorWidget, ExportArtifact};
use govsite_forms::{ContactForm, FormDelays, FormKind, NewsletterForm};
use tracing::{debug, info};

use crate::pages::Page;
use crate::routes::RouteTable;

/// The assembled site.
pub struct Site {
    config: SiteConfig,
    routes: RouteTable,
    dispatcher: Arc<EventDispatcher>,
}

impl Site {
    /// Build a site whose events are logged through `tracing`.
    pub fn new(config: SiteConfig) -> Self {
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(Arc::new(TracingEventHandler));
        Self {
            config,
            routes: RouteTable::standard(),
            dispatcher: Arc::new(dispatcher),
        }
    }

    /// Load `govsite.toml` from `root` (plus env overrides) and build the site.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        Ok(Self::new(SiteConfig::load(root)?))
    }

    /// Replace the event dispatcher shared by mounted widgets and forms.
    pub fn with_dispatcher(mut self, dispatcher: Arc<EventDispatcher>) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn dispatcher(&self) -> &Arc<EventDispatcher> {
        &self.dispatcher
    }

    /// Resolve `path`; unknown paths yield the not-found page.
    pub fn resolve(&self, path: &str) -> &'static Page {
        let page = self.routes.resolve(path);
        if page.is_not_found() {
            self.dispatcher.emit_route_not_found(&RouteNotFoundEvent {
                path: path.to_string(),
            });
        }
        page
    }

    /// Resolve `path` and give the page its own widget and form instances.
    pub fn mount(&self, path: &str) -> MountedPage {
        let page = self.resolve(path);
        debug!(path, page = page.title, "mounting page");

        let widget = page.scenario().map(|id| {
            EstimatorWidget::new(id).with_dispatcher(Arc::clone(&self.dispatcher))
        });
        let delays = FormDelays::from(&self.config.forms);
        let contact = (page.form == Some(FormKind::Contact))
            .then(|| ContactForm::new(delays, Arc::clone(&self.dispatcher)));
        let newsletter = (page.form == Some(FormKind::Newsletter))
            .then(|| NewsletterForm::new(delays, Arc::clone(&self.dispatcher)));

        MountedPage {
            page,
            widget,
            contact,
            newsletter,
        }
    }

    /// Directory exports are saved into.
    pub fn export_dir(&self) -> PathBuf {
        PathBuf::from(self.config.export.effective_output_dir())
    }

    /// Save an exported artifact into the configured export directory.
    pub fn save_export(&self, artifact: &ExportArtifact) -> Result<PathBuf, ExportError> {
        let path = artifact.write_to(&self.export_dir())?;
        info!(path = %path.display(), "export saved");
        Ok(path)
    }
}

impl std::fmt::Debug for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Site")
            .field("routes", &self.routes.len())
            .field("export_dir", &self.export_dir())
            .finish()
    }
}

/// A page instance with its own state.
///
/// Each mount gets fresh state; nothing is shared between two mounts of
/// the same path. Dropping the page unmounts its forms, cancelling any
/// pending submission step.
#[derive(Debug)]
pub struct MountedPage {
    pub page: &'static Page,
    pub widget: Option<EstimatorWidget>,
    pub contact: Option<ContactForm>,
    pub newsletter: Option<NewsletterForm>,
}

impl MountedPage {
    /// Explicit unmount; equivalent to dropping.
    pub fn unmount(self) {
        if let Some(form) = &self.contact {
            form.unmount();
        }
        if let Some(form) = &self.newsletter {
            form.unmount();
        }
    }
}
