//! Fixed path → page table with a catch-all.

use rustc_hash::FxHashMap;

use crate::pages::{Page, NOT_FOUND, PAGES};

/// Static route table.
///
/// Lookups ignore a query string or fragment and a trailing slash, so
/// `/pricing/?ref=nav` resolves like `/pricing`. Everything unregistered
/// resolves to [`NOT_FOUND`].
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: FxHashMap<&'static str, &'static Page>,
}

impl RouteTable {
    /// The site's routes.
    pub fn standard() -> Self {
        Self::from_pages(PAGES)
    }

    pub fn from_pages(pages: &'static [Page]) -> Self {
        let mut routes = FxHashMap::default();
        routes.reserve(pages.len());
        for page in pages {
            routes.insert(page.path, page);
        }
        Self { routes }
    }

    /// The registered page for `path`, if any.
    pub fn lookup(&self, path: &str) -> Option<&'static Page> {
        self.routes.get(normalize(path)).copied()
    }

    /// The page for `path`, falling back to the not-found page.
    pub fn resolve(&self, path: &str) -> &'static Page {
        self.lookup(path).unwrap_or(&NOT_FOUND)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Registered paths, sorted.
    pub fn paths(&self) -> Vec<&'static str> {
        let mut paths: Vec<_> = self.routes.keys().copied().collect();
        paths.sort_unstable();
        paths
    }
}

/// Strip query, fragment, and trailing slash. The root stays `/`.
pub fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = path[..end].trim();
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}
