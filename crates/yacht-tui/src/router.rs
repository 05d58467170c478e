//! Router — the navigation collaborator behind the search widget's submit.
//!
//! Parses the built navigation into a `Route`, resolves it against the
//! catalog and keeps a small back-stack of visited pages.

use tracing::{info, warn};
use yacht_search::catalog::{Catalog, SearchResults};
use yacht_search::query::{Navigation, Navigator};
use yacht_search::route::Route;

const HISTORY_MAX: usize = 32;

/// A resolved page: where we are and what it shows.
#[derive(Debug, Clone)]
pub struct Page {
    pub url: String,
    pub route: Route,
    pub results: SearchResults,
}

#[derive(Default)]
pub struct Router {
    catalog: Option<Catalog>,
    page: Option<Page>,
    history: Vec<String>,
    /// Set when the last navigation could not be resolved.
    pub last_error: Option<String>,
}

impl Router {
    pub fn page(&self) -> Option<&Page> {
        self.page.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.catalog.is_some()
    }

    /// Install a freshly loaded catalog and re-resolve the current page.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = Some(catalog);
        if let Some(url) = self.page.as_ref().map(|p| p.url.clone()) {
            self.resolve(&url);
        } else {
            self.resolve("/");
        }
    }

    /// Pop back to the previous page. Returns false when there is none.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(url) => {
                self.resolve(&url);
                true
            }
            None => false,
        }
    }

    fn resolve(&mut self, url: &str) {
        match Route::parse(url) {
            Ok(route) => {
                let results = match &self.catalog {
                    Some(c) => c.search(&route),
                    None => SearchResults::Listings(Vec::new()),
                };
                self.last_error = None;
                self.page = Some(Page {
                    url: url.to_string(),
                    route,
                    results,
                });
            }
            Err(e) => {
                warn!("navigation failed: {}", e);
                self.last_error = Some(e.to_string());
            }
        }
    }
}

impl Navigator for Router {
    fn navigate(&mut self, nav: Navigation) {
        let url = nav.to_string();
        info!("navigate → {}", url);
        if let Some(prev) = self.page.as_ref().map(|p| p.url.clone()) {
            if prev != url {
                self.history.push(prev);
                if self.history.len() > HISTORY_MAX {
                    self.history.remove(0);
                }
            }
        }
        self.resolve(&url);
    }
}
