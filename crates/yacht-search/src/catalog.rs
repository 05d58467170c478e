//! Catalog — the listings and professionals the result pages search over.
//!
//! Stored as TOML:
//! ```toml
//! [[listing]]
//! id = "sunseeker-76"
//! kind = "sale"
//! price_minor = 189500000
//!
//! [[professional]]
//! id = "palma-surveys"
//! category = "surveyors"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::fields::GuestCount;
use crate::listing::{ListingCard, ListingKind, ListingRow, ProfessionalCard, ProfessionalRow};
use crate::mode::ServiceCategory;
use crate::route::Route;

const SEED: &str = include_str!("../data/listings.toml");

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default, rename = "listing")]
    pub listings: Vec<ListingRow>,
    #[serde(default, rename = "professional")]
    pub professionals: Vec<ProfessionalRow>,
}

/// What a route resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResults {
    Listings(Vec<ListingCard>),
    Professionals(Vec<ProfessionalCard>),
    /// Sell mode's static call-to-action page.
    SellCallToAction,
}

impl SearchResults {
    pub fn len(&self) -> usize {
        match self {
            Self::Listings(v) => v.len(),
            Self::Professionals(v) => v.len(),
            Self::SellCallToAction => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Catalog {
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| Error::TomlDecode {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// The catalog bundled with the binary.
    pub fn seed() -> Result<Self> {
        Self::from_toml_str(SEED, Path::new("<bundled listings.toml>"))
    }

    /// Load from `path`, falling back to the bundled seed when it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("catalog {} not found, using bundled listings", path.display());
            return Self::seed();
        }
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let catalog = Self::from_toml_str(&content, path)?;
        info!(
            "catalog loaded: {} listings, {} professionals from {}",
            catalog.listings.len(),
            catalog.professionals.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn search(&self, route: &Route) -> SearchResults {
        let results = match route {
            Route::Home => SearchResults::Listings(
                self.listings
                    .iter()
                    .filter(|r| r.featured)
                    .map(ListingCard::from)
                    .collect(),
            ),
            Route::Buy { q, location } => SearchResults::Listings(
                self.listings
                    .iter()
                    .filter(|r| r.kind == ListingKind::Sale)
                    .filter(|r| q.as_deref().map_or(true, |q| listing_matches_text(r, q)))
                    .filter(|r| location_matches(r.location.as_deref(), location.as_deref()))
                    .map(ListingCard::from)
                    .collect(),
            ),
            Route::Charter {
                location, guests, ..
            } => SearchResults::Listings(
                self.listings
                    .iter()
                    .filter(|r| r.kind == ListingKind::Charter)
                    .filter(|r| location_matches(r.location.as_deref(), location.as_deref()))
                    .filter(|r| fits_guests(r, *guests))
                    .map(ListingCard::from)
                    .collect(),
            ),
            Route::Services { service, location } => SearchResults::Professionals(
                self.professionals
                    .iter()
                    .filter(|p| category_matches(p.category, *service))
                    .filter(|p| location_matches(p.location.as_deref(), location.as_deref()))
                    .map(ProfessionalCard::from)
                    .collect(),
            ),
            Route::AddListing => SearchResults::SellCallToAction,
        };
        debug!("search {:?} → {} results", route, results.len());
        results
    }
}

/// Case-insensitive substring match, the same normalisation every filter uses.
pub fn text_matches(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    needle.is_empty() || haystack.to_lowercase().contains(&needle)
}

fn listing_matches_text(row: &ListingRow, q: &str) -> bool {
    [&row.name, &row.builder, &row.model, &row.description]
        .into_iter()
        .flatten()
        .any(|field| text_matches(field, q))
}

fn location_matches(listing: Option<&str>, wanted: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(w) => listing.is_some_and(|l| text_matches(l, w)),
    }
}

/// Unknown berth counts never exclude a listing.
fn fits_guests(row: &ListingRow, guests: Option<GuestCount>) -> bool {
    match (row.berths, guests) {
        (Some(berths), Some(g)) => berths >= g.get(),
        _ => true,
    }
}

fn category_matches(category: ServiceCategory, wanted: Option<ServiceCategory>) -> bool {
    wanted.map_or(true, |w| w == category)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_toml_str(
            r#"
            [[listing]]
            id = "a"
            kind = "sale"
            name = "Blue Horizon"
            builder = "Sunseeker"
            location = "Palma, Spain"
            price_minor = 150000000
            featured = true

            [[listing]]
            id = "b"
            kind = "charter"
            name = "Aurora"
            location = "Greek Islands"
            berths = 8
            price_minor = 2500000

            [[listing]]
            id = "c"
            kind = "charter"
            name = "Small Fry"
            location = "Greek Islands"
            berths = 2

            [[professional]]
            id = "p1"
            name = "Palma Surveys"
            category = "surveyors"
            location = "Palma"
            "#,
            Path::new("test.toml"),
        )
        .unwrap()
    }

    #[test]
    fn buy_filters_by_text_and_location() {
        let c = catalog();
        let r = c.search(&Route::Buy {
            q: Some("sunseeker".into()),
            location: Some("spain".into()),
        });
        assert_eq!(r.len(), 1);
        let r = c.search(&Route::Buy {
            q: None,
            location: Some("Croatia".into()),
        });
        assert!(r.is_empty());
    }

    #[test]
    fn charter_filters_by_berths() {
        let c = catalog();
        let r = c.search(&Route::Charter {
            location: Some("Greek Islands".into()),
            check_in: None,
            check_out: None,
            guests: Some(GuestCount::new(4)),
        });
        match r {
            SearchResults::Listings(cards) => {
                assert_eq!(cards.len(), 1);
                assert_eq!(cards[0].title, "Aurora");
                assert_eq!(cards[0].price, "€25,000 / week");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unfiltered_routes_return_everything_of_their_kind() {
        let c = catalog();
        assert_eq!(c.search(&Route::Buy { q: None, location: None }).len(), 1);
        assert_eq!(
            c.search(&Route::Services {
                service: None,
                location: None
            })
            .len(),
            1
        );
        assert_eq!(c.search(&Route::Home).len(), 1);
        assert_eq!(c.search(&Route::AddListing), SearchResults::SellCallToAction);
    }

    #[test]
    fn services_filter_by_category() {
        let c = catalog();
        let r = c.search(&Route::Services {
            service: Some(ServiceCategory::Brokers),
            location: None,
        });
        assert!(r.is_empty());
    }

    #[test]
    fn bundled_seed_parses() {
        let seed = Catalog::seed().unwrap();
        assert!(!seed.listings.is_empty());
        assert!(!seed.professionals.is_empty());
    }

    #[test]
    fn bad_toml_reports_path() {
        let err = Catalog::from_toml_str("[[listing]]\nid = 5", Path::new("bad.toml")).unwrap_err();
        assert!(err.to_string().contains("bad.toml"));
    }
}
