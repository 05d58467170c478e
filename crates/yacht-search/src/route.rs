//! Typed view of a navigation string, used by the pages the search lands on.

use chrono::NaiveDate;
use url::form_urlencoded;

use crate::calendar::parse_iso;
use crate::error::{Error, Result};
use crate::fields::{GuestCount, MAX_GUESTS};
use crate::mode::ServiceCategory;
use crate::query::Navigation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Buy {
        q: Option<String>,
        location: Option<String>,
    },
    Charter {
        location: Option<String>,
        check_in: Option<NaiveDate>,
        check_out: Option<NaiveDate>,
        guests: Option<GuestCount>,
    },
    Services {
        service: Option<ServiceCategory>,
        location: Option<String>,
    },
    AddListing,
}

impl Route {
    /// Parse `path[?query]`. Unknown paths are an error; bad param values
    /// are dropped rather than failing the whole route.
    pub fn parse(target: &str) -> Result<Self> {
        let (path, query) = target.split_once('?').unwrap_or((target, ""));
        let params: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        let text = |key: &str| -> Option<String> {
            params
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let route = match path.trim_end_matches('/') {
            "" => Self::Home,
            "/buy" => Self::Buy {
                q: text("q"),
                location: text("location"),
            },
            "/charter" => Self::Charter {
                location: text("location"),
                check_in: text("checkin").as_deref().and_then(parse_iso),
                check_out: text("checkout").as_deref().and_then(parse_iso),
                guests: text("guests")
                    .and_then(|g| g.parse::<u8>().ok())
                    .filter(|g| (1..=MAX_GUESTS).contains(g))
                    .map(GuestCount::new),
            },
            "/services" => Self::Services {
                service: text("service").as_deref().and_then(ServiceCategory::from_slug),
                location: text("location"),
            },
            "/add-listing" => Self::AddListing,
            other => return Err(Error::UnknownRoute(other.to_string())),
        };
        Ok(route)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Featured yachts",
            Self::Buy { .. } => "Yachts for sale",
            Self::Charter { .. } => "Yacht charter",
            Self::Services { .. } => "Marine professionals",
            Self::AddListing => "Sell your yacht",
        }
    }
}

impl TryFrom<&Navigation> for Route {
    type Error = Error;

    fn try_from(nav: &Navigation) -> Result<Self> {
        Self::parse(&nav.to_string())
    }
}
