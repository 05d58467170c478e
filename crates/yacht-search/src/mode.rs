//! Search modes and the Professionals service categories.

use serde::{Deserialize, Serialize};

use crate::fields::FieldKey;

/// Top-level search context. Selects the field set and the submit target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Buy,
    Sell,
    Charter,
    Professionals,
}

impl SearchMode {
    pub const ALL: [SearchMode; 4] = [
        SearchMode::Buy,
        SearchMode::Sell,
        SearchMode::Charter,
        SearchMode::Professionals,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Buy => "Buy",
            Self::Sell => "Sell",
            Self::Charter => "Charter",
            Self::Professionals => "Professionals",
        }
    }

    /// Path the mode navigates to. Sell is a static link, not a search.
    pub fn target_path(self) -> &'static str {
        match self {
            Self::Buy => "/buy",
            Self::Sell => "/add-listing",
            Self::Charter => "/charter",
            Self::Professionals => "/services",
        }
    }

    /// Ordered field set rendered for this mode.
    pub fn fields(self) -> &'static [FieldKey] {
        match self {
            Self::Buy => &[FieldKey::Query, FieldKey::Location],
            Self::Sell => &[FieldKey::ListYacht],
            Self::Charter => &[
                FieldKey::Location,
                FieldKey::CheckIn,
                FieldKey::CheckOut,
                FieldKey::Guests,
            ],
            Self::Professionals => &[FieldKey::Service, FieldKey::Location],
        }
    }

    /// True for modes whose submit builds a query string.
    pub fn is_search(self) -> bool {
        !matches!(self, Self::Sell)
    }

    pub fn next(self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Charter,
            Self::Charter => Self::Professionals,
            Self::Professionals => Self::Buy,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Buy => Self::Professionals,
            Self::Sell => Self::Buy,
            Self::Charter => Self::Sell,
            Self::Professionals => Self::Charter,
        }
    }
}

impl std::str::FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            "charter" => Ok(Self::Charter),
            "professionals" | "services" => Ok(Self::Professionals),
            other => Err(format!("unknown search mode: {other}")),
        }
    }
}

/// Service category for the Professionals select field.
/// `All` is the zero value and never appears in a query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    #[default]
    All,
    Brokers,
    Surveyors,
    MarineEngineers,
    YachtManagement,
    CrewAgencies,
    Insurance,
    Finance,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 8] = [
        ServiceCategory::All,
        ServiceCategory::Brokers,
        ServiceCategory::Surveyors,
        ServiceCategory::MarineEngineers,
        ServiceCategory::YachtManagement,
        ServiceCategory::CrewAgencies,
        ServiceCategory::Insurance,
        ServiceCategory::Finance,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All services",
            Self::Brokers => "Yacht brokers",
            Self::Surveyors => "Surveyors",
            Self::MarineEngineers => "Marine engineers",
            Self::YachtManagement => "Yacht management",
            Self::CrewAgencies => "Crew agencies",
            Self::Insurance => "Marine insurance",
            Self::Finance => "Yacht finance",
        }
    }

    /// Value used in `service=` query params. Empty for `All`.
    pub fn slug(self) -> &'static str {
        match self {
            Self::All => "",
            Self::Brokers => "brokers",
            Self::Surveyors => "surveyors",
            Self::MarineEngineers => "marine-engineers",
            Self::YachtManagement => "yacht-management",
            Self::CrewAgencies => "crew-agencies",
            Self::Insurance => "insurance",
            Self::Finance => "finance",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| *c != Self::All && c.slug() == slug)
    }

    pub fn is_all(self) -> bool {
        self == Self::All
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_buy() {
        assert_eq!(SearchMode::default(), SearchMode::Buy);
    }

    #[test]
    fn mode_cycle_visits_every_mode() {
        let mut m = SearchMode::Buy;
        for expected in [
            SearchMode::Sell,
            SearchMode::Charter,
            SearchMode::Professionals,
            SearchMode::Buy,
        ] {
            m = m.next();
            assert_eq!(m, expected);
            assert_eq!(m.next().prev(), m);
        }
    }

    #[test]
    fn only_sell_is_not_a_search() {
        assert!(!SearchMode::Sell.is_search());
        assert_eq!(SearchMode::Sell.target_path(), "/add-listing");
        assert_eq!(SearchMode::Professionals.target_path(), "/services");
    }

    #[test]
    fn service_slugs_round_trip() {
        for c in ServiceCategory::ALL {
            if c.is_all() {
                assert_eq!(ServiceCategory::from_slug(c.slug()), None);
            } else {
                assert_eq!(ServiceCategory::from_slug(c.slug()), Some(c));
            }
        }
    }

    #[test]
    fn service_cycle_wraps() {
        assert_eq!(ServiceCategory::Finance.next(), ServiceCategory::All);
        assert_eq!(ServiceCategory::All.prev(), ServiceCategory::Finance);
    }

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("Charter".parse::<SearchMode>(), Ok(SearchMode::Charter));
        assert_eq!("services".parse::<SearchMode>(), Ok(SearchMode::Professionals));
        assert!("rent".parse::<SearchMode>().is_err());
    }
}
