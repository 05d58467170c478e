//! Query Builder — turns the active mode's field values into a navigation
//! target. Empty and default values are left out entirely.

use std::fmt;

use url::form_urlencoded;

use crate::calendar::format_iso;
use crate::fields::FieldValues;

/// A path plus ordered query params, e.g. `/buy?location=Spain`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub path: &'static str,
    pub params: Vec<(&'static str, String)>,
}

impl Navigation {
    pub fn new(path: &'static str) -> Self {
        Self {
            path,
            params: Vec::new(),
        }
    }

    /// Add a param unless the value is blank.
    fn push(&mut self, key: &'static str, value: &str) {
        let value = value.trim();
        if !value.is_empty() {
            self.params.push((key, value.to_string()));
        }
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Form-encoded query string without the leading `?`.
    pub fn query_string(&self) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        for (k, v) in &self.params {
            ser.append_pair(k, v);
        }
        ser.finish()
    }
}

impl fmt::Display for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.params.is_empty() {
            f.write_str(self.path)
        } else {
            write!(f, "{}?{}", self.path, self.query_string())
        }
    }
}

/// Receives a built navigation and performs the actual view transition.
pub trait Navigator {
    fn navigate(&mut self, nav: Navigation);
}

/// Build the navigation for the current field values.
///
/// Param order is fixed per mode:
/// - Buy: `q`, `location`
/// - Charter: `location`, `checkin`, `checkout`, `guests`
/// - Professionals: `service`, `location`
/// - Sell: `/add-listing`, never a query
pub fn build_navigation(values: &FieldValues) -> Navigation {
    let mut nav = Navigation::new(values.mode().target_path());
    match values {
        FieldValues::Buy(f) => {
            nav.push("q", &f.query);
            nav.push("location", &f.location);
        }
        FieldValues::Sell => {}
        FieldValues::Charter(f) => {
            nav.push("location", &f.location);
            if let Some(d) = f.dates.check_in {
                nav.push("checkin", &format_iso(d));
            }
            if let Some(d) = f.dates.check_out {
                nav.push("checkout", &format_iso(d));
            }
            if !f.guests.is_default() {
                nav.push("guests", &f.guests.get().to_string());
            }
        }
        FieldValues::Professionals(f) => {
            nav.push("service", f.service.slug());
            nav.push("location", &f.location);
        }
    }
    nav
}
