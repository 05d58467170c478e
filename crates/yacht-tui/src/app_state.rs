//! AppState — shared read-only data passed to all components during render/event.
//!
//! Components read this for the search widget and the current page, but
//! never mutate it. The App event-loop is the only thing that writes to it.

use yacht_search::widget::SearchWidget;

use crate::action::HeroSlot;
use crate::router::Router;
use crate::widgets::status_bar::InputMode;

pub struct AppState {
    // ── Search ──────────────────────────────────────────────────────────────
    pub search: SearchWidget,
    /// Destinations offered by the location panel.
    pub locations: Vec<String>,

    // ── Pages ───────────────────────────────────────────────────────────────
    pub router: Router,

    // ── UI mode ─────────────────────────────────────────────────────────────
    pub input_mode: InputMode,
    pub focused_slot: Option<HeroSlot>,
}

impl AppState {
    /// Destinations matching the location text typed so far.
    pub fn location_suggestions(&self) -> Vec<&str> {
        let typed = self
            .search
            .values()
            .text(yacht_search::fields::FieldKey::Location)
            .unwrap_or("");
        self.locations
            .iter()
            .map(String::as_str)
            .filter(|l| yacht_search::catalog::text_matches(l, typed))
            .collect()
    }

    pub fn last_url(&self) -> Option<&str> {
        self.router.page().map(|p| p.url.as_str())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::NaiveDate;
    use yacht_search::mode::SearchMode;

    pub fn state() -> AppState {
        AppState {
            search: SearchWidget::with_mode(
                SearchMode::Charter,
                NaiveDate::from_ymd_opt(2026, 5, 20).unwrap(),
            ),
            locations: vec![
                "Greek Islands".to_string(),
                "Croatia".to_string(),
                "Caribbean".to_string(),
            ],
            router: Router::default(),
            input_mode: InputMode::Normal,
            focused_slot: None,
        }
    }

    #[test]
    fn suggestions_follow_typed_location() {
        let mut s = state();
        assert_eq!(s.location_suggestions().len(), 3);
        s.search
            .set_text(yacht_search::fields::FieldKey::Location, "cro");
        assert_eq!(s.location_suggestions(), vec!["Croatia"]);
    }
}
