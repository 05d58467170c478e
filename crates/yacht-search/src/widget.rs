//! SearchWidget — the homepage hero's trip search.
//!
//! Owns the active mode's field values, the panel state machine and the
//! calendar view month. Every method is a synchronous state transition;
//! front-ends translate pointer/keyboard input into these calls and render
//! from the getters.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::calendar::{calendar_page, CalendarPage, CalendarView, DateRange, RangeSlot};
use crate::fields::{FieldKey, FieldKind, FieldValues, GuestCount};
use crate::mode::{SearchMode, ServiceCategory};
use crate::panel::{PanelEvent, PanelKey, PanelMachine};
use crate::query::{build_navigation, Navigation, Navigator};

#[derive(Debug, Clone)]
pub struct SearchWidget {
    values: FieldValues,
    panels: PanelMachine,
    view: CalendarView,
    today: NaiveDate,
}

impl SearchWidget {
    pub fn new(today: NaiveDate) -> Self {
        Self::with_mode(SearchMode::default(), today)
    }

    pub fn with_mode(mode: SearchMode, today: NaiveDate) -> Self {
        Self {
            values: FieldValues::for_mode(mode),
            panels: PanelMachine::new(),
            view: CalendarView::new(today),
            today,
        }
    }

    // ── Getters ───────────────────────────────────────────────────────────────

    pub fn mode(&self) -> SearchMode {
        self.values.mode()
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn open_panel(&self) -> PanelKey {
        self.panels.open()
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn view_month(&self) -> NaiveDate {
        self.view.month()
    }

    pub fn dates(&self) -> DateRange {
        self.values.dates().copied().unwrap_or_default()
    }

    pub fn guests(&self) -> Option<GuestCount> {
        self.values.guests()
    }

    /// Text shown on a field trigger, plus whether it is the placeholder.
    pub fn trigger_label(&self, key: FieldKey) -> (String, bool) {
        self.values.display(key)
    }

    /// The day grid for the open date panel, or `None` if no date panel is open.
    pub fn calendar_page(&self) -> Option<CalendarPage> {
        let open = self.panels.open();
        if !open.is_date() {
            return None;
        }
        Some(calendar_page(
            &self.view,
            &self.dates(),
            self.today,
            self.min_date(open),
        ))
    }

    /// Lower bound while picking check-out: the committed check-in.
    fn min_date(&self, panel: PanelKey) -> Option<NaiveDate> {
        match panel {
            PanelKey::CheckOut => self.dates().check_in,
            _ => None,
        }
    }

    // ── Mode / fields ─────────────────────────────────────────────────────────

    /// Switch mode. Field values reset and any open panel closes.
    pub fn set_mode(&mut self, mode: SearchMode) {
        if mode == self.mode() {
            return;
        }
        debug!("search mode {:?} → {:?}", self.mode(), mode);
        self.values = FieldValues::for_mode(mode);
        self.panels.reset();
    }

    /// Click on a field's trigger region: toggles that field's panel.
    /// Fields without a panel close whatever is open.
    pub fn click_field(&mut self, key: FieldKey) -> PanelKey {
        if !self.mode().fields().contains(&key) {
            return self.panels.open();
        }
        let open = self
            .panels
            .apply(PanelEvent::Toggle(key.panel()), self.mode());
        self.on_panel_opened(open);
        open
    }

    /// Open a field's panel without toggling it shut if already open
    /// (keyboard focus moving onto a field).
    pub fn focus_field(&mut self, key: FieldKey) -> PanelKey {
        let target = key.panel();
        if self.panels.open() == target && target.is_open() {
            return target;
        }
        self.click_field(key)
    }

    pub fn set_text(&mut self, key: FieldKey, value: &str) -> bool {
        key.kind() == FieldKind::Text && self.values.set_text(key, value)
    }

    /// Pick a destination from the location panel and auto-advance.
    pub fn choose_location(&mut self, location: &str) {
        if !self.values.set_text(FieldKey::Location, location) {
            return;
        }
        info!("location chosen: {}", location);
        let open = self.panels.apply(PanelEvent::LocationChosen, self.mode());
        self.on_panel_opened(open);
    }

    pub fn set_service(&mut self, service: ServiceCategory) {
        if let Some(s) = self.values.service_mut() {
            *s = service;
        }
    }

    pub fn cycle_service(&mut self, forward: bool) {
        if let Some(s) = self.values.service_mut() {
            *s = if forward { s.next() } else { s.prev() };
        }
    }

    // ── Dates ─────────────────────────────────────────────────────────────────

    /// Pick a day in the open date panel. Disabled and out-of-month days are
    /// ignored and return false. A successful pick advances the chain.
    pub fn pick_date(&mut self, date: NaiveDate) -> bool {
        let open = self.panels.open();
        let (slot, event) = match open {
            PanelKey::CheckIn => (RangeSlot::CheckIn, PanelEvent::CheckInChosen),
            PanelKey::CheckOut => (RangeSlot::CheckOut, PanelEvent::CheckOutChosen),
            _ => return false,
        };
        let pickable = self
            .calendar_page()
            .and_then(|page| page.cells.iter().find(|c| c.date == date).copied())
            .is_some_and(|cell| cell.is_pickable());
        if !pickable {
            return false;
        }
        let Some(range) = self.values.dates_mut() else {
            return false;
        };
        range.commit(slot, date);
        debug!("dates now {:?} → {:?}", range.check_in, range.check_out);
        let next = self.panels.apply(event, self.mode());
        self.on_panel_opened(next);
        true
    }

    pub fn prev_month(&mut self) -> bool {
        self.view.prev(self.today)
    }

    pub fn next_month(&mut self) {
        self.view.next();
    }

    // ── Guests ────────────────────────────────────────────────────────────────

    pub fn increment_guests(&mut self) {
        if let Some(g) = self.values.guests_mut() {
            g.increment();
        }
    }

    pub fn decrement_guests(&mut self) {
        if let Some(g) = self.values.guests_mut() {
            g.decrement();
        }
    }

    /// "Done" in the guests panel.
    pub fn guests_done(&mut self) {
        self.panels.apply(PanelEvent::GuestsDone, self.mode());
    }

    // ── Cancellation ──────────────────────────────────────────────────────────

    /// Pointer down outside the widget root. Committed values are kept.
    pub fn outside_click(&mut self) {
        self.panels.apply(PanelEvent::OutsideClick, self.mode());
    }

    pub fn escape(&mut self) {
        self.panels.apply(PanelEvent::Escape, self.mode());
    }

    // ── Submit ────────────────────────────────────────────────────────────────

    pub fn navigation(&self) -> Navigation {
        build_navigation(&self.values)
    }

    /// Build the navigation for the active mode and hand it to `navigator`.
    /// Closes any open panel first.
    pub fn submit(&mut self, navigator: &mut impl Navigator) -> Navigation {
        self.panels.reset();
        let nav = self.navigation();
        info!("submit → {}", nav);
        navigator.navigate(nav.clone());
        nav
    }

    fn on_panel_opened(&mut self, open: PanelKey) {
        let dates = self.dates();
        match open {
            PanelKey::CheckIn => self
                .view
                .reset(dates.check_in.or(dates.check_out), self.today),
            PanelKey::CheckOut => self
                .view
                .reset(dates.check_out.or(dates.check_in), self.today),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, 20).unwrap()
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn mode_change_clears_fields_and_panels() {
        let mut w = SearchWidget::new(today());
        w.set_text(FieldKey::Query, "Sunseeker");
        w.click_field(FieldKey::Location);
        w.set_mode(SearchMode::Professionals);
        w.set_mode(SearchMode::Buy);
        assert_eq!(w.values().text(FieldKey::Query), Some(""));
        assert_eq!(w.open_panel(), PanelKey::None);
    }

    #[test]
    fn click_on_field_of_other_mode_is_ignored() {
        let mut w = SearchWidget::new(today());
        assert_eq!(w.click_field(FieldKey::Guests), PanelKey::None);
    }

    #[test]
    fn opening_check_in_resets_view_to_selection() {
        let mut w = SearchWidget::with_mode(SearchMode::Charter, today());
        w.click_field(FieldKey::CheckIn);
        w.next_month();
        w.next_month();
        assert!(w.pick_date(d(2026, 7, 14)));
        // chain moved to check-out, anchored on check-in month
        assert_eq!(w.open_panel(), PanelKey::CheckOut);
        assert_eq!(w.view_month(), d(2026, 7, 1));
        w.escape();
        w.click_field(FieldKey::CheckIn);
        assert_eq!(w.view_month(), d(2026, 7, 1));
    }

    #[test]
    fn disabled_dates_cannot_be_picked() {
        let mut w = SearchWidget::with_mode(SearchMode::Charter, today());
        w.click_field(FieldKey::CheckIn);
        assert!(!w.pick_date(d(2026, 5, 19)));
        assert!(w.pick_date(d(2026, 5, 25)));
        assert!(!w.pick_date(d(2026, 5, 24)));
        assert_eq!(w.open_panel(), PanelKey::CheckOut);
    }

    #[test]
    fn cancel_mid_chain_keeps_committed_dates() {
        let mut w = SearchWidget::with_mode(SearchMode::Charter, today());
        w.click_field(FieldKey::CheckIn);
        assert!(w.pick_date(d(2026, 5, 25)));
        assert_eq!(w.open_panel(), PanelKey::CheckOut);
        w.outside_click();
        assert_eq!(w.open_panel(), PanelKey::None);
        assert_eq!(w.dates().check_in, Some(d(2026, 5, 25)));

        // escape mid-chain behaves the same
        w.click_field(FieldKey::CheckOut);
        assert!(w.pick_date(d(2026, 5, 28)));
        assert_eq!(w.open_panel(), PanelKey::Guests);
        w.escape();
        assert_eq!(w.dates().check_in, Some(d(2026, 5, 25)));
        assert_eq!(w.dates().check_out, Some(d(2026, 5, 28)));
    }

    #[test]
    fn prev_month_stops_at_current_month() {
        let mut w = SearchWidget::with_mode(SearchMode::Charter, today());
        w.click_field(FieldKey::CheckIn);
        assert!(!w.prev_month());
        w.next_month();
        assert!(w.prev_month());
        assert_eq!(w.view_month(), d(2026, 5, 1));
    }

    #[test]
    fn service_select_cycles() {
        let mut w = SearchWidget::with_mode(SearchMode::Professionals, today());
        w.cycle_service(true);
        assert_eq!(w.values().service(), Some(ServiceCategory::Brokers));
        w.cycle_service(false);
        w.cycle_service(false);
        assert_eq!(w.values().service(), Some(ServiceCategory::Finance));
    }
}
