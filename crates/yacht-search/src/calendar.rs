//! Calendar Engine — pure date-grid arithmetic for the check-in/check-out
//! panels. Everything here works on `NaiveDate` (a local calendar day) and
//! has no side effects, so it can be tested without any UI.

use chrono::{Datelike, Duration, Months, NaiveDate};

/// Cells in a month grid: six Monday-aligned weeks.
pub const GRID_CELLS: usize = 42;

pub const WEEKDAY_LABELS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let start = month_start(date);
    start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(start)
}

/// Shift a month by `delta` months. The result is always the 1st.
pub fn add_months(month: NaiveDate, delta: i32) -> NaiveDate {
    let start = month_start(month);
    let shifted = if delta >= 0 {
        start.checked_add_months(Months::new(delta as u32))
    } else {
        start.checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    shifted.unwrap_or(start)
}

/// The 42 dates shown for `view_month`, starting on the Monday on or before
/// the 1st. Leading/trailing days from adjacent months fill the grid.
pub fn month_grid(view_month: NaiveDate) -> [NaiveDate; GRID_CELLS] {
    let first = month_start(view_month);
    let lead = first.weekday().num_days_from_monday() as i64;
    let origin = first - Duration::days(lead);
    std::array::from_fn(|i| origin + Duration::days(i as i64))
}

/// True if `date` is not inside `view_month`.
pub fn is_outside_month(date: NaiveDate, view_month: NaiveDate) -> bool {
    date < month_start(view_month) || date > month_end(view_month)
}

/// A date is disabled if it is in the past or before `min_date`.
/// `min_date` is the check-in date while picking a check-out date.
pub fn is_disabled(date: NaiveDate, today: NaiveDate, min_date: Option<NaiveDate>) -> bool {
    date < today || min_date.is_some_and(|min| date < min)
}

/// "Previous month" is allowed only while it would not land before the
/// current real-world month.
pub fn can_go_prev(view_month: NaiveDate, today: NaiveDate) -> bool {
    add_months(view_month, -1) >= month_start(today)
}

/// `"3 Jun"`
pub fn format_short(date: NaiveDate) -> String {
    date.format("%-d %b").to_string()
}

/// `"2026-06-03"`
pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_iso(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// `"June 2026"`
pub fn format_month_title(month: NaiveDate) -> String {
    month.format("%B %Y").to_string()
}

// ── Date range ────────────────────────────────────────────────────────────────

/// Which end of the range a selection writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSlot {
    CheckIn,
    CheckOut,
}

/// Check-in/check-out pair. Once both are set, `check_in <= check_out`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
}

impl DateRange {
    /// Write `date` into `slot`, then swap the ends if they are inverted.
    /// Inverted picks are reordered, never rejected.
    pub fn commit(&mut self, slot: RangeSlot, date: NaiveDate) {
        match slot {
            RangeSlot::CheckIn => self.check_in = Some(date),
            RangeSlot::CheckOut => self.check_out = Some(date),
        }
        if let (Some(a), Some(b)) = (self.check_in, self.check_out) {
            if a > b {
                self.check_in = Some(b);
                self.check_out = Some(a);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.check_in.is_none() && self.check_out.is_none()
    }

    /// True if `date` is strictly between the two ends.
    pub fn contains_inner(&self, date: NaiveDate) -> bool {
        match (self.check_in, self.check_out) {
            (Some(a), Some(b)) => a < date && date < b,
            _ => false,
        }
    }

    pub fn nights(&self) -> Option<i64> {
        match (self.check_in, self.check_out) {
            (Some(a), Some(b)) => Some((b - a).num_days()),
            _ => None,
        }
    }
}

// ── View month ────────────────────────────────────────────────────────────────

/// The month displayed in an open date panel. Independent of the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarView {
    month: NaiveDate,
}

impl CalendarView {
    pub fn new(anchor: NaiveDate) -> Self {
        Self {
            month: month_start(anchor),
        }
    }

    pub fn month(&self) -> NaiveDate {
        self.month
    }

    /// Re-anchor on panel open: the selected date's month, else today's.
    pub fn reset(&mut self, selected: Option<NaiveDate>, today: NaiveDate) {
        self.month = month_start(selected.unwrap_or(today));
    }

    /// Returns false (and stays put) when navigation would enter the past.
    pub fn prev(&mut self, today: NaiveDate) -> bool {
        if !can_go_prev(self.month, today) {
            return false;
        }
        self.month = add_months(self.month, -1);
        true
    }

    pub fn next(&mut self) {
        self.month = add_months(self.month, 1);
    }
}

// ── Rendered page ─────────────────────────────────────────────────────────────

/// One grid cell with everything a renderer needs to style it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Adjacent-month filler; rendered but not interactive.
    pub outside: bool,
    pub disabled: bool,
    pub selected: bool,
    pub in_range: bool,
    pub today: bool,
}

impl DayCell {
    pub fn is_pickable(&self) -> bool {
        !self.outside && !self.disabled
    }
}

/// A month grid annotated against the current range and rules.
#[derive(Debug, Clone)]
pub struct CalendarPage {
    pub month: NaiveDate,
    pub cells: [DayCell; GRID_CELLS],
    pub can_prev: bool,
}

pub fn calendar_page(
    view: &CalendarView,
    range: &DateRange,
    today: NaiveDate,
    min_date: Option<NaiveDate>,
) -> CalendarPage {
    let month = view.month();
    let grid = month_grid(month);
    let cells = std::array::from_fn(|i| {
        let date = grid[i];
        DayCell {
            date,
            outside: is_outside_month(date, month),
            disabled: is_disabled(date, today, min_date),
            selected: range.check_in == Some(date) || range.check_out == Some(date),
            in_range: range.contains_inner(date),
            today: date == today,
        }
    });
    CalendarPage {
        month,
        cells,
        can_prev: can_go_prev(month, today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn grid_is_42_monday_aligned_days_for_every_month() {
        for year in 2020..2032 {
            for m in 1..=12 {
                let month = d(year, m, 1);
                let grid = month_grid(month);
                assert_eq!(grid.len(), GRID_CELLS);
                assert_eq!(grid[0].weekday(), Weekday::Mon);
                for pair in grid.windows(2) {
                    assert_eq!(pair[1] - pair[0], Duration::days(1));
                }
                assert!(grid.contains(&month));
                assert!(grid.contains(&month_end(month)));
                assert_eq!(month_grid(month), grid);
            }
        }
    }

    #[test]
    fn grid_for_june_2026_starts_on_previous_monday() {
        // 1 June 2026 is a Monday
        let grid = month_grid(d(2026, 6, 17));
        assert_eq!(grid[0], d(2026, 6, 1));
        assert_eq!(grid[41], d(2026, 7, 12));
        // 1 Feb 2026 is a Sunday
        let grid = month_grid(d(2026, 2, 1));
        assert_eq!(grid[0], d(2026, 1, 26));
    }

    #[test]
    fn outside_month_flags_fillers_only() {
        let view = d(2026, 2, 1);
        assert!(is_outside_month(d(2026, 1, 31), view));
        assert!(!is_outside_month(d(2026, 2, 1), view));
        assert!(!is_outside_month(d(2026, 2, 28), view));
        assert!(is_outside_month(d(2026, 3, 1), view));
    }

    #[test]
    fn disabled_rules() {
        let today = d(2026, 6, 10);
        assert!(is_disabled(d(2026, 6, 9), today, None));
        assert!(!is_disabled(today, today, None));
        assert!(is_disabled(d(2026, 6, 12), today, Some(d(2026, 6, 15))));
        assert!(!is_disabled(d(2026, 6, 15), today, Some(d(2026, 6, 15))));
    }

    #[test]
    fn today_rule_is_monotonic() {
        let today = d(2026, 6, 10);
        let days: Vec<NaiveDate> = (0..60).map(|i| d(2026, 5, 1) + Duration::days(i)).collect();
        for (i, later) in days.iter().enumerate() {
            if is_disabled(*later, today, None) {
                for earlier in &days[..i] {
                    assert!(is_disabled(*earlier, today, None));
                }
            }
        }
    }

    #[test]
    fn commit_swaps_inverted_range() {
        let mut r = DateRange::default();
        r.commit(RangeSlot::CheckIn, d(2026, 6, 10));
        r.commit(RangeSlot::CheckOut, d(2026, 6, 3));
        assert_eq!(r.check_in, Some(d(2026, 6, 3)));
        assert_eq!(r.check_out, Some(d(2026, 6, 10)));
        assert_eq!(r.nights(), Some(7));
    }

    #[test]
    fn commit_keeps_order_for_any_pair() {
        let base = d(2026, 7, 1);
        for a in 0..20 {
            for b in 0..20 {
                for first in [RangeSlot::CheckIn, RangeSlot::CheckOut] {
                    let second = match first {
                        RangeSlot::CheckIn => RangeSlot::CheckOut,
                        RangeSlot::CheckOut => RangeSlot::CheckIn,
                    };
                    let mut r = DateRange::default();
                    r.commit(first, base + Duration::days(a));
                    r.commit(second, base + Duration::days(b));
                    assert!(r.check_in.unwrap() <= r.check_out.unwrap());
                }
            }
        }
    }

    #[test]
    fn prev_month_blocked_at_current_month() {
        let today = d(2026, 10, 16);
        let mut view = CalendarView::new(today);
        assert!(!view.prev(today));
        assert_eq!(view.month(), d(2026, 10, 1));
        view.next();
        view.next();
        assert_eq!(view.month(), d(2026, 12, 1));
        assert!(view.prev(today));
        assert!(view.prev(today));
        assert!(!view.prev(today));
    }

    #[test]
    fn next_month_crosses_year() {
        assert_eq!(add_months(d(2026, 12, 20), 1), d(2027, 1, 1));
        assert_eq!(add_months(d(2027, 1, 5), -1), d(2026, 12, 1));
    }

    #[test]
    fn formats() {
        assert_eq!(format_short(d(2026, 6, 3)), "3 Jun");
        assert_eq!(format_iso(d(2026, 6, 3)), "2026-06-03");
        assert_eq!(parse_iso("2026-06-03"), Some(d(2026, 6, 3)));
        assert_eq!(parse_iso("03/06/2026"), None);
        assert_eq!(format_month_title(d(2026, 6, 3)), "June 2026");
    }

    #[test]
    fn page_marks_selection_and_range() {
        let today = d(2026, 6, 1);
        let mut range = DateRange::default();
        range.commit(RangeSlot::CheckIn, d(2026, 6, 3));
        range.commit(RangeSlot::CheckOut, d(2026, 6, 6));
        let page = calendar_page(&CalendarView::new(today), &range, today, None);
        let cell = |date| page.cells.iter().find(|c| c.date == date).copied().unwrap();
        assert!(cell(d(2026, 6, 3)).selected);
        assert!(cell(d(2026, 6, 4)).in_range);
        assert!(!cell(d(2026, 6, 6)).in_range);
        assert!(cell(d(2026, 6, 1)).today);
        assert!(!page.can_prev);
    }
}
