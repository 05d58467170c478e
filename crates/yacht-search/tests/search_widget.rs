//! End-to-end behaviour of the trip search widget: panel chaining,
//! cancellation, date ordering, guest bounds and the submitted URLs.

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use yacht_search::calendar::month_grid;
use yacht_search::fields::{FieldKey, MAX_GUESTS, MIN_GUESTS};
use yacht_search::mode::{SearchMode, ServiceCategory};
use yacht_search::panel::PanelKey;
use yacht_search::query::{Navigation, Navigator};
use yacht_search::route::Route;
use yacht_search::widget::SearchWidget;

/// Records navigations instead of performing them.
#[derive(Default)]
struct RecordingNavigator {
    visited: Vec<String>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, nav: Navigation) {
        self.visited.push(nav.to_string());
    }
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn today() -> NaiveDate {
    d(2026, 5, 20)
}

#[test]
fn buy_submit_with_location_only() {
    let mut w = SearchWidget::new(today());
    w.set_text(FieldKey::Query, "");
    w.set_text(FieldKey::Location, "Spain");
    let mut nav = RecordingNavigator::default();
    w.submit(&mut nav);
    assert_eq!(nav.visited, vec!["/buy?location=Spain".to_string()]);
}

#[test]
fn charter_full_flow_builds_expected_url() {
    let mut w = SearchWidget::with_mode(SearchMode::Charter, today());

    assert_eq!(w.click_field(FieldKey::Location), PanelKey::Location);
    w.choose_location("Greek Islands");
    assert_eq!(w.open_panel(), PanelKey::CheckIn);

    w.next_month();
    assert!(w.pick_date(d(2026, 6, 3)));
    assert_eq!(w.open_panel(), PanelKey::CheckOut);
    assert!(w.pick_date(d(2026, 6, 10)));
    assert_eq!(w.open_panel(), PanelKey::Guests);

    for _ in 0..3 {
        w.increment_guests();
    }
    w.guests_done();
    assert_eq!(w.open_panel(), PanelKey::None);

    assert_eq!(w.trigger_label(FieldKey::CheckIn).0, "3 Jun");
    assert_eq!(w.trigger_label(FieldKey::Guests).0, "4 guests");

    let mut nav = RecordingNavigator::default();
    let built = w.submit(&mut nav);
    assert_eq!(
        nav.visited,
        vec![
            "/charter?location=Greek+Islands&checkin=2026-06-03&checkout=2026-06-10&guests=4"
                .to_string()
        ]
    );
    assert_eq!(
        Route::try_from(&built).unwrap(),
        Route::Charter {
            location: Some("Greek Islands".into()),
            check_in: Some(d(2026, 6, 3)),
            check_out: Some(d(2026, 6, 10)),
            guests: Some(yacht_search::fields::GuestCount::new(4)),
        }
    );
}

#[test]
fn location_chain_depends_on_mode() {
    let mut charter = SearchWidget::with_mode(SearchMode::Charter, today());
    charter.click_field(FieldKey::Location);
    charter.choose_location("Croatia");
    assert_eq!(charter.open_panel(), PanelKey::CheckIn);

    for mode in [SearchMode::Buy, SearchMode::Professionals] {
        let mut w = SearchWidget::with_mode(mode, today());
        w.click_field(FieldKey::Location);
        w.choose_location("Croatia");
        assert_eq!(w.open_panel(), PanelKey::None, "{mode:?}");
    }
}

#[test]
fn escape_closes_any_panel() {
    let fields = [
        FieldKey::Location,
        FieldKey::CheckIn,
        FieldKey::CheckOut,
        FieldKey::Guests,
    ];
    for field in fields {
        let mut w = SearchWidget::with_mode(SearchMode::Charter, today());
        w.click_field(field);
        assert!(w.open_panel().is_open());
        w.escape();
        assert_eq!(w.open_panel(), PanelKey::None);
    }
}

#[test]
fn single_open_invariant_over_click_sequences() {
    let fields = [
        FieldKey::Location,
        FieldKey::CheckIn,
        FieldKey::CheckOut,
        FieldKey::Guests,
    ];
    let mut w = SearchWidget::with_mode(SearchMode::Charter, today());
    // every ordered triple of clicks
    for a in fields {
        for b in fields {
            for c in fields {
                for f in [a, b, c] {
                    let open = w.click_field(f);
                    assert_eq!(open, w.open_panel());
                    assert!(open == PanelKey::None || open == f.panel());
                }
            }
        }
    }
}

#[test]
fn dates_stay_ordered_in_either_pick_order() {
    let base = d(2026, 7, 1);
    for first in 0..10 {
        for second in 0..10 {
            let mut w = SearchWidget::with_mode(SearchMode::Charter, today());
            // check-out first, then a check-in that may land after it
            w.click_field(FieldKey::CheckOut);
            w.next_month();
            w.next_month();
            assert!(w.pick_date(base + Duration::days(first)));
            w.click_field(FieldKey::CheckIn);
            assert!(w.pick_date(base + Duration::days(second)));
            let r = w.dates();
            assert!(r.check_in.unwrap() <= r.check_out.unwrap());
        }
    }
}

#[test]
fn guest_count_bounded_under_any_sequence() {
    let mut rng = StdRng::seed_from_u64(7);
    for (p_up, end) in [(0.7, MAX_GUESTS), (0.3, MIN_GUESTS)] {
        let mut w = SearchWidget::with_mode(SearchMode::Charter, today());
        let mut reached = false;
        for _ in 0..500 {
            if rng.gen_bool(p_up) {
                w.increment_guests();
            } else {
                w.decrement_guests();
            }
            let g = w.guests().unwrap().get();
            assert!((MIN_GUESTS..=MAX_GUESTS).contains(&g));
            reached |= g == end;
        }
        assert!(reached, "never hit {end}");
    }
}

#[test]
fn month_grid_is_stable() {
    let m = d(2026, 9, 1);
    assert_eq!(month_grid(m), month_grid(m));
    assert_eq!(month_grid(m).len(), 42);
}

#[test]
fn sell_links_to_add_listing() {
    let mut w = SearchWidget::with_mode(SearchMode::Sell, today());
    let mut nav = RecordingNavigator::default();
    w.submit(&mut nav);
    assert_eq!(nav.visited, vec!["/add-listing".to_string()]);
}

#[test]
fn professionals_submit() {
    let mut w = SearchWidget::with_mode(SearchMode::Professionals, today());
    w.set_service(ServiceCategory::MarineEngineers);
    w.set_text(FieldKey::Location, "Antibes");
    assert_eq!(
        w.navigation().to_string(),
        "/services?service=marine-engineers&location=Antibes"
    );
}
