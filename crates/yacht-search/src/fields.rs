//! Field Controllers — per-mode field sets and their values.

use chrono::NaiveDate;

use crate::calendar::{format_short, DateRange};
use crate::mode::{SearchMode, ServiceCategory};
use crate::panel::PanelKey;

pub const MIN_GUESTS: u8 = 1;
pub const MAX_GUESTS: u8 = 20;

pub const ADD_DATES: &str = "Add dates";

/// Identifies one input in the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Query,
    Location,
    CheckIn,
    CheckOut,
    Guests,
    Service,
    /// Sell mode's static call-to-action.
    ListYacht,
}

/// How a field is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Select,
    DateTrigger,
    GuestTrigger,
    Link,
}

impl FieldKey {
    pub fn kind(self) -> FieldKind {
        match self {
            Self::Query | Self::Location => FieldKind::Text,
            Self::Service => FieldKind::Select,
            Self::CheckIn | Self::CheckOut => FieldKind::DateTrigger,
            Self::Guests => FieldKind::GuestTrigger,
            Self::ListYacht => FieldKind::Link,
        }
    }

    /// The popover a click on this field toggles, if any.
    pub fn panel(self) -> PanelKey {
        match self {
            Self::Location => PanelKey::Location,
            Self::CheckIn => PanelKey::CheckIn,
            Self::CheckOut => PanelKey::CheckOut,
            Self::Guests => PanelKey::Guests,
            Self::Query | Self::Service | Self::ListYacht => PanelKey::None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Query => "Search",
            Self::Location => "Location",
            Self::CheckIn => "Check in",
            Self::CheckOut => "Check out",
            Self::Guests => "Guests",
            Self::Service => "Service",
            Self::ListYacht => "Sell your yacht",
        }
    }

    pub fn placeholder(self, mode: SearchMode) -> &'static str {
        match (self, mode) {
            (Self::Query, _) => "Make, model or keyword",
            (Self::Location, SearchMode::Charter) => "Where to?",
            (Self::Location, _) => "Any location",
            (Self::CheckIn, _) | (Self::CheckOut, _) => ADD_DATES,
            (Self::Guests, _) => "Add guests",
            (Self::Service, _) => ServiceCategory::All.label(),
            (Self::ListYacht, _) => "List your yacht",
        }
    }
}

// ── Guest count ───────────────────────────────────────────────────────────────

/// Guest count clamped to `[MIN_GUESTS, MAX_GUESTS]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GuestCount(u8);

impl GuestCount {
    pub fn new(n: u8) -> Self {
        Self(n.clamp(MIN_GUESTS, MAX_GUESTS))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn increment(&mut self) {
        self.0 = (self.0 + 1).min(MAX_GUESTS);
    }

    pub fn decrement(&mut self) {
        self.0 = self.0.saturating_sub(1).max(MIN_GUESTS);
    }

    pub fn can_increment(self) -> bool {
        self.0 < MAX_GUESTS
    }

    pub fn can_decrement(self) -> bool {
        self.0 > MIN_GUESTS
    }

    pub fn is_default(self) -> bool {
        self == Self::default()
    }

    /// `"1 guest"` / `"4 guests"`
    pub fn label(self) -> String {
        if self.0 == 1 {
            "1 guest".to_string()
        } else {
            format!("{} guests", self.0)
        }
    }
}

impl Default for GuestCount {
    fn default() -> Self {
        Self(MIN_GUESTS)
    }
}

// ── Values ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuyFields {
    pub query: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharterFields {
    pub location: String,
    pub dates: DateRange,
    pub guests: GuestCount,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfessionalFields {
    pub service: ServiceCategory,
    pub location: String,
}

/// Values of the active mode's fields. Switching mode replaces the whole
/// variant, so nothing carries over between modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValues {
    Buy(BuyFields),
    Sell,
    Charter(CharterFields),
    Professionals(ProfessionalFields),
}

impl FieldValues {
    pub fn for_mode(mode: SearchMode) -> Self {
        match mode {
            SearchMode::Buy => Self::Buy(BuyFields::default()),
            SearchMode::Sell => Self::Sell,
            SearchMode::Charter => Self::Charter(CharterFields::default()),
            SearchMode::Professionals => Self::Professionals(ProfessionalFields::default()),
        }
    }

    pub fn mode(&self) -> SearchMode {
        match self {
            Self::Buy(_) => SearchMode::Buy,
            Self::Sell => SearchMode::Sell,
            Self::Charter(_) => SearchMode::Charter,
            Self::Professionals(_) => SearchMode::Professionals,
        }
    }

    /// Current text of a text field; `None` if the mode has no such field.
    pub fn text(&self, key: FieldKey) -> Option<&str> {
        match (self, key) {
            (Self::Buy(f), FieldKey::Query) => Some(&f.query),
            (Self::Buy(f), FieldKey::Location) => Some(&f.location),
            (Self::Charter(f), FieldKey::Location) => Some(&f.location),
            (Self::Professionals(f), FieldKey::Location) => Some(&f.location),
            _ => None,
        }
    }

    /// Write a text field. Returns false if the mode has no such field.
    pub fn set_text(&mut self, key: FieldKey, value: &str) -> bool {
        let slot = match (self, key) {
            (Self::Buy(f), FieldKey::Query) => &mut f.query,
            (Self::Buy(f), FieldKey::Location) => &mut f.location,
            (Self::Charter(f), FieldKey::Location) => &mut f.location,
            (Self::Professionals(f), FieldKey::Location) => &mut f.location,
            _ => return false,
        };
        slot.clear();
        slot.push_str(value);
        true
    }

    pub fn dates(&self) -> Option<&DateRange> {
        match self {
            Self::Charter(f) => Some(&f.dates),
            _ => None,
        }
    }

    pub fn dates_mut(&mut self) -> Option<&mut DateRange> {
        match self {
            Self::Charter(f) => Some(&mut f.dates),
            _ => None,
        }
    }

    pub fn guests(&self) -> Option<GuestCount> {
        match self {
            Self::Charter(f) => Some(f.guests),
            _ => None,
        }
    }

    pub fn guests_mut(&mut self) -> Option<&mut GuestCount> {
        match self {
            Self::Charter(f) => Some(&mut f.guests),
            _ => None,
        }
    }

    pub fn service(&self) -> Option<ServiceCategory> {
        match self {
            Self::Professionals(f) => Some(f.service),
            _ => None,
        }
    }

    pub fn service_mut(&mut self) -> Option<&mut ServiceCategory> {
        match self {
            Self::Professionals(f) => Some(&mut f.service),
            _ => None,
        }
    }

    /// What a field shows when rendered: its value, or the placeholder
    /// when empty. The bool is true when the placeholder is showing.
    pub fn display(&self, key: FieldKey) -> (String, bool) {
        let mode = self.mode();
        let placeholder = || (key.placeholder(mode).to_string(), true);
        match key.kind() {
            FieldKind::Text => match self.text(key) {
                Some(t) if !t.is_empty() => (t.to_string(), false),
                _ => placeholder(),
            },
            FieldKind::DateTrigger => {
                let date = self.dates().and_then(|r| match key {
                    FieldKey::CheckIn => r.check_in,
                    _ => r.check_out,
                });
                date_label(date)
            }
            FieldKind::GuestTrigger => match self.guests() {
                Some(g) => (g.label(), false),
                None => placeholder(),
            },
            FieldKind::Select => match self.service() {
                Some(s) => (s.label().to_string(), s.is_all()),
                None => placeholder(),
            },
            FieldKind::Link => (key.placeholder(mode).to_string(), false),
        }
    }
}

impl Default for FieldValues {
    fn default() -> Self {
        Self::for_mode(SearchMode::default())
    }
}

fn date_label(date: Option<NaiveDate>) -> (String, bool) {
    match date {
        Some(d) => (format_short(d), false),
        None => (ADD_DATES.to_string(), true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_count_stays_in_bounds() {
        let mut g = GuestCount::default();
        for _ in 0..50 {
            g.decrement();
            assert!((MIN_GUESTS..=MAX_GUESTS).contains(&g.get()));
        }
        assert_eq!(g.get(), 1);
        for _ in 0..50 {
            g.increment();
            assert!((MIN_GUESTS..=MAX_GUESTS).contains(&g.get()));
        }
        assert_eq!(g.get(), 20);
        assert!(!g.can_increment());
        assert_eq!(GuestCount::new(0).get(), 1);
        assert_eq!(GuestCount::new(200).get(), 20);
    }

    #[test]
    fn guest_label_pluralizes() {
        assert_eq!(GuestCount::new(1).label(), "1 guest");
        assert_eq!(GuestCount::new(2).label(), "2 guests");
        assert_eq!(GuestCount::new(20).label(), "20 guests");
    }

    #[test]
    fn text_fields_only_exist_for_their_mode() {
        let mut v = FieldValues::for_mode(SearchMode::Charter);
        assert!(!v.set_text(FieldKey::Query, "Sunseeker"));
        assert!(v.set_text(FieldKey::Location, "Croatia"));
        assert_eq!(v.text(FieldKey::Location), Some("Croatia"));
        assert!(!FieldValues::Sell.clone().set_text(FieldKey::Location, "x"));
    }

    #[test]
    fn display_falls_back_to_placeholders() {
        let v = FieldValues::for_mode(SearchMode::Charter);
        assert_eq!(v.display(FieldKey::CheckIn), ("Add dates".to_string(), true));
        assert_eq!(v.display(FieldKey::Guests), ("1 guest".to_string(), false));
        assert_eq!(v.display(FieldKey::Location), ("Where to?".to_string(), true));

        let p = FieldValues::for_mode(SearchMode::Professionals);
        assert_eq!(p.display(FieldKey::Service), ("All services".to_string(), true));
    }

    #[test]
    fn field_panels() {
        assert_eq!(FieldKey::Location.panel(), PanelKey::Location);
        assert_eq!(FieldKey::Query.panel(), PanelKey::None);
        assert_eq!(FieldKey::Guests.kind(), FieldKind::GuestTrigger);
    }

    #[test]
    fn every_mode_field_is_writable_or_trigger() {
        for mode in SearchMode::ALL {
            let mut v = FieldValues::for_mode(mode);
            for key in mode.fields() {
                if key.kind() == FieldKind::Text {
                    assert!(v.set_text(*key, ""), "{mode:?} {key:?}");
                }
            }
        }
    }
}
