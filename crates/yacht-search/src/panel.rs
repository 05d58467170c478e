//! Panel Manager — single-open-at-a-time popover state machine.
//!
//! # States
//! ```text
//!  None      — no popover visible
//!  Location  — destination suggestions
//!  CheckIn   — calendar picking the first night
//!  CheckOut  — calendar picking the last night
//!  Guests    — guest stepper
//! ```
//!
//! The auto-advance chain in Charter mode is
//! `Location → CheckIn → CheckOut → Guests → None`.
//! Outside click and Escape cancel to `None` from anywhere.
//!
//! Only one `PanelKey` is stored, so "two panels open" is unrepresentable.

use tracing::debug;

use crate::mode::SearchMode;

/// Which auxiliary popover is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PanelKey {
    #[default]
    None,
    Location,
    CheckIn,
    CheckOut,
    Guests,
}

impl PanelKey {
    pub fn is_open(self) -> bool {
        self != Self::None
    }

    pub fn is_date(self) -> bool {
        matches!(self, Self::CheckIn | Self::CheckOut)
    }
}

/// Inputs into the panel state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    /// Click on a field's trigger region.
    Toggle(PanelKey),
    LocationChosen,
    CheckInChosen,
    CheckOutChosen,
    /// "Done" inside the Guests panel.
    GuestsDone,
    /// Pointer down outside the widget root.
    OutsideClick,
    Escape,
}

/// Transition table: current state × event → next state.
///
/// Selection events only advance when their own panel is the one open;
/// a stray `CheckInChosen` while the guests panel is showing changes nothing.
pub fn transition(open: PanelKey, event: PanelEvent, mode: SearchMode) -> PanelKey {
    use PanelEvent as E;
    use PanelKey as P;

    match (open, event) {
        (_, E::OutsideClick) | (_, E::Escape) => P::None,

        (current, E::Toggle(target)) if current == target => P::None,
        (_, E::Toggle(target)) => target,

        (P::Location, E::LocationChosen) => match mode {
            SearchMode::Charter => P::CheckIn,
            _ => P::None,
        },
        (P::CheckIn, E::CheckInChosen) => P::CheckOut,
        (P::CheckOut, E::CheckOutChosen) => P::Guests,
        (P::Guests, E::GuestsDone) => P::None,

        (current, _) => current,
    }
}

/// Holds the one open panel and applies events through [`transition`].
#[derive(Debug, Clone, Default)]
pub struct PanelMachine {
    open: PanelKey,
}

impl PanelMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self) -> PanelKey {
        self.open
    }

    pub fn is_open(&self, key: PanelKey) -> bool {
        key.is_open() && self.open == key
    }

    /// Apply an event. Returns the new state.
    pub fn apply(&mut self, event: PanelEvent, mode: SearchMode) -> PanelKey {
        let next = transition(self.open, event, mode);
        if next != self.open {
            debug!("panel: {:?} --{:?}--> {:?}", self.open, event, next);
        }
        self.open = next;
        next
    }

    /// Force-close without going through an event (e.g. on mode change).
    pub fn reset(&mut self) {
        self.open = PanelKey::None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PANELS: [PanelKey; 5] = [
        PanelKey::None,
        PanelKey::Location,
        PanelKey::CheckIn,
        PanelKey::CheckOut,
        PanelKey::Guests,
    ];

    #[test]
    fn toggle_opens_then_closes() {
        let mut m = PanelMachine::new();
        assert_eq!(m.apply(PanelEvent::Toggle(PanelKey::Location), SearchMode::Buy), PanelKey::Location);
        assert_eq!(m.apply(PanelEvent::Toggle(PanelKey::Location), SearchMode::Buy), PanelKey::None);
    }

    #[test]
    fn toggle_other_replaces_open_panel() {
        let mut m = PanelMachine::new();
        m.apply(PanelEvent::Toggle(PanelKey::CheckIn), SearchMode::Charter);
        m.apply(PanelEvent::Toggle(PanelKey::Guests), SearchMode::Charter);
        assert_eq!(m.open(), PanelKey::Guests);
        assert!(!m.is_open(PanelKey::CheckIn));
    }

    #[test]
    fn charter_chain_runs_to_completion() {
        let mode = SearchMode::Charter;
        let mut m = PanelMachine::new();
        m.apply(PanelEvent::Toggle(PanelKey::Location), mode);
        assert_eq!(m.apply(PanelEvent::LocationChosen, mode), PanelKey::CheckIn);
        assert_eq!(m.apply(PanelEvent::CheckInChosen, mode), PanelKey::CheckOut);
        assert_eq!(m.apply(PanelEvent::CheckOutChosen, mode), PanelKey::Guests);
        assert_eq!(m.apply(PanelEvent::GuestsDone, mode), PanelKey::None);
    }

    #[test]
    fn location_in_buy_and_professionals_closes() {
        for mode in [SearchMode::Buy, SearchMode::Professionals] {
            assert_eq!(
                transition(PanelKey::Location, PanelEvent::LocationChosen, mode),
                PanelKey::None
            );
        }
    }

    #[test]
    fn cancel_events_always_close() {
        for open in PANELS {
            for mode in SearchMode::ALL {
                assert_eq!(transition(open, PanelEvent::Escape, mode), PanelKey::None);
                assert_eq!(transition(open, PanelEvent::OutsideClick, mode), PanelKey::None);
            }
        }
    }

    #[test]
    fn mismatched_selection_is_ignored() {
        assert_eq!(
            transition(PanelKey::Guests, PanelEvent::CheckInChosen, SearchMode::Charter),
            PanelKey::Guests
        );
        assert_eq!(
            transition(PanelKey::None, PanelEvent::GuestsDone, SearchMode::Charter),
            PanelKey::None
        );
    }
}
