//! Action enum — all user-initiated intents and internal events.

use chrono::NaiveDate;
use yacht_search::fields::FieldKey;
use yacht_search::mode::SearchMode;

/// A focusable slot in the search bar: one of the mode's fields, or the
/// search button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeroSlot {
    Field(FieldKey),
    Submit,
}

/// All actions that can flow through the system.
/// Components produce Actions; the App dispatches them.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Mode ─────────────────────────────────────────────────────────────────
    SetMode(SearchMode),
    NextMode,
    PrevMode,

    // ── Focus ────────────────────────────────────────────────────────────────
    FocusNext,
    FocusPrev,
    FocusSlot(HeroSlot),

    // ── Fields ───────────────────────────────────────────────────────────────
    /// Click/Enter on a field trigger.
    ClickField(FieldKey),
    BeginEdit(FieldKey),
    EndEdit,
    TextChanged(FieldKey, String),
    CycleService(bool), // forward?

    // ── Panels ───────────────────────────────────────────────────────────────
    ChooseLocation(String),
    PickDate(NaiveDate),
    PrevMonth,
    NextMonth,
    IncrementGuests,
    DecrementGuests,
    GuestsDone,
    OutsideClick,
    Escape,

    // ── Navigation ───────────────────────────────────────────────────────────
    Submit,
    /// Go back to the page shown before the last submit.
    Back,

    // ── UI toggles ───────────────────────────────────────────────────────────
    ToggleHelp,
    ToggleKeys,
    CopyToClipboard(String), // text to copy

    // ── System ───────────────────────────────────────────────────────────────
    Quit,
    Noop,
}
