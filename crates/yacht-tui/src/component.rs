//! Component trait — the interface every UI panel implements.
//!
//! - Components own their view state (cursor, scroll, hit-test rects).
//! - Components receive `AppState` (read-only) for the search widget and pages.
//! - Components produce `Vec<Action>` and never mutate shared state directly.
//! - The App event-loop applies those actions to the `SearchWidget`.

use ratatui::crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

use crate::action::Action;
use crate::app_state::AppState;

pub trait Component {
    /// Handle a key event. Returns actions to be dispatched.
    /// Only called when this component owns keyboard input.
    fn handle_key(&mut self, key: KeyEvent, state: &AppState) -> Vec<Action>;

    /// Handle a mouse event inside the area this component last drew into.
    fn handle_mouse(&mut self, event: MouseEvent, state: &AppState) -> Vec<Action>;

    /// Called each UI tick (~100ms).
    fn tick(&mut self, _state: &AppState) -> Vec<Action> {
        Vec::new()
    }

    /// Receive every dispatched action, before the App applies it.
    fn on_action(&mut self, _action: &Action, _state: &AppState) -> Vec<Action> {
        Vec::new()
    }

    /// Render the component into `area`.
    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState);
}

/// True when (col, row) falls inside `r`.
pub fn hit(r: Rect, col: u16, row: u16) -> bool {
    r.width > 0
        && r.height > 0
        && col >= r.x
        && col < r.x + r.width
        && row >= r.y
        && row < r.y + r.height
}
