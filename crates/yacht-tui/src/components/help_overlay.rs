//! HelpOverlay component — centered popup with keyboard shortcut reference.

use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::{
    action::Action,
    app_state::AppState,
    component::Component,
    theme::{C_ACCENT, C_MUTED, C_PRIMARY, C_SECONDARY},
    widgets::pane_chrome::popover_box,
};

const KEY_COLUMN: usize = 22;

/// (section, [(keys, what they do)])
const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "search bar",
        &[
            ("1 2 3 4", "buy, sell, charter, professionals"),
            ("m / M", "next / previous mode"),
            ("tab / shift-tab", "move between fields"),
            ("enter", "edit a field or open its panel"),
            ("← / →", "change service"),
            ("s", "search"),
        ],
    ),
    (
        "panels",
        &[
            ("↑ / ↓", "move through destinations"),
            ("arrows or hjkl", "move the day cursor"),
            ("[ ] or pgup pgdn", "previous / next month"),
            ("+ / -", "more / fewer guests"),
            ("enter", "choose and continue"),
            ("esc, click outside", "close without changes"),
        ],
    ),
    (
        "results",
        &[
            ("j / k", "move through results"),
            ("g / G", "first / last result"),
            ("backspace", "previous page"),
            ("y", "copy the page url"),
        ],
    ),
    (
        "general",
        &[("K", "keys bar"), ("?", "this help"), ("q, ctrl-c", "quit")],
    ),
];

pub struct HelpOverlay {
    pub visible: bool,
}

impl HelpOverlay {
    pub fn new() -> Self {
        Self { visible: false }
    }
}

impl Component for HelpOverlay {
    fn handle_key(&mut self, key: KeyEvent, _state: &AppState) -> Vec<Action> {
        if !self.visible {
            return vec![];
        }
        match key.code {
            KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc => vec![Action::ToggleHelp],
            _ => vec![Action::Noop],
        }
    }

    fn handle_mouse(&mut self, _event: MouseEvent, _state: &AppState) -> Vec<Action> {
        if self.visible {
            vec![Action::ToggleHelp]
        } else {
            vec![]
        }
    }

    fn on_action(&mut self, action: &Action, _state: &AppState) -> Vec<Action> {
        if matches!(action, Action::ToggleHelp) {
            self.visible = !self.visible;
        }
        vec![]
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, _focused: bool, state: &AppState) {
        if !self.visible {
            return;
        }
        let mut lines = vec![Line::from(vec![
            Span::styled(" mode: ", Style::default().fg(C_MUTED)),
            Span::styled(
                state.search.mode().label(),
                Style::default().fg(C_ACCENT).add_modifier(Modifier::BOLD),
            ),
        ])];
        for (section, rows) in SHORTCUTS {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!(" {section}"),
                Style::default().fg(C_MUTED).add_modifier(Modifier::BOLD),
            )));
            lines.extend(rows.iter().map(|(keys, what)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {keys:<KEY_COLUMN$}"),
                        Style::default().fg(C_PRIMARY).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*what, Style::default().fg(C_SECONDARY)),
                ])
            }));
        }

        // content plus borders
        let popup = centered(60, lines.len() as u16 + 2, area);
        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(lines).block(popover_box("keyboard shortcuts", true)),
            popup,
        );
    }
}

/// A `width`×`height` rect centred in `r`, shrunk to fit.
fn centered(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_fits_small_terminals() {
        let r = centered(60, 40, Rect::new(0, 0, 50, 20));
        assert_eq!(r, Rect::new(0, 0, 50, 20));
        let r = centered(60, 10, Rect::new(0, 0, 100, 30));
        assert_eq!((r.x, r.y), (20, 10));
    }

    #[test]
    fn swallows_keys_while_open() {
        let state = crate::app_state::tests::state();
        let mut help = HelpOverlay::new();
        help.on_action(&Action::ToggleHelp, &state);
        let key = KeyEvent::new(KeyCode::Char('s'), ratatui::crossterm::event::KeyModifiers::NONE);
        assert!(matches!(help.handle_key(key, &state).as_slice(), [Action::Noop]));
    }
}
