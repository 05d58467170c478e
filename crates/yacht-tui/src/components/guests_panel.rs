//! GuestsPanel component — guest counter popover with a Done button.

use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};
use yacht_search::fields::MAX_GUESTS;

use crate::{
    action::Action,
    app_state::AppState,
    component::{hit, Component},
    theme::{C_ACCENT, C_MUTED, C_PANEL_BG, C_PRIMARY, C_SEPARATOR},
    widgets::pane_chrome::popover_box,
};

pub const GUESTS_PANEL_WIDTH: u16 = 30;
pub const GUESTS_PANEL_HEIGHT: u16 = 6;

pub struct GuestsPanel {
    minus_rect: Rect,
    plus_rect: Rect,
    done_rect: Rect,
}

impl GuestsPanel {
    pub fn new() -> Self {
        Self {
            minus_rect: Rect::default(),
            plus_rect: Rect::default(),
            done_rect: Rect::default(),
        }
    }
}

fn button_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(C_ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(C_SEPARATOR)
    }
}

impl Component for GuestsPanel {
    fn handle_key(&mut self, key: KeyEvent, _state: &AppState) -> Vec<Action> {
        match key.code {
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right | KeyCode::Up => {
                vec![Action::IncrementGuests]
            }
            KeyCode::Char('-') | KeyCode::Left | KeyCode::Down => vec![Action::DecrementGuests],
            KeyCode::Enter | KeyCode::Char(' ') => vec![Action::GuestsDone],
            _ => vec![],
        }
    }

    fn handle_mouse(&mut self, event: MouseEvent, _state: &AppState) -> Vec<Action> {
        let (col, row) = (event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if hit(self.minus_rect, col, row) {
                    vec![Action::DecrementGuests]
                } else if hit(self.plus_rect, col, row) {
                    vec![Action::IncrementGuests]
                } else if hit(self.done_rect, col, row) {
                    vec![Action::GuestsDone]
                } else {
                    vec![]
                }
            }
            MouseEventKind::ScrollUp => vec![Action::IncrementGuests],
            MouseEventKind::ScrollDown => vec![Action::DecrementGuests],
            _ => vec![],
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState) {
        let guests = state.search.guests().unwrap_or_default();
        frame.render_widget(Clear, area);
        let block = popover_box("Guests", focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height < 3 || inner.width < 20 {
            return;
        }

        // " Guests      [−]  4  [+] "
        let count = format!("{:^4}", guests.get());
        let label_w = inner.width.saturating_sub(3 + 4 + 3 + 1);
        let row = inner.y;
        let x0 = inner.x + label_w;
        self.minus_rect = Rect { x: x0, y: row, width: 3, height: 1 };
        self.plus_rect = Rect { x: x0 + 7, y: row, width: 3, height: 1 };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(
                    format!(" {:<w$}", "Guests", w = label_w.saturating_sub(1) as usize),
                    Style::default().fg(C_PRIMARY),
                ),
                Span::styled("[−]", button_style(guests.can_decrement())),
                Span::styled(count, Style::default().fg(C_PRIMARY).add_modifier(Modifier::BOLD)),
                Span::styled("[+]", button_style(guests.can_increment())),
            ])),
            Rect { height: 1, ..inner },
        );

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(" up to {MAX_GUESTS}"),
                Style::default().fg(C_MUTED),
            ))),
            Rect { y: row + 1, height: 1, ..inner },
        );

        let done = " Done ";
        let done_x = inner.x + inner.width.saturating_sub(done.len() as u16 + 1);
        self.done_rect = Rect {
            x: done_x,
            y: row + 3u16.min(inner.height - 1),
            width: done.len() as u16,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                done,
                Style::default()
                    .fg(C_PANEL_BG)
                    .bg(C_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ))),
            self.done_rect,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::KeyModifiers;

    #[test]
    fn keys_map_to_counter_actions() {
        let mut panel = GuestsPanel::new();
        let state = crate::app_state::tests::state();
        let key = |c| KeyEvent::new(c, KeyModifiers::NONE);
        assert!(matches!(
            panel.handle_key(key(KeyCode::Char('+')), &state)[..],
            [Action::IncrementGuests]
        ));
        assert!(matches!(
            panel.handle_key(key(KeyCode::Char('-')), &state)[..],
            [Action::DecrementGuests]
        ));
        assert!(matches!(
            panel.handle_key(key(KeyCode::Enter), &state)[..],
            [Action::GuestsDone]
        ));
    }
}
