//! ModeTabs component — the row of mode selectors above the search bar.

use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;
use yacht_search::mode::SearchMode;

use crate::{
    action::Action,
    app_state::AppState,
    component::{hit, Component},
    theme::{C_ACCENT, C_MUTED, C_NUMBER_HINT, C_PRIMARY, C_SELECTION_BG},
};

pub struct ModeTabs {
    /// Hit-test rect of each tab from the last draw.
    tab_rects: Vec<(SearchMode, Rect)>,
}

impl ModeTabs {
    pub fn new() -> Self {
        Self {
            tab_rects: Vec::new(),
        }
    }
}

/// Digit key → mode, in tab order.
pub fn mode_for_digit(c: char) -> Option<SearchMode> {
    let idx = c.to_digit(10)?.checked_sub(1)? as usize;
    SearchMode::ALL.get(idx).copied()
}

impl Component for ModeTabs {
    fn handle_key(&mut self, key: KeyEvent, _state: &AppState) -> Vec<Action> {
        match key.code {
            KeyCode::Char(c) => match mode_for_digit(c) {
                Some(mode) => vec![Action::SetMode(mode)],
                None => vec![],
            },
            KeyCode::Right => vec![Action::NextMode],
            KeyCode::Left => vec![Action::PrevMode],
            _ => vec![],
        }
    }

    fn handle_mouse(&mut self, event: MouseEvent, _state: &AppState) -> Vec<Action> {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return vec![];
        }
        self.tab_rects
            .iter()
            .find(|(_, r)| hit(*r, event.column, event.row))
            .map(|(mode, _)| vec![Action::SetMode(*mode)])
            .unwrap_or_default()
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, _focused: bool, state: &AppState) {
        self.tab_rects.clear();
        let active = state.search.mode();
        let mut spans = vec![Span::styled(
            " ⚓ yachts  ",
            Style::default().fg(C_ACCENT).add_modifier(Modifier::BOLD),
        )];
        let mut x = area.x + spans[0].width() as u16;

        for (i, mode) in SearchMode::ALL.into_iter().enumerate() {
            let hint = format!("{}", i + 1);
            let label = format!(" {} ", mode.label());
            let style = if mode == active {
                Style::default()
                    .fg(C_PRIMARY)
                    .bg(C_SELECTION_BG)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(C_MUTED)
            };
            let w = (hint.width() + label.width()) as u16;
            self.tab_rects.push((
                mode,
                Rect {
                    x,
                    y: area.y,
                    width: w.min((area.x + area.width).saturating_sub(x)),
                    height: 1,
                },
            ));
            spans.push(Span::styled(hint, Style::default().fg(C_NUMBER_HINT)));
            spans.push(Span::styled(label, style));
            spans.push(Span::raw("  "));
            x += w + 2;
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_modes_in_order() {
        assert_eq!(mode_for_digit('1'), Some(SearchMode::Buy));
        assert_eq!(mode_for_digit('3'), Some(SearchMode::Charter));
        assert_eq!(mode_for_digit('4'), Some(SearchMode::Professionals));
        assert_eq!(mode_for_digit('0'), None);
        assert_eq!(mode_for_digit('5'), None);
    }
}
