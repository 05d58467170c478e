//! LocationPanel component — destination suggestions under the location field.

use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};
use yacht_search::fields::FieldKey;

use crate::{
    action::Action,
    app_state::AppState,
    component::{hit, Component},
    theme::{C_LOCATION, C_MUTED, C_PRIMARY},
    widgets::{pane_chrome::popover_box, scrollable_list::ScrollableList},
};

pub const LOCATION_PANEL_WIDTH: u16 = 34;
pub const LOCATION_PANEL_MAX_ROWS: u16 = 8;

pub struct LocationPanel {
    list: ScrollableList<String>,
    /// True once the user moved the cursor; Enter then picks the
    /// suggestion instead of the typed text.
    moved: bool,
    list_area: Rect,
}

impl LocationPanel {
    pub fn new() -> Self {
        Self {
            list: ScrollableList::new(),
            moved: false,
            list_area: Rect::default(),
        }
    }

    /// Popover height for the current suggestions (borders included).
    pub fn height(state: &AppState) -> u16 {
        let rows = state.location_suggestions().len().max(1) as u16;
        rows.min(LOCATION_PANEL_MAX_ROWS) + 2
    }

    fn sync(&mut self, state: &AppState) {
        let items: Vec<String> = state
            .location_suggestions()
            .into_iter()
            .map(String::from)
            .collect();
        if items.as_slice() != self.list.items() {
            self.list.set_items(items);
            self.list.select_first();
            self.moved = false;
        }
    }

    fn choose(&self, state: &AppState) -> Vec<Action> {
        let typed = state
            .search
            .values()
            .text(FieldKey::Location)
            .unwrap_or("")
            .trim();
        let pick = if self.moved {
            self.list.selected_item().cloned()
        } else if !typed.is_empty() {
            Some(typed.to_string())
        } else {
            None
        };
        match pick {
            Some(location) => vec![Action::ChooseLocation(location), Action::EndEdit],
            None => vec![Action::EndEdit, Action::Escape],
        }
    }
}

impl Component for LocationPanel {
    fn handle_key(&mut self, key: KeyEvent, state: &AppState) -> Vec<Action> {
        self.sync(state);
        match key.code {
            KeyCode::Down | KeyCode::Char('j') if !self.list.is_empty() => {
                if self.moved {
                    self.list.select_down(1);
                }
                self.moved = true;
                vec![]
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.list.select_up(1);
                vec![]
            }
            KeyCode::Enter => self.choose(state),
            _ => vec![],
        }
    }

    fn handle_mouse(&mut self, event: MouseEvent, state: &AppState) -> Vec<Action> {
        self.sync(state);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) if hit(self.list_area, event.column, event.row) => {
                let row = (event.row - self.list_area.y) as usize;
                if self.list.handle_click(row) {
                    if let Some(location) = self.list.selected_item() {
                        return vec![Action::ChooseLocation(location.clone()), Action::EndEdit];
                    }
                }
                vec![]
            }
            MouseEventKind::ScrollDown => {
                self.list.select_down(1);
                self.moved = true;
                vec![]
            }
            MouseEventKind::ScrollUp => {
                self.list.select_up(1);
                vec![]
            }
            _ => vec![],
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState) {
        self.sync(state);
        frame.render_widget(Clear, area);
        let block = popover_box("Destinations", focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.list_area = inner;

        if self.list.is_empty() {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    "No matching destinations",
                    Style::default().fg(C_MUTED),
                ))),
                inner,
            );
            return;
        }

        let height = inner.height as usize;
        self.list.ensure_visible(height);
        let lines: Vec<Line> = self
            .list
            .visible_items(height)
            .map(|(i, name)| {
                let highlighted = self.moved && i == self.list.selected;
                let style = if highlighted {
                    Style::default()
                        .fg(C_PRIMARY)
                        .bg(C_LOCATION)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(C_PRIMARY)
                };
                Line::from(vec![
                    Span::styled(" ◦ ", Style::default().fg(C_LOCATION)),
                    Span::styled(name.clone(), style),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }
}
