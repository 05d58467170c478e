//! SearchBar component — the hero's row of field boxes plus the search button.
//!
//! Text fields are edited in place through `TextInput`; triggers (dates,
//! guests) only emit `ClickField` and leave the popover to the panels.

use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use yacht_search::fields::{FieldKey, FieldKind};
use yacht_search::mode::SearchMode;

use crate::{
    action::{Action, HeroSlot},
    app_state::AppState,
    component::{hit, Component},
    theme::{C_ACCENT, C_MUTED, C_PRIMARY, C_SELECTION_BG},
    widgets::{
        pane_chrome::field_box,
        text_input::{InputAction, TextInput},
    },
};

/// Rows taken by the bar (bordered boxes).
pub const SEARCH_BAR_HEIGHT: u16 = 3;

pub struct SearchBar {
    query: TextInput,
    location: TextInput,
    editing: Option<FieldKey>,
    /// Outer rect of each slot from the last draw.
    slot_rects: Vec<(HeroSlot, Rect)>,
}

/// Slots in focus order for a mode: its fields, then the search button.
/// Sell's only field is itself the submit link.
pub fn slots_for(mode: SearchMode) -> Vec<HeroSlot> {
    let mut slots: Vec<HeroSlot> = mode.fields().iter().copied().map(HeroSlot::Field).collect();
    if mode.is_search() {
        slots.push(HeroSlot::Submit);
    }
    slots
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            query: TextInput::new(""),
            location: TextInput::new(""),
            editing: None,
            slot_rects: Vec::new(),
        }
    }

    fn input_mut(&mut self, key: FieldKey) -> Option<&mut TextInput> {
        match key {
            FieldKey::Query => Some(&mut self.query),
            FieldKey::Location => Some(&mut self.location),
            _ => None,
        }
    }

    /// Where a field's box was last drawn; popovers anchor below it.
    pub fn field_rect(&self, key: FieldKey) -> Option<Rect> {
        self.slot_rects
            .iter()
            .find(|(slot, _)| *slot == HeroSlot::Field(key))
            .map(|(_, r)| *r)
    }

    fn end_edit(&mut self) {
        self.editing = None;
        self.query.deactivate();
        self.location.deactivate();
    }

    /// Enter/Space on a slot.
    fn activate(slot: HeroSlot) -> Vec<Action> {
        match slot {
            HeroSlot::Submit => vec![Action::Submit],
            HeroSlot::Field(key) => match key.kind() {
                FieldKind::Text | FieldKind::DateTrigger | FieldKind::GuestTrigger => {
                    vec![Action::ClickField(key)]
                }
                FieldKind::Select => vec![Action::CycleService(true)],
                FieldKind::Link => vec![Action::Submit],
            },
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent, field: FieldKey) -> Vec<Action> {
        let Some(input) = self.input_mut(field) else {
            return vec![];
        };
        match input.handle_key(key) {
            InputAction::Changed(value) => vec![Action::TextChanged(field, value)],
            InputAction::Confirmed if field == FieldKey::Query => {
                vec![Action::EndEdit, Action::Submit]
            }
            InputAction::Confirmed => vec![Action::EndEdit, Action::Escape],
            InputAction::Cancelled => vec![Action::EndEdit, Action::Escape],
            InputAction::Ignored => match key.code {
                KeyCode::Tab => vec![Action::EndEdit, Action::Escape, Action::FocusNext],
                KeyCode::BackTab => vec![Action::EndEdit, Action::Escape, Action::FocusPrev],
                _ => vec![],
            },
        }
    }
}

impl Component for SearchBar {
    fn handle_key(&mut self, key: KeyEvent, state: &AppState) -> Vec<Action> {
        if let Some(field) = self.editing {
            return self.handle_edit_key(key, field);
        }
        let Some(slot) = state.focused_slot else {
            return vec![];
        };
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Self::activate(slot),
            KeyCode::Right if slot == HeroSlot::Field(FieldKey::Service) => {
                vec![Action::CycleService(true)]
            }
            KeyCode::Left if slot == HeroSlot::Field(FieldKey::Service) => {
                vec![Action::CycleService(false)]
            }
            _ => vec![],
        }
    }

    fn handle_mouse(&mut self, event: MouseEvent, _state: &AppState) -> Vec<Action> {
        let Some((slot, _)) = self
            .slot_rects
            .iter()
            .find(|(_, r)| hit(*r, event.column, event.row))
            .copied()
        else {
            return vec![];
        };

        let mut actions = Vec::new();
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.editing.is_some() && Some(slot) != self.editing.map(HeroSlot::Field) {
                    actions.push(Action::EndEdit);
                }
                actions.push(Action::FocusSlot(slot));
                match slot {
                    HeroSlot::Field(key) if key.kind() == FieldKind::Select => {
                        actions.push(Action::ClickField(key));
                        actions.push(Action::CycleService(true));
                    }
                    HeroSlot::Field(key) if key.kind() != FieldKind::Link => {
                        actions.push(Action::ClickField(key));
                    }
                    _ => actions.push(Action::Submit),
                }
            }
            MouseEventKind::ScrollDown if slot == HeroSlot::Field(FieldKey::Service) => {
                actions.push(Action::CycleService(true));
            }
            MouseEventKind::ScrollUp if slot == HeroSlot::Field(FieldKey::Service) => {
                actions.push(Action::CycleService(false));
            }
            _ => {}
        }
        actions
    }

    fn on_action(&mut self, action: &Action, state: &AppState) -> Vec<Action> {
        match action {
            Action::BeginEdit(key) => {
                self.end_edit();
                let current = state.search.values().text(*key).unwrap_or("").to_string();
                if let Some(input) = self.input_mut(*key) {
                    input.set_value(&current);
                    input.activate();
                    self.editing = Some(*key);
                }
            }
            Action::EndEdit
            | Action::SetMode(_)
            | Action::NextMode
            | Action::PrevMode
            | Action::Submit => self.end_edit(),
            _ => {}
        }
        vec![]
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, _focused: bool, state: &AppState) {
        let mode = state.search.mode();
        let slots = slots_for(mode);
        let constraints: Vec<Constraint> = slots
            .iter()
            .map(|slot| match slot {
                HeroSlot::Submit => Constraint::Length(12),
                HeroSlot::Field(k) => match k.kind() {
                    FieldKind::DateTrigger | FieldKind::GuestTrigger => Constraint::Length(16),
                    FieldKind::Select => Constraint::Length(24),
                    _ => Constraint::Fill(1),
                },
            })
            .collect();
        let rects = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        // keep inputs in step with state (mode switches, chosen locations)
        for key in [FieldKey::Query, FieldKey::Location] {
            let text = state.search.values().text(key).unwrap_or("").to_string();
            let placeholder = key.placeholder(mode);
            if let Some(input) = self.input_mut(key) {
                input.set_value(&text);
                input.set_placeholder(placeholder);
            }
        }

        self.slot_rects.clear();
        let open = state.search.open_panel();
        for (slot, rect) in slots.into_iter().zip(rects.iter().copied()) {
            self.slot_rects.push((slot, rect));
            let focused = state.focused_slot == Some(slot)
                || matches!(slot, HeroSlot::Field(k) if open.is_open() && k.panel() == open);

            let HeroSlot::Field(key) = slot else {
                let style = if focused {
                    Style::default()
                        .fg(C_PRIMARY)
                        .bg(C_ACCENT)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(C_ACCENT).add_modifier(Modifier::BOLD)
                };
                let block = field_box("", focused);
                let inner = block.inner(rect);
                frame.render_widget(block, rect);
                frame.render_widget(
                    Paragraph::new(Line::from(Span::styled(" ⌕ Search ", style)))
                        .alignment(Alignment::Center),
                    inner,
                );
                continue;
            };

            let block = field_box(key.label(), focused);
            let inner = block.inner(rect);
            frame.render_widget(block, rect);

            match key.kind() {
                FieldKind::Text => {
                    if let Some(input) = self.input_mut(key) {
                        input.draw(frame, inner);
                    }
                }
                FieldKind::Select => {
                    let (text, _) = state.search.trigger_label(key);
                    let style = if focused {
                        Style::default().fg(C_PRIMARY).bg(C_SELECTION_BG)
                    } else {
                        Style::default().fg(C_PRIMARY)
                    };
                    frame.render_widget(
                        Paragraph::new(Line::from(vec![
                            Span::styled("‹ ", Style::default().fg(C_MUTED)),
                            Span::styled(text, style),
                            Span::styled(" ›", Style::default().fg(C_MUTED)),
                        ])),
                        inner,
                    );
                }
                FieldKind::Link => {
                    let (text, _) = state.search.trigger_label(key);
                    frame.render_widget(
                        Paragraph::new(Line::from(Span::styled(
                            format!("{text} →"),
                            Style::default()
                                .fg(C_ACCENT)
                                .add_modifier(Modifier::UNDERLINED),
                        ))),
                        inner,
                    );
                }
                FieldKind::DateTrigger | FieldKind::GuestTrigger => {
                    let (text, placeholder) = state.search.trigger_label(key);
                    let fg = if placeholder { C_MUTED } else { C_PRIMARY };
                    frame.render_widget(
                        Paragraph::new(Line::from(Span::styled(text, Style::default().fg(fg)))),
                        inner,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mode_has_a_submit_path() {
        for mode in SearchMode::ALL {
            let slots = slots_for(mode);
            let submits = slots.iter().any(|s| {
                *s == HeroSlot::Submit || *s == HeroSlot::Field(FieldKey::ListYacht)
            });
            assert!(submits, "{mode:?}");
        }
    }

    #[test]
    fn charter_slots_follow_field_order() {
        assert_eq!(
            slots_for(SearchMode::Charter),
            vec![
                HeroSlot::Field(FieldKey::Location),
                HeroSlot::Field(FieldKey::CheckIn),
                HeroSlot::Field(FieldKey::CheckOut),
                HeroSlot::Field(FieldKey::Guests),
                HeroSlot::Submit,
            ]
        );
    }

    #[test]
    fn enter_on_trigger_clicks_field() {
        let actions = SearchBar::activate(HeroSlot::Field(FieldKey::Guests));
        assert!(matches!(actions[..], [Action::ClickField(FieldKey::Guests)]));
        let actions = SearchBar::activate(HeroSlot::Field(FieldKey::ListYacht));
        assert!(matches!(actions[..], [Action::Submit]));
    }
}
