//! TextInput — wraps tui-input for the search bar's free-text fields.

use ratatui::crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tui_input::{backend::crossterm::EventHandler, Input};

use crate::theme::{C_INPUT_BG, C_INPUT_FG, C_MUTED, C_PRIMARY};

pub enum InputAction {
    Changed(String),
    Confirmed,
    Cancelled,
    /// Key not consumed by the input (arrows for a suggestion list, etc).
    Ignored,
}

pub struct TextInput {
    input: Input,
    active: bool,
    placeholder: String,
}

impl TextInput {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            input: Input::default(),
            active: false,
            placeholder: placeholder.into(),
        }
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    /// Replace the value without emitting a change (syncing from state).
    pub fn set_value(&mut self, value: &str) {
        if self.input.value() != value {
            self.input = Input::new(value.to_string());
        }
    }

    pub fn text(&self) -> &str {
        self.input.value()
    }

    /// Handle a key while active.
    ///
    /// Enter confirms, Esc cancels editing (the text is kept: fields are
    /// committed as you type). Up/Down are left for the caller.
    pub fn handle_key(&mut self, key: KeyEvent) -> InputAction {
        match key.code {
            KeyCode::Esc => {
                self.deactivate();
                InputAction::Cancelled
            }
            KeyCode::Enter => {
                self.deactivate();
                InputAction::Confirmed
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Tab | KeyCode::BackTab => InputAction::Ignored,
            _ => {
                let before = self.input.value().to_string();
                self.input.handle_event(&Event::Key(key));
                if self.input.value() == before {
                    InputAction::Ignored
                } else {
                    InputAction::Changed(self.input.value().to_string())
                }
            }
        }
    }

    /// Render the value (or placeholder) into a one-line `area`.
    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let width = area.width.saturating_sub(1) as usize;
        let scroll = self.input.visual_scroll(width);
        let value = self.input.value();
        let span = if value.is_empty() {
            Span::styled(self.placeholder.clone(), Style::default().fg(C_MUTED))
        } else {
            let visible: String = value.chars().skip(scroll).collect();
            let fg = if self.active { C_INPUT_FG } else { C_PRIMARY };
            Span::styled(visible, Style::default().fg(fg))
        };
        let bg = if self.active {
            Style::default().bg(C_INPUT_BG)
        } else {
            Style::default()
        };
        frame.render_widget(Paragraph::new(Line::from(span)).style(bg), area);

        if self.active && area.width > 0 {
            let cursor_x = area.x + (self.input.visual_cursor().saturating_sub(scroll)) as u16;
            frame.set_cursor_position((cursor_x.min(area.x + area.width - 1), area.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_emits_changes() {
        let mut input = TextInput::new("Any location");
        input.activate();
        for c in "Nice".chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(input.text(), "Nice");
        match input.handle_key(key(KeyCode::Backspace)) {
            InputAction::Changed(v) => assert_eq!(v, "Nic"),
            _ => panic!("expected change"),
        }
    }

    #[test]
    fn escape_keeps_text() {
        let mut input = TextInput::new("");
        input.set_value("Split");
        input.activate();
        assert!(matches!(input.handle_key(key(KeyCode::Esc)), InputAction::Cancelled));
        assert!(!input.is_active());
        assert_eq!(input.text(), "Split");
    }

    #[test]
    fn arrows_are_left_to_caller() {
        let mut input = TextInput::new("");
        input.activate();
        assert!(matches!(input.handle_key(key(KeyCode::Down)), InputAction::Ignored));
    }
}
