//! Status bar — bottom lines with the current page, input mode and keybindings.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use yacht_search::panel::PanelKey;

use crate::theme::{C_ACCENT, C_ERROR, C_MODE_EDIT, C_MODE_NORMAL, C_MUTED, C_SECONDARY, C_SEPARATOR};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,
    /// Typing into a text field of the search bar.
    Editing,
}

impl InputMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Editing => "EDIT",
        }
    }

    pub fn color(self) -> ratatui::style::Color {
        match self {
            Self::Normal => C_MODE_NORMAL,
            Self::Editing => C_MODE_EDIT,
        }
    }
}

/// Draw the location bar: the URL of the current page, or the last
/// navigation error.
pub fn draw_url_bar(frame: &mut Frame, area: Rect, url: Option<&str>, error: Option<&str>) {
    let line = match error {
        Some(e) => Line::from(vec![
            Span::styled("✗ ", Style::default().fg(C_ERROR)),
            Span::styled(e, Style::default().fg(C_ERROR)),
        ]),
        None => Line::from(vec![
            Span::styled("⚓ ", Style::default().fg(C_ACCENT)),
            Span::styled(url.unwrap_or("/"), Style::default().fg(C_SECONDARY)),
        ]),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw a horizontal separator line.
pub fn draw_separator(frame: &mut Frame, area: Rect) {
    let line = Line::from(Span::styled(
        "─".repeat(area.width as usize),
        Style::default().fg(C_SEPARATOR),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

/// Keys relevant to what currently owns input.
fn keys_for(mode: InputMode, panel: PanelKey) -> &'static str {
    match (mode, panel) {
        (InputMode::Editing, PanelKey::Location) => {
            " type to filter  ↑↓ suggestion  Enter choose  Esc done"
        }
        (InputMode::Editing, _) => " type  Enter done  Esc done",
        (InputMode::Normal, PanelKey::Location) => " ↑↓ select  Enter choose  Esc close",
        (InputMode::Normal, PanelKey::CheckIn | PanelKey::CheckOut) => {
            " ←↑↓→ day  Enter pick  [/] month  Esc close"
        }
        (InputMode::Normal, PanelKey::Guests) => " +/- guests  Enter done  Esc close",
        (InputMode::Normal, PanelKey::None) => {
            " Tab/S-Tab field  Enter open/search  1-4 mode  s search  j/k results  y copy url  Bksp back  ? help  q quit"
        }
    }
}

/// Draw the keybindings footer bar (one row).
pub fn draw_keys_bar(frame: &mut Frame, area: Rect, mode: InputMode, panel: PanelKey) {
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", mode.label()),
            Style::default()
                .fg(mode.color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(keys_for(mode, panel), Style::default().fg(C_MUTED)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
