//! PaneChrome — the three box shapes used on screen: search bar slots, the
//! popovers hanging under them, and the results page.

use crate::theme::{style_focused_border, style_unfocused_border, C_MUTED, C_PANEL_BG, C_PRIMARY};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType},
};

/// Right-aligned header tag, e.g. a result count.
pub struct Badge<'a> {
    pub text: &'a str,
    pub color: Color,
}

fn border(focused: bool) -> Style {
    if focused {
        style_focused_border()
    } else {
        style_unfocused_border()
    }
}

fn heading(focused: bool) -> Style {
    if focused {
        Style::default().fg(C_PRIMARY).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(C_MUTED)
    }
}

/// A search bar slot. The field label sits in the top edge like a form legend.
pub fn field_box(label: &str, focused: bool) -> Block<'_> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(border(focused))
        .title(Span::styled(label, heading(focused)))
}

/// A popover anchored under its field. Opaque so the page underneath does
/// not show through.
pub fn popover_box(title: &str, focused: bool) -> Block<'_> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(border(focused))
        .title(Line::from(vec![
            Span::styled("▾ ", Style::default().fg(C_MUTED)),
            Span::styled(title, heading(focused)),
        ]))
        .style(Style::default().bg(C_PANEL_BG))
}

/// The results page, with an optional badge in the top-right corner.
pub fn page_box<'a>(title: &'a str, focused: bool, badge: Option<Badge<'a>>) -> Block<'a> {
    let block = Block::bordered()
        .border_style(border(focused))
        .title(Span::styled(format!(" {title} "), heading(focused)));
    let Some(b) = badge else {
        return block;
    };
    block.title_top(
        Line::from(Span::styled(
            format!(" {} ", b.text),
            Style::default().fg(b.color).add_modifier(Modifier::BOLD),
        ))
        .right_aligned(),
    )
}
