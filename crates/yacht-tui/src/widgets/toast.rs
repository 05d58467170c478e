//! Toast notification system — transient status messages.
//!
//! Search feedback (unavailable dates, router errors, clipboard) surfaces
//! here instead of in the search bar, so the hero layout never shifts.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{C_PANEL_BG, C_TOAST_ERROR, C_TOAST_INFO, C_TOAST_SUCCESS, C_TOAST_WARNING};

const MAX_VISIBLE: usize = 3;
const MAX_WIDTH: u16 = 56;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    fn icon(self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "✓",
            Self::Warning => "!",
            Self::Error => "✗",
        }
    }

    fn color(self) -> Color {
        match self {
            Self::Info => C_TOAST_INFO,
            Self::Success => C_TOAST_SUCCESS,
            Self::Warning => C_TOAST_WARNING,
            Self::Error => C_TOAST_ERROR,
        }
    }

    /// Errors linger longer than confirmations.
    fn ttl(self) -> Duration {
        match self {
            Self::Info | Self::Success => Duration::from_millis(2500),
            Self::Warning => Duration::from_secs(4),
            Self::Error => Duration::from_secs(6),
        }
    }
}

struct Toast {
    text: String,
    severity: Severity,
    until: Instant,
}

#[derive(Default)]
pub struct ToastManager {
    queue: VecDeque<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    fn show(&mut self, severity: Severity, text: String, ttl: Duration) {
        // repeating a message refreshes it instead of stacking copies
        self.queue.retain(|t| t.text != text);
        self.queue.push_back(Toast {
            text,
            severity,
            until: Instant::now() + ttl,
        });
        if self.queue.len() > MAX_VISIBLE {
            self.queue.pop_front();
        }
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.show(Severity::Info, text.into(), Severity::Info.ttl());
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.show(Severity::Success, text.into(), Severity::Success.ttl());
    }

    pub fn warning(&mut self, text: impl Into<String>) {
        self.show(Severity::Warning, text.into(), Severity::Warning.ttl());
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.show(Severity::Error, text.into(), Severity::Error.ttl());
    }

    pub fn tick(&mut self) {
        let now = Instant::now();
        self.queue.retain(|t| t.until > now);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    #[cfg(test)]
    pub fn latest(&self) -> Option<&str> {
        self.queue.back().map(|t| t.text.as_str())
    }

    /// Newest toast on the bottom line of `area`, older ones above it,
    /// all flush against the right edge.
    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 || area.width < 8 {
            return;
        }
        let rows = self.queue.iter().rev().zip((area.y..area.bottom()).rev());
        for (toast, y) in rows {
            let label = format!(" {} {} ", toast.severity.icon(), toast.text);
            let width = (label.width() as u16).min(MAX_WIDTH).min(area.width);
            let rect = Rect {
                x: area.right().saturating_sub(width),
                y,
                width,
                height: 1,
            };
            frame.render_widget(Clear, rect);
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    label,
                    Style::default()
                        .fg(toast.severity.color())
                        .bg(C_PANEL_BG)
                        .add_modifier(Modifier::BOLD),
                ))),
                rect,
            );
        }
    }
}
