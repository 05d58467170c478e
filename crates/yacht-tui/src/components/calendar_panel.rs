//! CalendarPanel component — month grid popover for check-in / check-out.
//!
//! The grid itself comes from `SearchWidget::calendar_page`; this component
//! only owns the keyboard cursor and the hit-test rects of the last draw.

use chrono::{Datelike, Duration, NaiveDate};
use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};
use yacht_search::calendar::{
    format_month_title, format_short, month_end, month_start, CalendarPage, DateRange, DayCell,
    WEEKDAY_LABELS,
};
use yacht_search::panel::PanelKey;

use crate::{
    action::Action,
    app_state::AppState,
    component::{hit, Component},
    theme::{
        C_ACCENT, C_MUTED, C_PANEL_BG, C_PRIMARY, C_RANGE_BG, C_SECONDARY, C_SEPARATOR, C_TODAY,
    },
    widgets::pane_chrome::popover_box,
};

const CELL_W: u16 = 4;
pub const CALENDAR_PANEL_WIDTH: u16 = CELL_W * 7 + 2;
pub const CALENDAR_PANEL_HEIGHT: u16 = 11;

pub struct CalendarPanel {
    /// Keyboard cursor; re-seeded whenever a different date panel opens.
    cursor: Option<NaiveDate>,
    cursor_panel: PanelKey,
    prev_rect: Rect,
    next_rect: Rect,
    cell_rects: Vec<(NaiveDate, Rect)>,
}

impl CalendarPanel {
    pub fn new() -> Self {
        Self {
            cursor: None,
            cursor_panel: PanelKey::None,
            prev_rect: Rect::default(),
            next_rect: Rect::default(),
            cell_rects: Vec::new(),
        }
    }

    /// Forget the cursor once no date panel is open.
    pub fn close(&mut self) {
        self.cursor = None;
        self.cursor_panel = PanelKey::None;
    }

    /// Keep the cursor on a pickable day of the visible month.
    fn sync(&mut self, state: &AppState) -> Option<CalendarPage> {
        let page = state.search.calendar_page()?;
        let open = state.search.open_panel();
        if open != self.cursor_panel {
            self.cursor_panel = open;
            let dates = state.search.dates();
            self.cursor = match open {
                PanelKey::CheckIn => dates.check_in,
                _ => dates.check_out,
            };
        }
        let in_view = |d: NaiveDate| page.cells.iter().any(|c| c.date == d && !c.outside);
        if !self.cursor.is_some_and(in_view) {
            self.cursor = page
                .cells
                .iter()
                .find(|c| c.is_pickable())
                .or_else(|| page.cells.iter().find(|c| !c.outside))
                .map(|c| c.date);
        }
        Some(page)
    }

    /// Move the cursor by `days`, paging the month when it leaves the view.
    fn step(&mut self, page: &CalendarPage, days: i64) -> Vec<Action> {
        let Some(cursor) = self.cursor else {
            return vec![];
        };
        let target = cursor + Duration::days(days);
        if target < month_start(page.month) {
            if !page.can_prev {
                return vec![];
            }
            self.cursor = Some(target);
            vec![Action::PrevMonth]
        } else if target > month_end(page.month) {
            self.cursor = Some(target);
            vec![Action::NextMonth]
        } else {
            self.cursor = Some(target);
            vec![]
        }
    }

    fn cell_style(&self, cell: &DayCell) -> Style {
        let mut style = Style::default().fg(C_PRIMARY);
        if cell.outside {
            return Style::default().fg(C_SEPARATOR);
        }
        if cell.disabled {
            style = Style::default().fg(C_MUTED).add_modifier(Modifier::CROSSED_OUT);
        } else if cell.today {
            style = style.fg(C_TODAY).add_modifier(Modifier::BOLD);
        }
        if cell.in_range {
            style = style.bg(C_RANGE_BG);
        }
        if cell.selected {
            style = Style::default()
                .fg(C_PANEL_BG)
                .bg(C_ACCENT)
                .add_modifier(Modifier::BOLD);
        }
        if self.cursor == Some(cell.date) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }
}

impl Component for CalendarPanel {
    fn handle_key(&mut self, key: KeyEvent, state: &AppState) -> Vec<Action> {
        let Some(page) = self.sync(state) else {
            return vec![];
        };
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.step(&page, -1),
            KeyCode::Right | KeyCode::Char('l') => self.step(&page, 1),
            KeyCode::Up | KeyCode::Char('k') => self.step(&page, -7),
            KeyCode::Down | KeyCode::Char('j') => self.step(&page, 7),
            KeyCode::Char('[') | KeyCode::PageUp => vec![Action::PrevMonth],
            KeyCode::Char(']') | KeyCode::PageDown => vec![Action::NextMonth],
            KeyCode::Enter | KeyCode::Char(' ') => match self.cursor {
                Some(date) => vec![Action::PickDate(date)],
                None => vec![],
            },
            _ => vec![],
        }
    }

    fn handle_mouse(&mut self, event: MouseEvent, _state: &AppState) -> Vec<Action> {
        let (col, row) = (event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if hit(self.prev_rect, col, row) {
                    return vec![Action::PrevMonth];
                }
                if hit(self.next_rect, col, row) {
                    return vec![Action::NextMonth];
                }
                match self.cell_rects.iter().find(|(_, r)| hit(*r, col, row)) {
                    Some((date, _)) => {
                        self.cursor = Some(*date);
                        vec![Action::PickDate(*date)]
                    }
                    None => vec![],
                }
            }
            MouseEventKind::ScrollUp => vec![Action::PrevMonth],
            MouseEventKind::ScrollDown => vec![Action::NextMonth],
            _ => vec![],
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState) {
        self.cell_rects.clear();
        let Some(page) = self.sync(state) else {
            return;
        };
        let title = match state.search.open_panel() {
            PanelKey::CheckIn => "Check in",
            _ => "Check out",
        };
        frame.render_widget(Clear, area);
        let block = popover_box(title, focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height < 8 || inner.width < CELL_W * 7 {
            return;
        }

        // Month header: ‹ June 2026 ›
        let month_title = format_month_title(page.month);
        let prev_style = if page.can_prev {
            Style::default().fg(C_ACCENT)
        } else {
            Style::default().fg(C_SEPARATOR)
        };
        self.prev_rect = Rect { x: inner.x, y: inner.y, width: 2, height: 1 };
        self.next_rect = Rect {
            x: inner.x + inner.width - 2,
            y: inner.y,
            width: 2,
            height: 1,
        };
        let pad = (inner.width as usize).saturating_sub(month_title.chars().count() + 4);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("‹ ", prev_style),
                Span::raw(" ".repeat(pad / 2)),
                Span::styled(
                    month_title,
                    Style::default().fg(C_PRIMARY).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" ".repeat(pad - pad / 2)),
                Span::styled(" ›", Style::default().fg(C_ACCENT)),
            ])),
            Rect { height: 1, ..inner },
        );

        let weekdays: Vec<Span> = WEEKDAY_LABELS
            .iter()
            .map(|l| Span::styled(format!(" {l} "), Style::default().fg(C_SECONDARY)))
            .collect();
        frame.render_widget(
            Paragraph::new(Line::from(weekdays)),
            Rect { y: inner.y + 1, height: 1, ..inner },
        );

        for (week, cells) in page.cells.chunks(7).enumerate() {
            let y = inner.y + 2 + week as u16;
            let spans: Vec<Span> = cells
                .iter()
                .map(|cell| Span::styled(format!(" {:>2} ", cell.date.day()), self.cell_style(cell)))
                .collect();
            for (i, cell) in cells.iter().enumerate() {
                if cell.is_pickable() {
                    let r = Rect {
                        x: inner.x + i as u16 * CELL_W,
                        y,
                        width: CELL_W,
                        height: 1,
                    };
                    self.cell_rects.push((cell.date, r));
                }
            }
            frame.render_widget(Paragraph::new(Line::from(spans)), Rect { y, height: 1, ..inner });
        }

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                footer(&state.search.dates()),
                Style::default().fg(C_MUTED),
            ))),
            Rect { y: inner.y + 8, height: 1, ..inner },
        );
    }
}

/// Status line under the grid: a hint until a date is set, then the stay length.
fn footer(dates: &DateRange) -> String {
    if dates.is_empty() {
        return "[ ] month  Enter pick".to_string();
    }
    match (dates.check_in, dates.nights()) {
        (_, Some(1)) => "1 night".to_string(),
        (_, Some(n)) => format!("{n} nights"),
        (Some(d), None) => format!("from {}", format_short(d)),
        (None, None) => "pick check in".to_string(),
    }
}
