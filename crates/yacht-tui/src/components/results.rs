//! Results component — the page a submitted search lands on.

use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use yacht_search::catalog::SearchResults;
use yacht_search::listing::{ListingCard, ListingKind, ProfessionalCard};

use crate::{
    action::Action,
    app_state::AppState,
    component::{hit, Component},
    theme::{
        C_ACCENT, C_FEATURED, C_LOCATION, C_MUTED, C_PRICE, C_PRIMARY, C_SECONDARY,
        C_SELECTION_BG,
    },
    widgets::{
        pane_chrome::{page_box, Badge},
        scrollable_list::ScrollableList,
    },
};

/// Rows per result card: title, details, description.
const CARD_ROWS: u16 = 3;

#[derive(Debug, Clone)]
enum ResultItem {
    Listing(ListingCard),
    Professional(ProfessionalCard),
}

pub struct Results {
    list: ScrollableList<ResultItem>,
    /// URL the list was built from; a new page resets the cursor.
    shown_url: Option<String>,
    list_area: Rect,
}

impl Results {
    pub fn new() -> Self {
        Self {
            list: ScrollableList::new(),
            shown_url: None,
            list_area: Rect::default(),
        }
    }

    fn sync(&mut self, state: &AppState) {
        let Some(page) = state.router.page() else {
            return;
        };
        let items: Vec<ResultItem> = match &page.results {
            SearchResults::Listings(cards) => {
                cards.iter().cloned().map(ResultItem::Listing).collect()
            }
            SearchResults::Professionals(cards) => {
                cards.iter().cloned().map(ResultItem::Professional).collect()
            }
            SearchResults::SellCallToAction => Vec::new(),
        };
        let fresh = self.shown_url.as_deref() != Some(page.url.as_str());
        if fresh || items.len() != self.list.len() {
            self.list.set_items(items);
        }
        if fresh {
            self.list.select_first();
            self.shown_url = Some(page.url.clone());
        }
    }

    fn visible_cards(&self) -> usize {
        (self.list_area.height / CARD_ROWS) as usize
    }
}

/// Cut `s` to at most `max` display columns, marking the cut with `…`.
pub fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

fn listing_lines(card: &ListingCard, width: usize, selected: bool) -> [Line<'static>; 3] {
    let title_style = if selected {
        Style::default().fg(C_PRIMARY).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(C_PRIMARY)
    };
    let price_w = card.price.width() + 1;
    let mut title_spans = Vec::new();
    let mut used = 1;
    if card.featured {
        title_spans.push(Span::styled("★ ", Style::default().fg(C_FEATURED)));
        used += 2;
    }
    let title_max = width.saturating_sub(used + price_w + 1);
    let title = truncate(&card.title, title_max);
    let gap = width.saturating_sub(used + title.width() + price_w);
    title_spans.insert(0, Span::raw(" "));
    title_spans.push(Span::styled(title, title_style));
    title_spans.push(Span::raw(" ".repeat(gap)));
    title_spans.push(Span::styled(
        card.price.clone(),
        Style::default().fg(C_PRICE).add_modifier(Modifier::BOLD),
    ));

    let mut details = vec![Span::styled(
        format!(" ⚲ {}", card.location),
        Style::default().fg(C_LOCATION),
    )];
    if !card.subtitle.is_empty() {
        details.push(Span::styled(
            format!("  {}", card.subtitle),
            Style::default().fg(C_SECONDARY),
        ));
    }
    if card.kind == ListingKind::Charter && card.berths > 0 {
        details.push(Span::styled(
            format!("  · sleeps {}", card.berths),
            Style::default().fg(C_SECONDARY),
        ));
    }

    let body = if card.description.is_empty() {
        card.seller.clone()
    } else {
        card.description.clone()
    };
    [
        Line::from(title_spans),
        Line::from(details),
        Line::from(Span::styled(
            format!(" {}", truncate(&body, width.saturating_sub(2))),
            Style::default().fg(C_MUTED),
        )),
    ]
}

fn professional_lines(card: &ProfessionalCard, width: usize, selected: bool) -> [Line<'static>; 3] {
    let name_style = if selected {
        Style::default().fg(C_PRIMARY).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(C_PRIMARY)
    };
    [
        Line::from(vec![
            Span::raw(" "),
            Span::styled(truncate(&card.name, width.saturating_sub(2)), name_style),
        ]),
        Line::from(vec![
            Span::styled(format!(" {}", card.category_label), Style::default().fg(C_ACCENT)),
            Span::styled(format!("  ⚲ {}", card.location), Style::default().fg(C_LOCATION)),
        ]),
        Line::from(Span::styled(
            format!(" {}", truncate(&card.description, width.saturating_sub(2))),
            Style::default().fg(C_MUTED),
        )),
    ]
}

fn message_lines(lines: &[&str]) -> Vec<Line<'static>> {
    let mut out = vec![Line::from("")];
    for (i, l) in lines.iter().enumerate() {
        let style = if i == 0 {
            Style::default().fg(C_PRIMARY).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(C_SECONDARY)
        };
        out.push(Line::from(Span::styled(format!("  {l}"), style)));
    }
    out
}

impl Component for Results {
    fn handle_key(&mut self, key: KeyEvent, state: &AppState) -> Vec<Action> {
        self.sync(state);
        let page = self.visible_cards().max(1);
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.list.select_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.list.select_up(1),
            KeyCode::PageDown => self.list.select_down(page),
            KeyCode::PageUp => self.list.select_up(page),
            KeyCode::Char('g') | KeyCode::Home => self.list.select_first(),
            KeyCode::Char('G') | KeyCode::End => self.list.select_last(),
            _ => {}
        }
        vec![]
    }

    fn handle_mouse(&mut self, event: MouseEvent, state: &AppState) -> Vec<Action> {
        self.sync(state);
        match event.kind {
            MouseEventKind::ScrollDown => self.list.select_down(1),
            MouseEventKind::ScrollUp => self.list.select_up(1),
            MouseEventKind::Down(MouseButton::Left)
                if hit(self.list_area, event.column, event.row) =>
            {
                let row = ((event.row - self.list_area.y) / CARD_ROWS) as usize;
                self.list.handle_click(row);
            }
            _ => {}
        }
        vec![]
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState) {
        self.sync(state);
        let Some(page) = state.router.page() else {
            return;
        };
        let count = if state.router.is_loaded() {
            page.results.len().to_string()
        } else {
            "…".to_string()
        };
        let badge = match page.results {
            SearchResults::SellCallToAction => None,
            _ => Some(Badge {
                text: &count,
                color: C_ACCENT,
            }),
        };
        let block = page_box(page.route.title(), focused, badge);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.list_area = inner;

        if !state.router.is_loaded() {
            frame.render_widget(Paragraph::new(message_lines(&["Loading listings…"])), inner);
            return;
        }
        match &page.results {
            SearchResults::SellCallToAction => {
                frame.render_widget(
                    Paragraph::new(message_lines(&[
                        "List your yacht",
                        "Reach buyers and charter guests across the marketplace.",
                        "Add photos, specification and price; you can save a draft",
                        "and publish when ready.",
                    ])),
                    inner,
                );
                return;
            }
            results if results.is_empty() => {
                frame.render_widget(
                    Paragraph::new(message_lines(&[
                        "Nothing matches this search",
                        "Try another location, a different keyword or fewer guests.",
                    ])),
                    inner,
                );
                return;
            }
            _ => {}
        }

        let visible = self.visible_cards();
        self.list.ensure_visible(visible);
        let width = inner.width as usize;
        let mut lines: Vec<Line> = Vec::new();
        for (i, item) in self.list.visible_items(visible) {
            let selected = i == self.list.selected;
            let card = match item {
                ResultItem::Listing(c) => listing_lines(c, width, selected),
                ResultItem::Professional(c) => professional_lines(c, width, selected),
            };
            for line in card {
                lines.push(if selected {
                    line.style(Style::default().bg(C_SELECTION_BG))
                } else {
                    line
                });
            }
        }
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_display_width() {
        assert_eq!(truncate("Blue Horizon", 20), "Blue Horizon");
        assert_eq!(truncate("Blue Horizon", 6), "Blue …");
        assert_eq!(truncate("ブルーホライズン", 5), "ブル…");
        assert_eq!(truncate("", 0), "");
    }

    #[test]
    fn listing_title_line_fits_width() {
        let card = ListingCard {
            id: "x".into(),
            kind: ListingKind::Sale,
            title: "A very long yacht name that will not fit".into(),
            subtitle: "Sunseeker Manhattan 68 · 2019".into(),
            location: "Palma, Spain".into(),
            price: "€1,895,000".into(),
            berths: 8,
            length_m: 21.3,
            description: String::new(),
            seller: "Balearic Yacht Brokers".into(),
            featured: true,
        };
        let [title, _, body] = listing_lines(&card, 40, false);
        assert!(title.width() <= 40);
        assert!(body.spans.iter().any(|s| s.content.contains("Balearic")));
    }
}
