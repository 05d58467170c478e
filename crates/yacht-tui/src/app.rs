//! App — component-based event loop for the trip search.
//!
//! Architecture:
//! - `App` owns all components and `AppState` (shared read-only data for components).
//! - A `tokio::mpsc` channel carries `AppMessage` events in from background tasks.
//! - The event loop draws each frame, then awaits the next message.
//! - Components return `Vec<Action>`; App dispatches each Action and is the
//!   only place the `SearchWidget` is mutated.

use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;
use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use yacht_search::calendar::format_short;
use yacht_search::catalog::Catalog;
use yacht_search::config::Config;
use yacht_search::fields::{FieldKey, FieldKind};
use yacht_search::mode::SearchMode;
use yacht_search::panel::PanelKey;
use yacht_search::widget::SearchWidget;

use crate::{
    action::{Action, HeroSlot},
    app_state::AppState,
    component::{hit, Component},
    components::{
        calendar_panel::{CalendarPanel, CALENDAR_PANEL_HEIGHT, CALENDAR_PANEL_WIDTH},
        guests_panel::{GuestsPanel, GUESTS_PANEL_HEIGHT, GUESTS_PANEL_WIDTH},
        help_overlay::HelpOverlay,
        location_panel::{LocationPanel, LOCATION_PANEL_WIDTH},
        mode_tabs::ModeTabs,
        results::Results,
        search_bar::{slots_for, SearchBar, SEARCH_BAR_HEIGHT},
    },
    focus::FocusRing,
    router::Router,
    terminal::TerminalGuard,
    widgets::{
        status_bar::{self, InputMode},
        toast::ToastManager,
    },
};

/// Upper bound on actions processed per input event, follow-ups included.
const MAX_ACTIONS_PER_EVENT: usize = 32;

// ── Internal event bus ────────────────────────────────────────────────────────

enum AppMessage {
    Event(Event),
    CatalogLoaded(yacht_search::Result<Catalog>),
}

/// Hit-test rects from the last frame.
#[derive(Default, Clone, Copy)]
struct Areas {
    tabs: Rect,
    search_bar: Rect,
    popover: Rect,
    results: Rect,
}

pub struct App {
    state: AppState,
    focus: FocusRing,
    catalog_path: PathBuf,

    // ── Components ───────────────────────────────────────────────────────────
    mode_tabs: ModeTabs,
    search_bar: SearchBar,
    location_panel: LocationPanel,
    calendar_panel: CalendarPanel,
    guests_panel: GuestsPanel,
    results: Results,
    help_overlay: HelpOverlay,

    toast: ToastManager,
    show_keys_bar: bool,
    areas: Areas,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, today: NaiveDate) -> Self {
        let mode = config.search.default_mode;
        let focus = FocusRing::new(slots_for(mode));
        let state = AppState {
            search: SearchWidget::with_mode(mode, today),
            locations: config.search.locations,
            router: Router::default(),
            input_mode: InputMode::Normal,
            focused_slot: focus.current(),
        };
        Self {
            state,
            focus,
            catalog_path: config.catalog.path,
            mode_tabs: ModeTabs::new(),
            search_bar: SearchBar::new(),
            location_panel: LocationPanel::new(),
            calendar_panel: CalendarPanel::new(),
            guests_panel: GuestsPanel::new(),
            results: Results::new(),
            help_overlay: HelpOverlay::new(),
            toast: ToastManager::new(),
            show_keys_bar: true,
            areas: Areas::default(),
            should_quit: false,
        }
    }

    // ── Main run loop ─────────────────────────────────────────────────────────

    pub async fn run(mut self) -> anyhow::Result<()> {
        let mut guard = TerminalGuard::acquire()?;
        let (tx, mut rx) = mpsc::channel::<AppMessage>(256);

        // ── Background task: keyboard/mouse events ────────────────────────────
        let event_tx = tx.clone();
        tokio::task::spawn_blocking(move || {
            while !event_tx.is_closed() {
                match event::poll(Duration::from_millis(250)) {
                    Ok(true) => match event::read() {
                        Ok(ev) => {
                            if event_tx.blocking_send(AppMessage::Event(ev)).is_err() {
                                break;
                            }
                        }
                        Err(_) => break,
                    },
                    Ok(false) => {}
                    Err(_) => break,
                }
            }
        });

        // ── Background task: catalog load ─────────────────────────────────────
        let catalog_tx = tx.clone();
        let catalog_path = self.catalog_path.clone();
        tokio::task::spawn_blocking(move || {
            let result = Catalog::load(&catalog_path);
            let _ = catalog_tx.blocking_send(AppMessage::CatalogLoaded(result));
        });
        drop(tx);

        // Toast expiry + component maintenance
        let mut ui_tick = tokio::time::interval(Duration::from_millis(100));
        ui_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        // ── Main loop ─────────────────────────────────────────────────────────
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                guard.terminal().draw(|f| self.draw(f))?;
            }
            needs_redraw = false;

            if self.should_quit {
                break;
            }

            tokio::select! {
                msg = rx.recv() => {
                    match msg {
                        Some(msg) => needs_redraw = self.handle_message(msg),
                        None => break,
                    }
                }
                _ = ui_tick.tick() => {
                    needs_redraw = self.on_tick();
                }
            }
        }

        // ── Teardown ──────────────────────────────────────────────────────────
        drop(rx);
        drop(guard);
        info!("yachts exiting");
        Ok(())
    }

    // ── Message handler ───────────────────────────────────────────────────────

    /// Returns `true` if the message requires a redraw.
    fn handle_message(&mut self, msg: AppMessage) -> bool {
        match msg {
            AppMessage::Event(ev) => match ev {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Release {
                        return false;
                    }
                    for a in self.handle_key(key) {
                        self.dispatch(a);
                    }
                }
                Event::Mouse(mouse) => {
                    let actions = self.handle_mouse(mouse);
                    if actions.is_empty() {
                        return false;
                    }
                    for a in actions {
                        self.dispatch(a);
                    }
                }
                Event::Resize(..) => {}
                _ => return false,
            },
            AppMessage::CatalogLoaded(Ok(catalog)) => {
                info!(
                    "catalog ready: {} listings, {} professionals",
                    catalog.listings.len(),
                    catalog.professionals.len()
                );
                self.state.router.set_catalog(catalog);
            }
            AppMessage::CatalogLoaded(Err(e)) => {
                error!("catalog load failed: {}", e);
                self.toast.error(format!("catalog: {}", e));
                let fallback = Catalog::seed().unwrap_or_else(|e| {
                    error!("bundled catalog unreadable: {}", e);
                    Catalog::default()
                });
                self.state.router.set_catalog(fallback);
            }
        }
        true
    }

    fn on_tick(&mut self) -> bool {
        let had_toasts = !self.toast.is_empty();
        self.toast.tick();
        let s = &self.state;
        let mut actions = Vec::new();
        actions.extend(self.search_bar.tick(s));
        actions.extend(self.results.tick(s));
        for a in actions {
            self.dispatch(a);
        }
        had_toasts
    }

    // ── Key handling ──────────────────────────────────────────────────────────

    fn handle_key(&mut self, key: KeyEvent) -> Vec<Action> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return vec![Action::Quit];
        }

        // Help overlay captures all keys when visible
        if self.help_overlay.visible {
            return self.help_overlay.handle_key(key, &self.state);
        }

        let s = &self.state;
        let open = s.search.open_panel();

        // Text input owns the keyboard; the location panel takes the
        // suggestion keys while it is open.
        if s.input_mode == InputMode::Editing {
            if open == PanelKey::Location
                && matches!(key.code, KeyCode::Up | KeyCode::Down | KeyCode::Enter)
            {
                return self.location_panel.handle_key(key, s);
            }
            return self.search_bar.handle_key(key, s);
        }

        if open.is_open() {
            match key.code {
                KeyCode::Esc => return vec![Action::Escape],
                KeyCode::Tab => return vec![Action::Escape, Action::FocusNext],
                KeyCode::BackTab => return vec![Action::Escape, Action::FocusPrev],
                _ => {}
            }
            return match open {
                PanelKey::Location => self.location_panel.handle_key(key, s),
                PanelKey::CheckIn | PanelKey::CheckOut => self.calendar_panel.handle_key(key, s),
                PanelKey::Guests => self.guests_panel.handle_key(key, s),
                PanelKey::None => vec![],
            };
        }

        match key.code {
            KeyCode::Char('q') => vec![Action::Quit],
            KeyCode::Char('?') => vec![Action::ToggleHelp],
            KeyCode::Char('K') => vec![Action::ToggleKeys],
            KeyCode::Char('m') => vec![Action::NextMode],
            KeyCode::Char('M') => vec![Action::PrevMode],
            KeyCode::Char('s') => vec![Action::Submit],
            KeyCode::Char('y') => match s.last_url() {
                Some(url) => vec![Action::CopyToClipboard(url.to_string())],
                None => vec![],
            },
            KeyCode::Backspace => vec![Action::Back],
            KeyCode::Tab => vec![Action::FocusNext],
            KeyCode::BackTab => vec![Action::FocusPrev],
            KeyCode::Esc => vec![Action::Escape],
            KeyCode::Char(c) if c.is_ascii_digit() => self.mode_tabs.handle_key(key, s),
            KeyCode::Char('j' | 'k' | 'g' | 'G')
            | KeyCode::Up
            | KeyCode::Down
            | KeyCode::PageUp
            | KeyCode::PageDown
            | KeyCode::Home
            | KeyCode::End => self.results.handle_key(key, s),
            _ => self.search_bar.handle_key(key, s),
        }
    }

    // ── Mouse handling ────────────────────────────────────────────────────────

    fn handle_mouse(&mut self, event: MouseEvent) -> Vec<Action> {
        let is_click = matches!(
            event.kind,
            MouseEventKind::Down(_) | MouseEventKind::ScrollUp | MouseEventKind::ScrollDown
        );
        if !is_click {
            return vec![];
        }
        if self.help_overlay.visible {
            return self.help_overlay.handle_mouse(event, &self.state);
        }

        let (col, row) = (event.column, event.row);
        let areas = self.areas;
        let s = &self.state;
        let open = s.search.open_panel();

        // The widget root: tabs, search bar and the open popover.
        if open.is_open() && hit(areas.popover, col, row) {
            return match open {
                PanelKey::Location => self.location_panel.handle_mouse(event, s),
                PanelKey::CheckIn | PanelKey::CheckOut => self.calendar_panel.handle_mouse(event, s),
                PanelKey::Guests => self.guests_panel.handle_mouse(event, s),
                PanelKey::None => vec![],
            };
        }
        if hit(areas.tabs, col, row) {
            return self.mode_tabs.handle_mouse(event, s);
        }
        if hit(areas.search_bar, col, row) {
            return self.search_bar.handle_mouse(event, s);
        }

        // Anything else is outside the widget
        let mut actions = Vec::new();
        if matches!(event.kind, MouseEventKind::Down(_)) {
            if s.input_mode == InputMode::Editing {
                actions.push(Action::EndEdit);
            }
            if open.is_open() {
                actions.push(Action::OutsideClick);
            }
        }
        if hit(areas.results, col, row) {
            actions.extend(self.results.handle_mouse(event, s));
        }
        actions
    }

    // ── Action dispatcher ─────────────────────────────────────────────────────

    fn dispatch(&mut self, action: Action) {
        let mut queue = VecDeque::from([action]);
        let mut processed = 0usize;
        while let Some(action) = queue.pop_front() {
            if processed == MAX_ACTIONS_PER_EVENT {
                warn!("dropping action {:?}: follow-up limit reached", action);
                break;
            }
            processed += 1;

            // Broadcast to components first, then apply at the app level
            let s = &self.state;
            let mut follow = Vec::new();
            follow.extend(self.mode_tabs.on_action(&action, s));
            follow.extend(self.search_bar.on_action(&action, s));
            follow.extend(self.location_panel.on_action(&action, s));
            follow.extend(self.calendar_panel.on_action(&action, s));
            follow.extend(self.guests_panel.on_action(&action, s));
            follow.extend(self.results.on_action(&action, s));
            follow.extend(self.help_overlay.on_action(&action, s));

            follow.extend(self.apply_action(action));
            queue.extend(follow);
        }
    }

    fn apply_action(&mut self, action: Action) -> Vec<Action> {
        if !matches!(action, Action::Noop) {
            debug!("apply_action: {:?}", action);
        }
        match action {
            // ── Mode ──────────────────────────────────────────────────────────
            Action::SetMode(mode) => self.set_mode(mode),
            Action::NextMode => self.set_mode(self.state.search.mode().next()),
            Action::PrevMode => self.set_mode(self.state.search.mode().prev()),

            // ── Focus ─────────────────────────────────────────────────────────
            Action::FocusNext => {
                self.focus.next();
                self.sync_focus();
            }
            Action::FocusPrev => {
                self.focus.prev();
                self.sync_focus();
            }
            Action::FocusSlot(slot) => {
                self.focus.set(slot);
                self.sync_focus();
            }

            // ── Fields ────────────────────────────────────────────────────────
            Action::ClickField(key) => {
                let open = self.state.search.click_field(key);
                self.focus.set(HeroSlot::Field(key));
                self.sync_focus();
                if key.kind() == FieldKind::Text {
                    // location edits only while its suggestions are showing
                    if key != FieldKey::Location || open == PanelKey::Location {
                        return vec![Action::BeginEdit(key)];
                    }
                    if self.state.input_mode == InputMode::Editing {
                        return vec![Action::EndEdit];
                    }
                }
            }
            Action::BeginEdit(key) => {
                self.state.input_mode = InputMode::Editing;
                self.focus.set(HeroSlot::Field(key));
                self.sync_focus();
            }
            Action::EndEdit => self.state.input_mode = InputMode::Normal,
            Action::TextChanged(key, value) => {
                self.state.search.set_text(key, &value);
                if key == FieldKey::Location {
                    self.state.search.focus_field(FieldKey::Location);
                }
            }
            Action::CycleService(forward) => self.state.search.cycle_service(forward),

            // ── Panels ────────────────────────────────────────────────────────
            Action::ChooseLocation(location) => {
                self.state.search.choose_location(&location);
                self.follow_panel();
            }
            Action::PickDate(date) => {
                if self.state.search.pick_date(date) {
                    self.follow_panel();
                } else {
                    debug!("{} is not pickable", date);
                    self.toast.warning(format!("{} is not available", format_short(date)));
                }
            }
            Action::PrevMonth => {
                self.state.search.prev_month();
            }
            Action::NextMonth => self.state.search.next_month(),
            Action::IncrementGuests => self.state.search.increment_guests(),
            Action::DecrementGuests => self.state.search.decrement_guests(),
            Action::GuestsDone => {
                self.state.search.guests_done();
                self.focus.set(HeroSlot::Submit);
                self.sync_focus();
            }
            Action::OutsideClick => self.state.search.outside_click(),
            Action::Escape => self.state.search.escape(),

            // ── Navigation ────────────────────────────────────────────────────
            Action::Submit => {
                self.state.input_mode = InputMode::Normal;
                let state = &mut self.state;
                state.search.submit(&mut state.router);
                if let Some(e) = &self.state.router.last_error {
                    self.toast.error(e.clone());
                }
            }
            Action::Back => {
                if !self.state.router.back() {
                    self.toast.info("no previous page");
                }
            }

            // ── UI toggles ────────────────────────────────────────────────────
            Action::ToggleHelp => {}
            Action::ToggleKeys => self.show_keys_bar = !self.show_keys_bar,
            Action::CopyToClipboard(text) => {
                match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(text.clone())) {
                    Ok(()) => self.toast.success(format!("copied: {}", text)),
                    Err(e) => {
                        warn!("clipboard error: {}", e);
                        self.toast.error(format!("clipboard error: {}", e));
                    }
                }
            }

            // ── System ────────────────────────────────────────────────────────
            Action::Quit => self.should_quit = true,
            Action::Noop => {}
        }
        vec![]
    }

    fn set_mode(&mut self, mode: SearchMode) {
        self.state.search.set_mode(mode);
        self.state.input_mode = InputMode::Normal;
        self.focus.set_items(slots_for(mode));
        self.sync_focus();
    }

    fn sync_focus(&mut self) {
        self.state.focused_slot = self.focus.current();
    }

    /// After a chain step, keyboard focus follows the panel that opened.
    fn follow_panel(&mut self) {
        let field = match self.state.search.open_panel() {
            PanelKey::Location => FieldKey::Location,
            PanelKey::CheckIn => FieldKey::CheckIn,
            PanelKey::CheckOut => FieldKey::CheckOut,
            PanelKey::Guests => FieldKey::Guests,
            PanelKey::None => return,
        };
        self.focus.set(HeroSlot::Field(field));
        self.sync_focus();
    }

    // ── Drawing ───────────────────────────────────────────────────────────────

    fn draw(&mut self, frame: &mut Frame) {
        use crate::theme::C_BG;
        use ratatui::widgets::Block;
        let area = frame.area();
        frame.render_widget(
            Block::default().style(ratatui::style::Style::default().bg(C_BG)),
            area,
        );

        let keys_h = if self.show_keys_bar { 1 } else { 0 };
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(SEARCH_BAR_HEIGHT),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(keys_h),
            ])
            .split(area);
        let (tabs_area, bar_area, results_area) = (outer[0], outer[2], outer[4]);
        let (sep_area, url_area, keys_area) = (outer[5], outer[6], outer[7]);

        let s = &self.state;
        let open = s.search.open_panel();
        let editing = s.input_mode == InputMode::Editing;

        self.mode_tabs.draw(frame, tabs_area, false, s);
        self.search_bar.draw(frame, bar_area, !open.is_open(), s);
        self.results
            .draw(frame, results_area, !open.is_open() && !editing, s);

        status_bar::draw_separator(frame, sep_area);
        status_bar::draw_url_bar(
            frame,
            url_area,
            s.last_url(),
            s.router.last_error.as_deref(),
        );
        if self.show_keys_bar {
            status_bar::draw_keys_bar(frame, keys_area, s.input_mode, open);
        }

        // ── Popover (over the results) ────────────────────────────────────────
        let popover = match open {
            PanelKey::Location => {
                let anchor = self.search_bar.field_rect(FieldKey::Location);
                let rect = popover_rect(anchor, LOCATION_PANEL_WIDTH, LocationPanel::height(s), area);
                self.location_panel.draw(frame, rect, true, s);
                rect
            }
            PanelKey::CheckIn | PanelKey::CheckOut => {
                let field = if open == PanelKey::CheckIn {
                    FieldKey::CheckIn
                } else {
                    FieldKey::CheckOut
                };
                let anchor = self.search_bar.field_rect(field);
                let rect = popover_rect(anchor, CALENDAR_PANEL_WIDTH, CALENDAR_PANEL_HEIGHT, area);
                self.calendar_panel.draw(frame, rect, true, s);
                rect
            }
            PanelKey::Guests => {
                let anchor = self.search_bar.field_rect(FieldKey::Guests);
                let rect = popover_rect(anchor, GUESTS_PANEL_WIDTH, GUESTS_PANEL_HEIGHT, area);
                self.guests_panel.draw(frame, rect, true, s);
                rect
            }
            PanelKey::None => Rect::default(),
        };
        if !open.is_date() {
            self.calendar_panel.close();
        }

        self.areas = Areas {
            tabs: tabs_area,
            search_bar: bar_area,
            popover,
            results: results_area,
        };

        self.help_overlay.draw(frame, area, false, s);
        self.toast.draw(frame, results_area);
    }
}

/// Place a `width`×`height` popover under `anchor`, kept inside `bounds`.
fn popover_rect(anchor: Option<Rect>, width: u16, height: u16, bounds: Rect) -> Rect {
    let Some(anchor) = anchor else {
        return Rect::default();
    };
    let width = width.max(anchor.width).min(bounds.width);
    let x = anchor.x.min(bounds.right().saturating_sub(width));
    let y = anchor.bottom();
    let height = height.min(bounds.bottom().saturating_sub(y));
    Rect {
        x,
        y,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(mode: SearchMode) -> App {
        let mut config = Config::default();
        config.search.default_mode = mode;
        let mut app = App::new(config, NaiveDate::from_ymd_opt(2026, 5, 20).unwrap());
        app.state.router.set_catalog(Catalog::seed().unwrap());
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        for a in app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)) {
            app.dispatch(a);
        }
    }

    #[test]
    fn popover_stays_on_screen() {
        let bounds = Rect::new(0, 0, 80, 24);
        let anchor = Rect::new(70, 3, 16, 3);
        let r = popover_rect(Some(anchor), 30, 11, bounds);
        assert_eq!(r.right(), 80);
        assert_eq!(r.y, 6);
        assert_eq!(r.height, 11);
        assert_eq!(popover_rect(None, 30, 11, bounds), Rect::default());
    }

    #[test]
    fn typing_a_location_then_enter_submits_buy_search() {
        let mut app = app(SearchMode::Buy);
        press(&mut app, KeyCode::Tab); // Query → Location
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state.input_mode, InputMode::Editing);
        assert_eq!(app.state.search.open_panel(), PanelKey::Location);
        for c in "Spain".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state.input_mode, InputMode::Normal);
        assert_eq!(app.state.search.open_panel(), PanelKey::None);
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.state.last_url(), Some("/buy?location=Spain"));
    }

    #[test]
    fn escape_closes_panel_from_keyboard() {
        let mut app = app(SearchMode::Charter);
        app.dispatch(Action::ClickField(FieldKey::Guests));
        assert_eq!(app.state.search.open_panel(), PanelKey::Guests);
        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state.search.open_panel(), PanelKey::None);
        assert_eq!(app.state.search.guests().map(|g| g.get()), Some(2));
    }

    #[test]
    fn click_outside_root_closes_panel() {
        let mut app = app(SearchMode::Charter);
        app.areas = Areas {
            tabs: Rect::new(0, 0, 80, 1),
            search_bar: Rect::new(0, 2, 80, 3),
            popover: Rect::new(0, 5, 30, 11),
            results: Rect::new(0, 6, 80, 14),
        };
        app.dispatch(Action::ClickField(FieldKey::CheckIn));
        let down = MouseEvent {
            kind: MouseEventKind::Down(event::MouseButton::Left),
            column: 60,
            row: 12,
            modifiers: KeyModifiers::NONE,
        };
        for a in app.handle_mouse(down) {
            app.dispatch(a);
        }
        assert_eq!(app.state.search.open_panel(), PanelKey::None);
    }

    #[test]
    fn mode_switch_resets_focus_ring() {
        let mut app = app(SearchMode::Buy);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.state.search.mode(), SearchMode::Professionals);
        assert_eq!(
            app.state.focused_slot,
            Some(HeroSlot::Field(FieldKey::Service))
        );
    }

    #[test]
    fn back_without_history_warns() {
        let mut app = app(SearchMode::Buy);
        press(&mut app, KeyCode::Backspace);
        assert!(!app.toast.is_empty());
    }

    #[test]
    fn past_date_warns_with_short_date() {
        let mut app = app(SearchMode::Charter);
        app.dispatch(Action::ClickField(FieldKey::CheckIn));
        app.dispatch(Action::PickDate(NaiveDate::from_ymd_opt(2026, 5, 19).unwrap()));
        assert_eq!(app.state.search.open_panel(), PanelKey::CheckIn);
        assert_eq!(app.toast.latest(), Some("19 May is not available"));
    }
}
