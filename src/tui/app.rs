use std::io;
use std::time::Duration;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use super::events::{Action, AppEvent, InputMode, Notification, NotificationLevel};
use super::layout::{centered_rect, PortalLayout};
use super::theme;
use super::trigger::{TriggerKey, TriggerListener};
use super::views::catalog::CatalogViewState;
use super::views::{cover, module_modal};
use crate::core::{DisguiseMode, PortalView, Session, SessionView, StateChange};

/// Ticks a notification stays on screen.
const NOTIFICATION_TTL_TICKS: u32 = 100;
/// Maximum notifications shown at once.
const MAX_NOTIFICATIONS: usize = 3;

/// Central application state (Elm architecture).
pub struct AppState {
    /// Whether the app is still running.
    pub running: bool,
    /// Catalog, filter, focus and disguise state.
    pub session: Session,
    /// Cursor over the visible module list.
    pub catalog_view: CatalogViewState,
    /// Whether typed characters edit the search query.
    pub input_mode: InputMode,
    /// Whether the help modal is open.
    pub show_help: bool,
    /// Active notifications (max 3 visible).
    pub notifications: Vec<Notification>,
    /// Key that toggles the cover document.
    trigger: TriggerKey,
    /// Frame area from the last draw, for mouse hit-testing.
    last_area: Rect,
    /// Receiver for listener and session events.
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Sender handed to the trigger listener and session observer.
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl AppState {
    pub fn new(
        mut session: Session,
        trigger: TriggerKey,
        event_rx: mpsc::UnboundedReceiver<AppEvent>,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        let observer_tx = event_tx.clone();
        session.subscribe(move |change| {
            let _ = observer_tx.send(AppEvent::StateChanged(change));
        });

        Self {
            running: true,
            session,
            catalog_view: CatalogViewState::new(),
            input_mode: InputMode::Browse,
            show_help: false,
            notifications: Vec::new(),
            trigger,
            last_area: Rect::default(),
            event_rx,
            event_tx,
        }
    }

    // ── Elm event loop ──────────────────────────────────────────────────

    /// Main event loop: render → select → update → loop.
    ///
    /// The trigger listener lives exactly as long as this call.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let listener = TriggerListener::install(self.trigger, self.event_tx.clone());
        let mut tick_interval = tokio::time::interval(tick_rate);

        while self.running {
            // Render
            terminal.draw(|frame| {
                self.last_area = frame.area();
                self.render(frame);
            })?;

            // Select next event
            tokio::select! {
                _ = tick_interval.tick() => {
                    self.on_tick();
                }
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event);
                }
            }
        }

        listener.remove();
        Ok(())
    }

    // ── Event handling ──────────────────────────────────────────────────

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            // The listener has already classified the key; no view gets a say.
            AppEvent::Trigger => {
                self.session.toggle_disguise();
            }
            AppEvent::Input(input) => self.handle_input(input),
            AppEvent::StateChanged(change) => self.on_state_changed(change),
            AppEvent::Quit => {
                self.running = false;
            }
        }
    }

    fn handle_input(&mut self, event: Event) {
        if is_force_quit(&event) {
            self.handle_action(Action::Quit);
            return;
        }

        // Priority 1: Cover swallows everything except its resume control
        if self.session.is_disguised() {
            if self.is_resume_input(&event) {
                self.handle_action(Action::Resume);
            }
            return;
        }

        // Priority 2: Help modal
        if self.show_help {
            if let Some(action) = map_help_input(&event) {
                self.handle_action(action);
            }
            return;
        }

        // Priority 3: Module overlay
        if self.session.focused_surface().is_some() {
            if let Some(action) = map_module_input(&event) {
                self.handle_action(action);
            }
            return;
        }

        // Priority 4: Search field
        if self.input_mode == InputMode::Search && self.handle_search_input(&event) {
            return;
        }

        // Priority 5: Browse keybindings
        if let Some(action) = map_browse_input(&event) {
            self.handle_action(action);
        }
    }

    fn is_resume_input(&self, event: &Event) -> bool {
        match event {
            Event::Key(KeyEvent {
                code: KeyCode::Char('r'),
                modifiers: KeyModifiers::CONTROL,
                kind: KeyEventKind::Press,
                ..
            }) => true,
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => cover::hits_resume_control(self.last_area, *column, *row),
            _ => false,
        }
    }

    /// Edit the query. Returns true if consumed.
    fn handle_search_input(&mut self, event: &Event) -> bool {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return false;
        };

        match (*code, *modifiers) {
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                let change = self.session.clear_query();
                self.sync_cursor(change);
            }
            (KeyCode::Enter | KeyCode::Tab, _) => {
                self.input_mode = InputMode::Browse;
            }
            (KeyCode::Backspace, _) => {
                let change = self.session.pop_query_char();
                self.sync_cursor(change);
            }
            (KeyCode::Char(c), m)
                if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let change = self.session.push_query_char(c);
                self.sync_cursor(change);
            }
            _ => return false,
        }
        true
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::SelectNext => {
                let len = self.session.visible().len();
                self.catalog_view.select_next(len);
            }
            Action::SelectPrev => {
                let len = self.session.visible().len();
                self.catalog_view.select_prev(len);
            }
            Action::NextCategory => {
                let change = self.session.cycle_category(1);
                self.sync_cursor(change);
            }
            Action::PrevCategory => {
                let change = self.session.cycle_category(-1);
                self.sync_cursor(change);
            }
            Action::StartSearch => {
                self.input_mode = InputMode::Search;
            }
            Action::ClearSearch => {
                let change = self.session.clear_query();
                self.sync_cursor(change);
            }
            Action::OpenSelected => {
                // Open the row the list highlights.
                self.catalog_view.clamp(self.session.visible().len());
                self.session.open_visible(self.catalog_view.selected());
            }
            Action::CloseModule => {
                self.session.close();
            }
            Action::OpenExternally => self.open_focused_externally(),
            Action::EnterDisguise => {
                self.session.set_disguise(DisguiseMode::Disguised);
            }
            Action::Resume => {
                self.session.set_disguise(DisguiseMode::Normal);
            }
            Action::ShowHelp => {
                self.show_help = true;
            }
            Action::CloseHelp => {
                self.show_help = false;
            }
            Action::Quit => {
                self.running = false;
            }
        }
    }

    fn open_focused_externally(&mut self) {
        let Some(surface) = self.session.focused_surface() else {
            return;
        };
        let title = surface.title().to_string();
        match module_modal::open_externally(surface) {
            Ok(()) => self.push_notification(
                format!("Opened {title} in a new tab"),
                NotificationLevel::Success,
            ),
            Err(e) => {
                log::error!("Failed to open {title} externally: {e}");
                self.push_notification(
                    format!("Could not open browser: {e}"),
                    NotificationLevel::Error,
                );
            }
        }
    }

    /// Positions shift under a new filter; start from the top.
    ///
    /// Runs in the same step as the filter edit. Keys already queued behind
    /// it must see the new cursor, not wait for the observer round trip.
    fn sync_cursor(&mut self, change: Option<StateChange>) {
        if change == Some(StateChange::Filter) {
            self.catalog_view.reset();
        }
    }

    fn on_state_changed(&mut self, change: StateChange) {
        match change {
            StateChange::Filter => {
                log::trace!("{} modules visible", self.session.visible().len());
            }
            StateChange::Focus => {
                if self.session.focused_surface().is_some() {
                    self.input_mode = InputMode::Browse;
                }
            }
            StateChange::Disguise => {
                log::debug!("Disguise now {:?}", self.session.disguise_mode());
            }
        }
    }

    // ── Notifications ───────────────────────────────────────────────────

    /// Push a notification (dedup by message, max 3).
    pub fn push_notification(&mut self, message: String, level: NotificationLevel) {
        if self.notifications.iter().any(|n| n.message == message) {
            return;
        }

        self.notifications.push(Notification {
            message,
            level,
            ttl_ticks: NOTIFICATION_TTL_TICKS,
        });

        while self.notifications.len() > MAX_NOTIFICATIONS {
            self.notifications.remove(0);
        }
    }

    /// Tick: decrement notification TTLs, dismiss expired.
    fn on_tick(&mut self) {
        for n in &mut self.notifications {
            n.ttl_ticks = n.ttl_ticks.saturating_sub(1);
        }
        self.notifications.retain(|n| n.ttl_ticks > 0);
    }

    // ── Rendering ───────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let view = match self.session.view() {
            SessionView::Cover => {
                cover::render(frame, area);
                return;
            }
            SessionView::Portal(view) => view,
        };

        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_BASE).fg(theme::TEXT)),
            area,
        );

        let layout = PortalLayout::compute(area);
        self.catalog_view
            .render(frame, &layout, &view, self.input_mode == InputMode::Search);
        self.render_status_bar(frame, layout.status, &view);

        // Overlays
        if let Some(surface) = view.focused {
            module_modal::render(frame, area, surface);
        }

        self.render_notifications(frame, area);

        if self.show_help {
            self.render_help_modal(frame, area);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, view: &PortalView) {
        let mode_indicator = match self.input_mode {
            InputMode::Search => Span::styled(" SEARCH ", theme::search_badge()),
            InputMode::Browse => Span::raw(""),
        };

        let status = Line::from(vec![
            Span::styled(" NORTHWOOD ", theme::brand_badge()),
            Span::raw(" "),
            mode_indicator,
            Span::raw(" "),
            Span::styled(
                view.filter.category.label().to_string(),
                Style::default()
                    .fg(theme::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" │ "),
            Span::styled(format!("{} modules", view.visible.len()), theme::muted()),
            Span::raw(" │ "),
            Span::styled("/", theme::key_hint()),
            Span::raw(":search "),
            Span::styled("[ ]", theme::key_hint()),
            Span::raw(":category "),
            Span::styled("Enter", theme::key_hint()),
            Span::raw(":open "),
            Span::styled("?", theme::key_hint()),
            Span::raw(":help "),
            Span::styled("q", theme::key_hint()),
            Span::raw(":quit"),
        ]);

        frame.render_widget(Paragraph::new(status), area);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect) {
        if self.notifications.is_empty() {
            return;
        }

        let max_width = 50.min(area.width.saturating_sub(2));
        let height = self.notifications.len() as u16;
        let x = area.width.saturating_sub(max_width + 1);
        let y = 1;

        let notification_area = Rect::new(x, y, max_width, height);

        let lines: Vec<Line> = self
            .notifications
            .iter()
            .map(|n| {
                let (prefix, color) = match n.level {
                    NotificationLevel::Success => ("✓", theme::SUCCESS),
                    NotificationLevel::Error => ("✗", theme::ERROR),
                };
                Line::from(vec![
                    Span::styled(
                        format!(" {prefix} "),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(n.message.as_str()),
                ])
            })
            .collect();

        frame.render_widget(Clear, notification_area);
        frame.render_widget(
            Paragraph::new(lines).style(Style::default().bg(theme::BG_SURFACE).fg(theme::TEXT)),
            notification_area,
        );
    }

    fn render_help_modal(&self, frame: &mut Frame, area: Rect) {
        let modal = centered_rect(60, 80, area);
        let trigger = self.trigger.to_string();

        let keybindings = vec![
            ("Anywhere:", ""),
            (trigger.as_str(), "Hide / show the portal"),
            ("Ctrl+C", "Force quit"),
            ("", ""),
            ("Library:", ""),
            ("/", "Search modules"),
            ("Ctrl+U", "Clear search"),
            ("j/k ↓/↑", "Move selection"),
            ("[ ] / h l", "Previous / next category"),
            ("Enter", "Open module"),
            ("p", "Panic: show cover page"),
            ("?", "Toggle this help"),
            ("q", "Quit"),
            ("", ""),
            ("Search:", ""),
            ("Enter / Tab", "Finish editing"),
            ("Backspace", "Delete last character"),
            ("", ""),
            ("Module:", ""),
            ("o", "Open in new tab"),
            ("x / Backspace", "Close module"),
            ("", ""),
            ("Cover page:", ""),
            ("Ctrl+R", "Resume"),
        ];

        let mut lines = vec![
            Line::raw(""),
            Line::from(Span::styled(" Keybindings", theme::title())),
            Line::raw(""),
        ];

        for (key, desc) in &keybindings {
            if key.is_empty() {
                lines.push(Line::raw(""));
            } else if desc.is_empty() {
                lines.push(Line::from(Span::styled(format!("  {key}"), theme::title())));
            } else {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(format!("{:<16}", key), theme::key_hint()),
                    Span::raw(*desc),
                ]));
            }
        }

        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::raw("  Press "),
            Span::styled("?", theme::key_hint()),
            Span::raw(" or "),
            Span::styled("q", theme::key_hint()),
            Span::raw(" to close"),
        ]));

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(theme::border_focused())
            .style(Style::default().bg(theme::BG_SURFACE).fg(theme::TEXT));

        frame.render_widget(Clear, modal);
        frame.render_widget(Paragraph::new(lines).block(block), modal);
    }
}

// ── Input mapping ───────────────────────────────────────────────────────────

fn is_force_quit(event: &Event) -> bool {
    matches!(
        event,
        Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            ..
        })
    )
}

fn map_help_input(event: &Event) -> Option<Action> {
    let Event::Key(KeyEvent {
        code,
        kind: KeyEventKind::Press,
        ..
    }) = event
    else {
        return None;
    };
    match code {
        KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc => Some(Action::CloseHelp),
        _ => None,
    }
}

fn map_module_input(event: &Event) -> Option<Action> {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        ..
    }) = event
    else {
        return None;
    };
    if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }
    match code {
        KeyCode::Char('o') => Some(Action::OpenExternally),
        KeyCode::Char('x') | KeyCode::Backspace => Some(Action::CloseModule),
        KeyCode::Char('p') => Some(Action::EnterDisguise),
        KeyCode::Char('?') => Some(Action::ShowHelp),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

fn map_browse_input(event: &Event) -> Option<Action> {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        ..
    }) = event
    else {
        return None;
    };

    match (*code, *modifiers) {
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Some(Action::ClearSearch),
        (_, m) if m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => None,
        (KeyCode::Char('q'), _) => Some(Action::Quit),
        (KeyCode::Char('?'), _) => Some(Action::ShowHelp),
        (KeyCode::Char('/'), _) => Some(Action::StartSearch),
        (KeyCode::Char('p'), _) => Some(Action::EnterDisguise),
        (KeyCode::Char('j') | KeyCode::Down, _) => Some(Action::SelectNext),
        (KeyCode::Char('k') | KeyCode::Up, _) => Some(Action::SelectPrev),
        (KeyCode::Char(']') | KeyCode::Char('l') | KeyCode::Right, _) => {
            Some(Action::NextCategory)
        }
        (KeyCode::Char('[') | KeyCode::Char('h') | KeyCode::Left, _) => {
            Some(Action::PrevCategory)
        }
        (KeyCode::Enter, _) => Some(Action::OpenSelected),
        _ => None,
    }
}
