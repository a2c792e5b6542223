//! Catalog view: the portal's module library.
//!
//! Header with brand, search bar and category chips; a sidebar with the
//! portal navigation and upcoming tasks; and the filtered module list.
//! Everything is drawn from a [`PortalView`] projection; the only state kept
//! here is the list cursor.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::core::{CatalogEntry, PortalView};
use crate::tui::layout::PortalLayout;
use crate::tui::theme;
use crate::tui::widgets::search_bar::SearchBar;

const EMPTY_STATE: &str = "No learning modules found in this category.";

/// Decorative sidebar tasks: (title, due, urgent).
const UPCOMING_TASKS: &[(&str, &str, bool)] = &[
    ("History Essay", "Due in 2 hours", true),
    ("Physics Quiz", "Tomorrow", false),
];

/// List cursor over the visible modules.
#[derive(Debug, Default)]
pub struct CatalogViewState {
    selected: usize,
}

impl CatalogViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of the cursor within the visible list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn select_prev(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    /// Keep the cursor inside a list that just changed length.
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn reset(&mut self) {
        self.selected = 0;
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, layout: &PortalLayout, view: &PortalView, editing: bool) {
        self.render_header(frame, layout.header, view, editing);
        if let Some(sidebar) = layout.sidebar {
            render_sidebar(frame, sidebar);
        }
        self.render_modules(frame, layout.main, view);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, view: &PortalView, editing: bool) {
        let rows = Layout::vertical([
            Constraint::Length(1), // Brand
            Constraint::Length(3), // Search
            Constraint::Length(1), // Category chips
        ])
        .split(area);

        let brand = Line::from(vec![
            Span::styled(" 🎓 NORTHWOOD ACADEMY ", theme::brand_badge()),
            Span::raw(" "),
            Span::styled("STUDENT RESOURCE PORTAL", theme::muted()),
        ]);
        let student = Line::from(vec![
            Span::styled("J. Doe", theme::heading()),
            Span::styled(" · Grade 11 ", theme::muted()),
            Span::styled("[p] ⚠ ", Style::default().fg(theme::ALERT).add_modifier(Modifier::BOLD)),
        ]);
        frame.render_widget(Paragraph::new(brand), rows[0]);
        frame.render_widget(
            Paragraph::new(student).alignment(Alignment::Right),
            rows[0],
        );

        SearchBar::new(&view.filter.query, editing).render(frame, rows[1]);

        let active = view.filter.category.label();
        let mut chips = vec![Span::raw(" ")];
        for label in &view.categories {
            chips.push(Span::styled(format!(" {label} "), theme::chip(*label == active)));
            chips.push(Span::raw(" "));
        }
        frame.render_widget(Paragraph::new(Line::from(chips)), rows[2]);
    }

    fn render_modules(&self, frame: &mut Frame, area: Rect, view: &PortalView) {
        let breadcrumb = if view.filter.is_default() {
            " Home / Interactive Learning Modules ".to_string()
        } else {
            format!(
                " Home / Interactive Learning Modules / {} ",
                view.filter.category.label()
            )
        };
        let block = theme::block_focused("Digital Curriculum Library")
            .title_bottom(Line::styled(breadcrumb, theme::dim()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::vertical([
            Constraint::Length(2), // Intro
            Constraint::Min(1),    // Modules
        ])
        .split(inner);

        frame.render_widget(
            Paragraph::new(Line::styled(
                " Select a module to begin your interactive study session.",
                theme::muted(),
            )),
            chunks[0],
        );

        if view.no_matches || view.visible.is_empty() {
            let empty = vec![
                Line::raw(""),
                Line::styled(EMPTY_STATE, theme::dim()),
            ];
            frame.render_widget(
                Paragraph::new(empty).alignment(Alignment::Center),
                chunks[1],
            );
            return;
        }

        let items: Vec<ListItem> = view
            .visible
            .iter()
            .map(|entry| module_item(entry))
            .collect();

        let list = List::new(items)
            .highlight_style(theme::highlight())
            .highlight_symbol("▸ ");

        let mut state = ListState::default();
        state.select(Some(self.selected.min(view.visible.len() - 1)));
        frame.render_stateful_widget(list, chunks[1], &mut state);
    }
}

fn module_item(entry: &CatalogEntry) -> ListItem<'static> {
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(entry.title.clone(), theme::heading()),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", entry.category.to_uppercase()),
                theme::title(),
            ),
        ]),
        Line::from(vec![
            Span::styled(format!("Module ID: {}", entry.module_code()), theme::dim()),
            Span::raw("   "),
            Span::styled("LAUNCH MODULE ↗", theme::key_hint()),
        ]),
        Line::raw(""),
    ])
}

fn render_sidebar(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(5), // Navigation
        Constraint::Min(3),    // Upcoming tasks
    ])
    .split(area);

    let nav = vec![
        Line::styled(" My Assignments", theme::muted()),
        Line::styled(" Schedule", theme::muted()),
        Line::styled(" Learning Modules", theme::chip(true)),
    ];
    frame.render_widget(
        Paragraph::new(nav).block(theme::block_default("Navigation")),
        chunks[0],
    );

    let mut tasks = Vec::new();
    for (title, due, urgent) in UPCOMING_TASKS {
        let marker = if *urgent {
            theme::TASK_URGENT
        } else {
            theme::TASK_NORMAL
        };
        tasks.push(Line::from(vec![
            Span::styled("▌", Style::default().fg(marker)),
            Span::styled(*title, theme::heading()),
        ]));
        tasks.push(Line::from(vec![
            Span::styled("▌", Style::default().fg(marker)),
            Span::styled(*due, theme::dim()),
        ]));
    }
    frame.render_widget(
        Paragraph::new(tasks).block(theme::block_default("Upcoming Tasks")),
        chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::core::{Catalog, Session, SessionView};

    fn session() -> Session {
        let catalog = Catalog::from_entries(vec![
            CatalogEntry::new(
                1_u64,
                "Algebra Basics",
                "Math",
                "https://img.example.org/1.png",
                "https://play.example.org/1/",
            ),
            CatalogEntry::new(
                2_u64,
                "Cell Biology",
                "Science",
                "https://img.example.org/2.png",
                "https://play.example.org/2/",
            ),
        ])
        .unwrap();
        Session::new(catalog)
    }

    fn draw(session: &Session, state: &CatalogViewState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| {
                let SessionView::Portal(view) = session.view() else {
                    panic!("expected portal");
                };
                let layout = PortalLayout::compute(frame.area());
                state.render(frame, &layout, &view, false);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_cursor_wraps() {
        let mut state = CatalogViewState::new();
        state.select_prev(3);
        assert_eq!(state.selected(), 2);
        state.select_next(3);
        assert_eq!(state.selected(), 0);
        state.select_next(0);
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut state = CatalogViewState::new();
        state.select_next(5);
        state.select_next(5);
        state.clamp(1);
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn test_renders_visible_modules_and_chips() {
        let screen = draw(&session(), &CatalogViewState::new());
        assert!(screen.contains("Algebra Basics"));
        assert!(screen.contains("Cell Biology"));
        assert!(screen.contains("Module ID: 104X"));
        assert!(screen.contains(" Science "));
    }

    #[test]
    fn test_renders_empty_state() {
        let mut s = session();
        s.set_query("zz");
        let screen = draw(&s, &CatalogViewState::new());
        assert!(screen.contains(EMPTY_STATE));
        assert!(!screen.contains("Algebra Basics"));
    }
}
