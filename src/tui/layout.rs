//! Root layout: header + (sidebar | module list) + status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header rows: brand line, search bar, category chips.
pub const HEADER_HEIGHT: u16 = 5;
/// Width of the category/tasks sidebar.
pub const SIDEBAR_WIDTH: u16 = 24;
/// Hide the sidebar below this terminal width.
pub const HIDE_SIDEBAR_THRESHOLD: u16 = 70;

/// Computed layout regions for a single portal frame.
pub struct PortalLayout {
    pub header: Rect,
    /// Sidebar area (None on narrow terminals).
    pub sidebar: Option<Rect>,
    /// Module list.
    pub main: Rect,
    /// Status bar (bottom row).
    pub status: Rect,
}

impl PortalLayout {
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(1),    // Content (sidebar + main)
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        let header = rows[0];
        let content = rows[1];
        let status = rows[2];

        let (sidebar, main) = if area.width < HIDE_SIDEBAR_THRESHOLD {
            (None, content)
        } else {
            let cols = Layout::horizontal([
                Constraint::Length(SIDEBAR_WIDTH),
                Constraint::Min(1),
            ])
            .split(content);
            (Some(cols[0]), cols[1])
        };

        PortalLayout {
            header,
            sidebar,
            main,
            status,
        }
    }
}

/// Calculate a centered rect using percentage of parent area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
