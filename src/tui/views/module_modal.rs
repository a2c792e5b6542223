//! Module overlay: full-view display of the focused catalog entry.
//!
//! Draws the mounted [`EmbedSurface`] inside a centered modal. The terminal
//! cannot host web content, so the surface panel shows what is mounted and
//! `o` hands the same URL to the system browser.

use std::io;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::core::EmbedSurface;
use crate::tui::layout::centered_rect;
use crate::tui::theme;

/// Hand the surface's content URL to the platform opener.
///
/// Fire-and-forget: the browser's own load result is not observed.
pub fn open_externally(surface: &EmbedSurface) -> io::Result<()> {
    log::info!("Opening {} externally", surface.content_url());
    open::that_detached(surface.content_url())
}

pub fn render(frame: &mut Frame, area: Rect, surface: &EmbedSurface) {
    let modal = centered_rect(80, 80, area);
    frame.render_widget(Clear, modal);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_focused())
        .style(Style::default().bg(theme::BG_SURFACE));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    if inner.height < 5 || inner.width < 20 {
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(2), // Title + subtitle
        Constraint::Min(3),    // Surface
        Constraint::Length(1), // Footer
    ])
    .split(inner);

    render_title(frame, chunks[0], surface);
    render_surface(frame, chunks[1], surface);
    render_footer(frame, chunks[2]);
}

fn render_title(frame: &mut Frame, area: Rect, surface: &EmbedSurface) {
    let lines = vec![
        Line::from(vec![
            Span::styled(" 📖 ", theme::brand_badge()),
            Span::raw(" "),
            Span::styled(surface.title().to_string(), theme::heading()),
        ]),
        Line::styled(
            "     Interactive Curriculum Module • Northwood Academy",
            theme::dim(),
        ),
    ];
    frame.render_widget(Paragraph::new(lines), area);

    let actions = Line::from(vec![
        Span::styled("[o]", theme::key_hint()),
        Span::styled(" open in new tab  ", theme::muted()),
        Span::styled("[x]", theme::key_hint()),
        Span::styled(" close ", theme::muted()),
    ]);
    frame.render_widget(Paragraph::new(actions).alignment(Alignment::Right), area);
}

fn render_surface(frame: &mut Frame, area: Rect, surface: &EmbedSurface) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_default())
        .style(Style::default().bg(theme::BG_BASE));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::raw(""),
        Line::styled("Module loaded", theme::title()),
        Line::raw(""),
        Line::styled(surface.content_url().to_string(), Style::default().fg(theme::PRIMARY_LIGHT)),
        Line::from(vec![
            Span::styled("Preview: ", theme::dim()),
            Span::styled(surface.thumbnail_url().to_string(), theme::muted()),
        ]),
        Line::raw(""),
        Line::styled(
            format!("Session active for {}s", surface.mounted_for().as_secs()),
            theme::muted(),
        ),
        Line::raw(""),
        Line::styled(
            "This module runs in your browser. Press o to launch it.",
            theme::dim(),
        ),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Line::from(vec![
        Span::styled(
            " ⛶ FULLSCREEN MODE ENABLED",
            theme::dim().add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(footer), area);
    frame.render_widget(
        Paragraph::new(Line::styled(
            "NORTHWOOD ACADEMY DIGITAL LEARNING ENVIRONMENT ",
            theme::dim().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right),
        area,
    );
}
