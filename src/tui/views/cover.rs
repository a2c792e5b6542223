//! Cover document shown while disguised.
//!
//! A static encyclopedia article with nothing from the portal on it. The
//! only interactive element is the faint resume control in the bottom-right
//! corner (Ctrl+R, or a click when mouse support is on).

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::theme;

const RESUME_LABEL: &str = "resume";

const ARTICLE_TITLE: &str = "Photosynthesis";

const PARAGRAPHS: &[&str] = &[
    "is a process used by plants and other organisms to convert light energy into \
     chemical energy that, through cellular respiration, can later be released to \
     fuel the organism's activities.",
    "This chemical energy is stored in carbohydrate molecules, such as sugars and \
     starches, which are synthesized from carbon dioxide and water – hence the name \
     photosynthesis, from the Greek phōs, \"light\", and synthesis, \"putting together\".",
];

const CONTENTS: &[&str] = &[
    "1 Overview",
    "2 Photosynthetic membranes and organelles",
    "3 Light-dependent reactions",
    "4 Light-independent reactions",
];

/// Screen cell occupied by the resume control.
pub fn resume_control_area(area: Rect) -> Rect {
    let width = (RESUME_LABEL.len() as u16).min(area.width);
    Rect::new(
        area.x + area.width.saturating_sub(width + 1),
        area.y + area.height.saturating_sub(1),
        width,
        1.min(area.height),
    )
}

/// Whether a click at (`column`, `row`) hits the resume control.
pub fn hits_resume_control(area: Rect, column: u16, row: u16) -> bool {
    let control = resume_control_area(area);
    column >= control.x
        && column < control.x + control.width
        && row >= control.y
        && row < control.y + control.height
}

pub fn render(frame: &mut Frame, area: Rect) {
    let page_style = Style::default().bg(theme::COVER_BG).fg(theme::COVER_TEXT);
    frame.render_widget(Block::default().style(page_style), area);

    let page = Layout::horizontal([
        Constraint::Min(2),
        Constraint::Max(96),
        Constraint::Min(2),
    ])
    .split(area)[1];

    let rows = Layout::vertical([
        Constraint::Length(1), // Top margin
        Constraint::Length(2), // Heading + rule
        Constraint::Length(2), // Tagline
        Constraint::Min(6),    // Body
    ])
    .split(page);

    frame.render_widget(
        Paragraph::new(vec![
            Line::styled(
                ARTICLE_TITLE,
                Style::default()
                    .fg(theme::COVER_TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                "─".repeat(page.width as usize),
                Style::default().fg(theme::COVER_MUTED),
            ),
        ]),
        rows[1],
    );
    frame.render_widget(
        Paragraph::new(Line::styled(
            "From Wikipedia, the free encyclopedia",
            Style::default()
                .fg(theme::COVER_MUTED)
                .add_modifier(Modifier::ITALIC),
        )),
        rows[2],
    );

    let body = if page.width >= 70 {
        Layout::horizontal([Constraint::Min(30), Constraint::Length(30)]).split(rows[3])
    } else {
        Layout::horizontal([Constraint::Min(1), Constraint::Length(0)]).split(rows[3])
    };

    render_article(frame, body[0]);
    if body[1].width > 0 {
        render_figure(frame, body[1]);
    }

    frame.render_widget(
        Paragraph::new(Span::styled(
            RESUME_LABEL,
            Style::default().fg(theme::COVER_GHOST).bg(theme::COVER_BG),
        )),
        resume_control_area(area),
    );
}

fn render_article(frame: &mut Frame, area: Rect) {
    let text_style = Style::default().fg(theme::COVER_TEXT);

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{ARTICLE_TITLE} "),
            text_style.add_modifier(Modifier::BOLD),
        ),
        Span::styled(PARAGRAPHS[0], text_style),
    ])];
    for paragraph in &PARAGRAPHS[1..] {
        lines.push(Line::raw(""));
        lines.push(Line::styled(*paragraph, text_style));
    }

    let text_height = (area.height).saturating_sub(CONTENTS.len() as u16 + 3);
    let chunks = Layout::vertical([
        Constraint::Min(text_height.min(10)),
        Constraint::Length(CONTENTS.len() as u16 + 2),
    ])
    .split(area);

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }),
        chunks[0],
    );

    let contents: Vec<Line> = CONTENTS
        .iter()
        .map(|item| {
            Line::styled(
                *item,
                Style::default()
                    .fg(theme::COVER_LINK)
                    .add_modifier(Modifier::UNDERLINED),
            )
        })
        .collect();
    frame.render_widget(
        Paragraph::new(contents).block(
            Block::default()
                .title(Span::styled(
                    "Contents",
                    text_style.add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::COVER_MUTED))
                .style(Style::default().bg(theme::COVER_BOX)),
        ),
        chunks[1],
    );
}

fn render_figure(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::styled("   ╭──╮  ╭──╮", Style::default().fg(theme::SUCCESS)),
        Line::styled("   │▒▒│──│▒▒│", Style::default().fg(theme::SUCCESS)),
        Line::styled("   ╰──╯  ╰──╯", Style::default().fg(theme::SUCCESS)),
        Line::raw(""),
        Line::styled(
            "Plant cell structure",
            Style::default()
                .fg(theme::COVER_TEXT)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "Typical plant cell showing chloroplasts where photosynthesis occurs.",
            Style::default().fg(theme::COVER_MUTED),
        ),
    ];
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::COVER_MUTED)),
        ),
        area,
    );
}
