//! Single-line search field for the portal header.
//!
//! The query itself lives in the session's filter state; this widget only
//! draws it. Whitespace is rendered as typed, since it is matched literally.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::theme;

const PLACEHOLDER: &str = "Search curriculum resources...";

pub struct SearchBar<'a> {
    query: &'a str,
    /// Whether keystrokes currently edit the query.
    editing: bool,
}

impl<'a> SearchBar<'a> {
    pub fn new(query: &'a str, editing: bool) -> Self {
        Self { query, editing }
    }

    pub fn line(&self) -> Line<'a> {
        let prompt = Span::styled(
            " ⌕ ",
            if self.editing {
                theme::title()
            } else {
                theme::muted()
            },
        );

        if self.query.is_empty() && !self.editing {
            return Line::from(vec![
                prompt,
                Span::styled(PLACEHOLDER, theme::dim()),
                Span::styled("  (/ to search)", theme::dim()),
            ]);
        }

        let mut spans = vec![prompt, Span::styled(self.query, Style::default().fg(theme::TEXT))];
        if self.editing {
            spans.push(Span::styled(
                " ",
                Style::default()
                    .bg(theme::PRIMARY)
                    .add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        Line::from(spans)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = if self.editing {
            theme::block_focused("Search")
        } else {
            theme::block_default("Search")
        };
        frame.render_widget(Paragraph::new(self.line()).block(block), area);
    }
}
