//! Colour themes: the navy school-portal look and the plain cover article.
//!
//! All colour constants are RGB truecolor. Views import from here instead of
//! using inline `Color::*` literals.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

// ── Portal palette ──────────────────────────────────────────────────────────

/// District navy: brand, active category, focused borders.
pub const PRIMARY: Color = Color::Rgb(0x1E, 0x3A, 0x8A);
/// Lighter navy: hints, selected rows on dark terminals.
pub const PRIMARY_LIGHT: Color = Color::Rgb(0x3B, 0x82, 0xF6);

/// Panic button red.
pub const ALERT: Color = Color::Rgb(0xDC, 0x26, 0x26);
/// Task marker orange.
pub const TASK_URGENT: Color = Color::Rgb(0xFB, 0x92, 0x3C);
/// Task marker blue.
pub const TASK_NORMAL: Color = Color::Rgb(0x60, 0xA5, 0xFA);

/// Page background.
pub const BG_BASE: Color = Color::Rgb(0xF3, 0xF4, 0xF6);
/// Cards, header, sidebar panels.
pub const BG_SURFACE: Color = Color::Rgb(0xFF, 0xFF, 0xFF);

/// Slate body text.
pub const TEXT: Color = Color::Rgb(0x1E, 0x29, 0x3B);
/// Secondary labels.
pub const TEXT_MUTED: Color = Color::Rgb(0x64, 0x74, 0x8B);
/// Faint hints.
pub const TEXT_DIM: Color = Color::Rgb(0x94, 0xA3, 0xB8);

// ── Semantic ────────────────────────────────────────────────────────────────

pub const ERROR: Color = Color::Rgb(0xEF, 0x44, 0x44);
pub const SUCCESS: Color = Color::Rgb(0x22, 0xC5, 0x5E);

// ── Cover article ───────────────────────────────────────────────────────────

pub const COVER_BG: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
pub const COVER_TEXT: Color = Color::Rgb(0x00, 0x00, 0x00);
pub const COVER_MUTED: Color = Color::Rgb(0x4B, 0x55, 0x63);
pub const COVER_LINK: Color = Color::Rgb(0x25, 0x63, 0xEB);
pub const COVER_BOX: Color = Color::Rgb(0xF3, 0xF4, 0xF6);
/// Barely distinguishable from the page background.
pub const COVER_GHOST: Color = Color::Rgb(0xF0, 0xF0, 0xF0);

// ── Style helpers ───────────────────────────────────────────────────────────

/// Brand text (titles, active items).
pub fn title() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

/// Section header style.
pub fn heading() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn border_focused() -> Style {
    Style::default().fg(PRIMARY)
}

pub fn border_default() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Selected list row.
pub fn highlight() -> Style {
    Style::default()
        .fg(BG_SURFACE)
        .bg(PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Key hint style (e.g., "[q]:quit").
pub fn key_hint() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

/// Status bar brand badge.
pub fn brand_badge() -> Style {
    Style::default()
        .fg(BG_SURFACE)
        .bg(PRIMARY)
        .add_modifier(Modifier::BOLD)
}

/// Search-mode badge.
pub fn search_badge() -> Style {
    Style::default()
        .fg(BG_SURFACE)
        .bg(PRIMARY_LIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Category chip, active or not.
pub fn chip(active: bool) -> Style {
    if active {
        Style::default()
            .fg(BG_SURFACE)
            .bg(PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_MUTED)
    }
}

// ── Block builders ──────────────────────────────────────────────────────────

/// A bordered block with focused styling.
pub fn block_focused(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_focused())
}

/// A bordered block with default (unfocused) styling.
pub fn block_default(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_default())
}
