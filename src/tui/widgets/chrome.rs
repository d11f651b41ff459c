//! Pieces shared by every view: separators, keybinding footer, centering,
//! and the selectable list used by the Winners and Year Selection tabs

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::tui::theme::Theme;

/// Maximum content width (keeps layout clean on wide terminals)
pub const MAX_CONTENT_WIDTH: u16 = 120;

/// Apply the max width constraint and center the content
pub fn centered(area: Rect) -> Rect {
    let content_width = area.width.min(MAX_CONTENT_WIDTH);
    let x_offset = (area.width.saturating_sub(content_width)) / 2;
    Rect {
        x: area.x + x_offset,
        y: area.y,
        width: content_width,
        height: area.height,
    }
}

pub fn render_separator(area: Rect, buf: &mut Buffer, theme: Theme) {
    let line = "─".repeat(area.width as usize);
    buf.set_string(area.x, area.y, &line, Style::default().fg(theme.muted()));
}

pub fn render_title(area: Rect, buf: &mut Buffer, title: &str, theme: Theme) {
    Paragraph::new(Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(theme.text())
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .render(area, buf);
}

/// Footer with the global bindings plus view-specific ones
pub fn render_keybindings(area: Rect, buf: &mut Buffer, extra: &[(&str, &str)], theme: Theme) {
    let mut spans = Vec::new();
    let global = [("q", ": Quit"), ("Tab", ": Switch view"), ("?", ": Help")];

    for (i, (key, desc)) in extra.iter().chain(global.iter()).enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(theme.accent())));
        spans.push(Span::styled(*desc, Style::default().fg(theme.muted())));
    }

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .render(area, buf);
}

/// First visible row so that `cursor` stays on screen
pub fn list_offset(cursor: Option<usize>, height: usize) -> usize {
    match cursor {
        Some(c) if height > 0 && c >= height => c + 1 - height,
        _ => 0,
    }
}

/// Vertical list with an optional highlighted row
pub fn render_selection_list(
    area: Rect,
    buf: &mut Buffer,
    items: &[String],
    cursor: Option<usize>,
    theme: Theme,
) {
    let height = area.height as usize;
    let offset = list_offset(cursor, height);

    for (row, (index, item)) in items.iter().enumerate().skip(offset).take(height).enumerate() {
        let selected = cursor == Some(index);
        let marker = if selected { "▶ " } else { "  " };
        let style = if selected {
            Style::default()
                .fg(theme.accent())
                .bg(theme.selection())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text())
        };

        let text = format!("{}{:<width$}", marker, item, width = (area.width as usize).saturating_sub(2));
        buf.set_stringn(
            area.x,
            area.y + row as u16,
            &text,
            area.width as usize,
            style,
        );
    }
}
