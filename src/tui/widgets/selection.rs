//! Selection view widget - a picker list beside a detail card
//!
//! Backs both the Winners tab (country → statistics) and the Year Selection
//! tab (year → final result).

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::chrome::{
    centered, render_keybindings, render_selection_list, render_separator, render_title,
};
use super::tabs::{Tab, TabBar};
use crate::tui::theme::Theme;

/// Width of the picker column
const LIST_WIDTH: u16 = 22;

/// Right-hand card contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detail {
    /// Nothing picked yet, or the pick has no data
    Placeholder(String),
    /// One line per list-group item
    Items(Vec<String>),
}

/// Selection view widget
pub struct SelectionView<'a> {
    title: &'a str,
    items: &'a [String],
    cursor: Option<usize>,
    detail: &'a Detail,
    theme: Theme,
    tab: Tab,
}

impl<'a> SelectionView<'a> {
    pub fn new(
        title: &'a str,
        items: &'a [String],
        cursor: Option<usize>,
        detail: &'a Detail,
        theme: Theme,
    ) -> Self {
        Self {
            title,
            items,
            cursor,
            detail,
            theme,
            tab: Tab::Winners,
        }
    }

    pub fn with_tab(mut self, tab: Tab) -> Self {
        self.tab = tab;
        self
    }
}

impl Widget for SelectionView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = centered(area);
        let chunks = Layout::vertical([
            Constraint::Length(1), // Top padding
            Constraint::Length(1), // Tabs
            Constraint::Length(1), // Separator
            Constraint::Length(1), // Title
            Constraint::Length(1), // Blank
            Constraint::Fill(1),   // Body
            Constraint::Length(1), // Separator
            Constraint::Length(1), // Keybindings
        ])
        .split(area);

        TabBar::new(self.tab, self.theme).render(chunks[1], buf);
        render_separator(chunks[2], buf, self.theme);
        render_title(chunks[3], buf, self.title, self.theme);

        let body = Layout::horizontal([
            Constraint::Length(1),
            Constraint::Length(LIST_WIDTH),
            Constraint::Length(2),
            Constraint::Fill(1),
        ])
        .split(chunks[5]);

        render_selection_list(body[1], buf, self.items, self.cursor, self.theme);
        self.render_detail(body[3], buf);

        render_separator(chunks[6], buf, self.theme);
        render_keybindings(
            chunks[7],
            buf,
            &[("↑/↓", ": Select"), ("c", ": Clear")],
            self.theme,
        );
    }
}

impl SelectionView<'_> {
    fn render_detail(&self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = match self.detail {
            Detail::Placeholder(message) => vec![Line::from(Span::styled(
                message.as_str(),
                Style::default().fg(self.theme.muted()),
            ))],
            Detail::Items(items) => items
                .iter()
                .map(|item| match item.split_once(": ") {
                    Some((label, value)) => Line::from(vec![
                        Span::styled(
                            format!("{}: ", label),
                            Style::default().fg(self.theme.year()),
                        ),
                        Span::styled(
                            value,
                            Style::default()
                                .fg(self.theme.text())
                                .add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    None => Line::from(item.as_str()),
                })
                .collect(),
        };

        let height = (lines.len() as u16 + 2).min(area.height);
        let card = Rect { height, ..area };
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.accent())),
            )
            .render(card, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.y..area.y + area.height)
            .map(|y| {
                (area.x..area.x + area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_placeholder() {
        let items = vec!["Brazil".to_string(), "Italy".to_string()];
        let detail = Detail::Placeholder("Pick a country.".to_string());
        let area = Rect::new(0, 0, 90, 16);
        let mut buf = Buffer::empty(area);

        SelectionView::new("View World Cup Winners", &items, None, &detail, Theme::Dark)
            .render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("View World Cup Winners"));
        assert!(text.contains("Pick a country."));
        assert!(text.contains("Italy"));
    }

    #[test]
    fn test_renders_items() {
        let items = vec!["2022".to_string()];
        let detail = Detail::Items(vec![
            "Year: 2022".to_string(),
            "Winner: Argentina".to_string(),
        ]);
        let area = Rect::new(0, 0, 90, 16);
        let mut buf = Buffer::empty(area);

        SelectionView::new("View World Cup by Year", &items, Some(0), &detail, Theme::Light)
            .with_tab(Tab::Years)
            .render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("[Year Selection]"));
        assert!(text.contains("Winner: Argentina"));
        assert!(text.contains("▶ 2022"));
    }
}
