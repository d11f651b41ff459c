//! Timeline view widget - winner of every edition, one colored bar per year

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::chrome::{centered, render_keybindings, render_separator, render_title};
use super::tabs::{Tab, TabBar};
use crate::tui::theme::Theme;
use crate::types::TimelineEntry;

const BAR: &str = "██████████";

/// Timeline view widget
pub struct TimelineView<'a> {
    entries: &'a [TimelineEntry],
    scroll: usize,
    theme: Theme,
    tab: Tab,
}

impl<'a> TimelineView<'a> {
    pub fn new(entries: &'a [TimelineEntry], scroll: usize, theme: Theme) -> Self {
        Self {
            entries,
            scroll,
            theme,
            tab: Tab::Timeline,
        }
    }

    pub fn with_tab(mut self, tab: Tab) -> Self {
        self.tab = tab;
        self
    }

    /// Rows of chrome around the list (padding, tabs, separators, title, footer)
    const CHROME_ROWS: u16 = 7;

    /// Largest useful scroll offset for a terminal of `height` rows
    pub fn max_scroll(entries: &[TimelineEntry], height: u16) -> usize {
        let visible = height.saturating_sub(Self::CHROME_ROWS) as usize;
        entries.len().saturating_sub(visible)
    }
}

impl Widget for TimelineView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = centered(area);
        let chunks = Layout::vertical([
            Constraint::Length(1), // Top padding
            Constraint::Length(1), // Tabs
            Constraint::Length(1), // Separator
            Constraint::Length(1), // Title
            Constraint::Length(1), // Blank
            Constraint::Fill(1),   // Rows
            Constraint::Length(1), // Separator
            Constraint::Length(1), // Keybindings
        ])
        .split(area);

        TabBar::new(self.tab, self.theme).render(chunks[1], buf);
        render_separator(chunks[2], buf, self.theme);
        render_title(chunks[3], buf, "World Cup Winners by Year", self.theme);
        self.render_rows(chunks[5], buf);
        render_separator(chunks[6], buf, self.theme);
        render_keybindings(chunks[7], buf, &[("↑/↓", ": Scroll")], self.theme);
    }
}

impl TimelineView<'_> {
    fn render_rows(&self, area: Rect, buf: &mut Buffer) {
        let row_width: u16 = 4 + 2 + BAR.chars().count() as u16 + 2 + 16;
        let x = area.x + area.width.saturating_sub(row_width) / 2;

        for (i, entry) in self
            .entries
            .iter()
            .skip(self.scroll)
            .take(area.height as usize)
            .enumerate()
        {
            let color = self.theme.country_color(&entry.winner);
            let line = Line::from(vec![
                Span::styled(
                    entry.year.to_string(),
                    Style::default().fg(self.theme.year()),
                ),
                Span::raw("  "),
                Span::styled(BAR, Style::default().fg(color)),
                Span::raw("  "),
                Span::styled(
                    entry.winner.as_str(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ]);
            Paragraph::new(line).render(
                Rect {
                    x,
                    y: area.y + i as u16,
                    width: row_width.min(area.width),
                    height: 1,
                },
                buf,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(n: u16) -> Vec<TimelineEntry> {
        (0..n)
            .map(|i| TimelineEntry {
                year: 1930 + i * 4,
                winner: format!("Country {}", i),
            })
            .collect()
    }

    #[test]
    fn test_max_scroll() {
        let e = entries(22);
        // 30 rows - 7 chrome = 23 visible, everything fits
        assert_eq!(TimelineView::max_scroll(&e, 30), 0);
        // 17 rows - 7 = 10 visible
        assert_eq!(TimelineView::max_scroll(&e, 17), 12);
        assert_eq!(TimelineView::max_scroll(&e, 3), 22);
    }

    #[test]
    fn test_renders_from_scroll_offset() {
        let e = entries(22);
        let area = Rect::new(0, 0, 80, 12);
        let mut buf = Buffer::empty(area);

        TimelineView::new(&e, 2, Theme::Dark).render(area, &mut buf);

        let first_row: String = (0..80).map(|x| buf[(x, 5)].symbol()).collect();
        assert!(first_row.contains("1938"));
        assert!(first_row.contains("Country 2"));
    }
}
