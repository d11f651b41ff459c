//! Map view widget - countries ranked by the selected metric
//!
//! Stands in for the choropleth: each country that has a non-zero value for
//! the selected metric gets a row with all three counts and a bar.

use std::collections::HashMap;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::chrome::{centered, render_keybindings, render_separator, render_title};
use super::tabs::{Tab, TabBar};
use crate::services::project_for_metric;
use crate::tui::theme::Theme;
use crate::types::{CountryAggregate, Metric};

/// Table width: Country(20) + Wins(6) + Runner-ups(12) + Total Finals(14) + gap(2) + Bar(18)
const TABLE_WIDTH: u16 = 72;
const BAR_WIDTH: usize = 18;

/// Format a bar scaled against the maximum value
/// Example: value=2, max=4, width=8 → "████░░░░"
pub fn format_bar(value: u32, max: u32, width: usize) -> String {
    if max == 0 || width == 0 {
        return "░".repeat(width);
    }
    let filled = ((value as f64 / max as f64) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapRow {
    pub country: String,
    pub wins: u32,
    pub runner_ups: u32,
    pub total_finals: u32,
    /// Value of the selected metric
    pub value: u32,
}

/// Data for the map view
#[derive(Debug)]
pub struct MapData {
    pub metric: Metric,
    /// Ordered by value descending
    pub rows: Vec<MapRow>,
    pub max_value: u32,
}

impl MapData {
    /// Build rows from Aggregator::compute_aggregates() output
    pub fn from_aggregates(aggregates: &[CountryAggregate], metric: Metric) -> Self {
        let by_country: HashMap<&str, &CountryAggregate> = aggregates
            .iter()
            .map(|a| (a.country.as_str(), a))
            .collect();

        let rows: Vec<MapRow> = project_for_metric(aggregates, metric)
            .into_iter()
            .filter_map(|point| {
                by_country.get(point.country.as_str()).map(|agg| MapRow {
                    wins: agg.wins,
                    runner_ups: agg.runner_ups,
                    total_finals: agg.total_finals,
                    value: point.value,
                    country: point.country,
                })
            })
            .collect();

        let max_value = rows.iter().map(|r| r.value).max().unwrap_or(0);
        Self {
            metric,
            rows,
            max_value,
        }
    }

    pub fn title(&self) -> String {
        format!("World Cup {} by Country", self.metric.column())
    }
}

/// Map view widget
pub struct MapView<'a> {
    data: &'a MapData,
    theme: Theme,
    tab: Tab,
}

impl<'a> MapView<'a> {
    pub fn new(data: &'a MapData, theme: Theme) -> Self {
        Self {
            data,
            theme,
            tab: Tab::Map,
        }
    }

    pub fn with_tab(mut self, tab: Tab) -> Self {
        self.tab = tab;
        self
    }
}

impl Widget for MapView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = centered(area);
        let chunks = Layout::vertical([
            Constraint::Length(1), // Top padding
            Constraint::Length(1), // Tabs
            Constraint::Length(1), // Separator
            Constraint::Length(1), // Title
            Constraint::Length(1), // Metric selector
            Constraint::Length(1), // Blank
            Constraint::Length(1), // Header
            Constraint::Fill(1),   // Rows
            Constraint::Length(1), // Separator
            Constraint::Length(1), // Keybindings
        ])
        .split(area);

        TabBar::new(self.tab, self.theme).render(chunks[1], buf);
        render_separator(chunks[2], buf, self.theme);
        render_title(chunks[3], buf, &self.data.title(), self.theme);
        self.render_selector(chunks[4], buf);
        self.render_header(chunks[6], buf);
        self.render_rows(chunks[7], buf);
        render_separator(chunks[8], buf, self.theme);
        render_keybindings(chunks[9], buf, &[("←/→", ": Metric")], self.theme);
    }
}

impl MapView<'_> {
    fn table_area(&self, area: Rect) -> Rect {
        let offset = area.width.saturating_sub(TABLE_WIDTH) / 2;
        Rect {
            x: area.x + offset,
            y: area.y,
            width: TABLE_WIDTH.min(area.width),
            height: area.height,
        }
    }

    fn render_selector(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, metric) in Metric::all().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(self.theme.muted())));
            }
            let style = if *metric == self.data.metric {
                Style::default()
                    .fg(self.theme.metric_color(*metric))
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(self.theme.muted())
            };
            spans.push(Span::styled(metric.label(), style));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let bold = Style::default()
            .fg(self.theme.text())
            .add_modifier(Modifier::BOLD);
        let header = Line::from(vec![
            Span::styled(format!("{:<20}", "Country"), bold),
            Span::styled(format!("{:>6}", "Wins"), bold),
            Span::styled(format!("{:>12}", "Runner-ups"), bold),
            Span::styled(format!("{:>14}", "Total Finals"), bold),
        ]);
        Paragraph::new(header).render(self.table_area(area), buf);
    }

    fn render_rows(&self, area: Rect, buf: &mut Buffer) {
        let table = self.table_area(area);
        let bar_color = self.theme.metric_color(self.data.metric);

        for (i, row) in self
            .data
            .rows
            .iter()
            .take(table.height as usize)
            .enumerate()
        {
            let count_style = |m: Metric| {
                if m == self.data.metric {
                    Style::default()
                        .fg(self.theme.text())
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(self.theme.muted())
                }
            };

            let line = Line::from(vec![
                Span::styled(
                    format!("{:<20}", row.country),
                    Style::default().fg(self.theme.accent()),
                ),
                Span::styled(format!("{:>6}", row.wins), count_style(Metric::Wins)),
                Span::styled(
                    format!("{:>12}", row.runner_ups),
                    count_style(Metric::RunnerUps),
                ),
                Span::styled(
                    format!("{:>14}", row.total_finals),
                    count_style(Metric::TotalFinals),
                ),
                Span::raw("  "),
                Span::styled(
                    format_bar(row.value, self.data.max_value, BAR_WIDTH),
                    Style::default().fg(bar_color),
                ),
            ]);

            Paragraph::new(line).render(
                Rect {
                    y: table.y + i as u16,
                    height: 1,
                    ..table
                },
                buf,
            );
        }
    }
}
