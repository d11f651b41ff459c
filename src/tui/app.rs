//! Application state and event loop

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget, DefaultTerminal, Frame};

use crate::report::{
    country_stat_items, no_final_message, year_result_items, COUNTRY_PLACEHOLDER,
    YEAR_PLACEHOLDER,
};
use crate::services::{Aggregator, DatasetStore, QueryService};
use crate::types::{CountryAggregate, CupError, Metric, TimelineEntry};

use super::theme::Theme;
use super::widgets::{
    help::HelpPopup,
    map::{MapData, MapView},
    selection::{Detail, SelectionView},
    tabs::Tab,
    timeline::TimelineView,
};

/// Data derived once at startup; the store never changes afterwards
pub struct AppData {
    pub winners: Vec<String>,
    pub years: Vec<u16>,
    pub year_labels: Vec<String>,
    pub aggregates: Vec<CountryAggregate>,
    pub timeline: Vec<TimelineEntry>,
}

impl AppData {
    pub fn load(store: &DatasetStore) -> Self {
        let query = QueryService::new(store);
        let years = query.list_years();
        Self {
            winners: query.list_winners(),
            year_labels: years.iter().map(u16::to_string).collect(),
            years,
            aggregates: Aggregator::compute_aggregates(store.records()),
            timeline: Aggregator::timeline(store.records()),
        }
    }
}

/// Move a list cursor one step; the first step from "nothing selected"
/// lands on the first item
fn step_cursor(cursor: Option<usize>, len: usize, down: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match (cursor, down) {
        (None, _) => Some(0),
        (Some(i), true) => Some((i + 1).min(len - 1)),
        (Some(i), false) => Some(i.saturating_sub(1)),
    }
}

/// Main application
pub struct App<'a> {
    store: &'a DatasetStore,
    data: AppData,
    theme: Theme,
    should_quit: bool,
    current_tab: Tab,
    show_help: bool,
    map_data: MapData,
    country_cursor: Option<usize>,
    country_detail: Detail,
    year_cursor: Option<usize>,
    year_detail: Detail,
    timeline_scroll: usize,
    viewport_height: u16,
}

impl<'a> App<'a> {
    pub fn new(store: &'a DatasetStore, theme: Theme, metric: Metric) -> Self {
        let data = AppData::load(store);
        let map_data = MapData::from_aggregates(&data.aggregates, metric);
        Self {
            store,
            data,
            theme,
            should_quit: false,
            current_tab: Tab::default(),
            show_help: false,
            map_data,
            country_cursor: None,
            country_detail: Detail::Placeholder(COUNTRY_PLACEHOLDER.to_string()),
            year_cursor: None,
            year_detail: Detail::Placeholder(YEAR_PLACEHOLDER.to_string()),
            timeline_scroll: 0,
            viewport_height: 0,
        }
    }

    /// Handle keyboard events
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Tab => {
                    self.current_tab = self.current_tab.next();
                }
                KeyCode::BackTab => {
                    self.current_tab = self.current_tab.prev();
                }
                KeyCode::Char(c @ '1'..='4') => {
                    if let Some(tab) = Tab::from_number(c as u8 - b'0') {
                        self.current_tab = tab;
                    }
                }
                KeyCode::Char('?') => {
                    self.show_help = !self.show_help;
                }
                KeyCode::Up | KeyCode::Char('k') => self.move_selection(false),
                KeyCode::Down | KeyCode::Char('j') => self.move_selection(true),
                KeyCode::Right | KeyCode::Char('m') if self.current_tab == Tab::Map => {
                    self.set_metric(self.map_data.metric.next());
                }
                KeyCode::Left if self.current_tab == Tab::Map => {
                    self.set_metric(self.map_data.metric.prev());
                }
                KeyCode::Char('c') | KeyCode::Backspace => self.clear_selection(),
                _ => {}
            },
            Event::Resize(_, height) => self.set_viewport_height(height),
            _ => {}
        }
    }

    pub fn set_viewport_height(&mut self, height: u16) {
        self.viewport_height = height;
        self.timeline_scroll = self.timeline_scroll.min(self.max_timeline_scroll());
    }

    fn max_timeline_scroll(&self) -> usize {
        TimelineView::max_scroll(&self.data.timeline, self.viewport_height)
    }

    fn set_metric(&mut self, metric: Metric) {
        tracing::debug!("Map metric: {}", metric);
        self.map_data = MapData::from_aggregates(&self.data.aggregates, metric);
    }

    /// Up/Down: move the picker on selection tabs, scroll on Timeline
    fn move_selection(&mut self, down: bool) {
        match self.current_tab {
            Tab::Winners => {
                let cursor = step_cursor(self.country_cursor, self.data.winners.len(), down);
                self.select_country(cursor);
            }
            Tab::Years => {
                let cursor = step_cursor(self.year_cursor, self.data.years.len(), down);
                self.select_year(cursor);
            }
            Tab::Timeline => {
                self.timeline_scroll = if down {
                    (self.timeline_scroll + 1).min(self.max_timeline_scroll())
                } else {
                    self.timeline_scroll.saturating_sub(1)
                };
            }
            Tab::Map => {}
        }
    }

    fn clear_selection(&mut self) {
        match self.current_tab {
            Tab::Winners => self.select_country(None),
            Tab::Years => self.select_year(None),
            Tab::Map | Tab::Timeline => {}
        }
    }

    fn select_country(&mut self, cursor: Option<usize>) {
        self.country_cursor = cursor;
        self.country_detail = match cursor.and_then(|i| self.data.winners.get(i)) {
            Some(country) => {
                let stats = QueryService::new(self.store).stats_for_country(country);
                tracing::debug!("Selected {}: {} finals", country, stats.total_finals);
                Detail::Items(country_stat_items(&stats))
            }
            None => Detail::Placeholder(COUNTRY_PLACEHOLDER.to_string()),
        };
    }

    fn select_year(&mut self, cursor: Option<usize>) {
        self.year_cursor = cursor;
        self.year_detail = match cursor.and_then(|i| self.data.years.get(i)) {
            Some(&year) => match QueryService::new(self.store).result_for_year(year) {
                Ok(result) => Detail::Items(year_result_items(&result)),
                Err(CupError::NotFound(year)) => Detail::Placeholder(no_final_message(year)),
                Err(e) => {
                    tracing::warn!("Year lookup failed: {}", e);
                    Detail::Placeholder(e.to_string())
                }
            },
            None => Detail::Placeholder(YEAR_PLACEHOLDER.to_string()),
        };
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Draw the application
    pub fn draw(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.area());
    }
}

impl Widget for &App<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.current_tab {
            Tab::Map => {
                MapView::new(&self.map_data, self.theme)
                    .with_tab(self.current_tab)
                    .render(area, buf);
            }
            Tab::Winners => {
                SelectionView::new(
                    "View World Cup Winners",
                    &self.data.winners,
                    self.country_cursor,
                    &self.country_detail,
                    self.theme,
                )
                .with_tab(self.current_tab)
                .render(area, buf);
            }
            Tab::Years => {
                SelectionView::new(
                    "View World Cup by Year",
                    &self.data.year_labels,
                    self.year_cursor,
                    &self.year_detail,
                    self.theme,
                )
                .with_tab(self.current_tab)
                .render(area, buf);
            }
            Tab::Timeline => {
                TimelineView::new(&self.data.timeline, self.timeline_scroll, self.theme)
                    .with_tab(self.current_tab)
                    .render(area, buf);
            }
        }

        // Render help popup overlay if active
        if self.show_help {
            let popup_area = HelpPopup::centered_area(area);
            HelpPopup::new(self.theme).render(popup_area, buf);
        }
    }
}

/// Run the TUI application.
/// Resolve the theme before calling this; detection needs cooked mode.
pub fn run(store: &DatasetStore, theme: Theme, metric: Metric) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();
    let result = run_app(&mut terminal, App::new(store, theme, metric));
    ratatui::restore();
    result
}

fn run_app(terminal: &mut DefaultTerminal, mut app: App<'_>) -> anyhow::Result<()> {
    app.set_viewport_height(terminal.size()?.height);
    tracing::info!("Dashboard started");

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        if app.should_quit() {
            break;
        }

        // Every redraw is driven by input; nothing changes in between
        let ev = event::read()?;
        app.handle_event(ev);
    }

    Ok(())
}
