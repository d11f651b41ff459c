//! Tab bar widget for view navigation

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::tui::theme::Theme;

/// Available tabs in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Map,
    Winners,
    Years,
    Timeline,
}

impl Tab {
    /// Get the display label for this tab
    pub fn label(self) -> &'static str {
        match self {
            Self::Map => "Map",
            Self::Winners => "Winners",
            Self::Years => "Year Selection",
            Self::Timeline => "Timeline",
        }
    }

    /// Get all tabs in order
    pub fn all() -> &'static [Tab] {
        &[Tab::Map, Tab::Winners, Tab::Years, Tab::Timeline]
    }

    /// Get the next tab (wrapping)
    pub fn next(self) -> Self {
        match self {
            Self::Map => Self::Winners,
            Self::Winners => Self::Years,
            Self::Years => Self::Timeline,
            Self::Timeline => Self::Map,
        }
    }

    /// Get the previous tab (wrapping)
    pub fn prev(self) -> Self {
        match self {
            Self::Map => Self::Timeline,
            Self::Winners => Self::Map,
            Self::Years => Self::Winners,
            Self::Timeline => Self::Years,
        }
    }

    /// Get tab from number key (1-4)
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Map),
            2 => Some(Self::Winners),
            3 => Some(Self::Years),
            4 => Some(Self::Timeline),
            _ => None,
        }
    }
}

/// Tab bar widget showing available views
pub struct TabBar {
    selected: Tab,
    theme: Theme,
}

impl TabBar {
    pub fn new(selected: Tab, theme: Theme) -> Self {
        Self { selected, theme }
    }
}

impl Widget for TabBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        // Selected label is wrapped in brackets, 2 columns between labels
        let total_width: u16 = Tab::all()
            .iter()
            .map(|tab| {
                let extra = if *tab == self.selected { 2 } else { 0 };
                (tab.label().len() + extra) as u16 + 2
            })
            .sum::<u16>()
            .saturating_sub(2);

        let mut x = area.x + (area.width.saturating_sub(total_width)) / 2;

        for tab in Tab::all() {
            let is_selected = *tab == self.selected;
            let display = if is_selected {
                format!("[{}]", tab.label())
            } else {
                tab.label().to_string()
            };

            let display_len = display.len() as u16;
            if x + display_len > area.x + area.width {
                break;
            }

            let style = if is_selected {
                Style::default()
                    .fg(self.theme.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.muted())
            };

            buf.set_string(x, area.y, &display, style);
            x += display_len + 2;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, width: u16) -> String {
        (0..width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_tab_labels() {
        assert_eq!(Tab::Map.label(), "Map");
        assert_eq!(Tab::Winners.label(), "Winners");
        assert_eq!(Tab::Years.label(), "Year Selection");
        assert_eq!(Tab::Timeline.label(), "Timeline");
    }

    #[test]
    fn test_tab_next_prev_wrap() {
        assert_eq!(Tab::Map.next(), Tab::Winners);
        assert_eq!(Tab::Timeline.next(), Tab::Map);
        assert_eq!(Tab::Map.prev(), Tab::Timeline);
        assert_eq!(Tab::Years.prev(), Tab::Winners);
    }

    #[test]
    fn test_tab_default() {
        assert_eq!(Tab::default(), Tab::Map);
    }

    #[test]
    fn test_tab_from_number() {
        assert_eq!(Tab::from_number(1), Some(Tab::Map));
        assert_eq!(Tab::from_number(4), Some(Tab::Timeline));
        assert_eq!(Tab::from_number(0), None);
        assert_eq!(Tab::from_number(5), None);
    }

    #[test]
    fn test_tab_bar_brackets_selected() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        TabBar::new(Tab::Years, Theme::Dark).render(area, &mut buf);

        let text = row_text(&buf, 60);
        assert!(text.contains("[Year Selection]"));
        assert!(text.contains("Winners"));
        assert!(!text.contains("[Map]"));
    }
}
