//! Terminal theme detection and color definitions

use ratatui::style::Color;

use crate::config::ThemeChoice;
use crate::types::Metric;

/// Palette for per-country timeline bars (ANSI 256)
const DARK_PALETTE: [u8; 8] = [39, 214, 41, 203, 177, 220, 81, 209];
const LIGHT_PALETTE: [u8; 8] = [25, 130, 28, 124, 90, 136, 30, 166];

/// Terminal color scheme (dark or light background)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Auto-detect terminal theme from background luminance.
    /// Must be called **before** entering raw mode (ratatui::init).
    /// Falls back to Dark if detection fails.
    pub fn detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.6 => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Resolve a settings choice; only `Auto` probes the terminal
    pub fn resolve(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Auto => Self::detect(),
            ThemeChoice::Dark => Self::Dark,
            ThemeChoice::Light => Self::Light,
        }
    }

    /// Primary text color (headers, body text)
    pub fn text(self) -> Color {
        match self {
            Self::Dark => Color::White,
            Self::Light => Color::Black,
        }
    }

    /// Active/accent color (selected tabs, keybinding keys, interactive elements)
    pub fn accent(self) -> Color {
        match self {
            Self::Dark => Color::Cyan,
            Self::Light => Color::Indexed(25), // dark blue (ANSI 256)
        }
    }

    /// Secondary/muted text (separators, inactive tabs, hints)
    pub fn muted(self) -> Color {
        match self {
            Self::Dark => Color::DarkGray,
            Self::Light => Color::Gray,
        }
    }

    /// Year text color
    pub fn year(self) -> Color {
        match self {
            Self::Dark => Color::Yellow,
            Self::Light => Color::Indexed(130), // dark orange/yellow (ANSI 256)
        }
    }

    /// Bar color
    pub fn bar(self) -> Color {
        match self {
            Self::Dark => Color::Green,
            Self::Light => Color::Indexed(22), // dark green (ANSI 256)
        }
    }

    /// Error/negative indicator color
    pub fn error(self) -> Color {
        match self {
            Self::Dark => Color::Red,
            Self::Light => Color::Indexed(124), // dark red (ANSI 256)
        }
    }

    /// Background of the highlighted list row
    pub fn selection(self) -> Color {
        match self {
            Self::Dark => Color::Indexed(238),
            Self::Light => Color::Indexed(252),
        }
    }

    /// Bar color for each map metric
    pub fn metric_color(self, metric: Metric) -> Color {
        match metric {
            Metric::Wins => self.bar(),
            Metric::RunnerUps => self.year(),
            Metric::TotalFinals => self.accent(),
        }
    }

    /// Stable color for a country name, so a winner keeps its color
    /// across the timeline
    pub fn country_color(self, country: &str) -> Color {
        let hash = country
            .bytes()
            .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize));
        let palette = match self {
            Self::Dark => &DARK_PALETTE,
            Self::Light => &LIGHT_PALETTE,
        };
        Color::Indexed(palette[hash % palette.len()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_theme_colors() {
        let t = Theme::Dark;
        assert_eq!(t.text(), Color::White);
        assert_eq!(t.accent(), Color::Cyan);
        assert_eq!(t.muted(), Color::DarkGray);
        assert_eq!(t.year(), Color::Yellow);
        assert_eq!(t.bar(), Color::Green);
        assert_eq!(t.error(), Color::Red);
    }

    #[test]
    fn test_light_theme_colors() {
        let t = Theme::Light;
        assert_eq!(t.text(), Color::Black);
        assert_eq!(t.accent(), Color::Indexed(25));
        assert_eq!(t.muted(), Color::Gray);
        assert_eq!(t.year(), Color::Indexed(130));
        assert_eq!(t.bar(), Color::Indexed(22));
        assert_eq!(t.error(), Color::Indexed(124));
    }

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn test_resolve_forced_choice() {
        assert_eq!(Theme::resolve(ThemeChoice::Dark), Theme::Dark);
        assert_eq!(Theme::resolve(ThemeChoice::Light), Theme::Light);
    }

    #[test]
    fn test_country_color_stable() {
        let t = Theme::Dark;
        assert_eq!(t.country_color("Brazil"), t.country_color("Brazil"));
        assert!(matches!(t.country_color("Italy"), Color::Indexed(_)));
    }

    #[test]
    fn test_metric_colors_distinct() {
        let t = Theme::Dark;
        assert_ne!(t.metric_color(Metric::Wins), t.metric_color(Metric::RunnerUps));
        assert_ne!(
            t.metric_color(Metric::RunnerUps),
            t.metric_color(Metric::TotalFinals)
        );
    }
}
