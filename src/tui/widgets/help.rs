//! Help popup widget - displays keyboard shortcuts

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::tui::theme::Theme;

/// Version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Width and height of the help popup
const POPUP_WIDTH: u16 = 44;
const POPUP_HEIGHT: u16 = 18;

/// Help popup widget showing keyboard shortcuts
pub struct HelpPopup {
    theme: Theme,
}

impl HelpPopup {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Calculate centered popup area
    pub fn centered_area(area: Rect) -> Rect {
        let x = area.x + (area.width.saturating_sub(POPUP_WIDTH)) / 2;
        let y = area.y + (area.height.saturating_sub(POPUP_HEIGHT)) / 2;
        Rect {
            x,
            y,
            width: POPUP_WIDTH.min(area.width),
            height: POPUP_HEIGHT.min(area.height),
        }
    }

    fn render_section_header(&self, area: Rect, buf: &mut Buffer, label: &str) {
        Paragraph::new(Line::from(Span::styled(
            label.to_string(),
            Style::default()
                .fg(self.theme.year())
                .add_modifier(Modifier::BOLD),
        )))
        .render(area, buf);
    }
}

impl Default for HelpPopup {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl Widget for HelpPopup {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Clear the area first (for overlay effect)
        Clear.render(area, buf);

        let title = format!(" cupfinals v{} ", VERSION);
        let block = Block::default()
            .title(title)
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent()));

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // [0] Padding
            Constraint::Length(1), // [1] Navigation header
            Constraint::Length(1), // [2] Separator
            Constraint::Length(1), // [3] Tab/Shift+Tab
            Constraint::Length(1), // [4] 1-4
            Constraint::Length(1), // [5] Up/Down
            Constraint::Length(1), // [6] Left/Right
            Constraint::Length(1), // [7] c
            Constraint::Length(1), // [8] Padding
            Constraint::Length(1), // [9] General header
            Constraint::Length(1), // [10] Separator
            Constraint::Length(1), // [11] q/Esc
            Constraint::Length(1), // [12] ?
            Constraint::Length(1), // [13] Padding
            Constraint::Length(1), // [14] Close hint
            Constraint::Min(0),
        ])
        .split(inner);

        let sep = "─".repeat(inner.width as usize);
        let sep_style = Style::default().fg(self.theme.muted());

        self.render_section_header(chunks[1], buf, "Navigation");
        buf.set_string(chunks[2].x, chunks[2].y, &sep, sep_style);
        render_keybinding(chunks[3], buf, "Tab / Shift+Tab", "Switch view", self.theme);
        render_keybinding(chunks[4], buf, "1-4", "Jump to view", self.theme);
        render_keybinding(chunks[5], buf, "Up/Down or j/k", "Select / scroll", self.theme);
        render_keybinding(chunks[6], buf, "Left/Right or m", "Map metric", self.theme);
        render_keybinding(chunks[7], buf, "c / Backspace", "Clear selection", self.theme);

        self.render_section_header(chunks[9], buf, "General");
        buf.set_string(chunks[10].x, chunks[10].y, &sep, sep_style);
        render_keybinding(chunks[11], buf, "q / Esc", "Quit", self.theme);
        render_keybinding(chunks[12], buf, "?", "Toggle help", self.theme);

        Paragraph::new(Line::from(Span::styled(
            "Press ? to close",
            Style::default().fg(self.theme.muted()),
        )))
        .alignment(Alignment::Center)
        .render(chunks[14], buf);
    }
}

/// Render a single keybinding line
fn render_keybinding(area: Rect, buf: &mut Buffer, key: &str, desc: &str, theme: Theme) {
    let line = Line::from(vec![
        Span::styled(
            format!("  {:<18}", key),
            Style::default().fg(theme.accent()),
        ),
        Span::styled(desc, Style::default().fg(theme.text())),
    ]);
    Paragraph::new(line)
        .alignment(Alignment::Left)
        .render(area, buf);
}
