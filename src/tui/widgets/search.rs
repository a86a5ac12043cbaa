//! Search input line widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::tui::theme::Theme;

/// Input label shown before the search term
const LABEL: &str = "Filter by product name: ";

/// Search input line with a live match count
pub struct SearchInput<'a> {
    term: &'a str,
    matched: usize,
    total: usize,
    theme: Theme,
}

impl<'a> SearchInput<'a> {
    pub fn new(term: &'a str, matched: usize, total: usize, theme: Theme) -> Self {
        Self {
            term,
            matched,
            total,
            theme,
        }
    }

    /// Match count text, e.g. "3 of 12 products"
    pub fn match_count(&self) -> String {
        format!("{} of {} products", self.matched, self.total)
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let count = self.match_count();
        let input = Line::from(vec![
            Span::styled(LABEL, Style::default().fg(self.theme.muted())),
            Span::styled(
                self.term,
                Style::default()
                    .fg(self.theme.accent())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("▏", Style::default().fg(self.theme.accent())),
        ]);
        Paragraph::new(input).render(area, buf);

        // Right-aligned match count, only if it fits next to the input
        let used = LABEL.len() + self.term.chars().count() + 1;
        if used + count.len() + 2 <= area.width as usize {
            let x = area.x + area.width - count.len() as u16;
            buf.set_string(x, area.y, &count, Style::default().fg(self.theme.muted()));
        }
    }
}
