//! Product revenue table widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::services::format_revenue;
use crate::tui::state::TableView;
use crate::tui::theme::Theme;

/// Column widths: Product Name(32) + Total Revenue(16) = 48
const NAME_WIDTH: usize = 32;
const REVENUE_WIDTH: usize = 16;
const TABLE_WIDTH: u16 = (NAME_WIDTH + REVENUE_WIDTH) as u16;

/// Maximum scroll offset for a row count
pub fn max_scroll(row_count: usize) -> usize {
    row_count.saturating_sub(1)
}

/// Product table: header, filtered rows, footer total
pub struct ProductTable<'a> {
    view: &'a TableView<'a>,
    scroll: usize,
    theme: Theme,
}

impl<'a> ProductTable<'a> {
    pub fn new(view: &'a TableView<'a>, scroll: usize, theme: Theme) -> Self {
        Self {
            view,
            scroll,
            theme,
        }
    }

    /// Calculate horizontal offset to center the table
    fn table_offset(&self, area_width: u16) -> u16 {
        area_width.saturating_sub(TABLE_WIDTH) / 2
    }

    fn render_separator(&self, area: Rect, buf: &mut Buffer) {
        let offset = self.table_offset(area.width);
        let line = "─".repeat(TABLE_WIDTH.min(area.width) as usize);
        buf.set_string(
            area.x + offset,
            area.y,
            &line,
            Style::default().fg(self.theme.muted()),
        );
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let offset = self.table_offset(area.width);

        let header = Line::from(vec![
            Span::styled(
                format!("{:<NAME_WIDTH$}", "Product Name"),
                Style::default()
                    .fg(self.theme.text())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:>REVENUE_WIDTH$}", "Total Revenue"),
                Style::default()
                    .fg(self.theme.text())
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        Paragraph::new(header).alignment(Alignment::Left).render(
            Rect {
                x: area.x + offset,
                y: area.y,
                width: TABLE_WIDTH.min(area.width),
                height: 1,
            },
            buf,
        );
    }

    fn render_rows(&self, area: Rect, buf: &mut Buffer) {
        let offset = self.table_offset(area.width);

        for (i, product) in self
            .view
            .rows
            .iter()
            .skip(self.scroll)
            .take(area.height as usize)
            .enumerate()
        {
            let y = area.y + i as u16;

            // Truncate long names (UTF-8 safe)
            let name = if product.name.chars().count() > NAME_WIDTH - 2 {
                format!(
                    "{}…",
                    product.name.chars().take(NAME_WIDTH - 3).collect::<String>()
                )
            } else {
                product.name.clone()
            };

            let row = Line::from(vec![
                Span::styled(
                    format!("{:<NAME_WIDTH$}", name),
                    Style::default().fg(self.theme.text()),
                ),
                Span::styled(
                    format!("{:>REVENUE_WIDTH$}", format_revenue(product.revenue)),
                    Style::default().fg(self.theme.revenue()),
                ),
            ]);

            Paragraph::new(row).alignment(Alignment::Left).render(
                Rect {
                    x: area.x + offset,
                    y,
                    width: TABLE_WIDTH.min(area.width),
                    height: 1,
                },
                buf,
            );
        }
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let offset = self.table_offset(area.width);

        let footer = Line::from(vec![
            Span::styled(
                "Total Revenue: ",
                Style::default()
                    .fg(self.theme.text())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format_revenue(self.view.total),
                Style::default()
                    .fg(self.theme.revenue())
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        Paragraph::new(footer).alignment(Alignment::Left).render(
            Rect {
                x: area.x + offset,
                y: area.y,
                width: TABLE_WIDTH.min(area.width),
                height: 1,
            },
            buf,
        );
    }
}

impl Widget for ProductTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height < 5 {
            return;
        }

        let chunks = Layout::vertical([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Separator
            Constraint::Min(1),    // Rows
            Constraint::Length(1), // Separator
            Constraint::Length(1), // Footer total
        ])
        .split(area);

        self.render_header(chunks[0], buf);
        self.render_separator(chunks[1], buf);
        self.render_rows(chunks[2], buf);
        self.render_separator(chunks[3], buf);
        self.render_footer(chunks[4], buf);
    }
}
