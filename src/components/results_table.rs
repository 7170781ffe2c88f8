use crate::domain::models::{CellValue, ResultSet};
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, Widget},
};

const MAX_COLUMN_WIDTH: usize = 40;

pub struct ResultsTable<'a> {
    pub result: &'a ResultSet,
    pub theme: &'a Theme,
    pub is_running: bool,
    pub frame_count: u64,
}

impl ResultsTable<'_> {
    fn column_widths(&self) -> Vec<Constraint> {
        self.result
            .columns
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let widest_cell = self
                    .result
                    .rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.to_string().chars().count())
                    .max()
                    .unwrap_or(0);
                let width = widest_cell.max(name.chars().count()).min(MAX_COLUMN_WIDTH);
                // Bounded by MAX_COLUMN_WIDTH, so the cast cannot truncate.
                Constraint::Length(width as u16 + 1)
            })
            .collect()
    }
}

impl Widget for ResultsTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let rows_label = format!(" {} rows ", self.result.row_count());
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" RESULTS ", theme.header_item),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(Span::styled(rows_label, theme.dimmed)).right_aligned())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border);

        if self.is_running {
            let text = vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("{} Running query...", glyphs::spinner_frame(self.frame_count)),
                    theme.input_active,
                )),
            ];
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(block)
                .render(area, buf);
            return;
        }

        if self.result.columns.is_empty() {
            Paragraph::new(Line::from(Span::styled("No results", theme.dimmed)))
                .alignment(Alignment::Center)
                .block(block)
                .render(area, buf);
            return;
        }

        let header = Row::new(
            self.result
                .columns
                .iter()
                .map(|c| Cell::from(Span::styled(c.clone(), theme.table_header))),
        );

        let rows = self.result.rows.iter().enumerate().map(|(i, row)| {
            let cells = row.iter().map(|cell| {
                let style = match cell {
                    CellValue::Int(_) | CellValue::Float(_) => theme.number,
                    CellValue::Text(_) => theme.table_row,
                };
                Cell::from(Span::styled(cell.to_string(), style))
            });
            let style = if i % 2 == 0 {
                theme.table_row
            } else {
                theme.table_row_alt
            };
            Row::new(cells).style(style)
        });

        Table::new(rows, self.column_widths())
            .header(header)
            .column_spacing(2)
            .block(block)
            .render(area, buf);
    }
}
