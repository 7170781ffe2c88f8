use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Query",
        &[
            (" Ctrl+Enter / Ctrl+R / F5", "Run the query"),
            (" Ctrl+N / Ctrl+P", "Next / previous sample"),
            (" Ctrl+E", "Export results as CSV"),
        ],
    ),
    (
        "Panels",
        &[
            (" Ctrl+K", "Command palette"),
            (" Ctrl+H / F3", "Query history"),
            (" Ctrl+B", "Query builder"),
            (" Tab / Shift+Tab", "Next / previous builder field"),
            (" ← / →", "Cycle builder table"),
        ],
    ),
    (
        "General",
        &[
            (" Ctrl+D", "Toggle dark mode"),
            (" F1 / ?", "Show this help"),
            (" Ctrl+X", "Dismiss latest notification"),
            (" Esc", "Close panel"),
            (" Ctrl+Q", "Quit"),
        ],
    ),
];

pub struct HelpModal<'a> {
    pub theme: &'a Theme,
}

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let help_area = centered_rect(70, 80, area);
        if help_area.width == 0 || help_area.height == 0 {
            return;
        }
        draw_drop_shadow(buf, help_area, area);
        Clear.render(help_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" HELP - KEYBINDINGS ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus)
            .style(self.theme.modal);

        let key_style = self.theme.footer_segment_key;
        let desc_style = self.theme.list_item;
        let category_style = self.theme.header_item;

        let mut rows = Vec::new();
        for (i, (category, keys)) in SECTIONS.iter().enumerate() {
            if i > 0 {
                rows.push(Row::new(vec![Cell::from(""), Cell::from("")]));
            }
            rows.push(Row::new(vec![
                Cell::from(Span::styled(*category, category_style)),
                Cell::from(""),
            ]));
            for (key, desc) in keys.iter() {
                rows.push(Row::new(vec![
                    Cell::from(Span::styled(*key, key_style)),
                    Cell::from(Span::styled(*desc, desc_style)),
                ]));
            }
        }

        Table::new(
            rows,
            [Constraint::Percentage(40), Constraint::Percentage(60)],
        )
        .block(block)
        .render(help_area, buf);
    }
}
