use crate::app::state::{BuilderField, QueryBuilderState};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

pub struct QueryBuilderPanel<'a> {
    pub state: &'a QueryBuilderState,
    pub theme: &'a Theme,
}

impl Widget for QueryBuilderPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        Clear.render(area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" QUERY BUILDER ", theme.header_active),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled("Tab", theme.footer_segment_key),
                Span::raw(": field "),
                Span::styled("Enter", theme.footer_segment_key),
                Span::raw(": generate "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_focus)
            .style(theme.modal);

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let rows = u16::try_from(BuilderField::ALL.len() * 2).unwrap_or(u16::MAX);
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(rows), // Fields
                Constraint::Length(1),    // Separator
                Constraint::Min(0),       // Preview
            ])
            .split(inner);

        let mut lines = Vec::new();
        for field in BuilderField::ALL {
            let focused = self.state.focus == field;
            let label_style = if focused {
                theme.input_active
            } else {
                theme.dimmed
            };
            lines.push(Line::from(Span::styled(
                format!(" {}", field.label()),
                label_style,
            )));

            let value = self.state.value_of(field);
            let value_line = match (field, focused) {
                (BuilderField::Table, true) => format!("   ◀ {value} ▶"),
                (_, true) => format!("   {value}_"),
                (_, false) if value.is_empty() => "   -".to_string(),
                _ => format!("   {value}"),
            };
            let value_style = if focused {
                theme.highlight
            } else {
                theme.list_item
            };
            lines.push(Line::from(Span::styled(value_line, value_style)));
        }
        Paragraph::new(lines).render(layout[0], buf);

        let separator = "─".repeat(layout[1].width as usize);
        buf.set_string(layout[1].x, layout[1].y, separator, theme.border);

        Paragraph::new(vec![
            Line::from(Span::styled(" Preview", theme.dimmed)),
            Line::from(Span::styled(
                format!(" {}", self.state.form.generate()),
                theme.editor,
            )),
        ])
        .wrap(Wrap { trim: false })
        .render(layout[2], buf);
    }
}
